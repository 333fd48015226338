use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::cube::cubiecube::*;

/// Total number of ways to turn a face
pub const NUM_TURN_WISES: usize = 3;

/// The faces you can turn on a cube.
/// The order is the index order of `MOVES` and `TURN_TABLE`.
#[derive(
	Clone,
	Copy,
	PartialEq,
	Eq,
	Hash,
	Debug,
	Serialize,
	Deserialize,
	strum::EnumIter,
	strum::EnumCount,
	strum::Display,
	strum::FromRepr,
)]
#[repr(usize)]
pub enum Face {
	U,
	R,
	F,
	D,
	L,
	B,
}

impl Face {
	/// Parse a face letter. Returns None for anything but U, R, F, D, L and B.
	pub const fn from_char(c: char) -> Option<Self> {
		match c {
			'U' => Some(Face::U),
			'R' => Some(Face::R),
			'F' => Some(Face::F),
			'D' => Some(Face::D),
			'L' => Some(Face::L),
			'B' => Some(Face::B),
			_ => None,
		}
	}

	/// The quarter turn of this face, as it acts on a solved cube
	pub const fn element(self) -> CubieCube {
		MOVES[self as usize]
	}
}

/// You can either turn a face in (Counter-)Clockwise and Half turns.
/// The discriminant is the number of quarter turns.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, strum::EnumIter)]
#[repr(u8)]
pub enum TurnWise {
	Clockwise = 1,
	Double = 2,
	CounterClockwise = 3,
}

impl TurnWise {
	/// Number of quarter turns
	pub const fn power(self) -> u8 {
		self as u8
	}

	/// Reduce a quarter turn count mod 4.
	/// A multiple of 4 is no turn at all, so there is no TurnWise for it.
	pub const fn from_power(power: u8) -> Option<Self> {
		match power % 4 {
			1 => Some(TurnWise::Clockwise),
			2 => Some(TurnWise::Double),
			3 => Some(TurnWise::CounterClockwise),
			_ => None,
		}
	}
}

impl std::fmt::Display for TurnWise {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			TurnWise::Clockwise => write!(f, ""),
			TurnWise::Double => write!(f, "2"),
			TurnWise::CounterClockwise => write!(f, "'"),
		}
	}
}

/// An entire turn
///
/// face: The face to turn
/// wise: See the definition of TurnWise
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Turn {
	pub face: Face,
	pub wise: TurnWise,
}

impl Turn {
	/// Iterate over all 18 face turns
	pub fn all() -> impl Iterator<Item = Turn> {
		Face::iter().flat_map(|face| TurnWise::iter().map(move |wise| Turn { face, wise }))
	}

	/// Turn itself to the turn, which negates itself.
	/// In terms of group theory, convert itself to the inverse element.
	pub fn invert(&mut self) {
		match self.wise {
			TurnWise::CounterClockwise => self.wise = TurnWise::Clockwise,
			TurnWise::Clockwise => self.wise = TurnWise::CounterClockwise,
			TurnWise::Double => {}
		}
	}

	/// The group element of this turn: the face's quarter turn taken `power` times
	pub const fn element(self) -> CubieCube {
		TURN_TABLE[self.face as usize][self.wise.power() as usize - 1]
	}
}

impl std::fmt::Display for Turn {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "{}{}", self.face, self.wise)
	}
}

/// Notation that couldn't be parsed
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
	#[error("Unexpected move face '{found}' in: {input}")]
	UnexpectedChar { found: char, input: String },
	#[error("Expected a single turn but found {count} in: {input}")]
	TurnCount { count: usize, input: String },
}

impl FromStr for Turn {
	type Err = ParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let turns = parse_turns(s)?;
		match turns.as_slice() {
			[turn] => Ok(*turn),
			_ => Err(ParseError::TurnCount {
				count: turns.len(),
				input: s.to_string(),
			}),
		}
	}
}

/// Parse sequences like "R2B2RFR'B2RF'R" or "R2 B2 R F".
///
/// Whitespace is ignored. Every turn starts with a face letter,
/// optionally followed by '2' (half turn) or '\'' (counter clockwise).
pub fn parse_turns(sequence: &str) -> Result<Vec<Turn>, ParseError> {
	let mut chars = sequence.chars().filter(|c| !c.is_whitespace()).peekable();
	let mut out = Vec::new();

	while let Some(c) = chars.next() {
		let face = Face::from_char(c).ok_or_else(|| ParseError::UnexpectedChar {
			found: c,
			input: sequence.to_string(),
		})?;

		let wise = match chars.peek() {
			Some('2') => TurnWise::Double,
			Some('\'') => TurnWise::CounterClockwise,
			_ => TurnWise::Clockwise,
		};
		if wise != TurnWise::Clockwise {
			chars.next();
		}

		out.push(Turn { face, wise });
	}

	Ok(out)
}

/// Format turns in the canonical notation, separated by single spaces
pub fn format_turns(turns: &[Turn]) -> String {
	turns
		.iter()
		.map(Turn::to_string)
		.collect::<Vec<_>>()
		.join(" ")
}

/// Build the cube a sequence turns the solved cube into
pub fn build_from_sequence(sequence: &str) -> Result<CubieCube, ParseError> {
	let turns = parse_turns(sequence)?;
	log::trace!("Building {} turns from \"{}\"", turns.len(), sequence);
	Ok(CubieCube::from_turns(&turns))
}

/// Return the sequence which undoes the given one.
///
/// Example: "R U2 F'" -> "F U2 R'"
pub fn invert_sequence(sequence: &str) -> Result<String, ParseError> {
	let inverse: Vec<Turn> = parse_turns(sequence)?
		.into_iter()
		.rev()
		.filter_map(|turn| {
			TurnWise::from_power(4 - turn.wise.power()).map(|wise| Turn {
				face: turn.face,
				wise,
			})
		})
		.collect();

	Ok(format_turns(&inverse))
}

/// Concatenate sequences, skipping blank ones. No parsing happens here.
pub fn compose_sequences<S: AsRef<str>>(sequences: &[S]) -> String {
	sequences
		.iter()
		.map(AsRef::as_ref)
		.filter(|s| !s.trim().is_empty())
		.collect::<Vec<_>>()
		.join(" ")
}

/// Generate a random sequence of the given length
pub fn random_sequence(length: usize) -> Vec<Turn> {
	let turns: Vec<Turn> = Turn::all().collect();
	let mut rng = rand::thread_rng();

	(0..length)
		.map(|_| turns[rng.gen_range(0..turns.len())])
		.collect()
}
