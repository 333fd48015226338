use std::{
	fs::File,
	io::{BufReader, BufWriter, Write},
	ops::Mul,
	path::Path,
};

use bit_set::BitSet;
use const_for::const_for;
use serde::{Deserialize, Serialize};

use crate::cube::{turn::*, *};

pub type Ori = u8;

/// The cube on the cubie level, as Kociemba describes it in
/// https://kociemba.org/math/cubielevel.htm
///
/// `cp[i]` is the corner cubie at position `i`, `co[i]` its twist (mod 3).
/// `ep[i]` is the edge cubie at position `i`, `eo[i]` its flip (mod 2).
///
/// Any permutation/orientation combination can be stored, including
/// ones no sequence of turns reaches.
#[derive(PartialEq, Eq, Clone, Copy, Hash, Debug, Serialize, Deserialize)]
pub struct CubieCube {
	pub cp: [Corner; NUM_CORNERS],
	pub co: [Ori; NUM_CORNERS],
	pub ep: [Edge; NUM_EDGES],
	pub eo: [Ori; NUM_EDGES],
}

#[rustfmt::skip]
const SOLVED: CubieCube = CubieCube {
	cp: [
		Corner::URF, Corner::UFL, Corner::ULB, Corner::UBR,
		Corner::DFR, Corner::DLF, Corner::DBL, Corner::DRB,
	],
	co: [0; NUM_CORNERS],
	ep: [
		Edge::UR, Edge::UF, Edge::UL, Edge::UB,
		Edge::DR, Edge::DF, Edge::DL, Edge::DB,
		Edge::FR, Edge::FL, Edge::BL, Edge::BR,
	],
	eo: [0; NUM_EDGES],
};

// ===== Move elements =====
// Each one is the effect of a quarter turn on the solved cube.

#[rustfmt::skip]
pub const MOVE_U: CubieCube = CubieCube {
	cp: [
		Corner::UFL, Corner::ULB, Corner::UBR, Corner::URF,
		Corner::DFR, Corner::DLF, Corner::DBL, Corner::DRB,
	],
	co: [0, 0, 0, 0, 0, 0, 0, 0],
	ep: [
		Edge::UF, Edge::UL, Edge::UB, Edge::UR,
		Edge::DR, Edge::DF, Edge::DL, Edge::DB,
		Edge::FR, Edge::FL, Edge::BL, Edge::BR,
	],
	eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

#[rustfmt::skip]
pub const MOVE_R: CubieCube = CubieCube {
	cp: [
		Corner::DFR, Corner::UFL, Corner::ULB, Corner::URF,
		Corner::DRB, Corner::DLF, Corner::DBL, Corner::UBR,
	],
	co: [2, 0, 0, 1, 1, 0, 0, 2],
	ep: [
		Edge::FR, Edge::UF, Edge::UL, Edge::UB,
		Edge::BR, Edge::DF, Edge::DL, Edge::DB,
		Edge::DR, Edge::FL, Edge::BL, Edge::UR,
	],
	eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

#[rustfmt::skip]
pub const MOVE_F: CubieCube = CubieCube {
	cp: [
		Corner::UFL, Corner::DLF, Corner::ULB, Corner::UBR,
		Corner::URF, Corner::DFR, Corner::DBL, Corner::DRB,
	],
	co: [1, 2, 0, 0, 2, 1, 0, 0],
	ep: [
		Edge::UR, Edge::FL, Edge::UL, Edge::UB,
		Edge::DR, Edge::FR, Edge::DL, Edge::DB,
		Edge::UF, Edge::DF, Edge::BL, Edge::BR,
	],
	eo: [0, 1, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0],
};

#[rustfmt::skip]
pub const MOVE_D: CubieCube = CubieCube {
	cp: [
		Corner::URF, Corner::UFL, Corner::ULB, Corner::UBR,
		Corner::DLF, Corner::DBL, Corner::DRB, Corner::DFR,
	],
	co: [0, 0, 0, 0, 0, 0, 0, 0],
	ep: [
		Edge::UR, Edge::UF, Edge::UL, Edge::UB,
		Edge::DF, Edge::DL, Edge::DB, Edge::DR,
		Edge::FR, Edge::FL, Edge::BL, Edge::BR,
	],
	eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

#[rustfmt::skip]
pub const MOVE_L: CubieCube = CubieCube {
	cp: [
		Corner::URF, Corner::ULB, Corner::DBL, Corner::UBR,
		Corner::DFR, Corner::UFL, Corner::DLF, Corner::DRB,
	],
	co: [0, 1, 2, 0, 0, 2, 1, 0],
	ep: [
		Edge::UR, Edge::UF, Edge::BL, Edge::UB,
		Edge::DR, Edge::DF, Edge::FL, Edge::DB,
		Edge::FR, Edge::UL, Edge::DL, Edge::BR,
	],
	eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

#[rustfmt::skip]
pub const MOVE_B: CubieCube = CubieCube {
	cp: [
		Corner::URF, Corner::UFL, Corner::UBR, Corner::DRB,
		Corner::DFR, Corner::DLF, Corner::ULB, Corner::DBL,
	],
	co: [0, 0, 1, 2, 0, 0, 2, 1],
	ep: [
		Edge::UR, Edge::UF, Edge::UL, Edge::BR,
		Edge::DR, Edge::DF, Edge::DL, Edge::BL,
		Edge::FR, Edge::FL, Edge::UB, Edge::DB,
	],
	eo: [0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 1],
};

/// The quarter turns, indexed by `Face`
pub const MOVES: [CubieCube; NUM_FACES] = [MOVE_U, MOVE_R, MOVE_F, MOVE_D, MOVE_L, MOVE_B];

const fn generate_turn_table() -> [[CubieCube; NUM_TURN_WISES]; NUM_FACES] {
	let mut out = [[SOLVED; NUM_TURN_WISES]; NUM_FACES];

	const_for!(i in 0..NUM_FACES => {
		out[i][0] = MOVES[i];
		out[i][1] = out[i][0].multiply(&MOVES[i]);
		out[i][2] = out[i][1].multiply(&MOVES[i]);
	});

	out
}

/// `TURN_TABLE[face][power - 1]` is the quarter turn of `face` taken `power` times
pub const TURN_TABLE: [[CubieCube; NUM_TURN_WISES]; NUM_FACES] = generate_turn_table();

impl Default for CubieCube {
	fn default() -> Self {
		Self::solved()
	}
}

impl CubieCube {
	/// The identity element
	pub const fn solved() -> Self {
		SOLVED
	}

	/// Return `self * m`: the cube you get by applying `m` to `self`.
	/// `m` is given by its effect on the solved cube.
	///
	/// The cubie at position `i` afterwards is the one `self` had at the
	/// position `m` takes position `i` from; the twists add up.
	pub const fn multiply(&self, m: &CubieCube) -> CubieCube {
		let mut out = SOLVED;

		const_for!(i in 0..NUM_CORNERS => {
			let from = m.cp[i] as usize;
			out.cp[i] = self.cp[from];
			out.co[i] = (self.co[from] + m.co[i]) % 3;
		});

		const_for!(i in 0..NUM_EDGES => {
			let from = m.ep[i] as usize;
			out.ep[i] = self.ep[from];
			out.eo[i] = (self.eo[from] + m.eo[i]) % 2;
		});

		out
	}

	/// Apply the turns to the solved cube, one after another
	pub fn from_turns(turns: &[Turn]) -> Self {
		let mut cube = Self::solved();
		cube.apply_turns(turns.iter().copied());
		cube
	}

	/// Build a cube from raw cubie indices and orientations.
	///
	/// Fails if a permutation isn't a bijection or an orientation is out of
	/// range. Parity and twist sums are not checked.
	pub fn from_parts(
		cp: [usize; NUM_CORNERS],
		co: [Ori; NUM_CORNERS],
		ep: [usize; NUM_EDGES],
		eo: [Ori; NUM_EDGES],
	) -> Result<Self, CubeError> {
		let mut cube = Self::solved();

		for (pos, &c) in cp.iter().enumerate() {
			cube.cp[pos] = Corner::from_repr(c).ok_or_else(|| {
				CubeError::InvalidState(format!("corner index {} is out of range", c))
			})?;
		}
		for (pos, &e) in ep.iter().enumerate() {
			cube.ep[pos] = Edge::from_repr(e).ok_or_else(|| {
				CubeError::InvalidState(format!("edge index {} is out of range", e))
			})?;
		}
		cube.co = co;
		cube.eo = eo;

		cube.validate()?;
		Ok(cube)
	}

	/// Check that both permutations are bijections and all orientations
	/// are in range.
	pub fn validate(&self) -> Result<(), CubeError> {
		fn check_bijection<I>(name: &str, indices: I) -> Result<(), CubeError>
		where
			I: Iterator<Item = usize>,
		{
			let mut seen = BitSet::new();
			for idx in indices {
				if !seen.insert(idx) {
					return Err(CubeError::InvalidState(format!(
						"{} cubie {} appears more than once",
						name, idx
					)));
				}
			}
			Ok(())
		}

		check_bijection("corner", self.cp.iter().map(|&c| c as usize))?;
		check_bijection("edge", self.ep.iter().map(|&e| e as usize))?;

		if let Some((pos, o)) = self.co.iter().enumerate().find(|&(_, &o)| o >= 3) {
			return Err(CubeError::InvalidState(format!(
				"corner orientation {} at {} is not in 0..3",
				o,
				Corner::from_repr(pos).unwrap_or_default()
			)));
		}
		if let Some((pos, o)) = self.eo.iter().enumerate().find(|&(_, &o)| o >= 2) {
			return Err(CubeError::InvalidState(format!(
				"edge orientation {} at {} is not in 0..2",
				o,
				Edge::from_repr(pos).unwrap_or_default()
			)));
		}

		Ok(())
	}

	/// Get the corner and orientation at position 'c'
	pub const fn corner(&self, c: Corner) -> (Corner, Ori) {
		(self.cp[c as usize], self.co[c as usize])
	}

	/// Get the edge and orientation at position 'e'
	pub const fn edge(&self, e: Edge) -> (Edge, Ori) {
		(self.ep[e as usize], self.eo[e as usize])
	}

	pub fn is_solved(&self) -> bool {
		*self == SOLVED
	}

	// ===== Storage =====

	/// Write the cube to the given file
	pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), CubeError> {
		let file = File::create(path.as_ref())?;
		let mut writer = BufWriter::new(file);
		bincode::serialize_into(&mut writer, self)?;
		writer.flush()?;
		log::debug!("Saved cube to {}", path.as_ref().display());
		Ok(())
	}

	/// Read a cube written by `save`. The decoded cube is validated.
	pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CubeError> {
		let file = File::open(path.as_ref())?;
		let cube: CubieCube = bincode::deserialize_from(BufReader::new(file))?;
		cube.validate()?;
		log::debug!("Loaded cube from {}", path.as_ref().display());
		Ok(cube)
	}
}

impl RubiksCube for CubieCube {
	fn apply_turn(&mut self, turn: Turn) {
		*self = self.multiply(&turn.element());
	}
}

impl Mul for CubieCube {
	type Output = CubieCube;

	fn mul(self, rhs: CubieCube) -> CubieCube {
		self.multiply(&rhs)
	}
}

impl Mul<&CubieCube> for &CubieCube {
	type Output = CubieCube;

	fn mul(self, rhs: &CubieCube) -> CubieCube {
		self.multiply(rhs)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::error::Error;

	fn random_cube(length: usize) -> CubieCube {
		CubieCube::from_turns(&random_sequence(length))
	}

	#[test]
	/// Check that all basic turnings result to neutral after 4 turns
	fn quarter_turn_closure() {
		for (face, m) in MOVES.iter().enumerate() {
			let mut cube = CubieCube::solved();
			for i in 0..4 {
				if i > 0 {
					assert_ne!(cube, CubieCube::solved(), "Face {} has a short order", face);
				}
				cube = cube.multiply(m);
			}
			assert!(
				cube.is_solved(),
				"Face {} doesn't result to neutral element after 4 turns.",
				face
			);
		}
	}

	#[test]
	/// The move elements are well formed
	fn move_elements_valid() -> Result<(), Box<dyn Error>> {
		for m in MOVES.iter() {
			m.validate()?;
			// Real turns keep the twist and flip sums
			assert_eq!(m.co.iter().map(|&o| o as u32).sum::<u32>() % 3, 0);
			assert_eq!(m.eo.iter().map(|&o| o as u32).sum::<u32>() % 2, 0);
		}
		Ok(())
	}

	#[test]
	fn turn_table_is_repeated_multiplication() {
		for turn in Turn::all() {
			let mut cube = CubieCube::solved();
			for _ in 0..turn.wise.power() {
				cube = cube.multiply(&turn.face.element());
			}
			assert_eq!(turn.element(), cube, "Turn {} differs from the table", turn);
		}
	}

	#[test]
	fn solved_is_identity() {
		let cube = random_cube(30);
		assert_eq!(cube.multiply(&CubieCube::solved()), cube);
		assert_eq!(CubieCube::solved().multiply(&cube), cube);
		assert_eq!(CubieCube::default(), CubieCube::solved());
	}

	#[test]
	fn associativity() {
		for _ in 0..20 {
			let a = random_cube(15);
			let b = random_cube(15);
			let c = random_cube(15);
			assert_eq!((a * b) * c, a * (b * c));
			assert_eq!(&(&a * &b) * &c, a.multiply(&b.multiply(&c)));
		}
	}

	#[test]
	fn not_commutative() {
		assert_ne!(MOVE_R * MOVE_U, MOVE_U * MOVE_R);
		// Opposite faces commute
		assert_eq!(MOVE_U * MOVE_D, MOVE_D * MOVE_U);
	}

	#[test]
	/// self is applied first, then m
	fn composition_order() -> Result<(), Box<dyn Error>> {
		let cube = CubieCube::from_turns(&parse_turns("R U R' U'")?);
		let expected = CubieCube::from_parts(
			[3, 4, 2, 0, 1, 5, 6, 7],
			[0, 1, 0, 1, 1, 0, 0, 0],
			[8, 0, 2, 3, 4, 5, 6, 7, 1, 9, 10, 11],
			[0; NUM_EDGES],
		)?;
		assert_eq!(cube, expected);
		Ok(())
	}

	#[test]
	/// Orientations never leave their range, no matter how much is composed
	fn orientation_range() {
		let cube = random_cube(200);
		assert!(cube.co.iter().all(|&o| o < 3));
		assert!(cube.eo.iter().all(|&o| o < 2));
		assert!(cube.validate().is_ok());
	}

	#[test]
	fn from_parts_checks() {
		let id_c = [0, 1, 2, 3, 4, 5, 6, 7];
		let id_e = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11];

		assert_eq!(
			CubieCube::from_parts(id_c, [0; 8], id_e, [0; 12]).ok(),
			Some(CubieCube::solved())
		);

		// Not a bijection
		let res = CubieCube::from_parts([0, 0, 2, 3, 4, 5, 6, 7], [0; 8], id_e, [0; 12]);
		assert!(matches!(res, Err(CubeError::InvalidState(_))));
		// Out of range
		let res = CubieCube::from_parts(id_c, [0; 8], [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 12], [0; 12]);
		assert!(matches!(res, Err(CubeError::InvalidState(_))));
		// Orientation out of range
		let res = CubieCube::from_parts(id_c, [3, 0, 0, 0, 0, 0, 0, 0], id_e, [0; 12]);
		assert!(matches!(res, Err(CubeError::InvalidState(_))));
		let res = CubieCube::from_parts(id_c, [0; 8], id_e, [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2]);
		assert!(matches!(res, Err(CubeError::InvalidState(_))));
	}

	#[test]
	/// A single twisted corner can't be reached by turning, but it can be stored
	fn unreachable_state_allowed() -> Result<(), Box<dyn Error>> {
		let cube = CubieCube::from_parts(
			[0, 1, 2, 3, 4, 5, 6, 7],
			[1, 0, 0, 0, 0, 0, 0, 0],
			[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11],
			[0; NUM_EDGES],
		)?;
		assert!(!cube.is_solved());
		assert_eq!(cube.corner(Corner::URF), (Corner::URF, 1));
		Ok(())
	}

	#[test]
	fn save_and_load() -> Result<(), Box<dyn Error>> {
		let dir = tempfile::tempdir()?;
		let path = dir.path().join("cube.bin");

		let cube = random_cube(25);
		cube.save(&path)?;
		assert_eq!(CubieCube::load(&path)?, cube);

		assert!(matches!(
			CubieCube::load(dir.path().join("missing.bin")),
			Err(CubeError::Io(_))
		));
		Ok(())
	}

	#[test]
	fn load_rejects_bad_state() -> Result<(), Box<dyn Error>> {
		let dir = tempfile::tempdir()?;
		let path = dir.path().join("cube.bin");

		let mut cube = CubieCube::solved();
		cube.cp[1] = Corner::URF;
		cube.save(&path)?;
		assert!(matches!(
			CubieCube::load(&path),
			Err(CubeError::InvalidState(_))
		));
		Ok(())
	}
}
