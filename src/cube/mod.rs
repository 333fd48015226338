pub mod block;
pub mod cubiecube;
pub mod turn;

use serde::{Deserialize, Serialize};
use strum::EnumCount;

use crate::projection::TopologyError;
use block::BlockViolation;
use turn::*;

/// The number of faces a cube can be turned at
pub const NUM_FACES: usize = 6;

// ===== Corner Piece =====

/// A corner position (or the corner cubie that belongs there in a solved cube)
/// Note that the order is fixed: the move tables index by it.
#[derive(
	Clone,
	Copy,
	Default,
	PartialEq,
	Eq,
	Hash,
	Debug,
	Serialize,
	Deserialize,
	strum::EnumIter,
	strum::EnumString,
	strum::EnumCount,
	strum::Display,
	strum::FromRepr,
)]
#[allow(clippy::upper_case_acronyms)]
#[repr(usize)]
#[rustfmt::skip]
pub enum Corner {
	#[default]
	URF, UFL, ULB, UBR, // up corners
	DFR, DLF, DBL, DRB, // down corners
}

pub const NUM_CORNERS: usize = Corner::COUNT;

// ===== Edge Piece =====

/// An edge position (or the edge cubie that belongs there in a solved cube)
#[derive(
	Clone,
	Copy,
	Default,
	PartialEq,
	Eq,
	Hash,
	Debug,
	Serialize,
	Deserialize,
	strum::EnumIter,
	strum::EnumString,
	strum::EnumCount,
	strum::Display,
	strum::FromRepr,
)]
#[allow(clippy::upper_case_acronyms)]
#[repr(usize)]
#[rustfmt::skip]
pub enum Edge {
	#[default]
	UR, UF, UL, UB, // up edges
	DR, DF, DL, DB, // down edges
	FR, FL, BL, BR, // ud-slice (middle edges)
}

pub const NUM_EDGES: usize = Edge::COUNT;

/// Everything that can go wrong when working with cubes.
/// The first three are caused by the input (notation or a sequence
/// that breaks an assumed invariant), the rest by the storage layer.
#[derive(thiserror::Error, Debug)]
pub enum CubeError {
	#[error(transparent)]
	Parse(#[from] ParseError),
	#[error(transparent)]
	Block(#[from] BlockViolation),
	#[error(transparent)]
	Topology(#[from] TopologyError),
	#[error("Invalid cube state: {0}")]
	InvalidState(String),
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),
	#[error("Could not encode or decode the cube: {0}")]
	Encoding(#[from] bincode::Error),
}

/// The RubiksCube trait.
pub trait RubiksCube {
	fn apply_turn(&mut self, turn: Turn);

	fn apply_turns<I>(&mut self, turns: I)
	where
		I: IntoIterator<Item = Turn>,
	{
		for turn in turns {
			self.apply_turn(turn);
		}
	}
}
