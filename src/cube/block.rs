use crate::cube::{cubiecube::*, *};

/// A set of positions a transformation has to leave untouched:
/// every one of them must still hold its own cubie, unturned.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BlockSpec<'a> {
	pub corners: &'a [Corner],
	pub edges: &'a [Edge],
}

/// The first two layers seen from the top: the bottom corners (BC)
/// and the bottom plus middle layer edges (BE).
pub const BOTTOM_BLOCK: BlockSpec<'static> = BlockSpec {
	corners: &[Corner::DFR, Corner::DLF, Corner::DBL, Corner::DRB],
	edges: &[Edge::DL, Edge::FL, Edge::BL, Edge::DR, Edge::FR, Edge::BR],
};

/// A block position which doesn't hold its own cubie at orientation 0
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockViolation {
	#[error("Block not preserved at corner position {position}: has cubie {occupant}, co={orientation}")]
	Corner {
		position: Corner,
		occupant: Corner,
		orientation: Ori,
	},
	#[error("Block not preserved at edge position {position}: has cubie {occupant}, eo={orientation}")]
	Edge {
		position: Edge,
		occupant: Edge,
		orientation: Ori,
	},
}

impl BlockSpec<'_> {
	pub fn check(&self, cube: &CubieCube) -> Result<(), BlockViolation> {
		check_block_preserved(cube, self.corners, self.edges)
	}
}

/// Check that the given corner and edge positions are fixed by the cube.
/// Corners are checked first, each list in the given order; the first
/// violation is returned.
pub fn check_block_preserved(
	cube: &CubieCube,
	corners: &[Corner],
	edges: &[Edge],
) -> Result<(), BlockViolation> {
	for &position in corners {
		let (occupant, orientation) = cube.corner(position);
		if occupant != position || orientation != 0 {
			return Err(BlockViolation::Corner {
				position,
				occupant,
				orientation,
			});
		}
	}

	for &position in edges {
		let (occupant, orientation) = cube.edge(position);
		if occupant != position || orientation != 0 {
			return Err(BlockViolation::Edge {
				position,
				occupant,
				orientation,
			});
		}
	}

	log::trace!(
		"{} corners and {} edges preserved",
		corners.len(),
		edges.len()
	);
	Ok(())
}
