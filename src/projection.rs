//! The action of a cube on its top layer corners.
//!
//! If a transformation keeps the four top corners among themselves, it acts
//! on them as a permutation of four slots plus a twist per cubie. That pair
//! is what `project_top_layer` returns. Use `BOTTOM_BLOCK` to make sure
//! the rest of the cube is left alone first.

use crate::cube::{cubiecube::*, *};

/// The top corners T0..T3 in the order the projection uses
pub const TOP_CORNERS: [Corner; 4] = [Corner::URF, Corner::UBR, Corner::ULB, Corner::UFL];

/// Names of T0..T3, read clockwise from the front right
pub const TOP_NAMES: [&str; 4] = ["UFR", "UBR", "UBL", "UFL"];

/// A designated corner ended up outside the designated positions
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Top corner cubie {cubie} left the top layer (position {position})")]
pub struct TopologyError {
	pub cubie: Corner,
	pub position: Corner,
}

/// How a cube acts on four designated corners.
///
/// perm[i] = j: the cubie which starts at Ti ends up at Tj.
/// twist[i]: the orientation of that cubie afterwards.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
pub struct TopLayerAction {
	pub perm: [usize; 4],
	pub twist: [Ori; 4],
}

impl TopLayerAction {
	pub const IDENTITY: TopLayerAction = TopLayerAction {
		perm: [0, 1, 2, 3],
		twist: [0; 4],
	};

	pub fn is_identity(&self) -> bool {
		*self == Self::IDENTITY
	}

	/// The (from, to) name pairs of the permutation
	pub fn mapping(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
		self.perm
			.iter()
			.enumerate()
			.map(|(i, &j)| (TOP_NAMES[i], TOP_NAMES[j]))
	}
}

impl std::fmt::Display for TopLayerAction {
	/// Writes the mapping like "UFR->UBR, UBR->UBL, ..."
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		for (i, (from, to)) in self.mapping().enumerate() {
			if i > 0 {
				write!(f, ", ")?;
			}
			write!(f, "{}->{}", from, to)?;
		}
		Ok(())
	}
}

/// Project the cube onto the four designated corners.
///
/// In a solved cube every cubie sits at its own position, so `designated`
/// names the cubies and their positions at once.
pub fn project_corners(
	cube: &CubieCube,
	designated: &[Corner; 4],
) -> Result<TopLayerAction, TopologyError> {
	// cubie -> (position, orientation)
	let mut located = [(Corner::URF, 0); NUM_CORNERS];
	for (pos, (&cubie, &ori)) in cube.cp.iter().zip(cube.co.iter()).enumerate() {
		located[cubie as usize] = (Corner::from_repr(pos).unwrap_or_default(), ori);
	}

	let mut out = TopLayerAction::IDENTITY;
	for (i, &cubie) in designated.iter().enumerate() {
		let (position, ori) = located[cubie as usize];
		let j = designated
			.iter()
			.position(|&p| p == position)
			.ok_or(TopologyError { cubie, position })?;

		out.perm[i] = j;
		out.twist[i] = ori;
	}

	log::trace!("Projected onto {:?}: {:?}", designated, out);
	Ok(out)
}

/// Project the cube onto the top layer corners UFR, UBR, UBL and UFL
pub fn project_top_layer(cube: &CubieCube) -> Result<TopLayerAction, TopologyError> {
	project_corners(cube, &TOP_CORNERS)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::cube::turn::*;
	use std::error::Error;

	#[test]
	fn solved_projects_to_identity() -> Result<(), Box<dyn Error>> {
		let action = project_top_layer(&CubieCube::solved())?;
		assert!(action.is_identity());
		assert_eq!(action.to_string(), "UFR->UFR, UBR->UBR, UBL->UBL, UFL->UFL");
		Ok(())
	}

	#[test]
	fn up_turn_rotates_the_top() -> Result<(), Box<dyn Error>> {
		let action = project_top_layer(&build_from_sequence("U")?)?;
		assert_eq!(action.perm, [1, 2, 3, 0]);
		assert_eq!(action.twist, [0, 0, 0, 0]);
		assert_eq!(action.to_string(), "UFR->UBR, UBR->UBL, UBL->UFL, UFL->UFR");

		let action = project_top_layer(&build_from_sequence("U2")?)?;
		assert_eq!(action.perm, [2, 3, 0, 1]);
		Ok(())
	}

	#[test]
	fn three_cycle_with_twists() -> Result<(), Box<dyn Error>> {
		let action = project_top_layer(&build_from_sequence("R2B2RFR'B2RF'R")?)?;
		assert_eq!(action.perm, [1, 2, 0, 3]);
		assert_eq!(action.twist, [0, 0, 0, 0]);

		// Twists one corner in place, keeps the others
		let action = project_top_layer(&build_from_sequence("R'DRD'R'DR")?)?;
		assert_eq!(action.perm, [0, 1, 2, 3]);
		assert_eq!(action.twist, [1, 0, 0, 0]);
		Ok(())
	}

	#[test]
	fn leaving_the_top_layer() -> Result<(), Box<dyn Error>> {
		assert_eq!(
			project_top_layer(&build_from_sequence("F")?),
			Err(TopologyError {
				cubie: Corner::URF,
				position: Corner::DFR
			})
		);

		// URF stays on top, UBR is the first one to leave
		let err = project_top_layer(&build_from_sequence("R")?).unwrap_err();
		assert_eq!(err.cubie, Corner::UBR);
		assert_eq!(err.position, Corner::DRB);
		assert_eq!(
			err.to_string(),
			"Top corner cubie UBR left the top layer (position DRB)"
		);
		Ok(())
	}

	#[test]
	fn other_designated_corners() -> Result<(), Box<dyn Error>> {
		let bottom = [Corner::DFR, Corner::DLF, Corner::DBL, Corner::DRB];
		let action = project_corners(&build_from_sequence("D")?, &bottom)?;
		assert_eq!(action.perm, [3, 0, 1, 2]);
		assert!(project_corners(&build_from_sequence("U")?, &bottom)?.is_identity());
		Ok(())
	}
}
