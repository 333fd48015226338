use rayon::prelude::*;

use crate::{
	cube::{block::BOTTOM_BLOCK, cubiecube::CubieCube, turn::*, CubeError},
	projection::{project_top_layer, TopLayerAction, TOP_NAMES},
};

/// A sequence to analyse, and whether it must leave the bottom block alone
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct NamedSequence {
	pub name: String,
	pub sequence: String,
	pub check_block: bool,
}

impl NamedSequence {
	pub fn new<N: Into<String>, S: Into<String>>(name: N, sequence: S, check_block: bool) -> Self {
		Self {
			name: name.into(),
			sequence: sequence.into(),
			check_block,
		}
	}
}

/// What a sequence does to the top layer corners
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Analysis {
	pub name: String,
	pub sequence: String,
	pub cube: CubieCube,
	pub action: TopLayerAction,
}

impl std::fmt::Display for Analysis {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		writeln!(f, "{} = {}", self.name, self.sequence)?;
		writeln!(f, "  Phi({}) top-corner mapping: {}", self.name, self.action)?;
		write!(
			f,
			"  Phi({}) top-corner twists (mod 3) in order ({}): {:?}",
			self.name,
			TOP_NAMES.join(","),
			self.action.twist
		)
	}
}

/// Build the cube of a named sequence, check the bottom block if asked
/// to and project it onto the top layer.
pub fn analyze(named: &NamedSequence) -> Result<Analysis, CubeError> {
	let cube = build_from_sequence(&named.sequence)?;
	analyze_cube(named, cube)
}

/// Like `analyze`, but for a cube which is already built (e.g. loaded from a file)
pub fn analyze_cube(named: &NamedSequence, cube: CubieCube) -> Result<Analysis, CubeError> {
	if named.check_block {
		BOTTOM_BLOCK.check(&cube)?;
		log::debug!("{} preserves the bottom block", named.name);
	}
	let action = project_top_layer(&cube)?;

	Ok(Analysis {
		name: named.name.clone(),
		sequence: named.sequence.clone(),
		cube,
		action,
	})
}

/// Analyse all sequences in parallel. The results are in input order.
pub fn analyze_all(sequences: &[NamedSequence]) -> Vec<Result<Analysis, CubeError>> {
	log::info!("Analysing {} sequences", sequences.len());
	sequences.par_iter().map(analyze).collect()
}

/// The commutator demonstration on the top layer.
///
/// A is a corner 3-cycle, f twists a corner in place (and breaks the block),
/// W = f U f^-1 U' twists two corners against each other and
/// T = W^-1 A W A^-1.
pub fn demonstration() -> Result<Vec<NamedSequence>, CubeError> {
	let a = "R2B2RFR'B2RF'R";
	let f = "R'DRD'R'DR";
	let u = "U";

	let w = compose_sequences(&[f.to_string(), u.to_string(), invert_sequence(f)?, "U'".to_string()]);
	let t = compose_sequences(&[invert_sequence(&w)?, a.to_string(), w.clone(), invert_sequence(a)?]);

	Ok(vec![
		NamedSequence::new("A", a, true),
		NamedSequence::new("U", u, true),
		NamedSequence::new("f", f, false),
		NamedSequence::new("W", w, true),
		NamedSequence::new("T", t, true),
	])
}
