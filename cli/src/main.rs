use std::{error::Error, io::Write, path::PathBuf};

use clap::Parser;

use cubiegroup::prelude::*;

/// Explore what move sequences do to the top layer corners of a Rubik's Cube
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
	/// A sequence to analyse, e.g. "R2B2RFR'B2RF'R" (can be repeated).
	/// Without sequences (and without --load) the commutator demonstration runs.
	#[arg(short, long)]
	sequence: Vec<String>,

	/// Don't require the sequences to leave the first two layers alone
	#[arg(long, default_value_t = false)]
	no_block_check: bool,

	/// Print the inverse of the given sequence and quit
	#[arg(long)]
	invert: Option<String>,

	/// Store the last analysed cube in the given file
	#[arg(long)]
	save: Option<PathBuf>,

	/// Analyse a cube stored with --save
	#[arg(long)]
	load: Option<PathBuf>,

	/// Print the output to a file rather to the stdout
	#[arg(short, long, default_value_t = String::new())]
	output: String,
}

fn main() -> Result<(), Box<dyn Error>> {
	pretty_env_logger::init();

	let args = Args::parse();
	// Whether to redirect it to the stdout or a file
	let mut out: Box<dyn Write> = if args.output.is_empty() {
		Box::new(std::io::stdout())
	} else {
		Box::new(std::fs::File::create(&args.output)?)
	};

	// Invert and exit
	if let Some(seq) = args.invert {
		writeln!(out, "{}", invert_sequence(&seq)?)?;
		return Ok(());
	}

	let check_block = !args.no_block_check;
	let run_demo = args.sequence.is_empty() && args.load.is_none();

	let sequences = if run_demo {
		demonstration()?
	} else {
		args.sequence
			.iter()
			.enumerate()
			.map(|(i, seq)| NamedSequence::new(format!("S{}", i + 1), seq.as_str(), check_block))
			.collect()
	};

	let mut analyses = Vec::with_capacity(sequences.len() + 1);
	for result in analyze_all(&sequences) {
		analyses.push(result?);
	}

	if let Some(path) = &args.load {
		let cube = CubieCube::load(path)?;
		let named = NamedSequence::new(path.display().to_string(), "(stored cube)", check_block);
		analyses.push(analyze_cube(&named, cube)?);
	}

	for analysis in analyses.iter() {
		writeln!(out, "{}", analysis)?;
		writeln!(out)?;
	}

	if run_demo {
		writeln!(
			out,
			"All requested H-elements (A, U, W, T) preserve BC and BE: OK."
		)?;
	}

	if let (Some(path), Some(last)) = (&args.save, analyses.last()) {
		last.cube.save(path)?;
		log::info!("Saved {} to {}", last.name, path.display());
	}

	Ok(())
}
