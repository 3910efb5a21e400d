use std::path::PathBuf;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use rs_sample_core::sampler::config::{DEFAULT_SAMPLE_SIZE, DEFAULT_SUFFIX};
use rs_sample_core::{Decoding, FileOutcome, RunSummary, SampleError, Sampler, SamplerConfig};

#[derive(Debug, Parser)]
#[command(
	name = "rs-sample",
	about = "Sample random lines from every text file of a data directory",
	long_about = "Draw up to N random lines from each matching file of the data directory and \
	              concatenate them, one headered section per file, into a single output file.",
	after_help = "Without arguments the data directory is <executable dir>/../data and the output \
	              is sampled_bdpm_data.txt inside it."
)]
struct Cli {
	#[arg(long, value_name = "PATH", help = "Directory scanned for candidate files")]
	data_dir: Option<PathBuf>,

	#[arg(
		long,
		value_name = "PATH",
		help = "Output file (default: <data dir>/sampled_bdpm_data.txt)"
	)]
	output: Option<PathBuf>,

	#[arg(
		long,
		default_value_t = DEFAULT_SAMPLE_SIZE,
		help = "Maximum number of lines kept per file"
	)]
	sample_size: usize,

	#[arg(long, default_value = DEFAULT_SUFFIX, help = "File name suffix of candidate files")]
	suffix: String,

	#[arg(long, help = "Decode files that are not valid UTF-8 as windows-1252")]
	legacy_fallback: bool,

	#[arg(long, help = "Seed for a reproducible draw")]
	seed: Option<u64>,
}

impl Cli {
	/// Builds the sampler configuration from the parsed arguments.
	fn config(&self) -> Result<SamplerConfig, SampleError> {
		let mut config = match &self.data_dir {
			Some(dir) => SamplerConfig::new(dir),
			None => SamplerConfig::from_exe_location()?,
		};

		if let Some(output) = &self.output {
			config = config.with_output(output);
		}

		let decoding = if self.legacy_fallback {
			Decoding::Utf8OrWindows1252
		} else {
			Decoding::Utf8
		};

		Ok(config
			.with_sample_size(self.sample_size)
			.with_suffix(&self.suffix)
			.with_decoding(decoding))
	}
}

/// Prints one progress line per candidate file.
fn report(outcome: &FileOutcome) {
	match outcome {
		FileOutcome::Processed { name, lines } => {
			println!("Processed {}: {} lines extracted.", name, lines)
		}
		FileOutcome::Failed { name, error } => println!("Error processing {}: {}", name, error),
	}
}

/// Turns the result of a run into the closing message.
///
/// A missing data directory is reported, not treated as a failure.
///
/// # Errors
/// Any other `SampleError` is returned unchanged.
fn closing_message(result: Result<RunSummary, SampleError>) -> Result<String, SampleError> {
	match result {
		Ok(summary) => Ok(format!(
			"\nExtraction complete. Output saved to {}",
			summary.output.display()
		)),
		Err(err @ SampleError::MissingDirectory(_)) => Ok(format!("Error: {}", err)),
		Err(err) => Err(err),
	}
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	env_logger::init();

	let cli = Cli::parse();
	let sampler = Sampler::new(cli.config()?);
	log::debug!("sampling with {:?}", sampler.config());

	let result = match cli.seed {
		Some(seed) => sampler.run(&mut StdRng::seed_from_u64(seed), report),
		None => sampler.run_unseeded(report),
	};

	println!("{}", closing_message(result)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use clap::CommandFactory;
	use std::path::Path;

	#[test]
	fn command_is_well_formed() {
		Cli::command().debug_assert();
	}

	#[test]
	fn no_arguments_uses_defaults() {
		let cli = Cli::try_parse_from(["rs-sample"]).unwrap();
		let config = cli.config().unwrap();

		assert!(config.data_dir().ends_with("../data"));
		assert_eq!(config.sample_size, 50);
		assert_eq!(config.suffix, ".txt");
		assert_eq!(config.decoding, Decoding::Utf8);
		assert!(cli.seed.is_none());
	}

	#[test]
	fn flags_override_configuration() {
		let cli = Cli::try_parse_from([
			"rs-sample",
			"--data-dir",
			"bdpm",
			"--output",
			"out/sample.txt",
			"--sample-size",
			"10",
			"--suffix",
			".tsv",
			"--legacy-fallback",
			"--seed",
			"42",
		])
		.unwrap();
		let config = cli.config().unwrap();

		assert_eq!(config.data_dir(), Path::new("bdpm"));
		assert_eq!(config.output(), PathBuf::from("out/sample.txt"));
		assert_eq!(config.sample_size, 10);
		assert_eq!(config.suffix, ".tsv");
		assert_eq!(config.decoding, Decoding::Utf8OrWindows1252);
		assert_eq!(cli.seed, Some(42));
	}

	#[test]
	fn missing_directory_closes_normally() {
		let err = SampleError::MissingDirectory(PathBuf::from("/srv/data"));
		let message = closing_message(Err(err)).unwrap();
		assert_eq!(message, "Error: Data directory not found at /srv/data");
	}

	#[test]
	fn completed_run_names_output() {
		let summary = RunSummary {
			output: PathBuf::from("/srv/data/sampled_bdpm_data.txt"),
			outcomes: Vec::new(),
		};
		assert_eq!(
			closing_message(Ok(summary)).unwrap(),
			"\nExtraction complete. Output saved to /srv/data/sampled_bdpm_data.txt"
		);
	}

	#[test]
	fn output_failure_is_propagated() {
		let err = SampleError::Output {
			path: PathBuf::from("/srv/data/sampled_bdpm_data.txt"),
			source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
		};
		assert!(matches!(closing_message(Err(err)), Err(SampleError::Output { .. })));
	}

	#[test]
	fn rejects_non_numeric_sample_size() {
		assert!(Cli::try_parse_from(["rs-sample", "--sample-size", "many"]).is_err());
	}
}
