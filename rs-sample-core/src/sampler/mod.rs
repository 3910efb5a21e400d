//! Directory sampling: candidate discovery, per-file line draws and the
//! aggregate output file.
//!
//! A run is a single sequential pass:
//! - check the data directory exists (nothing is written otherwise)
//! - list candidates sorted by name, output file excluded
//! - for each candidate, decode, draw and write one headered section
//! - report each file through a callback and return a summary

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::error::{FileError, SampleError};
use crate::io;
use crate::text::split_lines;

use self::config::SamplerConfig;
use self::section::Section;

/// Run parameters (directory, output, sample size, suffix, decoding).
pub mod config;

/// Headered output block for one candidate file.
pub mod section;

/// Result of processing one candidate file.
#[derive(Debug)]
pub enum FileOutcome {
	/// The section was written with `lines` sampled lines.
	Processed { name: String, lines: usize },
	/// The file was skipped, nothing was written for it.
	Failed { name: String, error: FileError },
}

impl FileOutcome {
	pub fn name(&self) -> &str {
		match self {
			FileOutcome::Processed { name, .. } | FileOutcome::Failed { name, .. } => name,
		}
	}
}

/// Summary of a completed run.
#[derive(Debug)]
pub struct RunSummary {
	/// Path of the aggregate output file.
	pub output: PathBuf,
	/// One entry per candidate, in processing order.
	pub outcomes: Vec<FileOutcome>,
}

impl RunSummary {
	pub fn processed(&self) -> usize {
		self.outcomes.iter().filter(|o| matches!(o, FileOutcome::Processed { .. })).count()
	}

	pub fn failed(&self) -> usize {
		self.outcomes.len() - self.processed()
	}
}

/// Draws `min(k, items.len())` items uniformly without replacement.
///
/// When there are no more than `k` items, all of them are returned in their
/// original order. Otherwise the order is the random order of the draw.
pub fn draw<'a, T, R>(items: &'a [T], k: usize, rng: &mut R) -> Vec<&'a T>
where
	R: Rng + ?Sized,
{
	if items.len() <= k {
		items.iter().collect()
	} else {
		items.choose_multiple(rng, k).collect()
	}
}

/// Samples lines from every candidate file of a directory into one output file.
#[derive(Debug, Clone)]
pub struct Sampler {
	config: SamplerConfig,
}

impl Sampler {
	pub fn new(config: SamplerConfig) -> Self {
		Self { config }
	}

	pub fn config(&self) -> &SamplerConfig {
		&self.config
	}

	/// Lists candidate file names, sorted.
	///
	/// # Errors
	/// - `SampleError::MissingDirectory` if the data directory does not exist.
	/// - `SampleError::ListDirectory` if it cannot be read.
	pub fn candidates(&self) -> Result<Vec<String>, SampleError> {
		let dir = self.config.data_dir();
		if !dir.is_dir() {
			return Err(SampleError::MissingDirectory(dir.to_path_buf()));
		}

		let exclude = io::excluded_name(dir, &self.config.output());
		io::list_files(dir, &self.config.suffix, exclude.as_ref()).map_err(|source| {
			SampleError::ListDirectory {
				path: dir.to_path_buf(),
				source,
			}
		})
	}

	/// Reads, decodes and samples a single file of the data directory.
	///
	/// # Errors
	/// Returns a `FileError` if the file cannot be read or decoded.
	pub fn sample_file<R>(&self, name: &str, rng: &mut R) -> Result<Section, FileError>
	where
		R: Rng + ?Sized,
	{
		let path = self.config.data_dir().join(name);
		let bytes = io::read_file(&path)?;
		let text = self.config.decoding.decode(&bytes)?;
		let lines = split_lines(&text);

		let sample = draw(&lines, self.config.sample_size, rng);
		log::debug!("{}: kept {} of {} lines", path.display(), sample.len(), lines.len());

		Ok(Section::new(name, sample.into_iter().map(|line| (*line).to_owned()).collect()))
	}

	/// Runs the sampler over the data directory.
	///
	/// `on_outcome` is called once per candidate, right after it is written
	/// or skipped, so callers can report progress as it happens.
	///
	/// # Errors
	/// - `SampleError::MissingDirectory` before the output file is touched.
	/// - `SampleError::ListDirectory` if the directory cannot be listed.
	/// - `SampleError::Output` if the output cannot be created or written.
	///
	/// Per-file failures are not errors: they are reported as `FileOutcome::Failed`.
	pub fn run<R, F>(&self, rng: &mut R, mut on_outcome: F) -> Result<RunSummary, SampleError>
	where
		R: Rng + ?Sized,
		F: FnMut(&FileOutcome),
	{
		let candidates = self.candidates()?;
		let output = self.config.output();
		log::debug!(
			"{} candidate file(s) in {}",
			candidates.len(),
			self.config.data_dir().display()
		);

		let file = File::create(&output).map_err(|source| output_error(&output, source))?;
		let mut writer = BufWriter::new(file);
		let mut outcomes = Vec::with_capacity(candidates.len());

		for name in candidates {
			let outcome = match self.sample_file(&name, rng) {
				Ok(section) => {
					section
						.write_to(&mut writer)
						.map_err(|source| output_error(&output, source))?;
					FileOutcome::Processed { lines: section.lines().len(), name }
				}
				Err(error) => {
					log::warn!("skipping {}: {}", name, error);
					FileOutcome::Failed { name, error }
				}
			};
			on_outcome(&outcome);
			outcomes.push(outcome);
		}

		writer.flush().map_err(|source| output_error(&output, source))?;

		Ok(RunSummary { output, outcomes })
	}

	/// Same as `run`, using the thread-local unseeded generator.
	pub fn run_unseeded<F>(&self, on_outcome: F) -> Result<RunSummary, SampleError>
	where
		F: FnMut(&FileOutcome),
	{
		self.run(&mut rand::rng(), on_outcome)
	}
}

fn output_error(path: &Path, source: std::io::Error) -> SampleError {
	SampleError::Output { path: path.to_path_buf(), source }
}
