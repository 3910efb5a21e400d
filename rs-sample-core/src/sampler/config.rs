use std::path::{Path, PathBuf};

use crate::error::SampleError;
use crate::io;
use crate::text::Decoding;

/// Maximum number of lines kept per candidate file by default.
pub const DEFAULT_SAMPLE_SIZE: usize = 50;

/// Name of the aggregate output file, placed in the data directory by default.
pub const OUTPUT_FILE_NAME: &str = "sampled_bdpm_data.txt";

/// File name suffix selecting candidate files by default.
pub const DEFAULT_SUFFIX: &str = ".txt";

/// Parameters of a sampling run.
///
/// # Defaults
/// - `output`: `<data_dir>/sampled_bdpm_data.txt`
/// - `sample_size`: 50
/// - `suffix`: `.txt`
/// - `decoding`: strict UTF-8
#[derive(Debug, Clone)]
pub struct SamplerConfig {
	/// Directory scanned for candidate files.
	data_dir: PathBuf,

	/// Explicit output path, `None` means the default name inside `data_dir`.
	output: Option<PathBuf>,

	/// Maximum number of lines drawn from each file.
	pub sample_size: usize,

	/// Candidate files must end with this suffix.
	pub suffix: String,

	/// How file contents are decoded.
	pub decoding: Decoding,
}

impl SamplerConfig {
	/// Creates a configuration for `data_dir` with default settings.
	///
	/// `"."` and `"./"` resolve to the current working directory.
	pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
		Self {
			data_dir: io::normalize_folder(data_dir),
			output: None,
			sample_size: DEFAULT_SAMPLE_SIZE,
			suffix: DEFAULT_SUFFIX.to_owned(),
			decoding: Decoding::default(),
		}
	}

	/// Creates a configuration for `<executable dir>/../data`.
	///
	/// # Errors
	/// Returns `SampleError::ExeLocation` if the executable path is unavailable.
	pub fn from_exe_location() -> Result<Self, SampleError> {
		let data_dir = io::default_data_dir().map_err(SampleError::ExeLocation)?;
		Ok(Self::new(data_dir))
	}

	pub fn with_output<P: Into<PathBuf>>(mut self, output: P) -> Self {
		self.output = Some(output.into());
		self
	}

	pub fn with_sample_size(mut self, sample_size: usize) -> Self {
		self.sample_size = sample_size;
		self
	}

	pub fn with_suffix(mut self, suffix: &str) -> Self {
		self.suffix = suffix.to_owned();
		self
	}

	pub fn with_decoding(mut self, decoding: Decoding) -> Self {
		self.decoding = decoding;
		self
	}

	pub fn data_dir(&self) -> &Path {
		&self.data_dir
	}

	/// Returns the output path, falling back to the default name in the data directory.
	pub fn output(&self) -> PathBuf {
		match &self.output {
			Some(path) => path.clone(),
			None => self.data_dir.join(OUTPUT_FILE_NAME),
		}
	}
}
