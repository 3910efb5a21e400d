use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a whole sampling run.
#[derive(Debug, Error)]
pub enum SampleError {
	/// The data directory does not exist (or is not a directory).
	///
	/// Checked before the output file is opened, so nothing has been written.
	#[error("Data directory not found at {}", .0.display())]
	MissingDirectory(PathBuf),

	#[error("failed to list {}: {source}", path.display())]
	ListDirectory {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// Creating, writing or flushing the aggregate output failed.
	#[error("failed to write {}: {source}", path.display())]
	Output {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// The default data directory could not be derived from the executable path.
	#[error("cannot locate the running executable: {0}")]
	ExeLocation(#[source] io::Error),
}

/// Errors limited to a single candidate file.
///
/// The run reports them and moves on to the next file.
#[derive(Debug, Error)]
pub enum FileError {
	#[error("{0}")]
	Read(#[from] io::Error),

	/// The file is not valid UTF-8 and no fallback encoding was enabled.
	#[error("invalid UTF-8 sequence at byte {offset}")]
	Decode { offset: usize },
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn missing_directory_names_the_path() {
		let err = SampleError::MissingDirectory(PathBuf::from("/tmp/nowhere/data"));
		assert_eq!(err.to_string(), "Data directory not found at /tmp/nowhere/data");
	}

	#[test]
	fn decode_error_reports_offset() {
		let err = FileError::Decode { offset: 12 };
		assert_eq!(err.to_string(), "invalid UTF-8 sequence at byte 12");
	}

	#[test]
	fn read_error_keeps_io_message() {
		let err = FileError::from(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
		assert_eq!(err.to_string(), "denied");
	}
}
