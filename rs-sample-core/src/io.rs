use std::ffi::OsString;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::{env, fs, io};

/// Reads a whole file into memory as raw bytes.
///
/// Decoding is left to the caller so the encoding policy stays in one place.
pub(crate) fn read_file<P: AsRef<Path>>(filename: P) -> io::Result<Vec<u8>> {
	let mut contents = Vec::new();
	File::open(filename)?.read_to_end(&mut contents)?;
	Ok(contents)
}

/// Normalize a folder path.
///
/// - `"."` or `"./"` resolves to the current working directory
/// - Other paths are returned as-is (not canonicalized)
pub(crate) fn normalize_folder<P: AsRef<Path>>(input: P) -> PathBuf {
	let input = input.as_ref();
	if input == Path::new(".") || input == Path::new("./") {
		env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
	} else {
		input.to_path_buf()
	}
}

/// Returns `<directory of the running executable>/../data`.
pub(crate) fn default_data_dir() -> io::Result<PathBuf> {
	let exe = env::current_exe()?;
	let parent = exe.parent().unwrap_or_else(|| Path::new("."));
	Ok(parent.join("..").join("data"))
}

/// Returns the output file name when the output lives inside `dir`.
///
/// Both parents are canonicalized before comparison, so `data/out.txt`
/// and `./data/../data/out.txt` are recognized as the same location.
/// Returns `None` when the output is elsewhere (or its parent cannot be resolved).
pub(crate) fn excluded_name(dir: &Path, output: &Path) -> Option<OsString> {
	let name = output.file_name()?;
	let parent = match output.parent() {
		Some(p) if !p.as_os_str().is_empty() => p,
		_ => Path::new("."),
	};

	let dir = fs::canonicalize(dir).ok()?;
	let parent = fs::canonicalize(parent).ok()?;
	(dir == parent).then(|| name.to_os_string())
}

/// Lists the files of a directory whose name ends with `suffix`, sorted by name.
///
/// Returns file names only (no paths).
///
/// - Subdirectories are ignored
/// - `exclude` removes one exact file name from the listing
/// - Names that are not valid UTF-8 are skipped with a warning
pub(crate) fn list_files<P: AsRef<Path>>(
	dir: P,
	suffix: &str,
	exclude: Option<&OsString>,
) -> io::Result<Vec<String>> {
	let mut files = Vec::new();

	for entry in fs::read_dir(dir)? {
		let entry = entry?;
		let path = entry.path();

		if !path.is_file() {
			continue;
		}

		let name = entry.file_name();
		if exclude.is_some_and(|excluded| *excluded == name) {
			log::debug!("skipping output file {}", path.display());
			continue;
		}

		match name.into_string() {
			Ok(name) if name.ends_with(suffix) => files.push(name),
			Ok(_) => (),
			Err(name) => log::warn!("skipping non UTF-8 file name {:?}", name),
		}
	}

	files.sort();
	Ok(files)
}
