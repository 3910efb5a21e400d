use std::borrow::Cow;

use encoding_rs::WINDOWS_1252;

use crate::error::FileError;

/// Strategy used to turn the raw bytes of a candidate file into text.
///
/// # Variants
/// - `Utf8`: strict UTF-8, any invalid sequence fails the file.
/// - `Utf8OrWindows1252`: strict UTF-8 first, then Windows-1252 when the bytes
///   are not valid UTF-8. Windows-1252 maps every byte, so this never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Decoding {
	#[default]
	Utf8,
	Utf8OrWindows1252,
}

impl Decoding {
	/// Decodes `bytes` according to the policy.
	///
	/// Valid UTF-8 input is borrowed as-is. A byte order mark is kept as
	/// part of the first line.
	///
	/// # Errors
	/// Returns `FileError::Decode` with the offset of the first invalid byte
	/// when the policy is `Utf8` and the input is not valid UTF-8.
	pub fn decode<'a>(&self, bytes: &'a [u8]) -> Result<Cow<'a, str>, FileError> {
		match std::str::from_utf8(bytes) {
			Ok(text) => Ok(Cow::Borrowed(text)),
			Err(err) => match self {
				Decoding::Utf8 => Err(FileError::Decode { offset: err.valid_up_to() }),
				Decoding::Utf8OrWindows1252 => {
					log::warn!(
						"invalid UTF-8 at byte {}, decoding as windows-1252",
						err.valid_up_to()
					);
					let (text, _) = WINDOWS_1252.decode_without_bom_handling(bytes);
					Ok(text)
				}
			},
		}
	}
}

/// Splits text into lines using universal newlines.
///
/// - `\n`, `\r\n` and a lone `\r` all end a line
/// - Terminators are stripped
/// - A trailing terminator does not produce an extra empty line
/// - Empty lines in the middle of the text are kept
pub fn split_lines(text: &str) -> Vec<&str> {
	let bytes = text.as_bytes();
	let mut lines = Vec::new();
	let mut start = 0;
	let mut i = 0;

	while i < bytes.len() {
		match bytes[i] {
			b'\n' => {
				lines.push(&text[start..i]);
				i += 1;
				start = i;
			}
			b'\r' => {
				lines.push(&text[start..i]);
				i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
				start = i;
			}
			_ => i += 1,
		}
	}

	// Last line without terminator
	if start < bytes.len() {
		lines.push(&text[start..]);
	}

	lines
}
