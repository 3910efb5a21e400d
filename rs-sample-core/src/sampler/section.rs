use std::io::{self, Write};

/// Twenty `=` characters framing the file name in a section header.
pub const HEADER_RULE: &str = "====================";

/// The output block produced for one candidate file.
///
/// A section is fully built in memory before anything is written, so a
/// file that fails mid-way never leaves a partial block in the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
	name: String,
	lines: Vec<String>,
}

impl Section {
	/// Creates a section. `lines` must not carry their line terminators.
	pub fn new(name: &str, lines: Vec<String>) -> Self {
		Self { name: name.to_owned(), lines }
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn lines(&self) -> &[String] {
		&self.lines
	}

	/// Returns `\n==================== <name> ====================\n`.
	pub fn header(&self) -> String {
		format!("\n{HEADER_RULE} {} {HEADER_RULE}\n", self.name)
	}

	/// Writes the header then every line followed by exactly one `\n`.
	pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
		out.write_all(self.header().as_bytes())?;
		for line in &self.lines {
			out.write_all(line.as_bytes())?;
			out.write_all(b"\n")?;
		}
		Ok(())
	}
}
