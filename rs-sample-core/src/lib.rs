//! Random line sampling over a directory of text files.
//!
//! This crate provides:
//! - Candidate discovery (sorted, suffix-filtered, output file excluded)
//! - Text decoding with an optional legacy-encoding fallback
//! - Uniform sampling without replacement, capped per file
//! - Headered section output into a single aggregate file
//!
//! Directory and decoding helpers are kept internal; the public surface is
//! the sampler, its configuration and its errors.

/// Errors raised by a sampling run.
///
/// Fatal errors stop the run, per-file errors are reported and skipped.
pub mod error;

/// Sampling configuration, runs and their outcomes.
pub mod sampler;

/// Decoding policies and line splitting.
pub mod text;

/// I/O utilities (directory listing, path helpers).
///
/// Not exposed
pub(crate) mod io;

pub use error::{FileError, SampleError};
pub use sampler::config::SamplerConfig;
pub use sampler::{FileOutcome, RunSummary, Sampler};
pub use text::Decoding;
