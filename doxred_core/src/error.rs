use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum DoxredError {
	#[error("failed to access `{path}`: {source}")]
	#[diagnostic(
		code(doxred::io_error),
		help("re-run the generator if its output is missing or incomplete")
	)]
	Io {
		path: String,
		#[source]
		source: std::io::Error,
	},

	#[error("reducer `{reducer}` has an invalid pattern: `{pattern}`")]
	#[diagnostic(code(doxred::invalid_pattern))]
	InvalidPattern {
		reducer: String,
		pattern: String,
		#[source]
		source: regex::Error,
	},

	#[error("invalid file glob: `{pattern}`")]
	#[diagnostic(code(doxred::invalid_glob))]
	InvalidGlob {
		pattern: String,
		#[source]
		source: globset::Error,
	},
}

impl DoxredError {
	pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
		Self::Io {
			path: path.display().to_string(),
			source,
		}
	}
}

pub type DoxredResult<T> = Result<T, DoxredError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
