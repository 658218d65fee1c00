use std::fmt;
use std::io::ErrorKind;
use std::path::Path;
use std::path::PathBuf;

use globset::Glob;
use globset::GlobSet;
use globset::GlobSetBuilder;

use crate::DoxredError;
use crate::DoxredResult;

/// Selects the files directly inside one directory whose names match any of
/// a set of glob patterns.
#[derive(Debug, Clone)]
pub struct FileSelector {
	dir: PathBuf,
	patterns: Vec<String>,
	matcher: GlobSet,
}

impl FileSelector {
	/// Build a selector for `dir` (relative to the project root). Patterns are
	/// matched against file names only.
	pub fn new<I, S>(dir: impl Into<PathBuf>, patterns: I) -> DoxredResult<Self>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let patterns: Vec<String> = patterns.into_iter().map(Into::into).collect();
		let matcher = build_glob_set(&patterns)?;

		Ok(Self {
			dir: dir.into(),
			patterns,
			matcher,
		})
	}

	pub fn dir(&self) -> &Path {
		&self.dir
	}

	pub fn patterns(&self) -> &[String] {
		&self.patterns
	}

	/// Whether `file_name` matches one of the selector's patterns.
	pub fn matches(&self, file_name: &str) -> bool {
		self.matcher.is_match(file_name)
	}

	/// List the matching files under `root`, sorted by path.
	///
	/// A missing directory selects nothing.
	pub fn select(&self, root: &Path) -> DoxredResult<Vec<PathBuf>> {
		let dir = root.join(&self.dir);

		let entries = match std::fs::read_dir(&dir) {
			Ok(entries) => entries,
			Err(error) if error.kind() == ErrorKind::NotFound => {
				tracing::debug!(dir = %dir.display(), "output directory does not exist");
				return Ok(Vec::new());
			}
			Err(error) => return Err(DoxredError::io(&dir, error)),
		};

		let mut files = Vec::new();
		for entry in entries {
			let entry = entry.map_err(|error| DoxredError::io(&dir, error))?;
			let path = entry.path();

			if !path.is_file() {
				continue;
			}

			let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
				continue;
			};

			if self.matches(name) {
				files.push(path);
			}
		}

		// Sort for deterministic ordering.
		files.sort();
		Ok(files)
	}
}

impl fmt::Display for FileSelector {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let dir = self.dir.display();
		let globs: Vec<String> = self
			.patterns
			.iter()
			.map(|pattern| format!("{dir}/{pattern}"))
			.collect();

		write!(f, "{}", globs.join(", "))
	}
}

/// Build a `GlobSet` from a list of glob pattern strings.
fn build_glob_set(patterns: &[String]) -> DoxredResult<GlobSet> {
	let mut builder = GlobSetBuilder::new();
	for pattern in patterns {
		let glob = Glob::new(pattern).map_err(|source| {
			DoxredError::InvalidGlob {
				pattern: pattern.clone(),
				source,
			}
		})?;
		builder.add(glob);
	}

	builder.build().map_err(|source| {
		DoxredError::InvalidGlob {
			pattern: patterns.join(", "),
			source,
		}
	})
}
