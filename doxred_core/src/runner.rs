use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use tempfile::NamedTempFile;

use crate::DoxredError;
use crate::DoxredResult;
use crate::ReducerChain;
use crate::Target;

/// Whether a run writes its results back to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
	/// Overwrite every file whose reduced contents differ from the original.
	#[default]
	Write,
	/// Reduce in memory only and keep a [`Preview`] of every change.
	DryRun,
}

/// The contents of a file before and after reduction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
	pub original: String,
	pub reduced: String,
}

/// Result of reducing a single file.
#[derive(Debug, Clone)]
pub struct FileReport {
	/// Path of the reduced file.
	pub path: PathBuf,
	/// Whether the chain changed the file's contents.
	pub changed: bool,
	/// Before/after contents, only recorded for changed files in
	/// [`RunMode::DryRun`].
	pub preview: Option<Preview>,
}

/// Result of reducing every file selected by one [`Target`].
#[derive(Debug, Clone)]
pub struct TargetReport {
	pub name: &'static str,
	pub label: &'static str,
	pub files: Vec<FileReport>,
}

impl TargetReport {
	pub fn changed_count(&self) -> usize {
		self.files.iter().filter(|file| file.changed).count()
	}

	pub fn changed_files(&self) -> impl Iterator<Item = &FileReport> {
		self.files.iter().filter(|file| file.changed)
	}
}

/// Result of a full pipeline run.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
	pub mode: RunMode,
	pub targets: Vec<TargetReport>,
}

impl RunReport {
	/// Total number of files that were selected.
	pub fn file_count(&self) -> usize {
		self.targets.iter().map(|target| target.files.len()).sum()
	}

	/// Total number of files whose contents changed (or would change).
	pub fn changed_count(&self) -> usize {
		self.targets.iter().map(TargetReport::changed_count).sum()
	}

	/// Returns true if every selected file was already reduced.
	pub fn is_clean(&self) -> bool {
		self.changed_count() == 0
	}
}

/// Reduce every file selected by each target, one file at a time.
///
/// Targets run in the given order and files within a target in sorted path
/// order. The first read or write failure aborts the run; files handled
/// before it keep their reduced contents.
pub fn run_pipeline(root: &Path, targets: &[Target], mode: RunMode) -> DoxredResult<RunReport> {
	let mut report = RunReport {
		mode,
		targets: Vec::with_capacity(targets.len()),
	};

	for target in targets {
		report.targets.push(run_target(root, target, mode)?);
	}

	Ok(report)
}

/// Reduce the files selected by a single target.
pub fn run_target(root: &Path, target: &Target, mode: RunMode) -> DoxredResult<TargetReport> {
	let paths = target.selector().select(root)?;
	let mut files = Vec::with_capacity(paths.len());

	for path in paths {
		files.push(reduce_file(&path, target.chain(), mode)?);
	}

	let report = TargetReport {
		name: target.name(),
		label: target.label(),
		files,
	};

	tracing::info!(
		target_name = report.name,
		files = report.files.len(),
		changed = report.changed_count(),
		"reduced target"
	);

	Ok(report)
}

/// Read `path`, fold `chain` over its contents and, in [`RunMode::Write`],
/// write the result back when it differs.
pub fn reduce_file(path: &Path, chain: &ReducerChain, mode: RunMode) -> DoxredResult<FileReport> {
	let original = std::fs::read_to_string(path).map_err(|error| DoxredError::io(path, error))?;
	let reduced = chain.apply(&original);
	let changed = reduced != original;

	tracing::debug!(file = %path.display(), changed, "reduced file");

	let preview = match mode {
		RunMode::Write => {
			if changed {
				replace_file(path, &reduced)?;
			}
			None
		}
		RunMode::DryRun => changed.then(|| Preview { original, reduced }),
	};

	Ok(FileReport {
		path: path.to_path_buf(),
		changed,
		preview,
	})
}

/// Write `contents` to a temporary file next to `path`, then rename it over
/// `path`. A failure leaves the original file intact.
fn replace_file(path: &Path, contents: &str) -> DoxredResult<()> {
	let io_error = |error| DoxredError::io(path, error);
	let dir = path.parent().unwrap_or_else(|| Path::new("."));
	let permissions = std::fs::metadata(path).map_err(io_error)?.permissions();

	let mut file = NamedTempFile::new_in(dir).map_err(io_error)?;
	file.write_all(contents.as_bytes()).map_err(io_error)?;
	file.as_file().set_permissions(permissions).map_err(io_error)?;
	file.persist(path).map_err(|error| io_error(error.error))?;

	Ok(())
}
