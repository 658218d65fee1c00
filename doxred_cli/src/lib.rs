use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Reduce Doxygen-generated HTML and JS so it matches the custom documentation theme.",
	long_about = "doxred rewrites the files Doxygen writes to `html/` in place, running a fixed \
	              chain of text reducers over every page and navigation script.\n\nRun it from \
	              the directory Doxygen was run in (or pass `--path`).\n\nQuick start:\n  doxred \
	              Reduce the generated output\n  doxred check  Verify the output is already \
	              reduced\n  doxred list  Show targets, reducers and selected files"
)]
pub struct DoxredCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Path to the directory containing the generated `html/` output.
	#[arg(long, short, global = true)]
	pub path: Option<PathBuf>,

	/// Enable verbose output.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Reduce every generated file in place. This is the default when no
	/// subcommand is given.
	///
	/// Runs the HTML reducer chain over `html/*.html` and the JS reducer chain
	/// over the navigation data scripts. Files that are already reduced are
	/// left untouched.
	Reduce {
		/// Report which files would change without writing them.
		#[arg(long, default_value_t = false)]
		dry_run: bool,

		/// With `--dry-run`, show a line diff for every file that would
		/// change.
		#[arg(long, default_value_t = false, requires = "dry_run")]
		diff: bool,
	},
	/// Check that the generated output is already reduced.
	///
	/// Reduces every file in memory and exits with a non-zero status code if
	/// any of them would change. Nothing is written.
	Check {
		/// Show a line diff for every file that would change.
		#[arg(long, default_value_t = false)]
		diff: bool,
	},
	/// List every target with its file globs, its reducers in the order they
	/// run, and the files it currently selects.
	List,
}
