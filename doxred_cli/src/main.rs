use std::path::Path;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use doxred_cli::Commands;
use doxred_cli::DoxredCli;
use doxred_core::RunMode;
use doxred_core::RunReport;
use doxred_core::TargetReport;
use doxred_core::default_targets;
use doxred_core::run_pipeline;
use owo_colors::OwoColorize;
use similar::ChangeTag;
use similar::TextDiff;
use tracing_subscriber::EnvFilter;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,green) => {
		if color_enabled() {
			format!("{}", $text.green())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,bold) => {
		if color_enabled() {
			format!("{}", $text.bold())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = DoxredCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	init_tracing(args.verbose, use_color);

	let result = match args.command {
		None => run_reduce(&args, false, false),
		Some(Commands::Reduce { dry_run, diff }) => run_reduce(&args, dry_run, diff),
		Some(Commands::Check { diff }) => run_check(&args, diff),
		Some(Commands::List) => run_list(&args),
	};

	if let Err(e) = result {
		match e.downcast::<doxred_core::DoxredError>() {
			Ok(doxred_err) => {
				let report: miette::Report = (*doxred_err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(1);
	}
}

/// Log to stderr. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool, use_color: bool) {
	let default_level = if verbose { "debug" } else { "warn" };
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_ansi(use_color)
		.with_target(false)
		.init();
}

fn resolve_root(args: &DoxredCli) -> PathBuf {
	let root = args
		.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));
	tracing::debug!(root = %root.display(), "resolved project root");
	root
}

fn print_field(label: &str, value: impl std::fmt::Display) {
	println!("  {label:<10} {value}");
}

fn run_reduce(
	args: &DoxredCli,
	dry_run: bool,
	show_diff: bool,
) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let targets = default_targets()?;
	let mode = if dry_run {
		RunMode::DryRun
	} else {
		RunMode::Write
	};
	let report = run_pipeline(&root, &targets, mode)?;

	for target in &report.targets {
		let changed = target.changed_count();
		let total = target.files.len();

		if dry_run {
			println!(
				"Dry run: would change {changed} of {total} {} file(s).",
				target.label
			);
		} else {
			println!(
				"Reduced the output's {}: {changed} of {total} file(s) changed.",
				target.label
			);
		}

		if dry_run || args.verbose {
			print_changed_files(target, &root, show_diff);
		}
	}

	Ok(())
}

fn run_check(args: &DoxredCli, show_diff: bool) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let targets = default_targets()?;
	let report = run_pipeline(&root, &targets, RunMode::DryRun)?;

	if report.is_clean() {
		println!(
			"Check passed: all {} generated file(s) are already reduced.",
			report.file_count()
		);
		return Ok(());
	}

	eprintln!("Check failed.");
	for target in &report.targets {
		if target.changed_count() == 0 {
			continue;
		}

		eprintln!();
		eprintln!("Unreduced {} files:", target.label);
		for file in target.changed_files() {
			eprintln!("  {}", make_relative(&file.path, &root));
			if show_diff {
				if let Some(preview) = &file.preview {
					print_diff(&preview.original, &preview.reduced);
				}
			}
		}
	}

	eprintln!();
	eprintln!("{}", check_summary(&report));
	process::exit(1);
}

fn check_summary(report: &RunReport) -> String {
	format!(
		"{} of {} generated file(s) are not reduced. Run `doxred` to fix.",
		report.changed_count(),
		report.file_count()
	)
}

fn run_list(args: &DoxredCli) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let targets = default_targets()?;

	for (index, target) in targets.iter().enumerate() {
		if index > 0 {
			println!();
		}

		let files = target.selector().select(&root)?;

		println!(
			"{}",
			colored!(format!("{} ({})", target.label(), target.name()), bold)
		);
		print_field("Globs", target.selector());
		print_field("Reducers", target.chain().names().join(" -> "));
		print_field("Files", files.len());
		for file in &files {
			println!("    {}", make_relative(file, &root));
		}
	}

	Ok(())
}

fn print_changed_files(target: &TargetReport, root: &Path, show_diff: bool) {
	for file in target.changed_files() {
		println!("  {}", make_relative(&file.path, root));

		if show_diff {
			if let Some(preview) = &file.preview {
				print_diff(&preview.original, &preview.reduced);
			}
		}
	}
}

/// Print the changed lines between two strings, colorized.
fn print_diff(original: &str, reduced: &str) {
	let diff = TextDiff::from_lines(original, reduced);
	for change in diff.iter_all_changes() {
		match change.tag() {
			ChangeTag::Delete => {
				eprint!("    {}", colored!(format!("-{change}"), red));
			}
			ChangeTag::Insert => {
				eprint!("    {}", colored!(format!("+{change}"), green));
			}
			ChangeTag::Equal => continue,
		}

		if change.missing_newline() {
			eprintln!();
		}
	}
}

/// Make a path relative to root for display purposes.
fn make_relative(path: &Path, root: &Path) -> String {
	path.strip_prefix(root)
		.unwrap_or(path)
		.display()
		.to_string()
}
