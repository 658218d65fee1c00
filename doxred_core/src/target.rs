use crate::DoxredResult;
use crate::FileSelector;
use crate::ReducerChain;
use crate::html::html_chain;
use crate::js::js_chain;

/// Directory, relative to the project root, that the generator writes to.
pub const OUTPUT_DIR: &str = "html";

/// A set of generated files together with the chain that reduces them.
#[derive(Debug, Clone)]
pub struct Target {
	name: &'static str,
	label: &'static str,
	selector: FileSelector,
	chain: ReducerChain,
}

impl Target {
	pub fn new(
		name: &'static str,
		label: &'static str,
		selector: FileSelector,
		chain: ReducerChain,
	) -> Self {
		Self {
			name,
			label,
			selector,
			chain,
		}
	}

	/// Short identifier, e.g. `html`.
	pub fn name(&self) -> &'static str {
		self.name
	}

	/// Human-readable label used in status output, e.g. `HTML`.
	pub fn label(&self) -> &'static str {
		self.label
	}

	pub fn selector(&self) -> &FileSelector {
		&self.selector
	}

	pub fn chain(&self) -> &ReducerChain {
		&self.chain
	}
}

/// Every `*.html` page in the output directory.
pub fn html_target() -> DoxredResult<Target> {
	Ok(Target::new(
		"html",
		"HTML",
		FileSelector::new(OUTPUT_DIR, ["*.html"])?,
		html_chain()?,
	))
}

/// The navigation data scripts in the output directory.
pub fn js_target() -> DoxredResult<Target> {
	Ok(Target::new(
		"js",
		"JS",
		FileSelector::new(OUTPUT_DIR, ["menudata.js", "navtreedata.js"])?,
		js_chain(),
	))
}

/// The targets reduced by a normal run, in the order they run.
pub fn default_targets() -> DoxredResult<Vec<Target>> {
	Ok(vec![html_target()?, js_target()?])
}
