//! `doxred_core` rewrites Doxygen-generated HTML and JavaScript so the output
//! matches a custom documentation theme. It does this with plain text
//! rewrites: no document tree is ever built.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Target
//!   → File selector (lists matching files in the generator's output directory)
//!   → Pipeline runner (reads one file at a time)
//!   → Reducer chain (folds the contents through every reducer, in order)
//!   → Pipeline runner (writes the result back in place)
//! ```
//!
//! ## Modules
//!
//! - [`html`]: The reducers for generated HTML pages and the order they run
//!   in.
//! - [`js`]: The reducers for the navigation data scripts.
//!
//! ## Key Types
//!
//! - [`Reducer`]: A named, pure text transform built from literal and regex
//!   [`Rule`]s.
//! - [`ReducerChain`]: The ordered reducers applied to one file.
//! - [`FileSelector`]: Glob-based selection of files in one directory.
//! - [`Target`]: A selector paired with the chain that reduces its files.
//! - [`RunReport`]: What a run changed, per target and per file.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use doxred_core::RunMode;
//! use doxred_core::default_targets;
//! use doxred_core::run_pipeline;
//!
//! let targets = default_targets().unwrap();
//! let report = run_pipeline(Path::new("."), &targets, RunMode::Write).unwrap();
//! println!("{} file(s) reduced", report.changed_count());
//! ```

pub use error::*;
pub use reducer::*;
pub use runner::*;
pub use selector::*;
pub use target::*;

#[allow(unused_assignments)]
mod error;
pub mod html;
pub mod js;
mod reducer;
mod runner;
mod selector;
mod target;

#[cfg(test)]
mod __fixtures;
