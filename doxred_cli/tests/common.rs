#![allow(dead_code)]

use std::path::Path;

use assert_cmd::Command;
use doxred_core::AnyEmptyResult;
use doxred_core::OUTPUT_DIR;
use insta_cmd::get_cargo_bin;

pub fn doxred_cmd() -> Command {
	let mut cmd = Command::new(get_cargo_bin("doxred"));
	cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
	cmd
}

/// Write `content` to `name` inside the generated output directory.
pub fn write_output_file(root: &Path, name: &str, content: &str) -> AnyEmptyResult {
	let dir = root.join(OUTPUT_DIR);
	std::fs::create_dir_all(&dir)?;
	std::fs::write(dir.join(name), content)?;

	Ok(())
}

pub fn read_output_file(root: &Path, name: &str) -> std::io::Result<String> {
	std::fs::read_to_string(root.join(OUTPUT_DIR).join(name))
}
