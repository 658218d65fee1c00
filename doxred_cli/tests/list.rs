use doxred_core::AnyEmptyResult;

mod common;

#[test]
fn list_shows_targets_and_reducers() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::doxred_cmd()
		.arg("list")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("HTML (html)"))
		.stdout(predicates::str::contains("html/*.html"))
		.stdout(predicates::str::contains(
			"remove_non_breaking_spaces -> remove_unnecessary_spaces -> \
			 simplify_enum_declarations -> mark_unnecessary_elements -> \
			 standardize_code_elements -> singly_capitalize",
		))
		.stdout(predicates::str::contains("JS (js)"))
		.stdout(predicates::str::contains("html/menudata.js, html/navtreedata.js"));

	Ok(())
}

#[test]
fn list_shows_selected_files() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_output_file(tmp.path(), "index.html", "<p></p>\n")?;
	common::write_output_file(tmp.path(), "files.html", "<p></p>\n")?;
	common::write_output_file(tmp.path(), "navtreedata.js", "var NAVTREE = [];\n")?;
	common::write_output_file(tmp.path(), "dynsections.js", "function f() {}\n")?;

	let output = common::doxred_cmd()
		.arg("list")
		.arg("--path")
		.arg(tmp.path())
		.output()?;

	assert!(output.status.success());
	let stdout = String::from_utf8(output.stdout)?;
	assert!(stdout.contains("Files      2"));
	assert!(stdout.contains("Files      1"));
	assert!(stdout.contains("index.html"));
	assert!(stdout.contains("files.html"));
	assert!(stdout.contains("navtreedata.js"));
	assert!(!stdout.contains("dynsections.js"));

	let index = common::read_output_file(tmp.path(), "index.html")?;
	assert_eq!(index, "<p></p>\n");

	Ok(())
}
