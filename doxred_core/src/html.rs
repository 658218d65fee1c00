//! Reducers for Doxygen-generated HTML pages.
//!
//! The rewrites work on raw text and rely on the generator putting each
//! table cell, code line and page title on a single line. Patterns never use
//! `.` across newlines.

use regex::Captures;

use crate::DoxredResult;
use crate::Reducer;
use crate::ReducerChain;

/// Class added to elements the theme hides or de-emphasizes.
pub const UNNECESSARY_ELEMENT_CLASS: &str = "vcs-unnecessary-element";

/// The HTML reducers in the order they must run.
pub fn html_chain() -> DoxredResult<ReducerChain> {
	Ok(ReducerChain::new(vec![
		remove_non_breaking_spaces(),
		remove_unnecessary_spaces()?,
		simplify_enum_declarations()?,
		mark_unnecessary_elements()?,
		standardize_code_elements()?,
		singly_capitalize()?,
	]))
}

pub fn remove_non_breaking_spaces() -> Reducer {
	Reducer::builder("remove_non_breaking_spaces")
		.literals(&[("&nbsp;", " "), ("&#160;", " ")])
		.build()
}

/// Single-line declaration markup: member list rows, prototype cells,
/// template lines and page titles. Code fragments and prose are never
/// matched.
const DECLARATION_REGION: &str = concat!(
	r#"<tr class="memitem[^"]*"[^>]*>.*?</tr>"#,
	r#"|<td class="(?:memname|paramtype|paramname)">.*?</td>"#,
	r#"|<div class="(?:memtemplate|title)">.*?</div>"#,
);

pub fn remove_unnecessary_spaces() -> DoxredResult<Reducer> {
	let reducer = Reducer::builder("remove_unnecessary_spaces")
		.literal(r#"class="paramtype">void <"#, r#"class="paramtype">void<"#)
		.pattern_with(r#"(<td class="memname">)(.*?)(</td>)"#, trim_memname)?
		.within(DECLARATION_REGION, |scope| {
			// "std::vector&lt; std::pair&lt; unsigned, double &gt; &gt;"
			//   => "std::vector&lt;std::pair&lt;unsigned, double&gt;&gt;"
			scope
				.pattern(r"&lt; +", "&lt;")?
				.pattern(r" +&gt;", "&gt;")?
				// "void *</td>" => "void*</td>"
				.pattern(r" +(\*|&amp;) *</td>", "${1}</td>")?
				// "&lt;int *&gt;" => "&lt;int*&gt;", without reaching back past a
				// closed argument list.
				.pattern(
					r"(&lt;(?:[^&\n]|&amp;|&lt;)*?) +((?:\*|&amp;)&gt;)",
					"${1}${2}",
				)
		})?
		.build();

	Ok(reducer)
}

fn trim_memname(captures: &Captures<'_>) -> String {
	format!(
		"{}{}{}",
		&captures[1],
		captures[2].trim_end_matches(' '),
		&captures[3]
	)
}

/// `enum_e { enum_e::a, enum_e::b }` => `enum_e { a, b }`, by wrapping the
/// qualifier in a span the theme hides.
pub fn simplify_enum_declarations() -> DoxredResult<Reducer> {
	let reducer = Reducer::builder("simplify_enum_declarations")
		.pattern(
			r#"(<a class="el"[^>]*>)([^<]*?_e::)([^<]+</a>)"#,
			r#"${1}<span class="vcs-enum-namespace">${2}</span>${3}"#,
		)?
		.build();

	Ok(reducer)
}

pub fn mark_unnecessary_elements() -> DoxredResult<Reducer> {
	let reducer = Reducer::builder("mark_unnecessary_elements")
		.literals(&[
			(
				r#"<span class="mlabel">strong</span>"#,
				r#"<span class="mlabel vcs-unnecessary-element">strong</span>"#,
			),
			(
				r#"<span class="mlabel">virtual</span>"#,
				r#"<span class="mlabel vcs-unnecessary-element">virtual</span>"#,
			),
			(
				r#"<td class="paramtype">void</td>"#,
				r#"<td class="paramtype vcs-unnecessary-element">void</td>"#,
			),
		])
		// Functions declared as taking `(void)`.
		.pattern(
			r#"(<td class="memItemRight"[^>]*><a class="el"[^>]*>[^<]*</a> )\(void\)(.*?</td>)"#,
			format!(r#"${{1}}(<span class="{UNNECESSARY_ELEMENT_CLASS}">void</span>)${{2}}"#),
		)?
		// `virtual` in front of a return type.
		.pattern(
			r#"(<td class="memItemLeft"[^>]*>)(virtual)"#,
			format!(r#"${{1}}<span class="{UNNECESSARY_ELEMENT_CLASS}">${{2}}</span>"#),
		)?
		.pattern(
			r#"(<td class="memname">)(virtual)"#,
			format!(r#"${{1}}<span class="{UNNECESSARY_ELEMENT_CLASS}">${{2}}</span>"#),
		)?
		.build();

	Ok(reducer)
}

/// Turns
///
/// ```html
/// <div class="fragment">
///   <div class="line">...</div>
/// </div><!-- fragment -->
/// ```
///
/// into
///
/// ```html
/// <pre class="fragment">
///   <code class="line">...</code>
/// </pre><!-- fragment -->
/// ```
///
/// The generator always follows the fragment's closing tag with the
/// `<!-- fragment -->` comment, which is what identifies it. A line that
/// itself contains a `<div>` is not supported.
pub fn standardize_code_elements() -> DoxredResult<Reducer> {
	let reducer = Reducer::builder("standardize_code_elements")
		.literal(r#"<div class="fragment">"#, r#"<pre class="fragment">"#)
		.literal("</div><!-- fragment -->", "</pre><!-- fragment -->")
		.pattern(
			r#"<div class="line">(.*?)</div>"#,
			r#"<code class="line">${1}</code>"#,
		)?
		.build();

	Ok(reducer)
}

pub fn singly_capitalize() -> DoxredResult<Reducer> {
	let reducer = Reducer::builder("singly_capitalize")
		.pattern_with(
			r#"(<div class="title">)(.*?) (File|Struct|Class|Struct Template|Class Template) Reference(.*?)(</div>)"#,
			split_reference_title,
		)?
		.literals(&[
			(
				r#"<div class="title">File List</div>"#,
				r#"<div class="title">File list</div>"#,
			),
			(
				r#"<div class="title">Data Structures</div>"#,
				r#"<div class="title">Data structures</div>"#,
			),
			(
				r#"<div class="title">Data Structure Index</div>"#,
				r#"<div class="title">Data structure index</div>"#,
			),
		])
		.pattern_with(
			r#"(<h2 class="groupheader">(?:<a [^>]*></a>)?)([^<]+)(</h2>)"#,
			capitalize_group_header,
		)?
		.build();

	Ok(reducer)
}

/// `file.h File Reference` => referent `file.h`, referrer `File reference`.
fn split_reference_title(captures: &Captures<'_>) -> String {
	let kind = captures[3].trim_end_matches(" Template");

	format!(
		r#"{}<span class="vcs-referent">{}</span><span class="vcs-separator"></span><span class="vcs-referrer">{kind} reference{}</span>{}"#,
		&captures[1], &captures[2], &captures[4], &captures[5],
	)
}

fn capitalize_group_header(captures: &Captures<'_>) -> String {
	format!(
		"{}{}{}",
		&captures[1],
		sentence_case(&captures[2]),
		&captures[3]
	)
}

/// Upper-case the first character and lower-case the rest. A first character
/// whose upper-case form is more than one character (`ß`) is kept as is.
pub fn sentence_case(text: &str) -> String {
	let text = text.trim();
	let mut chars = text.chars();

	let Some(first) = chars.next() else {
		return String::new();
	};

	let mut output = String::with_capacity(text.len());
	let mut upper = first.to_uppercase();
	match (upper.next(), upper.next()) {
		(Some(single), None) => output.push(single),
		_ => output.push(first),
	}
	output.extend(chars.flat_map(char::to_lowercase));

	output
}
