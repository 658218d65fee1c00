use std::path::Path;

use crate::AnyEmptyResult;
use crate::DoxredResult;
use crate::OUTPUT_DIR;
use crate::Reducer;
use crate::html;
use crate::js;

/// A trimmed-down class page as the generator emits it.
pub fn class_page_html() -> &'static str {
	r#"<div class="header">
  <div class="headertitle"><div class="title">Display Class Reference</div></div>
</div>
<table class="memberdecls">
<tr class="heading"><td colspan="2"><h2 class="groupheader"><a id="pub-methods" name="pub-methods"></a>Public Member Functions</h2></td></tr>
<tr class="memitem:a1"><td class="memItemLeft" align="right" valign="top">virtual void&#160;</td><td class="memItemRight" valign="bottom"><a class="el" href="class_display.html#a1">refresh</a> (void)</td></tr>
<tr class="memitem:a2"><td class="memItemLeft" align="right" valign="top">std::vector&lt; std::pair&lt; unsigned, double &gt; &gt;&#160;</td><td class="memItemRight" valign="bottom"><a class="el" href="class_display.html#a2">modes</a> (const std::vector&lt; int * &gt; &amp;list)</td></tr>
<tr class="memitem:a3"><td class="memItemLeft" align="right" valign="top">enum &#160;</td><td class="memItemRight" valign="bottom"><a class="el" href="class_display.html#a3">mode_e</a> { <a class="el" href="class_display.html#a3a1">mode_e::windowed</a>, <a class="el" href="class_display.html#a3a2">mode_e::fullscreen</a> }</td></tr>
<tr class="memitem:a4"><td class="memItemLeft" align="right" valign="top">const char *</td><td class="memItemRight" valign="bottom"><a class="el" href="class_display.html#a4">title</a> (void) const</td></tr>
</table>
<table class="memname">
<tr>
<td class="memname">virtual void Display::refresh </td>
<td>(</td>
<td class="paramtype">void&#160;</td>
<td class="paramname"></td><td>)</td>
</tr>
</table>
<span class="mlabels"><span class="mlabel">virtual</span></span>
<div class="fragment"><div class="line">display.refresh();</div>
<div class="line"><span class="keyword">return</span> 0;</div>
</div><!-- fragment -->
"#
}

/// The generator's `menudata.js`, abridged.
pub fn menu_data_js() -> &'static str {
	r#"var menudata={children:[
{text:"Main Page",url:"index.html"},
{text:"Data Structures",url:"annotated.html",children:[
{text:"Data Structures",url:"annotated.html"},
{text:"Data Structure Index",url:"classes.html"},
{text:"Data Fields",url:"functions.html"}]},
{text:"Files",url:"files.html",children:[
{text:"File List",url:"files.html"}]}]}
"#
}

/// Every reducer of every built-in chain.
pub fn all_reducers() -> DoxredResult<Vec<Reducer>> {
	let mut reducers = html::html_chain()?.reducers().to_vec();
	reducers.extend(js::js_chain().reducers().iter().cloned());

	Ok(reducers)
}

/// Write `content` to `name` inside the output directory under `root`.
pub fn write_output_file(root: &Path, name: &str, content: &str) -> AnyEmptyResult {
	let dir = root.join(OUTPUT_DIR);
	std::fs::create_dir_all(&dir)?;
	std::fs::write(dir.join(name), content)?;

	Ok(())
}
