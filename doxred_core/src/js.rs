//! Reducers for the generator's navigation data scripts (`menudata.js` and
//! `navtreedata.js`).

use crate::Reducer;
use crate::ReducerChain;

pub fn js_chain() -> ReducerChain {
	ReducerChain::new(vec![singly_capitalize()])
}

/// Sentence-case the quoted navigation labels. The project title doubles as
/// the label of the main page, so it is renamed too.
pub fn singly_capitalize() -> Reducer {
	Reducer::builder("singly_capitalize")
		.literals(&[
			(r#""Main Page""#, r#""Main page""#),
			(r#""Data Fields""#, r#""Data fields""#),
			(r#""Data Structures""#, r#""Data structures""#),
			(r#""Data Structure Index""#, r#""Data structure index""#),
			(r#""File List""#, r#""File list""#),
			(r#""VCS Developer Documentation""#, r#""Main page""#),
		])
		.build()
}
