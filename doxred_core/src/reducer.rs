use std::borrow::Cow;
use std::fmt;

use regex::Captures;
use regex::Regex;

use crate::DoxredError;
use crate::DoxredResult;

/// Computes the replacement for one regex match.
pub type ReplaceFn = fn(&Captures<'_>) -> String;

/// A single rewrite step inside a [`Reducer`].
#[derive(Clone)]
pub enum Rule {
	/// Replace every occurrence of `from` with `to`.
	Literal {
		from: &'static str,
		to: &'static str,
	},
	/// Replace every match of `regex` by expanding a `$n` / `${n}` template.
	Template { regex: Regex, replacement: String },
	/// Replace every match of `regex` with the output of a function over its
	/// captures.
	Computed { regex: Regex, replace: ReplaceFn },
	/// Run `rules` in order over each match of `region`, leaving the text
	/// between matches alone.
	Scoped { region: Regex, rules: Vec<Rule> },
}

impl Rule {
	/// Apply this rule to `text`. Borrows the input when nothing matched.
	pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
		match self {
			Self::Literal { from, to } => {
				if text.contains(from) {
					Cow::Owned(text.replace(from, to))
				} else {
					Cow::Borrowed(text)
				}
			}
			Self::Template { regex, replacement } => regex.replace_all(text, replacement.as_str()),
			Self::Computed { regex, replace } => {
				regex.replace_all(text, |captures: &Captures<'_>| replace(captures))
			}
			Self::Scoped { region, rules } => {
				region.replace_all(text, |captures: &Captures<'_>| {
					rules
						.iter()
						.fold(captures[0].to_string(), |scoped, rule| {
							rule.apply(&scoped).into_owned()
						})
				})
			}
		}
	}

	/// The literal text or regex source this rule searches for.
	pub fn pattern(&self) -> &str {
		match self {
			Self::Literal { from, .. } => from,
			Self::Template { regex, .. } | Self::Computed { regex, .. } => regex.as_str(),
			Self::Scoped { region, .. } => region.as_str(),
		}
	}
}

impl fmt::Debug for Rule {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Literal { from, to } => {
				f.debug_struct("Literal")
					.field("from", from)
					.field("to", to)
					.finish()
			}
			Self::Template { regex, replacement } => {
				f.debug_struct("Template")
					.field("regex", &regex.as_str())
					.field("replacement", replacement)
					.finish()
			}
			Self::Computed { regex, .. } => {
				f.debug_struct("Computed")
					.field("regex", &regex.as_str())
					.finish_non_exhaustive()
			}
			Self::Scoped { region, rules } => {
				f.debug_struct("Scoped")
					.field("region", &region.as_str())
					.field("rules", rules)
					.finish()
			}
		}
	}
}

/// A named, pure text transform made of an ordered list of [`Rule`]s.
///
/// Reducers never fail once built: every pattern is compiled up front by
/// [`ReducerBuilder`], so applying a reducer is a total function from text to
/// text.
#[derive(Debug, Clone)]
pub struct Reducer {
	name: &'static str,
	rules: Vec<Rule>,
}

impl Reducer {
	pub fn builder(name: &'static str) -> ReducerBuilder {
		ReducerBuilder {
			name,
			rules: Vec::new(),
		}
	}

	pub fn name(&self) -> &'static str {
		self.name
	}

	pub fn rules(&self) -> &[Rule] {
		&self.rules
	}

	/// Run every rule over `text` in order, each one seeing the previous
	/// rule's output.
	pub fn apply(&self, text: &str) -> String {
		let mut output = text.to_string();

		for rule in &self.rules {
			let rewritten = match rule.apply(&output) {
				Cow::Borrowed(_) => continue,
				Cow::Owned(rewritten) => rewritten,
			};
			output = rewritten;
		}

		output
	}
}

/// Collects the rules of a [`Reducer`], compiling regex patterns as they are
/// added.
#[derive(Debug)]
pub struct ReducerBuilder {
	name: &'static str,
	rules: Vec<Rule>,
}

impl ReducerBuilder {
	pub fn literal(mut self, from: &'static str, to: &'static str) -> Self {
		self.rules.push(Rule::Literal { from, to });
		self
	}

	pub fn literals(self, replacements: &[(&'static str, &'static str)]) -> Self {
		replacements
			.iter()
			.fold(self, |builder, &(from, to)| builder.literal(from, to))
	}

	pub fn pattern(mut self, pattern: &str, replacement: impl Into<String>) -> DoxredResult<Self> {
		let regex = self.compile(pattern)?;
		self.rules.push(Rule::Template {
			regex,
			replacement: replacement.into(),
		});
		Ok(self)
	}

	pub fn pattern_with(mut self, pattern: &str, replace: ReplaceFn) -> DoxredResult<Self> {
		let regex = self.compile(pattern)?;
		self.rules.push(Rule::Computed { regex, replace });
		Ok(self)
	}

	/// Add rules that only apply inside matches of `region`.
	pub fn within(
		mut self,
		region: &str,
		scope: impl FnOnce(Self) -> DoxredResult<Self>,
	) -> DoxredResult<Self> {
		let region = self.compile(region)?;
		let scoped = scope(Reducer::builder(self.name))?;
		self.rules.push(Rule::Scoped {
			region,
			rules: scoped.rules,
		});
		Ok(self)
	}

	pub fn build(self) -> Reducer {
		Reducer {
			name: self.name,
			rules: self.rules,
		}
	}

	fn compile(&self, pattern: &str) -> DoxredResult<Regex> {
		Regex::new(pattern).map_err(|source| {
			DoxredError::InvalidPattern {
				reducer: self.name.to_string(),
				pattern: pattern.to_string(),
				source,
			}
		})
	}
}

/// The fixed, ordered list of reducers applied to one file's contents.
#[derive(Debug, Clone, Default)]
pub struct ReducerChain {
	reducers: Vec<Reducer>,
}

impl ReducerChain {
	pub fn new(reducers: Vec<Reducer>) -> Self {
		Self { reducers }
	}

	pub fn reducers(&self) -> &[Reducer] {
		&self.reducers
	}

	pub fn names(&self) -> Vec<&'static str> {
		self.reducers.iter().map(Reducer::name).collect()
	}

	pub fn is_empty(&self) -> bool {
		self.reducers.is_empty()
	}

	/// Fold `text` through every reducer in order.
	pub fn apply(&self, text: &str) -> String {
		let mut output = text.to_string();

		for reducer in &self.reducers {
			let reduced = reducer.apply(&output);
			if reduced != output {
				tracing::trace!(reducer = reducer.name(), "reducer rewrote text");
				output = reduced;
			}
		}

		output
	}
}
