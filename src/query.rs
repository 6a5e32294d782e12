//! Filtering and ordering over task sequences.

use std::{collections::BTreeSet, sync::LazyLock};

use regex::Regex;

use crate::task::Task;

static SINGLE_PRIORITY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\(([A-Z])\)$").unwrap());
static PRIORITY_RANGE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\(([A-Z])-([A-Z])\)$").unwrap());

/// Keep the tasks matching every term. A term prefixed with `-` inverts to
/// "must not contain"; all terms are ANDed; no terms matches everything.
/// Matching is plain substring search over the raw line.
pub fn filter_by_terms<'t>(tasks: impl IntoIterator<Item = &'t Task>, terms: &[String]) -> Vec<&'t Task> {
	tasks
		.into_iter()
		.filter(|task| {
			terms.iter().all(|term| match term.strip_prefix('-') {
				Some(excluded) => !task.content().contains(excluded),
				None => task.content().contains(term),
			})
		})
		.collect()
}

/// A `(X)` or `(X-Y)` selector, as accepted by `listpri`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PrioritySelection {
	Single(char),
	Range(char, char),
}

impl PrioritySelection {
	pub fn decode(s: &str) -> Option<Self> {
		if let Some(caps) = SINGLE_PRIORITY_RE.captures(s) {
			return caps[1].chars().next().map(Self::Single);
		}
		if let Some(caps) = PRIORITY_RANGE_RE.captures(s) {
			let start = caps[1].chars().next()?;
			let end = caps[2].chars().next()?;
			return Some(Self::Range(start, end));
		}
		None
	}

	/// Inclusive on both ends; an inverted range matches nothing.
	pub fn matches(&self, priority: char) -> bool {
		match self {
			Self::Single(letter) => priority == *letter,
			Self::Range(start, end) => (*start..=*end).contains(&priority),
		}
	}
}

/// The display order every list-style command uses.
///
/// Prioritized tasks come first, sorted by the priority letter ONLY; ties
/// among the same letter keep their original relative order. Unprioritized
/// tasks follow, sorted lexicographically by full content. The asymmetry is
/// deliberate and load-bearing for output compatibility.
pub fn sort_for_display<'t>(tasks: &[&'t Task]) -> Vec<&'t Task> {
	let (mut ordered, mut rest): (Vec<&Task>, Vec<&Task>) = tasks.iter().copied().partition(|t| t.priority().is_some());
	ordered.sort_by_key(|t| t.priority());
	rest.sort_by(|a, b| a.content().cmp(b.content()));
	ordered.extend(rest);
	ordered
}

/// Unique `+project` tags across the given tasks, sorted for stable output.
pub fn unique_projects<'t>(tasks: impl IntoIterator<Item = &'t Task>) -> Vec<String> {
	unique_tags(tasks, Task::projects)
}

/// Unique `@context` tags across the given tasks, sorted for stable output.
pub fn unique_contexts<'t>(tasks: impl IntoIterator<Item = &'t Task>) -> Vec<String> {
	unique_tags(tasks, Task::contexts)
}

fn unique_tags<'t>(tasks: impl IntoIterator<Item = &'t Task>, tags: impl Fn(&Task) -> &[String]) -> Vec<String> {
	let set: BTreeSet<String> = tasks.into_iter().flat_map(|t| tags(t).iter().cloned()).collect();
	set.into_iter().collect()
}
