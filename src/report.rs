//! Codec for `report.txt` entries.
//!
//! One entry per line: `YYYY-MM-DDTHH:MM:SS <pending> <done>`. New entries
//! are only appended when the counts changed against the most recent
//! parseable entry; history is never rewritten.

use std::sync::LazyLock;

use jiff::Zoned;
use regex::Regex;

static ENTRY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}) (\d+) (\d+)").unwrap());

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReportEntry {
	pub stamp: String,
	pub pending: usize,
	pub done: usize,
}

impl ReportEntry {
	pub fn new(now: &Zoned, pending: usize, done: usize) -> Self {
		Self {
			stamp: now.strftime("%Y-%m-%dT%H:%M:%S").to_string(),
			pending,
			done,
		}
	}

	pub fn decode(line: &str) -> Option<Self> {
		let caps = ENTRY_RE.captures(line)?;
		Some(Self {
			stamp: caps[1].to_string(),
			pending: caps[2].parse().ok()?,
			done: caps[3].parse().ok()?,
		})
	}

	pub fn encode(&self) -> String {
		format!("{} {} {}\n", self.stamp, self.pending, self.done)
	}
}

/// The most recent entry of a report file, skipping blank lines. `None` when
/// the file is empty or its last line does not parse.
pub fn last_entry(content: &str) -> Option<ReportEntry> {
	content.lines().filter(|line| !line.trim().is_empty()).next_back().and_then(ReportEntry::decode)
}
