//! Codec for single task lines in the todo.txt convention.
//!
//! A task is one line of text. Priority, completion, projects and contexts
//! are all derived from the raw line on every decode; mutation happens as
//! string edits on the raw line followed by a re-derive, so the structured
//! fields can never drift out of sync with the text.

use std::sync::LazyLock;

use jiff::civil::Date;
use regex::Regex;

static PRIORITY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\(([A-Z])\)").unwrap());
static COMPLETED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"x \d{4}-\d{2}-\d{2} ").unwrap());
static PROJECT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\+\w+").unwrap());
static CONTEXT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@\w+").unwrap());

/// One task line.
///
/// `line_number` is the 1-based position in the file at load time. It is not
/// persisted and goes stale after structural edits to the containing store;
/// it is recomputed on every load.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Task {
	pub line_number: usize,
	content: String,
	priority: Option<char>,
	completed: bool,
	projects: Vec<String>,
	contexts: Vec<String>,
}

/// Rejected priority letter for [`Task::set_priority`].
#[derive(Debug, thiserror::Error)]
#[error("priority must be a single letter A-Z")]
pub struct InvalidPriority;

impl Task {
	/// Decode a raw line into a task. Never fails: any text is a valid task.
	/// A missing trailing newline is restored so every stored line ends with
	/// exactly one.
	pub fn decode(line: &str, line_number: usize) -> Self {
		let mut content = line.to_string();
		if !content.ends_with('\n') {
			content.push('\n');
		}
		let mut task = Self {
			line_number,
			content,
			priority: None,
			completed: false,
			projects: Vec::new(),
			contexts: Vec::new(),
		};
		task.rederive();
		task
	}

	/// Encode back to text. The raw content is the source of truth, so this
	/// is the identity transform.
	pub fn encode(&self) -> &str {
		&self.content
	}

	/// The raw line, trailing newline included.
	pub fn content(&self) -> &str {
		&self.content
	}

	/// The line without its trailing newline.
	pub fn body(&self) -> &str {
		self.content.trim_end_matches('\n')
	}

	pub fn priority(&self) -> Option<char> {
		self.priority
	}

	pub fn is_completed(&self) -> bool {
		self.completed
	}

	pub fn is_blank(&self) -> bool {
		self.body().trim().is_empty()
	}

	pub fn projects(&self) -> &[String] {
		&self.projects
	}

	pub fn contexts(&self) -> &[String] {
		&self.contexts
	}

	/// Remove the priority marker, if any. A no-op on unprioritized tasks.
	pub fn deprioritize(&mut self) {
		if let Some(p) = self.priority {
			self.content = self.content.replacen(&format!("({p}) "), "", 1);
			self.rederive();
		}
	}

	/// Mark the task done: strip the priority marker, then prefix the line
	/// with `x YYYY-MM-DD `. Deliberately not idempotent: marking a done task
	/// done again prepends a second marker.
	pub fn mark_done(&mut self, today: Date) {
		if self.priority.is_some() {
			self.deprioritize();
		}
		self.content = format!("x {today} {}", self.content);
		self.rederive();
	}

	/// Prepend `text ` to the line.
	pub fn prepend(&mut self, text: &str) {
		self.content = format!("{text} {}\n", self.body());
		self.rederive();
	}

	/// Append ` text` to the line.
	pub fn append(&mut self, text: &str) {
		self.content = format!("{} {text}\n", self.body());
		self.rederive();
	}

	/// Set or replace the priority. Lowercase letters are folded to
	/// uppercase; anything that is not a single A-Z letter is rejected.
	pub fn set_priority(&mut self, letter: char) -> Result<(), InvalidPriority> {
		let letter = letter.to_ascii_uppercase();
		if !letter.is_ascii_uppercase() {
			return Err(InvalidPriority);
		}
		match self.priority {
			Some(old) => self.content = self.content.replacen(&format!("({old})"), &format!("({letter})"), 1),
			None => self.content = format!("({letter}) {}", self.content),
		}
		self.rederive();
		Ok(())
	}

	/// Replace the whole line, keeping the position.
	pub fn replace(&mut self, line: &str) {
		*self = Self::decode(line, self.line_number);
	}

	/// Recompute the derived fields from the raw content.
	fn rederive(&mut self) {
		self.priority = PRIORITY_RE.captures(&self.content).and_then(|c| c.get(1)).and_then(|m| m.as_str().chars().next());
		self.completed = COMPLETED_RE.is_match(&self.content);
		let body = self.body();
		self.projects = scan_tags(body, &PROJECT_RE);
		self.contexts = scan_tags(body, &CONTEXT_RE);
	}
}

/// Collect `+project`/`@context` tokens out of a line body (no trailing
/// newline). A token counts only when it sits at the start of the line or
/// after whitespace, AND is followed by a whitespace character. The trailing
/// requirement means a tag at the absolute end of a line is not captured;
/// that boundary is part of the grammar and covered by tests.
fn scan_tags(body: &str, pattern: &Regex) -> Vec<String> {
	let mut tags: Vec<String> = Vec::new();
	for m in pattern.find_iter(body) {
		let preceded = m.start() == 0 || body[..m.start()].ends_with(|c: char| c.is_whitespace());
		let followed = body[m.end()..].starts_with(|c: char| c.is_whitespace());
		if preceded && followed && !tags.iter().any(|t| t == m.as_str()) {
			tags.push(m.as_str().to_string());
		}
	}
	tags
}
