//! File-backed ordered task collections.
//!
//! A [`TaskStore`] is the in-memory mirror of one task file: load assigns
//! 1-based line numbers in file order, handlers mutate the sequence, save
//! writes the whole file back. Line numbers are NOT recomputed after
//! structural edits; lookups keep using the numbers assigned at load time,
//! and the next load renumbers from scratch.
//!
//! Concurrent invocations racing on the same file are not guarded against:
//! the last writer wins. Known hazard, not a contract.

use std::{
	fs,
	io::Write as IoWrite,
	path::{Path, PathBuf},
};

use crate::task::Task;

pub static TODO_FILE: &str = "todo.txt";
pub static DONE_FILE: &str = "done.txt";
pub static REPORT_FILE: &str = "report.txt";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
	#[error("TODO: No task {0}.")]
	NoSuchTask(usize),
	#[error("TODO: File {} does not exist.", .0.display())]
	MissingFile(PathBuf),
	#[error("failed to access {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> StoreError {
	let path = path.to_path_buf();
	move |source| StoreError::Io { path, source }
}

/// The working directory holding the task files. Resolved once per
/// invocation and passed explicitly to every command handler.
#[derive(Clone, Debug, derive_new::new)]
pub struct Workspace {
	dir: PathBuf,
}

impl Workspace {
	pub fn dir(&self) -> &Path {
		&self.dir
	}

	pub fn file(&self, name: &str) -> PathBuf {
		self.dir.join(name)
	}

	/// The active task file, created empty on first access.
	pub fn todo(&self) -> Result<TaskStore, StoreError> {
		TaskStore::load(self.file(TODO_FILE))
	}

	/// The archive file, created empty on first access.
	pub fn done(&self) -> Result<TaskStore, StoreError> {
		TaskStore::load(self.file(DONE_FILE))
	}

	/// A user-named file. Unlike the primaries, absence is an error.
	pub fn named(&self, name: &str) -> Result<TaskStore, StoreError> {
		TaskStore::open_existing(self.file(name))
	}
}

/// Ordered sequence of tasks bound to one file.
#[derive(Debug)]
pub struct TaskStore {
	path: PathBuf,
	tasks: Vec<Task>,
}

impl TaskStore {
	/// Load a task file, creating it empty if it does not exist.
	pub fn load(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
		let path = path.into();
		if !path.exists() {
			fs::write(&path, "").map_err(io_err(&path))?;
		}
		Self::open_existing(path)
	}

	/// Load a task file that must already exist.
	pub fn open_existing(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
		let path = path.into();
		if !path.exists() {
			return Err(StoreError::MissingFile(path));
		}
		let raw = fs::read_to_string(&path).map_err(io_err(&path))?;
		let tasks: Vec<Task> = raw.split_inclusive('\n').enumerate().map(|(i, line)| Task::decode(line, i + 1)).collect();
		tracing::debug!(path = %path.display(), tasks = tasks.len(), "loaded task file");
		Ok(Self { path, tasks })
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	pub fn tasks(&self) -> &[Task] {
		&self.tasks
	}

	pub fn len(&self) -> usize {
		self.tasks.len()
	}

	pub fn is_empty(&self) -> bool {
		self.tasks.is_empty()
	}

	/// Look up a task by its load-time line number.
	pub fn get(&self, line_number: usize) -> Option<&Task> {
		self.tasks.iter().find(|t| t.line_number == line_number)
	}

	pub fn get_mut(&mut self, line_number: usize) -> Option<&mut Task> {
		self.tasks.iter_mut().find(|t| t.line_number == line_number)
	}

	/// Remove and return the task with the given load-time line number.
	pub fn remove(&mut self, line_number: usize) -> Result<Task, StoreError> {
		let position = self.tasks.iter().position(|t| t.line_number == line_number).ok_or(StoreError::NoSuchTask(line_number))?;
		Ok(self.tasks.remove(position))
	}

	/// Insert a task at a 1-based position, clamped to the sequence bounds.
	pub fn insert_at(&mut self, position: usize, task: Task) {
		let index = position.saturating_sub(1).min(self.tasks.len());
		self.tasks.insert(index, task);
	}

	/// Reorder: pull the task with the given line number out and re-insert it
	/// at the 1-based destination position.
	pub fn move_to(&mut self, line_number: usize, position: usize) -> Result<(), StoreError> {
		let task = self.remove(line_number)?;
		self.insert_at(position, task);
		Ok(())
	}

	/// Substitute the full content of the task at the given line number.
	pub fn replace(&mut self, line_number: usize, line: &str) -> Result<(), StoreError> {
		let task = self.get_mut(line_number).ok_or(StoreError::NoSuchTask(line_number))?;
		task.replace(line);
		Ok(())
	}

	/// Drop blank lines and exact duplicate lines (first occurrence wins).
	/// Returns how many tasks were removed.
	pub fn deduplicate(&mut self) -> usize {
		let before = self.tasks.len();
		let mut seen = std::collections::HashSet::new();
		self.tasks.retain(|t| !t.is_blank() && seen.insert(t.body().to_string()));
		before - self.tasks.len()
	}

	/// Pull every completed task out of the sequence, preserving order.
	pub fn take_completed(&mut self) -> Vec<Task> {
		let (done, rest): (Vec<Task>, Vec<Task>) = std::mem::take(&mut self.tasks).into_iter().partition(|t| t.is_completed());
		self.tasks = rest;
		done
	}

	/// Overwrite the backing file with the current sequence. Blank tasks are
	/// silently skipped, so blank lines never survive a rewrite.
	pub fn save(&self) -> Result<(), StoreError> {
		let mut out = String::new();
		for task in &self.tasks {
			if !task.is_blank() {
				out.push_str(task.content());
			}
		}
		tracing::debug!(path = %self.path.display(), tasks = self.tasks.len(), "writing task file");
		fs::write(&self.path, out).map_err(io_err(&self.path))
	}
}

/// Append one line of text to a file, creating it if needed. A trailing
/// newline is added when missing.
pub fn append_line(path: &Path, text: &str) -> Result<(), StoreError> {
	let mut file = fs::OpenOptions::new().create(true).append(true).open(path).map_err(io_err(path))?;
	file.write_all(text.as_bytes()).map_err(io_err(path))?;
	if !text.ends_with('\n') {
		file.write_all(b"\n").map_err(io_err(path))?;
	}
	Ok(())
}

/// Append whole tasks to a file (the archive path for done.txt).
pub fn append_tasks(path: &Path, tasks: &[Task]) -> Result<(), StoreError> {
	let mut file = fs::OpenOptions::new().create(true).append(true).open(path).map_err(io_err(path))?;
	for task in tasks {
		file.write_all(task.content().as_bytes()).map_err(io_err(path))?;
	}
	Ok(())
}
