//! Terminal rendering of task lines.
//!
//! Each rendered line is the zero-padded 2-digit line number, a space, and
//! the task body. Prioritized tasks are painted bold with a per-letter color
//! when color is enabled; filtering and sorting never see the escapes.

use crate::task::Task;

static YELLOW: &str = "\x1b[93m";
static GREEN: &str = "\x1b[92m";
static BLUE: &str = "\x1b[94m";
static BOLD: &str = "\x1b[1m";
static RESET: &str = "\x1b[0m";

pub fn render_task(task: &Task, color: bool) -> String {
	let line = format!("{:02} {}", task.line_number, task.body());
	if !color {
		return format!("{line}\n");
	}
	match task.priority() {
		Some('A') => format!("{YELLOW}{BOLD}{line}{RESET}\n"),
		Some('B') => format!("{GREEN}{BOLD}{line}{RESET}\n"),
		Some('C') => format!("{BLUE}{BOLD}{line}{RESET}\n"),
		Some(_) => format!("{BOLD}{line}{RESET}\n"),
		None => format!("{line}\n"),
	}
}

pub fn render_tasks(tasks: &[&Task], color: bool) -> String {
	tasks.iter().map(|t| render_task(t, color)).collect()
}
