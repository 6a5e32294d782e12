//! End-to-end tests for the mutating commands.

use crate::common::{TestContext, today};

#[test]
fn add_appends_and_creates_todo_file() {
	let ctx = TestContext::empty();
	let (status, _, _) = ctx.run(&["add", "Buy milk +groceries @store "]);
	assert!(status.success());
	assert_eq!(ctx.read("todo.txt"), "Buy milk +groceries @store \n");

	let (status, _, _) = ctx.run(&["add", "Call mom"]);
	assert!(status.success());
	assert_eq!(ctx.read("todo.txt"), "Buy milk +groceries @store \nCall mom\n");
}

#[test]
fn addm_reads_tasks_until_empty_line() {
	let ctx = TestContext::empty();
	let (status, stdout, _) = ctx.run_with_stdin(&["addm"], "first\nsecond\n\nnever added\n");
	assert!(status.success());
	assert!(stdout.contains("Add: "));
	assert_eq!(ctx.read("todo.txt"), "first\nsecond\n");
}

#[test]
fn addto_requires_existing_destination() {
	let ctx = TestContext::empty();
	let (status, stdout, _) = ctx.run(&["addto", "inbox.txt", "decide about vacation"]);
	assert!(!status.success());
	assert!(stdout.contains("does not exist"));
	assert!(!ctx.exists("inbox.txt"));

	ctx.write("inbox.txt", "existing\n");
	let (status, _, _) = ctx.run(&["addto", "inbox.txt", "decide about vacation"]);
	assert!(status.success());
	assert_eq!(ctx.read("inbox.txt"), "existing\ndecide about vacation\n");
}

#[test]
fn do_marks_done_and_archives() {
	// The canonical scenario: completing line 2 renumbers the remainder and
	// moves the completed line to done.txt.
	let ctx = TestContext::with_todo("Buy milk\n(A) Call mom\n(B) Pay rent +bills \n");
	let (status, stdout, _) = ctx.run(&["do", "2"]);
	assert!(status.success());
	assert!(stdout.contains("TODO: 2 marked as done."));

	assert_eq!(ctx.read("todo.txt"), "Buy milk\n(B) Pay rent +bills \n");
	assert_eq!(ctx.read("done.txt"), format!("x {} Call mom\n", today()));

	// The remaining tasks renumber on the next load; the prioritized one
	// still displays first.
	let (_, stdout, _) = ctx.run(&["list"]);
	assert!(stdout.contains("02 (B) Pay rent +bills "));
	assert!(stdout.contains("01 Buy milk"));
}

#[test]
fn do_with_multiple_items_uses_load_time_numbers() {
	let ctx = TestContext::with_todo("one\ntwo\nthree\n");
	let (status, _, _) = ctx.run(&["do", "1", "2"]);
	assert!(status.success());
	assert_eq!(ctx.read("todo.txt"), "three\n");
	let done = ctx.read("done.txt");
	assert!(done.contains("one\n"));
	assert!(done.contains("two\n"));
}

#[test]
fn do_unknown_number_leaves_files_untouched() {
	let ctx = TestContext::with_todo("one\n");
	let (status, stdout, _) = ctx.run(&["do", "5"]);
	assert!(!status.success());
	assert!(stdout.contains("TODO: No task 5."));
	assert_eq!(ctx.read("todo.txt"), "one\n");
	assert!(!ctx.exists("done.txt") || ctx.read("done.txt").is_empty());
}

#[test]
fn archive_moves_completed_and_drops_blanks() {
	let ctx = TestContext::with_todo("keep\nx 2024-01-01 old chore\n\nalso keep\n");
	let (status, _, _) = ctx.run(&["archive"]);
	assert!(status.success());
	assert_eq!(ctx.read("todo.txt"), "keep\nalso keep\n");
	assert_eq!(ctx.read("done.txt"), "x 2024-01-01 old chore\n");
}

#[test]
fn pri_sets_and_replaces_priority() {
	let ctx = TestContext::with_todo("Call mom\n");
	let (status, _, _) = ctx.run(&["pri", "1", "b"]);
	assert!(status.success());
	assert_eq!(ctx.read("todo.txt"), "(B) Call mom\n");

	// Re-prioritizing replaces the letter instead of stacking markers.
	let (status, _, _) = ctx.run(&["pri", "1", "A"]);
	assert!(status.success());
	assert_eq!(ctx.read("todo.txt"), "(A) Call mom\n");
}

#[test]
fn pri_rejects_bad_letters() {
	let ctx = TestContext::with_todo("Call mom\n");
	for bad in ["AB", "1", "?"] {
		let (status, _, _) = ctx.run(&["pri", "1", bad]);
		assert!(!status.success());
		assert_eq!(ctx.read("todo.txt"), "Call mom\n");
	}
}

#[test]
fn depri_removes_priorities() {
	let ctx = TestContext::with_todo("(A) one\n(B) two\nthree\n");
	let (status, stdout, _) = ctx.run(&["depri", "1", "2"]);
	assert!(status.success());
	assert!(stdout.contains("TODO: 1 deprioritized."));
	assert!(stdout.contains("TODO: 2 deprioritized."));
	assert_eq!(ctx.read("todo.txt"), "one\ntwo\nthree\n");
}

#[test]
fn append_and_prepend_edit_in_place() {
	let ctx = TestContext::with_todo("rent\n");
	let (status, _, _) = ctx.run(&["append", "1", "+bills"]);
	assert!(status.success());
	assert_eq!(ctx.read("todo.txt"), "rent +bills\n");

	let (status, _, _) = ctx.run(&["prepend", "1", "Pay"]);
	assert!(status.success());
	assert_eq!(ctx.read("todo.txt"), "Pay rent +bills\n");
}

#[test]
fn replace_substitutes_whole_line() {
	let ctx = TestContext::with_todo("old text\nstays\n");
	let (status, stdout, _) = ctx.run(&["replace", "1", "(A) new text"]);
	assert!(status.success());
	assert!(stdout.contains("TODO: Replaced task with:"));
	assert_eq!(ctx.read("todo.txt"), "(A) new text\nstays\n");
}

#[test]
fn replace_prompts_when_text_omitted() {
	let ctx = TestContext::with_todo("old text\n");
	let (status, stdout, _) = ctx.run_with_stdin(&["replace", "1"], "prompted text\n");
	assert!(status.success());
	assert!(stdout.contains("Replacement: "));
	assert_eq!(ctx.read("todo.txt"), "prompted text\n");
}

#[test]
fn del_confirms_before_deleting() {
	let ctx = TestContext::with_todo("one\ntwo\n");
	let (status, stdout, _) = ctx.run_with_stdin(&["del", "1"], "y\n");
	assert!(status.success());
	assert!(stdout.contains("Delete 'one'?"));
	assert!(stdout.contains("TODO: 1 deleted."));
	assert_eq!(ctx.read("todo.txt"), "two\n");
}

#[test]
fn del_declined_aborts_with_success() {
	let ctx = TestContext::with_todo("one\ntwo\n");
	let (status, stdout, _) = ctx.run_with_stdin(&["del", "1"], "n\n");
	assert!(status.success());
	assert!(stdout.contains("TODO: No tasks were deleted"));
	assert_eq!(ctx.read("todo.txt"), "one\ntwo\n");
}

#[test]
fn deduplicate_reports_removals() {
	let ctx = TestContext::with_todo("one\ntwo\none\n");
	let (status, stdout, _) = ctx.run(&["deduplicate"]);
	assert!(status.success());
	assert!(stdout.contains("1 duplicate task(s) removed"));
	assert_eq!(ctx.read("todo.txt"), "one\ntwo\n");

	let (status, stdout, _) = ctx.run(&["deduplicate"]);
	assert!(status.success());
	assert!(stdout.contains("TODO: No duplicate tasks found"));
}

#[test]
fn move_sends_task_to_another_file() {
	let ctx = TestContext::with_todo("one\ntwo\n");
	ctx.write("someday.txt", "later\n");
	let (status, _, _) = ctx.run(&["move", "1", "someday.txt"]);
	assert!(status.success());
	assert_eq!(ctx.read("todo.txt"), "two\n");
	assert_eq!(ctx.read("someday.txt"), "later\none\n");
}

#[test]
fn move_requires_existing_destination() {
	let ctx = TestContext::with_todo("one\n");
	let (status, stdout, _) = ctx.run(&["move", "1", "nowhere.txt"]);
	assert!(!status.success());
	assert!(stdout.contains("does not exist"));
	assert_eq!(ctx.read("todo.txt"), "one\n");
}

#[test]
fn move_from_named_source() {
	let ctx = TestContext::empty();
	ctx.write("someday.txt", "later\nsoon\n");
	ctx.write("todo.txt", "");
	let (status, _, _) = ctx.run(&["move", "2", "todo.txt", "someday.txt"]);
	assert!(status.success());
	assert_eq!(ctx.read("someday.txt"), "later\n");
	assert_eq!(ctx.read("todo.txt"), "soon\n");
}
