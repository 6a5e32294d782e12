//! End-to-end tests for the report command.

use crate::common::TestContext;

#[test]
fn report_appends_counts() {
	let ctx = TestContext::with_todo("one\ntwo\n");
	ctx.write("done.txt", "x 2024-01-01 old\n");

	let (status, stdout, _) = ctx.run(&["report"]);
	assert!(status.success());
	assert!(stdout.contains("TODO: Report file updated."));

	let report = ctx.read("report.txt");
	let lines: Vec<&str> = report.lines().collect();
	assert_eq!(lines.len(), 1);
	assert!(lines[0].ends_with(" 2 1"), "unexpected report line: {report}");
}

#[test]
fn report_is_deduplicated_against_last_entry() {
	let ctx = TestContext::with_todo("one\n");

	let (status, _, _) = ctx.run(&["report"]);
	assert!(status.success());
	let first = ctx.read("report.txt");

	// No task changes in between: the second run must not write.
	let (status, stdout, _) = ctx.run(&["report"]);
	assert!(status.success());
	assert!(stdout.contains("TODO: Report file is up-to-date"));
	assert_eq!(ctx.read("report.txt"), first);

	// A change in counts produces a second entry.
	ctx.run(&["add", "two"]);
	let (status, stdout, _) = ctx.run(&["report"]);
	assert!(status.success());
	assert!(stdout.contains("TODO: Report file updated."));
	assert_eq!(ctx.read("report.txt").lines().count(), 2);
}

#[test]
fn report_over_empty_files_says_up_to_date() {
	let ctx = TestContext::empty();
	let (status, stdout, _) = ctx.run(&["report"]);
	assert!(status.success());
	assert!(stdout.contains("TODO: Report file is up-to-date"));
	assert_eq!(ctx.read("report.txt"), "");
}
