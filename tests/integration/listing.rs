//! End-to-end tests for the listing family.

use crate::common::TestContext;

fn fixture() -> TestContext {
	TestContext::with_todo("banana bread\n(C) carwash @errands \n(A) zebra feeding +zoo \n(A) apple pie +baking \nwrite report +work @pc \n")
}

#[test]
fn list_sorts_priorities_first_then_alphabetical() {
	let ctx = fixture();
	let (status, stdout, _) = ctx.run(&["list"]);
	assert!(status.success());
	let expected = "03 (A) zebra feeding +zoo \n\
		04 (A) apple pie +baking \n\
		02 (C) carwash @errands \n\
		01 banana bread\n\
		05 write report +work @pc \n\
		--\n\
		TODO: 5 of 5 tasks shown\n";
	assert_eq!(stdout, expected);
}

#[test]
fn list_filters_by_term() {
	let ctx = fixture();
	let (_, stdout, _) = ctx.run(&["list", "+work"]);
	assert!(stdout.contains("05 write report +work @pc "));
	assert!(stdout.contains("TODO: 1 of 5 tasks shown"));
	assert!(!stdout.contains("banana"));
}

#[test]
fn list_negative_term_hides_matches() {
	let ctx = fixture();
	let (_, stdout, _) = ctx.run(&["list", "-+work"]);
	assert!(!stdout.contains("write report"));
	assert!(stdout.contains("TODO: 4 of 5 tasks shown"));
}

#[test]
fn listall_includes_done_file() {
	let ctx = fixture();
	ctx.write("done.txt", "x 2024-01-01 filed taxes\n");
	let (_, stdout, _) = ctx.run(&["listall"]);
	assert!(stdout.contains("01 x 2024-01-01 filed taxes"));
	assert!(stdout.contains("TODO: 5 of 5 tasks shown"));
	assert!(stdout.contains("DONE: 1 of 1 tasks shown"));
}

#[test]
fn listpri_selects_single_priority() {
	let ctx = fixture();
	let (_, stdout, _) = ctx.run(&["listpri", "(A)"]);
	assert!(stdout.contains("zebra"));
	assert!(stdout.contains("apple"));
	assert!(!stdout.contains("carwash"));
	assert!(stdout.contains("TODO: 2 of 5 tasks shown"));
}

#[test]
fn listpri_selects_range() {
	let ctx = fixture();
	let (_, stdout, _) = ctx.run(&["listpri", "(A-C)"]);
	assert!(stdout.contains("TODO: 3 of 5 tasks shown"));
}

#[test]
fn listpri_without_selector_shows_all_prioritized() {
	let ctx = fixture();
	let (_, stdout, _) = ctx.run(&["listpri"]);
	assert!(stdout.contains("TODO: 3 of 5 tasks shown"));
	assert!(!stdout.contains("banana"));
}

#[test]
fn listproj_and_listcon_print_unique_tags() {
	let ctx = fixture();
	let (_, stdout, _) = ctx.run(&["listproj"]);
	insta::assert_snapshot!(stdout, @r"
	+baking
	+work
	+zoo
	");

	let (_, stdout, _) = ctx.run(&["listcon"]);
	insta::assert_snapshot!(stdout, @r"
	@errands
	@pc
	");
}

#[test]
fn listfile_enumerates_txt_files() {
	let ctx = fixture();
	ctx.write("someday.txt", "later\n");
	ctx.write("notes.md", "not listed\n");
	let (_, stdout, _) = ctx.run(&["listfile"]);
	assert!(stdout.contains("Files in the todo.txt directory:"));
	assert!(stdout.contains("todo.txt"));
	assert!(stdout.contains("someday.txt"));
	assert!(!stdout.contains("notes.md"));
}

#[test]
fn listfile_displays_named_file() {
	let ctx = TestContext::empty();
	ctx.write("someday.txt", "later\n(A) urgent someday\n");
	let (_, stdout, _) = ctx.run(&["listfile", "someday.txt"]);
	assert!(stdout.contains("02 (A) urgent someday"));
	assert!(stdout.contains("01 later"));
	assert!(stdout.contains("TODO: 2 of 2 tasks shown"));
}

#[test]
fn listfile_missing_named_file_is_an_error() {
	let ctx = TestContext::empty();
	let (status, stdout, _) = ctx.run(&["listfile", "absent.txt"]);
	assert!(!status.success());
	assert!(stdout.contains("does not exist"));
}

#[test]
fn color_follows_config() {
	let ctx = TestContext::with_todo("(A) urgent\n");
	// TODOTXT_COLOR=false is the hermetic default in TestContext::run.
	let (_, stdout, _) = ctx.run(&["list"]);
	assert!(!stdout.contains("\x1b["));

	let (_, stdout, _) = ctx.run_with_env(&["list"], &[("TODOTXT_COLOR", "true")]);
	assert!(stdout.contains("\x1b[93m\x1b[1m01 (A) urgent\x1b[0m"));
}
