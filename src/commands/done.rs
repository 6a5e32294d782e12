//! Completing tasks and archiving completed ones.

use clap::Args;
use color_eyre::eyre::Result;

use crate::{
	cli::Ctx,
	clock,
	store::{self, DONE_FILE, TODO_FILE},
};

#[derive(Args, Clone, Debug)]
pub struct DoArgs {
	/// Task line number(s)
	#[arg(required = true, num_args = 1..)]
	pub items: Vec<usize>,
}

/// Mark the given tasks done and move them to done.txt. Nothing is written
/// if any of the numbers does not resolve.
pub fn mark_done(ctx: &Ctx, args: DoArgs) -> Result<()> {
	let mut todo = ctx.workspace.todo()?;
	let today = clock::today();
	let mut done = Vec::new();
	for number in &args.items {
		let mut task = todo.remove(*number)?;
		task.mark_done(today);
		print!("{} {}", task.line_number, task.content());
		println!("TODO: {number} marked as done.");
		done.push(task);
	}
	todo.save()?;
	store::append_tasks(&ctx.workspace.file(DONE_FILE), &done)?;
	println!("TODO: {} archived.", ctx.workspace.file(TODO_FILE).display());
	Ok(())
}

/// Move every completed task from todo.txt to done.txt; blank lines are
/// dropped by the rewrite.
pub fn archive(ctx: &Ctx) -> Result<()> {
	let mut todo = ctx.workspace.todo()?;
	let done = todo.take_completed();
	todo.save()?;
	store::append_tasks(&ctx.workspace.file(DONE_FILE), &done)?;
	Ok(())
}
