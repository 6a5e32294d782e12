use std::io::BufRead;

use clap::Args;
use color_eyre::eyre::Result;

use crate::{cli::Ctx, store::StoreError};

#[derive(Args, Clone, Debug)]
pub struct DelArgs {
	/// Task line number
	pub item: usize,
}

/// Delete one task after an interactive confirmation. Anything but `y`
/// aborts without touching the file.
pub fn delete(ctx: &Ctx, args: DelArgs) -> Result<()> {
	let mut todo = ctx.workspace.todo()?;
	let body = todo.get(args.item).ok_or(StoreError::NoSuchTask(args.item))?.body().to_string();

	println!("Delete '{body}'?  (y/n)");
	let mut answer = String::new();
	std::io::stdin().lock().read_line(&mut answer)?;
	if answer.trim() != "y" {
		println!("TODO: No tasks were deleted");
		return Ok(());
	}

	let task = todo.remove(args.item)?;
	println!("{} {}", task.line_number, task.body());
	println!("TODO: {} deleted.", task.line_number);
	todo.save()?;
	Ok(())
}

/// Remove duplicate lines from todo.txt, keeping first occurrences.
pub fn deduplicate(ctx: &Ctx) -> Result<()> {
	let mut todo = ctx.workspace.todo()?;
	let removed = todo.deduplicate();
	todo.save()?;

	if removed == 0 {
		println!("TODO: No duplicate tasks found");
	} else {
		println!("{removed} duplicate task(s) removed");
	}
	Ok(())
}
