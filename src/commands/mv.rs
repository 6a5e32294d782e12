use clap::Args;
use color_eyre::eyre::Result;

use crate::{
	cli::Ctx,
	store::{StoreError, TaskStore},
};

#[derive(Args, Clone, Debug)]
pub struct MoveArgs {
	/// Task line number in the source file
	pub item: usize,
	/// Destination file name; must already exist
	pub dest: String,
	/// Source file name, todo.txt when omitted
	pub src: Option<String>,
}

/// Move one task from the source file to the end of the destination file.
/// Moving within a single file reorders the task to the end instead.
pub fn main(ctx: &Ctx, args: MoveArgs) -> Result<()> {
	let mut src = match &args.src {
		Some(name) => ctx.workspace.named(name)?,
		None => ctx.workspace.todo()?,
	};

	let dest_path = ctx.workspace.file(&args.dest);
	if dest_path == src.path() {
		let end = src.len();
		src.move_to(args.item, end)?;
		src.save()?;
		return Ok(());
	}
	if !dest_path.exists() {
		return Err(StoreError::MissingFile(dest_path).into());
	}

	let task = src.remove(args.item)?;
	let mut dest = TaskStore::load(&dest_path)?;
	let end = dest.len() + 1;
	dest.insert_at(end, task);
	dest.save()?;
	src.save()?;
	Ok(())
}
