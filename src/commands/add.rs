use std::io::{BufRead, Write as IoWrite};

use clap::Args;
use color_eyre::eyre::Result;

use crate::{
	cli::Ctx,
	store::{self, TODO_FILE},
};

#[derive(Args, Clone, Debug)]
pub struct AddArgs {
	/// The task text, e.g. "THING I NEED TO DO +project @context"
	pub task: String,
}

#[derive(Args, Clone, Debug)]
pub struct AddmArgs {}

#[derive(Args, Clone, Debug)]
pub struct AddtoArgs {
	/// Name of an existing file in the task directory
	pub dest: String,
	/// The line of text to append
	pub text: String,
}

/// Append one task to todo.txt, creating the file if needed.
pub fn add(ctx: &Ctx, args: AddArgs) -> Result<()> {
	store::append_line(&ctx.workspace.file(TODO_FILE), &args.task)?;
	Ok(())
}

/// Read tasks from stdin, one per line, until an empty line or EOF.
pub fn addm(ctx: &Ctx) -> Result<()> {
	let stdin = std::io::stdin();
	loop {
		print!("Add: ");
		std::io::stdout().flush()?;
		let mut line = String::new();
		if stdin.lock().read_line(&mut line)? == 0 {
			return Ok(());
		}
		let task = line.trim_end_matches(['\n', '\r']);
		if task.is_empty() {
			return Ok(());
		}
		store::append_line(&ctx.workspace.file(TODO_FILE), task)?;
	}
}

/// Append a line of text to a named file. The file must already exist.
pub fn addto(ctx: &Ctx, args: AddtoArgs) -> Result<()> {
	let path = ctx.workspace.file(&args.dest);
	if !path.exists() {
		return Err(store::StoreError::MissingFile(path).into());
	}
	store::append_line(&path, &args.text)?;
	Ok(())
}
