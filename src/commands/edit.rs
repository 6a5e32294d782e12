//! In-place edits of single tasks: append, prepend, replace, pri, depri.

use std::io::{BufRead, Write as IoWrite};

use clap::Args;
use color_eyre::eyre::{Result, bail};

use crate::{cli::Ctx, store::StoreError};

#[derive(Args, Clone, Debug)]
pub struct AppendArgs {
	/// Task line number
	pub item: usize,
	/// Text to add at the end of the task
	pub text: String,
}

#[derive(Args, Clone, Debug)]
pub struct PrependArgs {
	/// Task line number
	pub item: usize,
	/// Text to add at the beginning of the task
	pub text: String,
}

#[derive(Args, Clone, Debug)]
pub struct ReplaceArgs {
	/// Task line number
	pub item: usize,
	/// The replacement task line; prompted for on stdin when omitted
	pub text: Option<String>,
}

#[derive(Args, Clone, Debug)]
pub struct PriArgs {
	/// Task line number
	pub item: usize,
	/// A single letter A-Z (lowercase accepted)
	pub priority: String,
}

#[derive(Args, Clone, Debug)]
pub struct DepriArgs {
	/// Task line number(s)
	#[arg(required = true, num_args = 1..)]
	pub items: Vec<usize>,
}

pub fn append(ctx: &Ctx, args: AppendArgs) -> Result<()> {
	let mut todo = ctx.workspace.todo()?;
	let task = todo.get_mut(args.item).ok_or(StoreError::NoSuchTask(args.item))?;
	task.append(&args.text);
	todo.save()?;
	Ok(())
}

pub fn prepend(ctx: &Ctx, args: PrependArgs) -> Result<()> {
	let mut todo = ctx.workspace.todo()?;
	let task = todo.get_mut(args.item).ok_or(StoreError::NoSuchTask(args.item))?;
	task.prepend(&args.text);
	todo.save()?;
	Ok(())
}

pub fn replace(ctx: &Ctx, args: ReplaceArgs) -> Result<()> {
	let mut todo = ctx.workspace.todo()?;
	let line = match args.text {
		Some(text) => text,
		None => {
			print!("Replacement: ");
			std::io::stdout().flush()?;
			let mut line = String::new();
			std::io::stdin().lock().read_line(&mut line)?;
			line.trim_end_matches(['\n', '\r']).to_string()
		}
	};

	let old = todo.get(args.item).ok_or(StoreError::NoSuchTask(args.item))?.body().to_string();
	todo.replace(args.item, &line)?;
	println!("{} {old}", args.item);
	println!("TODO: Replaced task with:");
	println!("{} {}", args.item, todo.get(args.item).map(|t| t.body()).unwrap_or_default());
	todo.save()?;
	Ok(())
}

pub fn pri(ctx: &Ctx, args: PriArgs) -> Result<()> {
	let mut chars = args.priority.chars();
	let letter = match (chars.next(), chars.next()) {
		(Some(letter), None) => letter,
		_ => bail!("usage: todotxt pri ITEM# PRIORITY"),
	};

	let mut todo = ctx.workspace.todo()?;
	let task = todo.get_mut(args.item).ok_or(StoreError::NoSuchTask(args.item))?;
	task.set_priority(letter)?;
	todo.save()?;
	Ok(())
}

pub fn depri(ctx: &Ctx, args: DepriArgs) -> Result<()> {
	let mut todo = ctx.workspace.todo()?;
	for number in &args.items {
		let task = todo.get_mut(*number).ok_or(StoreError::NoSuchTask(*number))?;
		task.deprioritize();
		print!("{} {}", task.line_number, task.content());
		println!("TODO: {number} deprioritized.");
	}
	todo.save()?;
	Ok(())
}
