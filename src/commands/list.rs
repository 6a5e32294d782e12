//! The listing family: list, listall, listpri, listproj, listcon, listfile.

use clap::Args;
use color_eyre::eyre::Result;
use walkdir::WalkDir;

use crate::{
	cli::Ctx,
	display,
	query::{self, PrioritySelection},
	task::Task,
};

#[derive(Args, Clone, Debug)]
pub struct ListArgs {
	/// Terms every shown task must contain; prefix a term with `-` to hide
	/// tasks containing it
	#[arg(allow_hyphen_values = true)]
	pub terms: Vec<String>,
}

#[derive(Args, Clone, Debug)]
pub struct ListallArgs {
	#[arg(allow_hyphen_values = true)]
	pub terms: Vec<String>,
}

#[derive(Args, Clone, Debug)]
pub struct ListconArgs {
	#[arg(allow_hyphen_values = true)]
	pub terms: Vec<String>,
}

#[derive(Args, Clone, Debug)]
pub struct ListprojArgs {
	#[arg(allow_hyphen_values = true)]
	pub terms: Vec<String>,
}

#[derive(Args, Clone, Debug)]
pub struct ListpriArgs {
	/// Optional `(X)` or `(X-Y)` selector, then filter terms
	#[arg(allow_hyphen_values = true)]
	pub terms: Vec<String>,
}

#[derive(Args, Clone, Debug)]
pub struct ListfileArgs {
	/// File to display; without it, every .txt file in the directory is listed
	pub src: Option<String>,
	#[arg(allow_hyphen_values = true)]
	pub terms: Vec<String>,
}

/// Render a filtered slice in display order.
fn show(tasks: &[&Task], color: bool) {
	let sorted = query::sort_for_display(tasks);
	print!("{}", display::render_tasks(&sorted, color));
}

pub fn list(ctx: &Ctx, args: ListArgs) -> Result<()> {
	let todo = ctx.workspace.todo()?;
	let matching = query::filter_by_terms(todo.tasks(), &args.terms);
	show(&matching, ctx.config.color);
	println!("--");
	println!("TODO: {} of {} tasks shown", matching.len(), todo.len());
	Ok(())
}

pub fn listall(ctx: &Ctx, args: ListallArgs) -> Result<()> {
	let todo = ctx.workspace.todo()?;
	let done = ctx.workspace.done()?;
	let matching = query::filter_by_terms(todo.tasks(), &args.terms);
	let matching_done = query::filter_by_terms(done.tasks(), &args.terms);
	show(&matching, ctx.config.color);
	show(&matching_done, ctx.config.color);
	println!("--");
	println!("TODO: {} of {} tasks shown", matching.len(), todo.len());
	println!("DONE: {} of {} tasks shown", matching_done.len(), done.len());
	Ok(())
}

pub fn listcon(ctx: &Ctx, args: ListconArgs) -> Result<()> {
	let todo = ctx.workspace.todo()?;
	let tagged: Vec<&Task> = todo.tasks().iter().filter(|t| !t.contexts().is_empty()).collect();
	let matching = query::filter_by_terms(tagged.iter().copied(), &args.terms);
	for context in query::unique_contexts(matching.iter().copied()) {
		println!("{context}");
	}
	Ok(())
}

pub fn listproj(ctx: &Ctx, args: ListprojArgs) -> Result<()> {
	let todo = ctx.workspace.todo()?;
	let tagged: Vec<&Task> = todo.tasks().iter().filter(|t| !t.projects().is_empty()).collect();
	let matching = query::filter_by_terms(tagged.iter().copied(), &args.terms);
	for project in query::unique_projects(matching.iter().copied()) {
		println!("{project}");
	}
	Ok(())
}

pub fn listpri(ctx: &Ctx, args: ListpriArgs) -> Result<()> {
	let todo = ctx.workspace.todo()?;
	let prioritized: Vec<&Task> = todo.tasks().iter().filter(|t| t.priority().is_some()).collect();

	let matching: Vec<&Task> = match args.terms.split_first() {
		None => prioritized,
		Some((first, rest)) => match PrioritySelection::decode(first) {
			Some(selection) => {
				let by_priority: Vec<&Task> = todo.tasks().iter().filter(|t| t.priority().is_some_and(|p| selection.matches(p))).collect();
				query::filter_by_terms(by_priority.iter().copied(), rest)
			}
			None => query::filter_by_terms(prioritized.iter().copied(), &args.terms),
		},
	};

	show(&matching, ctx.config.color);
	println!("TODO: {} of {} tasks shown", matching.len(), todo.len());
	Ok(())
}

pub fn listfile(ctx: &Ctx, args: ListfileArgs) -> Result<()> {
	let Some(src) = &args.src else {
		println!("Files in the todo.txt directory:");
		let mut walker: Vec<_> = WalkDir::new(ctx.workspace.dir()).sort_by_file_name().into_iter().collect::<Result<_, _>>()?;
		walker.retain(|entry| entry.file_type().is_file() && entry.path().extension().is_some_and(|ext| ext == "txt"));
		for entry in walker {
			println!("{}", entry.path().display());
		}
		return Ok(());
	};

	let file = ctx.workspace.named(src)?;
	let matching = query::filter_by_terms(file.tasks(), &args.terms);
	show(&matching, ctx.config.color);
	println!("--");
	println!("TODO: {} of {} tasks shown", matching.len(), file.len());
	Ok(())
}
