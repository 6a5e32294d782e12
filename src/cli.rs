//! Command-line surface and dispatch.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;

use crate::{commands, config::AppConfig, shell_init, store::Workspace};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
	/// Directory with the task files. Falls back to `todo_dir` from the
	/// config, then to the current directory.
	#[arg(short = 'd', long, global = true)]
	pub dir: Option<PathBuf>,
	#[command(subcommand)]
	pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Add a task to todo.txt
	#[command(visible_alias = "a")]
	Add(commands::add::AddArgs),
	/// Add tasks read from stdin, one per line, until an empty line
	Addm(commands::add::AddmArgs),
	/// Append a line of text to a named file in the task directory
	Addto(commands::add::AddtoArgs),
	/// Add text to the end of the task on line ITEM#
	#[command(visible_alias = "app")]
	Append(commands::edit::AppendArgs),
	/// Move done tasks from todo.txt to done.txt
	Archive,
	/// Remove duplicate tasks from todo.txt
	#[command(visible_alias = "remdup")]
	Deduplicate,
	/// Delete the task on line ITEM#, after confirmation
	#[command(visible_alias = "rm")]
	Del(commands::del::DelArgs),
	/// Remove the priority from the given task(s)
	#[command(visible_alias = "dp")]
	Depri(commands::edit::DepriArgs),
	/// Mark the given task(s) as done and move them to done.txt
	Do(commands::done::DoArgs),
	/// Show tasks containing TERM(s), sorted by priority
	#[command(visible_alias = "ls")]
	List(commands::list::ListArgs),
	/// Show tasks from todo.txt and done.txt containing TERM(s)
	#[command(visible_alias = "lsa")]
	Listall(commands::list::ListallArgs),
	/// Show every @context present in todo.txt
	#[command(visible_alias = "lsc")]
	Listcon(commands::list::ListconArgs),
	/// Show the task files, or the tasks of one named file
	#[command(visible_alias = "lf")]
	Listfile(commands::list::ListfileArgs),
	/// Show prioritized tasks, optionally restricted to `(X)` or `(X-Y)`
	#[command(visible_alias = "lsp")]
	Listpri(commands::list::ListpriArgs),
	/// Show every +project present in todo.txt
	#[command(visible_alias = "lsprj")]
	Listproj(commands::list::ListprojArgs),
	/// Move a task to another file in the task directory
	#[command(visible_alias = "mv")]
	Move(commands::mv::MoveArgs),
	/// Add text to the beginning of the task on line ITEM#
	#[command(visible_alias = "prep")]
	Prepend(commands::edit::PrependArgs),
	/// Set or replace the priority of the task on line ITEM#
	#[command(visible_alias = "p")]
	Pri(commands::edit::PriArgs),
	/// Replace the task on line ITEM# entirely
	Replace(commands::edit::ReplaceArgs),
	/// Append the pending/done counts to report.txt
	Report,
	/// Print aliases and completions for your shell
	ShellInit(shell_init::ShellInitArgs),
}

/// Everything a handler needs for one invocation: the resolved working
/// directory and the loaded configuration. No ambient globals.
pub struct Ctx {
	pub config: AppConfig,
	pub workspace: Workspace,
}

pub fn run(cli: Cli) -> Result<()> {
	let config = AppConfig::read()?;
	let dir = match cli.dir.or_else(|| config.todo_dir.clone()) {
		Some(dir) => dir,
		None => std::env::current_dir()?,
	};
	tracing::debug!(dir = %dir.display(), "resolved working directory");
	let ctx = Ctx {
		config,
		workspace: Workspace::new(dir),
	};

	match cli.command {
		Commands::Add(args) => commands::add::add(&ctx, args),
		Commands::Addm(_) => commands::add::addm(&ctx),
		Commands::Addto(args) => commands::add::addto(&ctx, args),
		Commands::Append(args) => commands::edit::append(&ctx, args),
		Commands::Archive => commands::done::archive(&ctx),
		Commands::Deduplicate => commands::del::deduplicate(&ctx),
		Commands::Del(args) => commands::del::delete(&ctx, args),
		Commands::Depri(args) => commands::edit::depri(&ctx, args),
		Commands::Do(args) => commands::done::mark_done(&ctx, args),
		Commands::List(args) => commands::list::list(&ctx, args),
		Commands::Listall(args) => commands::list::listall(&ctx, args),
		Commands::Listcon(args) => commands::list::listcon(&ctx, args),
		Commands::Listfile(args) => commands::list::listfile(&ctx, args),
		Commands::Listpri(args) => commands::list::listpri(&ctx, args),
		Commands::Listproj(args) => commands::list::listproj(&ctx, args),
		Commands::Move(args) => commands::mv::main(&ctx, args),
		Commands::Prepend(args) => commands::edit::prepend(&ctx, args),
		Commands::Pri(args) => commands::edit::pri(&ctx, args),
		Commands::Replace(args) => commands::edit::replace(&ctx, args),
		Commands::Report => commands::report::main(&ctx),
		Commands::ShellInit(args) => {
			shell_init::output(args);
			Ok(())
		}
	}
}
