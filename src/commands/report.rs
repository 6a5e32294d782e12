use std::fs;

use color_eyre::eyre::Result;

use crate::{
	cli::Ctx,
	clock,
	report::{self, ReportEntry},
	store::{self, REPORT_FILE},
};

/// Append the current pending/done counts to report.txt, unless the most
/// recent entry already carries the same counts.
pub fn main(ctx: &Ctx) -> Result<()> {
	let pending = ctx.workspace.todo()?.len();
	let done = ctx.workspace.done()?.len();

	let path = ctx.workspace.file(REPORT_FILE);
	if !path.exists() {
		fs::write(&path, "")?;
	}
	let content = fs::read_to_string(&path)?;
	let last = report::last_entry(&content);

	// An unparseable or absent last entry counts as (0, 0), so a report over
	// empty files right after creation still says up-to-date.
	let (last_pending, last_done) = last.as_ref().map(|e| (e.pending, e.done)).unwrap_or((0, 0));
	if last_pending == pending && last_done == done {
		if let Some(entry) = last {
			print!("{}", entry.encode());
		}
		println!("TODO: Report file is up-to-date");
	} else {
		let entry = ReportEntry::new(&clock::now(), pending, done);
		store::append_line(&path, &entry.encode())?;
		print!("{}", entry.encode());
		println!("TODO: Report file updated.");
	}
	Ok(())
}
