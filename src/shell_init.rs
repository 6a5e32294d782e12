use clap::{Args, CommandFactory};
use clap_complete::Shell as ClapShell;
use derive_more::derive::{Display, FromStr};

use crate::EXE_NAME;

#[derive(Clone, Debug, Args)]
pub struct ShellInitArgs {
	shell: Shell,
}
#[derive(Debug, Clone, Copy, Display, FromStr)]
enum Shell {
	Dash,
	Bash,
	Zsh,
	Fish,
}

impl Shell {
	fn aliases(&self, exe_name: &str) -> String {
		format!(
			r#"
# {exe_name}
alias t="{exe_name} list"
alias ta="{exe_name} add"
alias td="{exe_name} do"
alias tp="{exe_name} pri"
"#
		)
	}

	fn to_clap_shell(self) -> ClapShell {
		match self {
			Shell::Dash => ClapShell::Bash, // Dash uses Bash completions
			Shell::Bash => ClapShell::Bash,
			Shell::Zsh => ClapShell::Zsh,
			Shell::Fish => ClapShell::Fish,
		}
	}

	fn completions(&self) -> String {
		let mut cmd = crate::cli::Cli::command();
		let mut buffer = Vec::new();
		let shell = self.to_clap_shell();
		clap_complete::generate(shell, &mut cmd, EXE_NAME, &mut buffer);

		String::from_utf8(buffer).unwrap_or_else(|_| String::from("# Failed to generate completions"))
	}
}

pub fn output(args: ShellInitArgs) {
	let shell = args.shell;
	let s = format!("{}\n{}", shell.aliases(EXE_NAME), shell.completions());

	println!("{s}");
}
