use std::path::PathBuf;

use color_eyre::eyre::{Result, WrapErr};
use serde::Deserialize;
use smart_default::SmartDefault;

static CONFIG_FILENAME: &str = "config.toml";

#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct AppConfig {
	/// Default directory for the task files. The `-d` flag wins over this.
	pub todo_dir: Option<PathBuf>,
	/// Colorize prioritized tasks in listings.
	#[default(true)]
	pub color: bool,
}

impl AppConfig {
	/// Layered config: `$XDG_CONFIG_HOME/todotxt/config.toml` if present,
	/// then `TODOTXT_`-prefixed environment variables on top.
	pub fn read() -> Result<Self> {
		let mut builder = config::Config::builder();
		if let Some(path) = xdg::BaseDirectories::with_prefix(crate::EXE_NAME).get_config_file(CONFIG_FILENAME)
			&& path.exists()
		{
			builder = builder.add_source(config::File::from(path));
		}
		let settings = builder
			.add_source(config::Environment::with_prefix("TODOTXT").try_parsing(true))
			.build()
			.wrap_err("failed to read configuration")?;
		settings.try_deserialize().wrap_err("the config file is not correctly formatted TOML\nand/or\nhas fields of the wrong type")
	}
}
