#[cfg(test)]
mod cli_tests;

mod config_discovery;
use config_discovery::*;

mod eslint_cmd;
pub use eslint_cmd::*;

mod init_cmd;
pub use init_cmd::*;

use std::ffi::OsString;

use clap::Subcommand;

use crate::{logging::init_logging, *};

pub async fn main_entrypoint() -> Result<(), AppError> {
	let cli = Cli::parse();

	init_logging(cli.verbose);

	cli.execute().await
}

impl Cli {
	/// Parses the arguments and runs the command.
	pub async fn execute_with<I, T>(args: I) -> Result<(), AppError>
	where
		I: IntoIterator<Item = T>,
		T: Into<OsString> + Clone,
	{
		let cli = Self::try_parse_from(args).map_err(|e| anyhow!(e))?;

		cli.execute().await
	}

	async fn execute(self) -> Result<(), AppError> {
		let config = get_config_from_cli(self.overrides.unwrap_or_default(), &self.command)?;

		if self.print_config {
			println!("Full parsed config:");
			println!("{config:#?}");
		}

		let root = match self.root {
			Some(root) => root,
			None => get_cwd()?,
		};

		debug!(root = %root.display(), "Running in project root");

		match self.command {
			Commands::Init(cmd) => {
				cmd.execute(&config, &root).await?;
			}
			Commands::Eslint(cmd) => {
				cmd.execute(&config, &root).await?;
			}
			Commands::Features { .. } => {
				list_features(&config, &root);
			}
		}

		Ok(())
	}
}

#[derive(Args, Debug, Clone, Default)]
pub struct ConfigOverrides {
	/// Sets a custom config file. Any file named `nice-move.{yaml,json,toml}` in the cwd or in `XDG_CONFIG_HOME/nice-move` will be detected automatically. If no file is found, the default settings are used
	#[arg(short, long, value_name = "FILE")]
	pub config: Option<PathBuf>,

	/// Ignores any automatically detected config files, uses cli instructions and config file defined with --config.
	#[arg(long)]
	pub ignore_config: bool,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "nice-move")]
#[command(version, about, long_about = None)]
pub struct Cli {
	/// Prints the full parsed config
	#[arg(long)]
	pub print_config: bool,

	/// The root of the project [default: the cwd]
	#[arg(long, value_name = "DIR")]
	pub root: Option<PathBuf>,

	/// Increases the verbosity of the logs. Can be repeated. The `NICE_MOVE_LOG` env variable takes precedence.
	#[arg(short, long, action = clap::ArgAction::Count)]
	pub verbose: u8,

	#[command(subcommand)]
	pub command: Commands,

	#[command(flatten)]
	pub overrides: Option<ConfigOverrides>,
}

/// The cli commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
	/// Adds optional tooling (linters, test runner, git hooks, frameworks) to the `package.json` of the project.
	Init(InitCmd),

	/// Generates an ESLint preset, adapted to the packages installed in the project.
	Eslint(EslintCmd),

	/// Lists the features that can be added with `init`, marking those already in use.
	Features {
		/// The path to the `package.json` file, relative to the project root [default: `package.json`]
		#[arg(long, value_name = "FILE")]
		manifest: Option<PathBuf>,
	},
}
