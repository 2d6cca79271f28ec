use super::*;
use crate::{
	eslint::{EslintVariant, NODE_CONFIG_FILE, node_config},
	probe::Probe,
};

#[derive(Args, Debug, Clone)]
pub struct EslintCmd {
	/// The preset to generate
	#[arg(value_enum)]
	pub variant: EslintVariant,

	/// The output path of the new file [default: `.eslintrc.json`, `.eslintrc.node.json` or `.eslintrc.import.json` in the project root]
	#[arg(conflicts_with = "stdout")]
	pub output: Option<PathBuf>,

	/// Prints the preset to stdout instead of writing it.
	#[arg(long)]
	pub stdout: bool,

	/// The targeted ECMAScript version, as a year [default: 2020]
	#[arg(long, value_name = "YEAR", value_parser = clap::value_parser!(u16).range(2015..))]
	pub ecma_version: Option<u16>,
}

impl EslintCmd {
	pub(crate) fn config_overrides(&self) -> Config {
		Config {
			ecma_version: self.ecma_version,
			..Default::default()
		}
	}

	pub(crate) async fn execute(self, config: &Config, root: &Path) -> AppResult<()> {
		// Module exports may be evaluated with a blocking `node` subprocess
		let project_root = root.to_path_buf();
		let facts = tokio::task::spawn_blocking(move || Probe::new(project_root).facts())
			.await
			.context("The environment lookups did not complete")?;
		let target = config.ecma_target();

		let preset = self.variant.build(&facts, target);

		if self.stdout {
			print!("{}", to_pretty_json(&preset, "the ESLint preset")?);
			return Ok(());
		}

		let output = self
			.output
			.unwrap_or_else(|| root.join(self.variant.default_file_name()));

		create_parent_dirs(&output)?;
		serialize_json(&preset, &output)?;

		info!(path = %output.display(), "Generated the ESLint preset");

		// The browser preset extends the node preset for `.cjs` and `.mjs` files
		if self.variant == EslintVariant::Browser {
			let node_output = get_parent_dir(&output).join(NODE_CONFIG_FILE);

			if node_output != output {
				serialize_json(&node_config(&facts, target), &node_output)?;

				info!(path = %node_output.display(), "Generated the ESLint preset for node files");
			}
		}

		Ok(())
	}
}
