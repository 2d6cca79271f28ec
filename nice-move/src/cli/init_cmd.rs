use super::*;
use crate::{
	format::ManifestOutput,
	init::{DependenciesPrompt, Feature, Selection, preselection},
};

#[derive(Args, Debug, Clone, Default)]
pub struct InitCmd {
	/// The path to the `package.json` file to update, relative to the project root [default: `package.json`]
	#[arg(long, value_name = "FILE")]
	pub manifest: Option<PathBuf>,

	/// Adds the given features without showing the menu. Can be repeated or comma separated.
	#[arg(short = 'w', long = "with", value_name = "FEATURE", value_delimiter = ',')]
	pub features: Vec<Feature>,

	/// Skips the menu and reapplies the features that are already in use.
	#[arg(long, conflicts_with = "features")]
	pub no_prompt: bool,

	/// Does not format the updated manifest.
	#[arg(long)]
	pub no_format: bool,

	/// The command used to format the updated manifest. `{file}` is replaced with its path [default: `prettier --stdin-filepath {file}`]
	#[arg(long, value_name = "CMD", conflicts_with = "no_format")]
	pub formatter: Option<String>,

	/// Prints the updated manifest instead of writing it.
	#[arg(long)]
	pub dry_run: bool,
}

impl InitCmd {
	pub(crate) fn config_overrides(&self) -> Config {
		Config {
			manifest: self.manifest.clone(),
			formatter: self.formatter.clone(),
			no_format: self.no_format.then_some(true),
			..Default::default()
		}
	}

	fn selection(&self, prompt: &DependenciesPrompt) -> AppResult<Selection> {
		if !self.features.is_empty() {
			return Ok(self.features.iter().copied().collect());
		}

		let previous = self.no_prompt.then_some(false);

		if DependenciesPrompt::should_prompt(previous) {
			prompt.interact()
		} else {
			Ok(preselection(prompt.manifest()))
		}
	}

	pub(crate) async fn execute(self, config: &Config, root: &Path) -> AppResult<()> {
		let manifest_path = config.manifest_path(root);

		let manifest = read_manifest(&manifest_path)?;

		let prompt = DependenciesPrompt::new(manifest);

		let selection = self.selection(&prompt)?;

		let Some(dependencies) = prompt.format(selection) else {
			println!("Nothing to do");
			return Ok(());
		};

		let output = ManifestOutput::new(manifest_path, config.formatter(), self.dry_run);

		dependencies.run(&output).await
	}
}

/// Prints the features menu, marking the features already in use.
pub(crate) fn list_features(config: &Config, root: &Path) {
	let manifest_path = config.manifest_path(root);

	let manifest = read_manifest(&manifest_path).unwrap_or_else(|e| {
		warn!("{e}");
		Manifest::new()
	});

	for choice in DependenciesPrompt::new(manifest).choices() {
		let mark = if choice.selected { "x" } else { " " };

		println!("[{mark}] {}", choice.feature);
	}
}
