use package_json::{PublishConfig, PublishConfigAccess, merge_all};

use super::*;
use crate::format::ManifestOutput;

pub const COMPLETION_MESSAGE: &str = "Add project dependencies";

pub const NODE_ENGINE: &str = "^12.18 || ^14";
pub const NPM_REGISTRY: &str = "https://registry.npmjs.org/";
pub const LINT_COMMAND: &str = "nice-move lint";
pub const AVA_PUBLISH_COMMAND: &str = "ava --fail-fast";

/// The shareable ESLint config to extend, depending on the framework in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EslintPreset {
	Base,
	React,
	Vue,
}

impl EslintPreset {
	/// React or vue count as used when selected or already listed in `dependencies`.
	/// Using both (or neither) falls back to the base preset.
	pub fn detect(manifest: &Manifest, selection: &Selection) -> Self {
		let uses = |feature: Feature| selection.contains(&feature) || feature.is_present(manifest);

		match (uses(Feature::React), uses(Feature::Vue)) {
			(true, false) => Self::React,
			(false, true) => Self::Vue,
			_ => Self::Base,
		}
	}

	pub const fn name(&self) -> &'static str {
		match self {
			Self::Base => "base",
			Self::React => "react",
			Self::Vue => "vue",
		}
	}

	pub fn package(&self) -> String {
		format!("@nice-move/eslint-config-{}", self.name())
	}
}

/// The script run before publishing: the linters and the tests, when used.
pub fn prepublish_command(selection: &Selection) -> Option<String> {
	let mut commands = Vec::new();

	if selection.iter().any(Feature::is_lint) {
		commands.push(LINT_COMMAND);
	}

	if selection.contains(&Feature::Ava) {
		commands.push(AVA_PUBLISH_COMMAND);
	}

	(!commands.is_empty()).then(|| commands.join(" && "))
}

pub fn engines_fragment() -> Option<Fragment> {
	Some(fragment!({ "engines": { "node": NODE_ENGINE } }))
}

/// Makes the package publishable on the public registry, unless it is private.
pub fn publish_fragment(manifest: &Manifest, selection: &Selection) -> Option<Fragment> {
	if manifest.is_private() {
		return None;
	}

	let publish_config = PublishConfig {
		access: Some(PublishConfigAccess::Public),
		registry: Some(NPM_REGISTRY.to_string()),
		..Default::default()
	};

	let mut fragment = fragment!({ "publishConfig": publish_config });

	if let Some(command) = prepublish_command(selection) {
		fragment.insert("scripts", json!({ "prepublishOnly": command }));
	}

	Some(fragment)
}

/// Git hooks are managed by husky, which is also needed by commitlint.
pub fn hook_manager_fragment(selection: &Selection) -> Option<Fragment> {
	(selection.contains(&Feature::Husky) || selection.contains(&Feature::Commitlint))
		.then(|| fragment!({ "devDependencies": { "husky": "^4.3.8" } }))
}

pub fn garou_fragment(selection: &Selection) -> Option<Fragment> {
	selection
		.contains(&Feature::Garou)
		.then(|| fragment!({ "devDependencies": { "garou": "^0.1.10" } }))
}

pub fn commitlint_fragment(selection: &Selection) -> Option<Fragment> {
	selection.contains(&Feature::Commitlint).then(|| {
		fragment!({
			"commitlint": { "extends": "@nice-move/commitlint-config" },
			"husky": { "hooks": { "commit-msg": "commitlint -E HUSKY_GIT_PARAMS" } },
			"devDependencies": {
				"commitlint": "^11.0.0",
				"@nice-move/commitlint-config": "^0.0.0"
			}
		})
	})
}

pub fn lint_fragment(selection: &Selection) -> Option<Fragment> {
	if !selection.iter().any(Feature::is_lint) {
		return None;
	}

	let mut fragment = fragment!({
		"devDependencies": { "@nice-move/cli": "^0.5.14" },
		"scripts": { "lint": LINT_COMMAND }
	});

	if selection.contains(&Feature::Husky) {
		fragment.insert("husky", json!({ "hooks": { "pre-commit": LINT_COMMAND } }));
	}

	Some(fragment)
}

pub fn ava_fragment(selection: &Selection) -> Option<Fragment> {
	if !selection.contains(&Feature::Ava) {
		return None;
	}

	let mut fragment = fragment!({
		"devDependencies": { "ava": "^3.15.0" },
		"scripts": { "test": "ava --verbose" }
	});

	if selection.contains(&Feature::Husky)
		&& let Some(command) = prepublish_command(selection)
	{
		fragment.insert("husky", json!({ "hooks": { "pre-commit": command } }));
	}

	Some(fragment)
}

pub fn eslint_fragment(manifest: &Manifest, selection: &Selection) -> Option<Fragment> {
	if !selection.contains(&Feature::Eslint) {
		return None;
	}

	let preset = EslintPreset::detect(manifest, selection).package();

	let mut dev_dependencies = serde_json::Map::new();
	dev_dependencies.insert(preset.clone(), json!("^0.5.15"));
	dev_dependencies.insert("eslint".to_string(), json!("^7.18.0"));

	Some(fragment!({
		"eslintConfig": { "extends": preset },
		"devDependencies": dev_dependencies
	}))
}

pub fn stylelint_fragment(selection: &Selection) -> Option<Fragment> {
	selection.contains(&Feature::Stylelint).then(|| {
		fragment!({
			"devDependencies": {
				"@nice-move/stylelint-config": "^0.5.2",
				"stylelint": "^13.9.0"
			},
			"stylelint": { "extends": "@nice-move/stylelint-config" }
		})
	})
}

pub fn prettier_fragment(selection: &Selection) -> Option<Fragment> {
	selection.contains(&Feature::Prettier).then(|| {
		fragment!({
			"devDependencies": {
				"@nice-move/prettier-config": "^0.3.5",
				"prettier": "^2.2.1"
			},
			"prettier": "@nice-move/prettier-config"
		})
	})
}

pub fn react_fragment(selection: &Selection) -> Option<Fragment> {
	selection.contains(&Feature::React).then(|| {
		fragment!({
			"dependencies": { "react": "~16.14.0" },
			"devDependencies": { "@types/react": "^16.14.2" }
		})
	})
}

pub fn vue_fragment(selection: &Selection) -> Option<Fragment> {
	selection
		.contains(&Feature::Vue)
		.then(|| fragment!({ "dependencies": { "vue": "~2.6.12" } }))
}

/// Adds the selected features to a manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependencies {
	manifest: Manifest,
	selection: Selection,
}

impl Dependencies {
	pub const fn new(manifest: Manifest, selection: Selection) -> Self {
		Self {
			manifest,
			selection,
		}
	}

	pub const fn selection(&self) -> &Selection {
		&self.selection
	}

	/// The fragments to merge, in order. The existing manifest sits between the defaults
	/// (engines, publishing) and the features, so that it overrides the former and is updated by
	/// the latter.
	pub fn fragments(&self) -> Vec<Fragment> {
		let Self {
			manifest,
			selection,
		} = self;

		[
			engines_fragment(),
			publish_fragment(manifest, selection),
			Some(manifest.clone()),
			hook_manager_fragment(selection),
			garou_fragment(selection),
			commitlint_fragment(selection),
			lint_fragment(selection),
			ava_fragment(selection),
			eslint_fragment(manifest, selection),
			stylelint_fragment(selection),
			prettier_fragment(selection),
			react_fragment(selection),
			vue_fragment(selection),
		]
		.into_iter()
		.flatten()
		.filter(|fragment| !fragment.is_empty())
		.collect()
	}

	pub fn merge_manifest(&self) -> Manifest {
		merge_all(self.fragments())
	}

	/// Merges the features into the manifest and writes it.
	pub async fn run(&self, output: &ManifestOutput) -> AppResult<()> {
		let features: Vec<&str> = self.selection.iter().map(Feature::title).collect();
		info!(?features, "Adding features to the manifest");

		let manifest = self.merge_manifest();

		output.write(&manifest).await?;

		if !output.is_dry_run() {
			println!("{COMPLETION_MESSAGE}");
		}

		Ok(())
	}
}
