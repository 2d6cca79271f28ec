use std::collections::BTreeSet;

use crate::*;

mod dependencies;
mod prompt;

pub use dependencies::*;
pub use prompt::*;

/// The optional tools that can be added to a project.
///
/// The order of the variants is the order of the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum)]
pub enum Feature {
	Husky,
	Garou,
	Ava,
	Commitlint,
	Eslint,
	Stylelint,
	Prettier,
	React,
	Vue,
}

/// The features chosen by the user.
pub type Selection = BTreeSet<Feature>;

impl Feature {
	pub const ALL: [Self; 9] = [
		Self::Husky,
		Self::Garou,
		Self::Ava,
		Self::Commitlint,
		Self::Eslint,
		Self::Stylelint,
		Self::Prettier,
		Self::React,
		Self::Vue,
	];

	/// The name shown in the menu.
	pub const fn title(&self) -> &'static str {
		match self {
			Self::Husky => "husky",
			Self::Garou => "garou",
			Self::Ava => "ava",
			Self::Commitlint => "commitlint",
			Self::Eslint => "eslint",
			Self::Stylelint => "stylelint",
			Self::Prettier => "prettier",
			Self::React => "react",
			Self::Vue => "vue",
		}
	}

	/// Checks whether the manifest already uses this feature.
	///
	/// Tooling is looked up in `devDependencies`, frameworks in `dependencies`.
	pub fn is_present(&self, manifest: &Manifest) -> bool {
		let dev = |name: &str| manifest.has_dependency(&JsDepKind::DevDependency, name);

		match self {
			Self::Commitlint => dev("commitlint") || dev("@commitlint/cli"),
			Self::React | Self::Vue => manifest.has_dependency(&JsDepKind::Dependency, self.title()),
			_ => dev(self.title()),
		}
	}

	/// The features that are run through the `nice-move lint` command.
	pub const fn is_lint(&self) -> bool {
		matches!(
			self,
			Self::Eslint | Self::Stylelint | Self::Prettier | Self::Garou
		)
	}
}

impl Display for Feature {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.title())
	}
}

/// The features already in use in the manifest.
pub fn preselection(manifest: &Manifest) -> Selection {
	Feature::ALL
		.into_iter()
		.filter(|feature| feature.is_present(manifest))
		.collect()
}
