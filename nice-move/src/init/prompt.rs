use dialoguer::MultiSelect;

use super::*;

/// The number of entries shown at once in the menu.
pub const MENU_PAGE_SIZE: usize = 20;

/// One entry of the feature menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
	pub feature: Feature,
	pub selected: bool,
}

/// The menu for picking the features to add to a manifest.
#[derive(Debug, Clone)]
pub struct DependenciesPrompt {
	manifest: Manifest,
}

impl DependenciesPrompt {
	pub const fn new(manifest: Manifest) -> Self {
		Self { manifest }
	}

	pub const fn manifest(&self) -> &Manifest {
		&self.manifest
	}

	/// Every feature, in menu order, preselected if the manifest already uses it.
	pub fn choices(&self) -> Vec<Choice> {
		Feature::ALL
			.into_iter()
			.map(|feature| Choice {
				feature,
				selected: feature.is_present(&self.manifest),
			})
			.collect()
	}

	/// The menu is skipped when the previous answer was an explicit refusal.
	pub fn should_prompt(previous: Option<bool>) -> bool {
		previous != Some(false)
	}

	/// Shows the menu and returns the chosen features.
	pub fn interact(&self) -> AppResult<Selection> {
		let choices = self.choices();

		let items: Vec<(&str, bool)> = choices
			.iter()
			.map(|choice| (choice.feature.title(), choice.selected))
			.collect();

		let indices = MultiSelect::new()
			.with_prompt(COMPLETION_MESSAGE)
			.items_checked(&items)
			.max_length(MENU_PAGE_SIZE)
			.report(false)
			.interact()?;

		Ok(indices
			.into_iter()
			.filter_map(|index| choices.get(index).map(|choice| choice.feature))
			.collect())
	}

	/// Turns a selection into the action that applies it. Nothing is done for an empty selection.
	pub fn format(self, selection: Selection) -> Option<Dependencies> {
		if selection.is_empty() {
			return None;
		}

		Some(Dependencies::new(self.manifest, selection))
	}
}
