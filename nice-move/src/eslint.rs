use eslint_config::{
	EcmaFeatures, EslintConfig, Extends, GlobalValue, Globs, Override, ParserOptions, RuleSetting,
	SourceType,
};

use crate::{probe::EnvironmentFacts, *};

mod base;
mod import;

pub use base::*;
pub use import::*;

pub const BROWSER_CONFIG_FILE: &str = ".eslintrc.json";
pub const NODE_CONFIG_FILE: &str = ".eslintrc.node.json";
pub const IMPORT_CONFIG_FILE: &str = ".eslintrc.import.json";

pub const DEFAULT_ECMA_VERSION: u16 = 2020;

/// The ECMAScript edition targeted by the generated presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EcmaTarget {
	year: u16,
}

impl Default for EcmaTarget {
	fn default() -> Self {
		Self::new(DEFAULT_ECMA_VERSION)
	}
}

impl EcmaTarget {
	pub const fn new(year: u16) -> Self {
		Self { year }
	}

	pub const fn year(&self) -> u16 {
		self.year
	}

	/// The name of the ESLint environment for this edition, like `es2020`.
	pub fn env_name(&self) -> String {
		format!("es{}", self.year)
	}
}

impl Display for EcmaTarget {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.env_name())
	}
}

/// The presets that can be generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EslintVariant {
	/// Code running in browsers, with node overrides for `.cjs` and `.mjs` files.
	Browser,
	/// Code running in node.
	Node,
	/// Rules and settings for `eslint-plugin-import`.
	Import,
}

impl EslintVariant {
	pub const fn default_file_name(&self) -> &'static str {
		match self {
			Self::Browser => BROWSER_CONFIG_FILE,
			Self::Node => NODE_CONFIG_FILE,
			Self::Import => IMPORT_CONFIG_FILE,
		}
	}

	pub fn build(&self, facts: &EnvironmentFacts, target: EcmaTarget) -> EslintConfig {
		match self {
			Self::Browser => browser_config(facts, target),
			Self::Node => node_config(facts, target),
			Self::Import => import_config(facts),
		}
	}
}

pub(crate) fn parser_options(target: EcmaTarget) -> ParserOptions {
	ParserOptions {
		ecma_version: Some(target.year()),
		source_type: Some(SourceType::Module),
		ecma_features: Some(EcmaFeatures {
			implied_strict: Some(true),
			global_return: Some(false),
			jsx: Some(false),
		}),
	}
}

pub(crate) fn common_rules() -> IndexMap<String, RuleSetting> {
	IndexMap::from([
		(
			"array-callback-return".to_string(),
			RuleSetting::error().with_option(json!({ "allowImplicit": true, "checkForEach": true })),
		),
		("no-console".to_string(), RuleSetting::off()),
		("no-nested-ternary".to_string(), RuleSetting::off()),
		("no-template-curly-in-string".to_string(), RuleSetting::off()),
		("camelcase".to_string(), RuleSetting::off()),
	])
}

pub(crate) fn readonly_globals(names: &[&str]) -> IndexMap<String, GlobalValue> {
	names
		.iter()
		.map(|name| (name.to_string(), GlobalValue::Readonly))
		.collect()
}

/// Builds a map of string keys from a list of entries.
pub(crate) fn string_map<V, const N: usize>(entries: [(&str, V); N]) -> IndexMap<String, V> {
	entries
		.into_iter()
		.map(|(key, value)| (key.to_string(), value))
		.collect()
}

pub(crate) fn string_list(items: &[&str]) -> Vec<String> {
	items.iter().map(|item| item.to_string()).collect()
}

#[cfg(test)]
mod test {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn ecma_target() {
		assert_eq!(EcmaTarget::default().env_name(), "es2020");
		assert_eq!(EcmaTarget::new(2021).to_string(), "es2021");
	}

	#[test]
	fn common_parts() -> Result<(), Box<dyn std::error::Error>> {
		assert_eq!(
			serde_json::to_value(parser_options(EcmaTarget::default()))?,
			json!({
				"ecmaVersion": 2020,
				"sourceType": "module",
				"ecmaFeatures": { "impliedStrict": true, "globalReturn": false, "jsx": false }
			})
		);

		assert_eq!(
			serde_json::to_value(common_rules())?,
			json!({
				"array-callback-return": ["error", { "allowImplicit": true, "checkForEach": true }],
				"no-console": "off",
				"no-nested-ternary": "off",
				"no-template-curly-in-string": "off",
				"camelcase": "off"
			})
		);

		Ok(())
	}

	#[test]
	fn variant_file_names() {
		assert_eq!(EslintVariant::Browser.default_file_name(), ".eslintrc.json");
		assert_eq!(EslintVariant::Node.default_file_name(), ".eslintrc.node.json");
		assert_eq!(EslintVariant::Import.default_file_name(), ".eslintrc.import.json");
	}
}
