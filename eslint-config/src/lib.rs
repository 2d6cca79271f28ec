mod rules;
pub use rules::*;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

type JsonValueMap = IndexMap<String, Value>;

/// The configuration directives for ESLint, in the `eslintrc` format. See more: https://eslint.org/docs/user-guide/configuring
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
pub struct EslintConfig {
	/// Shareable configurations (or plugin configurations) that this configuration extends. The extended configurations are applied first, in order.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub extends: Option<Extends>,

	/// The options passed to the parser.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub parser_options: Option<ParserOptions>,

	/// Environments enable and disable collections of predefined global variables.
	#[serde(skip_serializing_if = "IndexMap::is_empty")]
	pub env: IndexMap<String, bool>,

	/// Enables or disables specific global variables.
	#[serde(skip_serializing_if = "IndexMap::is_empty")]
	pub globals: IndexMap<String, GlobalValue>,

	/// Settings for individual rules.
	#[serde(skip_serializing_if = "IndexMap::is_empty")]
	pub rules: IndexMap<String, RuleSetting>,

	/// Shared settings, available to every rule (mostly used by plugins).
	#[serde(skip_serializing_if = "IndexMap::is_empty")]
	pub settings: JsonValueMap,

	/// Add, remove, or otherwise reconfigure rules for specific files or groups of files. They are applied in the listed order.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub overrides: Vec<Override>,

	#[serde(flatten, skip_serializing_if = "IndexMap::is_empty")]
	pub extras: JsonValueMap,
}

/// One or many configurations to extend.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Extends {
	Single(String),
	List(Vec<String>),
}

impl From<&str> for Extends {
	fn from(value: &str) -> Self {
		Self::Single(value.to_string())
	}
}

/// One or many glob patterns.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Globs {
	Single(String),
	List(Vec<String>),
}

impl Default for Globs {
	fn default() -> Self {
		Self::List(Vec::new())
	}
}

impl From<&str> for Globs {
	fn from(value: &str) -> Self {
		Self::Single(value.to_string())
	}
}

impl From<Vec<String>> for Globs {
	fn from(value: Vec<String>) -> Self {
		Self::List(value)
	}
}

/// The options passed to the parser.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
pub struct ParserOptions {
	/// The version of ECMAScript syntax to support, as a year (2015, 2020...).
	#[serde(skip_serializing_if = "Option::is_none")]
	pub ecma_version: Option<u16>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub source_type: Option<SourceType>,

	/// Additional language features.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub ecma_features: Option<EcmaFeatures>,
}

/// Whether the code is made of ECMAScript modules or scripts.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
	Script,
	Module,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
pub struct EcmaFeatures {
	/// Enables global strict mode.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub implied_strict: Option<bool>,

	/// Allows `return` statements in the global scope.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub global_return: Option<bool>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub jsx: Option<bool>,
}

/// Settings for global variables.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[serde(try_from = "RawGlobalValue")]
pub enum GlobalValue {
	/// Disallows overwriting a global variable.
	Readonly,
	/// Allows the global variable to be overwritten.
	Writable,
	/// Disables a global variable entirely.
	Off,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawGlobalValue {
	Flag(bool),
	Name(String),
}

impl TryFrom<RawGlobalValue> for GlobalValue {
	type Error = String;

	fn try_from(value: RawGlobalValue) -> Result<Self, Self::Error> {
		match value {
			RawGlobalValue::Flag(true) => Ok(Self::Writable),
			RawGlobalValue::Flag(false) => Ok(Self::Readonly),
			RawGlobalValue::Name(name) => match name.as_str() {
				"readonly" | "readable" => Ok(Self::Readonly),
				"writable" | "writeable" => Ok(Self::Writable),
				"off" => Ok(Self::Off),
				_ => Err(format!("Invalid value `{name}` for a global variable")),
			},
		}
	}
}

/// Settings to override for a group of files.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
pub struct Override {
	/// The glob patterns of the files to which the override applies.
	pub files: Globs,

	/// The glob patterns of the files to exclude from the override.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub excluded_files: Option<Globs>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub extends: Option<Extends>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub env: Option<IndexMap<String, bool>>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub globals: Option<IndexMap<String, GlobalValue>>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub rules: Option<IndexMap<String, RuleSetting>>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub settings: Option<JsonValueMap>,
}

impl Override {
	/// Creates an empty override for the given files.
	pub fn new(files: impl Into<Globs>) -> Self {
		Self {
			files: files.into(),
			..Default::default()
		}
	}
}
