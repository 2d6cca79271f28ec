use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

mod merge;
pub use merge::*;

mod package_json_elements;
pub use package_json_elements::*;

type JsonMap = Map<String, Value>;

/// The contents of a `package.json` file.
///
/// Unlike a fully typed representation, this keeps every key (known or not) in its original order,
/// so that a document can be read, merged and written back without losing or reshuffling anything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest(JsonMap);

/// A partial [`Manifest`], contributed by a single feature and merged into a whole document.
pub type Fragment = Manifest;

impl Manifest {
	pub fn new() -> Self {
		Self::default()
	}

	/// Converts a json value into a manifest. Returns `None` if the value is not an object.
	pub fn from_value(value: Value) -> Option<Self> {
		match value {
			Value::Object(map) => Some(Self(map)),
			_ => None,
		}
	}

	pub fn into_value(self) -> Value {
		Value::Object(self.0)
	}

	pub const fn as_map(&self) -> &JsonMap {
		&self.0
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn get(&self, key: &str) -> Option<&Value> {
		self.0.get(key)
	}

	pub fn contains_key(&self, key: &str) -> bool {
		self.0.contains_key(key)
	}

	/// Inserts a top level key, replacing (not merging) any previous value.
	pub fn insert<V: Into<Value>>(&mut self, key: impl Into<String>, value: V) -> Option<Value> {
		self.0.insert(key.into(), value.into())
	}

	/// Returns a top level key only if its value is an object.
	pub fn section(&self, key: &str) -> Option<&JsonMap> {
		self.0.get(key).and_then(Value::as_object)
	}

	/// Whether the package is marked as `private`, which makes npm refuse to publish it.
	pub fn is_private(&self) -> bool {
		matches!(self.0.get("private"), Some(Value::Bool(true)))
	}

	/// Returns the dependency map for the given kind, if present.
	pub fn dependencies(&self, kind: &JsDepKind) -> Option<&JsonMap> {
		self.section(kind.key())
	}

	/// Checks whether `name` is listed in the dependency map for the given kind.
	pub fn has_dependency(&self, kind: &JsDepKind, name: &str) -> bool {
		self.dependencies(kind)
			.is_some_and(|deps| deps.contains_key(name))
	}

	/// Returns the version range declared for the given engine (`node`, `vscode`...).
	pub fn engine(&self, name: &str) -> Option<&Value> {
		self.section("engines")
			.and_then(|engines| engines.get(name))
	}

	/// Returns the `workspaces` field, either in its list form or in its object form.
	pub fn workspaces(&self) -> Option<Workspaces> {
		self.0
			.get("workspaces")
			.and_then(|value| serde_json::from_value(value.clone()).ok())
	}

	/// Deep merges another document into this one. See [`deep_merge`] for the combination rules.
	pub fn merge(&mut self, other: Self) {
		merge_maps(&mut self.0, other.0);
	}
}

impl From<JsonMap> for Manifest {
	fn from(value: JsonMap) -> Self {
		Self(value)
	}
}

impl From<Manifest> for Value {
	fn from(value: Manifest) -> Self {
		value.into_value()
	}
}

impl TryFrom<Value> for Manifest {
	type Error = Value;

	fn try_from(value: Value) -> Result<Self, Self::Error> {
		match value {
			Value::Object(map) => Ok(Self(map)),
			other => Err(other),
		}
	}
}
