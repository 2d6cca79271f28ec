use std::collections::BTreeMap;

use super::*;

/// Allows packages within a directory to depend on one another using direct linking of local files.
/// It can be a plain list of globs, or an object with a `packages` list (as used by yarn).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum Workspaces {
	List(Vec<String>),
	Config {
		#[serde(default)]
		packages: Vec<String>,
		#[serde(default, skip_serializing_if = "Vec::is_empty")]
		nohoist: Vec<String>,
	},
}

impl Workspaces {
	/// The globs pointing to the packages of the workspace.
	pub fn packages(&self) -> &[String] {
		match self {
			Self::List(list) => list,
			Self::Config { packages, .. } => packages,
		}
	}
}

/// The values that can be used to define `access` in a [`PublishConfig`]
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PublishConfigAccess {
	Public,
	Restricted,
}

/// A set of config values that will be used at publish-time. It's especially handy if you want to set the tag, registry or access, so that you can ensure that a given package is not tagged with "latest", published to the global public registry or that a scoped module is private by default.
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PublishConfig {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub access: Option<PublishConfigAccess>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub tag: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub registry: Option<String>,
	#[serde(skip_serializing_if = "BTreeMap::is_empty")]
	#[serde(flatten)]
	pub other: BTreeMap<String, String>,
}

/// The kinds of dependency maps in a `package.json` file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsDepKind {
	Dependency,
	DevDependency,
	OptionalDependency,
	PeerDependency,
}

impl JsDepKind {
	/// The name of the `package.json` key holding this kind of dependencies.
	pub const fn key(&self) -> &'static str {
		match self {
			Self::Dependency => "dependencies",
			Self::DevDependency => "devDependencies",
			Self::OptionalDependency => "optionalDependencies",
			Self::PeerDependency => "peerDependencies",
		}
	}
}
