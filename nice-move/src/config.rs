use crate::{eslint::EcmaTarget, format::Formatter, *};

mod config_setup;

pub(crate) const DEFAULT_MANIFEST: &str = "package.json";

/// The global configuration struct.
#[derive(Clone, Debug, Deserialize, Serialize, Merge, PartialEq, Eq, Default)]
#[merge(strategy = overwrite_if_some)]
#[serde(default)]
#[serde(deny_unknown_fields)]
pub struct Config {
	#[serde(skip)]
	pub(crate) config_file: Option<PathBuf>,

	/// The path to the `package.json` file to update, relative to the project root [default: `package.json`].
	pub manifest: Option<PathBuf>,

	/// The shell command used to format the updated manifest. `{file}` is replaced with the path of the manifest [default: `prettier --stdin-filepath {file}`].
	pub formatter: Option<String>,

	/// Do not format the updated manifest.
	pub no_format: Option<bool>,

	/// The ECMAScript version targeted by the generated ESLint presets [default: 2020].
	pub ecma_version: Option<u16>,
}

impl Config {
	pub fn new() -> Self {
		Self::default()
	}

	/// The file from which this config was extracted, if any.
	pub fn source(&self) -> Option<&Path> {
		self.config_file.as_deref()
	}

	pub fn manifest_path(&self, root: &Path) -> PathBuf {
		root.join(
			self.manifest
				.as_deref()
				.unwrap_or_else(|| Path::new(DEFAULT_MANIFEST)),
		)
	}

	/// Returns the formatter for updated manifests, unless formatting is disabled.
	pub fn formatter(&self) -> Option<Formatter> {
		if self.no_format.unwrap_or_default() {
			return None;
		}

		Some(
			self.formatter
				.as_deref()
				.map_or_else(Formatter::default, Formatter::new),
		)
	}

	pub fn ecma_target(&self) -> EcmaTarget {
		self.ecma_version
			.map_or_else(EcmaTarget::default, EcmaTarget::new)
	}
}

#[cfg(test)]
mod test {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn later_values_take_precedence() {
		let mut config = Config {
			manifest: Some("app/package.json".into()),
			ecma_version: Some(2019),
			..Default::default()
		};

		config.merge(Config {
			ecma_version: Some(2021),
			no_format: Some(true),
			..Default::default()
		});

		assert_eq!(config.manifest, Some(PathBuf::from("app/package.json")));
		assert_eq!(config.ecma_version, Some(2021));
		assert_eq!(config.formatter(), None);
	}

	#[test]
	fn defaults() {
		let config = Config::new();

		assert_eq!(
			config.manifest_path(Path::new("/project")),
			PathBuf::from("/project/package.json")
		);
		assert_eq!(config.ecma_target(), EcmaTarget::default());
		assert_eq!(config.formatter(), Some(Formatter::default()));
	}
}
