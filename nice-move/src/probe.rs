use eslint_config::GlobalValue;

use crate::*;

mod loader;
pub use loader::*;

pub const BEST_SHOT_PRESET: &str = "@best-shot/preset-env";
pub const BEST_SHOT_ESLINT_EXPORT: &str = "eslint.js";
pub const WEBPACK: &str = "webpack";
/// The key of the section of `package.json` holding the settings for nice-move.
pub const MANIFEST_SECTION: &str = "nice-move";

/// What the probe found out about the project environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentFacts {
	/// The globals exported by `@best-shot/preset-env`, if installed.
	pub best_shot_globals: Option<IndexMap<String, GlobalValue>>,
	/// Whether `webpack` can be resolved.
	pub webpack: bool,
	/// Whether the package declares a `vscode` engine (meaning it is a vscode extension).
	pub vscode_engine: bool,
	pub internal_regex: Option<String>,
	/// The workspace globs, when there is at least one.
	pub workspaces: Option<Vec<String>>,
}

/// Inspects the `package.json` and the installed packages of a project.
///
/// Every lookup is optional: a missing manifest, an unresolvable package or a module that fails to
/// load all count as "not present".
#[derive(Debug)]
pub struct Probe<L = NodeLoader> {
	root: PathBuf,
	manifest: Manifest,
	loader: L,
}

impl Probe {
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self::with_loader(root, NodeLoader)
	}
}

impl<L: ModuleLoader> Probe<L> {
	pub fn with_loader(root: impl Into<PathBuf>, loader: L) -> Self {
		let root = root.into();
		// Module paths handed to node must not look like bare package names
		let root = std::path::absolute(&root).unwrap_or(root);
		let manifest_path = root.join(DEFAULT_MANIFEST);

		let manifest = read_manifest(&manifest_path).unwrap_or_else(|e| {
			debug!("Using an empty manifest: {e}");
			Manifest::new()
		});

		Self {
			root,
			manifest,
			loader,
		}
	}

	pub fn root(&self) -> &Path {
		&self.root
	}

	pub const fn manifest(&self) -> &Manifest {
		&self.manifest
	}

	/// Finds the directory of an installed package, looking into `node_modules` of the root and of
	/// each of its ancestors.
	pub fn resolve_package(&self, package: &str) -> Option<PathBuf> {
		let package_manifest = Path::new("node_modules")
			.join(package)
			.join(DEFAULT_MANIFEST);

		find_file_up(&self.root, package_manifest)
			.and_then(|path| path.parent().map(Path::to_path_buf))
	}

	pub fn try_resolve(&self, package: &str) -> bool {
		let found = self.resolve_package(package).is_some();

		debug!(package, found, "Resolving package");

		found
	}

	/// Loads the export of a module inside an installed package.
	pub fn read_optional_export(&self, package: &str, export_path: &str) -> Option<Value> {
		let package_dir = self.resolve_package(package)?;

		self.loader.load(&package_dir.join(export_path))
	}

	fn best_shot_globals(&self) -> Option<IndexMap<String, GlobalValue>> {
		let export = self.read_optional_export(BEST_SHOT_PRESET, BEST_SHOT_ESLINT_EXPORT)?;
		let globals = export.get("globals")?.clone();

		serde_json::from_value(globals)
			.inspect_err(|e| warn!("Ignoring the globals of `{BEST_SHOT_PRESET}`: {e}"))
			.ok()
	}

	fn internal_regex(&self) -> Option<String> {
		self.manifest
			.section(MANIFEST_SECTION)?
			.get("internal-regex")?
			.as_str()
			.map(str::to_string)
	}

	fn workspaces(&self) -> Option<Vec<String>> {
		self.manifest
			.workspaces()
			.map(|workspaces| workspaces.packages().to_vec())
			.filter(|packages| !packages.is_empty())
	}

	/// Runs every lookup.
	pub fn facts(&self) -> EnvironmentFacts {
		let facts = EnvironmentFacts {
			best_shot_globals: self.best_shot_globals(),
			webpack: self.try_resolve(WEBPACK),
			vscode_engine: self.manifest.engine("vscode").is_some_and(is_truthy),
			internal_regex: self.internal_regex(),
			workspaces: self.workspaces(),
		};

		debug!(?facts, "Probed the environment");

		facts
	}
}

fn is_truthy(value: &Value) -> bool {
	match value {
		Value::Null => false,
		Value::Bool(flag) => *flag,
		Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
		Value::String(string) => !string.is_empty(),
		Value::Array(_) | Value::Object(_) => true,
	}
}
