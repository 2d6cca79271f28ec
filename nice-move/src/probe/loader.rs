use std::process::{Command, Stdio};

use super::*;

const NODE_EXPORT_SCRIPT: &str = "process.stdout.write(JSON.stringify(require(process.argv[1])))";

/// Loads the default export of a module of an installed package.
pub trait ModuleLoader {
	/// Returns the export of the module at `path`, as json, or `None` if it cannot be loaded.
	fn load(&self, path: &Path) -> Option<Value>;
}

/// Loads json modules directly and evaluates javascript modules with `node`.
#[derive(Debug, Clone, Default)]
pub struct NodeLoader;

impl ModuleLoader for NodeLoader {
	fn load(&self, path: &Path) -> Option<Value> {
		if path.extension().is_some_and(|ext| ext == "json") {
			return match deserialize_json(path) {
				Ok(value) => Some(value),
				Err(e) => {
					debug!("{e}");
					None
				}
			};
		}

		// `require` resolves relative paths without a leading `./` as package names
		let module = std::path::absolute(path).ok()?;

		let output = Command::new("node")
			.args(["-e", NODE_EXPORT_SCRIPT])
			.arg(&module)
			.stdin(Stdio::null())
			.stderr(Stdio::piped())
			.output();

		let output = match output {
			Ok(output) => output,
			Err(e) => {
				debug!(module = %path.display(), "Could not run node: {e}");
				return None;
			}
		};

		if !output.status.success() {
			debug!(
				module = %path.display(),
				stderr = %String::from_utf8_lossy(&output.stderr),
				"Failed to evaluate the module"
			);
			return None;
		}

		serde_json::from_slice(&output.stdout)
			.inspect_err(|e| debug!(module = %path.display(), "Invalid module export: {e}"))
			.ok()
	}
}

/// A loader returning preset exports by file name, without touching the filesystem.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct StaticLoader(pub(crate) IndexMap<String, Value>);

#[cfg(test)]
impl ModuleLoader for StaticLoader {
	fn load(&self, path: &Path) -> Option<Value> {
		let name = path.file_name()?.to_str()?;

		self.0.get(name).cloned()
	}
}
