use super::*;

const IMPORT_PLUGIN_PRESET: &str = "plugin:import/recommended";

/// Files that are allowed to import from `devDependencies`.
const DEV_FILES: &[&str] = &[
	"**/*.{test,spec}.{m,c,}js",
	"{test,tests,try}.{m,c,}js",
	"{test,tests,config}/**/*.{m,c,}js",
	"**/.*rc.{m,c,}js",
	"**/*.config.{m,c,}js",
	".best-shot/**",
];

/// Settings for both the import plugin and its node resolver.
fn resolver_settings(extensions: &[&str]) -> IndexMap<String, Value> {
	string_map([
		("import/extensions", json!(extensions)),
		("import/resolver", json!({ "node": { "extensions": extensions } })),
	])
}

fn workspaces_override(workspaces: &[String]) -> Override {
	let files: Vec<String> = workspaces
		.iter()
		.map(|glob| format!("{}/*", glob.trim_end_matches('/')))
		.collect();

	Override {
		rules: Some(string_map([("import/no-relative-packages", RuleSetting::warn())])),
		settings: Some(string_map([("import/internal-regex", Value::Bool(false))])),
		..Override::new(files)
	}
}

/// The preset for `eslint-plugin-import`.
pub fn import_config(facts: &EnvironmentFacts) -> EslintConfig {
	let mut settings = IndexMap::new();

	if facts.vscode_engine {
		settings.insert("import/core-modules".to_string(), json!(["vscode"]));
	}

	settings.insert("import/ignore".to_string(), Value::Bool(false));

	if let Some(internal_regex) = &facts.internal_regex {
		settings.insert(
			"import/internal-regex".to_string(),
			Value::String(internal_regex.clone()),
		);
	}

	let mut overrides = Vec::new();

	if let Some(workspaces) = facts.workspaces.as_deref().filter(|w| !w.is_empty()) {
		overrides.push(workspaces_override(workspaces));
	}

	overrides.extend([
		Override {
			settings: Some(resolver_settings(&[".cjs", ".js", ".json"])),
			..Override::new("*.cjs")
		},
		Override {
			settings: Some(resolver_settings(&[".mjs", ".cjs", ".js"])),
			..Override::new("*.mjs")
		},
		Override {
			excluded_files: Some(Globs::List(string_list(&["*.cjs"]))),
			rules: Some(string_map([("import/no-commonjs", RuleSetting::error())])),
			..Override::new("**/*")
		},
		Override {
			excluded_files: Some(Globs::from("*.{m,c}js")),
			rules: Some(string_map([("import/no-nodejs-modules", RuleSetting::error())])),
			settings: Some(resolver_settings(&[".js", ".js", ".js"])),
			..Override::new("**/*.*")
		},
	]);

	EslintConfig {
		extends: Some(Extends::List(string_list(&[IMPORT_PLUGIN_PRESET]))),
		rules: string_map([
			(
				"import/extensions",
				RuleSetting::error()
					.with_option("always")
					.with_option(json!({ "ignorePackages": true })),
			),
			(
				"import/no-extraneous-dependencies",
				RuleSetting::error().with_option(json!({ "devDependencies": DEV_FILES })),
			),
			("import/newline-after-import", RuleSetting::off()),
			("import/no-dynamic-require", RuleSetting::off()),
			("import/order", RuleSetting::off()),
			("import/prefer-default-export", RuleSetting::off()),
		]),
		settings,
		overrides,
		..Default::default()
	}
}

#[cfg(test)]
mod test {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn plain_package() -> Result<(), Box<dyn std::error::Error>> {
		let config = serde_json::to_value(import_config(&EnvironmentFacts::default()))?;

		assert_eq!(
			config,
			json!({
				"extends": ["plugin:import/recommended"],
				"rules": {
					"import/extensions": ["error", "always", { "ignorePackages": true }],
					"import/no-extraneous-dependencies": [
						"error",
						{
							"devDependencies": [
								"**/*.{test,spec}.{m,c,}js",
								"{test,tests,try}.{m,c,}js",
								"{test,tests,config}/**/*.{m,c,}js",
								"**/.*rc.{m,c,}js",
								"**/*.config.{m,c,}js",
								".best-shot/**"
							]
						}
					],
					"import/newline-after-import": "off",
					"import/no-dynamic-require": "off",
					"import/order": "off",
					"import/prefer-default-export": "off"
				},
				"settings": { "import/ignore": false },
				"overrides": [
					{
						"files": "*.cjs",
						"settings": {
							"import/extensions": [".cjs", ".js", ".json"],
							"import/resolver": { "node": { "extensions": [".cjs", ".js", ".json"] } }
						}
					},
					{
						"files": "*.mjs",
						"settings": {
							"import/extensions": [".mjs", ".cjs", ".js"],
							"import/resolver": { "node": { "extensions": [".mjs", ".cjs", ".js"] } }
						}
					},
					{
						"files": "**/*",
						"excludedFiles": ["*.cjs"],
						"rules": { "import/no-commonjs": "error" }
					},
					{
						"files": "**/*.*",
						"excludedFiles": "*.{m,c}js",
						"rules": { "import/no-nodejs-modules": "error" },
						"settings": {
							"import/extensions": [".js", ".js", ".js"],
							"import/resolver": { "node": { "extensions": [".js", ".js", ".js"] } }
						}
					}
				]
			})
		);

		Ok(())
	}

	#[test]
	fn vscode_extension_in_a_workspace() -> Result<(), Box<dyn std::error::Error>> {
		let facts = EnvironmentFacts {
			vscode_engine: true,
			internal_regex: Some("^@app/".to_string()),
			workspaces: Some(vec!["packages".to_string(), "tools/".to_string()]),
			..Default::default()
		};

		let config = serde_json::to_value(import_config(&facts))?;

		assert_eq!(
			config["settings"],
			json!({
				"import/core-modules": ["vscode"],
				"import/ignore": false,
				"import/internal-regex": "^@app/"
			})
		);
		assert_eq!(
			config["overrides"][0],
			json!({
				"files": ["packages/*", "tools/*"],
				"rules": { "import/no-relative-packages": "warn" },
				"settings": { "import/internal-regex": false }
			})
		);
		assert_eq!(config["overrides"].as_array().map(Vec::len), Some(5));

		Ok(())
	}
}
