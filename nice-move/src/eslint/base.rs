use super::*;

const BROWSER_WEBPACK_GLOBALS: &[&str] = &[
	"__webpack_public_path__",
	"__resourceQuery",
	"__dirname",
	"__filename",
];

const NODE_WEBPACK_GLOBALS: &[&str] = &["__webpack_public_path__", "__resourceQuery"];

const NODE_GLOBALS: &[&str] = &["process", "__dirname", "__filename"];

/// The override for the sources processed by the bundler, with the globals it injects.
///
/// The globals of `@best-shot/preset-env` take precedence over the webpack ones.
fn sources_override(facts: &EnvironmentFacts, webpack_globals: &[&str]) -> Override {
	let mut globals = IndexMap::new();

	if facts.webpack {
		globals.extend(readonly_globals(webpack_globals));
	}

	if let Some(best_shot) = &facts.best_shot_globals {
		globals.extend(best_shot.clone());
	}

	Override {
		globals: (!globals.is_empty()).then_some(globals),
		..Override::new("src/**")
	}
}

/// The preset for code running in browsers.
///
/// `.cjs` and `.mjs` files are considered node code, and extend the node preset
/// (expected in [`NODE_CONFIG_FILE`], next to this one).
pub fn browser_config(facts: &EnvironmentFacts, target: EcmaTarget) -> EslintConfig {
	let node_preset = format!("./{NODE_CONFIG_FILE}");
	let es_env = target.env_name();

	EslintConfig {
		parser_options: Some(parser_options(target)),
		env: string_map([
			("browser", true),
			(es_env.as_str(), true),
			("commonjs", false),
			("node", false),
		]),
		rules: common_rules(),
		overrides: vec![
			sources_override(facts, BROWSER_WEBPACK_GLOBALS),
			Override {
				extends: Some(Extends::Single(node_preset.clone())),
				..Override::new("*.cjs")
			},
			Override {
				extends: Some(Extends::Single(node_preset)),
				env: Some(string_map([("commonjs", false)])),
				rules: Some(string_map([(
					"node/no-unsupported-features/es-syntax",
					RuleSetting::error().with_option(json!({ "ignores": ["modules"] })),
				)])),
				..Override::new("*.mjs")
			},
		],
		..Default::default()
	}
}

/// The preset for code running in node.
pub fn node_config(facts: &EnvironmentFacts, target: EcmaTarget) -> EslintConfig {
	let es_env = target.env_name();

	EslintConfig {
		parser_options: Some(parser_options(target)),
		env: string_map([
			("browser", false),
			("commonjs", true),
			(es_env.as_str(), true),
			("node", true),
		]),
		globals: readonly_globals(NODE_GLOBALS),
		rules: common_rules(),
		overrides: vec![sources_override(facts, NODE_WEBPACK_GLOBALS)],
		..Default::default()
	}
}
