use std::fs::read_to_string;

use pretty_assertions::assert_eq;

use super::*;
use crate::{eslint::EslintVariant, init::Feature};

fn path_str(path: &Path) -> String {
	path.to_string_lossy().to_string()
}

fn read_json(path: &Path) -> Result<Value, Box<dyn std::error::Error>> {
	Ok(serde_json::from_str(&read_to_string(path)?)?)
}

#[test]
fn parses_init_features() -> Result<(), Box<dyn std::error::Error>> {
	let cli = Cli::try_parse_from([
		"nice-move",
		"-vv",
		"init",
		"--with",
		"husky,ava",
		"-w",
		"vue",
		"--no-format",
	])?;

	assert_eq!(cli.verbose, 2);

	let Commands::Init(cmd) = cli.command else {
		panic!("Expected the init command");
	};

	assert_eq!(cmd.features, [Feature::Husky, Feature::Ava, Feature::Vue]);
	assert!(cmd.no_format);
	assert_eq!(cmd.config_overrides().formatter(), None);

	Ok(())
}

#[test]
fn rejects_conflicting_flags() {
	assert!(Cli::try_parse_from(["nice-move", "init", "--with", "ava", "--no-prompt"]).is_err());
	assert!(
		Cli::try_parse_from(["nice-move", "init", "--no-format", "--formatter", "cat"]).is_err()
	);
	assert!(Cli::try_parse_from(["nice-move", "init", "--with", "jest"]).is_err());
	assert!(Cli::try_parse_from(["nice-move", "eslint", "deno"]).is_err());
	assert!(
		Cli::try_parse_from(["nice-move", "eslint", "node", "--ecma-version", "2009"]).is_err()
	);
}

#[test]
fn cli_flags_override_the_config_file() -> Result<(), Box<dyn std::error::Error>> {
	let dir = tempfile::tempdir()?;
	let config_file = dir.path().join("nice-move.toml");
	write_file(
		&config_file,
		"ecma_version = 2019\nmanifest = \"app/package.json\"\n",
	)?;

	let cli = Cli::try_parse_from([
		"nice-move",
		"-c",
		&path_str(&config_file),
		"eslint",
		"node",
		"--ecma-version",
		"2022",
	])?;

	let config = get_config_from_cli(cli.overrides.unwrap_or_default(), &cli.command)?;

	assert_eq!(config.ecma_version, Some(2022));
	assert_eq!(config.manifest, Some(PathBuf::from("app/package.json")));
	assert_eq!(config.source(), Some(get_abs_path(&config_file)?.as_path()));

	Ok(())
}

#[tokio::test]
async fn eslint_browser_preset_files() -> Result<(), Box<dyn std::error::Error>> {
	let root = tempfile::tempdir()?;
	let webpack_dir = root.path().join("node_modules/webpack");
	create_all_dirs(&webpack_dir)?;
	write_file(&webpack_dir.join("package.json"), r#"{ "name": "webpack" }"#)?;

	let output = root.path().join("config/.eslintrc.json");

	Cli::execute_with([
		"nice-move",
		"--ignore-config",
		"--root",
		&path_str(root.path()),
		"eslint",
		"browser",
		&path_str(&output),
	])
	.await?;

	let browser = read_json(&output)?;
	let node = read_json(&root.path().join("config/.eslintrc.node.json"))?;

	assert_eq!(browser["env"]["browser"], true);
	assert_eq!(
		browser["overrides"][0]["globals"]["__webpack_public_path__"],
		"readonly"
	);
	assert_eq!(browser["overrides"][1]["extends"], "./.eslintrc.node.json");
	assert_eq!(node["env"]["node"], true);
	assert_eq!(node["overrides"][0]["globals"]["__resourceQuery"], "readonly");

	Ok(())
}

#[tokio::test(flavor = "current_thread")]
async fn eslint_next_to_other_tasks() -> Result<(), Box<dyn std::error::Error>> {
	let root = tempfile::tempdir()?;
	let webpack_dir = root.path().join("node_modules/webpack");
	create_all_dirs(&webpack_dir)?;
	write_file(&webpack_dir.join("package.json"), r#"{ "name": "webpack" }"#)?;

	let output = root.path().join(".eslintrc.node.json");
	let (root_arg, output_arg) = (path_str(root.path()), path_str(&output));
	let ticker = tokio::spawn(async {
		for _ in 0..10 {
			tokio::task::yield_now().await;
		}
	});

	let (result, ticked) = tokio::join!(
		Cli::execute_with([
			"nice-move",
			"--ignore-config",
			"--root",
			&root_arg,
			"eslint",
			"node",
			&output_arg,
		]),
		ticker
	);

	result?;
	ticked?;

	assert_eq!(read_json(&output)?["env"]["node"], true);

	Ok(())
}

#[tokio::test]
async fn eslint_default_output_and_target() -> Result<(), Box<dyn std::error::Error>> {
	let root = tempfile::tempdir()?;
	let config_file = root.path().join("nice-move.yaml");
	write_file(&config_file, "ecma_version: 2021\n")?;

	Cli::execute_with([
		"nice-move",
		"-c",
		&path_str(&config_file),
		"--root",
		&path_str(root.path()),
		"eslint",
		"import",
	])
	.await?;

	let import = read_json(&root.path().join(EslintVariant::Import.default_file_name()))?;
	assert_eq!(import["extends"], json!(["plugin:import/recommended"]));

	Cli::execute_with([
		"nice-move",
		"-c",
		&path_str(&config_file),
		"--root",
		&path_str(root.path()),
		"eslint",
		"node",
	])
	.await?;

	let node = read_json(&root.path().join(".eslintrc.node.json"))?;
	assert_eq!(node["parserOptions"]["ecmaVersion"], 2021);
	assert_eq!(node["env"]["es2021"], true);

	Ok(())
}

#[tokio::test]
async fn init_with_features() -> Result<(), Box<dyn std::error::Error>> {
	let root = tempfile::tempdir()?;
	let manifest = root.path().join("package.json");
	write_file(&manifest, r#"{ "name": "app", "dependencies": { "react": "^16" } }"#)?;

	Cli::execute_with([
		"nice-move",
		"--ignore-config",
		"--root",
		&path_str(root.path()),
		"init",
		"--with",
		"eslint,husky",
		"--no-format",
	])
	.await?;

	let result = read_json(&manifest)?;

	assert_eq!(result["name"], "app");
	assert_eq!(result["engines"]["node"], "^12.18 || ^14");
	assert_eq!(result["publishConfig"]["access"], "public");
	assert_eq!(result["scripts"]["prepublishOnly"], "nice-move lint");
	assert_eq!(result["husky"]["hooks"]["pre-commit"], "nice-move lint");
	assert_eq!(
		result["eslintConfig"]["extends"],
		"@nice-move/eslint-config-react"
	);

	Ok(())
}

#[tokio::test]
async fn init_without_prompt_reapplies_features() -> Result<(), Box<dyn std::error::Error>> {
	let root = tempfile::tempdir()?;
	let manifest = root.path().join("packages/app/package.json");
	create_parent_dirs(&manifest)?;
	write_file(
		&manifest,
		r#"{ "private": true, "devDependencies": { "prettier": "^1.0.0" } }"#,
	)?;

	Cli::execute_with([
		"nice-move",
		"--ignore-config",
		"--root",
		&path_str(root.path()),
		"init",
		"--manifest",
		"packages/app/package.json",
		"--no-prompt",
		"--no-format",
	])
	.await?;

	let result = read_json(&manifest)?;

	assert_eq!(result["devDependencies"]["prettier"], "^2.2.1");
	assert_eq!(result["prettier"], "@nice-move/prettier-config");
	assert_eq!(result.get("publishConfig"), None);

	Ok(())
}

#[tokio::test]
async fn init_with_nothing_to_do() -> Result<(), Box<dyn std::error::Error>> {
	let root = tempfile::tempdir()?;
	let manifest = root.path().join("package.json");
	let original = "{\"name\":\"app\"}";
	write_file(&manifest, original)?;

	Cli::execute_with([
		"nice-move",
		"--ignore-config",
		"--root",
		&path_str(root.path()),
		"init",
		"--no-prompt",
	])
	.await?;

	assert_eq!(read_to_string(&manifest)?, original);

	Ok(())
}

#[tokio::test]
async fn init_dry_run() -> Result<(), Box<dyn std::error::Error>> {
	let root = tempfile::tempdir()?;
	let manifest = root.path().join("package.json");
	let original = "{}";
	write_file(&manifest, original)?;

	Cli::execute_with([
		"nice-move",
		"--ignore-config",
		"--root",
		&path_str(root.path()),
		"init",
		"--with",
		"vue",
		"--dry-run",
		"--no-format",
	])
	.await?;

	assert_eq!(read_to_string(&manifest)?, original);

	Ok(())
}

#[tokio::test]
async fn init_requires_a_manifest() -> Result<(), Box<dyn std::error::Error>> {
	let root = tempfile::tempdir()?;

	let result = Cli::execute_with([
		"nice-move",
		"--ignore-config",
		"--root",
		&path_str(root.path()),
		"init",
		"--with",
		"ava",
	])
	.await;

	assert!(matches!(result, Err(AppError::ReadError { .. })));

	Ok(())
}
