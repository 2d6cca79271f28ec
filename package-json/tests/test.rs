use maplit::btreemap;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use package_json::*;

fn manifest(value: Value) -> Manifest {
	Manifest::from_value(value).expect("Test manifests must be objects")
}

#[test]
fn manifest_round_trip_preserves_order() -> Result<(), Box<dyn std::error::Error>> {
	let source = r#"{"name":"my-package","version":"0.1.0","zeta":true,"alpha":{"b":1,"a":2}}"#;

	let parsed: Manifest = serde_json::from_str(source)?;

	assert_eq!(serde_json::to_string(&parsed)?, source);

	Ok(())
}

#[test]
fn dependency_lookup() {
	let pkg = manifest(json!({
		"dependencies": { "react": "^16" },
		"devDependencies": { "eslint": "^7", "@commitlint/cli": "^11" }
	}));

	assert!(pkg.has_dependency(&JsDepKind::Dependency, "react"));
	assert!(!pkg.has_dependency(&JsDepKind::DevDependency, "react"));
	assert!(pkg.has_dependency(&JsDepKind::DevDependency, "@commitlint/cli"));
	assert!(!pkg.has_dependency(&JsDepKind::PeerDependency, "react"));
}

#[test]
fn private_flag() {
	assert!(manifest(json!({ "private": true })).is_private());
	assert!(!manifest(json!({ "private": false })).is_private());
	assert!(!manifest(json!({})).is_private());
}

#[test]
fn engines_lookup() {
	let pkg = manifest(json!({ "engines": { "vscode": "^1.50.0" } }));

	assert_eq!(pkg.engine("vscode"), Some(&json!("^1.50.0")));
	assert_eq!(pkg.engine("node"), None);
}

#[test]
fn workspaces_in_both_forms() {
	let list = manifest(json!({ "workspaces": ["packages/*", "apps/*"] }));
	let object = manifest(json!({ "workspaces": { "packages": ["packages/*"], "nohoist": ["**/react"] } }));
	let invalid = manifest(json!({ "workspaces": 42 }));

	assert_eq!(
		list.workspaces().as_ref().map(Workspaces::packages),
		Some(&["packages/*".to_string(), "apps/*".to_string()][..])
	);
	assert_eq!(
		object.workspaces().as_ref().map(Workspaces::packages),
		Some(&["packages/*".to_string()][..])
	);
	assert_eq!(invalid.workspaces(), None);
}

#[test]
fn publish_config_serialization() -> Result<(), Box<dyn std::error::Error>> {
	let config = PublishConfig {
		access: Some(PublishConfigAccess::Public),
		registry: Some("https://registry.npmjs.org/".to_string()),
		tag: None,
		other: btreemap! {},
	};

	assert_eq!(
		serde_json::to_value(&config)?,
		json!({ "access": "public", "registry": "https://registry.npmjs.org/" })
	);

	Ok(())
}

#[test]
fn manifest_merge_follows_deep_merge_rules() {
	let mut pkg = manifest(json!({
		"name": "pkg",
		"keywords": ["lint"],
		"scripts": { "build": "tsc" }
	}));

	pkg.merge(manifest(json!({
		"keywords": ["lint", "eslint"],
		"scripts": { "lint": "nice-move lint" },
		"name": "renamed"
	})));

	assert_eq!(
		pkg.into_value(),
		json!({
			"name": "renamed",
			"keywords": ["lint", "eslint"],
			"scripts": { "build": "tsc", "lint": "nice-move lint" }
		})
	);
}

#[test]
fn non_objects_are_not_manifests() {
	assert_eq!(Manifest::from_value(json!([1, 2])), None);
	assert!(Manifest::try_from(json!("pkg")).is_err());
}
