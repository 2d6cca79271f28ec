use std::{env, fs::exists};

use super::*;

pub(crate) fn get_config_from_cli(
	overrides: ConfigOverrides,
	command: &Commands,
) -> AppResult<Config> {
	let ConfigOverrides {
		config: config_path,
		ignore_config,
	} = overrides;

	let mut config = Config::default();

	let config_path = if let Some(path) = config_path {
		Some(path)
	} else if !ignore_config {
		get_config_path_from_defaults()
	} else {
		None
	};

	if let Some(config_path) = config_path {
		config.merge(Config::from_file(&config_path)?);
	}

	match command {
		Commands::Init(cmd) => config.merge(cmd.config_overrides()),
		Commands::Eslint(cmd) => config.merge(cmd.config_overrides()),
		Commands::Features { manifest } => {
			if let Some(manifest) = manifest {
				config.manifest = Some(manifest.clone());
			}
		}
	};

	Ok(config)
}

const DEFAULT_CONFIG_NAMES: [&str; 3] = ["nice-move.yaml", "nice-move.toml", "nice-move.json"];

fn get_config_path_from_defaults() -> Option<PathBuf> {
	for name in DEFAULT_CONFIG_NAMES {
		if exists(name).is_ok_and(|exists| exists) {
			return Some(PathBuf::from(name));
		}
	}

	// Try xdg path if nothing else was found
	get_config_from_xdg()
}

fn get_config_from_xdg() -> Option<PathBuf> {
	let xdg_config = if let Ok(env_val) = env::var("XDG_CONFIG_HOME") {
		Some(PathBuf::from(env_val))
	} else {
		env::home_dir().map(|home| home.join(".config"))
	};

	let config_dir = xdg_config?.join("nice-move");

	if config_dir.is_dir() {
		for name in DEFAULT_CONFIG_NAMES {
			let config_path = config_dir.join(name);
			if exists(&config_path).is_ok_and(|exists| exists) {
				debug!(path = %config_path.display(), "Found a global config file");
				return Some(config_path);
			}
		}
	}

	None
}
