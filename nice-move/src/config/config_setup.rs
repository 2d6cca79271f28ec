use super::*;

pub(crate) fn extract_config_from_file(config_file_abs_path: &Path) -> AppResult<Config> {
	let extension = get_extension(config_file_abs_path)?;

	let mut config: Config = if extension == "yaml" || extension == "yml" {
		deserialize_yaml(config_file_abs_path)?
	} else if extension == "toml" {
		deserialize_toml(config_file_abs_path)?
	} else if extension == "json" {
		deserialize_json(config_file_abs_path)?
	} else {
		return Err(AppError::DeserializationError {
			file: config_file_abs_path.to_path_buf(),
			error: format!(
				"Invalid config format for `{}`. Allowed formats are: yaml, toml, json",
				config_file_abs_path.display()
			),
		});
	};

	config.config_file = Some(config_file_abs_path.to_path_buf());

	Ok(config)
}

impl Config {
	/// Extracts a config from a file.
	pub fn from_file<T: Into<PathBuf>>(config_file: T) -> AppResult<Self> {
		let config_file_path = config_file.into();

		let config_file_abs = get_abs_path(&config_file_path)?;

		debug!(file = %config_file_abs.display(), "Loading config file");

		extract_config_from_file(&config_file_abs)
	}
}
