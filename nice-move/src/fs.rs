use std::{
	env::current_dir,
	ffi::OsStr,
	fs::{File, create_dir_all, read_to_string},
	io::Write,
};

use serde::de::DeserializeOwned;

use crate::*;

/// Looks for `target_file` in `start_dir` and then in each of its ancestors.
pub fn find_file_up(start_dir: &Path, target_file: impl AsRef<Path>) -> Option<PathBuf> {
	let target_file = target_file.as_ref();
	let mut current_dir = start_dir;

	loop {
		let target_path = current_dir.join(target_file);

		if target_path.is_file() {
			return Some(target_path);
		}

		match current_dir.parent() {
			Some(parent) => current_dir = parent,
			None => return None,
		}
	}
}

pub fn get_extension(file: &Path) -> AppResult<&OsStr> {
	file.extension()
		.with_context(|| format!("File `{}` has no extension", file.display()))
		.map_err(AppError::from)
}

pub fn serialize_json<T: Serialize>(item: &T, path: &Path) -> AppResult<()> {
	let content = to_pretty_json(item, &path.display().to_string())?;

	write_file(path, &content)
}

/// Serializes an item as pretty-printed json (two spaces), with a trailing newline.
pub fn to_pretty_json<T: Serialize>(item: &T, target: &str) -> AppResult<String> {
	let mut content =
		serde_json::to_string_pretty(item).map_err(|e| AppError::SerializationError {
			target: format!("`{target}`"),
			error: e.to_string(),
		})?;

	content.push('\n');

	Ok(content)
}

pub fn deserialize_toml<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
	let contents = read_to_string(path).map_err(|e| AppError::ReadError {
		path: path.to_path_buf(),
		source: e,
	})?;

	toml::from_str(&contents).map_err(|e| AppError::DeserializationError {
		file: path.to_path_buf(),
		error: e.to_string(),
	})
}

pub fn deserialize_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
	let file = read_file(path)?;

	serde_json::from_reader(file).map_err(|e| AppError::DeserializationError {
		file: path.to_path_buf(),
		error: e.to_string(),
	})
}

pub fn deserialize_yaml<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
	let file = read_file(path)?;

	serde_yaml_ng::from_reader(file).map_err(|e| AppError::DeserializationError {
		file: path.to_path_buf(),
		error: e.to_string(),
	})
}

pub fn read_file(path: &Path) -> AppResult<File> {
	File::open(path).map_err(|e| AppError::ReadError {
		path: path.to_path_buf(),
		source: e,
	})
}

/// Reads a `package.json` file. The top level value must be an object.
pub fn read_manifest(path: &Path) -> AppResult<Manifest> {
	let value: Value = deserialize_json(path)?;

	Manifest::from_value(value).ok_or_else(|| AppError::InvalidManifest {
		path: path.to_path_buf(),
	})
}

/// Creates or truncates the file at `path` and writes `content` into it.
pub fn write_file(path: &Path, content: &str) -> AppResult<()> {
	let mut file = File::create(path).map_err(|e| AppError::WriteError {
		path: path.to_path_buf(),
		source: e,
	})?;

	file.write_all(content.as_bytes())
		.map_err(|e| AppError::WriteError {
			path: path.to_path_buf(),
			source: e,
		})
}

pub(crate) fn create_parent_dirs(path: &Path) -> AppResult<()> {
	match path.parent() {
		Some(parent) if !parent.as_os_str().is_empty() => create_all_dirs(parent),
		_ => Ok(()),
	}
}

pub(crate) fn create_all_dirs(path: &Path) -> AppResult<()> {
	create_dir_all(path).map_err(|e| AppError::DirCreation {
		path: path.to_path_buf(),
		source: e,
	})
}

pub(crate) fn get_abs_path(path: &Path) -> AppResult<PathBuf> {
	path.canonicalize()
		.map_err(|e| AppError::PathCanonicalization {
			path: path.into(),
			source: e,
		})
}

/// Returns the directory containing `path`, treating a bare file name as relative to `.`.
pub(crate) fn get_parent_dir(path: &Path) -> &Path {
	match path.parent() {
		Some(parent) if !parent.as_os_str().is_empty() => parent,
		_ => Path::new("."),
	}
}

pub(crate) fn get_cwd() -> AppResult<PathBuf> {
	current_dir()
		.context("Could not get the cwd")
		.map_err(AppError::from)
}
