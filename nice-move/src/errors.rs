use std::{io, path::PathBuf};

use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

/// The kinds of errors that can occur during operations.
#[derive(Debug, Error)]
pub enum AppError {
	// I/O errors
	#[error("Could not create the dir `{path}`: {source}")]
	DirCreation { path: PathBuf, source: io::Error },

	#[error("Failed to create or write to the file `{path}`: {source}")]
	WriteError { path: PathBuf, source: io::Error },

	#[error("Could not read the contents of `{path}`: {source}")]
	ReadError { path: PathBuf, source: io::Error },

	#[error("Failed to canonicalize the path `{path}`: {source}")]
	PathCanonicalization { path: PathBuf, source: io::Error },

	// Invalid values
	#[error("The manifest `{path}` does not contain a json object")]
	InvalidManifest { path: PathBuf },

	#[error("Failed to get user input: {0}")]
	Prompt(#[from] dialoguer::Error),

	// Serde errors
	#[error("Error while serializing {target}: {error}")]
	SerializationError { target: String, error: String },

	#[error("Error while deserializing the contents of `{file}`: {error}")]
	DeserializationError { file: PathBuf, error: String },

	#[error(transparent)]
	Other(#[from] anyhow::Error),
}
