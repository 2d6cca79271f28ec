#![allow(clippy::result_large_err)]
//! `nice-move` generates ESLint presets tuned to the local environment (browser or node code, bundler and
//! preset-env globals, workspaces) and merges optional tooling (husky, ava, eslint, prettier...) into an
//! existing `package.json`.

use std::{
	fmt::Display,
	path::{Path, PathBuf},
};

use anyhow::{Context, anyhow};
use clap::{Args, Parser, ValueEnum};
use indexmap::IndexMap;
use merge::Merge;
use package_json::{Fragment, JsDepKind, Manifest};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::{debug, info, warn};

/// Builds a [`Fragment`] from a json object literal.
macro_rules! fragment {
	($($json:tt)+) => {
		$crate::Fragment::from_value(::serde_json::json!($($json)+)).unwrap_or_default()
	};
}
pub(crate) use fragment;

pub mod cli;
pub mod config;
pub mod errors;
pub mod eslint;
pub mod format;
pub mod fs;
pub mod init;
pub mod logging;
pub(crate) mod merging_strategies;
pub mod probe;

pub use config::*;
pub use errors::*;
pub(crate) use fs::*;
pub(crate) use merging_strategies::*;
