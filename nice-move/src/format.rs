use std::{env, process::Stdio};

use tokio::{io::AsyncWriteExt, process::Command};

use crate::*;

pub const DEFAULT_FORMATTER: &str = "prettier --stdin-filepath {file}";

pub(crate) fn default_shell() -> &'static str {
	if cfg!(target_os = "windows") {
		"cmd.exe"
	} else {
		"sh"
	}
}

/// An external code formatter, invoked as a shell command that reads the source from stdin and
/// prints the formatted result to stdout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatter {
	command: String,
}

impl Default for Formatter {
	fn default() -> Self {
		Self::new(DEFAULT_FORMATTER)
	}
}

impl Formatter {
	/// Creates a formatter from a shell command. Every `{file}` in the command stands for the path of
	/// the file being formatted. On unix the path is passed to the shell as a positional argument, so
	/// it is never expanded.
	pub fn new(command: &str) -> Self {
		Self {
			command: command.trim().to_string(),
		}
	}

	pub fn command(&self) -> &str {
		&self.command
	}

	#[cfg(unix)]
	fn render_command(&self, _file: &Path) -> String {
		self.command.replace("{file}", "\"$1\"")
	}

	#[cfg(not(unix))]
	fn render_command(&self, file: &Path) -> String {
		self.command
			.replace("{file}", &format!("\"{}\"", file.display()))
	}

	/// Formats a json document.
	///
	/// Returns `None` when the formatter cannot be launched, exits with an error, or prints something
	/// that is not the same json document, in which case the caller keeps the unformatted source.
	pub async fn format_json(&self, source: &str, file: &Path) -> Option<String> {
		let expected: Value = serde_json::from_str(source).ok()?;

		let formatted = self.run(source, file).await?;

		match serde_json::from_str::<Value>(&formatted) {
			Ok(actual) if actual == expected => Some(formatted),
			_ => {
				warn!(
					formatter = %self.command,
					"The formatter changed the contents of the document, ignoring its output"
				);
				None
			}
		}
	}

	async fn run(&self, source: &str, file: &Path) -> Option<String> {
		// The formatter runs from the parent dir of the file
		let file = std::path::absolute(file).ok()?;
		let cwd = get_parent_dir(&file);
		let command_line = self.render_command(&file);
		let shell = default_shell();
		let shell_arg = if shell == "cmd.exe" { "/C" } else { "-c" };

		let mut command = Command::new(shell);
		command.args([shell_arg, command_line.as_str()]);

		// `$0` and `$1` of the command line
		if cfg!(unix) {
			command.arg("nice-move").arg(&file);
		}

		command
			.current_dir(cwd)
			.stdin(Stdio::piped())
			.stdout(Stdio::piped())
			.stderr(Stdio::piped())
			.kill_on_drop(true);

		if let Some(path) = path_with_local_bins(cwd) {
			command.env("PATH", path);
		}

		let mut child = match command.spawn() {
			Ok(child) => child,
			Err(e) => {
				debug!(command = %command_line, "Could not launch the formatter: {e}");
				return None;
			}
		};

		let stdin = child.stdin.take();

		// Stdin is fed while stdout is drained, so that large documents cannot fill both pipes
		let feed_stdin = async move {
			match stdin {
				// Dropping stdin closes the pipe
				Some(mut stdin) => stdin.write_all(source.as_bytes()).await,
				None => Ok(()),
			}
		};

		let (written, output) = tokio::join!(feed_stdin, child.wait_with_output());

		// Formatters reading the file itself may exit without consuming stdin
		if let Err(e) = written {
			debug!(command = %command_line, "Could not write to the formatter: {e}");
		}

		let output = match output {
			Ok(output) => output,
			Err(e) => {
				debug!(command = %command_line, "The formatter did not complete: {e}");
				return None;
			}
		};

		if !output.status.success() {
			debug!(
				command = %command_line,
				code = ?output.status.code(),
				stderr = %String::from_utf8_lossy(&output.stderr),
				"The formatter is unavailable"
			);
			return None;
		}

		String::from_utf8(output.stdout).ok()
	}
}

/// Where and how an updated manifest is written.
#[derive(Debug, Clone)]
pub struct ManifestOutput {
	path: PathBuf,
	formatter: Option<Formatter>,
	dry_run: bool,
}

impl ManifestOutput {
	pub fn new(path: impl Into<PathBuf>, formatter: Option<Formatter>, dry_run: bool) -> Self {
		Self {
			path: path.into(),
			formatter,
			dry_run,
		}
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	pub const fn is_dry_run(&self) -> bool {
		self.dry_run
	}

	/// Serializes the manifest, formats it if possible, then writes it to its path (or to stdout
	/// for dry runs).
	///
	/// The output of a formatter is kept as is (it only has to describe the same json document),
	/// apart from a trailing newline that is added when missing.
	pub async fn write(&self, manifest: &Manifest) -> AppResult<()> {
		let pretty = to_pretty_json(manifest, &self.path.display().to_string())?;

		let content = match &self.formatter {
			Some(formatter) => match formatter.format_json(&pretty, &self.path).await {
				Some(mut formatted) => {
					if !formatted.ends_with('\n') {
						formatted.push('\n');
					}
					formatted
				}
				None => pretty,
			},
			None => pretty,
		};

		if self.dry_run {
			print!("{content}");
			return Ok(());
		}

		write_file(&self.path, &content)?;

		info!(path = %self.path.display(), "Updated the manifest");

		Ok(())
	}
}

/// Prepends `node_modules/.bin` (from the given directory) to `PATH`, so that locally installed
/// formatters are preferred.
fn path_with_local_bins(dir: &Path) -> Option<std::ffi::OsString> {
	let local_bins = dir.join("node_modules").join(".bin");

	let mut paths = vec![local_bins];

	if let Some(current) = env::var_os("PATH") {
		paths.extend(env::split_paths(&current));
	}

	env::join_paths(paths).ok()
}
