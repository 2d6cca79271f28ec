#![allow(clippy::result_large_err)]

use clap::{CommandFactory, error::ErrorKind};
use nice_move::cli::Cli;

#[tokio::main]
async fn main() {
	if let Err(e) = nice_move::cli::main_entrypoint().await {
		let mut cmd = Cli::command();
		cmd.error(ErrorKind::InvalidValue, e).exit();
	}
}
