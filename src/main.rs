use db_sync::cli::{self, CliArgs, Direction};
use db_sync::config::{self, ConnectionConfig};
use db_sync::logger::init_logger;
use db_sync::transfer::{ensure_local_db, transfer};
use db_sync::AppError;
use log::*;
use std::process::ExitCode;

fn run(args: &CliArgs) -> Result<(), AppError> {
  init_logger()?;
  let local_path = config::local_db_path()?;
  // A missing DB should be reported as such, even when the key path could
  // not be resolved.
  if args.direction == Direction::Push {
    ensure_local_db(&local_path)?;
  }
  let config = ConnectionConfig::compiled()?;
  info!(
    "Direction {}: local {} <-> remote {}",
    args.direction,
    local_path.display(),
    config.remote_endpoint(),
  );
  transfer(args.direction, &config, &local_path)
}

fn main() -> ExitCode {
  let args = match cli::parse_args(std::env::args_os()) {
    Ok(args) => args,
    Err(_) => {
      println!("{}", cli::usage(env!("CARGO_BIN_NAME")));
      return ExitCode::from(1);
    }
  };
  match run(&args) {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      eprintln!("{}", err);
      ExitCode::from(err.exit_code())
    }
  }
}
