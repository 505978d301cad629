use log::*;
use std::ffi::OsString;
use std::path::Path;
use std::process::Command;
use tap::Tap;

use crate::cli::Direction;
use crate::config::ConnectionConfig;
use crate::error::AppError;

/// Arguments for scp, minus the program itself.  Source comes before
/// destination, so the direction decides which side the remote sits on.
pub fn scp_args(
  direction: Direction,
  config: &ConnectionConfig,
  local_path: &Path,
) -> Vec<OsString> {
  let remote = OsString::from(config.remote_endpoint());
  let local = local_path.as_os_str().to_os_string();
  let (source, destination) = match direction {
    Direction::Pull => (remote, local),
    Direction::Push => (local, remote),
  };
  vec![
    "-i".into(),
    config.identity_file.as_os_str().to_os_string(),
    source,
    destination,
  ]
}

pub fn transfer(
  direction: Direction,
  config: &ConnectionConfig,
  local_path: &Path,
) -> Result<(), AppError> {
  match direction {
    Direction::Pull => pull(config, local_path),
    Direction::Push => push(config, local_path),
  }
}

/// Download the remote DB, replacing whatever is at `local_path`.
pub fn pull(
  config: &ConnectionConfig,
  local_path: &Path,
) -> Result<(), AppError> {
  println!(
    "Downloading {} from {} -> {}",
    config.remote_path,
    config.host,
    local_path.display(),
  );
  run_scp(config, scp_args(Direction::Pull, config, local_path))?;
  println!("Download complete.");
  Ok(())
}

/// Push has nothing to send without a local DB.
pub fn ensure_local_db(local_path: &Path) -> Result<(), AppError> {
  if local_path.exists() {
    Ok(())
  } else {
    debug!("Refusing to push, {} does not exist", local_path.display());
    Err(AppError::LocalDbMissingError(local_path.to_path_buf()))
  }
}

/// Upload the local DB, replacing the remote copy.
pub fn push(
  config: &ConnectionConfig,
  local_path: &Path,
) -> Result<(), AppError> {
  ensure_local_db(local_path)?;
  println!(
    "Uploading {} -> {} on {}",
    local_path.display(),
    config.remote_path,
    config.host,
  );
  run_scp(config, scp_args(Direction::Push, config, local_path))?;
  println!("Upload complete.");
  Ok(())
}

fn run_scp(
  config: &ConnectionConfig,
  args: Vec<OsString>,
) -> Result<(), AppError> {
  let mut command = Command::new(&config.program)
    .tap_mut(|c| {
      c.args(&args);
    })
    .tap(|c| debug!("Running {:?}", c));
  // stdio is inherited so scp can prompt and report progress itself.
  let status = command.status().map_err(|source| AppError::ScpSpawnError {
    program: config.program.clone(),
    source,
  })?;
  if status.success() {
    info!("{} finished successfully", config.program);
    Ok(())
  } else {
    info!("{} exited with {}", config.program, status);
    Err(AppError::ScpFailedError {
      program: config.program.clone(),
      status,
    })
  }
}
