use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
  #[error("Expected exactly one argument, pull or push")]
  UsageError,
  #[error("Home directory not found")]
  NoHomeDir,
  #[error("Could not locate the running executable's directory: {0}")]
  ExecutableDirError(std::io::Error),
  #[error("Local DB not found: {}", .0.display())]
  LocalDbMissingError(PathBuf),
  #[error("Failed to start {program}: {source}")]
  ScpSpawnError {
    program: String,
    source: std::io::Error,
  },
  #[error("{program} failed with {status}")]
  ScpFailedError { program: String, status: ExitStatus },
  #[error("Failed to initialize logging: {0}")]
  LoggerInitError(#[from] log::SetLoggerError),
}

impl AppError {
  /// The process exit status to report for this error.  A failed scp hands
  /// its own code through, as long as it is one we can exit with.
  pub fn exit_code(&self) -> u8 {
    match self {
      AppError::ScpFailedError { status, .. } => status
        .code()
        .and_then(|code| u8::try_from(code).ok())
        .filter(|code| *code != 0)
        .unwrap_or(1),
      _ => 1,
    }
  }
}
