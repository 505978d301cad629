use std::env;
use std::path::{Path, PathBuf};

use crate::error::AppError;

pub const SSH_USER: &str = "root";
pub const SSH_HOST: &str = "178.156.132.116";
pub const SSH_KEY: &str = "~/.ssh/hetzni";
pub const REMOTE_DB_PATH: &str =
  "/var/lib/docker/volumes/samperalabvolume/_data/content.db";
pub const LOCAL_DB_FILE: &str = "content.db";
pub const SCP_PROGRAM: &str = "scp";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectionConfig {
  pub user: String,
  pub host: String,
  pub identity_file: PathBuf,
  pub remote_path: String,
  pub program: String,
}

impl ConnectionConfig {
  /// The built-in connection settings, with the key path expanded against
  /// `$HOME`.
  pub fn compiled() -> Result<Self, AppError> {
    let home = env::var_os("HOME").map(PathBuf::from);
    Ok(ConnectionConfig {
      user: SSH_USER.to_string(),
      host: SSH_HOST.to_string(),
      identity_file: expand_home(SSH_KEY, home.as_deref())?,
      remote_path: REMOTE_DB_PATH.to_string(),
      program: SCP_PROGRAM.to_string(),
    })
  }

  /// `user@host:path`, as scp expects a remote endpoint.
  pub fn remote_endpoint(&self) -> String {
    format!("{}@{}:{}", self.user, self.host, self.remote_path)
  }
}

fn expand_home(path: &str, home: Option<&Path>) -> Result<PathBuf, AppError> {
  match path.strip_prefix("~/") {
    Some(rest) => Ok(home.ok_or(AppError::NoHomeDir)?.join(rest)),
    None => Ok(PathBuf::from(path)),
  }
}

/// The database lives next to the executable, whichever directory that is.
pub fn local_db_path() -> Result<PathBuf, AppError> {
  let exe = env::current_exe().map_err(AppError::ExecutableDirError)?;
  let dir = exe.parent().ok_or_else(|| {
    AppError::ExecutableDirError(std::io::Error::new(
      std::io::ErrorKind::NotFound,
      format!("{} has no parent directory", exe.display()),
    ))
  })?;
  Ok(dir.join(LOCAL_DB_FILE))
}
