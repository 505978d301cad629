use clap::{Parser, ValueEnum};
use std::ffi::OsString;
use std::fmt;

use crate::error::AppError;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
  /// Download the remote database over the local copy.
  Pull,
  /// Upload the local database over the remote copy.
  Push,
}

impl fmt::Display for Direction {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Direction::Pull => write!(f, "pull"),
      Direction::Push => write!(f, "push"),
    }
  }
}

#[derive(Parser, Debug)]
#[command(
  author,
  version,
  about,
  disable_help_flag = true,
  disable_version_flag = true
)]
pub struct CliArgs {
  #[arg(value_enum)]
  pub direction: Direction,
}

/// Exactly one token after the program name, and it must be `pull` or
/// `push`.  Flags, `--` and extra tokens are all usage errors, so the raw
/// list is checked before clap gets a say.
pub fn parse_args<I, T>(args: I) -> Result<CliArgs, AppError>
where
  I: IntoIterator<Item = T>,
  T: Into<OsString> + Clone,
{
  let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
  let tokens: Option<Vec<&str>> =
    args.iter().skip(1).map(|arg| arg.to_str()).collect();
  match tokens.as_deref() {
    Some(["pull"]) | Some(["push"]) => {}
    _ => return Err(AppError::UsageError),
  }
  CliArgs::try_parse_from(&args).map_err(|_| AppError::UsageError)
}

pub fn usage(program: &str) -> String {
  format!("Usage: {} [pull|push]", program)
}
