use crate::error::AppError;

pub fn init_logger() -> Result<(), AppError> {
  stderrlog::new()
    .module(env!("CARGO_CRATE_NAME"))
    .verbosity(1usize) // Warnings and errors only.
    // .timestamp(stderrlog::Timestamp::Off)
    .init()?;
  Ok(())
}
