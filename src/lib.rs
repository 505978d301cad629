pub mod cli;
pub mod config;
pub mod error;
pub mod logger;
pub mod transfer;

pub use error::AppError;
