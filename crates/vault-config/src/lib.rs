//! Configuration, filesystem paths, and core error types for the vault CLI.

mod config;
mod error;
mod paths;

pub use config::{Config, DEFAULT_ADDRESS, DEFAULT_LOG_LEVEL};
pub use error::{CoreError, CoreResult};
pub use paths::Paths;
