pub mod errors;

pub use errors::{AppError, ChargeError, ChargeResult, ConfigError};
