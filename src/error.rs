//! Tag validation errors.

use thiserror::Error;

/// Raised when a Twitter card type cannot be accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidCardType {
    /// The configured value is not a string (carries the value's type name).
    #[error("The Twitter card type must be a string value, [{0}] was given.")]
    NotAString(&'static str),

    /// The normalized value is not one of the supported card types.
    #[error("The Twitter card type [{0}] is not supported.")]
    Unsupported(String),
}
