//! Error types for cakedays.
//!
//! Every fallible operation in the workspace returns the single
//! `thiserror`-derived [`Error`] enum.  The `ensure!` macro defined here
//! covers precondition checks.

use thiserror::Error;

/// The top-level error type used throughout cakedays.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Precondition violated (raised by `ensure!`).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// The roster file does not exist.
    #[error("File '{0}' not found, please check if the file exists in the location.")]
    FileNotFound(String),

    /// The roster file has an extension we do not read.
    #[error("File provided was of type '{found}', the allowed file types are {allowed}.")]
    UnsupportedFileType {
        /// The extension that was found (may be empty).
        found: String,
        /// Comma-separated list of accepted extensions.
        allowed: String,
    },

    /// A roster line does not end in `,yyyy-mm-dd`.
    #[error("Data within the row must have the format 'Name,yyyy-mm-dd' - {line}")]
    InvalidRecordFormat {
        /// The offending line, as read.
        line: String,
    },

    /// A roster line has the right shape but names an impossible date.
    #[error("Invalid date format within the row {line}")]
    InvalidDate {
        /// The offending line, as read.
        line: String,
    },

    /// Date-related error.
    #[error("date error: {0}")]
    Date(String),

    /// Reading or writing a file failed.
    #[error("io error: {0}")]
    Io(String),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}

/// Shorthand `Result` type used throughout cakedays.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use cake_core::{ensure, errors::Error};
/// fn positive(x: i32) -> cake_core::errors::Result<i32> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(positive(-1).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}
