// error.rs

use thiserror::Error;

/// Recoverable errors reported to the user between prompts.
///
/// None of these terminate the shell; the main loop reports them and
/// returns to the prompt.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShellError {
    #[error("Invalid argument")]
    InvalidArgument,
    #[error("{0}: argument contains an interior NUL byte")]
    BadToken(String),
}
