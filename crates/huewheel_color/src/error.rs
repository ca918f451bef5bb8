use thiserror::Error;

/// Reasons a hex color string could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseHexError {
    #[error("expected 6 hex digits, found {0}")]
    InvalidLength(usize),

    #[error("invalid hex digit in '{0}'")]
    InvalidDigit(String),
}

pub type Result<T> = std::result::Result<T, ParseHexError>;
