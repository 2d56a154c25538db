use thiserror::Error;

/// An invalid opener/closer pair handed to the delimiter matcher.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("format {0:?} must include start and end tokens separated by '...'")]
    MissingSeparator(String),

    #[error("start and end format tokens cannot be identical (both {0:?})")]
    IdenticalTokens(String),

    #[error("start and end format tokens cannot be empty")]
    EmptyToken,
}
