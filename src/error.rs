use thiserror::Error;

/// Errors raised when decoding a textual change tag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseChangeError {
    #[error("could not convert '{0}' to a change")]
    UnknownChange(String),
}
