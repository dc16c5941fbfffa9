//! Error types for parsing host-supplied attachment text
//!
//! Geometry itself never fails; only the text forms coming over the
//! JS boundary ("top center", "auto") can be malformed.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttachmentParseError {
    /// Word is neither a vertical nor a horizontal attachment name
    #[error("Unknown attachment word '{0}'")]
    UnknownWord(String),

    /// Text did not contain exactly one vertical and one horizontal word
    #[error("Malformed attachment '{0}': expected \"<vertical> <horizontal>\"")]
    Malformed(String),

    /// Fallback behavior name not recognized
    #[error("Unknown attachment behavior '{0}': expected none, flip or auto")]
    UnknownBehavior(String),
}
