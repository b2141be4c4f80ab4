use std::fmt;

use crate::scene::ObjectId;

/// Errors reported by editor operations.
///
/// Every guard is checked before any mutation happens, so receiving an error
/// means the document, surface and history are exactly as they were.
///
/// `NoSelection` and `HistoryExhausted` are informational: callers that want
/// silent no-op behavior can simply ignore them.
#[derive(Debug, Clone, PartialEq)]
pub enum EditError {
    /// A width or height was zero or negative.
    InvalidDimension { width: i64, height: i64 },
    /// The operation needs a selected object and none is selected.
    NoSelection,
    /// A bitmap-only operation targeted a shape.
    NotABitmap(ObjectId),
    /// No object with this id exists in the document.
    UnknownObject(ObjectId),
    /// Undo at the oldest entry or redo at the newest.
    HistoryExhausted,
    /// Encoded image bytes could not be decoded.
    DecodeFailed(String),
    /// The composite could not be encoded in the requested format.
    EncodeFailed(String),
    /// Export format string not in {png, jpeg, webp, svg}.
    UnsupportedFormat(String),
    /// The raster surface could not be allocated.
    Surface(String),
}

impl EditError {
    pub(crate) fn invalid_dimension(width: impl Into<i64>, height: impl Into<i64>) -> Self {
        Self::InvalidDimension { width: width.into(), height: height.into() }
    }
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { width, height } => {
                write!(f, "invalid dimension {width}x{height}: both sides must be positive")
            }
            Self::NoSelection => f.write_str("no object is selected"),
            Self::NotABitmap(id) => write!(f, "object {id} is not a bitmap"),
            Self::UnknownObject(id) => write!(f, "object {id} does not exist"),
            Self::HistoryExhausted => f.write_str("no further history in that direction"),
            Self::DecodeFailed(msg) => write!(f, "image decode failed: {msg}"),
            Self::EncodeFailed(msg) => write!(f, "export encode failed: {msg}"),
            Self::UnsupportedFormat(fmt) => write!(f, "unsupported export format `{fmt}`"),
            Self::Surface(msg) => write!(f, "surface allocation failed: {msg}"),
        }
    }
}

impl std::error::Error for EditError {}

/// Result alias for editor operations.
pub type EditResult<T> = Result<T, EditError>;
