use thiserror::Error;

use super::ParseIdError;

/// Describes why an object could not be encoded.
///
/// Encoders never perform I/O, so structurally invalid input is the only way
/// they can fail.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MalformedObject {
    /// An object ID was not 40 lowercase hex digits (or was all zeros).
    #[error("invalid object ID: {0}")]
    InvalidId(#[from] ParseIdError),

    /// A tree entry's mode string is not one of the recognized file modes.
    #[error("invalid file mode `{0}`")]
    InvalidMode(String),

    /// A tree entry name is empty, `.` or `..`, or contains `/` or NUL.
    #[error("invalid tree entry name {0:?}")]
    InvalidEntryName(String),

    /// Two entries in the same tree share a name.
    #[error("duplicate tree entry name {0:?}")]
    DuplicateEntryName(String),

    /// A time zone offset lies outside of -12:00 to +14:00.
    #[error("illegal time zone offset: {0}")]
    InvalidTimezone(i16),

    /// Tree content is truncated, has a bad entry, or is not in canonical order.
    #[error("invalid tree content")]
    InvalidTree,

    /// An object header named a kind other than blob, tree, or commit.
    #[error("unknown object kind `{0}`")]
    UnknownKind(String),
}
