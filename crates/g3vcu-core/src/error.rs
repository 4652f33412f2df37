use thiserror::Error;

/// Which side of a key transfer was too short.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySide {
    Source,
    Target,
}

impl std::fmt::Display for KeySide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeySide::Source => f.write_str("source"),
            KeySide::Target => f.write_str("target"),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Dump has wrong size: expected {expected} bytes, got {actual}")]
    WrongSize { expected: usize, actual: usize },

    #[error("Invalid header signature at offset {offset:#x}")]
    HeaderMismatch { offset: usize },

    #[error("Invalid serial number format: {0}")]
    InvalidFormat(String),

    #[error("Invalid {field} value {input:?} (must be {min}-{max})")]
    InvalidRange {
        field: &'static str,
        input: String,
        min: u32,
        max: u32,
    },

    #[error("No serial numbers replaced")]
    NoReplacements,

    #[error("{which} buffer too small for key at {offset:#x} ({len} bytes)")]
    TooSmall {
        which: KeySide,
        offset: usize,
        len: usize,
    },

    #[error("Offset out of bounds: {offset:#x}+{width} exceeds buffer of {len} bytes")]
    OutOfBounds {
        offset: usize,
        width: usize,
        len: usize,
    },

    #[error("No dump file selected")]
    NoFileSelected,

    #[error("Unknown firmware version: {0}")]
    UnknownFirmware(String),

    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error is a "file not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }

    /// Check if this error means the dump itself is unusable (size or signature)
    pub fn is_corrupt_dump(&self) -> bool {
        matches!(self, Error::WrongSize { .. } | Error::HeaderMismatch { .. })
    }
}
