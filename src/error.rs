// src/error.rs
use thiserror::Error;

/// Errors reported by the checked (`try_`) reversal entry points.
///
/// The unchecked operations never return these; violating their
/// preconditions is a caller bug.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReverseError {
    #[error("Destination too small: need {required} bytes, buffer holds {capacity}")]
    DestinationTooSmall { required: usize, capacity: usize },

    #[error("Source too short: need {required} bytes, buffer holds {available}")]
    SourceTooShort { required: usize, available: usize },

    #[error("Length {length} exceeds buffer of size {capacity}")]
    LengthOutOfBounds { length: usize, capacity: usize },
}

pub type Result<T> = std::result::Result<T, ReverseError>;
