use thiserror::Error;

/// Errors returned when parsing ids or generator settings.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error("invalid id length {actual}; expected {expected}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("invalid character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },
    #[error("id has non-zero padding bits")]
    NonZeroPadding,
    #[error("invalid machine id '{0}'; expected 6 hex digits")]
    InvalidMachineId(String),
}
