use std::fmt;

/// Raw return codes for the platform read call.
///
/// Non-negative values are a byte count; negative values classify the
/// failure. The numeric values follow the host capture API convention so a
/// backend can pass codes straight through.
pub const ERROR: i32 = -1;
pub const ERROR_BAD_VALUE: i32 = -2;
pub const ERROR_INVALID_OPERATION: i32 = -3;
pub const ERROR_DEAD_OBJECT: i32 = -6;

/// Classification of a negative read return code.
///
/// Used for warn-level diagnostics only; the raw code is what reaches the
/// caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadFailure {
    /// The device was not recording, or the call sequence was wrong.
    InvalidOperation,
    /// The parameters (buffer, requested size) were rejected.
    BadValue,
    /// The device was invalidated behind our back (route change, service
    /// restart) and must be reconstructed.
    DeadObject,
    /// Unspecified failure.
    Generic,
    /// A code outside the documented set.
    Unknown(i32),
}

impl ReadFailure {
    pub fn from_code(code: i32) -> Self {
        match code {
            ERROR_INVALID_OPERATION => Self::InvalidOperation,
            ERROR_BAD_VALUE => Self::BadValue,
            ERROR_DEAD_OBJECT => Self::DeadObject,
            ERROR => Self::Generic,
            other => Self::Unknown(other),
        }
    }
}

impl fmt::Display for ReadFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidOperation => write!(f, "invalid operation"),
            Self::BadValue => write!(f, "bad value"),
            Self::DeadObject => write!(f, "dead object"),
            Self::Generic => write!(f, "error"),
            Self::Unknown(code) => write!(f, "error({code})"),
        }
    }
}
