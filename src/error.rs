use std::error;
use std::fmt;

pub type SymResult<T> = Result<T, SymError>;

/// Construction-time validation failures. The symbol algebra itself never
/// fails; undefined results are signalled via `Option` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymError {
    /// Range coordinates are one-based and must be strictly positive.
    NonPositiveRange { from: i64, to: i64 },
    /// Range end lies before its start.
    InvertedRange { from: i64, to: i64 },
}

impl fmt::Display for SymError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            SymError::NonPositiveRange { from, to } => write!(
                f,
                "Range of {} to {} invalid: coordinates must be greater than zero",
                from, to
            ),
            SymError::InvertedRange { from, to } => {
                write!(f, "Range of {} to {} invalid: incorrect order", from, to)
            }
        }
    }
}

impl error::Error for SymError {}
