//! Symbol-level foundation of a DNA sequence comparison toolkit:
//! classification, complement and consensus of IUPAC nucleotide symbols,
//! plus the coordinate-range and fixed-point precision value types that the
//! comparison layers build on.
//!
//! Everything in this crate is a pure function of its inputs evaluated
//! against compile-time tables. There is no shared mutable state, so all
//! operations are safe for any number of concurrent callers.

pub mod error;
pub mod precision;
pub mod range;
pub mod symbol;

pub use self::error::{SymError, SymResult};
pub use self::precision::Precision;
pub use self::range::SeqRange;
