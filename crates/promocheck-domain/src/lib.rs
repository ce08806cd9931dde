//! Pure eligibility evaluation (no IO).
//!
//! Input: two code sources supplied by the caller (see [`source::CodeSource`]).
//! Output: whether a code is valid and present in both sources.

#![forbid(unsafe_code)]

pub mod error;
pub mod index;
pub mod policy;
pub mod source;

mod engine;

#[cfg(test)]
mod properties;
#[cfg(test)]
mod test_support;

pub use engine::{EligibilityEngine, IndexState};
pub use error::{EligibilityError, SourceError};
pub use index::CodeIndex;
pub use source::CodeSource;
