//! Promotion code eligibility checks.
//!
//! A code is eligible when it is a valid code (1-5 lowercase ASCII letters) and appears in
//! both the campaign source and the membership source. The campaign source is loaded once,
//! lazily, into an in-memory index; the membership source is point-queried per request.
//!
//! ```no_run
//! use promocheck::{EligibilityEngine, FileCodeSource};
//!
//! let engine = EligibilityEngine::new(
//!     FileCodeSource::new("data/campaign_codes.txt"),
//!     FileCodeSource::new("data/membership_codes.txt"),
//! );
//! match engine.is_eligible("promo") {
//!     Ok(eligible) => println!("{eligible}"),
//!     Err(err) => eprintln!("error: {err}"),
//! }
//! ```
//!
//! The `file` feature (on by default) re-exports the filesystem and in-memory sources.

#![forbid(unsafe_code)]

pub use promocheck_domain::{
    CodeIndex, CodeSource, EligibilityEngine, EligibilityError, IndexState, SourceError,
    policy::InvalidLinePolicy,
};
pub use promocheck_types::{
    Code, MAX_CODE_LEN, MIN_CODE_LEN, ValidationError, ValidationErrorKind, validate_code,
};

#[cfg(feature = "file")]
pub use promocheck_repo::{FileCodeSource, MemoryCodeSource};
