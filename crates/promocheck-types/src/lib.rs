//! Stable value types used across the promocheck workspace.
//!
//! This crate is intentionally boring:
//! - the `Code` value type and the syntactic validator that guards it
//! - stable string IDs for outcomes and errors
//! - the JSON receipt emitted by the CLI

#![forbid(unsafe_code)]

pub mod code;
pub mod ids;
pub mod receipt;

pub use code::{
    Code, MAX_CODE_LEN, MIN_CODE_LEN, ValidationError, ValidationErrorKind, validate_code,
    validate_code_bytes,
};
pub use receipt::{
    EligibilityReceipt, ErrorInfo, SCHEMA_ELIGIBILITY_V1, ToolMeta, receipt_json_schema,
};
