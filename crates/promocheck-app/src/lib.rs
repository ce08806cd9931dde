//! Use case orchestration for promocheck.
//!
//! This crate provides the application layer: use cases that coordinate the domain, repo, and
//! corpus layers. It is intentionally thin and delegates heavy lifting to the appropriate layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod check;
mod generate;
mod receipt;

pub use check::{CheckInput, CheckOutput, outcome_exit_code, run_check};
pub use generate::{GenerateInput, GenerateOutput, run_generate};
pub use receipt::{build_receipt, runtime_error_receipt, serialize_receipt};
