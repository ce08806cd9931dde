//! Test-corpus generation.
//!
//! Produces a campaign set and a membership set of random codes with a controlled overlap,
//! then writes them as one-code-per-line files the file source can read.

#![forbid(unsafe_code)]

mod generate;
mod write;

pub use generate::{Corpus, CorpusError, CorpusSpec, TOTAL_CODE_SPACE, generate};
pub use write::{CAMPAIGN_FILE, CorpusPaths, MEMBERSHIP_FILE, write_corpus};
