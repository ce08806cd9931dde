//! Code source adapters: line-oriented files and in-memory sets.
//!
//! This crate is allowed to do filesystem IO. Each operation opens its own handle, so one
//! source may be shared across threads.

#![forbid(unsafe_code)]

mod file;
mod lines;
mod memory;

pub use file::FileCodeSource;
pub use memory::MemoryCodeSource;
pub use promocheck_domain::policy::InvalidLinePolicy;

/// Fuzz-friendly API for exercising line parsing without filesystem access.
/// These functions are designed to never panic on any input.
pub mod fuzz {
    use promocheck_domain::policy::InvalidLinePolicy;
    use promocheck_domain::{CodeIndex, SourceError};

    /// Materialize arbitrary bytes as if they were the contents of a code file.
    pub fn load_bytes(data: &[u8], policy: InvalidLinePolicy) -> Result<CodeIndex, SourceError> {
        crate::lines::load_index(data, "fuzz", policy)
    }

    /// Point-lookup `code` in arbitrary bytes. Invalid codes are reported as absent.
    pub fn exists_in_bytes(
        data: &[u8],
        code: &str,
        policy: InvalidLinePolicy,
    ) -> Result<bool, SourceError> {
        match promocheck_types::Code::parse(code) {
            Ok(code) => crate::lines::scan_for(data, "fuzz", &code, policy),
            Err(_) => Ok(false),
        }
    }
}
