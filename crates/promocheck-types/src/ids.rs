//! Stable identifiers for error kinds surfaced in receipts.
//!
//! IDs are a dotted namespace: `<family>.<snake_case_kind>`.

// Validation
pub const ERR_VALIDATION_EMPTY_CODE: &str = "validation.empty_code";
pub const ERR_VALIDATION_TOO_LONG: &str = "validation.too_long";
pub const ERR_VALIDATION_INVALID_CHARACTER: &str = "validation.invalid_character";

// Sources
pub const ERR_SOURCE_LOAD: &str = "source.load";
pub const ERR_SOURCE_LOOKUP: &str = "source.lookup";

// Tool-level
pub const ERR_RUNTIME: &str = "tool.runtime";
