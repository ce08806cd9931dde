use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for eligibility receipts.
pub const SCHEMA_ELIGIBILITY_V1: &str = "promocheck.eligibility.v1";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Why a query could not be answered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ErrorInfo {
    /// Stable ID from [`crate::ids`].
    pub id: String,
    pub message: String,
}

/// Machine-readable record of one eligibility query.
///
/// `eligible` is `false` whenever `error` is present; a `false` without an error
/// means the code was validated and checked against both sources.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EligibilityReceipt {
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub duration_ms: u64,
    /// The code exactly as supplied by the caller.
    pub code: String,
    pub eligible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}

/// JSON Schema describing [`EligibilityReceipt`].
pub fn receipt_json_schema() -> serde_json::Value {
    schemars::schema_for!(EligibilityReceipt).to_value()
}
