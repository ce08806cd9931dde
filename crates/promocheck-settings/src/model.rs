use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `promocheck.toml` schema v1.
///
/// This is a *user-facing* config model: it is intentionally permissive so forward-compat is easy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PromocheckConfigV1 {
    /// Optional schema string for tooling (`promocheck.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Campaign code file (one code per line).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaign: Option<String>,

    /// Membership code file (one code per line).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub membership: Option<String>,

    /// What to do with lines that are not valid codes: `skip` (default) or `reject`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invalid_lines: Option<String>,

    #[serde(default)]
    pub generate: GenerateConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GenerateConfig {
    /// Directory the corpus files are written to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaign_count: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlap_ratio: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub membership_ratio: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}
