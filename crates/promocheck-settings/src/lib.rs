//! Config parsing and resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::{GenerateConfig, PromocheckConfigV1};
pub use resolve::{
    DEFAULT_CAMPAIGN_PATH, DEFAULT_MEMBERSHIP_PATH, DEFAULT_OUT_DIR, Overrides, ResolvedConfig,
    ResolvedGenerate,
};

/// Parse `promocheck.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<PromocheckConfigV1> {
    let cfg: PromocheckConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config (defaults, then file values, then CLI overrides).
pub fn resolve_config(
    cfg: PromocheckConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}

/// JSON Schema describing `promocheck.toml`.
pub fn config_json_schema() -> serde_json::Value {
    schemars::schema_for!(PromocheckConfigV1).to_value()
}
