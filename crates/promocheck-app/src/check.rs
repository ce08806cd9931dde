//! The `check` use case: answer one eligibility query and produce a receipt.

use crate::receipt::build_receipt;
use anyhow::Context;
use promocheck_domain::{EligibilityEngine, EligibilityError};
use promocheck_repo::FileCodeSource;
use promocheck_settings::{Overrides, ResolvedConfig};
use promocheck_types::EligibilityReceipt;
use time::OffsetDateTime;

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// The code exactly as the user typed it.
    pub code: &'a str,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    /// Engine result; validation and source failures live here, not in the outer `Result`.
    pub outcome: Result<bool, EligibilityError>,
    pub receipt: EligibilityReceipt,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Run the check use case: resolve config, build the file sources and engine, query once.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        promocheck_settings::PromocheckConfigV1::default()
    } else {
        promocheck_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let resolved =
        promocheck_settings::resolve_config(cfg, input.overrides).context("resolve config")?;

    let campaign =
        FileCodeSource::new(resolved.campaign.clone()).with_invalid_lines(resolved.invalid_lines);
    let membership = FileCodeSource::new(resolved.membership.clone())
        .with_invalid_lines(resolved.invalid_lines);
    let engine = EligibilityEngine::new(campaign, membership);

    tracing::info!(
        code = input.code,
        campaign = %resolved.campaign,
        membership = %resolved.membership,
        invalid_lines = resolved.invalid_lines.as_str(),
        "checking eligibility"
    );
    let outcome = engine.is_eligible(input.code);
    match &outcome {
        Ok(eligible) => tracing::info!(code = input.code, eligible, "check finished"),
        Err(err) => tracing::info!(code = input.code, error_id = err.id(), "check failed"),
    }

    let finished_at = OffsetDateTime::now_utc();
    let receipt = build_receipt(input.code, &outcome, started_at, finished_at);

    Ok(CheckOutput {
        outcome,
        receipt,
        resolved_config: resolved,
    })
}

/// Map an outcome to a process exit code: 0 = answered (eligible or not), 1 = error.
pub fn outcome_exit_code(outcome: &Result<bool, EligibilityError>) -> i32 {
    match outcome {
        Ok(_) => 0,
        Err(_) => 1,
    }
}
