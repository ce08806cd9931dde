//! The `generate` use case: build a random corpus and write it to disk.

use anyhow::Context;
use promocheck_corpus::CorpusPaths;
use promocheck_settings::{Overrides, ResolvedConfig};

/// Input for the generate use case.
#[derive(Clone, Debug)]
pub struct GenerateInput<'a> {
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    pub overrides: Overrides,
}

#[derive(Clone, Debug)]
pub struct GenerateOutput {
    pub paths: CorpusPaths,
    pub campaign_codes: usize,
    pub membership_codes: usize,
    pub overlap: usize,
    pub resolved_config: ResolvedConfig,
}

pub fn run_generate(input: GenerateInput<'_>) -> anyhow::Result<GenerateOutput> {
    let cfg = if input.config_text.trim().is_empty() {
        promocheck_settings::PromocheckConfigV1::default()
    } else {
        promocheck_settings::parse_config_toml(input.config_text).context("parse config")?
    };
    let resolved =
        promocheck_settings::resolve_config(cfg, input.overrides).context("resolve config")?;

    let spec = &resolved.generate.corpus;
    spec.validate().context("invalid [generate] settings")?;
    tracing::info!(
        campaign_count = spec.campaign_count,
        overlap_ratio = spec.overlap_ratio,
        membership_ratio = spec.membership_ratio,
        seed = ?spec.seed,
        "generating corpus"
    );
    let corpus = promocheck_corpus::generate(spec).context("generate corpus")?;
    let paths = promocheck_corpus::write_corpus(&corpus, &resolved.generate.out_dir)
        .context("write corpus")?;

    Ok(GenerateOutput {
        paths,
        campaign_codes: corpus.campaign.len(),
        membership_codes: corpus.membership.len(),
        overlap: corpus.overlap,
        resolved_config: resolved,
    })
}
