use crate::model::PromocheckConfigV1;
use anyhow::Context;
use camino::Utf8PathBuf;
use promocheck_corpus::CorpusSpec;
use promocheck_domain::policy::InvalidLinePolicy;

pub const DEFAULT_CAMPAIGN_PATH: &str = "data/campaign_codes.txt";
pub const DEFAULT_MEMBERSHIP_PATH: &str = "data/membership_codes.txt";
pub const DEFAULT_OUT_DIR: &str = "data";

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub campaign: Option<Utf8PathBuf>,
    pub membership: Option<Utf8PathBuf>,
    pub invalid_lines: Option<String>,
    pub out_dir: Option<Utf8PathBuf>,
    pub campaign_count: Option<u64>,
    pub overlap_ratio: Option<f64>,
    pub membership_ratio: Option<f64>,
    pub seed: Option<u64>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedGenerate {
    pub out_dir: Utf8PathBuf,
    pub corpus: CorpusSpec,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedConfig {
    pub campaign: Utf8PathBuf,
    pub membership: Utf8PathBuf,
    pub invalid_lines: InvalidLinePolicy,
    pub generate: ResolvedGenerate,
}

pub fn resolve_config(
    cfg: PromocheckConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let campaign = overrides
        .campaign
        .or(cfg.campaign.map(Utf8PathBuf::from))
        .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_CAMPAIGN_PATH));

    let membership = overrides
        .membership
        .or(cfg.membership.map(Utf8PathBuf::from))
        .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_MEMBERSHIP_PATH));

    let invalid_lines = match overrides.invalid_lines.or(cfg.invalid_lines) {
        Some(v) => parse_invalid_lines(&v)?,
        None => InvalidLinePolicy::default(),
    };

    let gen_cfg = cfg.generate;
    let defaults = CorpusSpec::default();
    let campaign_count = match overrides.campaign_count.or(gen_cfg.campaign_count) {
        Some(n) => usize::try_from(n).context("campaign_count does not fit in memory")?,
        None => defaults.campaign_count,
    };
    let corpus = CorpusSpec {
        campaign_count,
        overlap_ratio: overrides
            .overlap_ratio
            .or(gen_cfg.overlap_ratio)
            .unwrap_or(defaults.overlap_ratio),
        membership_ratio: overrides
            .membership_ratio
            .or(gen_cfg.membership_ratio)
            .unwrap_or(defaults.membership_ratio),
        seed: overrides.seed.or(gen_cfg.seed),
    };

    let out_dir = overrides
        .out_dir
        .or(gen_cfg.out_dir.map(Utf8PathBuf::from))
        .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_OUT_DIR));

    Ok(ResolvedConfig {
        campaign,
        membership,
        invalid_lines,
        generate: ResolvedGenerate { out_dir, corpus },
    })
}

fn parse_invalid_lines(v: &str) -> anyhow::Result<InvalidLinePolicy> {
    match v {
        "skip" => Ok(InvalidLinePolicy::Skip),
        "reject" => Ok(InvalidLinePolicy::Reject),
        other => anyhow::bail!("unknown invalid_lines: {other} (expected 'skip' or 'reject')"),
    }
}
