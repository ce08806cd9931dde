use promocheck_types::{Code, MAX_CODE_LEN, MIN_CODE_LEN};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

/// Number of distinct codes of length 1..=5 over `a`-`z`.
pub const TOTAL_CODE_SPACE: u64 = 26 + 676 + 17_576 + 456_976 + 11_881_376;

/// Shape of a generated corpus.
#[derive(Clone, Debug, PartialEq)]
pub struct CorpusSpec {
    /// Distinct codes in the campaign set.
    pub campaign_count: usize,
    /// Probability that a campaign code also appears in the membership set.
    pub overlap_ratio: f64,
    /// Membership size as a fraction of `campaign_count`.
    pub membership_ratio: f64,
    /// Fixed seed for reproducible output; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for CorpusSpec {
    fn default() -> Self {
        Self {
            campaign_count: 500_000,
            overlap_ratio: 0.4,
            membership_ratio: 0.6,
            seed: None,
        }
    }
}

impl CorpusSpec {
    pub fn membership_target(&self) -> usize {
        (self.campaign_count as f64 * self.membership_ratio).floor() as usize
    }

    pub fn validate(&self) -> Result<(), CorpusError> {
        for (name, value) in [
            ("overlap_ratio", self.overlap_ratio),
            ("membership_ratio", self.membership_ratio),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(CorpusError::InvalidRatio { name, value });
            }
        }
        if self.campaign_count as u64 > TOTAL_CODE_SPACE {
            return Err(CorpusError::CodeSpaceExhausted {
                requested: self.campaign_count as u64,
                available: TOTAL_CODE_SPACE,
            });
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum CorpusError {
    #[error("{name} must be within [0, 1], got {value}")]
    InvalidRatio { name: &'static str, value: f64 },

    #[error("requested {requested} distinct codes but only {available} are available")]
    CodeSpaceExhausted { requested: u64, available: u64 },
}

/// Generated code sets, in generation order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Corpus {
    pub campaign: Vec<Code>,
    pub membership: Vec<Code>,
    /// How many membership codes were drawn from the campaign set.
    pub overlap: usize,
}

/// Uniformly random length, then uniformly random letters.
fn random_code(rng: &mut StdRng) -> Code {
    let len = rng.random_range(MIN_CODE_LEN..=MAX_CODE_LEN);
    let value = rng.random_range(0..26u64.pow(len as u32));
    Code::from_base26(len, value)
}

/// Generate a corpus.
///
/// Campaign codes are distinct. Each one joins the membership set with probability
/// `overlap_ratio`; membership-only codes are then added until the membership set holds
/// `membership_target()` codes.
pub fn generate(spec: &CorpusSpec) -> Result<Corpus, CorpusError> {
    spec.validate()?;

    let mut rng = match spec.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut campaign_set: HashSet<Code> = HashSet::with_capacity(spec.campaign_count);
    let mut campaign = Vec::with_capacity(spec.campaign_count);
    while campaign.len() < spec.campaign_count {
        let code = random_code(&mut rng);
        if campaign_set.insert(code.clone()) {
            campaign.push(code);
        }
    }

    let target = spec.membership_target();
    let mut membership: Vec<Code> = campaign
        .iter()
        .filter(|_| rng.random_bool(spec.overlap_ratio))
        .cloned()
        .collect();
    let overlap = membership.len();

    let needed = target.saturating_sub(overlap) as u64;
    let available = TOTAL_CODE_SPACE - campaign.len() as u64;
    if needed > available {
        return Err(CorpusError::CodeSpaceExhausted {
            requested: needed,
            available,
        });
    }

    let mut membership_set: HashSet<Code> = membership.iter().cloned().collect();
    while membership.len() < target {
        let code = random_code(&mut rng);
        if !campaign_set.contains(&code) && membership_set.insert(code.clone()) {
            membership.push(code);
        }
    }

    tracing::debug!(
        campaign = campaign.len(),
        membership = membership.len(),
        overlap,
        "corpus generated"
    );

    Ok(Corpus {
        campaign,
        membership,
        overlap,
    })
}
