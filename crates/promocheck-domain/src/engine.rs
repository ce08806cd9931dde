use crate::error::{EligibilityError, SourceError};
use crate::index::CodeIndex;
use crate::source::CodeSource;
use promocheck_types::Code;
use std::sync::{Arc, OnceLock};
use std::time::Instant;

/// Observable state of the campaign index. `Ready` and `Failed` are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndexState {
    /// No query has completed a load yet (a load may be in flight).
    Uninitialized,
    Ready { codes: usize },
    Failed,
}

/// Answers "is this code in both the campaign and the membership source?".
///
/// The campaign source is materialized into a [`CodeIndex`] on the first query and reused
/// for the lifetime of the engine. The membership source is only ever point-queried.
/// One engine may be shared by any number of threads.
pub struct EligibilityEngine<C, M> {
    campaign: C,
    membership: M,
    index: OnceLock<Result<CodeIndex, Arc<SourceError>>>,
}

impl<C: CodeSource, M: CodeSource> EligibilityEngine<C, M> {
    pub fn new(campaign: C, membership: M) -> Self {
        Self {
            campaign,
            membership,
            index: OnceLock::new(),
        }
    }

    pub fn campaign(&self) -> &C {
        &self.campaign
    }

    pub fn membership(&self) -> &M {
        &self.membership
    }

    /// Build the campaign index exactly once and return it (or the cached load failure).
    ///
    /// Concurrent first callers block until the single load finishes; a failed load is
    /// never retried.
    pub fn ensure_index_loaded(&self) -> Result<&CodeIndex, EligibilityError> {
        self.index
            .get_or_init(|| self.load_campaign())
            .as_ref()
            .map_err(|err| EligibilityError::SourceLoad(Arc::clone(err)))
    }

    /// Validate `code`, then check the campaign index, then the membership source.
    ///
    /// `Ok(false)` always means the code was validated and genuinely checked. The
    /// membership source is not touched when the code is absent from the campaign.
    pub fn is_eligible(&self, code: &str) -> Result<bool, EligibilityError> {
        let code = Code::parse(code)?;

        let index = self.ensure_index_loaded()?;
        if !index.contains(code.as_str()) {
            tracing::debug!(%code, "not in campaign index");
            return Ok(false);
        }

        let found = self
            .membership
            .exists(&code)
            .map_err(|err| EligibilityError::SourceLookup(Arc::new(err)))?;
        tracing::debug!(%code, found, source = %self.membership.describe(), "membership lookup");
        Ok(found)
    }

    pub fn index_state(&self) -> IndexState {
        match self.index.get() {
            None => IndexState::Uninitialized,
            Some(Ok(index)) => IndexState::Ready {
                codes: index.len(),
            },
            Some(Err(_)) => IndexState::Failed,
        }
    }

    fn load_campaign(&self) -> Result<CodeIndex, Arc<SourceError>> {
        let source = self.campaign.describe();
        let started = Instant::now();
        match self.campaign.load_all() {
            Ok(index) => {
                tracing::debug!(
                    %source,
                    codes = index.len(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "campaign index built"
                );
                Ok(index)
            }
            Err(err) => {
                tracing::warn!(%source, error = %err, "campaign index build failed");
                Err(Arc::new(err))
            }
        }
    }
}
