use promocheck_types::{ValidationError, ids};
use std::io;
use std::sync::Arc;

/// Failure reading a code source. Never means "not found".
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("open {origin}")]
    Open {
        origin: String,
        #[source]
        source: io::Error,
    },

    #[error("read {origin}")]
    Read {
        origin: String,
        #[source]
        source: io::Error,
    },

    #[error("{origin}:{line}: invalid code")]
    Malformed {
        origin: String,
        /// 1-based line number.
        line: u64,
        #[source]
        source: ValidationError,
    },

    #[error("{origin}: {message}")]
    Unavailable { origin: String, message: String },
}

/// Why an eligibility query could not be answered.
///
/// Source errors sit behind an `Arc` so a cached campaign failure can be handed to every caller.
#[derive(Clone, Debug, thiserror::Error)]
pub enum EligibilityError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("load campaign source")]
    SourceLoad(#[source] Arc<SourceError>),

    #[error("look up membership source")]
    SourceLookup(#[source] Arc<SourceError>),
}

impl EligibilityError {
    /// Stable ID for receipts, see [`promocheck_types::ids`].
    pub fn id(&self) -> &'static str {
        match self {
            EligibilityError::Validation(err) => err.kind.id(),
            EligibilityError::SourceLoad(_) => ids::ERR_SOURCE_LOAD,
            EligibilityError::SourceLookup(_) => ids::ERR_SOURCE_LOOKUP,
        }
    }

    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            EligibilityError::Validation(err) => Some(err),
            _ => None,
        }
    }

    pub fn source_error(&self) -> Option<&SourceError> {
        match self {
            EligibilityError::Validation(_) => None,
            EligibilityError::SourceLoad(err) | EligibilityError::SourceLookup(err) => Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use promocheck_types::ValidationErrorKind;
    use std::error::Error as _;

    #[test]
    fn validation_errors_are_transparent() {
        let err = EligibilityError::from(ValidationError::new(ValidationErrorKind::EmptyCode));
        assert_eq!(err.to_string(), "validation error: code - code cannot be empty");
        assert_eq!(err.id(), "validation.empty_code");
        assert!(err.source_error().is_none());
    }

    #[test]
    fn load_errors_keep_their_cause() {
        let cause = Arc::new(SourceError::Open {
            origin: "campaign.txt".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        });
        let err = EligibilityError::SourceLoad(cause);
        assert_eq!(err.id(), "source.load");
        let source = err.source().expect("has source");
        assert_eq!(source.to_string(), "open campaign.txt");
        assert_eq!(source.source().expect("io cause").to_string(), "gone");
    }
}
