use promocheck_domain::{CodeIndex, CodeSource, SourceError};
use promocheck_types::Code;

/// In-memory code source, handy for embedding and tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryCodeSource {
    codes: CodeIndex,
    failure: Option<String>,
}

impl MemoryCodeSource {
    pub fn new<I: IntoIterator<Item = Code>>(codes: I) -> Self {
        Self {
            codes: codes.into_iter().collect(),
            failure: None,
        }
    }

    /// A source whose every operation fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            codes: CodeIndex::new(),
            failure: Some(message.into()),
        }
    }

    fn check(&self) -> Result<(), SourceError> {
        match &self.failure {
            Some(message) => Err(SourceError::Unavailable {
                origin: self.describe(),
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

impl CodeSource for MemoryCodeSource {
    fn describe(&self) -> String {
        format!("memory ({} codes)", self.codes.len())
    }

    fn exists(&self, code: &Code) -> Result<bool, SourceError> {
        self.check()?;
        Ok(self.codes.contains(code.as_str()))
    }

    /// Returns a copy; the source itself is never handed out.
    fn load_all(&self) -> Result<CodeIndex, SourceError> {
        self.check()?;
        Ok(self.codes.clone())
    }
}
