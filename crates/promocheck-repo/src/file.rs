use crate::lines;
use camino::{Utf8Path, Utf8PathBuf};
use promocheck_domain::policy::InvalidLinePolicy;
use promocheck_domain::{CodeIndex, CodeSource, SourceError};
use promocheck_types::Code;
use std::fs::File;
use std::io::BufReader;

/// A text file with one code per line.
///
/// Every call opens a fresh handle, so the source can be shared between threads.
#[derive(Clone, Debug)]
pub struct FileCodeSource {
    path: Utf8PathBuf,
    invalid_lines: InvalidLinePolicy,
}

impl FileCodeSource {
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self {
            path: path.into(),
            invalid_lines: InvalidLinePolicy::default(),
        }
    }

    pub fn with_invalid_lines(mut self, policy: InvalidLinePolicy) -> Self {
        self.invalid_lines = policy;
        self
    }

    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    pub fn invalid_lines(&self) -> InvalidLinePolicy {
        self.invalid_lines
    }

    fn open(&self) -> Result<BufReader<File>, SourceError> {
        File::open(&self.path)
            .map(BufReader::new)
            .map_err(|source| SourceError::Open {
                origin: self.path.to_string(),
                source,
            })
    }
}

impl CodeSource for FileCodeSource {
    fn describe(&self) -> String {
        self.path.to_string()
    }

    fn exists(&self, code: &Code) -> Result<bool, SourceError> {
        let reader = self.open()?;
        lines::scan_for(reader, self.path.as_str(), code, self.invalid_lines)
    }

    fn load_all(&self) -> Result<CodeIndex, SourceError> {
        let reader = self.open()?;
        lines::load_index(reader, self.path.as_str(), self.invalid_lines)
    }
}
