use crate::engine::EligibilityEngine;
use crate::error::SourceError;
use crate::index::CodeIndex;
use crate::source::CodeSource;
use promocheck_types::Code;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// In-memory source that counts calls and can be told to fail.
#[derive(Debug)]
pub struct RecordingSource {
    name: String,
    codes: CodeIndex,
    load_error: Option<String>,
    lookup_error: Mutex<Option<String>>,
    load_delay: Duration,
    load_calls: AtomicUsize,
    exists_calls: AtomicUsize,
}

impl RecordingSource {
    pub fn new(name: &str, codes: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            codes: codes
                .iter()
                .map(|c| Code::parse(c).expect("fixture code is valid"))
                .collect(),
            load_error: None,
            lookup_error: Mutex::new(None),
            load_delay: Duration::ZERO,
            load_calls: AtomicUsize::new(0),
            exists_calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(name: &str, message: &str) -> Self {
        let mut source = Self::new(name, &[]);
        source.load_error = Some(message.to_string());
        *source.lookup_error.get_mut().expect("lock") = Some(message.to_string());
        source
    }

    pub fn with_load_delay(mut self, delay: Duration) -> Self {
        self.load_delay = delay;
        self
    }

    pub fn fail_lookups(&self, message: &str) {
        *self.lookup_error.lock().expect("lock") = Some(message.to_string());
    }

    pub fn heal(&self) {
        *self.lookup_error.lock().expect("lock") = None;
    }

    pub fn load_calls(&self) -> usize {
        self.load_calls.load(Ordering::SeqCst)
    }

    pub fn exists_calls(&self) -> usize {
        self.exists_calls.load(Ordering::SeqCst)
    }

    fn unavailable(&self, message: &str) -> SourceError {
        SourceError::Unavailable {
            origin: self.name.clone(),
            message: message.to_string(),
        }
    }
}

impl CodeSource for RecordingSource {
    fn describe(&self) -> String {
        self.name.clone()
    }

    fn exists(&self, code: &Code) -> Result<bool, SourceError> {
        self.exists_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = self.lookup_error.lock().expect("lock").as_deref() {
            return Err(self.unavailable(message));
        }
        Ok(self.codes.contains(code.as_str()))
    }

    fn load_all(&self) -> Result<CodeIndex, SourceError> {
        self.load_calls.fetch_add(1, Ordering::SeqCst);
        if !self.load_delay.is_zero() {
            std::thread::sleep(self.load_delay);
        }
        match &self.load_error {
            Some(message) => Err(self.unavailable(message)),
            None => Ok(self.codes.clone()),
        }
    }
}

pub type RecordingEngine = EligibilityEngine<Arc<RecordingSource>, Arc<RecordingSource>>;

pub fn engine(
    campaign: &[&str],
    membership: &[&str],
) -> (RecordingEngine, Arc<RecordingSource>, Arc<RecordingSource>) {
    let campaign = Arc::new(RecordingSource::new("campaign", campaign));
    let membership = Arc::new(RecordingSource::new("membership", membership));
    let eng = EligibilityEngine::new(Arc::clone(&campaign), Arc::clone(&membership));
    (eng, campaign, membership)
}
