//! The code source capability the engine is written against.

use crate::error::SourceError;
use crate::index::CodeIndex;
use promocheck_types::Code;
use std::sync::Arc;

/// Read-only access to one collection of codes.
///
/// Implementations must tolerate concurrent calls; file-backed sources open a fresh handle per call.
pub trait CodeSource: Send + Sync {
    /// Short label used in logs and error messages.
    fn describe(&self) -> String;

    /// Point test with early exit. Must not require materializing the whole source.
    fn exists(&self, code: &Code) -> Result<bool, SourceError>;

    /// Materialize every code in the source.
    fn load_all(&self) -> Result<CodeIndex, SourceError>;
}

impl<T: CodeSource + ?Sized> CodeSource for &T {
    fn describe(&self) -> String {
        (**self).describe()
    }

    fn exists(&self, code: &Code) -> Result<bool, SourceError> {
        (**self).exists(code)
    }

    fn load_all(&self) -> Result<CodeIndex, SourceError> {
        (**self).load_all()
    }
}

impl<T: CodeSource + ?Sized> CodeSource for Box<T> {
    fn describe(&self) -> String {
        (**self).describe()
    }

    fn exists(&self, code: &Code) -> Result<bool, SourceError> {
        (**self).exists(code)
    }

    fn load_all(&self) -> Result<CodeIndex, SourceError> {
        (**self).load_all()
    }
}

impl<T: CodeSource + ?Sized> CodeSource for Arc<T> {
    fn describe(&self) -> String {
        (**self).describe()
    }

    fn exists(&self, code: &Code) -> Result<bool, SourceError> {
        (**self).exists(code)
    }

    fn load_all(&self) -> Result<CodeIndex, SourceError> {
        (**self).load_all()
    }
}
