use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Shortest accepted code, in bytes.
pub const MIN_CODE_LEN: usize = 1;
/// Longest accepted code, in bytes.
pub const MAX_CODE_LEN: usize = 5;

/// Why a candidate code was rejected.
///
/// Rules are checked in declaration order and the first failure wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    EmptyCode,
    TooLong,
    InvalidCharacter,
}

impl ValidationErrorKind {
    pub fn id(self) -> &'static str {
        match self {
            ValidationErrorKind::EmptyCode => crate::ids::ERR_VALIDATION_EMPTY_CODE,
            ValidationErrorKind::TooLong => crate::ids::ERR_VALIDATION_TOO_LONG,
            ValidationErrorKind::InvalidCharacter => crate::ids::ERR_VALIDATION_INVALID_CHARACTER,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ValidationErrorKind::EmptyCode => "code cannot be empty",
            ValidationErrorKind::TooLong => "code must be at most 5 characters",
            ValidationErrorKind::InvalidCharacter => {
                "code must contain only lowercase letters (a-z)"
            }
        }
    }
}

/// A syntactically invalid code.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("validation error: {field} - {}", kind.message())]
pub struct ValidationError {
    pub kind: ValidationErrorKind,
    pub field: &'static str,
}

impl ValidationError {
    pub fn new(kind: ValidationErrorKind) -> Self {
        Self {
            kind,
            field: "code",
        }
    }
}

/// Check that `code` is 1-5 lowercase ASCII letters.
///
/// Pure: no I/O, no shared state.
pub fn validate_code(code: &str) -> Result<(), ValidationError> {
    validate_code_bytes(code.as_bytes())
}

/// Byte-level form of [`validate_code`], used by readers that never decode lines.
///
/// Length is measured in bytes, so a multi-byte character counts by its encoded width.
pub fn validate_code_bytes(code: &[u8]) -> Result<(), ValidationError> {
    if code.len() < MIN_CODE_LEN {
        return Err(ValidationError::new(ValidationErrorKind::EmptyCode));
    }
    if code.len() > MAX_CODE_LEN {
        return Err(ValidationError::new(ValidationErrorKind::TooLong));
    }
    if !code.iter().all(u8::is_ascii_lowercase) {
        return Err(ValidationError::new(ValidationErrorKind::InvalidCharacter));
    }
    Ok(())
}

/// A validated promotion code.
///
/// Equality is exact byte equality; there is no case folding or trimming.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Code(String);

impl Code {
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        validate_code(s)?;
        Ok(Self(s.to_string()))
    }

    pub fn parse_bytes(bytes: &[u8]) -> Result<Self, ValidationError> {
        validate_code_bytes(bytes)?;
        // All bytes are ASCII letters at this point.
        let s = std::str::from_utf8(bytes)
            .map_err(|_| ValidationError::new(ValidationErrorKind::InvalidCharacter))?;
        Ok(Self(s.to_string()))
    }

    /// The code spelling `value` in base 26 (`a` = 0) with exactly `len` letters.
    ///
    /// Total by construction: `len` is clamped to `MIN_CODE_LEN..=MAX_CODE_LEN` and only the
    /// low `len` digits of `value` are used.
    pub fn from_base26(len: usize, value: u64) -> Self {
        let len = len.clamp(MIN_CODE_LEN, MAX_CODE_LEN);
        let mut letters = vec![b'a'; len];
        let mut rest = value;
        for slot in letters.iter_mut().rev() {
            *slot = b'a' + (rest % 26) as u8;
            rest /= 26;
        }
        Self(letters.into_iter().map(char::from).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Code {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Code {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Code {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate_code(&value)?;
        Ok(Self(value))
    }
}

impl TryFrom<&str> for Code {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Code::parse(value)
    }
}

impl std::str::FromStr for Code {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Code::parse(s)
    }
}

impl From<Code> for String {
    fn from(value: Code) -> Self {
        value.0
    }
}
