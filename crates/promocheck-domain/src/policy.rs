/// How a source treats lines that are not valid codes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InvalidLinePolicy {
    /// Ignore the line. It can never match a valid code anyway.
    #[default]
    Skip,
    /// Fail the operation with [`crate::SourceError::Malformed`].
    Reject,
}

impl InvalidLinePolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            InvalidLinePolicy::Skip => "skip",
            InvalidLinePolicy::Reject => "reject",
        }
    }
}
