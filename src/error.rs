use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    #[error("Index {index} out of range for name with {len} components")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Insert index {index} invalid for name with {len} components")]
    InvalidInsertIndex { index: usize, len: usize },

    #[error("Invalid component: {0}")]
    InvalidComponent(String),

    #[error("Invariant violated: {0}")]
    InvariantViolation(String),

    #[error("Internal consistency error: {0}")]
    InternalConsistency(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Coarse classification of [`NameError`], for callers that only care about
/// who is at fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameErrorKind {
    /// Index outside the valid read or insert range.
    Index,
    /// Component not supplied in masked form.
    InvalidComponent,
    /// Stored state no longer satisfies the masking invariant.
    InvariantViolation,
    /// A mutator broke its own postcondition.
    InternalConsistency,
    /// Unusable delimiter or other construction setting.
    Configuration,
}

impl NameError {
    pub fn kind(&self) -> NameErrorKind {
        match self {
            NameError::IndexOutOfRange { .. } | NameError::InvalidInsertIndex { .. } => {
                NameErrorKind::Index
            }
            NameError::InvalidComponent(_) => NameErrorKind::InvalidComponent,
            NameError::InvariantViolation(_) => NameErrorKind::InvariantViolation,
            NameError::InternalConsistency(_) => NameErrorKind::InternalConsistency,
            NameError::Configuration(_) => NameErrorKind::Configuration,
        }
    }

    /// True for errors caused by the caller's arguments rather than a bug in a
    /// representation.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self.kind(),
            NameErrorKind::Index | NameErrorKind::InvalidComponent | NameErrorKind::Configuration
        )
    }
}

pub type NameResult<T> = Result<T, NameError>;
