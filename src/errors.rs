use thiserror::Error;
use uuid::Uuid;

pub type LedgerResult<T> = Result<T, LedgerError>;

/// Error type that captures recoverable ledger failures.
///
/// Every operation that returns one of these leaves the touched records
/// exactly as they were before the call.
#[derive(Debug, Error, PartialEq)]
pub enum LedgerError {
    #[error("{kind} `{name}` already exists")]
    DuplicateName { kind: &'static str, name: String },
    #[error("Member not found: {0}")]
    MemberNotFound(Uuid),
    #[error("Group expense not found: {0}")]
    GroupNotFound(Uuid),
    #[error("{kind} not found: {id}")]
    EntryNotFound { kind: &'static str, id: Uuid },
    #[error("Validation failed: {0}")]
    Validation(String),
}

impl LedgerError {
    pub fn duplicate(kind: &'static str, name: impl Into<String>) -> Self {
        Self::DuplicateName {
            kind,
            name: name.into(),
        }
    }

    /// Returns `true` for the case-insensitive name collision error.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::DuplicateName { .. })
    }
}

/// Failures raised while loading or storing user preferences.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
