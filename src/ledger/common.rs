use uuid::Uuid;

use crate::errors::{LedgerError, LedgerResult};

/// Identifies entities that expose a stable unique identifier.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Provides access to a human-friendly entity name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Case-insensitive name comparison, ignoring surrounding whitespace.
pub fn names_match(left: &str, right: &str) -> bool {
    left.trim().to_lowercase() == right.trim().to_lowercase()
}

/// Trims a candidate name and rejects blank input.
pub(crate) fn clean_name(kind: &str, candidate: &str) -> LedgerResult<String> {
    let trimmed = candidate.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::Validation(format!("{} name cannot be empty", kind)));
    }
    Ok(trimmed.to_string())
}

/// Fails with a duplicate-name error when any entry other than `exclude`
/// already carries `candidate`.
pub(crate) fn ensure_unique_name<'a, T, I>(
    kind: &'static str,
    entries: I,
    exclude: Option<Uuid>,
    candidate: &str,
) -> LedgerResult<()>
where
    T: Identifiable + NamedEntity + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let duplicate = entries.into_iter().any(|entry| {
        names_match(entry.name(), candidate) && exclude.map_or(true, |id| entry.id() != id)
    });
    if duplicate {
        tracing::warn!(kind, name = candidate, "rejected duplicate name");
        Err(LedgerError::duplicate(kind, candidate))
    } else {
        Ok(())
    }
}
