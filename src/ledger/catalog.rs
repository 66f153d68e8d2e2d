use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use super::common::{clean_name, ensure_unique_name, names_match, Identifiable, NamedEntity};
use crate::errors::{LedgerError, LedgerResult};

/// A named record that can live in a [`Catalog`].
pub trait CatalogEntry: Identifiable + NamedEntity + Clone {
    /// Label used in error messages, e.g. `"Category"`.
    const KIND: &'static str;

    fn create(name: String) -> Self;

    fn set_name(&mut self, name: String);
}

/// Ordered list of entries whose names are unique, ignoring case.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Catalog<T> {
    entries: Vec<T>,
}

impl<T> Default for Catalog<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T: CatalogEntry> Catalog<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a catalog, failing on the first blank or repeated name.
    pub fn from_names<I, S>(names: I) -> LedgerResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut catalog = Self::new();
        for name in names {
            catalog.add(name.as_ref())?;
        }
        Ok(catalog)
    }

    pub fn add(&mut self, name: &str) -> LedgerResult<&T> {
        let name = clean_name(T::KIND, name)?;
        ensure_unique_name(T::KIND, &self.entries, None, &name)?;
        debug!(kind = T::KIND, name = %name, "added catalog entry");
        self.entries.push(T::create(name));
        let index = self.entries.len() - 1;
        Ok(&self.entries[index])
    }

    pub fn rename(&mut self, id: Uuid, name: &str) -> LedgerResult<&T> {
        let name = clean_name(T::KIND, name)?;
        let index = self.position(id)?;
        ensure_unique_name(T::KIND, &self.entries, Some(id), &name)?;
        let entry = &mut self.entries[index];
        entry.set_name(name);
        Ok(&*entry)
    }

    pub fn remove(&mut self, id: Uuid) -> LedgerResult<T> {
        let index = self.position(id)?;
        let removed = self.entries.remove(index);
        debug!(kind = T::KIND, name = removed.name(), "removed catalog entry");
        Ok(removed)
    }

    pub fn get(&self, id: Uuid) -> Option<&T> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    pub fn find(&self, name: &str) -> Option<&T> {
        self.entries
            .iter()
            .find(|entry| names_match(entry.name(), name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, id: Uuid) -> LedgerResult<usize> {
        self.entries
            .iter()
            .position(|entry| entry.id() == id)
            .ok_or(LedgerError::EntryNotFound { kind: T::KIND, id })
    }
}
