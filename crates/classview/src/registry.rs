//! Append-only store of finished class records.

use crate::error::{RegistryError, Result};
use crate::model::ClassRecord;
use log::{debug, warn};
use std::collections::HashMap;

/// Full-name keyed store of [`ClassRecord`]s for one parsing session (one batch of
/// files).
///
/// Records are only ever appended: once registered, a record is never replaced,
/// mutated or removed. Iteration follows registration order, which for nested types
/// means inner types come before the type enclosing them.
#[derive(Debug, Default, Clone)]
pub struct ClassRegistry {
    records: Vec<ClassRecord>,
    by_name: HashMap<String, usize>,
}

impl ClassRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a finished record under its full name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateClass`] if the full name is already taken;
    /// the existing record is kept.
    pub fn register(&mut self, record: ClassRecord) -> Result<()> {
        let full_name = record.full_name();
        if self.by_name.contains_key(&full_name) {
            return Err(RegistryError::duplicate(full_name));
        }
        debug!("Registering {} {full_name}", record.kind);
        self.by_name.insert(full_name, self.records.len());
        self.records.push(record);
        Ok(())
    }

    /// Look up a record by full name.
    pub fn get(&self, full_name: &str) -> Option<&ClassRecord> {
        self.by_name.get(full_name).map(|&index| &self.records[index])
    }

    pub fn contains(&self, full_name: &str) -> bool {
        self.by_name.contains_key(full_name)
    }

    /// All records in registration order.
    pub fn records(&self) -> &[ClassRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClassRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append every record of `other`, in its order, skipping names already present.
    ///
    /// Returns the full names that were skipped.
    pub fn merge(&mut self, other: ClassRegistry) -> Vec<String> {
        let mut skipped = Vec::new();
        for record in other.records {
            if let Err(RegistryError::DuplicateClass { full_name }) = self.register(record) {
                warn!("Skipping duplicate class {full_name} while merging registries");
                skipped.push(full_name);
            }
        }
        skipped
    }
}

impl<'a> IntoIterator for &'a ClassRegistry {
    type Item = &'a ClassRecord;
    type IntoIter = std::slice::Iter<'a, ClassRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
