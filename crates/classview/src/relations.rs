//! Relations between registered types, as drawn on a class diagram.

use crate::model::ClassRecord;
use crate::registry::ClassRegistry;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Kind of relation, ordered from least to most important.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationKind {
    /// Uses the target (enclosing type, method signature or local variable type)
    Dependency,
    /// Holds a field of the target type
    Association,
    /// Implements the target interface
    Realization,
    /// Extends the target
    Generalization,
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RelationKind::Dependency => "dependency",
            RelationKind::Association => "association",
            RelationKind::Realization => "realization",
            RelationKind::Generalization => "generalization",
        };
        f.write_str(name)
    }
}

/// A directed relation between two registered records, by full name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Relation {
    pub kind: RelationKind,
    pub from: String,
    pub to: String,
}

/// Accumulates relations, keeping one per ordered pair.
#[derive(Debug, Default)]
struct RelationSet {
    relations: Vec<Relation>,
    index: HashMap<(String, String), usize>,
}

impl RelationSet {
    fn add(&mut self, kind: RelationKind, from: &ClassRecord, to: &ClassRecord) {
        let key = (from.full_name(), to.full_name());
        match self.index.get(&key) {
            Some(&i) => {
                if kind > self.relations[i].kind {
                    self.relations[i].kind = kind;
                }
            }
            None => {
                self.index.insert(key.clone(), self.relations.len());
                self.relations.push(Relation {
                    kind,
                    from: key.0,
                    to: key.1,
                });
            }
        }
    }
}

/// Derive the relations among all registered records.
///
/// Only references that resolve to a registered record produce a relation. Between
/// the same two records in the same direction only the most important kind is kept,
/// at the position where the pair was first seen.
pub fn derive_relations(registry: &ClassRegistry) -> Vec<Relation> {
    let mut set = RelationSet::default();

    for record in registry {
        if let Some(super_class) = registry.super_class(record) {
            set.add(RelationKind::Generalization, record, super_class);
        }
        for interface in registry.interfaces(record) {
            set.add(RelationKind::Realization, record, interface);
        }
        if let Some(outer) = registry.outer_class(record) {
            set.add(RelationKind::Dependency, record, outer);
        }
        for field in &record.fields {
            if let Some(target) = registry.resolve_type(record, field.type_name()) {
                set.add(RelationKind::Association, record, target);
            }
        }
        for method in &record.methods {
            let used = std::iter::once(method.return_type())
                .chain(method.parameters.iter().map(|p| p.type_name()))
                .chain(method.variables.iter().map(|v| v.type_name()));
            for type_name in used {
                if let Some(target) = registry.resolve_type(record, type_name) {
                    set.add(RelationKind::Dependency, record, target);
                }
            }
        }
    }

    set.relations
}
