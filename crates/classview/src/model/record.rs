//! Frozen per-type records.

use super::value::{FieldInfo, MethodInfo};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Short name → full name mapping visible inside a type.
pub type ImportTable = BTreeMap<String, String>;

/// What kind of type declaration produced a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassKind {
    Class,
    Interface,
    Enum,
}

impl ClassKind {
    /// Map a declaration keyword (`class`, `interface`, `enum`).
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "class" => Some(ClassKind::Class),
            "interface" => Some(ClassKind::Interface),
            "enum" => Some(ClassKind::Enum),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ClassKind::Class => "class",
            ClassKind::Interface => "interface",
            ClassKind::Enum => "enum",
        }
    }
}

impl fmt::Display for ClassKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Join a package (or enclosing type) path and a simple name.
pub fn qualify(path: &str, name: &str) -> String {
    if path.is_empty() {
        name.to_string()
    } else {
        format!("{path}.{name}")
    }
}

/// Structural information about one class, interface or enum.
///
/// Cross-references (super type, interfaces, enclosing type) are kept as the names
/// written in the source and resolved on demand through the registry, so they may
/// point at types that were never parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassRecord {
    /// Package path, or the enclosing type's full name for nested types
    pub package_path: String,

    /// Simple name
    pub name: String,

    pub kind: ClassKind,

    /// Name after `extends`, as written
    pub super_class_name: Option<String>,

    /// Simple name of the enclosing type, for nested types
    pub outer_class_name: Option<String>,

    /// Names after `implements`, as written
    pub interface_names: Vec<String>,

    /// Fields (and enum constants) in declaration order
    pub fields: Vec<FieldInfo>,

    /// Methods and constructors in declaration order
    pub methods: Vec<MethodInfo>,

    /// Imports visible at the declaration, including nested type names
    pub imports: ImportTable,
}

impl ClassRecord {
    /// Package path plus simple name.
    pub fn full_name(&self) -> String {
        qualify(&self.package_path, &self.name)
    }

    /// Look up a short name in this record's own import table.
    pub fn import(&self, short_name: &str) -> Option<&str> {
        self.imports.get(short_name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualify() {
        assert_eq!(qualify("", "Main"), "Main");
        assert_eq!(qualify("com.example", "Main"), "com.example.Main");
    }

    #[test]
    fn test_class_kind_keywords() {
        assert_eq!(ClassKind::from_keyword("enum"), Some(ClassKind::Enum));
        assert_eq!(ClassKind::from_keyword("record"), None);
        assert_eq!(ClassKind::Interface.to_string(), "interface");
    }
}
