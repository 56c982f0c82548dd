//! Short-name resolution against the registry.
//!
//! A name is looked up in the scope's import table first, then as a sibling in the
//! scope's package, and then the same two steps repeat from each enclosing type
//! outward. Running out of scopes is not an error: the referenced type may simply
//! lie outside the parsed set.

use crate::model::{qualify, ClassRecord};
use crate::registry::ClassRegistry;

/// Reduce a written type to the name a declaration would carry:
/// `Map<K, V>` → `Map`, `int[]` → `int`, `String...` → `String`.
pub fn base_type_name(type_name: &str) -> &str {
    let end = type_name.find(['<', '[']).unwrap_or(type_name.len());
    type_name[..end].trim_end_matches('.').trim()
}

impl ClassRegistry {
    /// Resolve `short_name` as seen from inside `scope`.
    pub fn resolve_class<'a>(&'a self, scope: &'a ClassRecord, short_name: &str) -> Option<&'a ClassRecord> {
        let short_name = base_type_name(short_name);
        if short_name.is_empty() {
            return None;
        }

        let mut scope = scope;
        loop {
            let found = match scope.import(short_name) {
                Some(full_name) => self.get(full_name),
                None => self.get(&qualify(&scope.package_path, short_name)),
            };
            if found.is_some() {
                return found;
            }
            match self.outer_class(scope) {
                Some(outer) => scope = outer,
                None => break,
            }
        }

        if short_name.contains('.') {
            return self.get(short_name);
        }
        None
    }

    /// Resolve an optional member type name; `None` types (constructors, enum
    /// constants) never resolve.
    pub fn resolve_type<'a>(&'a self, scope: &'a ClassRecord, type_name: Option<&str>) -> Option<&'a ClassRecord> {
        type_name.and_then(|name| self.resolve_class(scope, name))
    }

    /// The record named after `extends`, if it was parsed.
    pub fn super_class<'a>(&'a self, record: &'a ClassRecord) -> Option<&'a ClassRecord> {
        self.resolve_type(record, record.super_class_name.as_deref())
    }

    /// The records named after `implements` that were parsed, in declaration order.
    pub fn interfaces<'a>(&'a self, record: &'a ClassRecord) -> Vec<&'a ClassRecord> {
        record
            .interface_names
            .iter()
            .filter_map(|name| self.resolve_class(record, name))
            .collect()
    }

    /// The enclosing type of a nested record.
    ///
    /// A nested type's package path is its enclosing type's full name, so the path is
    /// looked up directly. For a top-level type the path names a package and the
    /// lookup finds nothing.
    pub fn outer_class(&self, record: &ClassRecord) -> Option<&ClassRecord> {
        if record.package_path.is_empty() {
            return None;
        }
        self.get(&record.package_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::ClassBuilder;
    use crate::model::ClassKind;

    fn registry_with(records: Vec<ClassRecord>) -> ClassRegistry {
        let mut registry = ClassRegistry::new();
        for record in records {
            registry.register(record).unwrap();
        }
        registry
    }

    #[test]
    fn test_base_type_name() {
        assert_eq!(base_type_name("Map<String,List<Foo>>"), "Map");
        assert_eq!(base_type_name("int[][]"), "int");
        assert_eq!(base_type_name("String..."), "String");
        assert_eq!(base_type_name("java.util.List"), "java.util.List");
    }

    #[test]
    fn test_resolve_through_import() {
        let mut user = ClassBuilder::new("app.User", ClassKind::Class);
        user.add_import("Foo", "a.b.Foo");
        let user = user.build();
        let foo = ClassBuilder::new("a.b.Foo", ClassKind::Class).build();
        let registry = registry_with(vec![user, foo]);

        let scope = registry.get("app.User").unwrap();
        assert_eq!(registry.resolve_class(scope, "Foo").unwrap().full_name(), "a.b.Foo");
        assert_eq!(
            registry.resolve_class(scope, "List<Foo>").map(|r| r.full_name()),
            None
        );
    }

    #[test]
    fn test_missing_import_target_is_not_found() {
        let mut user = ClassBuilder::new("app.User", ClassKind::Class);
        user.add_import("Foo", "a.b.Foo");
        let registry = registry_with(vec![user.build()]);
        let scope = registry.get("app.User").unwrap();
        assert!(registry.resolve_class(scope, "Foo").is_none());
    }

    #[test]
    fn test_resolve_same_package_sibling() {
        let registry = registry_with(vec![
            ClassBuilder::new("app.User", ClassKind::Class).build(),
            ClassBuilder::new("app.Role", ClassKind::Enum).build(),
        ]);
        let scope = registry.get("app.User").unwrap();
        assert_eq!(registry.resolve_class(scope, "Role[]").unwrap().kind, ClassKind::Enum);
        assert!(registry.resolve_class(scope, "Missing").is_none());
    }

    #[test]
    fn test_resolve_walks_outward_through_enclosing_types() {
        let outer = ClassBuilder::new("app.Outer", ClassKind::Class).build();
        let mut inner = ClassBuilder::new("app.Outer.Inner", ClassKind::Class);
        inner.set_outer_class_name("Outer");
        let deep = ClassBuilder::new("app.Outer.Inner.Deep", ClassKind::Class).build();
        let helper = ClassBuilder::new("app.Helper", ClassKind::Class).build();
        let registry = registry_with(vec![deep, inner.build(), outer, helper]);

        let deep = registry.get("app.Outer.Inner.Deep").unwrap();
        assert_eq!(registry.outer_class(deep).unwrap().full_name(), "app.Outer.Inner");
        assert_eq!(registry.resolve_class(deep, "Helper").unwrap().full_name(), "app.Helper");

        let outer = registry.get("app.Outer").unwrap();
        assert!(registry.outer_class(outer).is_none());
    }

    #[test]
    fn test_super_class_and_interfaces() {
        let mut child = ClassBuilder::new("shapes.Circle", ClassKind::Class);
        child.set_super_class_name("Shape");
        child.add_interface_name("Drawable");
        child.add_interface_name("java.io.Serializable");
        child.add_interface_name("Scalable");
        let registry = registry_with(vec![
            child.build(),
            ClassBuilder::new("shapes.Shape", ClassKind::Class).build(),
            ClassBuilder::new("shapes.Drawable", ClassKind::Interface).build(),
            ClassBuilder::new("shapes.Scalable", ClassKind::Interface).build(),
        ]);

        let circle = registry.get("shapes.Circle").unwrap();
        assert_eq!(registry.super_class(circle).unwrap().name, "Shape");
        let interfaces: Vec<_> = registry.interfaces(circle).iter().map(|r| r.name.clone()).collect();
        assert_eq!(interfaces, ["Drawable", "Scalable"]);
    }

    #[test]
    fn test_fully_qualified_name_resolves_verbatim() {
        let registry = registry_with(vec![
            ClassBuilder::new("app.User", ClassKind::Class).build(),
            ClassBuilder::new("lib.util.Strings", ClassKind::Class).build(),
        ]);
        let scope = registry.get("app.User").unwrap();
        assert_eq!(
            registry.resolve_class(scope, "lib.util.Strings").unwrap().name,
            "Strings"
        );
        assert!(registry.resolve_type(scope, None).is_none());
    }
}
