//! Mutable accumulator for a type whose body is still being parsed.

use crate::model::{
    Accessibility, ClassKind, ClassRecord, FieldInfo, ImportTable, MemberInfo, MethodInfo,
    ParameterInfo, ValueInfo,
};

/// Collects members of one type declaration until its body closes, then freezes
/// into a [`ClassRecord`] via [`ClassBuilder::build`].
#[derive(Debug, Clone)]
pub struct ClassBuilder {
    package_path: String,
    name: String,
    kind: ClassKind,
    super_class_name: Option<String>,
    outer_class_name: Option<String>,
    interface_names: Vec<String>,
    fields: Vec<FieldInfo>,
    methods: Vec<MethodInfo>,
    imports: ImportTable,
}

impl ClassBuilder {
    /// Start a type at `path`, its full name (`package.Outer.Name`).
    pub fn new(path: &str, kind: ClassKind) -> Self {
        let (package_path, name) = match path.rfind('.') {
            Some(dot) => (&path[..dot], &path[dot + 1..]),
            None => ("", path),
        };
        Self {
            package_path: package_path.to_string(),
            name: name.to_string(),
            kind,
            super_class_name: None,
            outer_class_name: None,
            interface_names: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
            imports: ImportTable::new(),
        }
    }

    /// Throwaway accumulator for declarations found inside a method body.
    pub fn scratch(imports: &ImportTable) -> Self {
        let mut builder = Self::new("<locals>", ClassKind::Class);
        builder.add_imports(imports);
        builder
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn imports(&self) -> &ImportTable {
        &self.imports
    }

    pub fn add_field(
        &mut self,
        accessibility: Accessibility,
        name: &str,
        type_name: Option<String>,
        is_final: bool,
        is_static: bool,
    ) {
        self.fields
            .push(MemberInfo::new(accessibility, name, type_name, is_final, is_static));
    }

    #[allow(clippy::too_many_arguments)]
    pub fn add_method(
        &mut self,
        accessibility: Accessibility,
        name: &str,
        type_name: Option<String>,
        parameters: Vec<ParameterInfo>,
        variables: Vec<ValueInfo>,
        is_final: bool,
        is_static: bool,
    ) {
        let member = MemberInfo::new(accessibility, name, type_name, is_final, is_static);
        self.methods
            .push(MethodInfo::new(member, parameters, variables));
    }

    /// Make `short_name` mean `full_name` inside this type.
    pub fn add_import(&mut self, short_name: impl Into<String>, full_name: impl Into<String>) {
        self.imports.insert(short_name.into(), full_name.into());
    }

    pub fn add_imports(&mut self, imports: &ImportTable) {
        self.imports
            .extend(imports.iter().map(|(k, v)| (k.clone(), v.clone())));
    }

    pub fn add_interface_name(&mut self, interface_name: impl Into<String>) {
        self.interface_names.push(interface_name.into());
    }

    pub fn set_super_class_name(&mut self, super_class_name: impl Into<String>) {
        self.super_class_name = Some(super_class_name.into());
    }

    pub fn set_outer_class_name(&mut self, outer_class_name: impl Into<String>) {
        self.outer_class_name = Some(outer_class_name.into());
    }

    /// Freeze into an immutable record.
    pub fn build(self) -> ClassRecord {
        ClassRecord {
            package_path: self.package_path,
            name: self.name,
            kind: self.kind,
            super_class_name: self.super_class_name,
            outer_class_name: self.outer_class_name,
            interface_names: self.interface_names,
            fields: self.fields,
            methods: self.methods,
            imports: self.imports,
        }
    }

    /// Collected fields reduced to plain values; used for method-body harvesting.
    pub fn into_variables(self) -> Vec<ValueInfo> {
        self.fields.into_iter().map(MemberInfo::into_value).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_split() {
        let builder = ClassBuilder::new("com.example.Outer.Inner", ClassKind::Class);
        let record = builder.build();
        assert_eq!(record.package_path, "com.example.Outer");
        assert_eq!(record.name, "Inner");
        assert_eq!(record.full_name(), "com.example.Outer.Inner");

        let top = ClassBuilder::new("Main", ClassKind::Interface).build();
        assert_eq!(top.package_path, "");
        assert_eq!(top.full_name(), "Main");
        assert_eq!(top.kind, ClassKind::Interface);
    }

    #[test]
    fn test_members_keep_declaration_order() {
        let mut builder = ClassBuilder::new("p.Shape", ClassKind::Class);
        builder.add_field(Accessibility::Private, "width", Some("int".into()), false, false);
        builder.add_field(Accessibility::Private, "height", Some("int".into()), false, false);
        builder.add_method(
            Accessibility::Public,
            "area",
            Some("int".into()),
            Vec::new(),
            Vec::new(),
            false,
            false,
        );
        builder.set_super_class_name("Base");
        builder.add_interface_name("Drawable");
        builder.add_interface_name("Comparable<Shape>");

        let record = builder.build();
        let names: Vec<_> = record.fields.iter().map(|f| f.name()).collect();
        assert_eq!(names, ["width", "height"]);
        assert_eq!(record.methods[0].name(), "area");
        assert_eq!(record.super_class_name.as_deref(), Some("Base"));
        assert_eq!(record.interface_names, ["Drawable", "Comparable<Shape>"]);
    }

    #[test]
    fn test_scratch_fields_become_variables() {
        let mut imports = ImportTable::new();
        imports.insert("List".into(), "java.util.List".into());
        let mut builder = ClassBuilder::scratch(&imports);
        assert_eq!(builder.imports().get("List").map(String::as_str), Some("java.util.List"));

        builder.add_field(Accessibility::Package, "i", Some("int".into()), false, false);
        builder.add_field(Accessibility::Package, "names[]", Some("String".into()), true, false);
        let variables = builder.into_variables();
        assert_eq!(variables.len(), 2);
        assert_eq!(variables[1].name, "names");
        assert_eq!(variables[1].type_name(), Some("String[]"));
        assert!(variables[1].is_final);
    }
}
