//! Structure extraction for Java source code

use classview::ClassRegistry;
use classview_parser_api::ParserConfig;
use log::debug;

use crate::interpreter::ParseSession;

/// Extract the types declared in `source` into `registry`.
///
/// Never fails: anything that cannot be classified is skipped. Returns the full names
/// registered, inner types before the types enclosing them.
pub fn extract(source: &str, registry: &mut ClassRegistry, config: &ParserConfig) -> Vec<String> {
    let registered = ParseSession::new(source, registry)
        .with_harvest_locals(config.harvest_locals)
        .run();
    debug!("Extracted {} types", registered.len());
    registered
}

#[cfg(test)]
mod tests {
    use super::*;
    use classview::{Accessibility, ClassKind};

    #[test]
    fn test_extract_simple_class() {
        let source = r#"
package p;

class A {
    int x;

    void m(int y) {
        int z;
    }
}
"#;
        let mut registry = ClassRegistry::new();
        let names = extract(source, &mut registry, &ParserConfig::default());
        assert_eq!(names, ["p.A"]);
        assert_eq!(registry.len(), 1);

        let record = registry.get("p.A").unwrap();
        assert_eq!(record.kind, ClassKind::Class);
        assert_eq!(record.fields.len(), 1);
        assert_eq!(record.fields[0].name(), "x");
        assert_eq!(record.fields[0].type_name(), Some("int"));
        assert_eq!(record.fields[0].accessibility, Accessibility::Package);

        let method = &record.methods[0];
        assert_eq!(method.name(), "m");
        assert_eq!(method.return_type(), Some("void"));
        assert_eq!(method.parameters.len(), 1);
        assert_eq!(method.parameters[0].name, "y");
        assert_eq!(method.parameters[0].type_name(), Some("int"));
        assert_eq!(method.variables.len(), 1);
        assert_eq!(method.variables[0].name, "z");
        assert_eq!(method.variables[0].type_name(), Some("int"));
    }

    #[test]
    fn test_extract_fast_config_skips_locals() {
        let mut registry = ClassRegistry::new();
        extract("class A { void m() { int z; } }", &mut registry, &ParserConfig::fast());
        let method = &registry.get("A").unwrap().methods[0];
        assert!(method.variables.is_empty());
    }

    #[test]
    fn test_extract_empty_source() {
        let mut registry = ClassRegistry::new();
        assert!(extract("", &mut registry, &ParserConfig::default()).is_empty());
        assert!(extract("   // nothing here\n", &mut registry, &ParserConfig::default()).is_empty());
        assert!(registry.is_empty());
    }
}
