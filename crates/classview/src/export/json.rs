//! JSON export for web-based diagram viewers.
//!
//! Produces `{"classes": [...], "relations": [...]}` where each class carries its
//! full name alongside the record's own fields.

use crate::error::{RegistryError, Result};
use crate::registry::ClassRegistry;
use crate::relations::derive_relations;
use serde_json::{json, Value};

/// Export all records and derived relations as pretty-printed JSON.
pub fn export_json(registry: &ClassRegistry) -> Result<String> {
    let value = to_json_value(registry)?;
    serde_json::to_string_pretty(&value)
        .map_err(|e| RegistryError::serialization("Failed to serialize registry", Some(e)))
}

/// Build the JSON document without formatting it.
pub fn to_json_value(registry: &ClassRegistry) -> Result<Value> {
    let mut classes = Vec::with_capacity(registry.len());
    for record in registry {
        let mut value = serde_json::to_value(record)
            .map_err(|e| RegistryError::serialization("Failed to serialize class record", Some(e)))?;
        if let Value::Object(map) = &mut value {
            map.insert("full_name".to_string(), Value::String(record.full_name()));
        }
        classes.push(value);
    }

    let relations = serde_json::to_value(derive_relations(registry))
        .map_err(|e| RegistryError::serialization("Failed to serialize relations", Some(e)))?;

    Ok(json!({
        "classes": classes,
        "relations": relations,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::ClassBuilder;
    use crate::model::{Accessibility, ClassKind};

    #[test]
    fn test_export_json_shape() {
        let mut registry = ClassRegistry::new();
        let mut user = ClassBuilder::new("app.User", ClassKind::Class);
        user.set_super_class_name("Base");
        user.add_field(Accessibility::Private, "id", Some("long".into()), true, false);
        registry.register(user.build()).unwrap();
        registry
            .register(ClassBuilder::new("app.Base", ClassKind::Class).build())
            .unwrap();

        let value = to_json_value(&registry).unwrap();
        let classes = value["classes"].as_array().unwrap();
        assert_eq!(classes.len(), 2);
        assert_eq!(classes[0]["full_name"], "app.User");
        assert_eq!(classes[0]["kind"], "class");
        assert_eq!(classes[0]["fields"][0]["name"], "id");
        assert_eq!(classes[0]["fields"][0]["accessibility"], "private");
        assert_eq!(value["relations"][0]["kind"], "generalization");
        assert_eq!(value["relations"][0]["to"], "app.Base");

        let text = export_json(&registry).unwrap();
        assert!(text.contains("\"full_name\": \"app.Base\""));
    }
}
