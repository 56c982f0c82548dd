//! DOT format export for Graphviz visualization.
//!
//! One node per registered record, labelled with its kind and full name, and one edge
//! per derived relation.

use crate::model::ClassKind;
use crate::registry::ClassRegistry;
use crate::relations::{derive_relations, RelationKind};
use std::collections::HashMap;

/// Options for styling DOT export
#[derive(Debug, Clone)]
pub struct DotOptions {
    /// Node fill colors by record kind (hex color codes)
    pub node_colors: HashMap<ClassKind, String>,
    /// Edge styles by relation kind (Graphviz edge attributes)
    pub edge_styles: HashMap<RelationKind, String>,
    /// Graph layout direction: LR, TB, RL, BT
    pub rankdir: String,
    /// List members inside the node label
    pub show_members: bool,
}

impl Default for DotOptions {
    fn default() -> Self {
        let mut node_colors = HashMap::new();
        node_colors.insert(ClassKind::Class, "#FFE082".to_string());
        node_colors.insert(ClassKind::Interface, "#FFAB91".to_string());
        node_colors.insert(ClassKind::Enum, "#CE93D8".to_string());

        let mut edge_styles = HashMap::new();
        edge_styles.insert(RelationKind::Generalization, "arrowhead=empty".to_string());
        edge_styles.insert(
            RelationKind::Realization,
            "arrowhead=empty, style=dashed".to_string(),
        );
        edge_styles.insert(RelationKind::Association, "arrowhead=vee".to_string());
        edge_styles.insert(
            RelationKind::Dependency,
            "arrowhead=vee, style=dashed".to_string(),
        );

        DotOptions {
            node_colors,
            edge_styles,
            rankdir: "BT".to_string(),
            show_members: false,
        }
    }
}

/// Export registry to Graphviz DOT format
pub fn export_dot(registry: &ClassRegistry) -> String {
    export_dot_styled(registry, &DotOptions::default())
}

/// Export registry to Graphviz DOT format with custom styling
pub fn export_dot_styled(registry: &ClassRegistry, options: &DotOptions) -> String {
    let mut output = String::new();

    output.push_str("digraph class_view {\n");
    output.push_str(&format!("    rankdir={};\n", options.rankdir));
    output.push_str("    node [shape=box, style=filled];\n\n");

    let mut ids = HashMap::new();
    for (i, record) in registry.iter().enumerate() {
        let full_name = record.full_name();
        let mut label = format!("«{}»\\n{}", record.kind, escape_dot_label(&full_name));
        if options.show_members {
            for field in &record.fields {
                label.push_str(&format!("\\l{}", escape_dot_label(&field.to_string())));
            }
            for method in &record.methods {
                label.push_str(&format!("\\l{}", escape_dot_label(&method.to_string())));
            }
            label.push_str("\\l");
        }
        let color = options
            .node_colors
            .get(&record.kind)
            .map(|s| s.as_str())
            .unwrap_or("#FFFFFF");

        output.push_str(&format!(
            "    n{i} [label=\"{label}\", fillcolor=\"{color}\"];\n"
        ));
        ids.insert(full_name, i);
    }

    output.push('\n');

    for relation in derive_relations(registry) {
        let (Some(from), Some(to)) = (ids.get(&relation.from), ids.get(&relation.to)) else {
            continue;
        };
        let style = options
            .edge_styles
            .get(&relation.kind)
            .map(|s| format!(", {s}"))
            .unwrap_or_default();
        output.push_str(&format!(
            "    n{from} -> n{to} [label=\"{}\"{style}];\n",
            relation.kind
        ));
    }

    output.push_str("}\n");
    output
}

/// Escape special characters for DOT labels
fn escape_dot_label(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('<', "\\<")
        .replace('>', "\\>")
        .replace('\n', "\\n")
}
