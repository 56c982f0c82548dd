//! Plain-text diagnostic listing of records.
//!
//! ```text
//! class Circle extends Shape implements Drawable, Scalable inside Shapes
//!  - radius : double
//!  + area() : double
//!    * r : double
//! ```

use crate::model::ClassRecord;
use crate::registry::ClassRegistry;
use std::fmt::Write;

/// Render one record: header line, then fields, then methods each followed by their
/// local variables, all in declaration order.
pub fn render_record(record: &ClassRecord) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_record(&mut out, record);
    out
}

/// Render every record in registration order.
pub fn export_text(registry: &ClassRegistry) -> String {
    let mut out = String::new();
    for record in registry {
        let _ = write_record(&mut out, record);
    }
    out
}

fn write_record(out: &mut String, record: &ClassRecord) -> std::fmt::Result {
    write!(out, "{} {}", record.kind, record.name)?;
    if let Some(super_class) = &record.super_class_name {
        write!(out, " extends {super_class}")?;
    }
    if !record.interface_names.is_empty() {
        write!(out, " implements {}", record.interface_names.join(", "))?;
    }
    if let Some(outer) = &record.outer_class_name {
        write!(out, " inside {outer}")?;
    }
    out.push('\n');

    for field in &record.fields {
        writeln!(out, " {field}")?;
    }
    for method in &record.methods {
        writeln!(out, " {method}")?;
        for variable in &method.variables {
            writeln!(out, "   * {variable}")?;
        }
    }
    Ok(())
}
