//! Export module for handing the registry to external viewers.
//!
//! Supports:
//! - **Text**: the diagnostic per-record listing
//! - **JSON**: records and relations for web-based tools
//! - **DOT**: Graphviz class diagrams

pub mod dot;
pub mod json;
pub mod text;

pub use dot::{export_dot, export_dot_styled, DotOptions};
pub use json::{export_json, to_json_value};
pub use text::{export_text, render_record};
