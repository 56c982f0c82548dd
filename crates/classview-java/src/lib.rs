//! # classview-java
//!
//! Java parser for classview - extracts types, members and signatures from Java
//! source without a compiler front end.
//!
//! ## Features
//!
//! - Classes, interfaces and enums, including nested and local types
//! - Fields, enum constants, methods and constructors with their parameters
//! - Local variables declared in method bodies
//! - Imports and enclosing types kept for later name resolution
//!
//! Parsing is best effort: comments, string literals, initializers and anything
//! else that does not look like a declaration is skipped, never reported as an error.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use classview::ClassRegistry;
//! use classview_java::JavaParser;
//! use classview_parser_api::CodeParser;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut registry = ClassRegistry::new();
//! let parser = JavaParser::new();
//!
//! let project = parser.parse_path(Path::new("src/main/java"), &mut registry)?;
//! println!("Parsed {} types from {} files", project.total_classes, project.files.len());
//! # Ok(())
//! # }
//! ```

mod extractor;
mod interpreter;
mod keywords;
mod parser_impl;
pub mod scanner;
pub mod scope;

// Re-export parser-api types for convenience
pub use classview_parser_api::{
    CodeParser, FileInfo, ParserConfig, ParserError, ParserMetrics, ProjectInfo,
};

pub use extractor::extract;
pub use interpreter::ParseSession;
pub use keywords::{is_identifier, IGNORED_KEYWORDS};
// Export the Java parser implementation
pub use parser_impl::JavaParser;
