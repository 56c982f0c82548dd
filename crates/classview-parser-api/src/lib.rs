//! classview Parser API
//!
//! Shared trait and types for building classview language parsers.
//!
//! This crate defines:
//!
//! - **CodeParser trait**: The interface every language parser implements
//! - **Configuration**: Customizable parser behavior
//! - **Metrics**: Performance and success tracking
//! - **Error handling**: Failures around reading and feeding source text
//!
//! Parsers append finished records to a caller-owned
//! [`ClassRegistry`](classview::ClassRegistry); this crate does not care how the
//! text is scanned.
//!
//! # Example
//!
//! ```rust,ignore
//! use classview::ClassRegistry;
//! use classview_parser_api::{CodeParser, FileInfo, ParserConfig, ParserError, ParserMetrics};
//! use std::path::Path;
//!
//! struct MyParser {
//!     config: ParserConfig,
//! }
//!
//! impl CodeParser for MyParser {
//!     fn language(&self) -> &str {
//!         "mylang"
//!     }
//!
//!     fn file_extensions(&self) -> &[&str] {
//!         &[".my"]
//!     }
//!
//!     fn parse_file(&self, path: &Path, registry: &mut ClassRegistry) -> Result<FileInfo, ParserError> {
//!         todo!()
//!     }
//!
//!     fn parse_source(&self, source: &str, file_path: &Path, registry: &mut ClassRegistry)
//!         -> Result<FileInfo, ParserError> {
//!         todo!()
//!     }
//!
//!     fn config(&self) -> &ParserConfig {
//!         &self.config
//!     }
//!
//!     fn metrics(&self) -> ParserMetrics {
//!         ParserMetrics::default()
//!     }
//!
//!     fn reset_metrics(&mut self) {}
//! }
//! ```

pub mod config;
pub mod errors;
pub mod metrics;
pub mod traits;


// Re-export commonly used types
pub use config::ParserConfig;
pub use errors::{ParserError, ParserResult};
pub use metrics::ParserMetrics;
pub use traits::{CodeParser, FileInfo, ProjectInfo};
