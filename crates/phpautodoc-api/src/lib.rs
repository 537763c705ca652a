//! phpautodoc parser API
//!
//! Shared types for turning PHP source into documentation markup.
//!
//! This crate defines:
//!
//! - **Declaration tree**: the closed set of node kinds the documentation
//!   extractor understands ([`Declaration`])
//! - **SourceParser trait**: the interface a language parser implements to
//!   produce that tree
//! - **Configuration**: the output domain label
//! - **Metrics**: parse counters kept by parser implementations
//! - **Error handling**: [`ParserError`]
//!
//! # Example
//!
//! ```rust,ignore
//! use phpautodoc_api::{Declaration, ParserResult, SourceParser};
//! use std::path::Path;
//!
//! struct MyParser;
//!
//! impl SourceParser for MyParser {
//!     fn language(&self) -> &str {
//!         "php"
//!     }
//!
//!     fn file_extensions(&self) -> &[&str] {
//!         &[".php"]
//!     }
//!
//!     fn parse_source(&self, source: &str, file_path: &Path) -> ParserResult<Vec<Declaration>> {
//!         todo!()
//!     }
//! }
//! ```

pub mod ast;
pub mod config;
pub mod errors;
pub mod metrics;
pub mod traits;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use ast::{
    ArrayElement, Class, ClassVariableGroup, Comment, Declaration, Expr, Function, Other,
    Parameter,
};
pub use config::AutodocConfig;
pub use errors::{ParserError, ParserResult};
pub use metrics::ParserMetrics;
pub use traits::SourceParser;
