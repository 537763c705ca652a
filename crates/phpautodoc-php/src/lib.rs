//! # phpautodoc-php
//!
//! PHP front end for phpautodoc - parses PHP source with tree-sitter-php and
//! lowers the syntax tree into the declaration tree used for documentation.
//!
//! ## Features
//!
//! - Functions, classes, methods and property groups with their parameters
//! - Comments kept as siblings, in source order, so doc blocks can be paired
//!   with the declaration that follows them
//! - Syntax errors reported with the position of the first bad node
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use phpautodoc_php::{PhpParser, SourceParser};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let parser = PhpParser::new();
//! let tree = parser.parse_file(Path::new("index.php"))?;
//! println!("Parsed {} top-level declarations", tree.len());
//! # Ok(())
//! # }
//! ```

mod extractor;
mod lowering;
mod parser_impl;

// Re-export parser-api types for convenience
pub use phpautodoc_api::{Declaration, ParserError, ParserMetrics, SourceParser};

pub use extractor::extract;
pub use parser_impl::PhpParser;
