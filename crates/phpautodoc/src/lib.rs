//! # phpautodoc
//!
//! Generates reStructuredText directive markup from PHP doc comments.
//!
//! A PHP file is parsed (through a small on-disk cache) into a declaration
//! tree. Every function, class, method and property is written as a
//! `.. php:<kind>:: <signature>` directive, followed by the text of the
//! `/** ... */` comment that immediately precedes it. Declarations whose doc
//! comment carries `@access private` are left out; for a class this also
//! hides its members.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use phpautodoc::{render_lines, AutodocDirective, LocalEnvironment};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut env = LocalEnvironment::new("docs/src", "docs/_build/doctrees");
//! let directive = AutodocDirective::new();
//!
//! let lines = directive.run("lib/classes.php", &mut env)?;
//! println!("{}", render_lines(&lines));
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod comment;
pub mod directive;
pub mod error;
pub mod signature;
pub mod traverser;
pub mod writer;

pub use cache::ParseCache;
pub use comment::{is_documentation_comment, is_private, render_comment_lines, CommentLines};
pub use directive::{AutodocDirective, BuildEnvironment, LocalEnvironment};
pub use error::{AutodocError, Result};
pub use signature::{format_signature, Signature};
pub use traverser::traverse;
pub use writer::{render_lines, DocumentWriter, EntryKind, OutputLine, INDENT_UNIT, SOURCE_LABEL};

// Re-export parser-api types for convenience
pub use phpautodoc_api::{AutodocConfig, Declaration, ParserError, SourceParser};
pub use phpautodoc_php::PhpParser;
