use crate::{ast::Declaration, errors::ParserError};
use std::path::Path;

/// Interface between the documentation extractor and a language parser.
///
/// The parser is treated as a black box: given the full text of one source
/// file it returns the top-level declarations in source order, or fails.
/// No partial trees are returned.
pub trait SourceParser {
    /// Returns the language identifier (lowercase, e.g. "php")
    fn language(&self) -> &str;

    /// Returns supported file extensions (e.g. [".php"])
    fn file_extensions(&self) -> &[&str];

    /// Parse source text into its top-level declarations.
    ///
    /// `file_path` is only used for error reporting.
    fn parse_source(
        &self,
        source: &str,
        file_path: &Path,
    ) -> Result<Vec<Declaration>, ParserError>;

    /// Read and parse a file from disk
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD.
    fn parse_file(&self, path: &Path) -> Result<Vec<Declaration>, ParserError> {
        let bytes =
            std::fs::read(path).map_err(|e| ParserError::IoError(path.to_path_buf(), e))?;
        self.parse_source(&String::from_utf8_lossy(&bytes), path)
    }

    /// Check if this parser can handle the given file
    ///
    /// Default implementation checks file extension.
    fn can_parse(&self, path: &Path) -> bool {
        if let Some(ext) = path.extension() {
            let ext_str = format!(".{}", ext.to_string_lossy());
            self.file_extensions().contains(&ext_str.as_str())
        } else {
            false
        }
    }
}
