//! Implementation of the SourceParser trait for PHP

use log::debug;
use phpautodoc_api::{Declaration, ParserError, ParserMetrics, SourceParser};
use std::path::Path;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

/// PHP language parser implementing the SourceParser trait
pub struct PhpParser {
    metrics: Mutex<ParserMetrics>,
}

impl PhpParser {
    pub fn new() -> Self {
        Self {
            metrics: Mutex::new(ParserMetrics::default()),
        }
    }

    /// Get accumulated metrics
    pub fn metrics(&self) -> ParserMetrics {
        self.metrics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Clear accumulated metrics
    pub fn reset_metrics(&self) {
        *self.metrics.lock().unwrap_or_else(PoisonError::into_inner) = ParserMetrics::default();
    }

    fn update_metrics(&self, success: bool, duration: Duration, declarations: usize) {
        self.metrics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .record(success, duration, declarations);
    }
}

impl Default for PhpParser {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceParser for PhpParser {
    fn language(&self) -> &str {
        "php"
    }

    fn file_extensions(&self) -> &[&str] {
        &[".php", ".phtml", ".inc"]
    }

    fn parse_source(
        &self,
        source: &str,
        file_path: &Path,
    ) -> Result<Vec<Declaration>, ParserError> {
        let start = Instant::now();
        let result = crate::extractor::extract(source, file_path);
        let duration = start.elapsed();

        match &result {
            Ok(tree) => {
                let count = tree.iter().map(Declaration::node_count).sum();
                debug!(
                    "Parsed {} in {}ms ({} declarations)",
                    file_path.display(),
                    duration.as_millis(),
                    count
                );
                self.update_metrics(true, duration, count);
            }
            Err(e) => {
                debug!("Failed to parse {}: {}", file_path.display(), e);
                self.update_metrics(false, duration, 0);
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_and_extensions() {
        let parser = PhpParser::new();
        assert_eq!(parser.language(), "php");
        assert!(parser.can_parse(Path::new("src/index.php")));
        assert!(parser.can_parse(Path::new("view.phtml")));
        assert!(!parser.can_parse(Path::new("main.rs")));
    }

    #[test]
    fn test_metrics_track_success_and_failure() {
        let parser = PhpParser::new();

        parser
            .parse_source("<?php\nclass A { public function b() {} }", Path::new("a.php"))
            .unwrap();
        assert!(parser
            .parse_source("<?php\nclass {", Path::new("bad.php"))
            .is_err());

        let metrics = parser.metrics();
        assert_eq!(metrics.files_attempted, 2);
        assert_eq!(metrics.files_succeeded, 1);
        assert_eq!(metrics.files_failed, 1);
        assert_eq!(metrics.total_declarations, 2);

        parser.reset_metrics();
        assert_eq!(parser.metrics(), ParserMetrics::default());
    }
}
