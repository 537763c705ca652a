//! The `phpautodoc` directive: one PHP file in, directive markup out.

use crate::cache::ParseCache;
use crate::error::Result;
use crate::traverser::traverse;
use crate::writer::{DocumentWriter, OutputLine};
use log::info;
use phpautodoc_api::{AutodocConfig, SourceParser};
use phpautodoc_php::PhpParser;
use std::path::{Path, PathBuf};

/// The documentation engine hosting the directive.
pub trait BuildEnvironment {
    /// Root that directive arguments are resolved against
    fn srcdir(&self) -> &Path;

    /// Private directory where parse results are cached
    fn doctreedir(&self) -> &Path;

    /// Record that the current document must be rebuilt when `path` changes
    fn note_dependency(&mut self, path: &Path);
}

/// A [`BuildEnvironment`] backed by two plain directories.
#[derive(Debug, Clone)]
pub struct LocalEnvironment {
    srcdir: PathBuf,
    doctreedir: PathBuf,
    dependencies: Vec<PathBuf>,
}

impl LocalEnvironment {
    pub fn new(srcdir: impl Into<PathBuf>, doctreedir: impl Into<PathBuf>) -> Self {
        Self {
            srcdir: srcdir.into(),
            doctreedir: doctreedir.into(),
            dependencies: Vec::new(),
        }
    }

    /// Dependencies noted so far, in registration order
    pub fn dependencies(&self) -> &[PathBuf] {
        &self.dependencies
    }
}

impl BuildEnvironment for LocalEnvironment {
    fn srcdir(&self) -> &Path {
        &self.srcdir
    }

    fn doctreedir(&self) -> &Path {
        &self.doctreedir
    }

    fn note_dependency(&mut self, path: &Path) {
        self.dependencies.push(path.to_path_buf());
    }
}

/// Extracts documentation for the file named by the directive argument.
pub struct AutodocDirective<P = PhpParser> {
    config: AutodocConfig,
    parser: P,
}

impl AutodocDirective<PhpParser> {
    pub fn new() -> Self {
        Self::with_config(AutodocConfig::default())
    }

    pub fn with_config(config: AutodocConfig) -> Self {
        Self::with_parser(config, PhpParser::new())
    }
}

impl Default for AutodocDirective<PhpParser> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: SourceParser> AutodocDirective<P> {
    pub fn with_parser(config: AutodocConfig, parser: P) -> Self {
        Self { config, parser }
    }

    pub fn parser(&self) -> &P {
        &self.parser
    }

    /// Run the directive for `argument`, a path relative to the source root.
    ///
    /// The resolved file is registered as a dependency before it is read, so
    /// a document whose source fails to parse is still rebuilt once the file
    /// changes.
    pub fn run(
        &self,
        argument: &str,
        env: &mut dyn BuildEnvironment,
    ) -> Result<Vec<OutputLine>> {
        let path = env.srcdir().join(argument);
        env.note_dependency(&path);

        let cache = ParseCache::new(env.doctreedir(), &self.parser);
        let declarations = cache.get_or_parse(&path)?;

        let mut writer = DocumentWriter::new(&self.config);
        let entries = traverse(&declarations, &mut writer);

        info!(
            "Extracted {} entries ({} lines) of {} markup from {}",
            entries,
            writer.len(),
            self.config.domain,
            path.display()
        );
        Ok(writer.into_lines())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AutodocError;
    use crate::writer::render_lines;
    use std::fs;
    use tempfile::TempDir;

    fn setup(name: &str, content: &str) -> (TempDir, TempDir, LocalEnvironment) {
        let src = TempDir::new().unwrap();
        let doctree = TempDir::new().unwrap();
        fs::write(src.path().join(name), content).unwrap();
        let env = LocalEnvironment::new(src.path(), doctree.path().join("doctrees"));
        (src, doctree, env)
    }

    #[test]
    fn test_run_end_to_end() {
        let (_src, _doctree, mut env) =
            setup("add.php", "<?php\n/** Adds two numbers */\nfunction add($a, $b) {}\n");
        let directive = AutodocDirective::new();

        let lines = directive.run("add.php", &mut env).unwrap();
        let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();

        assert_eq!(
            texts,
            vec![".. php:function:: add($a, $b)", "", "   Adds two numbers", ""]
        );
    }

    #[test]
    fn test_run_registers_dependency_once() {
        let (src, _doctree, mut env) = setup("a.php", "<?php\nfunction a() {}\n");
        let directive = AutodocDirective::new();

        directive.run("a.php", &mut env).unwrap();

        assert_eq!(env.dependencies(), &[src.path().join("a.php")]);
    }

    #[test]
    fn test_run_uses_configured_domain() {
        let (_src, _doctree, mut env) = setup("a.php", "<?php\nclass A {}\n");
        let directive = AutodocDirective::with_config(AutodocConfig::default().with_domain("hh"));

        let lines = directive.run("a.php", &mut env).unwrap();
        assert_eq!(lines[0].text, ".. hh:class:: A");
    }

    #[test]
    fn test_run_is_idempotent_across_cache() {
        let (_src, doctree, mut env) = setup(
            "greet.php",
            "<?php\n/**\n * Greets.\n */\nfunction greet($who = 'world') {}\n",
        );
        let directive = AutodocDirective::new();

        let first = render_lines(&directive.run("greet.php", &mut env).unwrap());
        assert!(doctree.path().join("doctrees/greet.php.parse").exists());
        let second = render_lines(&directive.run("greet.php", &mut env).unwrap());

        assert_eq!(first, second);
        assert_eq!(directive.parser().metrics().files_attempted, 1);
    }

    #[test]
    fn test_run_parse_failure_yields_no_output() {
        let (_src, _doctree, mut env) = setup("bad.php", "<?php\nclass {\n");
        let directive = AutodocDirective::new();

        let result = directive.run("bad.php", &mut env);
        assert!(matches!(result, Err(AutodocError::Parse(_))));
        assert_eq!(env.dependencies().len(), 1);
    }

    #[test]
    fn test_run_accepts_latin1_source() {
        let src = TempDir::new().unwrap();
        let doctree = TempDir::new().unwrap();
        fs::write(
            src.path().join("legacy.php"),
            b"<?php\n/** R\xe9sum\xe9 of the order */\nfunction resume() {}\n",
        )
        .unwrap();
        let mut env = LocalEnvironment::new(src.path(), doctree.path());
        let directive = AutodocDirective::new();

        let lines = directive.run("legacy.php", &mut env).unwrap();
        let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();

        assert_eq!(
            texts,
            vec![
                ".. php:function:: resume",
                "",
                "   R\u{FFFD}sum\u{FFFD} of the order",
                ""
            ]
        );
    }

    #[test]
    fn test_run_missing_file() {
        let (_src, _doctree, mut env) = setup("a.php", "<?php\n");
        let directive = AutodocDirective::new();

        let result = directive.run("nope.php", &mut env);
        assert!(matches!(result, Err(AutodocError::Io { .. })));
    }
}
