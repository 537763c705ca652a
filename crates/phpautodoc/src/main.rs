//! phpautodoc: print the directive markup for one PHP file.
//!
//! `phpautodoc --srcdir docs lib/classes.php` behaves like the directive
//! `.. phpautodoc:: lib/classes.php` in a document under `docs`.
//!
//! Diagnostics go to stderr. `RUST_LOG` overrides the level picked by
//! `--verbose`.

use anyhow::{Context, Result};
use clap::Parser;
use phpautodoc::{render_lines, AutodocConfig, AutodocDirective, LocalEnvironment};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "phpautodoc",
    about = "Generate reStructuredText directives from PHP doc comments"
)]
struct Cli {
    /// PHP file, relative to --srcdir
    file: String,

    /// Source root the file is resolved against
    #[arg(short = 's', long, default_value = ".")]
    srcdir: PathBuf,

    /// Directory for cached parse results
    #[arg(short = 'd', long, default_value = "_build/doctrees")]
    doctree: PathBuf,

    /// Directive domain written into every header
    #[arg(long, default_value = "php")]
    domain: String,

    /// Print the registered dependencies to stderr
    #[arg(long)]
    deps: bool,

    /// Log more detail (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Route `log` records through a stderr subscriber.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // try_init also installs the `log` bridge
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = AutodocConfig::default().with_domain(cli.domain);
    let directive = AutodocDirective::with_config(config);
    let mut env = LocalEnvironment::new(&cli.srcdir, &cli.doctree);

    let lines = directive
        .run(&cli.file, &mut env)
        .with_context(|| format!("failed to document {}", cli.file))?;

    if cli.deps {
        for dep in env.dependencies() {
            eprintln!("depends on {}", dep.display());
        }
    }

    if !lines.is_empty() {
        println!("{}", render_lines(&lines));
    }
    Ok(())
}
