//! CLI binary `notereel-bullets`.
//!
//! A thin shim over the library: maps flags to `SummaryOptions`, runs the
//! text half of the pipeline, and prints one bullet per line.

use anyhow::{Context, Result};
use clap::Parser;
use notereel::SummaryOptions;
use std::io;
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = r#"EXAMPLES:
  # Bullets from plain-text notes
  notereel-bullets --src notes.txt

  # From a PDF, tighter summary
  notereel-bullets --src lecture.pdf --bullets 5 --maxlen 80

OUTPUT:
  One bullet per line, each prefixed with "- ". Inputs with no usable
  sentences produce a single fallback bullet rather than failing.
"#;

/// Extract short bullet statements from a notes file.
#[derive(Parser, Debug)]
#[command(
    name = "notereel-bullets",
    version,
    about = "Extract short bullet statements from study notes (.txt or .pdf)",
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Path to the notes file (.pdf or .txt).
    #[arg(long, env = "NOTEREEL_SRC")]
    src: String,

    /// Max number of bullets.
    #[arg(long, env = "NOTEREEL_BULLETS", default_value_t = 7,
          value_parser = clap::value_parser!(u32).range(1..))]
    bullets: u32,

    /// Max characters per bullet.
    #[arg(long, env = "NOTEREEL_MAXLEN", default_value_t = 120,
          value_parser = clap::value_parser!(u32).range(1..))]
    maxlen: u32,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "NOTEREEL_VERBOSE")]
    verbose: bool,

    /// Suppress all logs except errors.
    #[arg(short, long, env = "NOTEREEL_QUIET")]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_writer(io::stderr)
        .init();

    let opts = SummaryOptions::builder()
        .max_bullets(cli.bullets as usize)
        .max_len(cli.maxlen as usize)
        .build()
        .context("Invalid summary options")?;

    let bullets = notereel::summarize(&cli.src, &opts).context("Bullet extraction failed")?;
    for b in &bullets {
        println!("- {b}");
    }

    Ok(())
}
