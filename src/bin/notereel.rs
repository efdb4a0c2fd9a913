//! CLI binary `notereel`.
//!
//! A thin shim over the library: maps flags to `VideoOptions`, drives the
//! staged pipeline with a progress bar, and prints a confirmation line.

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use notereel::pipeline::encode;
use notereel::{FontBook, SummaryOptions, VideoOptions};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = r#"EXAMPLES:
  # Default 7 bullets, 3.5s per slide
  notereel --src notes.txt

  # A PDF, tighter summary, faster slides
  notereel --src lecture.pdf --bullets 5 --maxlen 80 --dur 2.5 --out output/lecture.mp4

OUTPUT:
  A 1080×1920, 24 fps H.264 MP4 with no audio: one static slide per
  bullet, shown back to back with no transitions.

REQUIREMENTS:
  A TrueType font on the host (DejaVu or Arial are found automatically)
  and the ffmpeg binary on PATH.
"#;

/// Turn study notes into a vertical slide video.
#[derive(Parser, Debug)]
#[command(
    name = "notereel",
    version,
    about = "Turn study notes (.txt or .pdf) into a short vertical slide video",
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Path to the notes file (.pdf or .txt).
    #[arg(long, env = "NOTEREEL_SRC")]
    src: String,

    /// Output mp4 path.
    #[arg(long, env = "NOTEREEL_OUT", default_value = "output/notereel.mp4")]
    out: PathBuf,

    /// Max number of bullets.
    #[arg(long, env = "NOTEREEL_BULLETS", default_value_t = 7,
          value_parser = clap::value_parser!(u32).range(1..))]
    bullets: u32,

    /// Max characters per bullet.
    #[arg(long, env = "NOTEREEL_MAXLEN", default_value_t = 120,
          value_parser = clap::value_parser!(u32).range(1..))]
    maxlen: u32,

    /// Seconds per slide.
    #[arg(long, env = "NOTEREEL_DUR", default_value_t = 3.5)]
    dur: f32,

    /// Disable the progress spinner.
    #[arg(long, env = "NOTEREEL_NO_PROGRESS")]
    no_progress: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "NOTEREEL_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "NOTEREEL_QUIET")]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep library logs quiet while the spinner owns the terminal.
    let show_progress = !cli.quiet && !cli.no_progress;
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet || show_progress {
        "error"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_writer(io::stderr)
        .init();

    let summary = SummaryOptions::builder()
        .max_bullets(cli.bullets as usize)
        .max_len(cli.maxlen as usize)
        .build()
        .context("Invalid summary options")?;
    let opts = VideoOptions::builder()
        .summary(summary)
        .slide_duration_secs(cli.dur)
        .build()
        .context("Invalid video options")?;

    let bar = if show_progress {
        let b = ProgressBar::new_spinner();
        b.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {prefix:.bold}  {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        b.enable_steady_tick(Duration::from_millis(80));
        Some(b)
    } else {
        None
    };
    let stage = |prefix: &str, msg: String| {
        if let Some(ref b) = bar {
            b.set_prefix(prefix.to_string());
            b.set_message(msg);
        }
    };

    // Drive the pipeline stage by stage so the spinner can narrate it.
    stage("Reading", format!("extracting text from {}", cli.src));
    let bullets = notereel::summarize(&cli.src, &opts.summary).context("Summarization failed")?;

    stage("Fonts", "resolving font fallback chain".to_string());
    let fonts = FontBook::resolve(&opts.style).context("Font resolution failed")?;

    stage("Slides", format!("composing {} slides", bullets.len()));
    let sequence = encode::assemble(
        &bullets,
        &opts.style,
        &fonts,
        opts.slide_duration_secs,
        opts.fps,
    );

    stage(
        "Encoding",
        format!("{} frames → {}", sequence.frames_per_slide() * sequence.len() as u64, cli.out.display()),
    );
    encode::write_video(&sequence, &cli.out).context("Video encoding failed")?;

    if let Some(b) = bar {
        b.finish_and_clear();
    }
    println!("Saved video to {}", cli.out.display());
    if !cli.quiet {
        eprintln!(
            "  {} slides × {:.1}s  =  {:.1}s of video",
            sequence.len(),
            opts.slide_duration_secs,
            sequence.total_duration_secs()
        );
    }

    Ok(())
}
