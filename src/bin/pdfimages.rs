//! CLI binary for pdfimages.
//!
//! A thin shim over the library crate that maps CLI flags to the pipeline
//! options and prints results.

use anyhow::{Context, Result};
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use pdfimages::pipeline::input;
use pdfimages::{
    images_to_pdf, pdf_to_images, supported_write_formats, AssembleOptions, ColorMode,
    PageProgress, ProgressHook, RenderOptions, DEFAULT_DPI, DEFAULT_FORMAT,
};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

// ── CLI progress hook using indicatif ────────────────────────────────────────

/// Terminal progress hook: renders a live progress bar as pages are
/// rendered or images are appended.
struct CliProgress {
    bar: ProgressBar,
    /// Noun for the bar's counter line ("pages" or "images").
    noun: &'static str,
}

impl CliProgress {
    /// Create a hook whose progress-bar length is set by `on_start` once the
    /// item count is known.
    fn new(noun: &'static str) -> Arc<Self> {
        let bar = ProgressBar::new(0); // length set in on_start

        let spinner_style = ProgressStyle::with_template("{spinner:.cyan} {prefix:.bold}  {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        bar.set_style(spinner_style);
        bar.set_prefix("Preparing");
        bar.enable_steady_tick(Duration::from_millis(80));

        Arc::new(Self { bar, noun })
    }
}

impl PageProgress for CliProgress {
    fn on_start(&self, total: usize) {
        let progress_style = ProgressStyle::with_template(&format!(
            "{{spinner:.cyan}} {{prefix:.bold}}  \
             [{{bar:42.green/238}}] {{pos:>3}}/{{len}} {}  \
             ⏱ {{elapsed_precise}}",
            self.noun
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏  ");

        self.bar.set_length(total as u64);
        self.bar.set_style(progress_style);
        self.bar.set_prefix("Converting");
    }

    fn on_item_done(&self, _index: usize, _total: usize) {
        self.bar.inc(1);
    }

    fn on_finish(&self, completed: usize) {
        self.bar.finish_and_clear();
        eprintln!("✔ {completed} {} processed", self.noun);
    }
}

/// Convert images to a multi-page PDF and PDF pages to numbered images.
#[derive(Parser, Debug)]
#[command(
    name = "pdfimages",
    version,
    about = "Convert images to a multi-page PDF, or a PDF to numbered page images",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, global = true, env = "PDFIMAGES_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, global = true, env = "PDFIMAGES_QUIET")]
    quiet: bool,

    /// Disable the progress bar.
    #[arg(long, global = true, env = "PDFIMAGES_NO_PROGRESS")]
    no_progress: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a PDF with one page per input image, in argument order.
    Images2pdf {
        /// Input image files followed by the output PDF path (last argument).
        #[arg(required = true, num_args = 2.., value_name = "IMAGES... OUTPUT")]
        files: Vec<PathBuf>,
    },

    /// Render every page of a PDF to "{prefix}.{page}.{format}" files.
    Pdf2images {
        /// Input PDF file.
        pdf: PathBuf,

        /// Output filename prefix; defaults to the PDF's filename without
        /// its extension.
        prefix: Option<String>,

        /// Output image format.
        #[arg(short, long, default_value = DEFAULT_FORMAT)]
        format: String,

        /// Rendering resolution in dots per inch.
        #[arg(short, long, default_value_t = DEFAULT_DPI,
              value_parser = clap::value_parser!(u32).range(1..))]
        dpi: u32,

        /// Pixel format of the rendered images.
        #[arg(short = 't', long = "type", value_enum, default_value_t = ColorArg::Rgb)]
        color: ColorArg,
    },
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum ColorArg {
    Rgb,
    Gray,
    Argb,
}

impl From<ColorArg> for ColorMode {
    fn from(v: ColorArg) -> Self {
        match v {
            ColorArg::Rgb => ColorMode::Rgb,
            ColorArg::Gray => ColorMode::Gray,
            ColorArg::Argb => ColorMode::Argb,
        }
    }
}

/// Build the long-help appendix, enumerating what the compiled-in codecs
/// actually support. Defaults are marked so `--help` stays the single source
/// of truth for them.
fn after_help() -> String {
    let formats = supported_write_formats()
        .iter()
        .map(|ext| {
            if *ext == DEFAULT_FORMAT {
                format!("{ext} (default)")
            } else {
                (*ext).to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(", ");

    let colors = ColorMode::ALL
        .iter()
        .map(|mode| {
            if *mode == ColorMode::default() {
                format!("{mode} (default)")
            } else {
                mode.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "EXAMPLES:\n\
         \x20 # Three scans into one PDF (output path comes last)\n\
         \x20 pdfimages images2pdf scan1.png scan2.png scan3.png scans.pdf\n\n\
         \x20 # Burst a PDF into report.0.jpg, report.1.jpg, ...\n\
         \x20 pdfimages pdf2images report.pdf\n\n\
         \x20 # Grayscale PNGs at 300 dpi with a custom prefix\n\
         \x20 pdfimages pdf2images --format png --dpi 300 --type gray report.pdf out/page\n\n\
         OUTPUT FORMATS:\n\
         \x20 {formats}\n\n\
         COLOR MODES:\n\
         \x20 {colors}\n\n\
         PDFIUM:\n\
         \x20 The pdfium shared library must be available: either next to the\n\
         \x20 executable or installed system-wide on the loader path."
    )
}

fn main() -> Result<()> {
    // The supported-format list is probed from the compiled-in encoders, so
    // the help text is assembled at runtime rather than from a const.
    let matches = Cli::command().after_long_help(after_help()).get_matches();
    let cli = Cli::from_arg_matches(&matches).context("Failed to parse arguments")?;

    // ── Logging setup ────────────────────────────────────────────────────
    // Suppress INFO-level library logs when the progress bar is active; the
    // bar provides the feedback that matters to the user.
    let show_progress = !cli.quiet && !cli.no_progress;
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet || show_progress {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Command::Images2pdf { files } => run_images2pdf(files, show_progress, cli.quiet),
        Command::Pdf2images {
            pdf,
            prefix,
            format,
            dpi,
            color,
        } => run_pdf2images(pdf, prefix, &format, dpi, color, show_progress, cli.quiet),
    }
}

fn run_images2pdf(mut files: Vec<PathBuf>, show_progress: bool, quiet: bool) -> Result<()> {
    // clap guarantees num_args 2.., so the pop always succeeds.
    let output = files.pop().context("Missing output PDF path")?;
    let inputs = files;

    // Eager validation: every argument is checked before any page is built.
    for path in &inputs {
        input::ensure_readable(path)?;
        input::probe_image(path)?;
    }
    input::ensure_fresh_output(&output)?;

    let options = if show_progress {
        AssembleOptions::with_progress(CliProgress::new("images") as ProgressHook)
    } else {
        AssembleOptions::default()
    };

    images_to_pdf(&output, &inputs, &options).context("Conversion failed")?;

    if !quiet && !show_progress {
        eprintln!("Wrote {} pages to {}", inputs.len(), output.display());
    }
    Ok(())
}

fn run_pdf2images(
    pdf: PathBuf,
    prefix: Option<String>,
    format: &str,
    dpi: u32,
    color: ColorArg,
    show_progress: bool,
    quiet: bool,
) -> Result<()> {
    input::ensure_readable(&pdf)?;
    input::ensure_pdf(&pdf)?;

    let prefix = prefix.unwrap_or_else(|| input::file_stem(&pdf));

    // Builder validation covers --format and --dpi before the document is
    // even opened, so a typo fails fast.
    let mut builder = RenderOptions::builder()
        .dpi(dpi)
        .format(format)?
        .color(color.into());
    if show_progress {
        builder = builder.progress(CliProgress::new("pages") as ProgressHook);
    }
    let options = builder.build()?;

    let written = pdf_to_images(&pdf, &prefix, &options).context("Conversion failed")?;

    if !quiet && !show_progress {
        eprintln!("Wrote {written} image files with prefix '{prefix}'");
    }
    Ok(())
}
