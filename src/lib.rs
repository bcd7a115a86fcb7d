//! # pdfimages
//!
//! Convert a set of images into a multi-page PDF, or burst a PDF into one
//! numbered image file per page.
//!
//! ## Pipeline Overview
//!
//! ```text
//! images2pdf                              pdf2images
//!  │                                       │
//!  ├─ 1. Validate  every input is an       ├─ 1. Validate  input is a PDF,
//!  │               image, output is fresh  │               prefix dir exists
//!  ├─ 2. Decode    each image in order     ├─ 2. Open      load via pdfium
//!  ├─ 3. Fit       scale to a Letter page  ├─ 3. Render    one page at a time
//!  │               (612×792 pt, no upscale)│               at the requested DPI
//!  ├─ 4. Embed     one page per image      ├─ 4. Encode    {prefix}.{NNN}.{fmt}
//!  └─ 5. Save      temp file + rename      └─             zero-padded, ordered
//! ```
//!
//! Validation runs before any conversion work, so a bad argument never leaves
//! partial output behind. images2pdf additionally serialises through a
//! temp-file rename, so a mid-run failure produces no output file at all.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pdfimages::{images_to_pdf, pdf_to_images, AssembleOptions, RenderOptions};
//! use std::path::{Path, PathBuf};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Scans → one PDF, one page per image.
//!     let scans = vec![PathBuf::from("a.png"), PathBuf::from("b.jpg")];
//!     images_to_pdf(Path::new("scans.pdf"), &scans, &AssembleOptions::default())?;
//!
//!     // PDF → scans.0.png, scans.1.png, …
//!     let options = RenderOptions::builder().dpi(300).format("png")?.build()?;
//!     let written = pdf_to_images(Path::new("scans.pdf"), "scans", &options)?;
//!     eprintln!("wrote {written} pages");
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `pdfimages` binary (clap + anyhow + indicatif + tracing-subscriber) |
//!
//! Disable `cli` when using only the library to avoid pulling in CLI-only deps:
//! ```toml
//! pdfimages = { version = "0.1", default-features = false }
//! ```
//!
//! ## PDFium
//!
//! Rendering and assembly go through the pdfium shared library. At startup
//! the crate binds to a copy placed next to the executable, falling back to
//! the system loader path; see [`PdfImagesError::PdfiumBindingFailed`] for
//! the failure mode when neither is present.

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod error;
pub mod fit;
pub mod pipeline;
pub mod progress;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{
    supported_write_formats, AssembleOptions, ColorMode, OutputFormat, RenderOptions,
    RenderOptionsBuilder, DEFAULT_DPI, DEFAULT_FORMAT,
};
pub use error::{ErrorKind, PdfImagesError};
pub use fit::fit_to_boundary;
pub use pipeline::assemble::images_to_pdf;
pub use pipeline::render::{index_pad_width, pdf_to_images};
pub use progress::{NoopProgress, PageProgress, ProgressHook};
