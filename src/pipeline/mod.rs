//! Pipeline stages for the two conversion directions.
//!
//! Each submodule implements exactly one transformation step. Keeping stages
//! separate makes each independently testable and lets us swap the rendering
//! backend without touching validation or assembly.
//!
//! ## Data flow
//!
//! ```text
//! images2pdf:  input ──▶ decode ──▶ fit ──▶ embed ──▶ save (atomic)
//! pdf2images:  input ──▶ open ──▶ render page i ──▶ encode file i  (streaming)
//! ```
//!
//! 1. [`input`]    — readability checks and content probing, run eagerly
//! 2. [`assemble`] — build an N-page document from N images (grows in memory,
//!    serialises once at the end)
//! 3. [`render`]   — rasterise every page to a numbered file, one page
//!    resident at a time

pub mod assemble;
pub mod input;
pub mod render;

use crate::error::PdfImagesError;
use pdfium_render::prelude::*;

/// Bind to a pdfium library: first one next to the executable, then the
/// system-wide copy.
pub(crate) fn bind_pdfium() -> Result<Pdfium, PdfImagesError> {
    Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
        .or_else(|_| Pdfium::bind_to_system_library())
        .map(Pdfium::new)
        .map_err(|e| PdfImagesError::PdfiumBindingFailed(format!("{e:?}")))
}
