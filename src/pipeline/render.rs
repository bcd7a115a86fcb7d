//! pdf2images: render every page of a PDF to a numbered image file.
//!
//! ## Why scale by page width, not a fixed pixel target?
//!
//! pdfium's render config takes a target size in pixels, but callers think in
//! DPI. A page is `width_pt / 72` inches wide, so rendering at `dpi` means a
//! target width of `width_pt * dpi / 72` pixels; the height follows from the
//! page's own aspect ratio, giving a uniform resolution in both axes.
//!
//! ## Memory profile
//!
//! This pipeline is streaming: exactly one page's raster is alive at a time.
//! Each iteration renders, converts to the requested color mode, encodes to
//! disk, and drops the raster before touching the next page.

use crate::config::RenderOptions;
use crate::error::PdfImagesError;
use crate::pipeline::bind_pdfium;
use pdfium_render::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Digits needed to zero-pad a 0-based page index so that lexicographic
/// filename order matches page order.
///
/// Integer form of `max(1, ceil(log10(page_count)))`: one digit covers up to
/// 10 pages (indices 0..9), two digits up to 100, and so on. A zero page
/// count degenerates to one digit and nothing is rendered.
pub fn index_pad_width(page_count: usize) -> usize {
    let mut pad = 1;
    let mut limit: usize = 10;
    while page_count > limit {
        pad += 1;
        limit = limit.saturating_mul(10);
    }
    pad
}

/// Output path for one page: `"{prefix}.{index zero-padded}.{extension}"`.
pub fn page_filename(prefix: &str, index: usize, pad: usize, extension: &str) -> PathBuf {
    PathBuf::from(format!("{prefix}.{index:0pad$}.{extension}"))
}

/// Render every page of `pdf_path` to `"{prefix}.{index}.{format}"` files.
///
/// Pages are processed in order; a render or encode failure aborts the
/// remaining pages. Files already written stay on disk — there is no
/// rollback, which is acceptable for a batch tool whose outputs are cheap to
/// regenerate.
///
/// Returns the number of files written.
pub fn pdf_to_images(
    pdf_path: &Path,
    prefix: &str,
    options: &RenderOptions,
) -> Result<usize, PdfImagesError> {
    let pdfium = bind_pdfium()?;
    let document = pdfium
        .load_pdf_from_file(pdf_path, None)
        .map_err(|e| PdfImagesError::DocumentOpen {
            path: pdf_path.to_path_buf(),
            detail: format!("{e:?}"),
        })?;

    let pages = document.pages();
    let page_count = pages.len() as usize;
    let pad = index_pad_width(page_count);
    info!(
        "PDF loaded: {} pages, rendering at {} dpi as {}",
        page_count,
        options.dpi,
        options.format.extension()
    );

    if let Some(ref hook) = options.progress {
        hook.on_start(page_count);
    }

    let mut written = 0;
    for index in 0..page_count {
        let page = pages
            .get(index as u16)
            .map_err(|e| PdfImagesError::RenderFailed {
                page: index,
                detail: format!("{e:?}"),
            })?;

        // width_pt / 72 inches at the requested dpi, minimum one pixel
        let target_width = (page.width().value * options.dpi as f32 / 72.0)
            .round()
            .max(1.0) as i32;
        let render_config = PdfRenderConfig::new().set_target_width(target_width);

        let bitmap = page
            .render_with_config(&render_config)
            .map_err(|e| PdfImagesError::RenderFailed {
                page: index,
                detail: format!("{e:?}"),
            })?;

        let raster = options.color.apply(bitmap.as_image());
        let output = page_filename(prefix, index, pad, options.format.extension());
        debug!(
            "Rendered page {} → {}x{} px → {}",
            index,
            raster.width(),
            raster.height(),
            output.display()
        );

        raster
            .save_with_format(&output, options.format.image_format())
            .map_err(|source| PdfImagesError::EncodeFailed {
                path: output.clone(),
                source,
            })?;

        written += 1;
        if let Some(ref hook) = options.progress {
            hook.on_item_done(index, page_count);
        }
    }

    if let Some(ref hook) = options.progress {
        hook.on_finish(written);
    }
    info!("Wrote {} image files with prefix '{}'", written, prefix);
    Ok(written)
}
