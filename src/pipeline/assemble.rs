//! images2pdf: build a multi-page document from a list of image files.
//!
//! Each input becomes one Letter-sized page, in input order. The raster is
//! scaled to fit the page boundary (never upscaled) and placed at the page's
//! lower-left corner. The document grows in memory and is serialised exactly
//! once, via a temp-file-then-rename so a failed run never leaves a partial
//! output behind.

use crate::config::AssembleOptions;
use crate::error::PdfImagesError;
use crate::fit::{fit_to_boundary, PAGE_HEIGHT_PTS, PAGE_WIDTH_PTS};
use crate::pipeline::{bind_pdfium, input};
use pdfium_render::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Convert the images at `inputs` into a PDF at `output`, one page each.
///
/// A decode failure on any input aborts the whole call; because
/// serialisation happens last, no output file exists after a failure.
pub fn images_to_pdf(
    output: &Path,
    inputs: &[PathBuf],
    options: &AssembleOptions,
) -> Result<(), PdfImagesError> {
    if inputs.is_empty() {
        return Err(PdfImagesError::NoInputImages);
    }

    let pdfium = bind_pdfium()?;
    let mut document = pdfium
        .create_new_pdf()
        .map_err(|e| PdfImagesError::DocumentCreate {
            detail: format!("{e:?}"),
        })?;

    info!("Assembling {} images into {}", inputs.len(), output.display());
    if let Some(ref hook) = options.progress {
        hook.on_start(inputs.len());
    }

    for (index, input_path) in inputs.iter().enumerate() {
        let raster = input::decode_image(input_path)?;

        let page_size = PdfPagePaperSize::Custom(
            PdfPoints::new(PAGE_WIDTH_PTS as f32),
            PdfPoints::new(PAGE_HEIGHT_PTS as f32),
        );
        let mut page = document
            .pages_mut()
            .create_page_at_end(page_size)
            .map_err(|e| PdfImagesError::PageBuildFailed {
                index,
                detail: format!("{e:?}"),
            })?;

        let (width, height) = fit_to_boundary(
            (raster.width(), raster.height()),
            (PAGE_WIDTH_PTS, PAGE_HEIGHT_PTS),
        );
        debug!(
            "Image {} ({}): {}x{} px → {}x{} pt page placement",
            index,
            input_path.display(),
            raster.width(),
            raster.height(),
            width,
            height
        );

        let mut image_object = PdfPageImageObject::new(&document, &raster).map_err(|e| {
            PdfImagesError::PageBuildFailed {
                index,
                detail: format!("{e:?}"),
            }
        })?;

        // An image object starts as a 1x1 pt unit square at the origin, so
        // scaling alone places it at the page's lower-left corner.
        image_object
            .scale(width as f32, height as f32)
            .map_err(|e| PdfImagesError::PageBuildFailed {
                index,
                detail: format!("{e:?}"),
            })?;

        page.objects_mut()
            .add_object(PdfPageObject::Image(image_object))
            .map_err(|e| PdfImagesError::PageBuildFailed {
                index,
                detail: format!("{e:?}"),
            })?;

        if let Some(ref hook) = options.progress {
            hook.on_item_done(index, inputs.len());
        }
    }

    save_atomic(&document, output)?;

    if let Some(ref hook) = options.progress {
        hook.on_finish(inputs.len());
    }
    info!("Saved {}-page PDF to {}", inputs.len(), output.display());
    Ok(())
}

/// Serialise to a sibling temp file, then rename into place.
fn save_atomic(document: &PdfDocument<'_>, output: &Path) -> Result<(), PdfImagesError> {
    let tmp_path = output.with_extension("pdf.tmp");

    document
        .save_to_file(&tmp_path)
        .map_err(|e| PdfImagesError::DocumentSave {
            path: output.to_path_buf(),
            detail: format!("{e:?}"),
        })?;

    std::fs::rename(&tmp_path, output).map_err(|source| {
        // Best effort: don't leave the temp file behind on a failed rename.
        let _ = std::fs::remove_file(&tmp_path);
        PdfImagesError::OutputWriteFailed {
            path: output.to_path_buf(),
            source,
        }
    })
}
