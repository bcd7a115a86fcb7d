//! Error types for the pdfimages library.
//!
//! A single [`PdfImagesError`] enum covers every failure mode; each variant
//! carries the path or page index that produced it so the CLI can print a
//! message the user can act on without a stack trace.
//!
//! [`PdfImagesError::kind`] classifies variants into the five coarse
//! [`ErrorKind`]s the conversion pipelines care about. Argument-class errors
//! are detected eagerly, before any conversion work begins; the remaining
//! kinds abort the invocation mid-pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the pdfimages library.
///
/// Every kind is fatal to the current invocation — nothing is retried and
/// nothing is recovered into partial success.
#[derive(Debug, Error)]
pub enum PdfImagesError {
    // ── Argument errors ───────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("File not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'")]
    PermissionDenied { path: PathBuf },

    /// The file exists but its content is not a recognisable image type.
    #[error("No image reader recognises the content of '{path}'")]
    NotAnImage { path: PathBuf },

    /// The file exists and was read, but is not a PDF.
    #[error("File is not a valid PDF: '{path}'\nFirst bytes: {magic:?}")]
    NotAPdf { path: PathBuf, magic: [u8; 4] },

    /// The output path already exists; refusing to overwrite silently.
    #[error("Output file '{path}' already exists — remove it or pick another name")]
    OutputExists { path: PathBuf },

    /// images2pdf was invoked without any input images.
    #[error("You should provide one or more images to add to the PDF file")]
    NoInputImages,

    /// The requested image format has no registered encoder.
    #[error("There is no writer defined for the format '{format}'")]
    UnsupportedFormat { format: String },

    /// Rendering DPI outside the accepted range.
    #[error("DPI must be a positive integer, got {dpi}")]
    InvalidDpi { dpi: u32 },

    // ── Codec errors ──────────────────────────────────────────────────────
    /// An input image could not be decoded.
    #[error("Failed to decode image '{path}': {detail}")]
    DecodeFailed { path: PathBuf, detail: String },

    /// pdfium returned an error while rasterising a page (0-indexed).
    #[error("Rasterisation failed for page {page}: {detail}")]
    RenderFailed { page: usize, detail: String },

    /// A rendered raster could not be written in the requested format.
    #[error("Failed to encode image '{path}': {source}")]
    EncodeFailed {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    // ── Document errors ───────────────────────────────────────────────────
    /// The input document could not be opened or parsed by pdfium.
    #[error("Failed to open PDF '{path}': {detail}")]
    DocumentOpen { path: PathBuf, detail: String },

    /// A new output document could not be created.
    #[error("Failed to create PDF document: {detail}")]
    DocumentCreate { detail: String },

    /// Building one of the output document's pages failed (0-indexed).
    #[error("Failed to build page {index} of the output document: {detail}")]
    PageBuildFailed { index: usize, detail: String },

    /// The assembled document could not be serialised to disk.
    #[error("Failed to save PDF '{path}': {detail}")]
    DocumentSave { path: PathBuf, detail: String },

    /// Could not move the finished output file into place.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Could not bind to a pdfium library.
    #[error(
        "Failed to bind to a pdfium library: {0}\n\n\
Place the pdfium shared library next to the executable, or\n\
install it system-wide so it can be found on the loader path."
    )]
    PdfiumBindingFailed(String),
}

/// Coarse classification of a [`PdfImagesError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed, missing, or out-of-range CLI input; detected eagerly.
    Argument,
    /// An input image could not be decoded.
    Decode,
    /// A document page could not be rasterised.
    Render,
    /// A raster could not be written in the requested format.
    Encode,
    /// A document could not be opened, created, or saved.
    DocumentIo,
}

impl PdfImagesError {
    /// The coarse error classification used by the pipelines and tests.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::FileNotFound { .. }
            | Self::PermissionDenied { .. }
            | Self::NotAnImage { .. }
            | Self::NotAPdf { .. }
            | Self::OutputExists { .. }
            | Self::NoInputImages
            | Self::UnsupportedFormat { .. }
            | Self::InvalidDpi { .. } => ErrorKind::Argument,

            Self::DecodeFailed { .. } => ErrorKind::Decode,

            Self::RenderFailed { .. } => ErrorKind::Render,

            Self::EncodeFailed { .. } => ErrorKind::Encode,

            Self::DocumentOpen { .. }
            | Self::DocumentCreate { .. }
            | Self::PageBuildFailed { .. }
            | Self::DocumentSave { .. }
            | Self::OutputWriteFailed { .. }
            | Self::PdfiumBindingFailed(_) => ErrorKind::DocumentIo,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn argument_errors_classify_as_argument() {
        let errors = [
            PdfImagesError::FileNotFound {
                path: PathBuf::from("a.png"),
            },
            PdfImagesError::OutputExists {
                path: PathBuf::from("out.pdf"),
            },
            PdfImagesError::NoInputImages,
            PdfImagesError::UnsupportedFormat {
                format: "xpm".into(),
            },
            PdfImagesError::InvalidDpi { dpi: 0 },
        ];
        for e in errors {
            assert_eq!(e.kind(), ErrorKind::Argument, "got: {e}");
        }
    }

    #[test]
    fn codec_errors_classify_by_stage() {
        let decode = PdfImagesError::DecodeFailed {
            path: PathBuf::from("a.png"),
            detail: "bad header".into(),
        };
        assert_eq!(decode.kind(), ErrorKind::Decode);

        let render = PdfImagesError::RenderFailed {
            page: 3,
            detail: "pdfium error".into(),
        };
        assert_eq!(render.kind(), ErrorKind::Render);

        let open = PdfImagesError::DocumentOpen {
            path: PathBuf::from("in.pdf"),
            detail: "corrupt xref".into(),
        };
        assert_eq!(open.kind(), ErrorKind::DocumentIo);
    }

    #[test]
    fn display_includes_path_context() {
        let e = PdfImagesError::NotAPdf {
            path: PathBuf::from("notes.txt"),
            magic: *b"Hell",
        };
        let msg = e.to_string();
        assert!(msg.contains("notes.txt"), "got: {msg}");
    }

    #[test]
    fn render_failed_is_zero_indexed() {
        let e = PdfImagesError::RenderFailed {
            page: 0,
            detail: "x".into(),
        };
        assert!(e.to_string().contains("page 0"));
    }
}
