//! Configuration types for the two conversion pipelines.
//!
//! All pdf2images behaviour is controlled through [`RenderOptions`], built via
//! its [`RenderOptionsBuilder`]; defaults match the values a plain
//! `pdfimages pdf2images file.pdf` invocation uses. The defaults are plain
//! constants passed through the options structs — there is no process-wide
//! mutable state anywhere in the crate.

use crate::error::PdfImagesError;
use crate::progress::ProgressHook;
use image::{DynamicImage, ImageFormat};
use std::fmt;

/// Default rendering resolution for pdf2images.
pub const DEFAULT_DPI: u32 = 150;

/// Default output image format for pdf2images.
pub const DEFAULT_FORMAT: &str = "jpg";

/// Extensions probed for the supported-encoder list, in usage-text order.
const FORMAT_CANDIDATES: &[&str] = &["bmp", "gif", "jpeg", "jpg", "png", "tif", "tiff"];

/// The file-extension spellings the image codec can encode with the enabled
/// features. Used both for `--format` validation and for the usage text.
pub fn supported_write_formats() -> Vec<&'static str> {
    FORMAT_CANDIDATES
        .iter()
        .copied()
        .filter(|ext| {
            ImageFormat::from_extension(ext).is_some_and(|format| format.can_write())
        })
        .collect()
}

/// A validated output image format: the extension the user asked for plus the
/// encoder it maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFormat {
    extension: String,
    format: ImageFormat,
}

impl OutputFormat {
    /// Validate a user-supplied extension against the registered encoders.
    ///
    /// Accepts a leading dot and any letter case; the stored extension is
    /// normalised so output filenames are predictable.
    pub fn from_extension(ext: &str) -> Result<Self, PdfImagesError> {
        let normalised = ext.trim().trim_start_matches('.').to_ascii_lowercase();
        let format = ImageFormat::from_extension(&normalised)
            .filter(|format| format.can_write())
            .ok_or_else(|| PdfImagesError::UnsupportedFormat {
                format: ext.to_string(),
            })?;
        Ok(Self {
            extension: normalised,
            format,
        })
    }

    /// The normalised extension, used as the output filename suffix.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// The encoder this extension maps to.
    pub fn image_format(&self) -> ImageFormat {
        self.format
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self {
            extension: DEFAULT_FORMAT.to_string(),
            format: ImageFormat::Jpeg,
        }
    }
}

/// Pixel format used when rasterising a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// 24-bit colour. (default)
    #[default]
    Rgb,
    /// 8-bit grayscale.
    Gray,
    /// 32-bit colour with an alpha channel.
    Argb,
}

impl ColorMode {
    /// Every supported mode, in usage-text order.
    pub const ALL: &'static [ColorMode] = &[ColorMode::Rgb, ColorMode::Gray, ColorMode::Argb];

    /// Convert a rendered raster into this mode's pixel layout.
    pub fn apply(self, raster: DynamicImage) -> DynamicImage {
        match self {
            ColorMode::Rgb => DynamicImage::ImageRgb8(raster.to_rgb8()),
            ColorMode::Gray => DynamicImage::ImageLuma8(raster.to_luma8()),
            ColorMode::Argb => DynamicImage::ImageRgba8(raster.to_rgba8()),
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColorMode::Rgb => "rgb",
            ColorMode::Gray => "gray",
            ColorMode::Argb => "argb",
        };
        f.write_str(name)
    }
}

/// Configuration for the pdf2images pipeline.
///
/// Built via [`RenderOptions::builder()`] or [`RenderOptions::default()`].
///
/// # Example
/// ```rust
/// use pdfimages::{ColorMode, RenderOptions};
///
/// let options = RenderOptions::builder()
///     .dpi(300)
///     .format("png")
///     .unwrap()
///     .color(ColorMode::Gray)
///     .build()
///     .unwrap();
/// assert_eq!(options.dpi, 300);
/// ```
#[derive(Clone, Default)]
pub struct RenderOptions {
    /// Rendering DPI used when rasterising each page. Default: 150.
    pub dpi: u32,

    /// Output image format, validated against the registered encoders.
    pub format: OutputFormat,

    /// Pixel format of the rendered rasters. Default: RGB.
    pub color: ColorMode,

    /// Optional per-page progress hook; `None` disables progress events.
    pub progress: Option<ProgressHook>,
}

impl fmt::Debug for RenderOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderOptions")
            .field("dpi", &self.dpi)
            .field("format", &self.format)
            .field("color", &self.color)
            .field("progress", &self.progress.as_ref().map(|_| "<dyn PageProgress>"))
            .finish()
    }
}

impl RenderOptions {
    /// Create a new builder seeded with the defaults.
    pub fn builder() -> RenderOptionsBuilder {
        RenderOptionsBuilder {
            options: RenderOptions {
                dpi: DEFAULT_DPI,
                ..RenderOptions::default()
            },
        }
    }
}

/// Builder for [`RenderOptions`].
#[derive(Debug)]
pub struct RenderOptionsBuilder {
    options: RenderOptions,
}

impl RenderOptionsBuilder {
    pub fn dpi(mut self, dpi: u32) -> Self {
        self.options.dpi = dpi;
        self
    }

    /// Set the output format from a file-extension string.
    pub fn format(mut self, ext: &str) -> Result<Self, PdfImagesError> {
        self.options.format = OutputFormat::from_extension(ext)?;
        Ok(self)
    }

    pub fn color(mut self, color: ColorMode) -> Self {
        self.options.color = color;
        self
    }

    pub fn progress(mut self, hook: ProgressHook) -> Self {
        self.options.progress = Some(hook);
        self
    }

    /// Build the options, validating constraints.
    pub fn build(self) -> Result<RenderOptions, PdfImagesError> {
        if self.options.dpi == 0 {
            return Err(PdfImagesError::InvalidDpi { dpi: 0 });
        }
        Ok(self.options)
    }
}

/// Configuration for the images2pdf pipeline.
#[derive(Clone, Default)]
pub struct AssembleOptions {
    /// Optional per-image progress hook; `None` disables progress events.
    pub progress: Option<ProgressHook>,
}

impl AssembleOptions {
    pub fn with_progress(hook: ProgressHook) -> Self {
        Self {
            progress: Some(hook),
        }
    }
}

impl fmt::Debug for AssembleOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssembleOptions")
            .field("progress", &self.progress.as_ref().map(|_| "<dyn PageProgress>"))
            .finish()
    }
}
