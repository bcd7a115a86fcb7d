//! Input validation: readability checks and content-type probing.
//!
//! Every check here runs *before* any conversion work starts, so a bad
//! argument is reported without partial side effects. Probing reads only the
//! leading magic bytes — it is a fast precondition, distinct from the full
//! decode the assemble pipeline performs later.

use crate::error::PdfImagesError;
use image::{DynamicImage, ImageFormat, ImageReader};
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Map an open failure to the matching argument error.
fn open_error(path: &Path, err: std::io::Error) -> PdfImagesError {
    if err.kind() == std::io::ErrorKind::PermissionDenied {
        PdfImagesError::PermissionDenied {
            path: path.to_path_buf(),
        }
    } else {
        PdfImagesError::FileNotFound {
            path: path.to_path_buf(),
        }
    }
}

/// Verify the file exists and can be opened for reading.
pub fn ensure_readable(path: &Path) -> Result<(), PdfImagesError> {
    std::fs::File::open(path)
        .map(|_| ())
        .map_err(|e| open_error(path, e))
}

/// Probe a file's magic bytes for a known image type.
///
/// Returns the detected format without decoding any pixel data.
pub fn probe_image(path: &Path) -> Result<ImageFormat, PdfImagesError> {
    let reader = ImageReader::open(path)
        .map_err(|e| open_error(path, e))?
        .with_guessed_format()
        .map_err(|e| open_error(path, e))?;

    let format = reader.format().ok_or_else(|| PdfImagesError::NotAnImage {
        path: path.to_path_buf(),
    })?;

    debug!("Probed {} as {:?}", path.display(), format);
    Ok(format)
}

/// Verify the file starts with the `%PDF` magic bytes.
pub fn ensure_pdf(path: &Path) -> Result<(), PdfImagesError> {
    let mut file = std::fs::File::open(path).map_err(|e| open_error(path, e))?;

    let mut magic = [0u8; 4];
    match file.read_exact(&mut magic) {
        Ok(()) if &magic == b"%PDF" => Ok(()),
        Ok(()) => Err(PdfImagesError::NotAPdf {
            path: path.to_path_buf(),
            magic,
        }),
        Err(_) => Err(PdfImagesError::NotAPdf {
            path: path.to_path_buf(),
            magic: [0; 4],
        }),
    }
}

/// Reject an output path that already exists.
///
/// The original tool inverted this check and rejected *writable* outputs;
/// here the intended semantics are explicit: never overwrite silently.
pub fn ensure_fresh_output(path: &Path) -> Result<(), PdfImagesError> {
    if path.exists() {
        return Err(PdfImagesError::OutputExists {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Decode an image file into a raster, guessing the format from content.
pub fn decode_image(path: &Path) -> Result<DynamicImage, PdfImagesError> {
    let reader = ImageReader::open(path)
        .map_err(|e| open_error(path, e))?
        .with_guessed_format()
        .map_err(|e| open_error(path, e))?;

    reader
        .decode()
        .map_err(|e| PdfImagesError::DecodeFailed {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })
}

/// The filename without its extension, used as the default output prefix.
pub fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::io::Write;
    use std::path::PathBuf;

    fn write_png(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let img = image::RgbImage::from_pixel(4, 4, image::Rgb([200, 10, 10]));
        // Explicit format: the fixture name may carry a non-png extension.
        img.save_with_format(&path, ImageFormat::Png)
            .expect("write test png");
        path
    }

    #[test]
    fn probe_recognises_a_png_regardless_of_extension() {
        let dir = tempfile::tempdir().unwrap();
        // Deliberately misleading extension: probing must look at content.
        let path = write_png(dir.path(), "picture.dat");
        assert_eq!(probe_image(&path).unwrap(), ImageFormat::Png);
    }

    #[test]
    fn probe_rejects_non_image_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "definitely not pixels").unwrap();

        let err = probe_image(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Argument);
        assert!(matches!(err, PdfImagesError::NotAnImage { .. }));
    }

    #[test]
    fn missing_file_is_an_argument_error_before_any_work() {
        let err = ensure_readable(Path::new("/definitely/not/here.png")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Argument);
    }

    #[test]
    fn pdf_magic_check_accepts_the_header_only() {
        let dir = tempfile::tempdir().unwrap();

        let good = dir.path().join("ok.pdf");
        let mut f = std::fs::File::create(&good).unwrap();
        f.write_all(b"%PDF-1.7\n%...").unwrap();
        ensure_pdf(&good).expect("valid header");

        let bad = dir.path().join("fake.pdf");
        std::fs::write(&bad, "Hello world").unwrap();
        let err = ensure_pdf(&bad).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Argument);
        assert!(matches!(err, PdfImagesError::NotAPdf { .. }));
    }

    #[test]
    fn truncated_file_is_not_a_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.pdf");
        std::fs::write(&path, "%P").unwrap();
        assert!(ensure_pdf(&path).is_err());
    }

    #[test]
    fn existing_output_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.pdf");
        std::fs::write(&path, "anything").unwrap();

        let err = ensure_fresh_output(&path).unwrap_err();
        assert!(matches!(err, PdfImagesError::OutputExists { .. }));
        assert_eq!(err.kind(), ErrorKind::Argument);

        ensure_fresh_output(&dir.path().join("new.pdf")).expect("fresh path accepted");
    }

    #[test]
    fn decode_round_trips_a_real_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path(), "in.png");
        let raster = decode_image(&path).unwrap();
        assert_eq!((raster.width(), raster.height()), (4, 4));
    }

    #[test]
    fn decode_failure_carries_the_decode_kind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        // A valid PNG signature followed by garbage: probes fine, decodes not.
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]).unwrap();
        f.write_all(b"garbage").unwrap();

        let err = decode_image(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
    }

    #[test]
    fn file_stem_strips_one_extension() {
        assert_eq!(file_stem(Path::new("scan.pdf")), "scan");
        assert_eq!(file_stem(Path::new("dir/report.v2.pdf")), "report.v2");
        assert_eq!(file_stem(Path::new("noext")), "noext");
    }
}
