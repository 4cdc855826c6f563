use std::fs;
use std::path::Path;

use retro_grain_application::{ApplicationError, ExportReceipt, ImageExporter};
use retro_grain_domain::UploadedImage;

/// Writes the upload byte-for-byte. No effect is baked in.
#[derive(Debug, Default)]
pub struct FsImageExporter;

impl ImageExporter for FsImageExporter {
    fn export_original(
        &self,
        image: &UploadedImage,
        destination: &Path,
    ) -> Result<ExportReceipt, ApplicationError> {
        if destination.exists() && is_same_file(&image.path, destination)? {
            return Err(ApplicationError::InvalidInput(format!(
                "destination is the source image: {}",
                destination.display()
            )));
        }

        if let Some(parent) = destination.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|error| ApplicationError::Io(error.to_string()))?;
            }
        }

        let bytes_written = fs::copy(&image.path, destination)
            .map_err(|error| ApplicationError::Io(error.to_string()))?;

        Ok(ExportReceipt {
            source: image.path.clone(),
            destination: destination.to_path_buf(),
            bytes_written,
        })
    }
}

fn is_same_file(left: &Path, right: &Path) -> Result<bool, ApplicationError> {
    let left = left
        .canonicalize()
        .map_err(|error| ApplicationError::Io(error.to_string()))?;
    let right = right
        .canonicalize()
        .map_err(|error| ApplicationError::Io(error.to_string()))?;
    Ok(left == right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb};
    use tempfile::TempDir;

    fn uploaded(path: &Path) -> UploadedImage {
        UploadedImage {
            path: path.to_path_buf(),
            format: "png".to_string(),
            mime_type: "image/png".to_string(),
            width: 16,
            height: 16,
            byte_len: fs::metadata(path).expect("meta").len(),
        }
    }

    #[test]
    fn copies_original_bytes_unchanged() {
        let dir = TempDir::new().expect("tempdir");
        let src = dir.path().join("x.png");
        let img = ImageBuffer::from_fn(16, 16, |x, y| Rgb([x as u8, y as u8, 7_u8]));
        img.save(&src).expect("save");

        let dest = dir.path().join("out/nested/retro.png");
        let receipt = FsImageExporter
            .export_original(&uploaded(&src), &dest)
            .expect("export");

        assert_eq!(receipt.destination, dest);
        assert_eq!(
            fs::read(&dest).expect("read dest"),
            fs::read(&src).expect("read src")
        );
        assert_eq!(receipt.bytes_written, uploaded(&src).byte_len);
    }

    #[test]
    fn refuses_to_overwrite_the_source() {
        let dir = TempDir::new().expect("tempdir");
        let src = dir.path().join("x.png");
        let img = ImageBuffer::from_fn(4, 4, |_x, _y| Rgb([1_u8, 2_u8, 3_u8]));
        img.save(&src).expect("save");
        let before = fs::read(&src).expect("read");

        let result = FsImageExporter.export_original(&uploaded(&src), &src);
        assert!(matches!(result, Err(ApplicationError::InvalidInput(_))));
        assert_eq!(fs::read(&src).expect("read"), before);
    }
}
