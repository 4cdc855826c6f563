use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use image::ImageReader;
use log::debug;
use retro_grain_application::{ApplicationError, ImageLoader, NOT_AN_IMAGE_MESSAGE};
use retro_grain_domain::{is_image_mime, UploadedImage};

/// Inspects uploads with the `image` crate: format from content (falling back
/// to the extension), dimensions from the header. Pixels are never decoded.
#[derive(Debug, Default)]
pub struct FsImageLoader;

impl ImageLoader for FsImageLoader {
    fn load(&self, path: &Path) -> Result<UploadedImage, ApplicationError> {
        let metadata = fs::metadata(path).map_err(|error| match error.kind() {
            ErrorKind::NotFound => {
                ApplicationError::NotFound(format!("image file {}", path.display()))
            }
            _ => ApplicationError::Io(error.to_string()),
        })?;
        if !metadata.is_file() {
            return Err(ApplicationError::InvalidInput(format!(
                "not a regular file: {}",
                path.display()
            )));
        }

        let reader = ImageReader::open(path)
            .map_err(|error| ApplicationError::Io(error.to_string()))?
            .with_guessed_format()
            .map_err(|error| ApplicationError::Io(error.to_string()))?;

        let Some(format) = reader.format() else {
            return Err(ApplicationError::UnsupportedMedia(
                NOT_AN_IMAGE_MESSAGE.to_string(),
            ));
        };
        let mime_type = format.to_mime_type();
        if !is_image_mime(mime_type) {
            return Err(ApplicationError::UnsupportedMedia(
                NOT_AN_IMAGE_MESSAGE.to_string(),
            ));
        }

        let format_name = format
            .extensions_str()
            .first()
            .copied()
            .unwrap_or_default()
            .to_string();

        // The extension alone can name a format; the header has to agree.
        let (width, height) = reader.into_dimensions().map_err(|error| {
            debug!("rejected {}: {error}", path.display());
            ApplicationError::UnsupportedMedia(NOT_AN_IMAGE_MESSAGE.to_string())
        })?;
        debug!("detected {} as {mime_type}", path.display());

        Ok(UploadedImage {
            path: path.to_path_buf(),
            format: format_name,
            mime_type: mime_type.to_string(),
            width,
            height,
            byte_len: metadata.len(),
        })
    }
}
