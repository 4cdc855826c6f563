use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use retro_grain_domain::UploadedImage;

use crate::ApplicationError;

pub const NOT_AN_IMAGE_MESSAGE: &str = "Please select an image file (JPEG, PNG, etc.)";

pub trait ImageLoader {
    /// Reads enough of `path` to confirm it is an image and learn its size.
    fn load(&self, path: &Path) -> Result<UploadedImage, ApplicationError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReceipt {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub bytes_written: u64,
}

pub trait ImageExporter {
    /// Writes the original, unfiltered image to `destination`.
    fn export_original(
        &self,
        image: &UploadedImage,
        destination: &Path,
    ) -> Result<ExportReceipt, ApplicationError>;
}

pub trait DateSource {
    fn random_date(&self) -> NaiveDate;
}
