use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedImage {
    pub path: PathBuf,
    /// Short format name as used for file extensions, e.g. `jpg` or `png`.
    pub format: String,
    pub mime_type: String,
    pub width: u32,
    pub height: u32,
    pub byte_len: u64,
}

impl UploadedImage {
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default()
    }
}

/// Upload gate: anything whose media type is under `image/` is accepted.
pub fn is_image_mime(mime_type: &str) -> bool {
    mime_type
        .trim()
        .to_ascii_lowercase()
        .strip_prefix("image/")
        .is_some_and(|subtype| !subtype.is_empty())
}
