mod error;
mod ports;
mod service;
mod session;
mod use_cases;

pub use error::ApplicationError;
pub use ports::{DateSource, ExportReceipt, ImageExporter, ImageLoader, NOT_AN_IMAGE_MESSAGE};
pub use service::{ApplicationService, PresetSummary};
pub use session::EditorSession;
pub use use_cases::{
    AdjustEffectCommand, ApplyPresetCommand, CloseSessionCommand, GenerateDateStampCommand,
    ListPresetsQuery, RegenerateDateStampCommand, RenderPreviewQuery, SaveImageCommand,
    UploadImageCommand,
};
