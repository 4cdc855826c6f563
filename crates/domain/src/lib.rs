mod date_stamp;
mod effect;
mod error;
mod image;
mod preset;
mod render;

pub use date_stamp::{
    format_date_stamp, generate_date_stamp, parse_date_stamp, random_early_2000s_date,
    STAMP_WINDOW_END, STAMP_WINDOW_START,
};
pub use effect::{
    build_filter_expression, EffectAdjustment, EffectConfig, EffectField, EffectToggle,
    SliderRange,
};
pub use error::DomainError;
pub use image::{is_image_mime, UploadedImage};
pub use preset::{preset_config, FilterPreset};
pub use render::{RenderPlan, VIGNETTE_SHADOW};
