pub mod fs;
pub mod presenters;

pub use fs::{FsImageExporter, FsImageLoader, SeededDateSource, ThreadRngDateSource};
pub use presenters::{
    present_effect_config, present_preset_row, present_receipt, present_render_plan,
    present_uploaded, render_plan_json, render_preview_html,
};
