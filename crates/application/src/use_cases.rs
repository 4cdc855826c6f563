use std::path::PathBuf;

use chrono::NaiveDate;
use retro_grain_domain::{EffectAdjustment, FilterPreset};

#[derive(Debug, Clone)]
pub struct UploadImageCommand {
    pub path: PathBuf,
}

#[derive(Debug, Clone, Copy)]
pub struct ApplyPresetCommand {
    pub preset: FilterPreset,
}

#[derive(Debug, Clone, Copy)]
pub struct AdjustEffectCommand {
    pub adjustment: EffectAdjustment,
}

#[derive(Debug, Clone, Default)]
pub struct RegenerateDateStampCommand;

#[derive(Debug, Clone)]
pub struct SaveImageCommand {
    pub destination: PathBuf,
}

#[derive(Debug, Clone, Default)]
pub struct RenderPreviewQuery;

#[derive(Debug, Clone, Default)]
pub struct CloseSessionCommand;

#[derive(Debug, Clone, Default)]
pub struct ListPresetsQuery;

#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateDateStampCommand {
    pub reference: Option<NaiveDate>,
}
