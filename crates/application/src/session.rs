use retro_grain_domain::{
    DomainError, EffectAdjustment, EffectConfig, FilterPreset, RenderPlan, UploadedImage,
};

/// Editing state for one loaded image. Lives in memory only and is dropped
/// when the user goes back to the upload screen.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorSession {
    image: UploadedImage,
    selected_preset: FilterPreset,
    effects: EffectConfig,
    date_stamp: String,
}

impl EditorSession {
    pub fn new(image: UploadedImage, date_stamp: String) -> Self {
        Self {
            image,
            selected_preset: FilterPreset::Retro,
            effects: FilterPreset::Retro.config(),
            date_stamp,
        }
    }

    pub fn image(&self) -> &UploadedImage {
        &self.image
    }

    pub fn selected_preset(&self) -> FilterPreset {
        self.selected_preset
    }

    pub fn effects(&self) -> EffectConfig {
        self.effects
    }

    pub fn date_stamp(&self) -> &str {
        &self.date_stamp
    }

    pub fn apply_preset(&mut self, preset: FilterPreset) {
        self.selected_preset = preset;
        self.effects = preset.config();
    }

    /// Manual edits leave the named preset behind; the selection falls back
    /// to `none`, which is what the editor highlights for custom settings.
    /// Slider input is clamped like the on-screen slider, so only NaN is
    /// refused.
    pub fn adjust(&mut self, adjustment: EffectAdjustment) -> Result<EffectConfig, DomainError> {
        let next = self.effects.with_adjustment(adjustment);
        next.validate()?;
        self.effects = next;
        self.selected_preset = FilterPreset::None;
        Ok(self.effects)
    }

    pub fn set_date_stamp(&mut self, date_stamp: String) {
        self.date_stamp = date_stamp;
    }

    pub fn render_plan(&self) -> RenderPlan {
        RenderPlan::new(&self.effects, &self.date_stamp)
    }
}
