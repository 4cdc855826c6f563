use log::{debug, info};
use retro_grain_domain::{
    format_date_stamp, EffectConfig, FilterPreset, RenderPlan, UploadedImage,
};

use crate::{
    AdjustEffectCommand, ApplicationError, ApplyPresetCommand, CloseSessionCommand, DateSource,
    EditorSession, ExportReceipt, GenerateDateStampCommand, ImageExporter, ImageLoader,
    ListPresetsQuery, RegenerateDateStampCommand, RenderPreviewQuery, SaveImageCommand,
    UploadImageCommand,
};

#[derive(Debug, Clone, PartialEq)]
pub struct PresetSummary {
    pub preset: FilterPreset,
    pub config: EffectConfig,
    pub filter: String,
}

pub struct ApplicationService {
    loader: Box<dyn ImageLoader>,
    exporter: Box<dyn ImageExporter>,
    dates: Box<dyn DateSource>,
    session: Option<EditorSession>,
}

impl ApplicationService {
    pub fn new(
        loader: Box<dyn ImageLoader>,
        exporter: Box<dyn ImageExporter>,
        dates: Box<dyn DateSource>,
    ) -> Self {
        Self {
            loader,
            exporter,
            dates,
            session: None,
        }
    }

    pub fn session(&self) -> Option<&EditorSession> {
        self.session.as_ref()
    }

    pub fn upload_image(
        &mut self,
        command: UploadImageCommand,
    ) -> Result<UploadedImage, ApplicationError> {
        if command.path.as_os_str().is_empty() {
            return Err(ApplicationError::InvalidInput(
                "image path must not be empty".to_string(),
            ));
        }

        let image = self.loader.load(&command.path)?;
        let stamp = format_date_stamp(&self.dates.random_date());
        info!(
            "opened {} ({}, {}x{})",
            image.path.display(),
            image.mime_type,
            image.width,
            image.height
        );
        self.session = Some(EditorSession::new(image.clone(), stamp));
        Ok(image)
    }

    pub fn apply_preset(
        &mut self,
        command: ApplyPresetCommand,
    ) -> Result<EffectConfig, ApplicationError> {
        let session = self.active_session_mut()?;
        session.apply_preset(command.preset);
        debug!("applied preset {}", command.preset);
        Ok(session.effects())
    }

    pub fn adjust_effect(
        &mut self,
        command: AdjustEffectCommand,
    ) -> Result<EffectConfig, ApplicationError> {
        let session = self.active_session_mut()?;
        let effects = session.adjust(command.adjustment)?;
        debug!("adjusted {}", command.adjustment);
        Ok(effects)
    }

    pub fn regenerate_date_stamp(
        &mut self,
        _command: RegenerateDateStampCommand,
    ) -> Result<String, ApplicationError> {
        let stamp = format_date_stamp(&self.dates.random_date());
        let session = self.active_session_mut()?;
        if !session.effects().date_stamp {
            return Err(ApplicationError::InvalidInput(
                "date stamp is disabled".to_string(),
            ));
        }
        session.set_date_stamp(stamp.clone());
        debug!("new date stamp {stamp}");
        Ok(stamp)
    }

    pub fn render_preview(
        &self,
        _query: RenderPreviewQuery,
    ) -> Result<RenderPlan, ApplicationError> {
        Ok(self.active_session()?.render_plan())
    }

    /// Saves the loaded image. Effects are preview-only, so the file written
    /// is the original upload.
    pub fn save_image(
        &self,
        command: SaveImageCommand,
    ) -> Result<ExportReceipt, ApplicationError> {
        if command.destination.as_os_str().is_empty() {
            return Err(ApplicationError::InvalidInput(
                "destination path must not be empty".to_string(),
            ));
        }
        let session = self.active_session()?;
        let receipt = self
            .exporter
            .export_original(session.image(), &command.destination)?;
        info!(
            "saved {} to {} ({} bytes)",
            receipt.source.display(),
            receipt.destination.display(),
            receipt.bytes_written
        );
        Ok(receipt)
    }

    pub fn close_session(&mut self, _command: CloseSessionCommand) {
        if let Some(session) = self.session.take() {
            info!("closed {}", session.image().path.display());
        }
    }

    pub fn list_presets(&self, _query: ListPresetsQuery) -> Vec<PresetSummary> {
        FilterPreset::ALL
            .into_iter()
            .map(|preset| {
                let config = preset.config();
                PresetSummary {
                    preset,
                    config,
                    filter: config.filter_expression(),
                }
            })
            .collect()
    }

    pub fn generate_date_stamp(&self, command: GenerateDateStampCommand) -> String {
        let date = command
            .reference
            .unwrap_or_else(|| self.dates.random_date());
        format_date_stamp(&date)
    }

    fn active_session(&self) -> Result<&EditorSession, ApplicationError> {
        self.session.as_ref().ok_or(ApplicationError::NoActiveSession)
    }

    fn active_session_mut(&mut self) -> Result<&mut EditorSession, ApplicationError> {
        self.session.as_mut().ok_or(ApplicationError::NoActiveSession)
    }
}
