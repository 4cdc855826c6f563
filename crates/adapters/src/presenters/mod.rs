mod html;

use retro_grain_application::{ExportReceipt, PresetSummary};
use retro_grain_domain::{
    EffectConfig, EffectField, EffectToggle, FilterPreset, RenderPlan, UploadedImage,
};

pub use html::render_preview_html;

pub fn present_preset_row(summary: &PresetSummary) -> String {
    format!(
        "{}\t{}\t{}",
        summary.preset.name(),
        summary.preset.label(),
        summary.filter
    )
}

pub fn present_uploaded(image: &UploadedImage) -> String {
    format!(
        "loaded {} ({}, {}, {}x{}, {} bytes)",
        image.file_name(),
        image.format,
        image.mime_type,
        image.width,
        image.height,
        image.byte_len
    )
}

pub fn present_effect_config(preset: FilterPreset, config: &EffectConfig) -> String {
    let mut parts = vec![format!("preset={}", preset.name())];
    parts.extend(
        EffectField::ALL
            .into_iter()
            .map(|field| format!("{}={:.2}", field.name(), field.get(config))),
    );
    parts.extend(
        EffectToggle::ALL
            .into_iter()
            .map(|toggle| format!("{}={}", toggle.name(), on_off(toggle.get(config)))),
    );
    parts.join(" ")
}

pub fn present_render_plan(plan: &RenderPlan) -> String {
    let mut lines = vec![format!("filter: {}", plan.filter)];
    if let Some(opacity) = plan.grain_opacity {
        lines.push(format!("grain: opacity {opacity:.2}"));
    }
    if let Some(shadow) = &plan.vignette_shadow {
        lines.push(format!("vignette: {shadow}"));
    }
    if let Some(stamp) = &plan.date_stamp {
        lines.push(format!("date stamp: {stamp}"));
    }
    if plan.film_border {
        lines.push("film border: on".to_string());
    }
    lines.join("\n")
}

pub fn render_plan_json(plan: &RenderPlan) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(plan)
}

pub fn present_receipt(receipt: &ExportReceipt) -> String {
    format!(
        "saved original {} -> {} ({} bytes, effects are preview-only)",
        receipt.source.display(),
        receipt.destination.display(),
        receipt.bytes_written
    )
}

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}
