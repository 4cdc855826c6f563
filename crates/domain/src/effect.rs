use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{DomainError, FilterPreset};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EffectConfig {
    pub brightness: f32,
    pub contrast: f32,
    pub saturation: f32,
    pub sepia: f32,
    pub grain: f32,
    pub vignette: bool,
    pub date_stamp: bool,
    pub film_border: bool,
}

impl Default for EffectConfig {
    fn default() -> Self {
        FilterPreset::None.config()
    }
}

impl EffectConfig {
    pub fn filter_expression(&self) -> String {
        build_filter_expression(self)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        for field in EffectField::ALL {
            if !field.get(self).is_finite() {
                return Err(DomainError::NonFiniteEffectParam(field.name()));
            }
        }
        Ok(())
    }

    /// Returns a copy with exactly one field replaced. Slider values are
    /// clamped to the slider's range.
    pub fn with_adjustment(&self, adjustment: EffectAdjustment) -> Self {
        let mut next = *self;
        match adjustment {
            EffectAdjustment::Slider(field, value) => {
                field.set(&mut next, field.range().clamp(value))
            }
            EffectAdjustment::Toggle(toggle, enabled) => toggle.set(&mut next, enabled),
        }
        next
    }
}

/// Builds the CSS filter chain for `config`.
///
/// The order is fixed to `brightness contrast saturate sepia`. Values are
/// printed as-is, so out-of-range input is passed through untouched.
pub fn build_filter_expression(config: &EffectConfig) -> String {
    format!(
        "brightness({}) contrast({}) saturate({}) sepia({})",
        config.brightness, config.contrast, config.saturation, config.sepia
    )
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderRange {
    pub min: f32,
    pub max: f32,
}

impl SliderRange {
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: f32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EffectField {
    Brightness,
    Contrast,
    Saturation,
    Sepia,
    Grain,
}

impl EffectField {
    pub const ALL: [EffectField; 5] = [
        EffectField::Brightness,
        EffectField::Contrast,
        EffectField::Saturation,
        EffectField::Sepia,
        EffectField::Grain,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Brightness => "brightness",
            Self::Contrast => "contrast",
            Self::Saturation => "saturation",
            Self::Sepia => "sepia",
            Self::Grain => "grain",
        }
    }

    pub fn range(self) -> SliderRange {
        let (min, max) = match self {
            Self::Brightness | Self::Contrast => (0.5, 1.5),
            Self::Saturation => (0.0, 1.5),
            Self::Sepia | Self::Grain => (0.0, 1.0),
        };
        SliderRange { min, max }
    }

    pub fn get(self, config: &EffectConfig) -> f32 {
        match self {
            Self::Brightness => config.brightness,
            Self::Contrast => config.contrast,
            Self::Saturation => config.saturation,
            Self::Sepia => config.sepia,
            Self::Grain => config.grain,
        }
    }

    fn set(self, config: &mut EffectConfig, value: f32) {
        match self {
            Self::Brightness => config.brightness = value,
            Self::Contrast => config.contrast = value,
            Self::Saturation => config.saturation = value,
            Self::Sepia => config.sepia = value,
            Self::Grain => config.grain = value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EffectToggle {
    Vignette,
    DateStamp,
    FilmBorder,
}

impl EffectToggle {
    pub const ALL: [EffectToggle; 3] = [
        EffectToggle::Vignette,
        EffectToggle::DateStamp,
        EffectToggle::FilmBorder,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Vignette => "vignette",
            Self::DateStamp => "dateStamp",
            Self::FilmBorder => "filmBorder",
        }
    }

    pub fn get(self, config: &EffectConfig) -> bool {
        match self {
            Self::Vignette => config.vignette,
            Self::DateStamp => config.date_stamp,
            Self::FilmBorder => config.film_border,
        }
    }

    fn set(self, config: &mut EffectConfig, enabled: bool) {
        match self {
            Self::Vignette => config.vignette = enabled,
            Self::DateStamp => config.date_stamp = enabled,
            Self::FilmBorder => config.film_border = enabled,
        }
    }
}

/// A single slider move or switch flip from the editor panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EffectAdjustment {
    Slider(EffectField, f32),
    Toggle(EffectToggle, bool),
}

impl Display for EffectAdjustment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Slider(field, value) => write!(f, "{}={}", field.name(), value),
            Self::Toggle(toggle, enabled) => write!(f, "{}={}", toggle.name(), enabled),
        }
    }
}

/// Parses `field=value`, e.g. `brightness=1.2` or `vignette=off`.
impl FromStr for EffectAdjustment {
    type Err = DomainError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let (key, raw_value) = text
            .split_once('=')
            .ok_or_else(|| DomainError::UnknownEffectField(text.to_string()))?;
        let key = key.trim();
        let raw_value = raw_value.trim();

        if let Some(field) = EffectField::ALL
            .into_iter()
            .find(|field| field.name().eq_ignore_ascii_case(key))
        {
            let value = raw_value
                .parse::<f32>()
                .map_err(|_| DomainError::InvalidEffectValue {
                    field: field.name(),
                    value: raw_value.to_string(),
                })?;
            return Ok(Self::Slider(field, value));
        }

        if let Some(toggle) = EffectToggle::ALL
            .into_iter()
            .find(|toggle| toggle.name().eq_ignore_ascii_case(key))
        {
            let enabled = match raw_value.to_ascii_lowercase().as_str() {
                "true" | "on" | "yes" | "1" => true,
                "false" | "off" | "no" | "0" => false,
                _ => {
                    return Err(DomainError::InvalidEffectValue {
                        field: toggle.name(),
                        value: raw_value.to_string(),
                    })
                }
            };
            return Ok(Self::Toggle(toggle, enabled));
        }

        Err(DomainError::UnknownEffectField(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_expression(expression: &str) -> Vec<(String, f32)> {
        expression
            .split(' ')
            .map(|part| {
                let (name, rest) = part.split_once('(').expect("function call");
                let value = rest.strip_suffix(')').expect("closing paren");
                (name.to_string(), value.parse::<f32>().expect("numeric arg"))
            })
            .collect()
    }

    #[test]
    fn retro_filter_expression_matches_css() {
        let expression = build_filter_expression(&FilterPreset::Retro.config());
        assert_eq!(
            expression,
            "brightness(1.1) contrast(1.05) saturate(0.9) sepia(0.15)"
        );
    }

    #[test]
    fn neutral_config_prints_integers_without_fraction() {
        assert_eq!(
            EffectConfig::default().filter_expression(),
            "brightness(1) contrast(1) saturate(1) sepia(0)"
        );
    }

    #[test]
    fn expression_has_four_functions_in_fixed_order_with_field_values() {
        let steps = [0.0_f32, 0.05, 0.35, 0.5, 0.95, 1.0, 1.25, 1.5];
        for &brightness in &steps {
            for &sepia in &steps {
                let config = EffectConfig {
                    brightness,
                    contrast: 1.5 - brightness / 2.0,
                    saturation: sepia * 1.5,
                    sepia,
                    ..EffectConfig::default()
                };
                let parsed = parse_expression(&config.filter_expression());
                let names: Vec<&str> = parsed.iter().map(|(name, _)| name.as_str()).collect();
                assert_eq!(names, ["brightness", "contrast", "saturate", "sepia"]);
                assert_eq!(parsed[0].1, config.brightness);
                assert_eq!(parsed[1].1, config.contrast);
                assert_eq!(parsed[2].1, config.saturation);
                assert_eq!(parsed[3].1, config.sepia);
            }
        }
    }

    #[test]
    fn out_of_range_values_pass_through() {
        let config = EffectConfig {
            brightness: 3.0,
            contrast: -0.5,
            saturation: 0.0,
            sepia: 2.25,
            ..EffectConfig::default()
        };
        assert_eq!(
            config.filter_expression(),
            "brightness(3) contrast(-0.5) saturate(0) sepia(2.25)"
        );
    }

    #[test]
    fn expression_is_deterministic() {
        let config = FilterPreset::Vintage.config();
        assert_eq!(
            build_filter_expression(&config).as_bytes(),
            build_filter_expression(&config).as_bytes()
        );
    }

    #[test]
    fn validate_rejects_non_finite_values() {
        let config = EffectConfig {
            sepia: f32::INFINITY,
            ..EffectConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(DomainError::NonFiniteEffectParam("sepia"))
        );
        assert!(FilterPreset::Grainy.config().validate().is_ok());
    }

    #[test]
    fn adjustment_replaces_one_field_and_clamps_sliders() {
        let base = FilterPreset::Retro.config();
        let brighter =
            base.with_adjustment(EffectAdjustment::Slider(EffectField::Brightness, 9.0));
        assert_eq!(brighter.brightness, 1.5);
        assert_eq!(brighter.contrast, base.contrast);

        let no_border =
            base.with_adjustment(EffectAdjustment::Toggle(EffectToggle::FilmBorder, false));
        assert!(!no_border.film_border);
        assert!(no_border.vignette);
        assert_eq!(no_border.grain, base.grain);
    }

    #[test]
    fn slider_ranges_follow_editor_panel() {
        assert_eq!(EffectField::Saturation.range().min, 0.0);
        assert_eq!(EffectField::Saturation.range().max, 1.5);
        assert_eq!(EffectField::Contrast.range().min, 0.5);
        assert!(EffectField::Grain.range().contains(1.0));
        assert!(!EffectField::Sepia.range().contains(1.05));
    }

    #[test]
    fn adjustment_parses_sliders_and_toggles() {
        assert_eq!(
            "grain=0.45".parse::<EffectAdjustment>(),
            Ok(EffectAdjustment::Slider(EffectField::Grain, 0.45))
        );
        assert_eq!(
            "dateStamp=off".parse::<EffectAdjustment>(),
            Ok(EffectAdjustment::Toggle(EffectToggle::DateStamp, false))
        );
        assert!(matches!(
            "exposure=1".parse::<EffectAdjustment>(),
            Err(DomainError::UnknownEffectField(_))
        ));
        assert!(matches!(
            "vignette=maybe".parse::<EffectAdjustment>(),
            Err(DomainError::InvalidEffectValue { field: "vignette", .. })
        ));
    }

    #[test]
    fn config_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(FilterPreset::Retro.config()).expect("serialize");
        assert_eq!(json["dateStamp"], true);
        assert_eq!(json["filmBorder"], true);
    }
}
