use serde::{Deserialize, Serialize};

use crate::{build_filter_expression, EffectConfig};

pub const VIGNETTE_SHADOW: &str = "inset 0 0 100px rgba(0,0,0,0.5)";

/// Everything the preview layer draws on top of the untouched image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderPlan {
    pub filter: String,
    pub grain_opacity: Option<f32>,
    pub vignette_shadow: Option<String>,
    pub date_stamp: Option<String>,
    pub film_border: bool,
}

impl RenderPlan {
    pub fn new(config: &EffectConfig, date_stamp: &str) -> Self {
        Self {
            filter: build_filter_expression(config),
            grain_opacity: (config.grain > 0.0).then_some(config.grain),
            vignette_shadow: config.vignette.then(|| VIGNETTE_SHADOW.to_string()),
            date_stamp: config.date_stamp.then(|| date_stamp.to_string()),
            film_border: config.film_border,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FilterPreset;

    #[test]
    fn retro_plan_enables_every_overlay() {
        let plan = RenderPlan::new(&FilterPreset::Retro.config(), "07-14-2004");
        assert_eq!(
            plan.filter,
            "brightness(1.1) contrast(1.05) saturate(0.9) sepia(0.15)"
        );
        assert_eq!(plan.grain_opacity, Some(0.3));
        assert_eq!(plan.vignette_shadow.as_deref(), Some(VIGNETTE_SHADOW));
        assert_eq!(plan.date_stamp.as_deref(), Some("07-14-2004"));
        assert!(plan.film_border);
    }

    #[test]
    fn none_plan_has_only_the_filter() {
        let plan = RenderPlan::new(&FilterPreset::None.config(), "07-14-2004");
        assert_eq!(plan.grain_opacity, None);
        assert_eq!(plan.vignette_shadow, None);
        assert_eq!(plan.date_stamp, None);
        assert!(!plan.film_border);
    }
}
