use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{DomainError, EffectConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterPreset {
    Retro,
    Vintage,
    Grainy,
    None,
}

impl FilterPreset {
    pub const ALL: [FilterPreset; 4] = [
        FilterPreset::Retro,
        FilterPreset::Vintage,
        FilterPreset::Grainy,
        FilterPreset::None,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Retro => "retro",
            Self::Vintage => "vintage",
            Self::Grainy => "grainy",
            Self::None => "none",
        }
    }

    /// Button caption, the name with its first letter upper-cased.
    pub fn label(self) -> &'static str {
        match self {
            Self::Retro => "Retro",
            Self::Vintage => "Vintage",
            Self::Grainy => "Grainy",
            Self::None => "None",
        }
    }

    pub fn config(self) -> EffectConfig {
        match self {
            Self::Retro => EffectConfig {
                brightness: 1.1,
                contrast: 1.05,
                saturation: 0.9,
                sepia: 0.15,
                grain: 0.3,
                vignette: true,
                date_stamp: true,
                film_border: true,
            },
            Self::Vintage => EffectConfig {
                brightness: 0.95,
                contrast: 0.9,
                saturation: 0.8,
                sepia: 0.35,
                grain: 0.4,
                vignette: true,
                date_stamp: true,
                film_border: true,
            },
            Self::Grainy => EffectConfig {
                brightness: 1.05,
                contrast: 1.1,
                saturation: 0.95,
                sepia: 0.05,
                grain: 0.5,
                vignette: true,
                date_stamp: true,
                film_border: true,
            },
            Self::None => EffectConfig {
                brightness: 1.0,
                contrast: 1.0,
                saturation: 1.0,
                sepia: 0.0,
                grain: 0.0,
                vignette: false,
                date_stamp: false,
                film_border: false,
            },
        }
    }
}

impl Display for FilterPreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FilterPreset {
    type Err = DomainError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| DomainError::UnknownPreset(name.to_string()))
    }
}

pub fn preset_config(name: &str) -> Result<EffectConfig, DomainError> {
    name.parse::<FilterPreset>().map(FilterPreset::config)
}
