use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Range, default and step of one numeric slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderSpec {
    /// Form field name.
    pub name: &'static str,
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub default: f64,
    pub step: f64,
}

impl SliderSpec {
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

pub const SPEAKING_RATE: SliderSpec = SliderSpec {
    name: "speaking_rate",
    label: "speaking rate",
    min: 0.5,
    max: 1.5,
    default: 1.0,
    step: 0.05,
};

pub const PROSODY_STRENGTH: SliderSpec = SliderSpec {
    name: "prosody_strength",
    label: "prosody strength",
    min: 0.5,
    max: 1.5,
    default: 1.0,
    step: 0.05,
};

pub const TEMPERATURE: SliderSpec = SliderSpec {
    name: "temperature",
    label: "temperature",
    min: 0.3,
    max: 1.5,
    default: 0.9,
    step: 0.05,
};

pub const CHUNK_MS: SliderSpec = SliderSpec {
    name: "chunk_ms",
    label: "chunk size (ms)",
    min: 80.0,
    max: 320.0,
    default: 160.0,
    step: 10.0,
};

/// Sliders in the order they appear on the page.
pub const SLIDERS: [SliderSpec; 4] = [SPEAKING_RATE, PROSODY_STRENGTH, TEMPERATURE, CHUNK_MS];

/// The six values submitted by the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesisParams {
    pub text: String,
    pub speaker_hint: String,
    pub speaking_rate: f64,
    pub prosody_strength: f64,
    pub temperature: f64,
    pub chunk_ms: u32,
}

impl Default for SynthesisParams {
    fn default() -> Self {
        Self {
            text: String::new(),
            speaker_hint: String::new(),
            speaking_rate: SPEAKING_RATE.default,
            prosody_strength: PROSODY_STRENGTH.default,
            temperature: TEMPERATURE.default,
            chunk_ms: CHUNK_MS.default as u32,
        }
    }
}

impl SynthesisParams {
    /// Current value of a slider, as shown on the page.
    pub fn slider_value(&self, slider: &SliderSpec) -> f64 {
        match slider.name {
            "speaking_rate" => self.speaking_rate,
            "prosody_strength" => self.prosody_strength,
            "temperature" => self.temperature,
            "chunk_ms" => f64::from(self.chunk_ms),
            _ => slider.default,
        }
    }

    /// Reject values the page sliders could never produce.
    pub fn validate(&self) -> Result<(), AppError> {
        for slider in &SLIDERS {
            let value = self.slider_value(slider);
            if !slider.contains(value) {
                return Err(AppError::BadRequest(format!(
                    "{} must be between {} and {} (got {})",
                    slider.label, slider.min, slider.max, value
                )));
            }
        }
        Ok(())
    }
}
