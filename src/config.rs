// Tunables for the particle field and the page-level collaborators.
// Both structs deserialize from camelCase JSON handed over by the host page;
// any field left out keeps its default.

use serde::{Deserialize, Serialize};

use crate::error::{FieldError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldConfig {
    pub particle_count: usize,
    pub connection_radius: f64,
    pub interaction_radius: f64,
    pub repel_strength: f64,
    pub pulse_amplitude: f64,
    pub clock_step: f64,
    pub link_width: f64,
    // Velocity per axis is drawn from [-base_speed / 2, base_speed / 2)
    pub base_speed: f64,
    pub min_size: f64,
    pub size_range: f64,
    pub min_pulse_speed: f64,
    pub pulse_speed_range: f64,
    pub opacity: f64,
    pub profile_frames: bool,
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            particle_count: 70,
            connection_radius: 160.0,
            interaction_radius: 220.0,
            repel_strength: 3.0,
            pulse_amplitude: 0.5,
            clock_step: 0.05,
            link_width: 0.8,
            base_speed: 0.4,
            min_size: 1.0,
            size_range: 2.0,
            min_pulse_speed: 0.02,
            pulse_speed_range: 0.05,
            opacity: 0.85,
            profile_frames: false,
        }
    }
}

impl FieldConfig {
    pub fn from_json(json: &str) -> Result<FieldConfig> {
        let config: FieldConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.particle_count == 0 {
            return Err(FieldError::InvalidConfig(
                "particleCount must be at least 1".to_owned(),
            ));
        }
        let positive = [
            ("connectionRadius", self.connection_radius),
            ("interactionRadius", self.interaction_radius),
            ("clockStep", self.clock_step),
        ];
        for (name, value) in positive.iter() {
            if !(value.is_finite() && *value > 0.0) {
                return Err(FieldError::InvalidConfig(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }
        let non_negative = [
            ("repelStrength", self.repel_strength),
            ("pulseAmplitude", self.pulse_amplitude),
            ("linkWidth", self.link_width),
            ("baseSpeed", self.base_speed),
            ("minSize", self.min_size),
            ("sizeRange", self.size_range),
            ("minPulseSpeed", self.min_pulse_speed),
            ("pulseSpeedRange", self.pulse_speed_range),
        ];
        for (name, value) in non_negative.iter() {
            if !(value.is_finite() && *value >= 0.0) {
                return Err(FieldError::InvalidConfig(format!(
                    "{} must not be negative, got {}",
                    name, value
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(FieldError::InvalidConfig(format!(
                "opacity must be within [0, 1], got {}",
                self.opacity
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    pub log_level: String,
    pub theme_storage_key: String,
    pub contributions_url: String,
    pub contribution_days: usize,
}

impl Default for PageConfig {
    fn default() -> Self {
        PageConfig {
            log_level: "info".to_owned(),
            theme_storage_key: "theme".to_owned(),
            contributions_url: "https://github-contributions-api.jogruber.de/v4/kl0l69?y=last"
                .to_owned(),
            contribution_days: 364,
        }
    }
}

impl PageConfig {
    pub fn from_json(json: &str) -> Result<PageConfig> {
        Ok(serde_json::from_str(json)?)
    }

    // Unknown level names fall back to info
    pub fn level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}
