//! Effect parameters.
//!
//! Every tunable constant of the effects lives here. The defaults are the
//! values the bot ships with; a TOML file can override any subset of them.
//!
//! ```toml
//! [liquid]
//! seam_limit = 120
//!
//! [deep_fry]
//! quality = 5
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading or validating an [`EffectsConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Seam-carving ("liquid resize") parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiquidConfig {
    /// Working bound applied before carving
    pub max_size: u32,
    /// Maximum seams removed per axis
    pub seam_limit: u32,
    /// Scale used when the caller does not pass one
    pub default_scale: f64,
    /// Output JPEG quality
    pub quality: u8,
}

impl Default for LiquidConfig {
    fn default() -> Self {
        Self {
            max_size: 500,
            seam_limit: 200,
            default_scale: 0.5,
            quality: 90,
        }
    }
}

/// Swirl distortion parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwirlConfig {
    pub max_size: u32,
    /// Rotation in radians applied at the very center
    pub strength: f64,
    /// Swirl radius as a fraction of half the shorter side
    pub radius_fraction: f64,
    pub quality: u8,
}

impl Default for SwirlConfig {
    fn default() -> Self {
        Self {
            max_size: 600,
            strength: 5.0,
            radius_fraction: 0.9,
            quality: 90,
        }
    }
}

/// Bulge and pinch lens parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LensConfig {
    pub max_size: u32,
    /// Curvature for bulge; negative expands the center
    pub bulge_k: f64,
    /// Curvature for pinch; positive contracts the center
    pub pinch_k: f64,
    pub quality: u8,
}

impl Default for LensConfig {
    fn default() -> Self {
        Self {
            max_size: 600,
            bulge_k: -0.5,
            pinch_k: 0.5,
            quality: 90,
        }
    }
}

/// Deep-fry pipeline parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeepFryConfig {
    pub max_size: u32,
    /// Smallest noise value added to a channel (inclusive)
    pub noise_min: i16,
    /// Largest noise value added to a channel (inclusive)
    pub noise_max: i16,
    pub color: f32,
    pub contrast: f32,
    pub sharpness: f32,
    /// Output JPEG quality; kept very low on purpose
    pub quality: u8,
}

impl Default for DeepFryConfig {
    fn default() -> Self {
        Self {
            max_size: 800,
            noise_min: 0,
            noise_max: 25,
            color: 3.0,
            contrast: 2.0,
            sharpness: 5.0,
            quality: 8,
        }
    }
}

/// Crispy pipeline parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrispyConfig {
    pub max_size: u32,
    pub sharpness: f32,
    pub contrast: f32,
    pub brightness: f32,
    pub quality: u8,
}

impl Default for CrispyConfig {
    fn default() -> Self {
        Self {
            max_size: 800,
            sharpness: 15.0,
            contrast: 3.0,
            brightness: 1.5,
            quality: 90,
        }
    }
}

/// Parameters for every effect.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    pub liquid: LiquidConfig,
    pub swirl: SwirlConfig,
    pub lens: LensConfig,
    pub deep_fry: DeepFryConfig,
    pub crispy: CrispyConfig,
}

impl EffectsConfig {
    /// Create a config holding the built-in defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: EffectsConfig =
            toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&text)
    }

    /// Check every value is usable by the effects.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_bound("liquid.max_size", self.liquid.max_size)?;
        check_bound("swirl.max_size", self.swirl.max_size)?;
        check_bound("lens.max_size", self.lens.max_size)?;
        check_bound("deep_fry.max_size", self.deep_fry.max_size)?;
        check_bound("crispy.max_size", self.crispy.max_size)?;

        check_quality("liquid.quality", self.liquid.quality)?;
        check_quality("swirl.quality", self.swirl.quality)?;
        check_quality("lens.quality", self.lens.quality)?;
        check_quality("deep_fry.quality", self.deep_fry.quality)?;
        check_quality("crispy.quality", self.crispy.quality)?;

        let scale = self.liquid.default_scale;
        if !(scale > 0.0 && scale <= 1.0) {
            return Err(invalid(
                "liquid.default_scale",
                format!("{} is not in (0, 1]", scale),
            ));
        }

        if !self.swirl.strength.is_finite() {
            return Err(invalid("swirl.strength", "must be finite".to_string()));
        }
        let fraction = self.swirl.radius_fraction;
        if !(fraction > 0.0 && fraction <= 1.0) {
            return Err(invalid(
                "swirl.radius_fraction",
                format!("{} is not in (0, 1]", fraction),
            ));
        }

        if !self.lens.bulge_k.is_finite() {
            return Err(invalid("lens.bulge_k", "must be finite".to_string()));
        }
        if !self.lens.pinch_k.is_finite() {
            return Err(invalid("lens.pinch_k", "must be finite".to_string()));
        }

        check_noise("deep_fry.noise_min", self.deep_fry.noise_min)?;
        check_noise("deep_fry.noise_max", self.deep_fry.noise_max)?;
        if self.deep_fry.noise_min > self.deep_fry.noise_max {
            return Err(invalid(
                "deep_fry.noise_min",
                format!(
                    "{} is greater than noise_max {}",
                    self.deep_fry.noise_min, self.deep_fry.noise_max
                ),
            ));
        }
        check_factor("deep_fry.color", self.deep_fry.color)?;
        check_factor("deep_fry.contrast", self.deep_fry.contrast)?;
        check_factor("deep_fry.sharpness", self.deep_fry.sharpness)?;
        check_factor("crispy.sharpness", self.crispy.sharpness)?;
        check_factor("crispy.contrast", self.crispy.contrast)?;
        check_factor("crispy.brightness", self.crispy.brightness)?;

        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::Invalid { field, reason }
}

fn check_bound(field: &'static str, value: u32) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(invalid(field, "must be greater than zero".to_string()));
    }
    Ok(())
}

fn check_quality(field: &'static str, value: u8) -> Result<(), ConfigError> {
    if !(1..=100).contains(&value) {
        return Err(invalid(field, format!("{} is not in 1..=100", value)));
    }
    Ok(())
}

fn check_noise(field: &'static str, value: i16) -> Result<(), ConfigError> {
    if !(-255..=255).contains(&value) {
        return Err(invalid(field, format!("{} is not in -255..=255", value)));
    }
    Ok(())
}

fn check_factor(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() || value < 0.0 {
        return Err(invalid(
            field,
            format!("{} must be a finite, non-negative factor", value),
        ));
    }
    Ok(())
}
