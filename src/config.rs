use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{OrbitError, Result};
use crate::satellite::{Bounds, ParamRange, Satellite};

// ---------------------------------------------------------------------------
// TOML configuration
// ---------------------------------------------------------------------------

/// Top-level configuration. Every section is optional in the file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub satellite: Satellite,
    pub bounds: Bounds,
    pub display: DisplayConfig,
    pub animation: AnimationConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub window_width: f64,
    pub window_height: f64,
    pub earth_radius_min: f64,      // px
    pub earth_radius_max: f64,      // px
    pub earth_radius_divisor: f64,  // min(w, h) / divisor
    pub margin: f64,                // px kept clear around the outermost orbit
    pub min_gap: f64,               // px between Earth's limb and the lowest orbit
    pub linear_threshold_km: f64,   // linear scaling up to here, logarithmic above
    pub log_reference_km: f64,      // altitude drawn at the outer edge
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            window_width: 1200.0,
            window_height: 800.0,
            earth_radius_min: 30.0,
            earth_radius_max: 60.0,
            earth_radius_divisor: 8.0,
            margin: 50.0,
            min_gap: 20.0,
            linear_threshold_km: 1000.0,
            log_reference_km: 100_000.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub fps: u32,
    /// Real angular rate is multiplied by this so low orbits visibly move.
    pub visual_multiplier: f64,
    pub speed: f64,
    pub speed_min: f64,
    pub speed_max: f64,
    pub speed_up_factor: f64,
    pub speed_down_factor: f64,
    pub trail_min: usize,
    pub trail_max: usize,
    pub trail_factor: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            fps: 60,
            visual_multiplier: 50.0,
            speed: 1.0,
            speed_min: 0.1,
            speed_max: 10.0,
            speed_up_factor: 1.1,
            speed_down_factor: 0.9,
            trail_min: 100,
            trail_max: 400,
            trail_factor: 3.0,
        }
    }
}

impl AppConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&text)?;
        config.validate()?;
        log::info!("loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        check_range("bounds.mass", &self.bounds.mass)?;
        check_range("bounds.altitude", &self.bounds.altitude)?;

        if !self.bounds.mass.contains(self.satellite.mass_kg) {
            return Err(OrbitError::config(format!(
                "satellite.mass_kg {} outside bounds [{}, {}]",
                self.satellite.mass_kg, self.bounds.mass.min, self.bounds.mass.max
            )));
        }
        if !self.bounds.altitude.contains(self.satellite.altitude_km) {
            return Err(OrbitError::config(format!(
                "satellite.altitude_km {} outside bounds [{}, {}]",
                self.satellite.altitude_km, self.bounds.altitude.min, self.bounds.altitude.max
            )));
        }

        let d = &self.display;
        positive("display.window_width", d.window_width)?;
        positive("display.window_height", d.window_height)?;
        positive("display.earth_radius_min", d.earth_radius_min)?;
        positive("display.earth_radius_max", d.earth_radius_max)?;
        positive("display.earth_radius_divisor", d.earth_radius_divisor)?;
        positive("display.margin", d.margin)?;
        positive("display.min_gap", d.min_gap)?;
        positive("display.log_reference_km", d.log_reference_km)?;
        if d.earth_radius_min > d.earth_radius_max {
            return Err(OrbitError::config(
                "display.earth_radius_min must not exceed earth_radius_max",
            ));
        }
        if d.linear_threshold_km <= 1.0 || d.linear_threshold_km >= d.log_reference_km {
            return Err(OrbitError::config(
                "display.linear_threshold_km must be above 1 km and below log_reference_km",
            ));
        }

        let a = &self.animation;
        if a.fps == 0 {
            return Err(OrbitError::config("animation.fps must be at least 1"));
        }
        positive("animation.speed_min", a.speed_min)?;
        positive("animation.speed_max", a.speed_max)?;
        if a.speed_min > a.speed_max {
            return Err(OrbitError::config("animation.speed_min exceeds speed_max"));
        }
        if !(a.speed_min..=a.speed_max).contains(&a.speed) {
            return Err(OrbitError::config("animation.speed outside speed range"));
        }
        // Faster must speed up and slower must slow down
        if !a.speed_up_factor.is_finite() || a.speed_up_factor <= 1.0 {
            return Err(OrbitError::config("animation.speed_up_factor must be above 1"));
        }
        if !a.speed_down_factor.is_finite()
            || a.speed_down_factor <= 0.0
            || a.speed_down_factor >= 1.0
        {
            return Err(OrbitError::config(
                "animation.speed_down_factor must be between 0 and 1",
            ));
        }
        positive("animation.visual_multiplier", a.visual_multiplier)?;
        positive("animation.trail_factor", a.trail_factor)?;
        if a.trail_min > a.trail_max {
            return Err(OrbitError::config("animation.trail_min exceeds trail_max"));
        }
        Ok(())
    }
}

fn positive(name: &str, v: f64) -> Result<()> {
    if !v.is_finite() || v <= 0.0 {
        return Err(OrbitError::config(format!(
            "{} must be a positive number (got {})",
            name, v
        )));
    }
    Ok(())
}

fn check_range(name: &str, r: &ParamRange) -> Result<()> {
    if r.min.is_nan() || r.min <= 0.0 || !r.max.is_finite() || r.min >= r.max {
        return Err(OrbitError::config(format!(
            "{} must satisfy 0 < min < max (got {} .. {})",
            name, r.min, r.max
        )));
    }
    positive(&format!("{}.step", name), r.step)
}
