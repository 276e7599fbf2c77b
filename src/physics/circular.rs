use std::f64::consts::{FRAC_PI_2, PI};

use nalgebra::Vector2;
use serde::Serialize;

use super::constants::{
    EARTH_RADIUS, EQUATOR_SURFACE_SPEED, MU_EARTH, SECONDS_PER_DAY, SECONDS_PER_HOUR,
};
use crate::error::{OrbitError, Result};

// ---------------------------------------------------------------------------
// Closed-form circular orbit relations
// ---------------------------------------------------------------------------

/// Distance from Earth's center for an altitude above the mean surface (km -> m).
pub fn orbital_radius(altitude_km: f64) -> f64 {
    EARTH_RADIUS + altitude_km * 1000.0
}

/// Circular orbit speed at radius `r` (vis-viva with a = r).
pub fn circular_velocity(r: f64) -> f64 {
    circular_velocity_mu(r, MU_EARTH)
}

pub fn circular_velocity_mu(r: f64, mu: f64) -> f64 {
    (mu / r).sqrt()
}

/// Orbital period from Kepler's third law, s.
pub fn orbital_period(r: f64) -> f64 {
    orbital_period_mu(r, MU_EARTH)
}

pub fn orbital_period_mu(r: f64, mu: f64) -> f64 {
    2.0 * PI * (r.powi(3) / mu).sqrt()
}

/// F = m v^2 / r
pub fn centripetal_force(mass: f64, velocity: f64, r: f64) -> f64 {
    mass * velocity * velocity / r
}

pub fn escape_velocity(r: f64) -> f64 {
    escape_velocity_mu(r, MU_EARTH)
}

pub fn escape_velocity_mu(r: f64, mu: f64) -> f64 {
    (2.0 * mu / r).sqrt()
}

/// Gravitational acceleration magnitude at radius `r`, m/s^2.
pub fn gravity_at(r: f64) -> f64 {
    MU_EARTH / (r * r)
}

/// Specific mechanical energy of a circular orbit times mass, J (negative = bound).
pub fn orbital_energy(mass: f64, r: f64) -> f64 {
    -MU_EARTH * mass / (2.0 * r)
}

// ---------------------------------------------------------------------------
// Planar helpers for the 2D view
// ---------------------------------------------------------------------------

/// Position on a circle of `radius` at `angle` (rad), relative to the center.
pub fn satellite_offset(radius: f64, angle: f64) -> Vector2<f64> {
    Vector2::new(radius * angle.cos(), radius * angle.sin())
}

/// Unit vector along the direction of motion (prograde, counter-clockwise).
pub fn velocity_direction(angle: f64) -> Vector2<f64> {
    let a = angle + FRAC_PI_2;
    Vector2::new(a.cos(), a.sin())
}

// ---------------------------------------------------------------------------
// Derived parameter set
// ---------------------------------------------------------------------------

/// Everything derived from a (mass, altitude) pair for a circular orbit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrbitParams {
    pub mass_kg: f64,
    pub altitude_km: f64,
    pub radius_m: f64,
    pub velocity_ms: f64,
    pub period_s: f64,
    pub centripetal_force_n: f64,
    pub orbital_energy_j: f64,
    pub angular_velocity_rad_s: f64,
    pub escape_velocity_ms: f64,
    pub delta_v_required_ms: f64,
    pub gravity_ms2: f64,
}

impl OrbitParams {
    /// Evaluate all circular-orbit quantities. Mass and altitude must be finite and positive.
    pub fn compute(mass_kg: f64, altitude_km: f64) -> Result<Self> {
        check_positive("mass", mass_kg)?;
        check_positive("altitude", altitude_km)?;

        let r = orbital_radius(altitude_km);
        let v = circular_velocity(r);

        let params = OrbitParams {
            mass_kg,
            altitude_km,
            radius_m: r,
            velocity_ms: v,
            period_s: orbital_period(r),
            centripetal_force_n: centripetal_force(mass_kg, v, r),
            orbital_energy_j: orbital_energy(mass_kg, r),
            angular_velocity_rad_s: v / r,
            escape_velocity_ms: escape_velocity(r),
            delta_v_required_ms: v - EQUATOR_SURFACE_SPEED,
            gravity_ms2: gravity_at(r),
        };
        log::debug!(
            "orbit params: m={:.0} kg h={:.1} km -> v={:.1} m/s T={:.1} s",
            mass_kg,
            altitude_km,
            params.velocity_ms,
            params.period_s
        );
        Ok(params)
    }

    pub fn radius_km(&self) -> f64 {
        self.radius_m / 1000.0
    }

    pub fn velocity_kms(&self) -> f64 {
        self.velocity_ms / 1000.0
    }

    pub fn period_minutes(&self) -> f64 {
        self.period_s / 60.0
    }

    pub fn period_hours(&self) -> f64 {
        self.period_s / SECONDS_PER_HOUR
    }

    pub fn period_days(&self) -> f64 {
        self.period_s / SECONDS_PER_DAY
    }
}

fn check_positive(name: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(OrbitError::InvalidParameter {
            name,
            value,
            reason: "must be finite",
        });
    }
    if value <= 0.0 {
        return Err(OrbitError::InvalidParameter {
            name,
            value,
            reason: "must be greater than zero",
        });
    }
    Ok(())
}
