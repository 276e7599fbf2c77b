pub mod input;
pub mod presets;

pub use input::{Bounds, ParamInput, ParamRange};
pub use presets::Preset;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::physics::OrbitParams;

// ---------------------------------------------------------------------------
// Satellite: the two user-controlled parameters
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Satellite {
    pub name: String,
    pub mass_kg: f64,
    pub altitude_km: f64,
}

impl Satellite {
    pub fn new(name: impl Into<String>, mass_kg: f64, altitude_km: f64) -> Self {
        Self {
            name: name.into(),
            mass_kg,
            altitude_km,
        }
    }

    /// Derived circular-orbit quantities for the current mass and altitude.
    pub fn params(&self) -> Result<OrbitParams> {
        OrbitParams::compute(self.mass_kg, self.altitude_km)
    }

    /// Pull both values into `bounds`.
    pub fn clamp_to(&mut self, bounds: &Bounds) {
        self.mass_kg = bounds.mass.clamp(self.mass_kg);
        self.altitude_km = bounds.altitude.clamp(self.altitude_km);
    }
}

impl Default for Satellite {
    fn default() -> Self {
        Self::new("Satellite", 1000.0, 400.0)
    }
}

impl From<&Preset> for Satellite {
    fn from(p: &Preset) -> Self {
        Satellite::new(p.name, p.mass_kg, p.altitude_km)
    }
}
