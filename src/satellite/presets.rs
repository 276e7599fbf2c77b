use serde::Serialize;

use crate::error::{OrbitError, Result};

// ---------------------------------------------------------------------------
// Reference satellites
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Preset {
    pub name: &'static str,
    pub altitude_km: f64,
    pub mass_kg: f64,
    pub purpose: &'static str,
}

pub const ALL: [Preset; 5] = [
    Preset {
        name: "ISS",
        altitude_km: 408.0,
        mass_kg: 420_000.0,
        purpose: "Space Station",
    },
    Preset {
        name: "Hubble",
        altitude_km: 547.0,
        mass_kg: 11_110.0,
        purpose: "Space Telescope",
    },
    Preset {
        name: "GPS",
        altitude_km: 20_200.0,
        mass_kg: 2000.0,
        purpose: "Navigation",
    },
    Preset {
        name: "Geostationary",
        altitude_km: 35_786.0,
        mass_kg: 5000.0,
        purpose: "Communication",
    },
    Preset {
        name: "Starlink",
        altitude_km: 550.0,
        mass_kg: 260.0,
        purpose: "Internet Constellation",
    },
];

/// Case-insensitive lookup by name. `GEO` is accepted for the geostationary entry.
pub fn find(name: &str) -> Result<Preset> {
    let wanted = name.trim();
    let wanted = if wanted.eq_ignore_ascii_case("geo") {
        "Geostationary"
    } else {
        wanted
    };
    ALL.iter()
        .find(|p| p.name.eq_ignore_ascii_case(wanted))
        .copied()
        .ok_or_else(|| OrbitError::UnknownPreset(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{classify, OrbitClass};

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(find("iss").unwrap().mass_kg, 420_000.0);
        assert_eq!(find(" Hubble ").unwrap().altitude_km, 547.0);
        assert_eq!(find("geo").unwrap().name, "Geostationary");
        assert!(matches!(find("mir"), Err(OrbitError::UnknownPreset(_))));
    }

    #[test]
    fn presets_land_in_expected_bands() {
        assert_eq!(classify(find("ISS").unwrap().altitude_km), OrbitClass::Leo);
        assert_eq!(classify(find("GPS").unwrap().altitude_km), OrbitClass::Meo);
        // 35,786 km sits on the top edge of the medium band
        assert_eq!(
            classify(find("Geostationary").unwrap().altitude_km),
            OrbitClass::Meo
        );
        assert_eq!(classify(35_850.0), OrbitClass::Geo);
    }
}
