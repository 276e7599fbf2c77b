//! Static altitude-band classifier.
//!
//! A fixed threshold table maps altitude above the mean surface to an orbit band.
//! Bands are tested in ascending order, so the medium band runs up to and
//! including 35,786 km and GEO only covers the window just above it.

use std::fmt;

use serde::Serialize;

use crate::physics::constants::GEO_ALTITUDE_KM;

/// Below this the orbit decays within days.
pub const VERY_LOW_CEILING_KM: f64 = 160.0;
pub const LEO_CEILING_KM: f64 = 2000.0;
/// Half-width of the geostationary window around [`GEO_ALTITUDE_KM`].
pub const GEO_TOLERANCE_KM: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrbitClass {
    VeryLow,
    Leo,
    Meo,
    Geo,
    Heo,
}

pub fn classify(altitude_km: f64) -> OrbitClass {
    if altitude_km < VERY_LOW_CEILING_KM {
        OrbitClass::VeryLow
    } else if altitude_km <= LEO_CEILING_KM {
        OrbitClass::Leo
    } else if altitude_km <= GEO_ALTITUDE_KM {
        OrbitClass::Meo
    } else if (altitude_km - GEO_ALTITUDE_KM).abs() < GEO_TOLERANCE_KM {
        OrbitClass::Geo
    } else {
        OrbitClass::Heo
    }
}

/// Descriptive material shown next to a classification.
#[derive(Debug, Clone, Serialize)]
pub struct OrbitProfile {
    pub description: &'static str,
    pub applications: &'static [&'static str],
    pub challenges: &'static [&'static str],
    pub advantages: &'static [&'static str],
    pub examples: &'static [&'static str],
    pub color: [u8; 3],
}

impl OrbitClass {
    pub const ALL: [OrbitClass; 5] = [
        OrbitClass::VeryLow,
        OrbitClass::Leo,
        OrbitClass::Meo,
        OrbitClass::Geo,
        OrbitClass::Heo,
    ];

    pub fn code(self) -> &'static str {
        match self {
            OrbitClass::VeryLow => "VERY LOW",
            OrbitClass::Leo => "LEO",
            OrbitClass::Meo => "MEO",
            OrbitClass::Geo => "GEO",
            OrbitClass::Heo => "HEO",
        }
    }

    pub fn full_name(self) -> &'static str {
        match self {
            OrbitClass::VeryLow => "Very Low Earth Orbit",
            OrbitClass::Leo => "Low Earth Orbit",
            OrbitClass::Meo => "Medium Earth Orbit",
            OrbitClass::Geo => "Geostationary Earth Orbit",
            OrbitClass::Heo => "High Earth Orbit",
        }
    }

    /// Short label for panels, e.g. `LEO (Low Earth Orbit)`.
    pub fn label(self) -> String {
        match self {
            OrbitClass::VeryLow => "VERY LOW (Unstable)".to_string(),
            _ => format!("{} ({})", self.code(), self.full_name()),
        }
    }

    pub fn profile(self) -> OrbitProfile {
        match self {
            OrbitClass::VeryLow => OrbitProfile {
                description: "Extreme atmospheric drag - mission not viable",
                applications: &["Atmospheric research (brief)", "Deorbiting missions"],
                challenges: &[
                    "Severe atmospheric drag",
                    "Rapid orbital decay",
                    "High maintenance",
                ],
                advantages: &["High resolution imagery", "Low latency"],
                examples: &["Deorbiting spacecraft", "Some research missions"],
                color: [255, 71, 87],
            },
            OrbitClass::Leo => OrbitProfile {
                description: "Optimal for Earth observation and human spaceflight",
                applications: &["Earth observation", "Human spaceflight", "Small satellites"],
                challenges: &[
                    "Atmospheric drag",
                    "Limited coverage time",
                    "Frequent handovers",
                ],
                advantages: &["High resolution", "Low launch cost", "Easy maintenance"],
                examples: &["ISS", "Starlink", "Planet Labs", "Most CubeSats"],
                color: [46, 213, 115],
            },
            OrbitClass::Meo => OrbitProfile {
                description: "Suited to navigation and regional communication",
                applications: &[
                    "Navigation (GPS)",
                    "Regional communication",
                    "Scientific missions",
                ],
                challenges: &[
                    "Radiation environment",
                    "Higher launch costs",
                    "Complex orbital mechanics",
                ],
                advantages: &["Global coverage", "Good compromise altitude", "Stable orbits"],
                examples: &["GPS constellation", "GLONASS", "Galileo", "O3b satellites"],
                color: [255, 165, 2],
            },
            OrbitClass::Geo => OrbitProfile {
                description: "Fixed position relative to the ground - ideal for communications",
                applications: &["Communications", "Weather monitoring", "Broadcasting"],
                challenges: &[
                    "High launch costs",
                    "Launch window constraints",
                    "Orbital slot competition",
                ],
                advantages: &[
                    "Fixed coverage area",
                    "No tracking required",
                    "Continuous service",
                ],
                examples: &["Weather satellites", "TV broadcast", "Military communications"],
                color: [55, 66, 250],
            },
            OrbitClass::Heo => OrbitProfile {
                description: "Deep space missions and specialized applications",
                applications: &[
                    "Deep space missions",
                    "Lagrange point missions",
                    "Interplanetary",
                ],
                challenges: &[
                    "Extreme launch requirements",
                    "Long communication delays",
                    "Harsh environment",
                ],
                advantages: &[
                    "Unique vantage points",
                    "Minimal gravitational influence",
                    "Scientific value",
                ],
                examples: &[
                    "James Webb Space Telescope",
                    "Solar observatories",
                    "Interplanetary probes",
                ],
                color: [140, 122, 230],
            },
        }
    }
}

impl fmt::Display for OrbitClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_table() {
        let cases = [
            (150.0, OrbitClass::VeryLow),
            (159.9, OrbitClass::VeryLow),
            (160.0, OrbitClass::Leo),
            (408.0, OrbitClass::Leo),
            (2000.0, OrbitClass::Leo),
            (2000.1, OrbitClass::Meo),
            (20_200.0, OrbitClass::Meo),
            (35_686.0, OrbitClass::Meo),
            (35_700.0, OrbitClass::Meo),
            (35_786.0, OrbitClass::Meo),
            (35_786.1, OrbitClass::Geo),
            (35_885.0, OrbitClass::Geo),
            (35_886.0, OrbitClass::Heo),
            (100_000.0, OrbitClass::Heo),
        ];
        for (alt, expected) in cases {
            assert_eq!(classify(alt), expected, "altitude {} km", alt);
        }
    }

    #[test]
    fn labels_carry_code() {
        for class in OrbitClass::ALL {
            assert!(class.label().starts_with(class.code()));
            assert!(!class.profile().applications.is_empty());
        }
        assert_eq!(OrbitClass::Leo.label(), "LEO (Low Earth Orbit)");
    }
}
