use std::f64::consts::PI;
use std::fmt;

use serde::Serialize;

use crate::classify::{classify, OrbitClass, GEO_TOLERANCE_KM};
use crate::physics::constants::{EARTH_RADIUS_KM, GEO_ALTITUDE_KM};
use crate::physics::OrbitParams;

/// Launch price per kilogram to LEO, USD.
pub const BASE_COST_PER_KG: f64 = 5000.0;
/// Wider window used when judging geostationary suitability.
pub const GEO_MISSION_WINDOW_KM: f64 = 500.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Suitability {
    Critical,
    Excellent,
    Good,
    Optimal,
    Perfect,
    Extreme,
}

impl Suitability {
    pub fn from_altitude(altitude_km: f64) -> Self {
        if altitude_km < 200.0 {
            Suitability::Critical
        } else if altitude_km <= 600.0 {
            Suitability::Excellent
        } else if altitude_km <= 1500.0 {
            Suitability::Good
        } else if altitude_km <= 20_000.0 {
            Suitability::Optimal
        } else if near_geo(altitude_km, GEO_MISSION_WINDOW_KM) {
            Suitability::Perfect
        } else {
            Suitability::Extreme
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Suitability::Critical => "CRITICAL: Atmospheric drag zone",
            Suitability::Excellent => "EXCELLENT: Earth observation zone",
            Suitability::Good => "GOOD: Communication satellite range",
            Suitability::Optimal => "OPTIMAL: Navigation constellation",
            Suitability::Perfect => "PERFECT: Geostationary orbit",
            Suitability::Extreme => "EXTREME: Deep space trajectory",
        }
    }

    pub fn notes(self) -> &'static [&'static str] {
        match self {
            Suitability::Critical => &[
                "High fuel consumption required",
                "Limited mission duration",
                "Frequent orbital corrections needed",
            ],
            Suitability::Excellent => &[
                "Suited to imaging missions",
                "Good ground resolution",
                "Moderate power requirements",
            ],
            Suitability::Good => &[
                "Suitable for regional coverage",
                "Balanced orbit/ground link",
                "Stable orbital environment",
            ],
            Suitability::Optimal => &[
                "GPS/GLONASS altitude range",
                "Global coverage possible",
                "Long orbital periods",
            ],
            Suitability::Perfect => &[
                "24-hour orbital period",
                "Fixed position over the ground",
                "Ideal for weather and communication",
            ],
            Suitability::Extreme => &[
                "Very high energy requirements",
                "Limited Earth communication",
                "Specialized mission profile",
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StationKeeping {
    High,
    Moderate,
    Low,
}

impl StationKeeping {
    pub fn from_altitude(altitude_km: f64) -> Self {
        if altitude_km < 400.0 {
            StationKeeping::High
        } else if altitude_km < 2000.0 {
            StationKeeping::Moderate
        } else {
            StationKeeping::Low
        }
    }
}

impl fmt::Display for StationKeeping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StationKeeping::High => "High maintenance",
            StationKeeping::Moderate => "Moderate maintenance",
            StationKeeping::Low => "Low maintenance",
        };
        f.write_str(s)
    }
}

/// Rule-based assessment of a circular orbit for a given payload.
#[derive(Debug, Clone, Serialize)]
pub struct MissionAnalysis {
    pub orbit_class: OrbitClass,
    pub headline: &'static str,
    pub suitability: Suitability,
    pub station_keeping: StationKeeping,
    pub risk_factors: Vec<&'static str>,
    pub recommendations: Vec<&'static str>,
    pub launch_cost_usd: f64,
    pub mission_duration: &'static str,
    pub ground_coverage_km2: f64,
    pub launch_delta_v_kms: f64,
    #[serde(skip)]
    params: OrbitParams,
}

impl MissionAnalysis {
    pub fn evaluate(params: &OrbitParams) -> Self {
        let alt = params.altitude_km;
        let mass = params.mass_kg;

        let mut risk_factors = Vec::new();
        if alt < 200.0 {
            risk_factors.push("High atmospheric drag");
        }
        if alt > 30_000.0 {
            risk_factors.push("High radiation environment");
        }
        if mass > 10_000.0 {
            risk_factors.push("Heavy payload - high launch cost");
        }

        let mut recommendations = Vec::new();
        if (400.0..=600.0).contains(&alt) {
            recommendations.push("Excellent for Earth observation");
        }
        if (500.0..=1200.0).contains(&alt) {
            recommendations.push("Good for satellite constellations");
        }
        if near_geo(alt, GEO_MISSION_WINDOW_KM) {
            recommendations.push("Suited to geostationary applications");
        }

        MissionAnalysis {
            orbit_class: classify(alt),
            headline: headline(alt),
            suitability: Suitability::from_altitude(alt),
            station_keeping: StationKeeping::from_altitude(alt),
            risk_factors,
            recommendations,
            launch_cost_usd: launch_cost(mass, alt),
            mission_duration: mission_duration(alt),
            ground_coverage_km2: ground_coverage(alt),
            launch_delta_v_kms: params.velocity_kms(),
            params: *params,
        }
    }
}

/// One-line verdict for the info panel.
pub fn headline(altitude_km: f64) -> &'static str {
    if altitude_km < 160.0 {
        "Orbit too low - atmospheric drag"
    } else if altitude_km <= 400.0 {
        "Ideal for Earth observation"
    } else if altitude_km <= 1000.0 {
        "Good for communications"
    } else if altitude_km <= 20_000.0 {
        "Navigation satellite range"
    } else if near_geo(altitude_km, GEO_TOLERANCE_KM) {
        "Geostationary orbit"
    } else {
        "Deep space trajectory"
    }
}

pub fn launch_cost(mass_kg: f64, altitude_km: f64) -> f64 {
    mass_kg * BASE_COST_PER_KG * (1.0 + altitude_km / 10_000.0)
}

/// Rough lifetime before drag brings the satellite down.
pub fn mission_duration(altitude_km: f64) -> &'static str {
    if altitude_km < 300.0 {
        "Weeks to months"
    } else if altitude_km < 600.0 {
        "5-15 years"
    } else if altitude_km < 2000.0 {
        "Decades"
    } else {
        "Centuries+"
    }
}

/// Area of the spherical-cap footprint approximated by the horizon distance, km^2.
pub fn ground_coverage(altitude_km: f64) -> f64 {
    let horizon_sq = 2.0 * EARTH_RADIUS_KM * altitude_km + altitude_km * altitude_km;
    PI * horizon_sq
}

fn near_geo(altitude_km: f64, window_km: f64) -> bool {
    (altitude_km - GEO_ALTITUDE_KM).abs() < window_km
}

impl fmt::Display for MissionAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = &self.params;
        writeln!(f, "ORBITAL ANALYSIS")?;
        writeln!(f, "{}", "=".repeat(40))?;
        writeln!(f)?;
        writeln!(f, "MISSION PROFILE:")?;
        writeln!(f, "  Satellite mass:    {:.0} kg", p.mass_kg)?;
        writeln!(f, "  Orbital altitude:  {:.0} km", p.altitude_km)?;
        writeln!(f, "  Velocity required: {:.0} m/s", p.velocity_ms)?;
        writeln!(f, "  Orbital period:    {:.2} hours", p.period_hours())?;
        writeln!(f)?;
        writeln!(f, "MISSION SUITABILITY:")?;
        writeln!(f, "  {}", self.suitability.title())?;
        for note in self.suitability.notes() {
            writeln!(f, "  - {}", note)?;
        }
        writeln!(f)?;
        writeln!(f, "ENERGY ANALYSIS:")?;
        writeln!(f, "  Launch dV:        ~{:.1} km/s", self.launch_delta_v_kms)?;
        writeln!(f, "  Station-keeping:   {}", self.station_keeping)?;
        writeln!(f, "  Mission duration:  {}", self.mission_duration)?;
        writeln!(f, "  Launch cost:       ${:.2}M", self.launch_cost_usd / 1e6)?;
        writeln!(f, "  Ground coverage:   {:.0} km^2", self.ground_coverage_km2)?;
        if !self.risk_factors.is_empty() {
            writeln!(f)?;
            writeln!(f, "RISKS:")?;
            for r in &self.risk_factors {
                writeln!(f, "  ! {}", r)?;
            }
        }
        if !self.recommendations.is_empty() {
            writeln!(f)?;
            writeln!(f, "RECOMMENDATIONS:")?;
            for r in &self.recommendations {
                writeln!(f, "  + {}", r)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(mass: f64, alt: f64) -> MissionAnalysis {
        MissionAnalysis::evaluate(&OrbitParams::compute(mass, alt).unwrap())
    }

    #[test]
    fn low_heavy_orbit_flags_risks() {
        let a = analyze(20_000.0, 180.0);
        assert_eq!(a.suitability, Suitability::Critical);
        assert_eq!(a.station_keeping, StationKeeping::High);
        assert_eq!(a.risk_factors.len(), 2);
        assert_eq!(a.mission_duration, "Weeks to months");
    }

    #[test]
    fn observation_band_recommendations() {
        let a = analyze(1000.0, 550.0);
        assert_eq!(a.suitability, Suitability::Excellent);
        assert_eq!(a.recommendations.len(), 2);
        assert!(a.risk_factors.is_empty());
        assert_eq!(a.orbit_class, OrbitClass::Leo);
    }

    #[test]
    fn geostationary_window() {
        let a = analyze(5000.0, 35_786.0);
        assert_eq!(a.suitability, Suitability::Perfect);
        assert_eq!(a.headline, "Geostationary orbit");
        assert_eq!(a.station_keeping, StationKeeping::Low);
        assert!(a.risk_factors.contains(&"High radiation environment"));
        // Outside the narrow GEO band but inside the mission window
        let b = analyze(5000.0, 36_200.0);
        assert_eq!(b.suitability, Suitability::Perfect);
        assert_eq!(b.headline, "Deep space trajectory");
    }

    #[test]
    fn headline_bands() {
        assert_eq!(headline(150.0), "Orbit too low - atmospheric drag");
        assert_eq!(headline(400.0), "Ideal for Earth observation");
        assert_eq!(headline(900.0), "Good for communications");
        assert_eq!(headline(20_000.0), "Navigation satellite range");
        assert_eq!(headline(60_000.0), "Deep space trajectory");
    }

    #[test]
    fn cost_and_coverage() {
        assert!((launch_cost(1000.0, 0.0) - 5.0e6).abs() < 1e-6);
        assert!((launch_cost(1000.0, 10_000.0) - 1.0e7).abs() < 1e-6);
        let cov = ground_coverage(400.0);
        // horizon ~2293 km
        assert!(cov > 1.6e7 && cov < 1.7e7, "coverage {:.3e}", cov);
    }

    #[test]
    fn report_mentions_sections() {
        let text = analyze(1000.0, 400.0).to_string();
        assert!(text.contains("MISSION PROFILE"));
        assert!(text.contains("EXCELLENT"));
        assert!(text.contains("Moderate maintenance"));
    }
}
