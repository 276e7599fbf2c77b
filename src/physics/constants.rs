// ---------------------------------------------------------------------------
// Physical constants
// ---------------------------------------------------------------------------

pub const G: f64 = 6.674_30e-11; // gravitational constant, m^3/(kg s^2)
pub const EARTH_MASS: f64 = 5.972e24; // kg
pub const EARTH_RADIUS: f64 = 6_371_000.0; // mean Earth radius, m
pub const EARTH_RADIUS_KM: f64 = EARTH_RADIUS / 1000.0;
pub const MU_EARTH: f64 = G * EARTH_MASS; // m^3/s^2

/// Altitude of the geostationary belt above the mean surface, km.
pub const GEO_ALTITUDE_KM: f64 = 35_786.0;

/// Surface speed from Earth's rotation at the equator, m/s.
pub const EQUATOR_SURFACE_SPEED: f64 = 465.0;

pub const SECONDS_PER_HOUR: f64 = 3600.0;
pub const SECONDS_PER_DAY: f64 = 86_400.0;
