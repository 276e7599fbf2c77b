//! Altitude-to-pixel mapping for the 2D orbit view.
//!
//! Real altitudes span three orders of magnitude (150 km to 100,000 km), so a
//! single linear scale would either squash LEO into Earth's limb or push GEO
//! off-screen. Low altitudes are drawn linearly, high ones logarithmically, and
//! the linear slope is chosen so both pieces meet at the threshold.

use nalgebra::Point2;

use crate::config::{AnimationConfig, DisplayConfig};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub earth_radius: f64,
    margin: f64,
    min_gap: f64,
    linear_threshold_km: f64,
    log_reference_km: f64,
}

impl Viewport {
    /// Size Earth's disc from the window: min(w, h) / divisor, clamped.
    pub fn adaptive(width: f64, height: f64, cfg: &DisplayConfig) -> Self {
        let earth_radius = (width.min(height) / cfg.earth_radius_divisor)
            .clamp(cfg.earth_radius_min, cfg.earth_radius_max);
        Self {
            width,
            height,
            earth_radius,
            margin: cfg.margin,
            min_gap: cfg.min_gap,
            linear_threshold_km: cfg.linear_threshold_km,
            log_reference_km: cfg.log_reference_km,
        }
    }

    pub fn from_config(cfg: &DisplayConfig) -> Self {
        Self::adaptive(cfg.window_width, cfg.window_height, cfg)
    }

    pub fn center(&self) -> Point2<f64> {
        Point2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Pixels available between Earth's limb and the margin.
    pub fn available_radius(&self) -> f64 {
        (self.width.min(self.height) / 2.0 - self.earth_radius - self.margin).max(0.0)
    }

    /// Orbit radius on screen for `altitude_km`, measured from Earth's center.
    ///
    /// Above the linear threshold the fraction of the available radius is
    /// `log10(h) / log10(reference)`. Below it the fraction grows linearly and
    /// reaches the log value exactly at the threshold.
    pub fn display_radius(&self, altitude_km: f64) -> f64 {
        let avail = self.available_radius();
        let h = altitude_km.max(0.0);

        let fraction = if h <= self.linear_threshold_km {
            h * self.log_fraction(self.linear_threshold_km) / self.linear_threshold_km
        } else {
            self.log_fraction(h)
        };
        let radius = self.earth_radius + avail * fraction;

        let lo = self.earth_radius + self.min_gap;
        let hi = self.earth_radius + avail;
        radius.min(hi).max(lo)
    }

    /// How many Earth radii the drawn orbit spans.
    pub fn scale_ratio(&self, altitude_km: f64) -> f64 {
        self.display_radius(altitude_km) / self.earth_radius
    }

    fn log_fraction(&self, altitude_km: f64) -> f64 {
        (altitude_km.log10() / self.log_reference_km.log10()).clamp(0.0, 1.0)
    }
}

// ---------------------------------------------------------------------------
// Derived marker sizes
// ---------------------------------------------------------------------------

/// Number of trail points kept for an orbit of `radius` px.
pub fn trail_capacity(radius: f64, anim: &AnimationConfig) -> usize {
    ((radius * anim.trail_factor) as usize).clamp(anim.trail_min, anim.trail_max)
}

pub fn satellite_size(radius: f64) -> f64 {
    (radius / 20.0).clamp(4.0, 10.0)
}

pub fn velocity_vector_length(radius: f64) -> f64 {
    (radius / 4.0).min(40.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::from_config(&DisplayConfig::default())
    }

    #[test]
    fn earth_radius_is_clamped() {
        let cfg = DisplayConfig::default();
        assert_eq!(Viewport::adaptive(1200.0, 800.0, &cfg).earth_radius, 60.0);
        assert_eq!(Viewport::adaptive(200.0, 160.0, &cfg).earth_radius, 30.0);
        assert_eq!(Viewport::adaptive(400.0, 400.0, &cfg).earth_radius, 50.0);
    }

    #[test]
    fn radius_is_monotonic_in_altitude() {
        let vp = viewport();
        let mut prev = 0.0;
        let mut h = 150.0;
        while h <= 100_000.0 {
            let r = vp.display_radius(h);
            assert!(r >= prev, "radius shrank at {:.0} km: {} < {}", h, r, prev);
            prev = r;
            h *= 1.05;
        }
    }

    #[test]
    fn branches_meet_at_threshold() {
        let vp = viewport();
        let below = vp.display_radius(999.999);
        let above = vp.display_radius(1000.001);
        assert!((below - above).abs() < 0.01, "{} vs {}", below, above);
    }

    #[test]
    fn linear_branch_values() {
        // 1200x800: earth 60 px, 290 px available, log10(1000)/log10(1e5) = 0.6
        let vp = viewport();
        assert_eq!(vp.available_radius(), 290.0);
        let r = vp.display_radius(408.0);
        assert!((r - 130.992).abs() < 1e-9, "408 km drawn at {}", r);
        let r = vp.display_radius(1000.0);
        assert!((r - 234.0).abs() < 1e-9, "1000 km drawn at {}", r);
    }

    #[test]
    fn every_orbit_fits_on_screen() {
        for (w, h) in [(1200.0, 800.0), (640.0, 480.0), (1920.0, 1080.0)] {
            let vp = Viewport::adaptive(w, h, &DisplayConfig::default());
            for alt in [150.0, 408.0, 2000.0, 20_200.0, 35_786.0, 100_000.0, 1e7] {
                let r = vp.display_radius(alt);
                assert!(r > vp.earth_radius, "orbit inside Earth at {} km", alt);
                assert!(r + satellite_size(r) <= w.min(h) / 2.0, "orbit off-screen at {} km", alt);
            }
        }
    }

    #[test]
    fn lowest_orbit_keeps_gap() {
        let vp = viewport();
        assert!(vp.display_radius(1.0) >= vp.earth_radius + 20.0);
        assert!(vp.scale_ratio(150.0) > 1.0);
    }

    #[test]
    fn marker_sizes() {
        let anim = AnimationConfig::default();
        assert_eq!(trail_capacity(10.0, &anim), 100);
        assert_eq!(trail_capacity(50.0, &anim), 150);
        assert_eq!(trail_capacity(500.0, &anim), 400);
        assert_eq!(satellite_size(40.0), 4.0);
        assert_eq!(satellite_size(160.0), 8.0);
        assert_eq!(velocity_vector_length(400.0), 40.0);
        assert_eq!(velocity_vector_length(100.0), 25.0);
    }
}
