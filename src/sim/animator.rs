use std::collections::VecDeque;
use std::f64::consts::TAU;

use nalgebra::Vector2;

use crate::config::AnimationConfig;
use crate::display::scale::{satellite_size, trail_capacity, velocity_vector_length};
use crate::display::Viewport;
use crate::physics::{satellite_offset, velocity_direction, OrbitParams};
use crate::satellite::{Bounds, Satellite};

// ---------------------------------------------------------------------------
// Frame snapshot handed to renderers
// ---------------------------------------------------------------------------

/// Everything needed to draw one frame. Offsets are in pixels relative to
/// Earth's center, +y pointing down the screen.
#[derive(Debug, Clone)]
pub struct Frame {
    pub angle: f64,
    pub satellite: Vector2<f64>,
    pub velocity_tip: Vector2<f64>,
    pub display_radius: f64,
    pub satellite_size: f64,
    pub trail: Vec<Vector2<f64>>,
    pub running: bool,
    pub speed: f64,
    pub params: OrbitParams,
    pub viewport: Viewport,
}

// ---------------------------------------------------------------------------
// Animator
// ---------------------------------------------------------------------------

/// Angular position, trail, and playback speed for a single satellite.
#[derive(Debug, Clone)]
pub struct Animator {
    angle: f64,
    trail: VecDeque<Vector2<f64>>,
    running: bool,
    speed: f64,
    config: AnimationConfig,
}

impl Animator {
    pub fn new(config: AnimationConfig) -> Self {
        Self {
            angle: 0.0,
            trail: VecDeque::new(),
            running: false,
            speed: config.speed,
            config,
        }
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn trail_len(&self) -> usize {
        self.trail.len()
    }

    /// Start or pause. Starting restarts from angle zero with an empty trail.
    pub fn toggle(&mut self) -> bool {
        self.running = !self.running;
        if self.running {
            self.angle = 0.0;
            self.trail.clear();
        }
        self.running
    }

    pub fn clear_trail(&mut self) {
        self.trail.clear();
    }

    pub fn faster(&mut self) -> f64 {
        self.set_speed(self.speed * self.config.speed_up_factor)
    }

    pub fn slower(&mut self) -> f64 {
        self.set_speed(self.speed * self.config.speed_down_factor)
    }

    pub fn set_speed(&mut self, speed: f64) -> f64 {
        if speed.is_finite() {
            self.speed = speed.clamp(self.config.speed_min, self.config.speed_max);
        }
        self.speed
    }

    /// Advance by `dt` seconds of wall time. No-op while paused.
    pub fn tick(&mut self, params: &OrbitParams, viewport: &Viewport, dt: f64) {
        if !self.running || params.period_s <= 0.0 {
            return;
        }

        let real_rate = TAU / params.period_s;
        let rate = real_rate * self.config.visual_multiplier * self.speed;
        self.angle = (self.angle + rate * dt).rem_euclid(TAU);

        let radius = viewport.display_radius(params.altitude_km);
        self.trail.push_back(satellite_offset(radius, self.angle));

        let cap = trail_capacity(radius, &self.config);
        while self.trail.len() > cap {
            self.trail.pop_front();
        }
    }

    pub fn frame(&self, params: &OrbitParams, viewport: &Viewport) -> Frame {
        let radius = viewport.display_radius(params.altitude_km);
        let satellite = satellite_offset(radius, self.angle);
        let velocity_tip = satellite + velocity_direction(self.angle) * velocity_vector_length(radius);
        Frame {
            angle: self.angle,
            satellite,
            velocity_tip,
            display_radius: radius,
            satellite_size: satellite_size(radius),
            trail: self.trail.iter().copied().collect(),
            running: self.running,
            speed: self.speed,
            params: *params,
            viewport: *viewport,
        }
    }
}

// ---------------------------------------------------------------------------
// Keyboard-style parameter nudges
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub struct Controls {
    pub bounds: Bounds,
}

impl Controls {
    pub fn new(bounds: Bounds) -> Self {
        Self { bounds }
    }

    pub fn altitude_up(&self, sat: &mut Satellite) {
        sat.altitude_km = self.bounds.altitude.step_up(sat.altitude_km);
    }

    pub fn altitude_down(&self, sat: &mut Satellite) {
        sat.altitude_km = self.bounds.altitude.step_down(sat.altitude_km);
    }

    pub fn mass_up(&self, sat: &mut Satellite) {
        sat.mass_kg = self.bounds.mass.step_up(sat.mass_kg);
    }

    pub fn mass_down(&self, sat: &mut Satellite) {
        sat.mass_kg = self.bounds.mass.step_down(sat.mass_kg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DisplayConfig;

    fn setup() -> (Animator, OrbitParams, Viewport) {
        let params = OrbitParams::compute(1000.0, 400.0).unwrap();
        let vp = Viewport::from_config(&DisplayConfig::default());
        (Animator::new(AnimationConfig::default()), params, vp)
    }

    #[test]
    fn paused_animator_does_not_move() {
        let (mut anim, params, vp) = setup();
        anim.tick(&params, &vp, 0.016);
        assert_eq!(anim.angle(), 0.0);
        assert_eq!(anim.trail_len(), 0);
    }

    #[test]
    fn angle_advances_at_scaled_orbital_rate() {
        let (mut anim, params, vp) = setup();
        anim.toggle();
        anim.tick(&params, &vp, 0.016);
        let expected = TAU / params.period_s * 50.0 * 0.016;
        assert!((anim.angle() - expected).abs() < 1e-12);
        assert_eq!(anim.trail_len(), 1);
    }

    #[test]
    fn angle_stays_wrapped() {
        let (mut anim, params, vp) = setup();
        anim.toggle();
        anim.set_speed(10.0);
        for _ in 0..10_000 {
            anim.tick(&params, &vp, 0.016);
            assert!((0.0..TAU).contains(&anim.angle()));
        }
    }

    #[test]
    fn trail_is_capped() {
        let (mut anim, params, vp) = setup();
        anim.toggle();
        for _ in 0..2000 {
            anim.tick(&params, &vp, 0.016);
        }
        let cap = trail_capacity(vp.display_radius(400.0), &AnimationConfig::default());
        assert_eq!(anim.trail_len(), cap);
    }

    #[test]
    fn restart_resets_angle_and_trail() {
        let (mut anim, params, vp) = setup();
        anim.toggle();
        for _ in 0..10 {
            anim.tick(&params, &vp, 0.016);
        }
        assert!(!anim.toggle());
        assert!(anim.angle() > 0.0);
        assert!(anim.toggle());
        assert_eq!(anim.angle(), 0.0);
        assert_eq!(anim.trail_len(), 0);
    }

    #[test]
    fn speed_is_bounded() {
        let (mut anim, _, _) = setup();
        for _ in 0..100 {
            anim.faster();
        }
        assert_eq!(anim.speed(), 10.0);
        for _ in 0..100 {
            anim.slower();
        }
        assert_eq!(anim.speed(), 0.1);
    }

    #[test]
    fn frame_geometry() {
        let (anim, params, vp) = setup();
        let frame = anim.frame(&params, &vp);
        assert!((frame.satellite.norm() - frame.display_radius).abs() < 1e-9);
        let arrow = frame.velocity_tip - frame.satellite;
        assert!(arrow.dot(&frame.satellite).abs() < 1e-6);
    }

    #[test]
    fn controls_respect_bounds() {
        let controls = Controls::new(Bounds::default());
        let mut sat = Satellite::new("t", 150.0, 150.0);
        controls.altitude_down(&mut sat);
        controls.mass_down(&mut sat);
        assert_eq!(sat.altitude_km, 150.0);
        assert_eq!(sat.mass_kg, 50.0);
        controls.altitude_up(&mut sat);
        controls.mass_up(&mut sat);
        assert_eq!(sat.altitude_km, 151.0);
        assert_eq!(sat.mass_kg, 150.0);
    }
}
