use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::config::AnimationConfig;
use crate::display::Viewport;
use crate::error::{OrbitError, Result};
use crate::physics::OrbitParams;
use crate::satellite::Satellite;

use super::animator::{Animator, Frame};

// ---------------------------------------------------------------------------
// Commands from the input side
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub enum Command {
    SetSatellite(Satellite),
    SetViewport(Viewport),
    Toggle,
    Faster,
    Slower,
    SetSpeed(f64),
    ClearTrail,
}

// ---------------------------------------------------------------------------
// Frame sinks
// ---------------------------------------------------------------------------

/// Receives every frame produced by the render loop.
pub trait FrameSink: Send + 'static {
    fn publish(&mut self, frame: Frame);
}

impl<F> FrameSink for F
where
    F: FnMut(Frame) + Send + 'static,
{
    fn publish(&mut self, frame: Frame) {
        self(frame)
    }
}

/// Shared slot holding the most recent frame, for renderers that poll.
#[derive(Debug, Clone, Default)]
pub struct LatestFrame {
    slot: Arc<Mutex<Option<Frame>>>,
}

impl LatestFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<Frame> {
        self.slot.lock().ok().and_then(|guard| guard.clone())
    }

    /// Adapt into a sink that also runs `notify` after each store.
    pub fn sink_with<N>(&self, mut notify: N) -> impl FrameSink
    where
        N: FnMut() + Send + 'static,
    {
        let slot = Arc::clone(&self.slot);
        move |frame: Frame| {
            if let Ok(mut guard) = slot.lock() {
                *guard = Some(frame);
            }
            notify();
        }
    }
}

impl FrameSink for LatestFrame {
    fn publish(&mut self, frame: Frame) {
        if let Ok(mut guard) = self.slot.lock() {
            *guard = Some(frame);
        }
    }
}

// ---------------------------------------------------------------------------
// Background render loop
// ---------------------------------------------------------------------------

/// Ticks an [`Animator`] on its own thread at a fixed rate.
///
/// The loop keeps going while the shared `running` flag is set; clearing it
/// (via [`RenderLoop::stop`], drop, or the flag handle) is the only way to end it.
pub struct RenderLoop {
    running: Arc<AtomicBool>,
    commands: Sender<Command>,
    handle: Option<JoinHandle<()>>,
}

impl RenderLoop {
    pub fn spawn<S: FrameSink>(
        satellite: Satellite,
        viewport: Viewport,
        config: AnimationConfig,
        sink: S,
    ) -> Result<Self> {
        let params = satellite.params()?;
        if config.fps == 0 {
            return Err(OrbitError::config("animation.fps must be at least 1"));
        }

        let running = Arc::new(AtomicBool::new(true));
        let (tx, rx) = mpsc::channel();

        let flag = Arc::clone(&running);
        let handle = thread::Builder::new()
            .name("render-loop".into())
            .spawn(move || {
                let worker = Worker {
                    animator: Animator::new(config.clone()),
                    params,
                    viewport,
                    interval: Duration::from_secs_f64(1.0 / config.fps as f64),
                };
                worker.run(&flag, rx, sink);
            })?;

        log::info!(
            "render loop started for {} at {:.0} km",
            satellite.name,
            satellite.altitude_km
        );

        Ok(Self {
            running,
            commands: tx,
            handle: Some(handle),
        })
    }

    pub fn send(&self, cmd: Command) -> Result<()> {
        self.commands.send(cmd).map_err(|e| OrbitError::RenderLoop {
            message: format!("render loop is gone: {}", e),
        })
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Handle to the termination flag. Storing `false` ends the loop.
    pub fn running_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.running)
    }

    pub fn stop(&mut self) {
        self.running.store(false, Ordering::Release);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::error!("render loop thread panicked");
            } else {
                log::info!("render loop stopped");
            }
        }
    }
}

impl Drop for RenderLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

struct Worker {
    animator: Animator,
    params: OrbitParams,
    viewport: Viewport,
    interval: Duration,
}

impl Worker {
    fn run<S: FrameSink>(mut self, running: &AtomicBool, rx: Receiver<Command>, mut sink: S) {
        let dt = self.interval.as_secs_f64();

        while running.load(Ordering::Acquire) {
            let started = Instant::now();

            loop {
                match rx.try_recv() {
                    Ok(cmd) => self.apply(cmd),
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        running.store(false, Ordering::Release);
                        return;
                    }
                }
            }

            self.animator.tick(&self.params, &self.viewport, dt);
            sink.publish(self.animator.frame(&self.params, &self.viewport));

            if let Some(rest) = self.interval.checked_sub(started.elapsed()) {
                thread::sleep(rest);
            }
        }
    }

    fn apply(&mut self, cmd: Command) {
        match cmd {
            Command::SetSatellite(sat) => match sat.params() {
                Ok(p) => self.params = p,
                Err(e) => log::warn!("ignoring satellite update: {}", e),
            },
            Command::SetViewport(vp) => {
                if vp != self.viewport {
                    self.viewport = vp;
                    self.animator.clear_trail();
                }
            }
            Command::Toggle => {
                let on = self.animator.toggle();
                log::debug!("animation {}", if on { "running" } else { "paused" });
            }
            Command::Faster => {
                self.animator.faster();
            }
            Command::Slower => {
                self.animator.slower();
            }
            Command::SetSpeed(s) => {
                self.animator.set_speed(s);
            }
            Command::ClearTrail => self.animator.clear_trail(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DisplayConfig;

    fn fast_config() -> AnimationConfig {
        AnimationConfig {
            fps: 200,
            ..AnimationConfig::default()
        }
    }

    fn viewport() -> Viewport {
        Viewport::from_config(&DisplayConfig::default())
    }

    fn wait_for<F: Fn() -> bool>(cond: F) -> bool {
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline {
            if cond() {
                return true;
            }
            thread::sleep(Duration::from_millis(5));
        }
        false
    }

    #[test]
    fn publishes_frames_and_stops_on_flag() {
        let latest = LatestFrame::new();
        let mut rl =
            RenderLoop::spawn(Satellite::default(), viewport(), fast_config(), latest.clone())
                .unwrap();
        rl.send(Command::Toggle).unwrap();

        assert!(wait_for(|| latest.get().map_or(false, |f| f.running && f.angle > 0.0)));

        rl.stop();
        assert!(!rl.is_running());
        assert!(rl.send(Command::Toggle).is_err());
    }

    #[test]
    fn external_flag_ends_loop() {
        let latest = LatestFrame::new();
        let rl = RenderLoop::spawn(Satellite::default(), viewport(), fast_config(), latest.clone())
            .unwrap();
        let flag = rl.running_flag();
        assert!(wait_for(|| latest.get().is_some()));
        flag.store(false, Ordering::Release);
        drop(rl);
        assert!(!flag.load(Ordering::Acquire));
    }

    #[test]
    fn satellite_updates_reach_worker() {
        let latest = LatestFrame::new();
        let rl = RenderLoop::spawn(Satellite::default(), viewport(), fast_config(), latest.clone())
            .unwrap();
        rl.send(Command::SetSatellite(Satellite::new("geo", 5000.0, 35_786.0)))
            .unwrap();
        assert!(wait_for(|| latest
            .get()
            .map_or(false, |f| f.params.altitude_km == 35_786.0)));

        // Invalid update is ignored, previous params stay
        rl.send(Command::SetSatellite(Satellite::new("bad", -1.0, 400.0)))
            .unwrap();
        thread::sleep(Duration::from_millis(50));
        assert_eq!(latest.get().unwrap().params.altitude_km, 35_786.0);
    }

    #[test]
    fn rejects_invalid_initial_satellite() {
        let res = RenderLoop::spawn(
            Satellite::new("bad", 1000.0, 0.0),
            viewport(),
            fast_config(),
            LatestFrame::new(),
        );
        assert!(matches!(res, Err(OrbitError::InvalidParameter { .. })));
    }

    #[test]
    fn closure_sink_counts_frames() {
        let count = Arc::new(std::sync::atomic::AtomicUsize::new(0));
        let c = Arc::clone(&count);
        let mut rl = RenderLoop::spawn(
            Satellite::default(),
            viewport(),
            fast_config(),
            move |_frame: Frame| {
                c.fetch_add(1, Ordering::Relaxed);
            },
        )
        .unwrap();
        assert!(wait_for(|| count.load(Ordering::Relaxed) >= 3));
        rl.stop();
        let seen = count.load(Ordering::Relaxed);
        thread::sleep(Duration::from_millis(30));
        assert_eq!(count.load(Ordering::Relaxed), seen);
    }
}
