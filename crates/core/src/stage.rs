//! Stage module - the environment around the dancer pool
//!
//! The stage owns everything a tick needs besides the dancers themselves:
//! the random source, gravity (its sign flips on demand), a wind that changes
//! every few seconds, the last viewport the terminal reported, and an FPS
//! meter for the HUD. Interactive [`Command`]s are applied here, on the
//! simulation thread, between ticks.

use tracing::{debug, info};

use crate::dancer::Forces;
use crate::error::DanceError;
use crate::pool::DancerPool;
use crate::rng::DanceRng;
use crate::sink::DrawSink;
use crate::tuning::Tuning;
use crate::types::{
    Command, Viewport, DEFAULT_GRAVITY, GROW_STEP, MAX_IMPULSE, MAX_WIND, RESET_POPULATION,
    WIND_CHANGE_SECS,
};

/// Frames-per-second counter fed with simulated frame durations.
#[derive(Debug, Clone, Default)]
pub struct FpsMeter {
    frames: u32,
    elapsed: f32,
    fps: u32,
}

impl FpsMeter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one frame lasting `dt` seconds; publishes a new rate every second.
    pub fn record(&mut self, dt: f32) {
        self.frames += 1;
        self.elapsed += dt;
        if self.elapsed >= 1.0 {
            self.fps = (self.frames as f32 / self.elapsed) as u32;
            self.frames = 0;
            self.elapsed = 0.0;
        }
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }
}

/// Read-only numbers for the HUD.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HudSnapshot {
    pub dancers: usize,
    pub fps: u32,
    pub gravity: f32,
    pub wind: f32,
    pub viewport: Viewport,
}

#[derive(Debug, Clone)]
pub struct Stage {
    pool: DancerPool,
    rng: DanceRng,
    gravity: f32,
    wind: f32,
    wind_timer: f32,
    viewport: Viewport,
    fps: FpsMeter,
}

impl Stage {
    pub fn new(tuning: Tuning, rng: DanceRng) -> Result<Self, DanceError> {
        Ok(Self {
            pool: DancerPool::new(tuning)?,
            rng,
            gravity: DEFAULT_GRAVITY,
            wind: 0.0,
            wind_timer: 0.0,
            viewport: Viewport::default(),
            fps: FpsMeter::new(),
        })
    }

    pub fn pool(&self) -> &DancerPool {
        &self.pool
    }

    pub fn pool_mut(&mut self) -> &mut DancerPool {
        &mut self.pool
    }

    pub fn gravity(&self) -> f32 {
        self.gravity
    }

    pub fn wind(&self) -> f32 {
        self.wind
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Adopt a reported viewport, or keep the last known one when the
    /// terminal could not report a size.
    pub fn observe_viewport(&mut self, reported: Option<Viewport>) -> Viewport {
        if let Some(vp) = reported {
            self.viewport = vp;
        }
        self.viewport
    }

    /// Replace the population with `count` dancers in the current viewport.
    pub fn populate(&mut self, count: usize) {
        self.pool.respawn(count, self.viewport, &mut self.rng);
        info!(
            target: "kaomoji_dance::stage",
            dancers = count,
            width = self.viewport.width,
            height = self.viewport.height,
            "population spawned"
        );
    }

    /// Apply one interactive command. [`Command::Quit`] belongs to the run
    /// loop and is ignored here.
    pub fn apply_command(&mut self, command: Command) {
        match command {
            Command::Impulse => {
                let fx = self.rng.symmetric(MAX_IMPULSE);
                let fy = self.rng.symmetric(MAX_IMPULSE);
                self.pool.apply_force(fx, fy);
                debug!(target: "kaomoji_dance::stage", fx, fy, "impulse");
            }
            Command::ToggleGravity => {
                self.gravity = -self.gravity;
                debug!(target: "kaomoji_dance::stage", gravity = self.gravity, "gravity flipped");
            }
            Command::Reset => self.populate(RESET_POPULATION),
            Command::GrowPopulation => {
                self.pool.grow(GROW_STEP, self.viewport, &mut self.rng);
                info!(target: "kaomoji_dance::stage", dancers = self.pool.len(), "population grown");
            }
            Command::ShrinkPopulation => {
                debug!(target: "kaomoji_dance::stage", "shrink requested; ignored");
            }
            Command::Quit => {}
        }
    }

    /// Advance the whole scene by `dt` seconds. Returns the number of
    /// resolved collisions.
    pub fn tick(&mut self, dt: f32, reported: Option<Viewport>) -> usize {
        let viewport = self.observe_viewport(reported);
        self.fps.record(dt);

        self.wind_timer += dt;
        if self.wind_timer > WIND_CHANGE_SECS {
            self.wind = self.rng.symmetric(MAX_WIND);
            self.wind_timer = 0.0;
        }

        let forces = Forces {
            gravity: self.gravity,
            wind: self.wind,
        };
        self.pool.step(dt, forces, viewport, &mut self.rng)
    }

    pub fn draw<S: DrawSink + ?Sized>(&mut self, sink: &mut S) {
        self.pool.draw(sink);
    }

    pub fn hud(&self) -> HudSnapshot {
        HudSnapshot {
            dancers: self.pool.len(),
            fps: self.fps.fps(),
            gravity: self.gravity,
            wind: self.wind,
            viewport: self.viewport,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stage() -> Stage {
        Stage::new(Tuning::default(), DanceRng::new(99)).unwrap()
    }

    #[test]
    fn fps_meter_publishes_after_one_second() {
        let mut meter = FpsMeter::new();
        for _ in 0..59 {
            meter.record(1.0 / 60.0);
        }
        assert_eq!(meter.fps(), 0);
        // Pushes the accumulated time over one second.
        meter.record(0.5);
        assert!(meter.fps() >= 39 && meter.fps() <= 41, "fps = {}", meter.fps());
    }

    #[test]
    fn missing_viewport_report_keeps_last_size() {
        let mut s = stage();
        assert_eq!(s.observe_viewport(None), Viewport::default());
        s.observe_viewport(Some(Viewport::new(120, 40)));
        assert_eq!(s.observe_viewport(None), Viewport::new(120, 40));
    }

    #[test]
    fn toggle_gravity_flips_sign() {
        let mut s = stage();
        s.apply_command(Command::ToggleGravity);
        assert_eq!(s.gravity(), -DEFAULT_GRAVITY);
        s.apply_command(Command::ToggleGravity);
        assert_eq!(s.gravity(), DEFAULT_GRAVITY);
    }

    #[test]
    fn grow_and_reset_change_population() {
        let mut s = stage();
        s.observe_viewport(Some(Viewport::new(100, 40)));
        s.populate(3);
        s.apply_command(Command::GrowPopulation);
        assert_eq!(s.hud().dancers, 3 + GROW_STEP);
        s.apply_command(Command::ShrinkPopulation);
        assert_eq!(s.hud().dancers, 3 + GROW_STEP);
        s.apply_command(Command::Reset);
        assert_eq!(s.hud().dancers, RESET_POPULATION);
    }

    #[test]
    fn wind_changes_only_after_interval() {
        let mut s = stage();
        s.tick(WIND_CHANGE_SECS, None);
        assert_eq!(s.wind(), 0.0);
        s.tick(0.25, None);
        assert!(s.wind().abs() < MAX_WIND);
        assert_eq!(s.wind_timer, 0.0);
    }

    #[test]
    fn impulse_moves_every_dancer() {
        let mut s = stage();
        s.observe_viewport(Some(Viewport::new(100, 40)));
        s.populate(5);
        s.apply_command(Command::Impulse);
        assert!(s.pool().dancers().iter().all(|d| d.vx != 0.0 || d.vy != 0.0));
    }
}
