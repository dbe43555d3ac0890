//! Physics tuning constants.
//!
//! Defaults reproduce the classic dance-party feel; tests usually switch the
//! random terms off with [`Tuning::without_jitter`].

use crate::error::DanceError;
use crate::types::{
    CELL_SIZE, FRAME_RATE, GROUND_FRICTION, MOTION_JITTER, SCALE_X, SCALE_Y, VELOCITY_DECAY,
    WIND_JITTER,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tuning {
    /// Animation frames per second at unit animation speed.
    pub frame_rate: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    /// Horizontal velocity retained on floor contact.
    pub ground_friction: f32,
    /// Velocity retained per tick.
    pub velocity_decay: f32,
    pub wind_jitter: f32,
    pub motion_jitter: f32,
    /// Requested broad-phase cell size; the pool may widen it to fit the largest dancer.
    pub cell_size: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            frame_rate: FRAME_RATE,
            scale_x: SCALE_X,
            scale_y: SCALE_Y,
            ground_friction: GROUND_FRICTION,
            velocity_decay: VELOCITY_DECAY,
            wind_jitter: WIND_JITTER,
            motion_jitter: MOTION_JITTER,
            cell_size: CELL_SIZE,
        }
    }
}

impl Tuning {
    /// Same constants with both random noise terms disabled.
    pub fn without_jitter(mut self) -> Self {
        self.wind_jitter = 0.0;
        self.motion_jitter = 0.0;
        self
    }

    pub fn with_cell_size(mut self, cell_size: f32) -> Self {
        self.cell_size = cell_size;
        self
    }

    pub fn validate(&self) -> Result<(), DanceError> {
        if !(self.cell_size > 0.0) {
            return Err(DanceError::InvalidTuning("cell_size must be positive"));
        }
        if !(self.frame_rate > 0.0) {
            return Err(DanceError::InvalidTuning("frame_rate must be positive"));
        }
        if !(self.scale_x > 0.0 && self.scale_y > 0.0) {
            return Err(DanceError::InvalidTuning("position scales must be positive"));
        }
        if !(self.velocity_decay > 0.0 && self.velocity_decay <= 1.0) {
            return Err(DanceError::InvalidTuning("velocity_decay must be in (0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.ground_friction) {
            return Err(DanceError::InvalidTuning("ground_friction must be in [0, 1]"));
        }
        if self.wind_jitter < 0.0 || self.motion_jitter < 0.0 {
            return Err(DanceError::InvalidTuning("jitter amplitudes must be non-negative"));
        }
        Ok(())
    }
}
