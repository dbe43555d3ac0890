//! Dancer module - a single animated kaomoji body
//!
//! A dancer owns its kinematic state (position, velocity), its physical
//! constants (mass, bounce), and its appearance cycle. Positions are
//! floating-point terminal coordinates; the bounding box is the padded frame
//! width times `size` by one row times `size`.

use crate::error::DanceError;
use crate::frames::{display_width, frames_for};
use crate::rng::DanceRng;
use crate::sink::DrawSink;
use crate::tuning::Tuning;
use crate::types::{Variant, Viewport};

/// Environmental accelerations applied during integration.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Forces {
    pub gravity: f32,
    pub wind: f32,
}

/// Per-dancer constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DancerParams {
    pub animation_speed: f32,
    pub size: f32,
    pub mass: f32,
    /// Restitution coefficient in `[0, 1]`.
    pub bounce: f32,
    /// Palette index (1..=15).
    pub color: u8,
}

impl Default for DancerParams {
    fn default() -> Self {
        Self {
            animation_speed: 0.1,
            size: 1.0,
            mass: 1.0,
            bounce: 0.7,
            color: 1,
        }
    }
}

impl DancerParams {
    /// Draw constants from the classic ranges.
    pub fn random(rng: &mut DanceRng) -> Self {
        let animation_speed = rng.stepped(0.1, 0.05, 10);
        let size = rng.stepped(1.0, 0.2, 5);
        let mass = rng.stepped(1.0, 0.1, 10);
        let bounce = rng.stepped(0.7, 0.1, 4).min(1.0);
        let color = 1 + rng.index(15) as u8;
        Self {
            animation_speed,
            size,
            mass,
            bounce,
            color,
        }
    }

    pub fn validate(&self) -> Result<(), DanceError> {
        if !(self.mass > 0.0) {
            return Err(DanceError::InvalidDancer("mass must be positive"));
        }
        if !(self.size > 0.0) {
            return Err(DanceError::InvalidDancer("size must be positive"));
        }
        if !(self.animation_speed > 0.0) {
            return Err(DanceError::InvalidDancer("animation_speed must be positive"));
        }
        if !(0.0..=1.0).contains(&self.bounce) {
            return Err(DanceError::InvalidDancer("bounce must be in [0, 1]"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dancer {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    frames: Vec<String>,
    frame: usize,
    /// Fractional progress towards the next frame.
    frame_acc: f32,
    variant: Variant,
    params: DancerParams,
    width: f32,
    height: f32,
}

impl Dancer {
    /// Create a dancer with the variant's standard frame cycle.
    pub fn new(x: f32, y: f32, variant: Variant, params: DancerParams) -> Result<Self, DanceError> {
        Self::with_frames(x, y, variant, frames_for(variant), params)
    }

    /// Create a dancer with a custom, already padded frame cycle.
    pub fn with_frames(
        x: f32,
        y: f32,
        variant: Variant,
        frames: Vec<String>,
        params: DancerParams,
    ) -> Result<Self, DanceError> {
        if frames.is_empty() {
            return Err(DanceError::InvalidDancer("frame cycle must not be empty"));
        }
        params.validate()?;
        let widest = frames.iter().map(|f| display_width(f)).max().unwrap_or(0);
        if widest == 0 {
            return Err(DanceError::InvalidDancer("frames must have visible width"));
        }
        Ok(Self::build(x, y, variant, frames, params, widest))
    }

    /// Spawn a dancer with random constants drawn from `rng`.
    pub fn spawn(x: f32, y: f32, variant: Variant, rng: &mut DanceRng) -> Self {
        let frames = frames_for(variant);
        let widest = frames.iter().map(|f| display_width(f)).max().unwrap_or(0);
        Self::build(x, y, variant, frames, DancerParams::random(rng), widest)
    }

    fn build(
        x: f32,
        y: f32,
        variant: Variant,
        frames: Vec<String>,
        params: DancerParams,
        widest: usize,
    ) -> Self {
        Self {
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            frames,
            frame: 0,
            frame_acc: 0.0,
            variant,
            params,
            width: widest as f32 * params.size,
            height: params.size,
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn params(&self) -> &DancerParams {
        &self.params
    }

    pub fn mass(&self) -> f32 {
        self.params.mass
    }

    pub fn bounce(&self) -> f32 {
        self.params.bounce
    }

    pub fn color(&self) -> u8 {
        self.params.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Glyph string of the current frame.
    pub fn glyph(&self) -> &str {
        &self.frames[self.frame]
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Advance by one tick.
    pub fn integrate(
        &mut self,
        dt: f32,
        forces: Forces,
        viewport: Viewport,
        tuning: &Tuning,
        rng: &mut DanceRng,
    ) {
        self.vy += forces.gravity * dt;
        self.vx += (forces.wind + rng.symmetric(tuning.wind_jitter)) * dt;

        self.vx += rng.symmetric(tuning.motion_jitter);
        self.vy += rng.symmetric(tuning.motion_jitter);

        self.x += self.vx * dt * tuning.scale_x;
        self.y += self.vy * dt * tuning.scale_y;

        self.bounce_off_walls(viewport, tuning.ground_friction);
        self.advance_animation(dt, tuning.frame_rate);

        self.vx *= tuning.velocity_decay;
        self.vy *= tuning.velocity_decay;
    }

    fn bounce_off_walls(&mut self, viewport: Viewport, ground_friction: f32) {
        let (w, h) = (viewport.extent_x(), viewport.extent_y());
        let bounce = self.params.bounce;

        if self.x < 0.0 {
            self.x = 0.0;
            self.vx = -self.vx * bounce;
        } else if self.x + self.width > w {
            self.x = w - self.width;
            self.vx = -self.vx * bounce;
        }

        if self.y < 0.0 {
            self.y = 0.0;
            self.vy = -self.vy * bounce;
        } else if self.y + self.height > h {
            self.y = h - self.height;
            self.vy = -self.vy * bounce;
            self.vx *= ground_friction;
        }
    }

    fn advance_animation(&mut self, dt: f32, frame_rate: f32) {
        self.frame_acc += dt * self.params.animation_speed * frame_rate;
        if self.frame_acc >= 1.0 {
            self.frame = (self.frame + 1) % self.frames.len();
            self.frame_acc -= 1.0;
        }
    }

    /// Clamp the position into the viewport without touching velocity.
    pub fn confine(&mut self, viewport: Viewport) {
        let max_x = viewport.extent_x() - self.width;
        let max_y = viewport.extent_y() - self.height;
        self.x = self.x.min(max_x).max(0.0);
        self.y = self.y.min(max_y).max(0.0);
    }

    /// Strict AABB overlap; boxes that merely touch do not collide.
    pub fn collides_with(&self, other: &Dancer) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }

    /// Push the pair apart along the center line and swap bounce-scaled velocities.
    ///
    /// The exchange is intentionally not mass-weighted: each side receives the
    /// other's pre-collision velocity scaled by its own `bounce`.
    pub fn resolve_collision(&mut self, other: &mut Dancer) {
        let (ax, ay) = self.center();
        let (bx, by) = other.center();
        let dx = bx - ax;
        let dy = by - ay;

        let distance = (dx * dx + dy * dy).sqrt();
        if distance == 0.0 {
            return;
        }
        let nx = dx / distance;
        let ny = dy / distance;

        let overlap = ((self.width + other.width) * 0.5 - distance).max(0.0);
        let push = overlap * 0.5;
        self.x -= nx * push;
        self.y -= ny * push;
        other.x += nx * push;
        other.y += ny * push;

        let (vx, vy) = (self.vx, self.vy);
        self.vx = other.vx * self.params.bounce;
        self.vy = other.vy * self.params.bounce;
        other.vx = vx * other.params.bounce;
        other.vy = vy * other.params.bounce;
    }

    /// Emit the current frame at the truncated cell position.
    pub fn draw<S: DrawSink + ?Sized>(&self, sink: &mut S) {
        sink.draw_glyph(self.x as i32, self.y as i32, self.params.color, self.glyph());
    }
}
