//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the dance party.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation core, terminal rendering, input mapping).
//!
//! # Simulation Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TARGET_FPS` | 60 | Default run loop cadence (~16ms per frame) |
//! | `FRAME_RATE` | 10.0 | Animation frames per second at `animation_speed = 1` |
//! | `SCALE_X` | 60.0 | Horizontal velocity-to-columns factor |
//! | `SCALE_Y` | 30.0 | Vertical velocity-to-rows factor |
//! | `CELL_SIZE` | 20.0 | Broad-phase grid cell size |
//! | `DEFAULT_GRAVITY` | 0.1 | Downward acceleration |
//! | `GROUND_FRICTION` | 0.9 | Horizontal damping on floor contact |
//! | `VELOCITY_DECAY` | 0.99 | Per-tick velocity retention |
//!
//! Terminal cells are roughly twice as tall as they are wide, so horizontal
//! motion is scaled twice as much as vertical motion.
//!
//! # Examples
//!
//! ```
//! use kaomoji_dance_types::{Command, Variant, Viewport};
//!
//! assert_eq!(Variant::ALL.len(), 4);
//! assert_eq!(Viewport::default(), Viewport::new(80, 24));
//!
//! assert_eq!(Command::ToggleGravity.as_str(), "toggleGravity");
//! ```

/// Default run loop cadence in frames per second (≈16ms per frame)
pub const TARGET_FPS: u32 = 60;

/// Animation frames advanced per simulated second at unit animation speed.
pub const FRAME_RATE: f32 = 10.0;

/// Horizontal position scale (columns per unit velocity per second).
pub const SCALE_X: f32 = 60.0;

/// Vertical position scale (rows per unit velocity per second).
pub const SCALE_Y: f32 = 30.0;

/// Broad-phase grid cell size in terminal cells.
pub const CELL_SIZE: f32 = 20.0;

/// Initial gravity (positive pulls towards the bottom row).
pub const DEFAULT_GRAVITY: f32 = 0.1;

/// Horizontal velocity retained on floor contact.
pub const GROUND_FRICTION: f32 = 0.9;

/// Velocity retained per tick.
pub const VELOCITY_DECAY: f32 = 0.99;

/// Amplitude of the per-tick wind gust noise.
pub const WIND_JITTER: f32 = 0.5;

/// Amplitude of the per-tick free motion noise.
pub const MOTION_JITTER: f32 = 0.05;

/// Maximum absolute wind strength.
pub const MAX_WIND: f32 = 1.0;

/// Seconds between wind changes.
pub const WIND_CHANGE_SECS: f32 = 3.0;

/// Maximum absolute impulse component applied by [`Command::Impulse`].
pub const MAX_IMPULSE: f32 = 25.0;

/// Minimum display width of a frame cycle after padding.
pub const MIN_FRAME_WIDTH: usize = 10;

/// Horizontal spawn margin kept free at the right edge.
pub const SPAWN_MARGIN_X: u16 = 20;

/// Vertical spawn margin kept free at the bottom edge.
pub const SPAWN_MARGIN_Y: u16 = 5;

/// Population spawned at startup when not configured.
pub const DEFAULT_POPULATION: usize = 100;

/// Population spawned by [`Command::Reset`].
pub const RESET_POPULATION: usize = 50;

/// Dancers added by [`Command::GrowPopulation`].
pub const GROW_STEP: usize = 10;

/// Viewport assumed before the terminal reports its size.
pub const FALLBACK_VIEWPORT: (u16, u16) = (80, 24);

/// Terminal viewport dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Width as a simulation coordinate.
    pub fn extent_x(&self) -> f32 {
        self.width as f32
    }

    /// Height as a simulation coordinate.
    pub fn extent_y(&self) -> f32 {
        self.height as f32
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(FALLBACK_VIEWPORT.0, FALLBACK_VIEWPORT.1)
    }
}

/// The four dancer species
///
/// Each variant selects a distinct cycle of kaomoji frames:
/// - **Cat**: `(=^･ω･^=)` and friends
/// - **Bear**: `ʕ•ᴥ•ʔ` and friends
/// - **Rabbit**: `／(≧ x ≦)＼` and friends
/// - **Star**: longer sparkle kaomoji
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Cat,
    Bear,
    Rabbit,
    Star,
}

impl Variant {
    /// Every variant, in declaration order.
    pub const ALL: [Variant; 4] = [Variant::Cat, Variant::Bear, Variant::Rabbit, Variant::Star];
}

/// Interactive commands delivered by the input layer
///
/// Commands never mutate dancers directly; the simulation thread applies them
/// at the top of the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Stop the run loop
    Quit,
    /// Push every dancer with one random impulse
    Impulse,
    /// Flip the sign of gravity
    ToggleGravity,
    /// Replace the population with a fresh one
    Reset,
    /// Add a handful of dancers
    GrowPopulation,
    /// Accepted but currently ignored
    ShrinkPopulation,
}

impl Command {
    /// Convert to camelCase string (used in logs)
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Quit => "quit",
            Command::Impulse => "impulse",
            Command::ToggleGravity => "toggleGravity",
            Command::Reset => "reset",
            Command::GrowPopulation => "growPopulation",
            Command::ShrinkPopulation => "shrinkPopulation",
        }
    }
}
