//! Simulation core - pure, seedable, and testable
//!
//! This crate contains the dance-party physics: dancer integration, viewport
//! bouncing, the spatial-grid collision broad phase, elastic collision
//! resolution, and depth-ordered drawing. It has **no dependencies** on the
//! terminal, input devices, or wall-clock time:
//!
//! - **Seedable**: every random draw goes through an explicitly passed [`DanceRng`]
//! - **Testable**: the viewport, time step, and draw sink are plain parameters
//! - **Portable**: rendering happens through the [`DrawSink`] trait
//!
//! # Module Structure
//!
//! - [`dancer`]: one kaomoji body: kinematics, animation, collision response
//! - [`frames`]: kaomoji frame cycles, padded to a shared display width
//! - [`grid`]: uniform bucket grid answering 3x3 neighborhood queries
//! - [`pool`]: population owner and per-tick pipeline
//! - [`stage`]: gravity, wind, viewport fallback, FPS, and command handling
//! - [`rng`]: seedable random source
//! - [`tuning`]: physics constants
//!
//! # Tick pipeline
//!
//! ```text
//! integrate -> rebuild grid -> resolve collisions (grid-scoped) -> confine -> draw (by y)
//! ```
//!
//! # Example
//!
//! ```
//! use kaomoji_dance_core::{DanceRng, DrawCall, Stage, Tuning};
//! use kaomoji_dance_types::{Command, Viewport};
//!
//! let mut stage = Stage::new(Tuning::default(), DanceRng::new(7)).unwrap();
//! stage.observe_viewport(Some(Viewport::new(120, 40)));
//! stage.populate(25);
//!
//! stage.apply_command(Command::ToggleGravity);
//! stage.tick(1.0 / 60.0, Some(Viewport::new(120, 40)));
//!
//! let mut calls: Vec<DrawCall> = Vec::new();
//! stage.draw(&mut calls);
//! assert_eq!(calls.len(), 25);
//! ```

pub mod dancer;
pub mod error;
pub mod frames;
pub mod grid;
pub mod pool;
pub mod rng;
pub mod sink;
pub mod stage;
pub mod tuning;

pub use kaomoji_dance_types as types;

// Re-export commonly used types for convenience
pub use dancer::{Dancer, DancerParams, Forces};
pub use error::DanceError;
pub use frames::{display_width, frames_for, pad_frames};
pub use grid::SpatialGrid;
pub use pool::DancerPool;
pub use rng::DanceRng;
pub use sink::{DrawCall, DrawSink};
pub use stage::{FpsMeter, HudSnapshot, Stage};
pub use tuning::Tuning;
