//! Terminal rendering for the dance party.
//!
//! The stage is rendered into a plain framebuffer of styled cells which is
//! then diffed and flushed through crossterm. No widget or layout library is
//! involved; glyph widths are measured with `unicode-width` so kaomoji made of
//! wide characters line up with the simulation's box sizes.

pub mod dance_view;
pub mod fb;
pub mod renderer;

pub use kaomoji_dance_core as core;
pub use kaomoji_dance_types as types;

pub use dance_view::{palette, DanceView, FrameSink, HELP, TITLE};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb, CONTINUATION};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
