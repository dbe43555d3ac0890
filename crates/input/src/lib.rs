//! Terminal input for the dance party.
//!
//! Keys are read on a background thread and mapped into
//! [`crate::types::Command`]s. The run loop drains them between frames.

pub mod map;
pub mod poller;

pub use kaomoji_dance_types as types;

pub use map::{handle_key_event, should_quit};
pub use poller::{CrosstermEvents, EventSource, InputPoller, POLL_INTERVAL};
