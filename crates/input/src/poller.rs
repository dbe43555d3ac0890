//! Background keyboard polling.
//!
//! A dedicated thread waits on the terminal for key events with a short poll
//! timeout and forwards mapped [`Command`]s over a channel. The simulation
//! thread drains the channel once per frame, so commands never touch the
//! stage concurrently. The shared `running` flag stops the thread; a quit key
//! clears it from this side too.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent};
use tracing::{debug, warn};

use crate::map::handle_key_event;
use crate::types::Command;

/// How long one poll waits before re-checking the running flag.
pub const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// A source of key events.
pub trait EventSource: Send + 'static {
    /// Wait up to `timeout` for the next key press. Non-key events yield
    /// `Ok(None)`.
    fn next_key(&mut self, timeout: Duration) -> Result<Option<KeyEvent>>;
}

/// Key events from the real terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn next_key(&mut self, timeout: Duration) -> Result<Option<KeyEvent>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) => Ok(Some(key)),
            _ => Ok(None),
        }
    }
}

pub struct InputPoller {
    rx: Receiver<Command>,
    handle: Option<JoinHandle<()>>,
}

impl InputPoller {
    pub fn spawn<S: EventSource>(source: S, running: Arc<AtomicBool>) -> Self {
        let (tx, rx) = mpsc::channel();
        let handle = thread::spawn(move || poll_loop(source, running, tx));
        Self {
            rx,
            handle: Some(handle),
        }
    }

    /// Every command queued since the last drain, in arrival order.
    pub fn drain(&self) -> impl Iterator<Item = Command> + '_ {
        self.rx.try_iter()
    }

    /// Wait for the polling thread to finish. The caller clears `running`
    /// first.
    pub fn join(mut self) {
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!(target: "kaomoji_dance::input", "input thread panicked");
            }
        }
    }
}

fn poll_loop<S: EventSource>(mut source: S, running: Arc<AtomicBool>, tx: Sender<Command>) {
    while running.load(Ordering::Relaxed) {
        let key = match source.next_key(POLL_INTERVAL) {
            Ok(Some(key)) => key,
            Ok(None) => continue,
            Err(err) => {
                warn!(target: "kaomoji_dance::input", error = %err, "input polling failed");
                running.store(false, Ordering::Relaxed);
                break;
            }
        };
        let Some(cmd) = handle_key_event(key) else {
            continue;
        };
        debug!(target: "kaomoji_dance::input", command = cmd.as_str(), "key mapped");
        if cmd == Command::Quit {
            running.store(false, Ordering::Relaxed);
        }
        if tx.send(cmd).is_err() {
            break;
        }
    }
}
