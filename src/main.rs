//! Terminal kaomoji dance party (default binary).
//!
//! One thread ticks the stage, renders it and sleeps off the remaining frame
//! budget; a second thread polls the keyboard and feeds commands back over a
//! channel.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::{error, info};

use kaomoji_dance::core::{DanceRng, Stage, Tuning};
use kaomoji_dance::input::{CrosstermEvents, InputPoller};
use kaomoji_dance::term::{DanceView, FrameBuffer, TerminalRenderer};
use kaomoji_dance::types::{Command, Viewport};
use kaomoji_dance::{logging, AppConfig};

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    logging::init(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        error!(error = %err, "dance loop failed");
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let rng = match config.seed {
        Some(seed) => DanceRng::new(seed),
        None => DanceRng::from_entropy(),
    };
    let mut stage = Stage::new(Tuning::default(), rng)?;
    stage.observe_viewport(terminal_viewport());
    stage.populate(config.population);
    info!(
        seed = stage.seed(),
        target_fps = config.target_fps,
        "dance party started"
    );

    let running = Arc::new(AtomicBool::new(true));
    let poller = InputPoller::spawn(CrosstermEvents, Arc::clone(&running));

    let result = dance(term, &mut stage, &poller, &running, config.frame_time());

    running.store(false, Ordering::Relaxed);
    poller.join();
    info!(dancers = stage.pool().len(), "dance party over");
    result
}

fn dance(
    term: &mut TerminalRenderer,
    stage: &mut Stage,
    poller: &InputPoller,
    running: &AtomicBool,
    frame_time: Duration,
) -> Result<()> {
    let view = DanceView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut last = Instant::now();

    while running.load(Ordering::Relaxed) {
        let frame_start = Instant::now();
        let dt = frame_start.duration_since(last).as_secs_f32();
        last = frame_start;

        for cmd in poller.drain() {
            if cmd == Command::Quit {
                running.store(false, Ordering::Relaxed);
            } else {
                stage.apply_command(cmd);
            }
        }
        if !running.load(Ordering::Relaxed) {
            break;
        }

        stage.tick(dt, terminal_viewport());
        view.render_into(stage, &mut fb);
        term.draw_swap(&mut fb)?;

        if let Some(slack) = frame_time.checked_sub(frame_start.elapsed()) {
            thread::sleep(slack);
        }
    }
    Ok(())
}

/// Current terminal size, or `None` when the terminal cannot tell.
fn terminal_viewport() -> Option<Viewport> {
    crossterm::terminal::size()
        .ok()
        .map(|(w, h)| Viewport::new(w, h))
}
