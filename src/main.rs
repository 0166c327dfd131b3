//! Terminal blockfall runner.
//!
//! This is the gameplay entrypoint. It uses crossterm for input and a custom
//! screen-buffer renderer (no ratatui widgets/layout). The engine never reads
//! the clock; this loop owns the gravity deadline and feeds ticks in.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::{Engine, Frame};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{GameView, ScreenBuffer, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut engine = Engine::new(clock_seed());
    let view = GameView::default();

    let mut frame = Frame::default();
    let mut screen = ScreenBuffer::new(0, 0);

    let mut next_gravity = Instant::now() + gravity_interval(&engine);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        engine.frame_into(&mut frame);
        view.render_into(&frame, Viewport::new(w, h), &mut screen);
        term.draw_swap(&mut screen)?;

        // Input with timeout until the gravity deadline.
        let timeout = next_gravity.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    // Terminal auto-repeat doubles as the held-key policy, so
                    // repeats count as presses.
                    if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                        if should_quit(key) {
                            return Ok(());
                        }
                        if let Some(action) = handle_key_event(key) {
                            engine.apply_action(action);
                        }
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Gravity.
        if Instant::now() >= next_gravity {
            engine.tick();
            next_gravity = Instant::now() + gravity_interval(&engine);
        }
    }
}

fn gravity_interval(engine: &Engine) -> Duration {
    Duration::from_millis(engine.drop_interval_ms() as u64)
}

/// Seed the piece stream from wall-clock time.
fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u32)
        .unwrap_or(1)
}
