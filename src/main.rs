//! Terminal Blockfall runner (default binary).
//!
//! This is the gameplay entrypoint.
//! It uses crossterm for input and a custom framebuffer-based renderer.

use std::fs::File;
use std::io::BufWriter;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::config::Config;
use blockfall::core::{GameState, UniformKinds};
use blockfall::event_log::EventLog;
use blockfall::input::{should_quit, InputCollector};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::{Flow, TICK_MS};

fn main() -> Result<()> {
    let config = Config::from_env();

    let (mut log, log_error) = match config.log_path.as_deref() {
        Some(path) => match EventLog::open(path) {
            Ok(log) => (log, None),
            Err(err) => (EventLog::disabled(), Some(format!("{path}: {err}"))),
        },
        None => (EventLog::disabled(), None),
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, &mut log);

    // Always try to restore terminal state.
    let _ = term.exit();
    log.flush();

    if let Some(err) = log_error {
        eprintln!("blockfall: event log disabled: {err}");
    }
    result
}

fn run(
    term: &mut TerminalRenderer,
    config: &Config,
    log: &mut EventLog<BufWriter<File>>,
) -> Result<()> {
    let mut game_state = match config.seed {
        Some(seed) => GameState::new(seed),
        None => GameState::with_source(UniformKinds::from_entropy()),
    };

    let view = GameView::new(config.cell_width, 1);
    let mut input = InputCollector::new();
    let mut fb = FrameBuffer::new(0, 0);

    let started = Instant::now();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game_state, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    // Host close works from every phase.
                    if key.kind != KeyEventKind::Release && should_quit(key) {
                        return Ok(());
                    }
                    input.handle_key_event(key);
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();

            let elapsed_ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
            let frame = input.take_frame(elapsed_ms);
            let flow = game_state.update(&frame);

            let events = game_state.drain_events();
            if !events.is_empty() {
                let t_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
                log.record_all(t_ms, &events);
                log.flush();
            }

            if flow == Flow::Exit {
                return Ok(());
            }
        }
    }
}
