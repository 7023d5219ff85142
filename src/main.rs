//! Terminal Pong runner (default binary).
//!
//! This is the primary gameplay entrypoint.
//! It uses crossterm for input and a custom framebuffer-based renderer
//! (no ratatui widgets/layout): a main menu screen, then the fixed-rate
//! simulation loop.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use tui_pong::core::{FpsCounter, GameState};
use tui_pong::input::{handle_key_event, should_quit, starts_game, PaddleInput};
use tui_pong::term::{FrameBuffer, GameView, MenuView, TerminalRenderer, Viewport};
use tui_pong::types::TICK_MS;

fn main() -> Result<()> {
    // Before raw mode, so a bad PONG_LOG path still prints normally.
    tui_pong::logging::init()?;

    let mut term = TerminalRenderer::new();
    term.enter("Pong")?;

    info!(
        "started; key release events: {}",
        term.reports_key_release()
    );

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

enum MenuChoice {
    Play,
    Quit,
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let menu = MenuView::new();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        match menu_screen(term, &menu, &mut fb)? {
            MenuChoice::Play => game_screen(term, &mut fb)?,
            MenuChoice::Quit => return Ok(()),
        }
    }
}

/// Show the menu until the player picks play or quit.
fn menu_screen(
    term: &mut TerminalRenderer,
    menu: &MenuView,
    fb: &mut FrameBuffer,
) -> Result<MenuChoice> {
    term.invalidate();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        menu.render_into(Viewport::new(w, h), fb);
        term.draw_swap(fb)?;

        // Nothing animates here; wake up occasionally for resizes.
        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if starts_game(key) {
                        return Ok(MenuChoice::Play);
                    }
                    if should_quit(key) {
                        return Ok(MenuChoice::Quit);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }
    }
}

/// One game session: fixed 60 Hz ticks until the quit key is pressed.
fn game_screen(term: &mut TerminalRenderer, fb: &mut FrameBuffer) -> Result<()> {
    let mut state = GameState::new();
    let mut input = PaddleInput::new().with_release_events(term.reports_key_release());
    let mut view = GameView::new();
    let mut fps = FpsCounter::new();

    info!("session started");
    term.invalidate();

    let start = Instant::now();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut running = true;

    while running {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&state, fps.current(), Viewport::new(w, h), fb);
        term.draw_swap(fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    // Auto-repeat refreshes the hold window on terminals
                    // without release events, so treat it like a press.
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        if key.kind == KeyEventKind::Press && should_quit(key) {
                            // Finish the current tick below, then exit.
                            running = false;
                        }
                        if let Some(action) = handle_key_event(key) {
                            input.handle_key_press(action, start.elapsed().as_millis() as u64);
                        }
                    }
                    KeyEventKind::Release => {
                        if let Some(action) = handle_key_event(key) {
                            input.handle_key_release(action);
                        }
                    }
                },
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            let now_ms = start.elapsed().as_millis() as u64;
            state.tick(input.snapshot(now_ms));
            fps.tick(now_ms);
        }
    }

    info!("session ended");
    Ok(())
}
