//! Keyboard diagnostic binary.
//!
//! Prints raw key events (press / repeat / release) and whether the terminal
//! supports the kitty keyboard protocol, which is what decides if the game
//! can rely on real key-release events. Useful when a terminal's paddle
//! controls feel sticky. Quit with `q` or Ctrl-C.

use std::io::{self, Write};
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::{terminal, QueueableCommand};

use tui_pong::input::{handle_key_event, should_quit};

fn main() -> Result<()> {
    terminal::enable_raw_mode()?;
    let result = run();
    let _ = terminal::disable_raw_mode();
    result
}

fn run() -> Result<()> {
    let mut stdout = io::stdout();

    let enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false);
    if enhanced {
        stdout.queue(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))?;
    }
    write!(
        stdout,
        "keyboard enhancement (real release events): {}\r\n",
        enhanced
    )?;
    write!(stdout, "press keys; q or Ctrl-C quits\r\n")?;
    stdout.flush()?;

    loop {
        if !event::poll(Duration::from_millis(500))? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            write!(
                stdout,
                "{:?} {:?} mods={:?} action={:?}\r\n",
                key.kind,
                key.code,
                key.modifiers,
                handle_key_event(key)
            )?;
            stdout.flush()?;

            if should_quit(key) {
                break;
            }
        }
    }

    if enhanced {
        stdout.queue(PopKeyboardEnhancementFlags)?;
        stdout.flush()?;
    }
    Ok(())
}
