//! Keyboard in, text screens out.
//!
//! [`Console`] is the seam between the game loop and whatever is driving it. The real
//! implementation, [`TerminalConsole`], puts the terminal in raw mode so single key
//! presses arrive without Enter, and redraws by clearing the screen. [`ScriptedConsole`]
//! replays a fixed key list and records every frame, so sessions can run in tests.

use std::collections::VecDeque;
use std::io::{stdout, Stdout, Write};
use std::panic;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{cursor, execute, terminal};
use log::{error, info};

use super::errors::GameError;
use super::maze::Direction;

/// One decoded key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Move(Direction),
    Quit,
    /// Anything else; the loop ignores it but it still satisfies "press any key".
    Other,
}

impl Input {
    pub fn from_char(c: char) -> Input {
        if c.eq_ignore_ascii_case(&'q') {
            return Input::Quit;
        }
        Direction::from_key(c).map_or(Input::Other, Input::Move)
    }
}

impl From<KeyEvent> for Input {
    fn from(key: KeyEvent) -> Self {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Input::Quit,
            KeyCode::Char(c) => Input::from_char(c),
            KeyCode::Up => Input::Move(Direction::Up),
            KeyCode::Down => Input::Move(Direction::Down),
            KeyCode::Left => Input::Move(Direction::Left),
            KeyCode::Right => Input::Move(Direction::Right),
            KeyCode::Esc => Input::Quit,
            _ => Input::Other,
        }
    }
}

pub trait Console {
    /// Block until the next key press.
    fn read_input(&mut self) -> Result<Input, GameError>;
    /// Wipe the screen and draw `frame` from the top-left corner.
    fn redraw(&mut self, frame: &str) -> Result<(), GameError>;
    /// Append lines below whatever is on screen.
    fn print(&mut self, text: &str) -> Result<(), GameError>;
}

pub struct TerminalConsole {
    out: Stdout,
}

impl TerminalConsole {
    pub fn new() -> Result<Self, GameError> {
        Self::reset_terminal_on_panic();
        terminal::enable_raw_mode()?;
        let mut out = stdout();
        execute!(out, cursor::Hide)?;
        info!("Terminal switched to raw mode");
        Ok(TerminalConsole { out })
    }

    fn reset_terminal_state() -> std::io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(stdout(), cursor::Show)?;
        Ok(())
    }

    fn reset_terminal_on_panic() {
        let default_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            if let Err(e) = Self::reset_terminal_state() {
                error!("Failure resetting terminal after panic: {:?}", e);
            }
            default_hook(panic_info)
        }))
    }

    // Raw mode turns off output post-processing, so a bare \n no longer returns the carriage.
    fn write_raw(&mut self, text: &str) -> Result<(), GameError> {
        for line in text.split_inclusive('\n') {
            match line.strip_suffix('\n') {
                Some(body) => write!(self.out, "{}\r\n", body)?,
                None => write!(self.out, "{}", line)?,
            }
        }
        self.out.flush()?;
        Ok(())
    }
}

impl Console for TerminalConsole {
    fn read_input(&mut self) -> Result<Input, GameError> {
        loop {
            if let Event::Key(key) = event::read()? {
                // Windows reports releases too
                if key.kind == KeyEventKind::Press {
                    return Ok(Input::from(key));
                }
            }
        }
    }

    fn redraw(&mut self, frame: &str) -> Result<(), GameError> {
        execute!(
            self.out,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        self.write_raw(frame)
    }

    fn print(&mut self, text: &str) -> Result<(), GameError> {
        self.write_raw(text)
    }
}

impl Drop for TerminalConsole {
    fn drop(&mut self) {
        match Self::reset_terminal_state() {
            Ok(()) => info!("Terminal restored"),
            Err(e) => error!("Failure resetting terminal from Drop: {:?}", e),
        }
    }
}

/// Plays back a fixed sequence of inputs and keeps every frame it was asked to show.
/// Once the script runs dry every read returns [`Input::Quit`].
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<Input>,
    /// Everything drawn or printed, in order. A redraw starts a new entry.
    pub frames: Vec<String>,
}

impl ScriptedConsole {
    pub fn new(inputs: impl IntoIterator<Item = Input>) -> Self {
        ScriptedConsole {
            inputs: inputs.into_iter().collect(),
            frames: Vec::new(),
        }
    }

    /// Script from key characters, e.g. `"sssddd"`.
    pub fn from_keys(keys: &str) -> Self {
        Self::new(keys.chars().map(Input::from_char))
    }

    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }

    /// All output joined together.
    pub fn transcript(&self) -> String {
        self.frames.concat()
    }
}

impl Console for ScriptedConsole {
    fn read_input(&mut self) -> Result<Input, GameError> {
        Ok(self.inputs.pop_front().unwrap_or(Input::Quit))
    }

    fn redraw(&mut self, frame: &str) -> Result<(), GameError> {
        self.frames.push(frame.to_string());
        Ok(())
    }

    fn print(&mut self, text: &str) -> Result<(), GameError> {
        match self.frames.last_mut() {
            Some(last) => last.push_str(text),
            None => self.frames.push(text.to_string()),
        }
        Ok(())
    }
}
