// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! User input: session commands, menu selection, and the terminal reader.
//!
//! The terminal runs in raw mode only for the duration of a single line
//! read, so Ctrl+C arrives as a key event and is translated into a clean
//! [`Command::Interrupted`] at the blocking read instead of killing the
//! process. A drop guard restores the terminal on every exit path.

use std::io::{self, Write};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;

/// A single command read between phrases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Advance to the next phrase (default for any unrecognized input)
    Next,
    /// Show session stats
    Stats,
    /// End the session
    Quit,
    /// Interrupt while blocked on input
    Interrupted,
}

impl Command {
    /// Parse one input line. Trimmed and case-insensitive; anything that
    /// is not `q` or `s` (including an empty line) advances.
    pub fn parse(line: &str) -> Self {
        match line.trim().to_lowercase().as_str() {
            "q" => Command::Quit,
            "s" => Command::Stats,
            _ => Command::Next,
        }
    }
}

/// Outcome of parsing one menu line against a catalog of `len` pieces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// `0`: leave without starting a session
    Quit,
    /// Zero-based index into the catalog
    Piece(usize),
    /// Non-numeric or out of range; re-prompt
    Invalid,
}

impl MenuChoice {
    /// Parse a menu selection line
    pub fn parse(line: &str, len: usize) -> Self {
        match line.trim().parse::<usize>() {
            Ok(0) => MenuChoice::Quit,
            Ok(n) if n <= len => MenuChoice::Piece(n - 1),
            _ => MenuChoice::Invalid,
        }
    }
}

/// Source of session commands. The binary reads the terminal; tests
/// drive the loop with a scripted sequence.
pub trait CommandSource {
    /// Block until the next command is available
    fn next_command(&mut self) -> Result<Command>;
}

/// One line read from the terminal, or an interrupt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEvent {
    /// A completed line (without the trailing newline)
    Line(String),
    /// Ctrl+C, or Ctrl+D on an empty line
    Interrupted,
}

/// Blocking line reader over the raw-mode terminal
#[derive(Debug, Default)]
pub struct TerminalInput;

impl TerminalInput {
    /// Create a terminal reader
    pub fn new() -> Self {
        Self
    }

    /// Read one line, echoing characters as they are typed. Backspace
    /// edits; Enter submits; Ctrl+C interrupts.
    pub fn read_line(&mut self) -> Result<LineEvent> {
        let _guard = RawModeGuard::enable()?;
        let mut stdout = io::stdout();
        let mut line = String::new();

        loop {
            let ev = event::read().context("failed to read terminal event")?;
            let Event::Key(KeyEvent {
                code,
                modifiers,
                kind: KeyEventKind::Press,
                ..
            }) = ev
            else {
                continue;
            };

            if modifiers.contains(KeyModifiers::CONTROL) {
                match code {
                    KeyCode::Char('c') => {
                        write!(stdout, "\r\n")?;
                        stdout.flush()?;
                        return Ok(LineEvent::Interrupted);
                    }
                    KeyCode::Char('d') if line.is_empty() => {
                        write!(stdout, "\r\n")?;
                        stdout.flush()?;
                        return Ok(LineEvent::Interrupted);
                    }
                    _ => {}
                }
                continue;
            }

            match code {
                KeyCode::Enter => {
                    write!(stdout, "\r\n")?;
                    stdout.flush()?;
                    return Ok(LineEvent::Line(line));
                }
                KeyCode::Backspace => {
                    if line.pop().is_some() {
                        // Erase the echoed character
                        write!(stdout, "\u{8} \u{8}")?;
                        stdout.flush()?;
                    }
                }
                KeyCode::Char(c) => {
                    line.push(c);
                    write!(stdout, "{c}")?;
                    stdout.flush()?;
                }
                _ => {}
            }
        }
    }
}

impl CommandSource for TerminalInput {
    fn next_command(&mut self) -> Result<Command> {
        match self.read_line()? {
            LineEvent::Line(line) => Ok(Command::parse(&line)),
            LineEvent::Interrupted => Ok(Command::Interrupted),
        }
    }
}

/// Restores cooked mode when dropped, on every exit path
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> Result<Self> {
        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_parse() {
        assert_eq!(Command::parse("q"), Command::Quit);
        assert_eq!(Command::parse("Q"), Command::Quit);
        assert_eq!(Command::parse("  q  "), Command::Quit);
        assert_eq!(Command::parse("s"), Command::Stats);
        assert_eq!(Command::parse("S"), Command::Stats);
        assert_eq!(Command::parse(""), Command::Next);
        assert_eq!(Command::parse("   "), Command::Next);
        assert_eq!(Command::parse("next please"), Command::Next);
        assert_eq!(Command::parse("quit"), Command::Next);
    }

    #[test]
    fn test_menu_choice_quit() {
        assert_eq!(MenuChoice::parse("0", 4), MenuChoice::Quit);
        assert_eq!(MenuChoice::parse(" 0 ", 4), MenuChoice::Quit);
    }

    #[test]
    fn test_menu_choice_selection() {
        assert_eq!(MenuChoice::parse("1", 4), MenuChoice::Piece(0));
        assert_eq!(MenuChoice::parse("4", 4), MenuChoice::Piece(3));
    }

    #[test]
    fn test_menu_choice_invalid() {
        assert_eq!(MenuChoice::parse("5", 4), MenuChoice::Invalid);
        assert_eq!(MenuChoice::parse("-1", 4), MenuChoice::Invalid);
        assert_eq!(MenuChoice::parse("abc", 4), MenuChoice::Invalid);
        assert_eq!(MenuChoice::parse("", 4), MenuChoice::Invalid);
        assert_eq!(MenuChoice::parse("1.5", 4), MenuChoice::Invalid);
    }
}
