// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Session bookkeeping and the practice loop.
//!
//! The loop is a small state machine: `Running` pulls a phrase, renders
//! it, and blocks for one command; `ShowingStats` blocks for an
//! acknowledgment; `Stopped` is terminal and hands a [`SessionSummary`]
//! back to the caller. Input and output are both injected so the whole
//! loop runs under test without a terminal.

use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::debug;

use crate::catalog::Piece;
use crate::control::{Command, CommandSource};
use crate::shuffle::CycleShuffler;
use crate::ui;

/// Wall-clock bookkeeping for one run. Lives only for the run; never
/// persisted.
#[derive(Debug, Clone)]
pub struct SessionStats {
    start: Instant,
    phrases_practiced: u64,
}

impl SessionStats {
    /// Start tracking from now
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            phrases_practiced: 0,
        }
    }

    /// Record one acknowledged phrase
    pub fn record_phrase_shown(&mut self) {
        self.phrases_practiced += 1;
    }

    /// Elapsed time and count, computed against the host clock
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            elapsed: self.start.elapsed(),
            phrases_practiced: self.phrases_practiced,
        }
    }
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Point-in-time view of session stats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsSnapshot {
    /// Wall-clock time since session start
    pub elapsed: Duration,
    /// Phrases acknowledged so far
    pub phrases_practiced: u64,
}

/// What the loop hands back when it stops
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    /// Phrases acknowledged before the session ended
    pub phrases_practiced: u64,
    /// Total session wall-clock time
    pub elapsed: Duration,
    /// Whether the session ended via interrupt rather than `q`
    pub interrupted: bool,
}

/// Session loop states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    Running,
    ShowingStats,
    Stopped,
}

/// Drive one practice session over `piece`, reading commands from
/// `input` and rendering to `out`.
pub fn run_session<S, W>(piece: &Piece, input: &mut S, out: &mut W) -> Result<SessionSummary>
where
    S: CommandSource + ?Sized,
    W: Write + ?Sized,
{
    let mut shuffler = CycleShuffler::new(piece.phrases().to_vec())?;
    run_with_shuffler(piece, &mut shuffler, input, out)
}

/// Same loop with a caller-supplied shuffler, so tests can seed it.
pub fn run_with_shuffler<S, W>(
    piece: &Piece,
    shuffler: &mut CycleShuffler<crate::catalog::Phrase>,
    input: &mut S,
    out: &mut W,
) -> Result<SessionSummary>
where
    S: CommandSource + ?Sized,
    W: Write + ?Sized,
{
    let mut stats = SessionStats::new();
    let mut state = SessionState::Running;
    let mut shown: u64 = 0;
    let mut last_pass: u64 = 0;
    let mut interrupted = false;

    ui::session_header(out, piece)?;
    debug!(
        piece = piece.title(),
        phrases = shuffler.len(),
        "session started"
    );

    loop {
        match state {
            SessionState::Running => {
                let phrase = shuffler.next();
                if shuffler.pass() != last_pass {
                    last_pass = shuffler.pass();
                    debug!(pass = last_pass, "reshuffled");
                    ui::pass_banner(out, shuffler.len())?;
                }

                shown += 1;
                ui::phrase_card(out, shown, &phrase)?;
                ui::prompt(out)?;

                match input.next_command()? {
                    Command::Next => stats.record_phrase_shown(),
                    Command::Stats => state = SessionState::ShowingStats,
                    Command::Quit => state = SessionState::Stopped,
                    Command::Interrupted => {
                        interrupted = true;
                        state = SessionState::Stopped;
                    }
                }
            }
            SessionState::ShowingStats => {
                ui::stats(out, &stats.snapshot())?;
                state = match input.next_command()? {
                    Command::Interrupted => {
                        interrupted = true;
                        SessionState::Stopped
                    }
                    _ => SessionState::Running,
                };
            }
            SessionState::Stopped => break,
        }
    }

    let snapshot = stats.snapshot();
    debug!(
        phrases = snapshot.phrases_practiced,
        interrupted, "session ended"
    );

    Ok(SessionSummary {
        phrases_practiced: snapshot.phrases_practiced,
        elapsed: snapshot.elapsed,
        interrupted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Phrase;

    struct Scripted {
        commands: std::vec::IntoIter<Command>,
    }

    impl Scripted {
        fn new(commands: Vec<Command>) -> Self {
            Self {
                commands: commands.into_iter(),
            }
        }
    }

    impl CommandSource for Scripted {
        fn next_command(&mut self) -> Result<Command> {
            // A script running dry behaves like an interrupt
            Ok(self.commands.next().unwrap_or(Command::Interrupted))
        }
    }

    fn test_piece() -> Piece {
        Piece::new(
            "test piece",
            vec![
                Phrase::new(1, 1, 6),
                Phrase::new(1, 6, 13),
                Phrase::new(2, 13, 21),
            ],
        )
    }

    #[test]
    fn test_counter_matches_accepts() {
        let mut stats = SessionStats::new();
        for _ in 0..7 {
            stats.record_phrase_shown();
        }
        assert_eq!(stats.snapshot().phrases_practiced, 7);
    }

    #[test]
    fn test_quit_is_not_recorded() {
        let piece = test_piece();
        let mut input = Scripted::new(vec![
            Command::Next,
            Command::Next,
            Command::Next,
            Command::Next,
            Command::Quit,
        ]);
        let mut out = Vec::new();

        let summary = run_session(&piece, &mut input, &mut out).unwrap();
        assert_eq!(summary.phrases_practiced, 4);
        assert!(!summary.interrupted);
    }

    #[test]
    fn test_interrupt_counts_only_acknowledged() {
        let piece = test_piece();
        let mut input = Scripted::new(vec![Command::Next, Command::Next, Command::Interrupted]);
        let mut out = Vec::new();

        let summary = run_session(&piece, &mut input, &mut out).unwrap();
        assert_eq!(summary.phrases_practiced, 2);
        assert!(summary.interrupted);
    }

    #[test]
    fn test_stats_command_does_not_record() {
        let piece = test_piece();
        let mut input = Scripted::new(vec![
            Command::Next,
            Command::Stats,
            Command::Next, // acknowledgment after stats
            Command::Next,
            Command::Quit,
        ]);
        let mut out = Vec::new();

        let summary = run_session(&piece, &mut input, &mut out).unwrap();
        assert_eq!(summary.phrases_practiced, 2);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Session stats: 1 phrases practiced"));
    }

    #[test]
    fn test_interrupt_at_stats_acknowledgment() {
        let piece = test_piece();
        let mut input = Scripted::new(vec![Command::Stats, Command::Interrupted]);
        let mut out = Vec::new();

        let summary = run_session(&piece, &mut input, &mut out).unwrap();
        assert_eq!(summary.phrases_practiced, 0);
        assert!(summary.interrupted);
    }

    #[test]
    fn test_pass_banner_on_wraparound() {
        let piece = test_piece();
        // Enough accepts to wrap the 3-phrase list twice
        let mut commands = vec![Command::Next; 7];
        commands.push(Command::Quit);
        let mut input = Scripted::new(commands);
        let mut out = Vec::new();

        run_session(&piece, &mut input, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("Shuffling 3 phrases").count(), 3);
    }
}
