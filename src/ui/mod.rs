// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Console rendering for the practice drill.
//!
//! Every function writes to a caller-supplied writer so tests can capture
//! output. Rendering never reads input; prompts end without a newline and
//! are flushed so they appear before the blocking read.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::style::Stylize;

use crate::catalog::{Phrase, Piece};
use crate::session::{SessionSummary, StatsSnapshot};

const RULE_WIDTH: usize = 60;

/// Program banner shown once at startup
pub fn banner<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Interleaved Practice Assistant")?;
    writeln!(out, "{}", "=".repeat(40))
}

/// List the catalog with 1-based indices plus the quit entry
pub fn menu<W: Write + ?Sized>(out: &mut W, pieces: &[Piece]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Available pieces:")?;
    for (i, piece) in pieces.iter().enumerate() {
        writeln!(out, "{:>2}: {}", i + 1, piece.title())?;
        writeln!(
            out,
            "    {} phrases, {} measures",
            piece.phrase_count(),
            piece.total_measures()
        )?;
    }
    writeln!(out)?;
    writeln!(out, " 0: Quit")
}

/// Menu selection prompt (no trailing newline)
pub fn menu_prompt<W: Write + ?Sized>(out: &mut W, len: usize) -> io::Result<()> {
    writeln!(out)?;
    write!(out, "Select a piece (1-{len}): ")?;
    out.flush()
}

/// Rejection line for an invalid menu selection
pub fn menu_invalid<W: Write + ?Sized>(out: &mut W, len: usize) -> io::Result<()> {
    writeln!(out, "Please enter a number between 0 and {len}")
}

/// Farewell line for menu-quit and interrupts before a session starts
pub fn farewell<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Goodbye!")
}

/// Header printed when a session starts
pub fn session_header<W: Write + ?Sized>(out: &mut W, piece: &Piece) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Interleaved practice for {}", piece.title())?;
    writeln!(
        out,
        "{} phrases, {} measures",
        piece.phrase_count(),
        piece.total_measures()
    )?;
    writeln!(out)?;
    writeln!(
        out,
        "Commands: [Enter] = next phrase, [s] = stats, [q] = quit"
    )?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))
}

/// Announce the reshuffle that starts each pass
pub fn pass_banner<W: Write + ?Sized>(out: &mut W, phrase_count: usize) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Shuffling {phrase_count} phrases")
}

/// One phrase, numbered within the session
pub fn phrase_card<W: Write + ?Sized>(out: &mut W, number: u64, phrase: &Phrase) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "[{}] {}", number, phrase.to_string().bold())?;
    writeln!(out, "{} measures", phrase.measure_count())
}

/// Input prompt between phrases (no trailing newline)
pub fn prompt<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}

/// Mid-session stats display, followed by an acknowledgment prompt
pub fn stats<W: Write + ?Sized>(out: &mut W, snapshot: &StatsSnapshot) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "Session stats: {} phrases practiced, session time {}",
        snapshot.phrases_practiced,
        format_duration(snapshot.elapsed)
    )?;
    write!(out, "Press Enter to continue... ")?;
    out.flush()
}

/// Final summary printed when the session stops
pub fn summary<W: Write + ?Sized>(out: &mut W, summary: &SessionSummary) -> io::Result<()> {
    if summary.interrupted {
        writeln!(out)?;
        writeln!(out, "Practice session interrupted")?;
    }
    writeln!(out)?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out, "Session Summary")?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(
        out,
        "Total session time: {}",
        format_duration(summary.elapsed)
    )?;
    writeln!(out, "Phrases practiced: {}", summary.phrases_practiced)?;
    writeln!(out)?;
    writeln!(out, "Hope it was good!")
}

/// Format a duration as H:MM:SS
pub(crate) fn format_duration(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{}:{:02}:{:02}", secs / 3600, (secs / 60) % 60, secs % 60)
}
