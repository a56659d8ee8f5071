// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::io;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use interleave::catalog;
use interleave::control::{LineEvent, MenuChoice, TerminalInput};
use interleave::session;
use interleave::ui;

fn main() -> Result<()> {
    // Logs go to stderr, filtered by RUST_LOG, so the drill output on
    // stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let pieces = catalog::builtin();
    let mut input = TerminalInput::new();
    let mut out = io::stdout();

    ui::banner(&mut out)?;

    let piece = loop {
        ui::menu(&mut out, &pieces)?;
        ui::menu_prompt(&mut out, pieces.len())?;

        match input.read_line()? {
            LineEvent::Interrupted => {
                ui::farewell(&mut out)?;
                return Ok(());
            }
            LineEvent::Line(line) => match MenuChoice::parse(&line, pieces.len()) {
                MenuChoice::Quit => {
                    ui::farewell(&mut out)?;
                    return Ok(());
                }
                MenuChoice::Piece(index) => break &pieces[index],
                MenuChoice::Invalid => ui::menu_invalid(&mut out, pieces.len())?,
            },
        }
    };

    let summary = session::run_session(piece, &mut input, &mut out)?;
    ui::summary(&mut out, &summary)?;

    Ok(())
}
