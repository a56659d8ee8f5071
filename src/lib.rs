// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Interleaved practice drill.
//!
//! Cycles through the phrases of a piece in shuffled order, one at a
//! time, reshuffling after every full pass. The binary in `main.rs` wires
//! the pieces together; everything here is terminal-free and testable.

pub mod catalog;
pub mod control;
pub mod session;
pub mod shuffle;
pub mod ui;
