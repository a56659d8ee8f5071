// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! The practice catalog: pieces and their phrases.
//!
//! Leaf data for the drill. A phrase is an immutable page/measure range;
//! a piece is an ordered list of phrases fixed at definition time. The
//! builtin catalog is constructed fresh by [`builtin`] and handed to the
//! menu read-only, so there is no process-wide state.

use std::fmt;

/// A playable fragment of a score, identified by page and measure range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Phrase {
    /// Page number in the edition
    pub page: u32,
    /// First measure of the fragment
    pub from_measure: u32,
    /// Last measure of the fragment (inclusive)
    pub to_measure: u32,
}

impl Phrase {
    /// Create a new phrase
    pub const fn new(page: u32, from_measure: u32, to_measure: u32) -> Self {
        Self {
            page,
            from_measure,
            to_measure,
        }
    }

    /// Number of measures covered, both endpoints inclusive
    pub fn measure_count(&self) -> u32 {
        self.to_measure - self.from_measure + 1
    }
}

impl fmt::Display for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Page {:>3}, measures {:>3} \u{2013} {:>3}",
            self.page, self.from_measure, self.to_measure
        )
    }
}

/// The full ordered set of phrases drilled for one musical work.
#[derive(Debug, Clone, PartialEq)]
pub struct Piece {
    title: String,
    phrases: Vec<Phrase>,
}

impl Piece {
    /// Create a new piece
    pub fn new(title: impl Into<String>, phrases: Vec<Phrase>) -> Self {
        Self {
            title: title.into(),
            phrases,
        }
    }

    /// Get the title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the phrases in definition order
    pub fn phrases(&self) -> &[Phrase] {
        &self.phrases
    }

    /// Number of phrases in this piece
    pub fn phrase_count(&self) -> usize {
        self.phrases.len()
    }

    /// Total measures across all phrases
    pub fn total_measures(&self) -> u32 {
        self.phrases.iter().map(Phrase::measure_count).sum()
    }
}

/// Build the builtin catalog, in menu order.
pub fn builtin() -> Vec<Piece> {
    vec![
        mozart_k453_piano(),
        faure_trio_op120(),
        bach_gamba_sonata_g(),
        mozart_k497_secondo(),
    ]
}

fn bach_gamba_sonata_g() -> Piece {
    Piece::new(
        "Gamba sonata in G major",
        vec![
            Phrase::new(1, 1, 6),
            Phrase::new(1, 6, 13),
            Phrase::new(2, 13, 21),
            Phrase::new(3, 21, 28),
            Phrase::new(4, 1, 9),
            Phrase::new(4, 9, 20),
            Phrase::new(5, 21, 33),
            Phrase::new(5, 33, 43),
            Phrase::new(6, 43, 48),
            Phrase::new(6, 50, 61),
            Phrase::new(7, 61, 78),
            Phrase::new(8, 78, 93),
            Phrase::new(9, 94, 108),
            Phrase::new(9, 108, 113),
        ],
    )
}

fn faure_trio_op120() -> Piece {
    Piece::new(
        "Faur\u{e9} piano trio in d minor",
        vec![
            Phrase::new(1, 1, 23),
            Phrase::new(1, 21, 35),
            Phrase::new(2, 31, 41),
            Phrase::new(2, 41, 51),
            Phrase::new(2, 51, 67),
            Phrase::new(3, 67, 82),
            Phrase::new(4, 82, 106),
            Phrase::new(5, 107, 126),
            Phrase::new(5, 127, 135),
            Phrase::new(6, 135, 151),
            Phrase::new(6, 151, 165),
            Phrase::new(7, 165, 179),
            Phrase::new(7, 179, 191),
            Phrase::new(8, 191, 202),
            Phrase::new(8, 203, 211),
            Phrase::new(9, 211, 230),
            Phrase::new(9, 231, 250),
            Phrase::new(10, 251, 274),
            Phrase::new(11, 271, 291),
            Phrase::new(11, 289, 307),
            Phrase::new(12, 306, 319),
            Phrase::new(13, 319, 323),
            Phrase::new(13, 322, 331),
            Phrase::new(13, 331, 342),
        ],
    )
}

// Henle edition
fn mozart_k453_piano() -> Piece {
    Piece::new(
        "Mozart K453, Concerto #17 in G (piano)",
        vec![
            Phrase::new(5, 74, 90),
            Phrase::new(6, 91, 94),
            Phrase::new(6, 97, 100),
            Phrase::new(7, 100, 109),
            Phrase::new(8, 110, 121),
            Phrase::new(8, 122, 125),
            Phrase::new(8, 126, 135),
            Phrase::new(9, 139, 146),
            Phrase::new(10, 147, 152),
            Phrase::new(10, 153, 160),
            Phrase::new(11, 160, 164),
            Phrase::new(11, 164, 171),
            Phrase::new(12, 184, 192),
            Phrase::new(13, 192, 203),
            Phrase::new(13, 203, 207),
            Phrase::new(14, 211, 225),
            Phrase::new(15, 237, 242),
            Phrase::new(17, 257, 264),
            Phrase::new(17, 265, 272),
            Phrase::new(17, 273, 276),
            Phrase::new(18, 277, 286),
            Phrase::new(19, 286, 290),
            Phrase::new(19, 290, 297),
            Phrase::new(20, 298, 304),
            Phrase::new(20, 304, 311),
            Phrase::new(20, 311, 317),
            Phrase::new(21, 317, 319),
            Phrase::new(22, 328, 328), // Cadenza
            Phrase::new(26, 30, 34),
            Phrase::new(26, 35, 42),
            Phrase::new(27, 45, 54),
            Phrase::new(28, 56, 64),
            Phrase::new(28, 69, 74),
            Phrase::new(29, 74, 80),
            Phrase::new(29, 81, 86),
            Phrase::new(30, 90, 94),
            Phrase::new(30, 95, 102),
            Phrase::new(31, 105, 111),
            Phrase::new(31, 115, 122),
            Phrase::new(32, 122, 123), // Cadenza
            Phrase::new(33, 127, 130),
            Phrase::new(33, 131, 136),
        ],
    )
}

// Henle edition 932 (Jost, Groethuysen)
fn mozart_k497_secondo() -> Piece {
    Piece::new(
        "Mozart K497, Sonata in D for piano four-hands (secondo)",
        vec![
            Phrase::new(32, 1, 16),
            Phrase::new(32, 17, 35),
            Phrase::new(34, 35, 58),
            Phrase::new(34, 59, 64),
            Phrase::new(34, 65, 89),
            Phrase::new(36, 90, 117),
            Phrase::new(36, 118, 138),
            Phrase::new(36, 139, 153),
            Phrase::new(38, 154, 185),
            Phrase::new(38, 186, 208),
            Phrase::new(40, 209, 263),
            Phrase::new(42, 264, 287),
            Phrase::new(44, 288, 312),
            Phrase::new(46, 1, 20),
            Phrase::new(46, 21, 33),
            Phrase::new(48, 35, 43),
            Phrase::new(48, 43, 48),
            Phrase::new(48, 49, 64),
            Phrase::new(48, 64, 83),
            Phrase::new(50, 84, 100),
            Phrase::new(52, 102, 110),
            Phrase::new(52, 110, 123),
            Phrase::new(54, 1, 20),
            Phrase::new(54, 22, 36),
            Phrase::new(54, 37, 52),
            Phrase::new(56, 53, 76),
            Phrase::new(56, 76, 99),
            Phrase::new(58, 96, 114),
            Phrase::new(60, 119, 146),
            Phrase::new(60, 146, 164),
            Phrase::new(62, 164, 191),
            Phrase::new(64, 196, 229),
            Phrase::new(66, 231, 254),
            Phrase::new(66, 254, 264),
            Phrase::new(66, 264, 292),
            Phrase::new(68, 295, 299),
            Phrase::new(70, 299, 306),
            Phrase::new(70, 306, 324),
        ],
    )
}
