//! Core data structures for bracket counts.
//!
//! Only opening characters are tracked. Each of the four kinds is counted
//! independently:
//!
//! - **parentheses**: `(`
//! - **square**: `[`
//! - **curly**: `{`
//! - **angle**: `<`

use serde::Serialize;
use std::ops::{Add, AddAssign};

/// One of the four tracked bracket kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BracketKind {
    Parentheses,
    Square,
    Curly,
    Angle,
}

impl BracketKind {
    /// All kinds, in report order.
    pub const ALL: [BracketKind; 4] = [
        BracketKind::Parentheses,
        BracketKind::Square,
        BracketKind::Curly,
        BracketKind::Angle,
    ];

    /// The opening character counted for this kind.
    pub fn opening(self) -> char {
        match self {
            BracketKind::Parentheses => '(',
            BracketKind::Square => '[',
            BracketKind::Curly => '{',
            BracketKind::Angle => '<',
        }
    }

    /// Name used on the grand-total lines.
    pub fn label(self) -> &'static str {
        match self {
            BracketKind::Parentheses => "parentheses",
            BracketKind::Square => "square",
            BracketKind::Curly => "curly",
            BracketKind::Angle => "angle",
        }
    }

    /// Map a character to its kind, if it is a tracked opening bracket.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '(' => Some(BracketKind::Parentheses),
            '[' => Some(BracketKind::Square),
            '{' => Some(BracketKind::Curly),
            '<' => Some(BracketKind::Angle),
            _ => None,
        }
    }
}

/// Bracket counts for one file, or a sum over many.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BracketTally {
    /// Count of `(`
    pub parentheses: u64,
    /// Count of `[`
    pub square: u64,
    /// Count of `{`
    pub curly: u64,
    /// Count of `<`
    pub angle: u64,
}

impl BracketTally {
    /// Create a new tally with all zeros.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count for a single kind.
    pub fn get(&self, kind: BracketKind) -> u64 {
        match kind {
            BracketKind::Parentheses => self.parentheses,
            BracketKind::Square => self.square,
            BracketKind::Curly => self.curly,
            BracketKind::Angle => self.angle,
        }
    }

    /// Bump the counter for `kind` by one.
    pub fn record(&mut self, kind: BracketKind) {
        match kind {
            BracketKind::Parentheses => self.parentheses += 1,
            BracketKind::Square => self.square += 1,
            BracketKind::Curly => self.curly += 1,
            BracketKind::Angle => self.angle += 1,
        }
    }

    /// Sum of all four kinds.
    pub fn total(&self) -> u64 {
        self.parentheses + self.square + self.curly + self.angle
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

impl Add for BracketTally {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            parentheses: self.parentheses + other.parentheses,
            square: self.square + other.square,
            curly: self.curly + other.curly,
            angle: self.angle + other.angle,
        }
    }
}

impl AddAssign for BracketTally {
    fn add_assign(&mut self, other: Self) {
        self.parentheses += other.parentheses;
        self.square += other.square;
        self.curly += other.curly;
        self.angle += other.angle;
    }
}

impl std::iter::Sum for BracketTally {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}
