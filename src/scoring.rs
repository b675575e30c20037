//! Score computation and winner determination.
//!
//! Scores come from captures only: Black earns
//! [`BLACK_POINTS_PER_CAPTURE`] for every white stone removed and White earns
//! [`WHITE_POINTS_PER_CAPTURE`] for every black stone removed. The area figures
//! are plain stone counts; empty regions are not flood-filled into territory.

use std::fmt;

use crate::board::{Board, Color};
use crate::constants::{BLACK_POINTS_PER_CAPTURE, WHITE_POINTS_PER_CAPTURE};

/// Stones removed from the board, keyed by the color of the removed stones.
///
/// `white` counts white stones captured by Black, and vice versa.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Captures {
    pub black: usize,
    pub white: usize,
}

impl Captures {
    /// Record `count` stones of `color` being removed.
    pub fn add(&mut self, color: Color, count: usize) {
        match color {
            Color::Black => self.black += count,
            Color::White => self.white += count,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Score {
    pub black_score: f64,
    pub white_score: f64,
    pub black_area: usize,
    pub white_area: usize,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Winner {
    Black,
    White,
    Draw,
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::Black => f.write_str("black"),
            Winner::White => f.write_str("white"),
            Winner::Draw => f.write_str("draw"),
        }
    }
}

/// Score and winner, fixed at the moment the game ended.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FinalScore {
    pub score: Score,
    pub winner: Winner,
}

pub fn compute_score(board: &Board, captures: &Captures) -> Score {
    Score {
        black_score: BLACK_POINTS_PER_CAPTURE * captures.white as f64,
        white_score: WHITE_POINTS_PER_CAPTURE * captures.black as f64,
        black_area: board.count(Color::Black),
        white_area: board.count(Color::White),
    }
}

/// Higher score wins; equal scores are a draw.
pub fn determine_winner(score: &Score) -> Winner {
    if score.black_score > score.white_score {
        Winner::Black
    } else if score.white_score > score.black_score {
        Winner::White
    } else {
        Winner::Draw
    }
}
