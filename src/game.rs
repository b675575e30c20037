//! Game state, move legality and move execution.
//!
//! [`GameState`] owns the board and is only ever mutated through
//! [`GameState::play`], [`GameState::pass`] and [`GameState::reset`]. Each of
//! these reports what happened through a [`Transition`], so callers that draw
//! the board or announce results can react without the engine calling back
//! into them.
//!
//! Legality rules:
//! - the point must be on the board and empty
//! - the placed group must keep a liberty unless the move captures
//! - the position after placing (before removing captures) must not equal any
//!   position recorded earlier in the game, not just the previous one

use tracing::{debug, info, trace};

use crate::board::{Board, Cell, Color, Point, Snapshot};
use crate::constants::PASSES_TO_END;
use crate::error::{BoardError, MoveError};
use crate::group::{group_at, liberties};
use crate::scoring::{Captures, FinalScore, Score, Winner, compute_score, determine_winner};

/// What a successful mutating call did.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    pub kind: TransitionKind,
    /// Set when this call ended the game.
    pub game_over: Option<FinalScore>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransitionKind {
    Placed {
        point: Point,
        color: Color,
        captured: Vec<Point>,
    },
    Passed {
        color: Color,
    },
    Reset,
}

/// A single game in progress.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    board: Board,
    current: Color,
    /// Board after every accepted placement, oldest first.
    history: Vec<Snapshot>,
    passes: u8,
    captures: Captures,
    result: Option<FinalScore>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::with_board(Board::default())
    }
}

impl GameState {
    /// Start a game on an empty `size`x`size` board with Black to move.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        Ok(Self::with_board(Board::new(size)?))
    }

    fn with_board(board: Board) -> Self {
        GameState {
            board,
            current: Color::Black,
            history: Vec::new(),
            passes: 0,
            captures: Captures::default(),
            result: None,
        }
    }

    /// Return to the start-of-game state, keeping the board size.
    pub fn reset(&mut self) -> Transition {
        self.board.clear();
        self.current = Color::Black;
        self.history.clear();
        self.passes = 0;
        self.captures = Captures::default();
        self.result = None;
        info!(size = self.board.size(), "game reset");
        Transition {
            kind: TransitionKind::Reset,
            game_over: None,
        }
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Color {
        self.current
    }

    pub fn captures(&self) -> Captures {
        self.captures
    }

    pub fn pass_count(&self) -> u8 {
        self.passes
    }

    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    pub fn is_terminal(&self) -> bool {
        self.result.is_some()
    }

    /// Winner, once the game has ended.
    pub fn winner(&self) -> Option<Winner> {
        self.result.map(|r| r.winner)
    }

    /// Score and winner recorded when the game ended.
    pub fn final_score(&self) -> Option<FinalScore> {
        self.result
    }

    pub fn get_stone(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        self.board.get(row, col)
    }

    /// Current score. Meaningful at any time, decisive once terminal.
    pub fn score(&self) -> Score {
        compute_score(&self.board, &self.captures)
    }

    // =========================================================================
    // Legality
    // =========================================================================

    /// Would `color` placing at the empty point `pt` leave its group without
    /// liberties while capturing nothing? Off-board and occupied points are
    /// never suicide.
    pub fn is_suicide(&self, pt: Point, color: Color) -> bool {
        if !self.is_empty_point(pt) {
            return false;
        }
        let mut scratch = self.board.clone();
        scratch.put(pt, Some(color));
        placement_is_suicide(&scratch, pt, color)
    }

    /// Would `color` placing at the empty point `pt` recreate a recorded
    /// position? Off-board and occupied points never do.
    ///
    /// The comparison uses the board with the stone placed and captures not
    /// yet removed.
    pub fn is_repetition(&self, pt: Point, color: Color) -> bool {
        if !self.is_empty_point(pt) {
            return false;
        }
        let mut scratch = self.board.clone();
        scratch.put(pt, Some(color));
        self.history.contains(&scratch.snapshot())
    }

    fn is_empty_point(&self, pt: Point) -> bool {
        self.board.contains(pt.0, pt.1) && self.board.at(pt).is_none()
    }

    /// Whether the player to move may place at `(row, col)`.
    pub fn is_legal(&self, row: usize, col: usize) -> bool {
        if self.is_terminal() || !self.board.contains(row, col) {
            return false;
        }
        let mut scratch = self.board.clone();
        self.violation(&mut scratch, (row, col), self.current).is_none()
    }

    /// Every point the player to move may place at, in row-major order.
    pub fn legal_moves(&self) -> Vec<Point> {
        if self.is_terminal() {
            return Vec::new();
        }
        let mut scratch = self.board.clone();
        self.board
            .points()
            .filter(|&pt| self.violation(&mut scratch, pt, self.current).is_none())
            .collect()
    }

    fn has_legal_move(&self, color: Color) -> bool {
        let mut scratch = self.board.clone();
        let found = self
            .board
            .points()
            .find(|&pt| self.violation(&mut scratch, pt, color).is_none());
        trace!(color = %color, ?found, "legal move scan");
        found.is_some()
    }

    /// Rule violated by `color` placing at `pt`, if any.
    ///
    /// `scratch` must equal the real board; it is restored before returning.
    fn violation(&self, scratch: &mut Board, pt: Point, color: Color) -> Option<MoveError> {
        if scratch.at(pt).is_some() {
            return Some(MoveError::Occupied(pt));
        }
        scratch.put(pt, Some(color));
        let verdict = if placement_is_suicide(scratch, pt, color) {
            Some(MoveError::Suicide(pt))
        } else if self.history.contains(&scratch.snapshot()) {
            Some(MoveError::Repetition(pt))
        } else {
            None
        };
        scratch.put(pt, None);
        verdict
    }

    // =========================================================================
    // Moves
    // =========================================================================

    /// Place a stone for the player to move.
    ///
    /// On success the stone is on the board, captured opponent groups are
    /// removed and tallied, the position is recorded and the turn passes to
    /// the opponent, unless the opponent has no legal move, in which case the
    /// game ends. On error nothing changes.
    pub fn play(&mut self, row: usize, col: usize) -> Result<Transition, MoveError> {
        let color = self.current;
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if !self.board.contains(row, col) {
            let err = MoveError::OutOfBounds {
                row,
                col,
                size: self.board.size(),
            };
            debug!(row, col, color = %color, "{err}");
            return Err(err);
        }

        let pt = (row, col);
        let mut scratch = self.board.clone();
        if let Some(err) = self.violation(&mut scratch, pt, color) {
            debug!(row, col, color = %color, "{err}");
            return Err(err);
        }

        self.board.put(pt, Some(color));
        let captured = self.remove_captured(pt, color);
        if !captured.is_empty() {
            self.captures.add(color.opponent(), captured.len());
            info!(row, col, color = %color, stones = captured.len(), "captured");
        }
        self.history.push(self.board.snapshot());
        self.passes = 0;

        let game_over = if self.has_legal_move(color.opponent()) {
            self.current = color.opponent();
            None
        } else {
            info!(color = %color.opponent(), "no legal moves left");
            Some(self.finish())
        };

        Ok(Transition {
            kind: TransitionKind::Placed {
                point: pt,
                color,
                captured,
            },
            game_over,
        })
    }

    /// Boolean form of [`play`](Self::play): `true` if the stone was placed.
    pub fn attempt_place(&mut self, row: usize, col: usize) -> bool {
        self.play(row, col).is_ok()
    }

    /// Pass the turn. The second consecutive pass ends the game.
    pub fn pass(&mut self) -> Result<Transition, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        let color = self.current;
        self.passes += 1;
        info!(color = %color, passes = self.passes, "pass");

        let game_over = if self.passes >= PASSES_TO_END {
            Some(self.finish())
        } else {
            self.current = color.opponent();
            None
        };
        Ok(Transition {
            kind: TransitionKind::Passed { color },
            game_over,
        })
    }

    /// Boolean form of [`pass`](Self::pass): `true` if the game is over.
    pub fn pass_turn(&mut self) -> bool {
        match self.pass() {
            Ok(t) => t.game_over.is_some(),
            Err(_) => true,
        }
    }

    /// Remove opponent groups adjacent to `pt` that have no liberties left.
    fn remove_captured(&mut self, pt: Point, color: Color) -> Vec<Point> {
        let opponent = Some(color.opponent());
        let mut captured: Vec<Point> = Vec::new();
        for n in self.board.adjacent(pt.0, pt.1) {
            if self.board.at(n) != opponent || captured.contains(&n) {
                continue;
            }
            let group = group_at(&self.board, n);
            if liberties(&group, &self.board).is_empty() {
                captured.extend(group);
            }
        }
        for &p in &captured {
            self.board.put(p, None);
        }
        captured
    }

    fn finish(&mut self) -> FinalScore {
        let score = self.score();
        let winner = determine_winner(&score);
        info!(
            %winner,
            black = score.black_score,
            white = score.white_score,
            "game ended"
        );
        let result = FinalScore { score, winner };
        self.result = Some(result);
        result
    }
}

/// Suicide test on a board that already holds the new stone at `pt`.
fn placement_is_suicide(board: &Board, pt: Point, color: Color) -> bool {
    let own = group_at(board, pt);
    if !liberties(&own, board).is_empty() {
        return false;
    }
    let opponent = Some(color.opponent());
    let captures = board
        .adjacent(pt.0, pt.1)
        .filter(|&n| board.at(n) == opponent)
        .any(|n| liberties(&group_at(board, n), board).is_empty());
    !captures
}
