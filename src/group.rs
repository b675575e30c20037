//! Connected-component discovery and liberty counting.
//!
//! All functions here are pure: they read a [`Board`] and never mutate it, so
//! they can be called any number of times while a move is being validated.

use std::collections::BTreeSet;

use crate::board::{Board, Color, Point};
use crate::error::BoardError;

/// A set of same-colored, orthogonally connected points.
pub type Group = BTreeSet<Point>;

/// Find the group containing `(row, col)`.
///
/// Returns an empty group for an empty cell.
pub fn find_group(board: &Board, row: usize, col: usize) -> Result<Group, BoardError> {
    board.get(row, col)?;
    Ok(group_at(board, (row, col)))
}

/// Flood-fill from an on-board point over stones of the same color.
pub(crate) fn group_at(board: &Board, start: Point) -> Group {
    let mut group = Group::new();
    let Some(color) = board.at(start) else {
        return group;
    };

    let mut stack = vec![start];
    let mut visited = vec![false; board.area()];
    visited[board.flat(start)] = true;

    while let Some(pt) = stack.pop() {
        group.insert(pt);
        for n in board.adjacent(pt.0, pt.1) {
            let i = board.flat(n);
            if !visited[i] && board.at(n) == Some(color) {
                visited[i] = true;
                stack.push(n);
            }
        }
    }
    group
}

/// Empty points orthogonally adjacent to any stone of `group`.
pub fn liberties(group: &Group, board: &Board) -> BTreeSet<Point> {
    group
        .iter()
        .flat_map(|&(row, col)| board.adjacent(row, col))
        .filter(|&n| board.at(n).is_none())
        .collect()
}

/// Color that borders the whole empty region containing `(row, col)`.
///
/// Flood-fills over empty points; returns `Some(color)` when every stone
/// touching the region has that one color, and `None` when the region touches
/// both colors, touches no stones at all, or the start point is occupied.
/// This is an analysis aid only and does not feed into scoring.
pub fn region_owner(board: &Board, row: usize, col: usize) -> Result<Option<Color>, BoardError> {
    if board.get(row, col)?.is_some() {
        return Ok(None);
    }

    let mut stack = vec![(row, col)];
    let mut visited = vec![false; board.area()];
    visited[board.flat((row, col))] = true;
    let mut border: Option<Color> = None;

    while let Some(pt) = stack.pop() {
        for n in board.adjacent(pt.0, pt.1) {
            match board.at(n) {
                None => {
                    let i = board.flat(n);
                    if !visited[i] {
                        visited[i] = true;
                        stack.push(n);
                    }
                }
                Some(c) => match border {
                    None => border = Some(c),
                    Some(b) if b != c => return Ok(None),
                    Some(_) => {}
                },
            }
        }
    }
    Ok(border)
}
