//! Grid storage, adjacency and per-cell occupancy.
//!
//! Coordinates are `(row, col)` pairs with `(0, 0)` in the top-left corner.
//! A cell is `None` when empty or `Some(color)` when it holds a stone.

use std::fmt;

use crate::constants::{COLUMN_LETTERS, DEFAULT_SIZE, MAX_SIZE, MIN_SIZE};
use crate::error::BoardError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => f.write_str("black"),
            Color::White => f.write_str("white"),
        }
    }
}

/// Contents of a single cell.
pub type Cell = Option<Color>;

/// A `(row, col)` coordinate.
pub type Point = (usize, usize);

/// Whole-board identity used for repetition detection.
///
/// Two snapshots are equal iff every cell matches.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Snapshot(Box<[Cell]>);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            cells: vec![None; DEFAULT_SIZE * DEFAULT_SIZE],
        }
    }
}

impl Board {
    /// Create an empty `size`x`size` board.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(BoardError::InvalidSize { size });
        }
        Ok(Self {
            size,
            cells: vec![None; size * size],
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    fn idx(&self, (row, col): Point) -> usize {
        row * self.size + col
    }

    fn check(&self, row: usize, col: usize) -> Result<(), BoardError> {
        if self.contains(row, col) {
            Ok(())
        } else {
            Err(BoardError::OutOfBounds {
                row,
                col,
                size: self.size,
            })
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        self.check(row, col)?;
        Ok(self.cells[self.idx((row, col))])
    }

    /// Overwrite a cell. No legality checking is done here.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), BoardError> {
        self.check(row, col)?;
        let i = self.idx((row, col));
        self.cells[i] = cell;
        Ok(())
    }

    /// Cell lookup for points already known to be on the board.
    pub(crate) fn at(&self, pt: Point) -> Cell {
        self.cells[self.idx(pt)]
    }

    pub(crate) fn put(&mut self, pt: Point, cell: Cell) {
        let i = self.idx(pt);
        self.cells[i] = cell;
    }

    /// Orthogonal neighbours (up, down, left, right) that lie on the board.
    /// An off-board point has none.
    pub fn adjacent(&self, row: usize, col: usize) -> impl Iterator<Item = Point> + use<> {
        let size = self.size;
        let on_board = self.contains(row, col);
        [(-1isize, 0isize), (1, 0), (0, -1), (0, 1)]
            .into_iter()
            .filter(move |_| on_board)
            .filter_map(move |(dr, dc)| {
                let r = row.checked_add_signed(dr)?;
                let c = col.checked_add_signed(dc)?;
                (r < size && c < size).then_some((r, c))
            })
    }

    /// Every point on the board in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let size = self.size;
        (0..size).flat_map(move |r| (0..size).map(move |c| (r, c)))
    }

    /// Visited-set index for a point, for traversals that track visits in a flat vec.
    pub(crate) fn flat(&self, pt: Point) -> usize {
        self.idx(pt)
    }

    pub(crate) fn area(&self) -> usize {
        self.cells.len()
    }

    /// Number of stones of `color` on the board.
    pub fn count(&self, color: Color) -> usize {
        self.cells.iter().filter(|&&c| c == Some(color)).count()
    }

    /// Remove every stone.
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot(self.cells.clone().into_boxed_slice())
    }
}

// =============================================================================
// Vertex notation
// =============================================================================

/// A parsed move: a stone placement or a pass.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Vertex {
    Play(Point),
    Pass,
}

/// Parse a vertex such as `"D4"` or `"pass"` for a board of `size`.
///
/// Columns are letters starting at `A` (skipping `I`), rows count up from
/// the bottom edge, so `"A1"` is the bottom-left corner `(size - 1, 0)`.
pub fn parse_vertex(s: &str, size: usize) -> Result<Vertex, BoardError> {
    let bad = || BoardError::BadVertex(s.to_string());
    if s.eq_ignore_ascii_case("pass") {
        return Ok(Vertex::Pass);
    }

    let mut chars = s.chars();
    let letter = chars.next().ok_or_else(bad)?.to_ascii_uppercase();
    let col = COLUMN_LETTERS
        .iter()
        .position(|&b| b as char == letter)
        .ok_or_else(bad)?;
    let number: usize = chars.as_str().parse().map_err(|_| bad())?;
    if number == 0 || number > size || col >= size {
        return Err(bad());
    }
    Ok(Vertex::Play((size - number, col)))
}

/// Inverse of [`parse_vertex`]. Points off a `size` board are rejected.
pub fn format_vertex((row, col): Point, size: usize) -> Result<String, BoardError> {
    let letter = COLUMN_LETTERS
        .get(col)
        .filter(|_| row < size && col < size)
        .ok_or(BoardError::OutOfBounds { row, col, size })?;
    Ok(format!("{}{}", *letter as char, size - row))
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            write!(f, "{:>2} ", self.size - row)?;
            for col in 0..self.size {
                let ch = match self.at((row, col)) {
                    Some(Color::Black) => 'X',
                    Some(Color::White) => 'O',
                    None => '.',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        write!(f, "   ")?;
        for &letter in &COLUMN_LETTERS[..self.size] {
            write!(f, "{} ", letter as char)?;
        }
        writeln!(f)
    }
}
