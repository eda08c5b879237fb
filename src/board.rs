//! Othello board representation and move logic
//!
//! This module contains the game rules: disc colors, board coordinates,
//! move legality via the eight-direction flank scan, and the single
//! mutating entry point that places a disc and flips the flanked runs.
//!
//! The board is deliberately stateless with respect to whose turn it is;
//! turn alternation and pass handling belong to the caller driving the game.

use std::fmt;

use crate::{OthelloError, Result};

/// The eight scan directions as (row, col) deltas
const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A disc color, and equally a player identity
///
/// Black moves first. Empty cells are represented as `None` in the grid,
/// so no fourth "empty" variant is needed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// Returns the opposing color
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
            Color::Black => write!(f, "Black"),
            Color::White => write!(f, "White"),
        }
    }
}

/// A board coordinate
///
/// The derived `Ord` is row-major (row first, then column), which defines
/// the canonical move order used for reproducible search results and for
/// tie-breaking among equally-visited root children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub row: u8,
    pub col: u8,
}

impl Coord {
    /// Creates a coordinate from row and column indices
    pub fn new(row: u8, col: u8) -> Self {
        Coord { row, col }
    }
}

impl fmt::Display for Coord {
    /// Formats as algebraic notation: column letter, then 1-based row
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col) as char, self.row + 1)
    }
}

/// An Othello board of `size x size` cells
///
/// Supported sizes are 4, 6 and 8; anything else is rejected at
/// construction with [`OthelloError::InvalidBoardSize`]. Cloning produces a
/// fully independent grid, which is what the search relies on to keep its
/// simulations from leaking into the caller's board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Color>>,
}

impl Board {
    /// Creates a board in the standard starting position
    ///
    /// The 2x2 center block holds White on the main diagonal and Black on
    /// the anti-diagonal.
    pub fn new(size: usize) -> Result<Self> {
        if !matches!(size, 4 | 6 | 8) {
            return Err(OthelloError::InvalidBoardSize(size));
        }

        let mut board = Board {
            size,
            cells: vec![None; size * size],
        };

        let mid = (size / 2) as u8;
        board.set(Coord::new(mid - 1, mid - 1), Some(Color::White));
        board.set(Coord::new(mid - 1, mid), Some(Color::Black));
        board.set(Coord::new(mid, mid - 1), Some(Color::Black));
        board.set(Coord::new(mid, mid), Some(Color::White));

        Ok(board)
    }

    /// Builds a board from a text diagram
    ///
    /// `X` is Black, `O` is White, `.` is empty; every other character is
    /// ignored, so the output of the `Display` impl parses back. The cell
    /// count must match a playable board size.
    pub fn from_diagram(diagram: &str) -> Result<Self> {
        let mut cells = Vec::new();
        for ch in diagram.chars() {
            match ch {
                'X' => cells.push(Some(Color::Black)),
                'O' => cells.push(Some(Color::White)),
                '.' => cells.push(None),
                _ => {}
            }
        }

        let size = match cells.len() {
            16 => 4,
            36 => 6,
            64 => 8,
            n => {
                return Err(OthelloError::InvalidDiagram(format!(
                    "{} cells do not form a 4x4, 6x6 or 8x8 board",
                    n
                )))
            }
        };

        Ok(Board { size, cells })
    }

    /// Returns the board edge length
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the disc at the given coordinate, or `None` for an empty cell
    pub fn cell(&self, at: Coord) -> Option<Color> {
        self.cells[self.index(at)]
    }

    fn index(&self, at: Coord) -> usize {
        debug_assert!((at.row as usize) < self.size && (at.col as usize) < self.size);
        at.row as usize * self.size + at.col as usize
    }

    fn set(&mut self, at: Coord, value: Option<Color>) {
        let idx = self.index(at);
        self.cells[idx] = value;
    }

    fn in_bounds(&self, row: i16, col: i16) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.size && (col as usize) < self.size
    }

    /// Walks one direction and reports whether a flanked run exists:
    /// one or more opposing discs immediately followed by an own-color disc,
    /// with no gap and no board edge in between.
    fn flank_exists(&self, origin: Coord, color: Color, (dr, dc): (i8, i8)) -> bool {
        let mut row = origin.row as i16 + dr as i16;
        let mut col = origin.col as i16 + dc as i16;
        let mut seen_opponent = false;

        while self.in_bounds(row, col) {
            match self.cell(Coord::new(row as u8, col as u8)) {
                None => return false,
                Some(c) if c == color => return seen_opponent,
                Some(_) => seen_opponent = true,
            }
            row += dr as i16;
            col += dc as i16;
        }

        false
    }

    /// Collects the run of opposing discs flipped in one direction,
    /// or an empty list if the run is not terminated by an own-color disc.
    fn flips_in_direction(&self, origin: Coord, color: Color, (dr, dc): (i8, i8)) -> Vec<Coord> {
        let mut row = origin.row as i16 + dr as i16;
        let mut col = origin.col as i16 + dc as i16;
        let mut run = Vec::new();

        while self.in_bounds(row, col) {
            let here = Coord::new(row as u8, col as u8);
            match self.cell(here) {
                None => return Vec::new(),
                Some(c) if c == color => return run,
                Some(_) => run.push(here),
            }
            row += dr as i16;
            col += dc as i16;
        }

        // Ran off the board before closing the flank
        Vec::new()
    }

    /// Returns every disc that placing `color` at `at` would flip
    ///
    /// Empty when the move is illegal (cell occupied, or no direction
    /// produces a flank).
    pub fn flips_for(&self, at: Coord, color: Color) -> Vec<Coord> {
        if self.cell(at).is_some() {
            return Vec::new();
        }

        let mut flips = Vec::new();
        for dir in DIRECTIONS {
            flips.extend(self.flips_in_direction(at, color, dir));
        }
        flips
    }

    /// Returns true if placing `color` at `at` is a legal move
    pub fn is_legal(&self, at: Coord, color: Color) -> bool {
        if self.cell(at).is_some() {
            return false;
        }
        DIRECTIONS
            .iter()
            .any(|&dir| self.flank_exists(at, color, dir))
    }

    /// Returns all legal moves for `color`, in canonical row-major order
    ///
    /// The stable ordering makes search and rollout behavior reproducible
    /// under a fixed random seed.
    pub fn valid_moves(&self, color: Color) -> Vec<Coord> {
        let mut moves = Vec::new();
        for row in 0..self.size as u8 {
            for col in 0..self.size as u8 {
                let at = Coord::new(row, col);
                if self.is_legal(at, color) {
                    moves.push(at);
                }
            }
        }
        moves
    }

    /// Places a disc and flips every flanked run
    ///
    /// This is the only operation that mutates cell contents. Returns false
    /// without touching the board if the move is illegal. The flip set is
    /// recomputed here rather than cached from an earlier legality check.
    pub fn apply_move(&mut self, at: Coord, color: Color) -> bool {
        let flips = self.flips_for(at, color);
        if flips.is_empty() {
            return false;
        }

        self.set(at, Some(color));
        for flip in flips {
            self.set(flip, Some(color));
        }
        true
    }

    /// Returns the disc counts as (black, white); empties are not counted
    pub fn score(&self) -> (u32, u32) {
        let mut black = 0;
        let mut white = 0;
        for cell in &self.cells {
            match cell {
                Some(Color::Black) => black += 1,
                Some(Color::White) => white += 1,
                None => {}
            }
        }
        (black, white)
    }

    /// Returns true if no cell is empty
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Returns true if the game is over
    ///
    /// The game ends when the board is full, or when neither color has a
    /// legal move. A single color with no moves must pass; that alone does
    /// not end the game.
    pub fn is_terminal(&self) -> bool {
        self.is_full()
            || (self.valid_moves(Color::Black).is_empty()
                && self.valid_moves(Color::White).is_empty())
    }

    /// Returns the leading color, or `None` for a tie
    pub fn winner(&self) -> Option<Color> {
        let (black, white) = self.score();
        match black.cmp(&white) {
            std::cmp::Ordering::Greater => Some(Color::Black),
            std::cmp::Ordering::Less => Some(Color::White),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for col in 0..self.size as u8 {
            write!(f, " {}", (b'a' + col) as char)?;
        }
        writeln!(f)?;

        for row in 0..self.size as u8 {
            write!(f, "{:>2}", row + 1)?;
            for col in 0..self.size as u8 {
                let glyph = match self.cell(Coord::new(row, col)) {
                    Some(Color::Black) => 'X',
                    Some(Color::White) => 'O',
                    None => '.',
                };
                write!(f, " {}", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
