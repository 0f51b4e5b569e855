//! Board representation, move generation and canonical hashing

use std::{collections::HashSet, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{lines::LineAnalyzer, symmetry::Symmetry};

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// Base-3 digit used by [`Board::encode`]
    pub fn digit(self) -> u32 {
        match self {
            Cell::Empty => 0,
            Cell::X => 1,
            Cell::O => 2,
        }
    }

    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game. X always opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    /// Dense index, used for per-player tables
    pub fn index(self) -> usize {
        match self {
            Player::X => 0,
            Player::O => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Player::X => "X",
            Player::O => "O",
        })
    }
}

impl FromStr for Player {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" | "x" => Ok(Player::X),
            "O" | "o" => Ok(Player::O),
            other => Err(crate::Error::InvalidPlayerString {
                player: other.to_string(),
            }),
        }
    }
}

/// Cache key shared by every board in one symmetry orbit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CanonicalHash(u32);

impl CanonicalHash {
    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for CanonicalHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Immutable board position.
///
/// Only positions where X has placed as many pieces as O, or exactly one
/// more, can be constructed, so the side to move is always well defined.
/// Two boards are equal when their cells are identical; boards that are
/// merely symmetric share a [`CanonicalHash`] instead.
///
/// This type implements `Copy` since it is only 9 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[Cell; 9]", into = "[Cell; 9]")]
pub struct Board {
    cells: [Cell; 9],
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PieceCount {
    x: usize,
    o: usize,
}

impl Board {
    /// Create a new empty board (X to move)
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    /// Build a board from raw cells.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPieceCounts`] unless X has placed as
    /// many pieces as O or exactly one more.
    pub fn from_cells(cells: [Cell; 9]) -> Result<Self, crate::Error> {
        let count = Self::count_pieces(&cells);
        if count.x == count.o || count.x == count.o + 1 {
            Ok(Board { cells })
        } else {
            Err(crate::Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            })
        }
    }

    /// Parse a board from text.
    ///
    /// Accepts 9 cells written as `X`, `O` or `.`; whitespace and `/` row
    /// separators are ignored, so `"X.O/.X./..."` and `"X.O.X...."` are the
    /// same board.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The text has a number of cells other than 9
    /// - Any character is not a valid cell representation
    /// - The piece counts are invalid
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .collect();
        if chars.len() != 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Self::from_cells(cells)
    }

    fn count_pieces(cells: &[Cell; 9]) -> PieceCount {
        let mut count = PieceCount { x: 0, o: 0 };
        for cell in cells {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => {}
            }
        }
        count
    }

    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Number of occupied cells
    pub fn moves_played(&self) -> usize {
        let count = Self::count_pieces(&self.cells);
        count.x + count.o
    }

    /// X moves when the counts are level, O when X leads by one.
    pub fn side_to_move(&self) -> Player {
        let count = Self::count_pieces(&self.cells);
        if count.x == count.o {
            Player::X
        } else {
            Player::O
        }
    }

    /// Get all empty positions
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Check if a player has three in a row
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    /// Owner of a winning line, if any.
    ///
    /// `None` covers both draws and unfinished games; check
    /// [`Board::is_terminal`] to tell them apart.
    pub fn winner(&self) -> Option<Player> {
        if self.has_won(Player::X) {
            Some(Player::X)
        } else if self.has_won(Player::O) {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Check if the game is over (win or full board)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || !self.cells.contains(&Cell::Empty)
    }

    /// Place the side to move's mark at `pos`.
    #[must_use = "play returns a new board; the original is unchanged"]
    pub fn play(&self, pos: usize) -> Result<Board, crate::Error> {
        if pos >= 9 {
            return Err(crate::Error::InvalidPosition { position: pos });
        }
        if self.is_terminal() {
            return Err(crate::Error::GameOver);
        }
        if self.cells[pos] != Cell::Empty {
            return Err(crate::Error::InvalidMove { position: pos });
        }
        Ok(self.place(pos))
    }

    fn place(&self, pos: usize) -> Board {
        let mut child = *self;
        child.cells[pos] = self.side_to_move().to_cell();
        child
    }

    /// Every legal child, one per empty cell in index order.
    ///
    /// Each physical move appears exactly once, so this is the list to
    /// average over when the mover plays uniformly at random. Empty for
    /// terminal boards.
    pub fn all_moves(&self) -> Vec<Board> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.empty_positions()
            .into_iter()
            .map(|pos| self.place(pos))
            .collect()
    }

    /// Legal children with symmetric duplicates removed, keeping the first
    /// occurrence in index order.
    ///
    /// Only valid where every member of an orbit has the same value, such as
    /// a maximising choice. Never use it to weight outcomes.
    pub fn unique_moves(&self) -> Vec<Board> {
        let mut seen = HashSet::new();
        self.all_moves()
            .into_iter()
            .filter(|child| seen.insert(child.canonical_hash()))
            .collect()
    }

    /// Images of this board under [`Symmetry::ALL`], identity first.
    pub fn symmetries(&self) -> [Board; 8] {
        Symmetry::ALL.map(|symmetry| self.transform(symmetry))
    }

    /// Apply one symmetry of the square to the board
    pub fn transform(&self, symmetry: Symmetry) -> Board {
        Board {
            cells: symmetry.apply(&self.cells),
        }
    }

    /// Raw base-3 encoding: sum of `cell[i] * 3^i`.
    pub fn encode(&self) -> u32 {
        self.cells
            .iter()
            .rev()
            .fold(0, |acc, cell| acc * 3 + cell.digit())
    }

    /// Smallest [`Board::encode`] value across the symmetry orbit.
    pub fn canonical_hash(&self) -> CanonicalHash {
        let min = self
            .symmetries()
            .iter()
            .fold(u32::MAX, |best, image| best.min(image.encode()));
        CanonicalHash(min)
    }

    /// Compact single-line form, e.g. `X.O.X....`
    pub fn label(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }

    /// First position where two boards differ, or `None` if identical.
    pub fn changed_square(&self, other: &Board) -> Option<usize> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .position(|(a, b)| a != b)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<[Cell; 9]> for Board {
    type Error = crate::Error;

    fn try_from(cells: [Cell; 9]) -> Result<Self, Self::Error> {
        Board::from_cells(cells)
    }
}

impl From<Board> for [Cell; 9] {
    fn from(board: Board) -> Self {
        board.cells
    }
}

impl FromStr for Board {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_string(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1) % 3 == 0 && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
