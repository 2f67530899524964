use std::fmt::{Display, Formatter};

use tracing::debug;

use super::Piece;
use crate::game::grid::{Grid, GridIndex, LineIterator};
use crate::game::{GameError, GameResult};

pub const DEFAULT_BOARD_SIZE: usize = 3;
pub const MIN_BOARD_SIZE: usize = 3;

pub type Cell = Option<Piece>;

/// A full row, column or diagonal of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Line {
    Row(usize),
    Col(usize),
    MainDiagonal,
    AntiDiagonal,
}

/// Square playing field. Every cell is written at most once.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    field: Grid<Cell>,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            field: Grid::new(DEFAULT_BOARD_SIZE),
        }
    }
}

impl Board {
    pub fn new(size: usize) -> GameResult<Self> {
        if size < MIN_BOARD_SIZE {
            return Err(GameError::invalid_board_size(MIN_BOARD_SIZE, size));
        }
        Ok(Self {
            field: Grid::new(size),
        })
    }

    pub fn size(&self) -> usize {
        self.field.side()
    }

    /// Returns the piece at `(row, col)`, [`None`] for empty or out of range cells.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.field.get(GridIndex::new(row, col)).copied().flatten()
    }

    /// Stores `piece` at `(row, col)`.
    ///
    /// Returns `false` and leaves the board untouched if the cell is out of range
    /// or already occupied.
    pub fn place(&mut self, row: usize, col: usize, piece: Piece) -> bool {
        match self.field.get_mut(GridIndex::new(row, col)) {
            Some(cell) if cell.is_none() => {
                *cell = Some(piece);
                debug!(row, col, %piece, "piece placed");
                true
            }
            _ => false,
        }
    }

    /// Unoccupied cells in row-major order.
    pub fn empty_cells(&self) -> Vec<GridIndex> {
        self.field
            .all_indexed()
            .filter(|(_, cell)| cell.is_none())
            .map(|(idx, _)| idx)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.field.iter().flatten().all(|cell| cell.is_some())
    }

    /// Lines that pass through `idx`. Diagonals are included only when `idx` lies on them.
    pub fn lines_through(&self, idx: GridIndex) -> impl Iterator<Item = Line> {
        let last = self.size() - 1;
        let (row, col) = (idx.row(), idx.col());
        [
            Some(Line::Row(row)),
            Some(Line::Col(col)),
            (row == col).then_some(Line::MainDiagonal),
            (row + col == last).then_some(Line::AntiDiagonal),
        ]
        .into_iter()
        .flatten()
    }

    /// Cells of `line`, starting from the top row (or the left column for rows).
    pub fn cells_on(&self, line: Line) -> LineIterator<'_, Cell> {
        match line {
            Line::Row(row) => self.field.right_iter((row, 0).into()),
            Line::Col(col) => self.field.bottom_iter((0, col).into()),
            Line::MainDiagonal => self.field.bottom_right_iter((0, 0).into()),
            Line::AntiDiagonal => self.field.bottom_left_iter((0, self.size() - 1).into()),
        }
    }

    /// Returns `true` if every cell of `line` holds `piece`.
    pub fn line_is(&self, line: Line, piece: Piece) -> bool {
        let mut cells = self.cells_on(line).peekable();
        cells.peek().is_some() && cells.all(|cell| *cell == Some(piece))
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in self.field.iter() {
            for cell in row {
                match cell {
                    Some(piece) => write!(f, "{} ", piece)?,
                    None => f.write_str("  ")?,
                }
                f.write_str("|")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
