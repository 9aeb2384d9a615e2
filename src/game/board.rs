use super::Seat;
use crate::error::GameError;

pub const DEFAULT_WIDTH: usize = 7;
pub const DEFAULT_HEIGHT: usize = 6;
/// Smallest side that still fits a run in every direction.
pub const MIN_SIDE: usize = 4;
pub const RUN_LENGTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Taken(Seat),
}

/// Directions a run is scanned in, in scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Horizontal,
    Vertical,
    DiagonalDownRight,
    DiagonalDownLeft,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDownRight,
        Direction::DiagonalDownLeft,
    ];

    /// (row, col) step between consecutive cells of a run
    fn delta(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDownRight => (1, 1),
            Direction::DiagonalDownLeft => (1, -1),
        }
    }
}

/// Four in a row: where it starts, which way it goes, and the cells it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub direction: Direction,
    pub cells: [(usize, usize); RUN_LENGTH],
}

impl Run {
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells.contains(&(row, col))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: usize, height: usize) -> Result<Self, GameError> {
        let invalid = GameError::InvalidDimensions { width, height };
        if width < MIN_SIDE || height < MIN_SIDE {
            return Err(invalid);
        }
        // Cell count must fit in an allocation
        let len = width
            .checked_mul(height)
            .filter(|&len| len <= isize::MAX as usize / std::mem::size_of::<Cell>())
            .ok_or(invalid)?;
        Ok(Board {
            width,
            height,
            cells: vec![Cell::Empty; len],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row `height - 1` is the bottom.
    /// Panics unless `row < height()` and `col < width()`.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.width + col]
    }

    fn check_column(&self, col: usize) -> Result<(), GameError> {
        if col >= self.width {
            return Err(GameError::InvalidColumn {
                column: col,
                width: self.width,
            });
        }
        Ok(())
    }

    /// Lowest empty row in a column, or `None` if the column is full
    pub fn lowest_open_row(&self, col: usize) -> Result<Option<usize>, GameError> {
        self.check_column(col)?;
        Ok((0..self.height)
            .rev()
            .find(|&row| self.get(row, col) == Cell::Empty))
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        !matches!(self.lowest_open_row(col), Ok(Some(_)))
    }

    /// Columns that can still take a piece, left to right
    pub fn open_columns(&self) -> Vec<usize> {
        (0..self.width)
            .filter(|&col| !self.is_column_full(col))
            .collect()
    }

    /// Drop a piece in a column for `seat`, returns the row where it landed.
    ///
    /// Turn order is not enforced here; [`crate::game::Game`] owns that.
    pub fn drop_piece(&mut self, col: usize, seat: Seat) -> Result<usize, GameError> {
        let row = self
            .lowest_open_row(col)?
            .ok_or(GameError::ColumnFull(col))?;
        self.cells[row * self.width + col] = Cell::Taken(seat);
        Ok(row)
    }

    /// Check if every cell is occupied
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Cell::Empty)
    }

    /// Check if `seat` owns four in a row anywhere on the board
    pub fn check_win(&self, seat: Seat) -> bool {
        self.winning_run(seat).is_some()
    }

    /// First run owned by `seat`.
    ///
    /// Every cell is tried as a run start in row-major order; for each start
    /// the directions are tried in [`Direction::ALL`] order. Only forward
    /// directions are scanned, so each run is seen exactly once.
    pub fn winning_run(&self, seat: Seat) -> Option<Run> {
        let owner = Cell::Taken(seat);
        for row in 0..self.height {
            for col in 0..self.width {
                if self.get(row, col) != owner {
                    continue;
                }
                for direction in Direction::ALL {
                    if let Some(cells) = self.run_cells(row, col, direction) {
                        if cells.iter().all(|&(r, c)| self.get(r, c) == owner) {
                            return Some(Run { direction, cells });
                        }
                    }
                }
            }
        }
        None
    }

    /// Coordinates of the four cells starting at (row, col), if all are on the board
    fn run_cells(
        &self,
        row: usize,
        col: usize,
        direction: Direction,
    ) -> Option<[(usize, usize); RUN_LENGTH]> {
        let (dr, dc) = direction.delta();
        let mut cells = [(row, col); RUN_LENGTH];
        for (step, cell) in cells.iter_mut().enumerate().skip(1) {
            let offset = step as isize;
            let r = row.checked_add_signed(dr * offset)?;
            let c = col.checked_add_signed(dc * offset)?;
            if r >= self.height || c >= self.width {
                return None;
            }
            *cell = (r, c);
        }
        Some(cells)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            cells: vec![Cell::Empty; DEFAULT_WIDTH * DEFAULT_HEIGHT],
        }
    }
}
