//! Board and reveal rules for Mines.

use crate::constants::MINES_CELLS;
use crate::error::MoveError;
use rand::Rng;
use rand::seq::SliceRandom;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Safe,
    Bomb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardStatus {
    InProgress,
    Busted,
    Cleared,
}

/// Result of a single reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reveal {
    Safe { revealed: usize, remaining: usize },
    Busted,
    Cleared,
}

#[derive(Debug, Clone)]
pub struct MinesBoard {
    cells: [Cell; MINES_CELLS],
    revealed: [bool; MINES_CELLS],
    safe_total: usize,
    safe_revealed: usize,
    status: BoardStatus,
}

impl MinesBoard {
    /// Lays out `bombs` bombs by uniform shuffle. `bombs` is clamped to leave
    /// at least one safe cell.
    pub fn new<R: Rng + ?Sized>(bombs: usize, rng: &mut R) -> Self {
        let bombs = bombs.clamp(1, MINES_CELLS - 1);
        let mut cells = [Cell::Safe; MINES_CELLS];
        cells[..bombs].fill(Cell::Bomb);
        cells.shuffle(rng);
        Self::from_cells(cells)
    }

    /// Builds a board with bombs at exactly the given indices. Out-of-range
    /// indices are ignored.
    pub fn from_layout(bomb_indices: &[usize]) -> Self {
        let mut cells = [Cell::Safe; MINES_CELLS];
        for &idx in bomb_indices {
            if let Some(cell) = cells.get_mut(idx) {
                *cell = Cell::Bomb;
            }
        }
        Self::from_cells(cells)
    }

    fn from_cells(cells: [Cell; MINES_CELLS]) -> Self {
        let safe_total = cells.iter().filter(|c| **c == Cell::Safe).count();
        Self {
            cells,
            revealed: [false; MINES_CELLS],
            safe_total,
            safe_revealed: 0,
            status: BoardStatus::InProgress,
        }
    }

    pub fn status(&self) -> BoardStatus {
        self.status
    }

    pub fn cell(&self, idx: usize) -> Option<Cell> {
        self.cells.get(idx).copied()
    }

    pub fn is_revealed(&self, idx: usize) -> bool {
        self.revealed.get(idx).copied().unwrap_or(false)
    }

    pub fn safe_total(&self) -> usize {
        self.safe_total
    }

    pub fn safe_revealed(&self) -> usize {
        self.safe_revealed
    }

    pub fn bomb_count(&self) -> usize {
        MINES_CELLS - self.safe_total
    }

    pub fn reveal(&mut self, idx: usize) -> Result<Reveal, MoveError> {
        if self.status != BoardStatus::InProgress {
            return Err(MoveError::GameOver);
        }
        let cell = self.cell(idx).ok_or(MoveError::OutOfRange(idx))?;
        if self.revealed[idx] {
            return Err(MoveError::AlreadyRevealed);
        }
        self.revealed[idx] = true;

        if cell == Cell::Bomb {
            self.status = BoardStatus::Busted;
            return Ok(Reveal::Busted);
        }
        self.safe_revealed += 1;
        if self.safe_revealed == self.safe_total {
            self.status = BoardStatus::Cleared;
            return Ok(Reveal::Cleared);
        }
        Ok(Reveal::Safe {
            revealed: self.safe_revealed,
            remaining: self.safe_total - self.safe_revealed,
        })
    }
}
