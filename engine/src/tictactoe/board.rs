use std::fmt;
use std::str::FromStr;

use super::types::{BOARD_SIZE, CELL_COUNT, Mark};

/// Nine cells, indexed row-major from the top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// # Panics
    ///
    /// Panics if `index` is not below 9.
    pub fn get(&self, index: usize) -> Mark {
        self.cells[index]
    }

    /// # Panics
    ///
    /// Panics if `index` is not below 9.
    pub fn is_empty(&self, index: usize) -> bool {
        self.cells[index] == Mark::Empty
    }

    /// Checks its own bounds and occupancy so callers outside the turn
    /// controller cannot corrupt a board. The turn controller checks first to
    /// report its own error messages.
    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), String> {
        if index >= CELL_COUNT {
            return Err(format!("Position {} out of bounds", index));
        }
        if mark == Mark::Empty {
            return Err("Cannot place an empty mark".to_string());
        }
        if self.cells[index] != Mark::Empty {
            return Err(format!("Cell {} is already marked", index));
        }
        self.cells[index] = mark;
        Ok(())
    }

    /// Removes a mark placed during search. Only the backtracking code in this
    /// module tree may take marks back off the board.
    pub(crate) fn clear(&mut self, index: usize) {
        self.cells[index] = Mark::Empty;
    }

    /// Writes a mark without the occupancy check, for search trials that are
    /// always undone with [`Board::clear`].
    pub(crate) fn set(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn reset(&mut self) {
        self.cells = [Mark::Empty; CELL_COUNT];
    }

    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Mark::Empty)
            .map(|(index, _)| index)
            .collect()
    }
}

impl FromStr for Board {
    type Err = String;

    /// Parses nine cells, `X`, `O`, and `.`/`-`/`_`/space for empty. Line
    /// breaks and `|` separators are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Mark::Empty; CELL_COUNT];
        let mut count = 0;

        for ch in s.chars().filter(|c| *c != '\n' && *c != '\r' && *c != '|') {
            let mark = match ch {
                'X' | 'x' => Mark::X,
                'O' | 'o' => Mark::O,
                '.' | '-' | '_' | ' ' => Mark::Empty,
                other => return Err(format!("Unexpected board character '{}'", other)),
            };
            if count >= CELL_COUNT {
                return Err("Board has more than 9 cells".to_string());
            }
            cells[count] = mark;
            count += 1;
        }

        if count != CELL_COUNT {
            return Err(format!("Board needs 9 cells, got {}", count));
        }

        Ok(Self { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(BOARD_SIZE).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in chunk {
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}
