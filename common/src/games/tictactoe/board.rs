use super::types::{CELL_COUNT, Cell, IllegalMove, Player};

/// Immutable 3x3 grid. Index `i` sits at row `i / 3`, column `i % 3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Returns a copy of the board with `index` marked for `player`.
    pub fn apply(&self, index: usize, player: Player) -> Result<Board, IllegalMove> {
        let cell = self.cell(index).ok_or(IllegalMove::OutOfRange(index))?;
        if !cell.is_empty() {
            return Err(IllegalMove::Occupied(index));
        }

        let mut cells = self.cells;
        cells[index] = Cell::of(player);
        Ok(Board { cells })
    }

    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    pub fn is_empty(&self, index: usize) -> bool {
        self.cell(index).is_some_and(Cell::is_empty)
    }

    pub fn empty_indices(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    pub fn move_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Turn order follows from parity: A moves on even counts.
    pub fn next_player(&self) -> Player {
        if self.move_count() % 2 == 0 {
            Player::A
        } else {
            Player::B
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.empty_indices(), (0..9).collect::<Vec<_>>());
        assert_eq!(board.move_count(), 0);
        assert!(!board.is_full());
        assert_eq!(board.next_player(), Player::A);
    }

    #[test]
    fn test_apply_returns_new_board_and_leaves_original() {
        let board = Board::new();
        let next = board.apply(4, Player::A).unwrap();
        assert_eq!(next.cell(4), Some(Cell::MarkA));
        assert_eq!(board.cell(4), Some(Cell::Empty));
        assert_eq!(next.next_player(), Player::B);
    }

    #[test]
    fn test_apply_rejects_occupied_cell() {
        let board = Board::new().apply(0, Player::A).unwrap();
        assert_eq!(board.apply(0, Player::B), Err(IllegalMove::Occupied(0)));
    }

    #[test]
    fn test_apply_rejects_out_of_range() {
        assert_eq!(Board::new().apply(9, Player::A), Err(IllegalMove::OutOfRange(9)));
        assert!(!Board::new().is_empty(100));
    }

    #[test]
    fn test_full_board() {
        let board = Board::from_cells([Cell::MarkA; CELL_COUNT]);
        assert!(board.is_full());
        assert!(board.empty_indices().is_empty());
    }
}
