use std::fmt;

use super::types::Mark;

pub const BOARD_SIZE: usize = 9;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Mark; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_marks(cells: [Mark; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// Parses nine characters, `X`/`O` for marks and `.`, `-`, `_` or space for empty cells.
    pub fn parse(s: &str) -> Option<Self> {
        let mut cells = [Mark::Empty; BOARD_SIZE];
        let mut count = 0;
        for ch in s.chars() {
            if count == BOARD_SIZE {
                return None;
            }
            cells[count] = match ch {
                'X' | 'x' => Mark::X,
                'O' | 'o' => Mark::O,
                '.' | '-' | '_' | ' ' => Mark::Empty,
                _ => return None,
            };
            count += 1;
        }
        (count == BOARD_SIZE).then_some(Self { cells })
    }

    pub fn cells(&self) -> &[Mark; BOARD_SIZE] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    pub fn is_valid_move(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Mark::Empty))
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    pub(crate) fn set(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
    }

    pub(crate) fn clear(&mut self, index: usize) {
        self.cells[index] = Mark::Empty;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            let ch = match cell {
                Mark::Empty => '.',
                Mark::X => 'X',
                Mark::O => 'O',
            };
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.available_moves(), (0..9).collect::<Vec<_>>());
        assert!(!board.is_full());
    }

    #[test]
    fn test_parse_and_display() {
        let board = Board::parse("XX.OO....").unwrap();
        assert_eq!(board.get(0), Some(Mark::X));
        assert_eq!(board.get(3), Some(Mark::O));
        assert_eq!(board.get(2), Some(Mark::Empty));
        assert_eq!(board.to_string(), "XX.OO....");
    }

    #[test]
    fn test_parse_rejects_wrong_length_and_symbols() {
        assert!(Board::parse("XX.OO...").is_none());
        assert!(Board::parse("XX.OO.....").is_none());
        assert!(Board::parse("XX.OO...Z").is_none());
    }

    #[test]
    fn test_is_valid_move() {
        let board = Board::parse("X........").unwrap();
        assert!(!board.is_valid_move(0));
        assert!(board.is_valid_move(1));
        assert!(!board.is_valid_move(9));
    }

    #[test]
    fn test_available_moves_in_index_order() {
        let board = Board::parse("X.O.X.O.X").unwrap();
        assert_eq!(board.available_moves(), vec![1, 3, 5, 7]);
        assert_eq!(board.count(Mark::X), 3);
        assert_eq!(board.count(Mark::O), 2);
    }

    #[test]
    fn test_full_board() {
        let board = Board::parse("XOXOXOOXO").unwrap();
        assert!(board.is_full());
        assert!(board.available_moves().is_empty());
    }
}
