//! The static battlefield grid and spawn geometry.

use std::io::BufRead;

use crate::error::ProtocolResult;
use crate::game::{Defender, GameConfig, Position, UnitId};
use crate::protocol::TokenReader;

/// The static battlefield grid, parsed once ahead of the first turn.
///
/// Cells hold small non-negative integers: 0 is empty, `v > 0` means a
/// defender of type id `v` occupies the cell. The axis convention used
/// everywhere in this crate: `x` is the column axis in `[0, cols)`, `y` is
/// the row axis in `[0, rows)`.
#[derive(Debug, Clone)]
pub struct Board {
    rows: i32,
    cols: i32,
    /// Cells in row-major order.
    cells: Vec<u32>,
}

impl Board {
    /// Read the grid block from the protocol stream.
    ///
    /// Consumes `rows cols` then `rows` rows of `cols` integers each.
    ///
    /// # Errors
    ///
    /// Returns an error if the stream is short or contains a non-integer
    /// token. The protocol is trusted, so the failure is fatal to the caller.
    pub fn read<R: BufRead>(tokens: &mut TokenReader<R>) -> ProtocolResult<Self> {
        let rows = tokens.next_i32()?;
        let cols = tokens.next_i32()?;

        let mut cells = Vec::new();
        for _ in 0..rows {
            for _ in 0..cols {
                cells.push(tokens.next_u32()?);
            }
        }

        Ok(Self { rows, cols, cells })
    }

    /// Number of grid rows.
    #[must_use]
    pub const fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of grid columns.
    #[must_use]
    pub const fn cols(&self) -> i32 {
        self.cols
    }

    /// Cell value at `(x, y)`. Caller must have bounds-checked.
    #[allow(clippy::cast_sign_loss)]
    fn cell(&self, x: i32, y: i32) -> u32 {
        self.cells[(y * self.cols + x) as usize]
    }

    /// Derive the initial defenders from non-zero grid cells.
    ///
    /// The grid is scanned in column-major order (outer loop over `x`,
    /// inner loop over `y`) and defenders receive sequential ids starting
    /// at 0 in scan order. The scan order is a contract with the simulator,
    /// which assigns the same ids to the same placements.
    #[must_use]
    pub fn spawn_defenders(&self, config: &GameConfig) -> Vec<Defender> {
        let mut defenders = Vec::new();
        let mut next_id: UnitId = 0;

        for x in 0..self.cols {
            for y in 0..self.rows {
                let type_id = self.cell(x, y);
                if type_id == 0 {
                    continue;
                }
                if let Some(defender_type) = config.defender_type(type_id) {
                    defenders.push(Defender {
                        id: next_id,
                        hp: defender_type.attributes.hp,
                        type_id,
                        position: Position::new(x, y),
                    });
                    next_id += 1;
                }
            }
        }

        defenders
    }

    /// Whether `position` is a legal spawn cell: in bounds and on the
    /// perimeter of the grid.
    #[must_use]
    pub fn is_spawn_position(&self, position: Position) -> bool {
        let Position { x, y } = position;
        if x < 0 || y < 0 || x >= self.cols || y >= self.rows {
            return false;
        }
        x == 0 || y == 0 || x == self.cols - 1 || y == self.rows - 1
    }

    /// All legal spawn cells, each exactly once.
    ///
    /// Enumerated in row-major scan order (`y` ascending, then `x`
    /// ascending), so positional consumers such as a round-robin cursor see
    /// a stable order. Agrees exactly with [`Board::is_spawn_position`].
    #[must_use]
    pub fn spawn_positions(&self) -> Vec<Position> {
        let mut positions = Vec::new();
        for y in 0..self.rows {
            for x in 0..self.cols {
                if x == 0 || y == 0 || x == self.cols - 1 || y == self.rows - 1 {
                    positions.push(Position::new(x, y));
                }
            }
        }
        positions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(input: &str) -> Board {
        let mut tokens = TokenReader::new(input.as_bytes());
        Board::read(&mut tokens).unwrap()
    }

    fn two_type_config() -> GameConfig {
        let input = "\
10 100
1
10 3 4 2 60
2
100 6 15 0 200
80 4 10 0 120
";
        let mut tokens = TokenReader::new(input.as_bytes());
        GameConfig::read(&mut tokens).unwrap()
    }

    #[test]
    fn test_read_dimensions() {
        let board = board_from("2 3\n0 0 1\n2 0 0\n");
        assert_eq!(board.rows(), 2);
        assert_eq!(board.cols(), 3);
    }

    #[test]
    fn test_defenders_column_major_scan() {
        // Row-major scan would yield (1, 0) before (0, 1); column-major
        // must yield (0, 1) first.
        let board = board_from("2 2\n0 2\n1 0\n");
        let defenders = board.spawn_defenders(&two_type_config());

        assert_eq!(defenders.len(), 2);

        assert_eq!(defenders[0].id, 0);
        assert_eq!(defenders[0].position, Position::new(0, 1));
        assert_eq!(defenders[0].type_id, 1);
        assert_eq!(defenders[0].hp, 100);

        assert_eq!(defenders[1].id, 1);
        assert_eq!(defenders[1].position, Position::new(1, 0));
        assert_eq!(defenders[1].type_id, 2);
        assert_eq!(defenders[1].hp, 80);
    }

    #[test]
    fn test_defenders_empty_grid() {
        let board = board_from("2 2\n0 0\n0 0\n");
        assert!(board.spawn_defenders(&two_type_config()).is_empty());
    }

    #[test]
    fn test_spawn_validity() {
        let board = board_from("3 4\n0 0 0 0\n0 0 0 0\n0 0 0 0\n");

        // Corners and edges.
        assert!(board.is_spawn_position(Position::new(0, 0)));
        assert!(board.is_spawn_position(Position::new(3, 2)));
        assert!(board.is_spawn_position(Position::new(1, 0)));
        assert!(board.is_spawn_position(Position::new(0, 1)));

        // Interior.
        assert!(!board.is_spawn_position(Position::new(1, 1)));
        assert!(!board.is_spawn_position(Position::new(2, 1)));

        // Out of bounds, including negatives.
        assert!(!board.is_spawn_position(Position::new(-1, 0)));
        assert!(!board.is_spawn_position(Position::new(0, -1)));
        assert!(!board.is_spawn_position(Position::new(4, 0)));
        assert!(!board.is_spawn_position(Position::new(0, 3)));
    }

    #[test]
    fn test_spawn_positions_count_and_order() {
        let board = board_from("3 4\n0 0 0 0\n0 0 0 0\n0 0 0 0\n");
        let positions = board.spawn_positions();

        // 2*rows + 2*cols - 4 distinct perimeter cells.
        assert_eq!(positions.len(), 10);

        // Row-major enumeration: full top row, then edge cells, then full
        // bottom row.
        assert_eq!(positions[0], Position::new(0, 0));
        assert_eq!(positions[3], Position::new(3, 0));
        assert_eq!(positions[4], Position::new(0, 1));
        assert_eq!(positions[5], Position::new(3, 1));
        assert_eq!(positions[6], Position::new(0, 2));
        assert_eq!(positions[9], Position::new(3, 2));
    }

    #[test]
    fn test_enumeration_agrees_with_validator() {
        let board = board_from("4 5\n0 0 0 0 0\n0 0 0 0 0\n0 0 0 0 0\n0 0 0 0 0\n");
        let positions = board.spawn_positions();
        assert!(positions.iter().all(|&p| board.is_spawn_position(p)));

        for y in 0..board.rows() {
            for x in 0..board.cols() {
                let p = Position::new(x, y);
                assert_eq!(board.is_spawn_position(p), positions.contains(&p));
            }
        }
    }

    #[test]
    fn test_minimal_grid_all_perimeter() {
        let board = board_from("2 2\n0 0\n0 0\n");
        assert_eq!(board.spawn_positions().len(), 4);
    }
}
