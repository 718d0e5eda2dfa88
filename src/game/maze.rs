//! Maze v1 - a fixed-size walled grid with one exit and a guaranteed route to it.
//!
//! Generation fills the interior with random walls, then carves two corridors over the
//! top of that noise: column 1 from the start down to row `size - 2`, and row `size - 2`
//! across to the exit on the right border. The random fill never runs after the carve,
//! so the start and the exit are always connected no matter what the walls did.
//!
//! Notes:
//! - Grid is row-major `size * size`; positions are `(row, col)` with row 0 at the top.
//! - The exit replaces a border wall at `(size - 2, size - 1)`.
//! - Seeded generation (`Maze::from_seed`) is deterministic; use it in tests and replays.

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

use super::errors::GameError;

pub const DEFAULT_SIZE: usize = 10;
pub const DEFAULT_WALL_CHANCE: u8 = 25;
/// Smallest grid that still has an interior cell, a corridor row, and a border to put the exit in.
pub const MIN_SIZE: usize = 3;
/// Largest grid accepted; anything bigger will not fit a terminal anyway.
pub const MAX_SIZE: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Wall,
    Floor,
    Exit,
}

impl Cell {
    pub fn symbol(self) -> char {
        match self {
            Cell::Wall => '#',
            Cell::Floor => '.',
            Cell::Exit => 'X',
        }
    }

    pub fn is_passable(self) -> bool {
        !matches!(self, Cell::Wall)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// W/A/S/D, either case.
    pub fn from_key(c: char) -> Option<Direction> {
        match c.to_ascii_uppercase() {
            'W' => Some(Direction::Up),
            'S' => Some(Direction::Down),
            'A' => Some(Direction::Left),
            'D' => Some(Direction::Right),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

pub const START: Position = Position { row: 1, col: 1 };

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Out of bounds or into a wall; position unchanged.
    Blocked,
    Moved,
    ReachedExit,
}

#[derive(Debug, Clone)]
pub struct Maze {
    size: usize,
    grid: Vec<Cell>, // row-major size*size
    player: Position,
}

impl Maze {
    /// Build a maze from any random source.
    pub fn generate<R: Rng>(
        size: usize,
        wall_chance: u8,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(GameError::InvalidMazeSize {
                size,
                min: MIN_SIZE,
                max: MAX_SIZE,
            });
        }
        if wall_chance > 100 {
            return Err(GameError::InvalidWallChance(wall_chance));
        }

        let mut grid = vec![Cell::Wall; size * size];
        for row in 1..size - 1 {
            for col in 1..size - 1 {
                grid[row * size + col] = if rng.gen_range(0..100u8) < wall_chance {
                    Cell::Wall
                } else {
                    Cell::Floor
                };
            }
        }

        // Corridors go down after the noise so nothing can overwrite them
        for row in 1..size - 1 {
            grid[row * size + 1] = Cell::Floor;
        }
        for col in 1..size - 1 {
            grid[(size - 2) * size + col] = Cell::Floor;
        }
        grid[START.row * size + START.col] = Cell::Floor;
        grid[(size - 2) * size + (size - 1)] = Cell::Exit;

        let walls = grid.iter().filter(|c| matches!(c, Cell::Wall)).count();
        debug!(
            "Generated {}x{} maze ({}% wall chance, {} walls)",
            size, size, wall_chance, walls
        );

        Ok(Maze {
            size,
            grid,
            player: START,
        })
    }

    /// Deterministic generation: the same seed always yields the same grid.
    pub fn from_seed(size: usize, wall_chance: u8, seed: u64) -> Result<Self, GameError> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::generate(size, wall_chance, &mut rng)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn player(&self) -> Position {
        self.player
    }

    pub fn exit(&self) -> Position {
        Position {
            row: self.size - 2,
            col: self.size - 1,
        }
    }

    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Cell at `(row, col)`, or `None` outside the grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.size && col < self.size {
            Some(self.grid[self.idx(row, col)])
        } else {
            None
        }
    }

    pub fn at_exit(&self) -> bool {
        self.cell(self.player.row, self.player.col) == Some(Cell::Exit)
    }

    /// Step the player one cell. Walls and the grid edge block silently.
    pub fn move_player(&mut self, dir: Direction) -> MoveOutcome {
        let Position { row, col } = self.player;
        let target = match dir {
            Direction::Up if row > 0 => Some((row - 1, col)),
            Direction::Down if row + 1 < self.size => Some((row + 1, col)),
            Direction::Left if col > 0 => Some((row, col - 1)),
            Direction::Right if col + 1 < self.size => Some((row, col + 1)),
            _ => None,
        };
        let Some((nr, nc)) = target else {
            debug!("Move {:?} from {},{} blocked by edge", dir, row, col);
            return MoveOutcome::Blocked;
        };
        let cell = self.grid[self.idx(nr, nc)];
        if !cell.is_passable() {
            debug!("Move {:?} from {},{} blocked by wall", dir, row, col);
            return MoveOutcome::Blocked;
        }
        self.player = Position { row: nr, col: nc };
        trace!("Player moved {:?} to {},{}", dir, nr, nc);
        if cell == Cell::Exit {
            MoveOutcome::ReachedExit
        } else {
            MoveOutcome::Moved
        }
    }

    /// Full grid, one row per line, each symbol followed by a space; `@` marks the player.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.size * (self.size * 2 + 1));
        for row in 0..self.size {
            for col in 0..self.size {
                if (Position { row, col }) == self.player {
                    out.push('@');
                } else {
                    out.push(self.grid[self.idx(row, col)].symbol());
                }
                out.push(' ');
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mk(size: usize, wall_chance: u8) -> Maze {
        Maze::from_seed(size, wall_chance, 7).expect("valid maze")
    }

    #[test]
    fn rejects_tiny_and_bad_chance() {
        assert!(matches!(
            Maze::from_seed(2, 25, 1),
            Err(GameError::InvalidMazeSize { size: 2, min: 3, .. })
        ));
        assert!(matches!(
            Maze::from_seed(10, 101, 1),
            Err(GameError::InvalidWallChance(101))
        ));
    }

    #[test]
    fn rejects_oversized_grid_before_allocating() {
        for size in [MAX_SIZE + 1, usize::MAX / 2, usize::MAX] {
            assert!(matches!(
                Maze::from_seed(size, 25, 1),
                Err(GameError::InvalidMazeSize { max: MAX_SIZE, .. })
            ));
        }
        let big = Maze::from_seed(MAX_SIZE, 25, 1).expect("largest allowed maze");
        assert_eq!(big.exit(), Position { row: MAX_SIZE - 2, col: MAX_SIZE - 1 });
    }

    #[test]
    fn same_seed_same_grid() {
        let a = Maze::from_seed(10, 25, 1234).unwrap();
        let b = Maze::from_seed(10, 25, 1234).unwrap();
        assert_eq!(a.grid, b.grid);
    }

    #[test]
    fn zero_chance_is_all_floor_inside() {
        let m = mk(6, 0);
        for row in 1..5 {
            for col in 1..5 {
                assert_eq!(m.cell(row, col), Some(Cell::Floor));
            }
        }
    }

    #[test]
    fn full_chance_leaves_only_corridors() {
        let m = mk(6, 100);
        assert_eq!(m.cell(2, 2), Some(Cell::Wall));
        assert_eq!(m.cell(3, 1), Some(Cell::Floor));
        assert_eq!(m.cell(4, 3), Some(Cell::Floor));
    }

    #[test]
    fn movement_boundaries_and_blocks() {
        let mut m = mk(5, 100);
        // (1,1): wall above, wall left
        assert_eq!(m.move_player(Direction::Up), MoveOutcome::Blocked);
        assert_eq!(m.move_player(Direction::Left), MoveOutcome::Blocked);
        // Interior (1,2) is a wall at 100%
        assert_eq!(m.move_player(Direction::Right), MoveOutcome::Blocked);
        assert_eq!(m.player(), START);
        assert_eq!(m.move_player(Direction::Down), MoveOutcome::Moved);
        assert_eq!(m.move_player(Direction::Down), MoveOutcome::Moved);
        assert_eq!(m.player(), Position { row: 3, col: 1 });
        // Bottom border
        assert_eq!(m.move_player(Direction::Down), MoveOutcome::Blocked);
        assert_eq!(m.move_player(Direction::Right), MoveOutcome::Moved);
        assert_eq!(m.move_player(Direction::Right), MoveOutcome::Moved);
        assert_eq!(m.move_player(Direction::Right), MoveOutcome::ReachedExit);
        assert_eq!(m.player(), m.exit());
        assert!(m.at_exit());
        // Exit sits on the right edge; nothing past it
        assert_eq!(m.move_player(Direction::Right), MoveOutcome::Blocked);
        assert_eq!(m.player(), m.exit());
    }

    #[test]
    fn stepping_off_exit_and_back_reports_again() {
        let mut m = mk(3, 25);
        assert_eq!(m.move_player(Direction::Right), MoveOutcome::ReachedExit);
        assert_eq!(m.move_player(Direction::Left), MoveOutcome::Moved);
        assert!(!m.at_exit());
        assert_eq!(m.move_player(Direction::Right), MoveOutcome::ReachedExit);
    }

    #[test]
    fn render_marks_player() {
        let m = mk(4, 100);
        let view = m.render();
        let lines: Vec<&str> = view.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "# # # # ");
        assert_eq!(lines[1], "# @ # # ");
        assert_eq!(lines[2], "# . . X ");
        assert_eq!(lines[3], "# # # # ");
        assert_eq!(view, m.to_string());
    }

    #[test]
    fn direction_keys() {
        assert_eq!(Direction::from_key('w'), Some(Direction::Up));
        assert_eq!(Direction::from_key('A'), Some(Direction::Left));
        assert_eq!(Direction::from_key('s'), Some(Direction::Down));
        assert_eq!(Direction::from_key('D'), Some(Direction::Right));
        assert_eq!(Direction::from_key('q'), None);
    }
}
