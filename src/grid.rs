use rand::Rng;
use rand::seq::SliceRandom;

use crate::config::{CELL_SIZE, HEIGHT, WIDTH};

/// Top-left pixel corner of one board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl Dir {
    pub const ALL: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

    pub fn offset(self) -> (i32, i32) {
        match self {
            Dir::Up => (0, -1),
            Dir::Down => (0, 1),
            Dir::Left => (-1, 0),
            Dir::Right => (1, 0),
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        *Self::ALL.choose(rng).unwrap_or(&Dir::Right)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Toroidal board measured in pixels, split into square cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    cell: i32,
}

impl Grid {
    pub fn new(width: u32, height: u32, cell: u32) -> Self {
        debug_assert!(cell > 0 && width % cell == 0 && height % cell == 0);
        Self { width: width as i32, height: height as i32, cell: cell as i32 }
    }

    pub fn standard() -> Self {
        Self::new(WIDTH, HEIGHT, CELL_SIZE)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn cell_size(&self) -> i32 {
        self.cell
    }

    pub fn columns(&self) -> i32 {
        self.width / self.cell
    }

    pub fn rows(&self) -> i32 {
        self.height / self.cell
    }

    pub fn center(&self) -> Cell {
        Cell::new(self.width / 2, self.height / 2)
    }

    pub fn wrap(&self, coord: i32, axis: Axis) -> i32 {
        match axis {
            Axis::X => coord.rem_euclid(self.width),
            Axis::Y => coord.rem_euclid(self.height),
        }
    }

    /// The cell one step away from `from` in `dir`, wrapping at the edges.
    pub fn offset(&self, from: Cell, dir: Dir) -> Cell {
        let (dx, dy) = dir.offset();
        Cell::new(
            self.wrap(from.x + dx * self.cell, Axis::X),
            self.wrap(from.y + dy * self.cell, Axis::Y),
        )
    }

    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Cell {
        Cell::new(
            rng.gen_range(0..self.columns()) * self.cell,
            rng.gen_range(0..self.rows()) * self.cell,
        )
    }

    /// Every cell on the board, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + use<> {
        let (cols, rows, cell) = (self.columns(), self.rows(), self.cell);
        (0..rows).flat_map(move |r| (0..cols).map(move |c| Cell::new(c * cell, r * cell)))
    }
}
