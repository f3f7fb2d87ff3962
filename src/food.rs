use rand::Rng;

use crate::config::{FOOD, Rgba};
use crate::grid::{Cell, Grid};

pub struct Food {
    pos: Cell,
    color: Rgba,
}

impl Food {
    pub fn new<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Self {
        let mut food = Self::at(Cell::new(0, 0));
        food.relocate(grid, rng);
        food
    }

    pub fn at(pos: Cell) -> Self {
        Self { pos, color: FOOD }
    }

    pub fn position(&self) -> Cell {
        self.pos
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    /// Picks any cell on the board. The snake's body is not excluded, so food
    /// may land underneath it.
    pub fn relocate<R: Rng + ?Sized>(&mut self, grid: &Grid, rng: &mut R) {
        self.pos = grid.random_cell(rng);
    }
}
