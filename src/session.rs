use log::debug;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::food::Food;
use crate::grid::{Dir, Grid};
use crate::snake::{Snake, Step};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    Moved,
    Ate,
    Collided,
}

/// Everything one game owns: board, snake, food, score and the dice.
pub struct Session<R = SmallRng> {
    grid: Grid,
    snake: Snake,
    food: Food,
    score: u32,
    over: bool,
    rng: R,
}

impl Session<SmallRng> {
    pub fn new(grid: Grid) -> Self {
        Self::with_rng(grid, SmallRng::from_entropy())
    }
}

impl<R: Rng> Session<R> {
    pub fn with_rng(grid: Grid, mut rng: R) -> Self {
        let snake = Snake::new(&grid, &mut rng);
        let food = Food::new(&grid, &mut rng);
        Self { grid, snake, food, score: 0, over: false, rng }
    }

    pub fn from_parts(grid: Grid, snake: Snake, food: Food, rng: R) -> Self {
        Self { grid, snake, food, score: 0, over: false, rng }
    }

    /// Moves the snake once and feeds it if the new head sits on the food.
    /// Once a tick has collided every later tick reports `Tick::Collided`
    /// without moving, until `restart`.
    pub fn tick(&mut self) -> Tick {
        if self.over || self.snake.step(&self.grid) == Step::Collided {
            self.over = true;
            return Tick::Collided;
        }
        if self.snake.head() != self.food.position() {
            return Tick::Moved;
        }

        self.snake.grow();
        self.score += 1;
        self.food.relocate(&self.grid, &mut self.rng);
        debug!(
            "ate at {:?}, score {}, food now at {:?}",
            self.snake.head(),
            self.score,
            self.food.position()
        );
        Tick::Ate
    }

    /// Starts over on the same board. The shipped loop exits on game over
    /// instead; this backs a play-again flow.
    pub fn restart(&mut self) {
        self.snake.reset(&self.grid, &mut self.rng);
        self.food.relocate(&self.grid, &mut self.rng);
        self.score = 0;
        self.over = false;
    }
}

impl<R> Session<R> {
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn steer(&mut self, dir: Dir) {
        self.snake.set_direction(dir);
    }
}
