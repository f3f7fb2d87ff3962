use rand::Rng;
use std::collections::VecDeque;

use crate::grid::{Cell, Dir, Grid};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Alive,
    Collided,
}

pub struct Snake {
    body: VecDeque<Cell>,
    dir: Dir,
    target_len: usize,
}

impl Snake {
    /// One segment at the board center, facing a random way.
    pub fn new<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Self {
        Self { body: VecDeque::from([grid.center()]), dir: Dir::random(rng), target_len: 1 }
    }

    /// Builds a snake from explicit cells, head first. The target length is the
    /// number of cells given. `None` if there is no head.
    pub fn with_body(cells: impl IntoIterator<Item = Cell>, dir: Dir) -> Option<Self> {
        let body: VecDeque<Cell> = cells.into_iter().collect();
        if body.is_empty() {
            return None;
        }
        let target_len = body.len();
        Some(Self { body, dir, target_len })
    }

    pub fn reset<R: Rng + ?Sized>(&mut self, grid: &Grid, rng: &mut R) {
        *self = Self::new(grid, rng);
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn dir(&self) -> Dir {
        self.dir
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn target_len(&self) -> usize {
        self.target_len
    }

    pub fn segments(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.body.iter().any(|&s| s == cell)
    }

    /// Reversing straight into the neck is allowed; it ends the game a few
    /// ticks later like any other self-collision.
    pub fn set_direction(&mut self, dir: Dir) {
        self.dir = dir;
    }

    pub fn grow(&mut self) {
        self.target_len += 1;
    }

    /// Advances one cell. The two cells nearest the head are never checked, so
    /// the segment being vacated can't count as a hit.
    pub fn step(&mut self, grid: &Grid) -> Step {
        let new_head = grid.offset(self.head(), self.dir);
        if self.body.iter().skip(2).any(|&s| s == new_head) {
            return Step::Collided;
        }

        self.body.push_front(new_head);
        while self.body.len() > self.target_len {
            self.body.pop_back();
        }
        Step::Alive
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn cells(coords: &[(i32, i32)]) -> Vec<Cell> {
        coords.iter().map(|&(x, y)| Cell::new(x, y)).collect()
    }

    #[test]
    fn starts_as_a_single_segment_at_center() {
        let g = Grid::standard();
        let mut rng = SmallRng::seed_from_u64(3);
        let s = Snake::new(&g, &mut rng);
        assert_eq!(s.head(), Cell::new(300, 200));
        assert_eq!(s.len(), 1);
        assert_eq!(s.target_len(), 1);
    }

    #[test]
    fn initial_direction_is_random() {
        let g = Grid::standard();
        let mut rng = SmallRng::seed_from_u64(11);
        let mut seen = Vec::new();
        for _ in 0..200 {
            let d = Snake::new(&g, &mut rng).dir();
            if !seen.contains(&d) {
                seen.push(d);
            }
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn needs_a_head() {
        assert!(Snake::with_body([], Dir::Up).is_none());
        let s = Snake::with_body([Cell::new(0, 0)], Dir::Up).unwrap();
        assert!(!s.is_empty());
    }

    #[test]
    fn moves_right_one_cell() {
        let g = Grid::standard();
        let mut s = Snake::with_body([Cell::new(300, 200)], Dir::Right).unwrap();
        assert_eq!(s.step(&g), Step::Alive);
        assert_eq!(s.head(), Cell::new(320, 200));
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn free_cell_keeps_it_alive_and_moves_head() {
        let g = Grid::standard();
        let body = cells(&[(100, 100), (80, 100), (60, 100), (40, 100)]);
        for dir in [Dir::Up, Dir::Down, Dir::Right] {
            let mut s = Snake::with_body(body.clone(), dir).unwrap();
            let expected = g.offset(s.head(), dir);
            assert_eq!(s.step(&g), Step::Alive);
            assert_eq!(s.head(), expected);
            assert_eq!(s.len(), 4);
        }
    }

    #[test]
    fn hitting_the_third_segment_collides_without_mutation() {
        let g = Grid::standard();
        // Head at (120,100) going down, body curls around so (120,120) is segment 3.
        let body = cells(&[(120, 100), (100, 100), (100, 120), (120, 120)]);
        let mut s = Snake::with_body(body.clone(), Dir::Down).unwrap();
        assert_eq!(s.step(&g), Step::Collided);
        assert_eq!(s.segments().collect::<Vec<_>>(), body);
    }

    #[test]
    fn tight_loop_of_four_collides() {
        let g = Grid::standard();
        let body = cells(&[(100, 100), (80, 100), (60, 100), (40, 100)]);
        let mut s = Snake::with_body(body, Dir::Right).unwrap();
        s.grow();
        assert_eq!(s.step(&g), Step::Alive);
        s.set_direction(Dir::Down);
        assert_eq!(s.step(&g), Step::Alive);
        s.set_direction(Dir::Left);
        assert_eq!(s.step(&g), Step::Alive);
        s.set_direction(Dir::Up);
        assert_eq!(s.step(&g), Step::Collided);
    }

    #[test]
    fn neck_is_excluded_from_the_check() {
        let g = Grid::standard();
        let mut s = Snake::with_body(cells(&[(100, 100), (80, 100)]), Dir::Left).unwrap();
        // Reversing onto index 1 is not a collision.
        assert_eq!(s.step(&g), Step::Alive);
        assert_eq!(s.head(), Cell::new(80, 100));
    }

    #[test]
    fn reversal_into_a_longer_body_ends_the_game() {
        let g = Grid::standard();
        let body = cells(&[(100, 100), (80, 100), (60, 100), (40, 100)]);
        let mut s = Snake::with_body(body, Dir::Right).unwrap();
        s.set_direction(Dir::Left);
        assert_eq!(s.step(&g), Step::Alive);
        assert_eq!(s.step(&g), Step::Collided);
    }

    #[test]
    fn growth_converges_within_n_ticks() {
        let g = Grid::standard();
        let mut s = Snake::with_body([Cell::new(300, 200)], Dir::Right).unwrap();
        let n = 5;
        for _ in 0..n {
            s.grow();
        }
        for _ in 0..n {
            assert_eq!(s.step(&g), Step::Alive);
            assert!(s.len() <= s.target_len());
        }
        assert_eq!(s.len(), 1 + n);
        s.step(&g);
        assert_eq!(s.len(), 1 + n);
    }

    #[test]
    fn wraps_through_the_right_edge() {
        let g = Grid::standard();
        let mut s = Snake::with_body([Cell::new(580, 0)], Dir::Right).unwrap();
        s.step(&g);
        assert_eq!(s.head(), Cell::new(0, 0));
        s.set_direction(Dir::Up);
        s.step(&g);
        assert_eq!(s.head(), Cell::new(0, 380));
    }

    #[test]
    fn reset_returns_to_one_segment() {
        let g = Grid::standard();
        let mut rng = SmallRng::seed_from_u64(5);
        let body = cells(&[(0, 0), (20, 0), (40, 0)]);
        let mut s = Snake::with_body(body, Dir::Left).unwrap();
        s.grow();
        s.reset(&g, &mut rng);
        assert_eq!(s.len(), 1);
        assert_eq!(s.target_len(), 1);
        assert_eq!(s.head(), g.center());
    }
}
