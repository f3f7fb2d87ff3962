use crate::config::{BANNER_SCALE, BODY, BODY_INSET, GRASS, HEAD, INSET, Rgba, SCORE_SCALE, TEXT};
use crate::font;
use crate::grid::Cell;
use crate::session::Session;

/// RGBA frame buffer with clipped drawing.
pub struct Canvas<'a> {
    pixels: &'a mut [[u8; 4]],
    width: u32,
    height: u32,
}

impl<'a> Canvas<'a> {
    /// Wraps a `pixels` frame. `frame` must hold `width * height` RGBA pixels.
    pub fn new(frame: &'a mut [u8], width: u32, height: u32) -> Self {
        let pixels: &mut [[u8; 4]] = bytemuck::cast_slice_mut(frame);
        debug_assert_eq!(pixels.len(), (width * height) as usize);
        Self { pixels, width, height }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self, color: Rgba) {
        self.pixels.fill(color);
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get((y * self.width + x) as usize).copied()
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Rgba) {
        let x0 = x.clamp(0, self.width as i32) as u32;
        let y0 = y.clamp(0, self.height as i32) as u32;
        let x1 = (x + w as i32).clamp(0, self.width as i32) as u32;
        let y1 = (y + h as i32).clamp(0, self.height as i32) as u32;
        for py in y0..y1 {
            let row = (py * self.width) as usize;
            self.pixels[row + x0 as usize..row + x1 as usize].fill(color);
        }
    }

    pub fn fill_cell(&mut self, cell: Cell, size: u32, color: Rgba) {
        self.fill_rect(cell.x, cell.y, size, size, color);
    }
}

/// Grass, snake, food and the running score.
pub fn draw_session<R>(canvas: &mut Canvas, session: &Session<R>) {
    let grid = session.grid();
    let size = grid.cell_size() as u32;

    canvas.clear(GRASS);
    for cell in grid.cells() {
        canvas.fill_cell(cell, size, GRASS);
    }

    for (i, seg) in session.snake().segments().enumerate() {
        if i == 0 {
            canvas.fill_cell(seg, size, HEAD);
        } else {
            canvas.fill_cell(seg, size, BODY);
            let inset = INSET as i32;
            let inner = size.saturating_sub(2 * INSET);
            canvas.fill_rect(seg.x + inset, seg.y + inset, inner, inner, BODY_INSET);
        }
    }

    let food = session.food();
    canvas.fill_cell(food.position(), size, food.color());

    draw_score(canvas, session.score());
}

/// The whole frame; a finished session also gets the game-over overlay.
pub fn draw_frame<R>(canvas: &mut Canvas, session: &Session<R>) {
    draw_session(canvas, session);
    if session.is_over() {
        draw_game_over(canvas, session.score());
    }
}

pub fn draw_score(canvas: &mut Canvas, score: u32) {
    font::draw_text(canvas, &format!("Score: {score}"), 10, 10, SCORE_SCALE, TEXT);
}

/// Overlay for the final frame, drawn on top of `draw_session`.
pub fn draw_game_over(canvas: &mut Canvas, score: u32) {
    let third = canvas.height() as i32 / 3;
    let half = canvas.height() as i32 / 2;
    draw_centered(canvas, "Game Over!", third);
    draw_centered(canvas, &format!("Your Score: {score}"), half);
}

fn draw_centered(canvas: &mut Canvas, text: &str, y: i32) {
    let w = font::text_width(text, BANNER_SCALE) as i32;
    let x = canvas.width() as i32 / 2 - w / 2;
    font::draw_text(canvas, text, x, y, BANNER_SCALE, TEXT);
}
