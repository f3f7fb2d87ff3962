//! 5x7 bitmap font for the score and game-over labels. Lowercase letters are
//! drawn as capitals.

use crate::config::Rgba;
use crate::render::Canvas;

const GLYPH_W: u32 = 5;

fn glyph(ch: char) -> Option<[u8; 7]> {
    Some(match ch.to_ascii_uppercase() {
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'E' => [0b11111, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000, 0b11111],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01110],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'Y' => [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11110, 0b00001, 0b00001, 0b01110, 0b00001, 0b00001, 0b11110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        ':' => [0b00000, 0b00100, 0b00000, 0b00000, 0b00100, 0b00000, 0b00000],
        '!' => [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100],
        _ => return None,
    })
}

/// Horizontal distance from one glyph origin to the next.
pub fn advance(scale: u32) -> u32 {
    (GLYPH_W + 1) * scale
}

/// Width of `text` without the trailing gap after the last glyph.
pub fn text_width(text: &str, scale: u32) -> u32 {
    let n = text.chars().count() as u32;
    (n * advance(scale)).saturating_sub(scale)
}

fn draw_char(canvas: &mut Canvas, ch: char, x: i32, y: i32, scale: u32, color: Rgba) {
    let Some(rows) = glyph(ch) else { return };
    for (ry, row) in rows.iter().enumerate() {
        for rx in 0..GLYPH_W {
            if (row >> (GLYPH_W - 1 - rx)) & 1 == 1 {
                let px = x + (rx * scale) as i32;
                let py = y + (ry as u32 * scale) as i32;
                canvas.fill_rect(px, py, scale, scale, color);
            }
        }
    }
}

/// Draws `text` with its top-left corner at (`x`, `y`). Characters without a
/// glyph (including space) leave a blank cell.
pub fn draw_text(canvas: &mut Canvas, text: &str, x: i32, y: i32, scale: u32, color: Rgba) {
    let mut cx = x;
    for ch in text.chars() {
        draw_char(canvas, ch, cx, y, scale, color);
        cx += advance(scale) as i32;
    }
}
