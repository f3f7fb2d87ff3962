use std::time::Duration;

pub const WIDTH: u32 = 600;
pub const HEIGHT: u32 = 400;
pub const CELL_SIZE: u32 = 20;

pub const TICKS_PER_SECOND: u32 = 10;
/// How long the final frame stays up before the process exits.
pub const GAME_OVER_HOLD: Duration = Duration::from_secs(2);

pub const TITLE: &str = "Snake";

/// Process exit code when a frame can't be presented.
pub const RENDER_FAILURE_CODE: i32 = 1;

pub type Rgba = [u8; 4];

pub const GRASS: Rgba = [0, 128, 0, 255];
pub const HEAD: Rgba = [0, 255, 0, 255];
pub const BODY: Rgba = [0, 128, 0, 255];
pub const BODY_INSET: Rgba = [0, 0, 0, 255];
pub const FOOD: Rgba = [255, 255, 255, 255];
pub const TEXT: Rgba = [255, 255, 255, 255];

/// Margin between a body segment's edge and its hollow center.
pub const INSET: u32 = 4;

pub const SCORE_SCALE: u32 = 3;
pub const BANNER_SCALE: u32 = 5;

pub fn tick_interval() -> Duration {
    Duration::from_secs(1) / TICKS_PER_SECOND
}
