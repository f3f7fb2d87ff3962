use log::info;
use rand::Rng;
use std::time::{Duration, Instant};

use crate::config::{GAME_OVER_HOLD, tick_interval};
use crate::session::{Session, Tick};

/// What the event loop should do after a wake-up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Nothing changed; sleep until the deadline.
    Wait(Instant),
    /// The session advanced; draw a frame, then sleep until the deadline.
    Redraw(Instant),
    Exit,
}

/// Fixed-rate tick clock plus the hold on the final frame.
pub struct Pacer {
    interval: Duration,
    hold: Duration,
    next_tick: Instant,
    over_since: Option<Instant>,
}

impl Pacer {
    pub fn new(start: Instant) -> Self {
        Self::with_timing(start, tick_interval(), GAME_OVER_HOLD)
    }

    pub fn with_timing(start: Instant, interval: Duration, hold: Duration) -> Self {
        Self { interval, hold, next_tick: start + interval, over_since: None }
    }

    pub fn next_tick(&self) -> Instant {
        self.next_tick
    }

    /// Ticks the session if its deadline has passed. After a collision the
    /// session is never ticked again and `Exit` comes once the hold runs out.
    pub fn update<R: Rng>(&mut self, now: Instant, session: &mut Session<R>) -> Action {
        if let Some(since) = self.over_since {
            let until = since + self.hold;
            return if now >= until { Action::Exit } else { Action::Wait(until) };
        }
        if now < self.next_tick {
            return Action::Wait(self.next_tick);
        }

        if session.tick() == Tick::Collided {
            info!("game over, score {}", session.score());
            self.over_since = Some(now);
            return Action::Redraw(now + self.hold);
        }
        self.next_tick = now + self.interval;
        Action::Redraw(self.next_tick)
    }
}
