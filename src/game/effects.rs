use std::time::Duration;

use crate::game::{Coord, Direction};

/// Visual transition kinds a cell can play.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FxKind {
    /// Tile scales up from nothing; the symbol is already set when it starts.
    Grow,
    /// Tile scales down to nothing; the cell is cleared on completion.
    Shrink,
    /// Tile translates one cell toward a neighbor; contents move afterward.
    Slide(Direction),
}

/// One in-flight transition. The board advances `elapsed`; the renderer reads
/// `progress` to draw the intermediate frame.
#[derive(Clone, Debug)]
pub struct Fx {
    pub coord: Coord,
    pub kind: FxKind,
    pub delay: Duration,
    pub duration: Duration,
    pub elapsed: Duration,
}

impl Fx {
    pub fn new(coord: Coord, kind: FxKind, delay: Duration, duration: Duration) -> Self {
        Self {
            coord,
            kind,
            delay,
            duration,
            elapsed: Duration::ZERO,
        }
    }

    /// 0.0 until the start delay has passed, then linear up to 1.0.
    pub fn progress(&self) -> f32 {
        if self.elapsed <= self.delay {
            return 0.0;
        }
        if self.duration.is_zero() {
            return 1.0;
        }
        ((self.elapsed - self.delay).as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    pub fn done(&self) -> bool {
        self.elapsed >= self.delay + self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_waits_for_delay() {
        let mut fx = Fx::new(
            Coord::new(0, 0),
            FxKind::Grow,
            Duration::from_millis(100),
            Duration::from_millis(200),
        );
        fx.elapsed = Duration::from_millis(50);
        assert_eq!(fx.progress(), 0.0);
        assert!(!fx.done());
        fx.elapsed = Duration::from_millis(200);
        assert!((fx.progress() - 0.5).abs() < 1e-6);
        fx.elapsed = Duration::from_millis(300);
        assert_eq!(fx.progress(), 1.0);
        assert!(fx.done());
    }

    #[test]
    fn zero_duration_completes_immediately() {
        let mut fx = Fx::new(Coord::new(1, 1), FxKind::Shrink, Duration::ZERO, Duration::ZERO);
        assert!(fx.done());
        fx.elapsed = Duration::from_millis(1);
        assert_eq!(fx.progress(), 1.0);
    }
}
