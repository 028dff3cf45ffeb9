use crate::config::{SwipeThresholds, TOUCH_MOVE_SLOP_PX};
use crate::lightbox::Direction;

/// Tracks one touch from start to end and classifies it as a horizontal swipe.
#[derive(Clone, Copy, Debug)]
pub struct SwipeGesture {
    start: [f64; 2],
    start_ms: f64,
    active: bool,
    thresholds: SwipeThresholds,
}

impl SwipeGesture {
    pub fn new(thresholds: SwipeThresholds) -> Self {
        Self {
            start: [0.0, 0.0],
            start_ms: 0.0,
            active: false,
            thresholds,
        }
    }

    pub fn arm(&mut self, x: f64, y: f64, now_ms: f64) {
        self.start = [x, y];
        self.start_ms = now_ms;
        self.active = true;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Swipe right shows the previous photo, swipe left the next one.
    pub fn finish(&mut self, x: f64, y: f64, now_ms: f64) -> Option<Direction> {
        if !self.active {
            return None;
        }
        self.active = false;
        let dx = x - self.start[0];
        let dy = y - self.start[1];
        let elapsed = now_ms - self.start_ms;
        if elapsed > self.thresholds.max_duration_ms
            || dx.abs() < self.thresholds.min_distance
            || dy.abs() > self.thresholds.max_vertical
        {
            return None;
        }
        if dx > 0.0 {
            Some(Direction::Prev)
        } else {
            Some(Direction::Next)
        }
    }

    /// Whether a move at `(x, y)` is mostly vertical and should not scroll
    /// the page behind the viewer.
    pub fn should_block_move(&self, x: f64, y: f64) -> bool {
        let ax = (x - self.start[0]).abs();
        let ay = (y - self.start[1]).abs();
        ay > ax && ay > TOUCH_MOVE_SLOP_PX
    }
}

impl Default for SwipeGesture {
    fn default() -> Self {
        Self::new(SwipeThresholds::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quick_horizontal_swipe_steps() {
        let mut gesture = SwipeGesture::default();
        gesture.arm(200.0, 300.0, 1000.0);
        assert_eq!(gesture.finish(140.0, 320.0, 1300.0), Some(Direction::Next));
        gesture.arm(100.0, 300.0, 0.0);
        assert_eq!(gesture.finish(140.0, 300.0, 800.0), Some(Direction::Prev));
    }

    #[test]
    fn slow_short_or_vertical_swipes_are_ignored() {
        let mut gesture = SwipeGesture::default();
        gesture.arm(0.0, 0.0, 0.0);
        assert_eq!(gesture.finish(100.0, 0.0, 801.0), None);
        gesture.arm(0.0, 0.0, 0.0);
        assert_eq!(gesture.finish(39.0, 0.0, 10.0), None);
        gesture.arm(0.0, 0.0, 0.0);
        assert_eq!(gesture.finish(100.0, 61.0, 10.0), None);
    }

    #[test]
    fn finish_without_arm_is_ignored() {
        let mut gesture = SwipeGesture::default();
        assert_eq!(gesture.finish(100.0, 0.0, 10.0), None);
        gesture.arm(0.0, 0.0, 0.0);
        assert!(gesture.finish(-100.0, 0.0, 10.0).is_some());
        assert!(!gesture.is_active());
    }

    #[test]
    fn vertical_drag_is_blocked() {
        let mut gesture = SwipeGesture::default();
        gesture.arm(0.0, 0.0, 0.0);
        assert!(gesture.should_block_move(2.0, 20.0));
        assert!(!gesture.should_block_move(30.0, 20.0));
        assert!(!gesture.should_block_move(0.0, 8.0));
    }
}
