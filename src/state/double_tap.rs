// Double-tap detection from touch-end timestamps

#[derive(Debug, Clone, Copy, Default)]
pub struct DoubleTap {
    last_tap_ms: Option<f64>,
}

impl DoubleTap {
    /// Records a tap at `now_ms`. Returns true when it lands within
    /// `window_ms` of the previous tap.
    pub fn register(&mut self, now_ms: f64, window_ms: f64) -> bool {
        let fired = self
            .last_tap_ms
            .is_some_and(|last| now_ms >= last && now_ms - last < window_ms);
        self.last_tap_ms = Some(now_ms);
        fired
    }

    pub fn clear(&mut self) {
        self.last_tap_ms = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_inside_window() {
        let mut dt = DoubleTap::default();
        assert!(!dt.register(1000.0, 300.0));
        assert!(dt.register(1150.0, 300.0));
    }

    #[test]
    fn slow_taps_do_not_fire() {
        let mut dt = DoubleTap::default();
        assert!(!dt.register(1000.0, 300.0));
        assert!(!dt.register(1300.0, 300.0));
        // the late tap becomes the new first tap
        assert!(dt.register(1400.0, 300.0));
    }

    #[test]
    fn each_tap_pairs_with_the_previous_one() {
        let mut dt = DoubleTap::default();
        assert!(!dt.register(0.0, 300.0));
        assert!(dt.register(100.0, 300.0));
        assert!(dt.register(200.0, 300.0));
    }

    #[test]
    fn clock_going_backwards_does_not_fire() {
        let mut dt = DoubleTap::default();
        dt.register(500.0, 300.0);
        assert!(!dt.register(400.0, 300.0));
    }
}
