use crate::config;

/// Count-up animation for the stats band. Frames are driven from outside,
/// this only answers what to show after a given time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterAnimation {
    pub end: u32,
    pub duration_ms: u32,
}

impl CounterAnimation {
    pub fn new(end: u32) -> Self {
        Self { end, duration_ms: config::COUNTER_DURATION_MS }
    }

    pub fn value_at(&self, elapsed_ms: u32) -> u32 {
        if self.is_finished(elapsed_ms) {
            return self.end;
        }
        (u64::from(self.end) * u64::from(elapsed_ms) / u64::from(self.duration_ms)) as u32
    }

    /// True once the displayed value has arrived at `end`.
    pub fn reached(&self, value: u32) -> bool {
        value >= self.end
    }

    pub fn is_finished(&self, elapsed_ms: u32) -> bool {
        self.duration_ms == 0 || elapsed_ms >= self.duration_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero_and_lands_on_end() {
        let counter = CounterAnimation::new(300);
        assert_eq!(counter.value_at(0), 0);
        assert_eq!(counter.value_at(1000), 150);
        assert_eq!(counter.value_at(counter.duration_ms), 300);
        assert_eq!(counter.value_at(u32::MAX), 300);
    }

    #[test]
    fn values_never_decrease() {
        let counter = CounterAnimation::new(7);
        let mut last = 0;
        for elapsed in (0..=2100).step_by(config::COUNTER_FRAME_MS as usize) {
            let value = counter.value_at(elapsed);
            assert!(value >= last);
            last = value;
        }
        assert_eq!(last, 7);
    }

    #[test]
    fn zero_duration_jumps_to_end() {
        let counter = CounterAnimation { end: 42, duration_ms: 0 };
        assert_eq!(counter.value_at(0), 42);
    }

    #[test]
    fn reached_only_at_end() {
        let counter = CounterAnimation::new(500);
        let last_frame = counter.duration_ms - config::COUNTER_FRAME_MS;
        assert!(!counter.reached(counter.value_at(last_frame)));
        assert!(counter.reached(counter.value_at(counter.duration_ms)));
        assert!(CounterAnimation::new(0).reached(0));
    }
}
