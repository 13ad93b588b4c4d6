//! Time management utilities

use std::time::Instant;

/// High-precision timer for frame timing
pub struct Timer {
    start: Instant,
    last_frame: Instant,
    delta_time: f32,
    total_time: f32,
    frame_count: u64,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Create a new timer
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_frame: now,
            delta_time: 0.0,
            total_time: 0.0,
            frame_count: 0,
        }
    }

    /// Update the timer (should be called once per frame)
    pub fn update(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.delta_time = elapsed.as_secs_f32();
        self.total_time += self.delta_time;
        self.last_frame = now;
        self.frame_count += 1;
    }

    /// Milliseconds from timer creation to the last update, as fed to [`FrameClock`]
    ///
    /// Measured from the creation instant, independent of the accumulated `total_time`.
    pub fn timestamp_ms(&self) -> f64 {
        self.last_frame.duration_since(self.start).as_secs_f64() * 1000.0
    }

    /// Get the time since the last frame in seconds
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Get the total elapsed time since timer creation
    pub fn total_time(&self) -> f32 {
        self.total_time
    }

    /// Get the current frame count
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get the average FPS since timer creation
    #[allow(clippy::cast_precision_loss)]
    pub fn average_fps(&self) -> f32 {
        if self.total_time > 0.0 {
            self.frame_count as f32 / self.total_time
        } else {
            0.0
        }
    }
}

/// Converts animation-frame timestamps into per-frame deltas.
///
/// Timestamps are milliseconds, deltas are seconds. The first frame and any
/// frame whose timestamp goes backwards produce a delta of zero, so systems
/// never see a negative step.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_timestamp_ms: Option<f64>,
    frame_count: u64,
}

impl FrameClock {
    /// Create a clock that has not seen any frame yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a frame at `timestamp_ms` and return the delta in seconds
    #[allow(clippy::cast_possible_truncation)]
    pub fn advance(&mut self, timestamp_ms: f64) -> f32 {
        let delta_ms = match self.last_timestamp_ms {
            None => 0.0,
            Some(last) if timestamp_ms < last => {
                log::warn!(
                    "Frame timestamp went backwards ({last:.3}ms -> {timestamp_ms:.3}ms), using zero delta"
                );
                0.0
            }
            Some(last) => timestamp_ms - last,
        };

        self.last_timestamp_ms = Some(timestamp_ms);
        self.frame_count += 1;
        (delta_ms / 1000.0) as f32
    }

    /// Timestamp of the most recent frame, if any
    pub fn last_timestamp_ms(&self) -> Option<f64> {
        self.last_timestamp_ms
    }

    /// Number of frames recorded so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_first_frame_has_zero_delta() {
        let mut clock = FrameClock::new();
        assert_relative_eq!(clock.advance(1234.0), 0.0);
        assert_eq!(clock.frame_count(), 1);
        assert_eq!(clock.last_timestamp_ms(), Some(1234.0));
    }

    #[test]
    fn test_delta_in_seconds() {
        let mut clock = FrameClock::new();
        clock.advance(0.0);
        assert_relative_eq!(clock.advance(16.0), 0.016, epsilon = 1e-6);
        assert_relative_eq!(clock.advance(116.0), 0.1, epsilon = 1e-6);
    }

    #[test]
    fn test_backwards_timestamp_clamps_to_zero() {
        let mut clock = FrameClock::new();
        clock.advance(500.0);
        assert_relative_eq!(clock.advance(400.0), 0.0);
        // The next delta is measured from the rewound timestamp
        assert_relative_eq!(clock.advance(450.0), 0.05, epsilon = 1e-6);
    }

    #[test]
    fn test_timer_counts_frames() {
        let mut timer = Timer::new();
        timer.update();
        timer.update();

        assert_eq!(timer.frame_count(), 2);
        assert!(timer.delta_time() >= 0.0);
        assert!(timer.total_time() >= timer.delta_time());
        assert!(timer.timestamp_ms() >= 0.0);
    }

    #[test]
    fn test_timer_timestamp_tracks_wall_clock() {
        let mut timer = Timer::new();
        timer.update();
        let first = timer.timestamp_ms();

        std::thread::sleep(std::time::Duration::from_millis(5));
        timer.update();

        assert!(timer.timestamp_ms() - first >= 5.0);
    }

    #[test]
    fn test_delta_keeps_resolution_on_long_runs() {
        let hundred_hours_ms = 100.0 * 3600.0 * 1000.0;
        let mut clock = FrameClock::new();
        clock.advance(hundred_hours_ms);
        assert_relative_eq!(clock.advance(hundred_hours_ms + 16.0), 0.016, epsilon = 1e-6);
        assert_relative_eq!(clock.advance(hundred_hours_ms + 16.5), 0.0005, epsilon = 1e-6);
    }
}
