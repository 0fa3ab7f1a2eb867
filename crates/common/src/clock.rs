//! Simulated playback clock.
//!
//! Real players deliver "time update" events a few times per second while
//! media plays. `PlaybackTicks` reproduces such a stream over a fixed range
//! so a track can be replayed without a player attached.

/// Iterator over playback positions (seconds) sampled at a fixed rate.
///
/// Positions are computed as `from + n * interval` rather than accumulated,
/// so long replays do not drift.
#[derive(Debug, Clone)]
pub struct PlaybackTicks {
    from_secs: f64,
    to_secs: f64,
    interval_secs: f64,
    next_tick: u64,
}

impl PlaybackTicks {
    /// Ticks from `from_secs` up to and including `to_secs` at `rate_hz`.
    ///
    /// A zero rate is treated as 1 Hz.
    pub fn new(from_secs: f64, to_secs: f64, rate_hz: u32) -> Self {
        Self {
            from_secs,
            to_secs,
            interval_secs: 1.0 / rate_hz.max(1) as f64,
            next_tick: 0,
        }
    }

    /// Seconds between two consecutive ticks.
    pub fn interval_secs(&self) -> f64 {
        self.interval_secs
    }
}

impl Iterator for PlaybackTicks {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let position = self.from_secs + self.next_tick as f64 * self.interval_secs;
        // Half a tick of slack so `to_secs` itself is emitted despite rounding.
        let limit = self.to_secs + self.interval_secs * 0.5;
        if position.is_nan() || position > limit {
            return None;
        }
        self.next_tick += 1;
        Some(position.min(self.to_secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticks_cover_range_inclusive() {
        let ticks: Vec<f64> = PlaybackTicks::new(0.0, 1.0, 4).collect();
        assert_eq!(ticks, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_ticks_do_not_accumulate_error() {
        let last = PlaybackTicks::new(0.0, 3600.0, 10).last().unwrap();
        assert!((last - 3600.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_when_range_inverted() {
        assert_eq!(PlaybackTicks::new(5.0, 1.0, 4).count(), 0);
    }

    #[test]
    fn test_zero_rate_falls_back_to_one_hz() {
        let ticks = PlaybackTicks::new(0.0, 2.0, 0);
        assert!((ticks.interval_secs() - 1.0).abs() < 1e-12);
        assert_eq!(ticks.count(), 3);
    }
}
