//! Repeating rotation animation for the refresh spinner.

use std::time::{Duration, Instant};

/// Default rotation period: one full turn per second.
pub const DEFAULT_SPIN_PERIOD: Duration = Duration::from_secs(1);

/// An infinitely repeating 360 degree rotation.
///
/// The animation is clock-driven: it stores only its start instant, and
/// hosts sample [`angle_at`](SpinAnimation::angle_at) from their paint
/// loop. Stopping removes the animation entirely; a stopped spinner
/// reports angle zero.
#[derive(Debug, Clone)]
pub struct SpinAnimation {
    period: Duration,
    started: Option<Instant>,
}

impl Default for SpinAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl SpinAnimation {
    /// Creates a stopped animation with the default period.
    pub fn new() -> Self {
        Self {
            period: DEFAULT_SPIN_PERIOD,
            started: None,
        }
    }

    /// Creates a stopped animation with a custom period.
    pub fn with_period(period: Duration) -> Self {
        Self {
            period,
            started: None,
        }
    }

    /// The rotation period.
    #[inline]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Whether the animation is running.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.started.is_some()
    }

    /// The instant the animation started, if running.
    #[inline]
    pub fn started_at(&self) -> Option<Instant> {
        self.started
    }

    /// Starts the rotation.
    ///
    /// Idempotent: starting a running animation keeps it running with its
    /// original phase.
    pub fn start(&mut self) {
        if self.started.is_none() {
            self.started = Some(Instant::now());
        }
    }

    /// Stops the rotation and resets the angle to zero.
    ///
    /// Idempotent: stopping a stopped animation does nothing.
    pub fn stop(&mut self) {
        self.started = None;
    }

    /// The rotation angle in radians at the given instant, in `0..TAU`.
    ///
    /// Returns `0.0` while stopped, or for instants before the start.
    pub fn angle_at(&self, at: Instant) -> f32 {
        let Some(started) = self.started else {
            return 0.0;
        };
        let elapsed = at.checked_duration_since(started).unwrap_or_default();
        if self.period.is_zero() {
            return 0.0;
        }
        let turns = elapsed.as_secs_f32() / self.period.as_secs_f32();
        turns.fract() * std::f32::consts::TAU
    }

    /// The rotation angle right now.
    pub fn current_angle(&self) -> f32 {
        self.angle_at(Instant::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn test_stopped_angle_is_zero() {
        let spin = SpinAnimation::new();
        assert!(!spin.is_running());
        assert_eq!(spin.current_angle(), 0.0);
    }

    #[test]
    fn test_angle_progression() {
        let mut spin = SpinAnimation::new();
        spin.start();
        let t0 = spin.started_at().unwrap();

        assert!(spin.angle_at(t0).abs() < EPS);
        let quarter = spin.angle_at(t0 + Duration::from_millis(250));
        assert!((quarter - std::f32::consts::FRAC_PI_2).abs() < EPS);
        let half = spin.angle_at(t0 + Duration::from_millis(500));
        assert!((half - std::f32::consts::PI).abs() < EPS);
    }

    #[test]
    fn test_angle_wraps_every_period() {
        let mut spin = SpinAnimation::new();
        spin.start();
        let t0 = spin.started_at().unwrap();

        let one_turn = spin.angle_at(t0 + Duration::from_secs(1));
        assert!(one_turn.abs() < EPS);
        let late_quarter = spin.angle_at(t0 + Duration::from_millis(3250));
        assert!((late_quarter - std::f32::consts::FRAC_PI_2).abs() < 1e-2);
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut spin = SpinAnimation::new();
        spin.start();
        let t0 = spin.started_at().unwrap();
        spin.start();
        // The original phase is preserved
        assert_eq!(spin.started_at(), Some(t0));
    }

    #[test]
    fn test_stop_resets() {
        let mut spin = SpinAnimation::new();
        spin.start();
        spin.stop();
        spin.stop();
        assert!(!spin.is_running());
        assert_eq!(spin.current_angle(), 0.0);
    }
}
