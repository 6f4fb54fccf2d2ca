//! Simulated time.

/// Accumulates simulated seconds from real frame deltas.
///
/// Changing the scale only changes how fast time accumulates from the next
/// tick on, so bodies never jump when the slider moves.
#[derive(Debug, Clone, PartialEq)]
pub struct SimClock {
    sim_time: f64,
    time_scale: f32,
    max_scale: f32,
    /// Scale to restore on resume
    paused_scale: Option<f32>,
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new(1.0, 10.0)
    }
}

impl SimClock {
    pub fn new(time_scale: f32, max_scale: f32) -> Self {
        let mut clock = Self {
            sim_time: 0.0,
            time_scale: 1.0,
            max_scale: max_scale.max(0.0),
            paused_scale: None,
        };
        clock.set_time_scale(time_scale);
        clock
    }

    /// Advance by `real_dt` seconds and return the new simulated time.
    pub fn tick(&mut self, real_dt: f32) -> f64 {
        let dt = real_dt.max(0.0) as f64;
        self.sim_time += dt * self.time_scale as f64;
        self.sim_time
    }

    pub fn sim_time(&self) -> f64 {
        self.sim_time
    }

    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    pub fn max_scale(&self) -> f32 {
        self.max_scale
    }

    /// Set the scale, clamped to `[0, max_scale]`. Zero pauses.
    pub fn set_time_scale(&mut self, scale: f32) {
        let scale = if scale.is_nan() { 0.0 } else { scale };
        if scale < 0.0 {
            log::warn!("Negative time scale {scale} clamped to 0");
        }
        let clamped = scale.clamp(0.0, self.max_scale);
        if clamped != self.time_scale {
            log::debug!("Time scale {} -> {}", self.time_scale, clamped);
        }
        self.time_scale = clamped;
        self.paused_scale = None;
    }

    pub fn is_paused(&self) -> bool {
        self.time_scale == 0.0
    }

    pub fn pause(&mut self) {
        if !self.is_paused() {
            self.paused_scale = Some(self.time_scale);
            self.time_scale = 0.0;
            log::info!("Simulation paused");
        }
    }

    /// Restore the scale that was active before [`pause`](Self::pause), or 1×
    /// if the clock was stopped by setting a zero scale.
    pub fn resume(&mut self) {
        if self.is_paused() {
            self.time_scale = self.paused_scale.take().unwrap_or(1.0_f32.min(self.max_scale));
            log::info!("Simulation resumed at {}x", self.time_scale);
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.is_paused() {
            self.resume();
        } else {
            self.pause();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulates_scaled_time() {
        let mut clock = SimClock::new(2.0, 10.0);
        clock.tick(0.5);
        clock.tick(0.25);
        assert!((clock.sim_time() - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_scale_change_does_not_jump() {
        let mut clock = SimClock::default();
        clock.tick(1.0);
        clock.set_time_scale(5.0);
        assert_eq!(clock.sim_time(), 1.0);
        clock.tick(1.0);
        assert!((clock.sim_time() - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_clamping() {
        let mut clock = SimClock::default();
        clock.set_time_scale(-3.0);
        assert_eq!(clock.time_scale(), 0.0);
        clock.set_time_scale(50.0);
        assert_eq!(clock.time_scale(), 10.0);
        clock.set_time_scale(f32::NAN);
        assert_eq!(clock.time_scale(), 0.0);
    }

    #[test]
    fn test_pause_resume_restores_scale() {
        let mut clock = SimClock::new(2.0, 10.0);
        clock.pause();
        assert!(clock.is_paused());
        let before = clock.sim_time();
        clock.tick(3.0);
        assert_eq!(clock.sim_time(), before);

        clock.resume();
        assert_eq!(clock.time_scale(), 2.0);
    }

    #[test]
    fn test_resume_after_zero_scale() {
        let mut clock = SimClock::default();
        clock.set_time_scale(0.0);
        clock.toggle_pause();
        assert_eq!(clock.time_scale(), 1.0);
    }

    #[test]
    fn test_negative_dt_ignored() {
        let mut clock = SimClock::default();
        clock.tick(-1.0);
        assert_eq!(clock.sim_time(), 0.0);
    }
}
