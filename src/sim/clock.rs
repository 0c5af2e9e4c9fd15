//! Frame clock
//!
//! Fed host timestamps in seconds, so it works the same on native and in a
//! browser animation callback.

/// Pausable delta-time source
#[derive(Debug, Clone, Default)]
pub struct Clock {
    running: bool,
    last: Option<f64>,
    elapsed: f64,
}

impl Clock {
    /// A stopped clock
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) {
        self.running = true;
        self.last = None;
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.last = None;
    }

    /// Back to a stopped clock with no elapsed time
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Seconds accumulated across all deltas since the last reset
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Seconds since the previous call (0 while stopped or on the first call after start)
    pub fn delta(&mut self, now: f64) -> f32 {
        if !self.running {
            return 0.0;
        }
        let dt = match self.last {
            Some(last) => (now - last).max(0.0),
            None => 0.0,
        };
        self.last = Some(now);
        self.elapsed += dt;
        dt as f32
    }
}
