use std::time::{Duration, Instant};

/// Caps the frame rate and measures the time between frames.
#[derive(Debug)]
pub struct FrameClock {
    interval: Duration,
    last: Instant,
    next: Instant,
}

impl FrameClock {
    pub fn new(fps: u32) -> Self {
        Self::starting_at(fps, Instant::now())
    }

    pub fn starting_at(fps: u32, now: Instant) -> Self {
        let interval = Duration::from_secs(1) / fps.max(1);
        Self {
            interval,
            last: now,
            next: now,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// When the next frame is due.
    pub fn deadline(&self) -> Instant {
        self.next
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next
    }

    /// Marks a frame as started at `now` and returns the seconds elapsed
    /// since the previous one.
    pub fn tick(&mut self, now: Instant) -> f32 {
        let delta = now.saturating_duration_since(self.last);
        self.last = now;

        self.next += self.interval;
        // fell behind by more than a frame: resync instead of bursting
        if self.next <= now {
            self.next = now + self.interval;
        }

        delta.as_secs_f32()
    }
}
