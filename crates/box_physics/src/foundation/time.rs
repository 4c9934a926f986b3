//! Time management utilities

use std::time::{Duration, Instant};

/// Default simulation step (60 Hz)
pub const DEFAULT_STEP: f32 = 1.0 / 60.0;

/// Upper bound on steps produced by a single frame, so a long stall does not
/// spiral into ever-longer catch-up frames.
pub const MAX_STEPS_PER_FRAME: u32 = 8;

/// Fixed-step accumulator turning variable frame times into whole physics steps
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    step: f32,
    accumulator: f32,
    total_steps: u64,
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self::new(DEFAULT_STEP)
    }
}

impl FixedTimestep {
    /// Create an accumulator producing steps of `step` seconds
    pub fn new(step: f32) -> Self {
        Self {
            step,
            accumulator: 0.0,
            total_steps: 0,
        }
    }

    /// Length of one step in seconds
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Feed a frame's elapsed time and return how many steps to run this frame
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.max(0.0);

        let mut steps = 0;
        while self.accumulator >= self.step && steps < MAX_STEPS_PER_FRAME {
            self.accumulator -= self.step;
            steps += 1;
        }

        if steps == MAX_STEPS_PER_FRAME && self.accumulator >= self.step {
            log::warn!(
                "Dropping {:.3}s of simulation time after hitting the step cap",
                self.accumulator
            );
            self.accumulator %= self.step;
        }

        self.total_steps += u64::from(steps);
        steps
    }

    /// Fraction of a step left over in the accumulator (0..1)
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.step
    }

    /// Total steps produced since creation
    pub fn total_steps(&self) -> u64 {
        self.total_steps
    }

    /// Simulated time covered by the produced steps
    pub fn simulated_time(&self) -> f32 {
        self.total_steps as f32 * self.step
    }
}

/// Simple stopwatch for measuring elapsed time
pub struct Stopwatch {
    start_time: Option<Instant>,
    elapsed: Duration,
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

impl Stopwatch {
    /// Create a new stopped stopwatch
    pub fn new() -> Self {
        Self {
            start_time: None,
            elapsed: Duration::ZERO,
        }
    }

    /// Create a new stopwatch and start it immediately
    pub fn start_new() -> Self {
        let mut stopwatch = Self::new();
        stopwatch.start();
        stopwatch
    }

    /// Start the stopwatch
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Stop the stopwatch and accumulate elapsed time
    pub fn stop(&mut self) {
        if let Some(start) = self.start_time {
            self.elapsed += start.elapsed();
            self.start_time = None;
        }
    }

    /// Get the elapsed time
    pub fn elapsed(&self) -> Duration {
        let current_elapsed = self
            .start_time
            .map_or(Duration::ZERO, |start| start.elapsed());
        self.elapsed + current_elapsed
    }

    /// Get the elapsed time in milliseconds
    pub fn elapsed_millis(&self) -> f32 {
        self.elapsed().as_secs_f32() * 1000.0
    }

    /// Check if the stopwatch is currently running
    pub fn is_running(&self) -> bool {
        self.start_time.is_some()
    }
}
