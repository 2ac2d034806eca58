//! Timestamps for hosts whose input events carry none.

// Use web_time for cross-platform time support (native + WASM)
use web_time::Instant;

use crate::PointerSample;

/// Stamps pointer samples with milliseconds elapsed since the clock started.
///
/// Browser events already carry a `timeStamp`; native windowing backends
/// usually do not, so their adapters sample through one of these.
#[derive(Debug, Clone, Copy)]
pub struct SampleClock {
    origin: Instant,
}

impl SampleClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// Milliseconds since the clock was created.
    pub fn elapsed_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }

    /// Samples `(x, y)` at the current time.
    pub fn sample(&self, x: f32, y: f32) -> PointerSample {
        PointerSample::new(x, y, self.elapsed_ms())
    }
}

impl Default for SampleClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_are_monotonic() {
        let clock = SampleClock::new();
        let first = clock.sample(0.0, 0.0);
        let second = clock.sample(1.0, 1.0);
        assert!(first.time >= 0.0);
        assert!(second.time >= first.time);
        assert_eq!(second.position(), crate::Point::new(1.0, 1.0));
    }
}
