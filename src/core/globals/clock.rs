//=========================================================================
// Clock
//=========================================================================
//
// Session time accumulated from frame deltas.
//
//=========================================================================

/// Monotonic game clock in seconds.
///
/// Advances only by the deltas it is fed, so timing is reproducible for a
/// given sequence of frames.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SessionClock {
    elapsed: f32,
    frames: u64,
}

impl SessionClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds since the clock was created.
    #[inline]
    pub fn now(&self) -> f32 {
        self.elapsed
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Adds one frame of `delta` seconds. Negative or NaN deltas count as
    /// zero.
    pub fn advance(&mut self, delta: f32) {
        if delta > 0.0 {
            self.elapsed += delta;
        }
        self.frames += 1;
    }
}
