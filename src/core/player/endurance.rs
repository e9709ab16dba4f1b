//=========================================================================
// Endurance
//=========================================================================
//
// Bounded stamina resource that gates sprinting.
//
//=========================================================================

/// Upper bound of the endurance meter.
pub const MAX_ENDURANCE: f32 = 100.0;

/// Stamina in `[0, MAX_ENDURANCE]`.
///
/// Drains at a fixed rate while sprinting and regenerates at a (slower)
/// fixed rate otherwise. There is no hysteresis: sprint re-engages as soon
/// as the meter is above zero again.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Endurance {
    value: f32,
}

impl Endurance {
    /// A full meter.
    pub fn full() -> Self {
        Self { value: MAX_ENDURANCE }
    }

    /// Meter at `value`, clamped into range. NaN becomes empty.
    #[cfg(test)]
    pub(crate) fn with_value(value: f32) -> Self {
        let mut endurance = Self::full();
        endurance.set(value);
        endurance
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value <= 0.0
    }

    pub fn set(&mut self, value: f32) {
        self.value = if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, MAX_ENDURANCE)
        };
    }

    /// Advances the meter by `delta` seconds.
    ///
    /// Sprint is granted when `wants_sprint` holds and the meter is not
    /// empty; the meter then drains. Otherwise it regenerates. Returns
    /// whether the player sprints this frame.
    pub fn update(&mut self, wants_sprint: bool, delta: f32, drain_rate: f32, regen_rate: f32) -> bool {
        let sprinting = wants_sprint && !self.is_empty();
        let step = if sprinting {
            -drain_rate * delta
        } else {
            regen_rate * delta
        };
        self.set(self.value + step);
        sprinting
    }
}

impl Default for Endurance {
    fn default() -> Self {
        Self::full()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DRAIN: f32 = 25.0;
    const REGEN: f32 = 10.0;

    #[test]
    fn drains_while_sprinting() {
        let mut endurance = Endurance::full();
        let sprinting = endurance.update(true, 1.0, DRAIN, REGEN);

        assert!(sprinting);
        assert_eq!(endurance.value(), 75.0);
    }

    #[test]
    fn regenerates_otherwise_and_caps_at_max() {
        let mut endurance = Endurance::with_value(95.0);

        assert!(!endurance.update(false, 0.25, DRAIN, REGEN));
        assert_eq!(endurance.value(), 97.5);

        endurance.update(false, 1.0, DRAIN, REGEN);
        assert_eq!(endurance.value(), MAX_ENDURANCE);
    }

    #[test]
    fn empty_meter_refuses_sprint_and_recovers() {
        let mut endurance = Endurance::with_value(0.0);

        let sprinting = endurance.update(true, 0.1, DRAIN, REGEN);

        assert!(!sprinting);
        assert!(endurance.value() > 0.0);
    }

    #[test]
    fn sprint_reengages_immediately_above_zero() {
        let mut endurance = Endurance::with_value(0.5);
        assert!(endurance.update(true, 1.0, DRAIN, REGEN));
        assert_eq!(endurance.value(), 0.0);

        assert!(!endurance.update(true, 0.1, DRAIN, REGEN));
        assert!(endurance.update(true, 0.01, DRAIN, REGEN));
    }

    #[test]
    fn stays_in_bounds_for_any_step() {
        let deltas = [0.0, 1e-4, 0.016, 0.033, 1.0, 10.0, 1000.0];
        for start in [0.0, 0.5, 50.0, 99.9, 100.0] {
            for &delta in &deltas {
                for wants in [true, false] {
                    let mut endurance = Endurance::with_value(start);
                    endurance.update(wants, delta, DRAIN, REGEN);
                    let v = endurance.value();
                    assert!((0.0..=MAX_ENDURANCE).contains(&v), "start {start} delta {delta} -> {v}");
                }
            }
        }
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        assert_eq!(Endurance::with_value(250.0).value(), MAX_ENDURANCE);
        assert_eq!(Endurance::with_value(-3.0).value(), 0.0);
        assert_eq!(Endurance::with_value(f32::NAN).value(), 0.0);
        assert_eq!(Endurance::with_value(50.0).value(), 50.0);
    }
}
