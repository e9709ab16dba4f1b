//=========================================================================
// Lap Timer
//=========================================================================
//
// Start/finish timing driven by zone entries.
//
//   inactive ──enter Start──► active(start_time)
//   active   ──enter Finish─► inactive, lap recorded, best updated
//
// Any other entry is ignored; the active flag is the only debounce.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info};

//=== Internal Dependencies ===============================================

use super::ZoneKind;

//=== TimerEvent ==========================================================

/// What a zone entry did to the timer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimerEvent {
    Started,
    Finished { lap: f32, new_best: bool },
}

//=== LapTimer ============================================================

#[derive(Debug, Clone, PartialEq)]
pub struct LapTimer {
    start_time: f32,
    active: bool,

    /// `f32::INFINITY` until a lap completes.
    best_time: f32,
    last_lap: Option<f32>,
}

impl Default for LapTimer {
    fn default() -> Self {
        Self {
            start_time: 0.0,
            active: false,
            best_time: f32::INFINITY,
            last_lap: None,
        }
    }
}

impl LapTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn start_time(&self) -> f32 {
        self.start_time
    }

    /// Best lap so far, `f32::INFINITY` if none.
    pub fn best_time(&self) -> f32 {
        self.best_time
    }

    /// Best lap, or `None` if no lap has been completed.
    pub fn best_lap(&self) -> Option<f32> {
        self.best_time.is_finite().then_some(self.best_time)
    }

    pub fn last_lap(&self) -> Option<f32> {
        self.last_lap
    }

    /// Running time of the current lap at `now`.
    pub fn elapsed(&self, now: f32) -> Option<f32> {
        self.active.then(|| now - self.start_time)
    }

    /// Handles the player entering a zone at session time `now`.
    pub fn on_enter(&mut self, kind: ZoneKind, now: f32) -> Option<TimerEvent> {
        match (kind, self.active) {
            (ZoneKind::Start, false) => {
                self.start_time = now;
                self.active = true;
                debug!("Lap started at {:.2}s", now);
                Some(TimerEvent::Started)
            }
            (ZoneKind::Finish, true) => {
                let lap = now - self.start_time;
                let new_best = lap < self.best_time;
                if new_best {
                    self.best_time = lap;
                }
                self.last_lap = Some(lap);
                self.active = false;
                info!("Lap finished in {:.2}s (best {:.2}s)", lap, self.best_time);
                Some(TimerEvent::Finished { lap, new_best })
            }
            _ => None,
        }
    }

    /// Forgets the running lap but keeps the records.
    pub fn cancel(&mut self) {
        self.active = false;
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn starts_empty() {
        let timer = LapTimer::new();
        assert!(!timer.is_active());
        assert_eq!(timer.best_time(), f32::INFINITY);
        assert_eq!(timer.best_lap(), None);
        assert_eq!(timer.elapsed(5.0), None);
    }

    #[test]
    fn first_lap_becomes_best() {
        let mut timer = LapTimer::new();

        assert_eq!(timer.on_enter(ZoneKind::Start, 10.0), Some(TimerEvent::Started));
        assert!((timer.elapsed(12.5).unwrap() - 2.5).abs() < EPS);

        let event = timer.on_enter(ZoneKind::Finish, 22.4);
        match event {
            Some(TimerEvent::Finished { lap, new_best }) => {
                assert!((lap - 12.4).abs() < EPS);
                assert!(new_best);
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!((timer.best_time() - 12.4).abs() < EPS);
        assert!(!timer.is_active());
    }

    #[test]
    fn faster_lap_replaces_best_slower_does_not() {
        let mut timer = LapTimer::new();
        timer.on_enter(ZoneKind::Start, 0.0);
        timer.on_enter(ZoneKind::Finish, 12.4);

        timer.on_enter(ZoneKind::Start, 20.0);
        timer.on_enter(ZoneKind::Finish, 30.1);
        assert!((timer.best_time() - 10.1).abs() < EPS);

        timer.on_enter(ZoneKind::Start, 40.0);
        let event = timer.on_enter(ZoneKind::Finish, 55.0);
        assert!(matches!(event, Some(TimerEvent::Finished { new_best: false, .. })));
        assert!((timer.best_time() - 10.1).abs() < EPS);
        assert!((timer.last_lap().unwrap() - 15.0).abs() < EPS);
    }

    #[test]
    fn finish_without_start_is_ignored() {
        let mut timer = LapTimer::new();
        assert_eq!(timer.on_enter(ZoneKind::Finish, 3.0), None);
        assert_eq!(timer.best_lap(), None);
    }

    #[test]
    fn reentering_start_does_not_restart() {
        let mut timer = LapTimer::new();
        timer.on_enter(ZoneKind::Start, 1.0);
        assert_eq!(timer.on_enter(ZoneKind::Start, 4.0), None);
        assert_eq!(timer.start_time(), 1.0);
    }

    #[test]
    fn cancel_keeps_records() {
        let mut timer = LapTimer::new();
        timer.on_enter(ZoneKind::Start, 0.0);
        timer.on_enter(ZoneKind::Finish, 8.0);
        timer.on_enter(ZoneKind::Start, 9.0);

        timer.cancel();

        assert!(!timer.is_active());
        assert_eq!(timer.best_lap(), Some(8.0));
    }
}
