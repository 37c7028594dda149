//! Debounced autosave scheduling.
//!
//! An explicit timer-owning state machine with states `Idle`, `Armed`, and
//! `Firing`, driven by caller-supplied instants so single-flight and
//! teardown-flush behavior are testable without a runtime clock.
//!
//! Field mutations (re-)arm the timer; when the quiescence window elapses
//! the caller fires it and performs a save. A mutation that arrives while a
//! save is in flight re-arms the timer without cancelling the in-flight
//! save.

use std::time::{Duration, Instant};

/// Default quiescence window between the last field mutation and the save.
pub const DEFAULT_QUIESCENCE: Duration = Duration::from_secs(2);

/// Current phase of the autosave timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutosavePhase {
    /// No save pending
    Idle,
    /// A save is scheduled for when the quiescence window elapses
    Armed,
    /// A save is in flight
    Firing,
}

/// Debounce timer owning the autosave schedule for one draft.
#[derive(Debug)]
pub struct AutosaveTimer {
    window: Duration,
    phase: AutosavePhase,
    deadline: Option<Instant>,
    rearmed_while_firing: bool,
}

impl AutosaveTimer {
    /// Creates a timer with the given quiescence window.
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            phase: AutosavePhase::Idle,
            deadline: None,
            rearmed_while_firing: false,
        }
    }

    pub fn phase(&self) -> AutosavePhase {
        self.phase
    }

    /// (Re-)arms the timer from a field mutation at `now`.
    ///
    /// While a save is in flight this records a pending re-arm instead of
    /// interfering with the flight.
    pub fn arm(&mut self, now: Instant) {
        match self.phase {
            AutosavePhase::Firing => {
                self.rearmed_while_firing = true;
                self.deadline = Some(now + self.window);
            }
            _ => {
                self.phase = AutosavePhase::Armed;
                self.deadline = Some(now + self.window);
            }
        }
    }

    /// Cancels any pending (not-yet-fired) save. An in-flight save is not
    /// affected beyond dropping its queued re-arm.
    pub fn cancel(&mut self) {
        self.deadline = None;
        self.rearmed_while_firing = false;
        if self.phase == AutosavePhase::Armed {
            self.phase = AutosavePhase::Idle;
        }
    }

    /// Whether the quiescence window has elapsed on an armed timer.
    pub fn due(&self, now: Instant) -> bool {
        self.phase == AutosavePhase::Armed
            && self.deadline.is_some_and(|deadline| now >= deadline)
    }

    /// Transitions `Armed` to `Firing` when due. Returns whether the caller
    /// should perform a save now; refuses while a save is already in flight.
    pub fn fire(&mut self, now: Instant) -> bool {
        if !self.due(now) {
            return false;
        }
        self.phase = AutosavePhase::Firing;
        self.deadline = None;
        true
    }

    /// Marks the in-flight save as settled. If a mutation re-armed the timer
    /// mid-flight, the timer returns to `Armed` with the recorded deadline;
    /// otherwise it goes idle.
    pub fn complete(&mut self) {
        if self.phase != AutosavePhase::Firing {
            return;
        }
        if self.rearmed_while_firing {
            self.rearmed_while_firing = false;
            self.phase = AutosavePhase::Armed;
        } else {
            self.deadline = None;
            self.phase = AutosavePhase::Idle;
        }
    }

    /// Teardown: reports whether a final save attempt is warranted (a save
    /// was pending), then resets to idle.
    pub fn flush(&mut self) -> bool {
        let pending = self.phase == AutosavePhase::Armed || self.rearmed_while_firing;
        self.deadline = None;
        self.rearmed_while_firing = false;
        self.phase = AutosavePhase::Idle;
        pending
    }
}

impl Default for AutosaveTimer {
    fn default() -> Self {
        Self::new(DEFAULT_QUIESCENCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(100);

    #[test]
    fn arms_and_fires_after_window() {
        let mut timer = AutosaveTimer::new(WINDOW);
        let start = Instant::now();

        timer.arm(start);
        assert_eq!(timer.phase(), AutosavePhase::Armed);
        assert!(!timer.due(start));
        assert!(!timer.fire(start));

        let later = start + WINDOW;
        assert!(timer.due(later));
        assert!(timer.fire(later));
        assert_eq!(timer.phase(), AutosavePhase::Firing);

        timer.complete();
        assert_eq!(timer.phase(), AutosavePhase::Idle);
    }

    #[test]
    fn mutation_rearms_the_window() {
        let mut timer = AutosaveTimer::new(WINDOW);
        let start = Instant::now();

        timer.arm(start);
        let halfway = start + WINDOW / 2;
        timer.arm(halfway);

        // the original deadline has passed but the re-armed one has not
        assert!(!timer.due(start + WINDOW));
        assert!(timer.due(halfway + WINDOW));
    }

    #[test]
    fn refuses_to_fire_while_firing() {
        let mut timer = AutosaveTimer::new(WINDOW);
        let start = Instant::now();

        timer.arm(start);
        assert!(timer.fire(start + WINDOW));

        // a mutation mid-flight re-arms without cancelling the flight
        timer.arm(start + WINDOW);
        assert_eq!(timer.phase(), AutosavePhase::Firing);
        assert!(!timer.fire(start + WINDOW * 2));

        timer.complete();
        assert_eq!(timer.phase(), AutosavePhase::Armed);
        assert!(timer.fire(start + WINDOW * 3));
    }

    #[test]
    fn cancel_drops_pending_save() {
        let mut timer = AutosaveTimer::new(WINDOW);
        let start = Instant::now();

        timer.arm(start);
        timer.cancel();
        assert_eq!(timer.phase(), AutosavePhase::Idle);
        assert!(!timer.fire(start + WINDOW * 2));
    }

    #[test]
    fn flush_reports_pending_work_and_resets() {
        let mut timer = AutosaveTimer::new(WINDOW);
        let start = Instant::now();

        assert!(!timer.flush());

        timer.arm(start);
        assert!(timer.flush());
        assert_eq!(timer.phase(), AutosavePhase::Idle);

        // re-arm queued during a flight also counts as pending
        timer.arm(start);
        timer.fire(start + WINDOW);
        timer.arm(start + WINDOW);
        assert!(timer.flush());
    }
}
