//! Cancellable timers driven by explicit polling.
//!
//! Hosts call `poll` with the current time in milliseconds. No platform
//! timer callbacks are involved, so tests drive time directly.

/// Repeating timer for automatic carousel advances.
///
/// At most one tick stream is ever active: starting while active is a
/// no-op, and restart always cancels before scheduling anew.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoAdvanceTimer {
    period_ms: u64,
    next_tick_at: Option<u64>,
}

impl AutoAdvanceTimer {
    /// Create an inactive timer with the given period.
    pub fn new(period_ms: u64) -> Self {
        Self {
            period_ms,
            next_tick_at: None,
        }
    }

    /// Schedule the first tick one period from `now_ms`.
    ///
    /// Does nothing if the timer is already active.
    pub fn start(&mut self, now_ms: u64) {
        if self.next_tick_at.is_none() {
            self.next_tick_at = Some(now_ms + self.period_ms);
        }
    }

    /// Cancel the pending tick.
    pub fn cancel(&mut self) {
        self.next_tick_at = None;
    }

    /// Cancel, then schedule the next tick a full period from `now_ms`.
    pub fn restart(&mut self, now_ms: u64) {
        self.cancel();
        self.start(now_ms);
    }

    /// Check if a tick is scheduled.
    pub fn is_active(&self) -> bool {
        self.next_tick_at.is_some()
    }

    /// Fire if the scheduled tick time has been reached.
    ///
    /// On firing, the next tick is scheduled one period after `now_ms`,
    /// keeping the interval cadence without the caller restarting.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.next_tick_at {
            Some(at) if now_ms >= at => {
                self.next_tick_at = Some(now_ms + self.period_ms);
                true
            }
            _ => false,
        }
    }
}

/// Trailing-edge debouncer.
///
/// Each trigger replaces the pending one, so after a burst only the last
/// payload is delivered, one quiet window after the last trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Debouncer<T> {
    quiet_ms: u64,
    pending: Option<PendingTrigger<T>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingTrigger<T> {
    payload: T,
    fire_at: u64,
}

impl<T> Debouncer<T> {
    /// Create a debouncer with the given quiet window.
    pub fn new(quiet_ms: u64) -> Self {
        Self {
            quiet_ms,
            pending: None,
        }
    }

    /// Record a trigger, discarding any earlier pending one.
    pub fn trigger(&mut self, payload: T, now_ms: u64) {
        self.pending = Some(PendingTrigger {
            payload,
            fire_at: now_ms + self.quiet_ms,
        });
    }

    /// Check if a trigger is waiting out the quiet window.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop the pending trigger without delivering it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Deliver the pending payload once the quiet window has elapsed.
    pub fn poll(&mut self, now_ms: u64) -> Option<T> {
        match &self.pending {
            Some(p) if now_ms >= p.fire_at => self.pending.take().map(|p| p.payload),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // === Auto-Advance Timer Tests ===

    #[test]
    fn test_timer_starts_inactive() {
        let mut timer = AutoAdvanceTimer::new(3000);
        assert!(!timer.is_active());
        assert!(!timer.poll(10_000));
    }

    #[test]
    fn test_timer_fires_after_period() {
        let mut timer = AutoAdvanceTimer::new(3000);
        timer.start(0);

        assert!(!timer.poll(2999));
        assert!(timer.poll(3000));
    }

    #[test]
    fn test_timer_repeats_on_interval_cadence() {
        let mut timer = AutoAdvanceTimer::new(3000);
        timer.start(0);

        assert!(timer.poll(3000));
        assert!(!timer.poll(5999));
        assert!(timer.poll(6000));
    }

    #[test]
    fn test_start_while_active_is_noop() {
        let mut timer = AutoAdvanceTimer::new(3000);
        timer.start(0);
        timer.start(2500);

        // The original schedule stands
        assert!(timer.poll(3000));
    }

    #[test]
    fn test_restart_pushes_next_tick_out() {
        let mut timer = AutoAdvanceTimer::new(3000);
        timer.start(0);
        timer.restart(2000);

        assert!(!timer.poll(3000));
        assert!(!timer.poll(4999));
        assert!(timer.poll(5000));
    }

    #[test]
    fn test_cancel_stops_ticks() {
        let mut timer = AutoAdvanceTimer::new(3000);
        timer.start(0);
        timer.cancel();

        assert!(!timer.is_active());
        assert!(!timer.poll(10_000));
    }

    // === Debouncer Tests ===

    #[test]
    fn test_debounce_waits_out_quiet_window() {
        let mut debounce: Debouncer<u32> = Debouncer::new(250);
        debounce.trigger(800, 0);

        assert_eq!(debounce.poll(249), None);
        assert_eq!(debounce.poll(250), Some(800));
        assert!(!debounce.is_pending());
    }

    #[test]
    fn test_debounce_storm_delivers_last_payload_once() {
        let mut debounce: Debouncer<u32> = Debouncer::new(250);
        debounce.trigger(800, 0);
        debounce.trigger(900, 100);
        debounce.trigger(1024, 200);

        // The window restarts with each trigger
        assert_eq!(debounce.poll(300), None);
        assert_eq!(debounce.poll(450), Some(1024));
        assert_eq!(debounce.poll(451), None);
    }

    #[test]
    fn test_debounce_cancel_discards_pending() {
        let mut debounce: Debouncer<u32> = Debouncer::new(250);
        debounce.trigger(800, 0);
        debounce.cancel();

        assert_eq!(debounce.poll(1000), None);
    }
}
