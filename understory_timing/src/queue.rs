// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A virtual-clock timer queue.

use alloc::vec::Vec;
use core::time::Duration;

use crate::Scheduler;
use crate::handle::{TimerHandle, TimerId, TimerWatch};

#[derive(Debug)]
struct Entry {
    watch: TimerWatch,
    due: Duration,
    period: Option<Duration>,
    /// Registration order, used to break deadline ties.
    seq: u64,
    /// Last advance pass in which a zero-period timer fired.
    last_pass: u64,
}

/// A [`Scheduler`] driven by an explicit virtual clock.
///
/// The clock starts at zero and only moves when the host calls
/// [`advance_by`](Self::advance_by) or [`advance_to`](Self::advance_to). Each
/// advance returns the identifiers of the timers that came due, in deadline
/// order (ties resolved by registration order):
///
/// - One-shot timers fire once and are removed.
/// - Repeating timers are re-armed and fire once per elapsed period, so a
///   large step reports every missed occurrence.
/// - A repeating timer with a zero period fires at most once per advance.
/// - A repeating timer whose next deadline would overflow [`Duration`] fires
///   once more and is then dropped from the queue.
/// - Timers whose [`TimerHandle`] was dropped never fire and are pruned.
///
/// ```rust
/// use core::time::Duration;
/// use understory_timing::{Scheduler, TimerQueue};
///
/// let mut queue = TimerQueue::new();
/// let slow = queue.schedule_once(Duration::from_millis(300));
/// let fast = queue.schedule_once(Duration::from_millis(100));
///
/// assert_eq!(queue.next_deadline(), Some(Duration::from_millis(100)));
/// assert_eq!(
///     queue.advance_to(Duration::from_millis(500)),
///     vec![fast.id(), slow.id()]
/// );
/// assert!(queue.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct TimerQueue {
    now: Duration,
    entries: Vec<Entry>,
    next_id: u64,
    next_seq: u64,
    pass: u64,
}

impl TimerQueue {
    /// Creates an empty queue with its clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Returns the number of timers that are still armed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.watch.is_live()).count()
    }

    /// Returns `true` if no timer is armed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the earliest deadline among armed timers.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.entries
            .iter()
            .filter(|e| e.watch.is_live())
            .map(|e| e.due)
            .min()
    }

    /// Moves the clock forward by `dt` and returns the timers that fired.
    pub fn advance_by(&mut self, dt: Duration) -> Vec<TimerId> {
        let target = self.now.saturating_add(dt);
        self.advance_to(target)
    }

    /// Moves the clock to `target` and returns the timers that fired.
    ///
    /// The clock never runs backwards: a `target` earlier than [`now`](Self::now)
    /// is treated as `now`, which still fires anything already due.
    pub fn advance_to(&mut self, target: Duration) -> Vec<TimerId> {
        let target = target.max(self.now);
        self.pass += 1;
        let pass = self.pass;
        self.prune();

        let mut fired = Vec::new();
        while let Some(slot) = self.next_due(target, pass) {
            let entry = &mut self.entries[slot];
            self.now = entry.due;
            fired.push(entry.watch.id());
            let period = entry.period;
            match period {
                Some(period) if period.is_zero() => entry.last_pass = pass,
                Some(period) => match entry.due.checked_add(period) {
                    Some(due) => entry.due = due,
                    // Past the end of representable time; it can never fire again.
                    None => {
                        self.entries.swap_remove(slot);
                    }
                },
                None => {
                    self.entries.swap_remove(slot);
                }
            }
        }
        self.now = target;
        fired
    }

    fn next_due(&self, target: Duration, pass: u64) -> Option<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due <= target && e.last_pass != pass && e.watch.is_live())
            .min_by_key(|(_, e)| (e.due, e.seq))
            .map(|(slot, _)| slot)
    }

    fn prune(&mut self) {
        self.entries.retain(|e| {
            let live = e.watch.is_live();
            if !live {
                tracing::trace!(timer = ?e.watch.id(), "pruning canceled timer");
            }
            live
        });
    }

    fn register(&mut self, delay: Duration, period: Option<Duration>) -> TimerHandle {
        // Drop dead entries so long-lived queues with churn stay small.
        self.prune();
        let handle = TimerHandle::new(TimerId::from_raw(self.next_id));
        self.next_id += 1;
        self.entries.push(Entry {
            watch: handle.watch(),
            due: self.now.saturating_add(delay),
            period,
            seq: self.next_seq,
            last_pass: 0,
        });
        self.next_seq += 1;
        handle
    }
}

impl Scheduler for TimerQueue {
    fn schedule_repeating(&mut self, interval: Duration) -> TimerHandle {
        self.register(interval, Some(interval))
    }

    fn schedule_once(&mut self, delay: Duration) -> TimerHandle {
        self.register(delay, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn new_queue_is_empty() {
        let queue = TimerQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.now(), Duration::ZERO);
        assert_eq!(queue.next_deadline(), None);
    }

    #[test]
    fn one_shot_fires_once_at_deadline() {
        let mut queue = TimerQueue::new();
        let t = queue.schedule_once(ms(100));

        assert!(queue.advance_by(ms(99)).is_empty());
        assert_eq!(queue.advance_by(ms(1)), vec![t.id()]);
        assert!(queue.advance_by(ms(1_000)).is_empty());
        assert!(queue.is_empty());
    }

    #[test]
    fn repeating_reports_every_missed_period() {
        let mut queue = TimerQueue::new();
        let t = queue.schedule_repeating(ms(40));

        let fired = queue.advance_by(ms(130));
        assert_eq!(fired, vec![t.id(); 3]);
        assert_eq!(queue.next_deadline(), Some(ms(160)));
    }

    #[test]
    fn deadline_ties_follow_registration_order() {
        let mut queue = TimerQueue::new();
        let a = queue.schedule_once(ms(10));
        let b = queue.schedule_once(ms(10));
        let c = queue.schedule_once(ms(5));

        assert_eq!(queue.advance_by(ms(10)), vec![c.id(), a.id(), b.id()]);
    }

    #[test]
    fn interleaves_repeating_and_one_shot_by_deadline() {
        let mut queue = TimerQueue::new();
        let rep = queue.schedule_repeating(ms(30));
        let once = queue.schedule_once(ms(45));

        assert_eq!(
            queue.advance_by(ms(60)),
            vec![rep.id(), once.id(), rep.id()]
        );
    }

    #[test]
    fn dropped_handle_never_fires() {
        let mut queue = TimerQueue::new();
        let t = queue.schedule_repeating(ms(10));
        assert_eq!(queue.len(), 1);

        drop(t);
        assert_eq!(queue.len(), 0);
        assert!(queue.advance_by(ms(100)).is_empty());
    }

    #[test]
    fn zero_period_fires_at_most_once_per_advance() {
        let mut queue = TimerQueue::new();
        let t = queue.schedule_repeating(Duration::ZERO);

        assert_eq!(queue.advance_by(ms(5)), vec![t.id()]);
        assert_eq!(queue.advance_by(Duration::ZERO), vec![t.id()]);
    }

    #[test]
    fn clock_never_runs_backwards() {
        let mut queue = TimerQueue::new();
        queue.advance_to(ms(100));
        let t = queue.schedule_once(ms(10));

        assert!(queue.advance_to(ms(50)).is_empty());
        assert_eq!(queue.now(), ms(100));
        assert_eq!(queue.next_deadline(), Some(ms(110)));
        drop(t);
    }

    #[test]
    fn schedules_relative_to_current_time() {
        let mut queue = TimerQueue::new();
        queue.advance_by(ms(1_000));
        let t = queue.schedule_once(ms(250));
        assert_eq!(queue.next_deadline(), Some(ms(1_250)));
        assert_eq!(queue.advance_by(ms(250)), vec![t.id()]);
    }

    #[test]
    fn repeating_timer_at_end_of_time_fires_once() {
        let mut queue = TimerQueue::new();
        queue.advance_to(Duration::MAX);
        let t = queue.schedule_repeating(ms(4_000));
        assert_eq!(queue.next_deadline(), Some(Duration::MAX));

        assert_eq!(queue.advance_by(Duration::ZERO), vec![t.id()]);
        assert!(queue.advance_by(ms(4_000)).is_empty());
        assert!(queue.is_empty());
    }

    #[test]
    fn ids_are_not_reused() {
        let mut queue = TimerQueue::new();
        let a = queue.schedule_once(ms(1)).id();
        let b = queue.schedule_once(ms(1)).id();
        assert_ne!(a, b);
    }
}
