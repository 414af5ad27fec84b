// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Staged entrance animations driven by one-shot timers.
//!
//! Landing sections often reveal themselves in steps: a title animates in, a
//! second line follows two seconds later, a scroll hint after that, and a
//! splash screen fades out and hands over. [`CueTimeline`] schedules one
//! one-shot timer per step and records which steps have been reached, so the
//! renderer only has to ask [`CueTimeline::has_reached`].
//!
//! ```rust
//! use core::time::Duration;
//! use understory_showcase::{CueTimeline, IntroCue};
//! use understory_timing::TimerQueue;
//!
//! let mut queue = TimerQueue::new();
//! let mut intro = CueTimeline::start(IntroCue::HERO, &mut queue);
//!
//! for id in queue.advance_by(Duration::from_millis(2_500)) {
//!     intro.on_timer(id);
//! }
//! assert!(intro.has_reached(IntroCue::LastName));
//! assert!(!intro.has_reached(IntroCue::ScrollHint));
//! ```

use core::fmt::Debug;
use core::time::Duration;

use smallvec::SmallVec;
use understory_timing::{Scheduler, TimerHandle, TimerId};

/// Stock stages of the landing-page intro.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum IntroCue {
    /// The section has mounted and its first animation may start.
    Loaded,
    /// The second line of the title is revealed.
    LastName,
    /// The "scroll" hint is shown.
    ScrollHint,
    /// A splash screen starts fading out.
    FadeOut,
    /// A splash screen is done and should hand over to the page.
    Complete,
}

impl IntroCue {
    /// Schedule for a full-screen splash that fades out on its own.
    pub const SPLASH: [(Duration, Self); 4] = [
        (Duration::from_millis(2_200), Self::LastName),
        (Duration::from_millis(3_200), Self::ScrollHint),
        (Duration::from_millis(5_500), Self::FadeOut),
        (Duration::from_millis(7_500), Self::Complete),
    ];

    /// Schedule for the hero section at the top of the landing page.
    pub const HERO: [(Duration, Self); 3] = [
        (Duration::from_millis(100), Self::Loaded),
        (Duration::from_millis(2_200), Self::LastName),
        (Duration::from_millis(3_200), Self::ScrollHint),
    ];
}

/// A set of cues, each reached once after its delay.
///
/// Pending cues hold their [`TimerHandle`]s, so dropping the timeline cancels
/// every cue that has not fired yet.
#[derive(Debug)]
pub struct CueTimeline<C> {
    pending: SmallVec<[(TimerHandle, C); 4]>,
    reached: SmallVec<[C; 4]>,
}

impl<C: Copy + PartialEq + Debug> CueTimeline<C> {
    /// Schedules every `(delay, cue)` pair with `scheduler`.
    pub fn start<S>(schedule: impl IntoIterator<Item = (Duration, C)>, scheduler: &mut S) -> Self
    where
        S: Scheduler + ?Sized,
    {
        let pending = schedule
            .into_iter()
            .map(|(delay, cue)| (scheduler.schedule_once(delay), cue))
            .collect();
        Self {
            pending,
            reached: SmallVec::new(),
        }
    }

    /// Handles a fired timer, returning the cue it belongs to.
    ///
    /// Returns `None` for timers that are not part of this timeline.
    pub fn on_timer(&mut self, id: TimerId) -> Option<C> {
        let slot = self.pending.iter().position(|(timer, _)| timer.id() == id)?;
        let (_, cue) = self.pending.remove(slot);
        tracing::debug!(?cue, "cue reached");
        self.reached.push(cue);
        Some(cue)
    }

    /// Returns `true` once `cue` has fired.
    #[must_use]
    pub fn has_reached(&self, cue: C) -> bool {
        self.reached.contains(&cue)
    }

    /// Cues reached so far, in firing order.
    #[must_use]
    pub fn reached(&self) -> &[C] {
        &self.reached
    }

    /// The most recently reached cue.
    #[must_use]
    pub fn latest(&self) -> Option<C> {
        self.reached.last().copied()
    }

    /// Number of cues still waiting on their timer.
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Returns `true` once every cue has fired.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.pending.is_empty()
    }
}
