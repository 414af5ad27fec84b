// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_timing --heading-base-level=0

//! Understory Timing: host-agnostic timer primitives for UI runtimes.
//!
//! UI components often need "call me again in N milliseconds" behavior: carousels
//! that auto-advance, staged entrance animations, delayed hints. This crate keeps
//! that need abstract so components stay testable without wall-clock waits:
//!
//! - [`Scheduler`]: the capability a component depends on to register one-shot
//!   and repeating timers.
//! - [`TimerHandle`]: a drop-guard returned for every registered timer. Dropping
//!   the handle (or calling [`TimerHandle::cancel`]) cancels the timer, so a
//!   component that owns its handles can never leak a timer past its lifetime.
//! - [`TimerId`]: the identifier a host routes back to the component when a
//!   timer fires.
//! - [`TimerQueue`]: a [`Scheduler`] with a virtual clock that hosts (and tests)
//!   step explicitly.
//!
//! This crate does **not** own an event loop or a clock. Hosts are responsible for:
//!
//! - Advancing a [`TimerQueue`] from their frame/tick source (or implementing
//!   [`Scheduler`] on top of a platform timer API).
//! - Routing each fired [`TimerId`] to whichever component owns it.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use understory_timing::{Scheduler, TimerQueue};
//!
//! let mut queue = TimerQueue::new();
//! let every_second = queue.schedule_repeating(Duration::from_secs(1));
//!
//! let fired = queue.advance_by(Duration::from_millis(2_500));
//! assert_eq!(fired, vec![every_second.id(), every_second.id()]);
//!
//! // Dropping the handle cancels the timer.
//! drop(every_second);
//! assert!(queue.advance_by(Duration::from_secs(10)).is_empty());
//! ```
//!
//! Handles are reference-counted with [`alloc::rc::Rc`] and are therefore `!Send`:
//! timers belong to the single-threaded event loop that created them.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod handle;
mod queue;

pub use handle::{TimerHandle, TimerId, TimerWatch};
pub use queue::TimerQueue;

use core::time::Duration;

/// A source of timers.
///
/// Implementations hand out a [`TimerHandle`] per registration and must stop
/// reporting a timer as soon as its handle has been dropped (see
/// [`TimerHandle::watch`] and [`TimerWatch::is_live`]).
pub trait Scheduler {
    /// Registers a timer that fires every `interval`, starting one `interval` from now.
    fn schedule_repeating(&mut self, interval: Duration) -> TimerHandle;

    /// Registers a timer that fires once, `delay` from now.
    fn schedule_once(&mut self, delay: Duration) -> TimerHandle;
}

impl<S: Scheduler + ?Sized> Scheduler for &mut S {
    fn schedule_repeating(&mut self, interval: Duration) -> TimerHandle {
        (**self).schedule_repeating(interval)
    }

    fn schedule_once(&mut self, delay: Duration) -> TimerHandle {
        (**self).schedule_once(delay)
    }
}
