// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timer identifiers and drop-to-cancel handles.

use alloc::rc::{Rc, Weak};
use core::fmt;

/// Opaque identifier of a registered timer.
///
/// Identifiers are unique per [`Scheduler`](crate::Scheduler) instance and are
/// never reused by [`TimerQueue`](crate::TimerQueue).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

impl TimerId {
    /// Creates an identifier from a raw value.
    ///
    /// Intended for [`Scheduler`](crate::Scheduler) implementations that wrap a
    /// platform timer API with its own numbering.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn to_raw(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimerId({})", self.0)
    }
}

/// Liveness token shared between a handle and its watches.
#[derive(Debug)]
struct Token;

/// Ownership of a registered timer.
///
/// The timer stays armed for as long as the handle is alive. Dropping the
/// handle cancels it; there is no way to "forget" a handle without canceling.
#[must_use = "dropping a TimerHandle cancels the timer"]
#[derive(Debug)]
pub struct TimerHandle {
    id: TimerId,
    token: Rc<Token>,
}

impl TimerHandle {
    /// Creates a live handle for `id`.
    pub fn new(id: TimerId) -> Self {
        Self {
            id,
            token: Rc::new(Token),
        }
    }

    /// Returns the identifier the scheduler reports when this timer fires.
    #[must_use]
    pub fn id(&self) -> TimerId {
        self.id
    }

    /// Returns a watch that observes whether this handle is still alive.
    ///
    /// Schedulers keep the watch and skip the timer once it reports dead.
    #[must_use]
    pub fn watch(&self) -> TimerWatch {
        TimerWatch {
            id: self.id,
            token: Rc::downgrade(&self.token),
        }
    }

    /// Cancels the timer. Equivalent to dropping the handle.
    pub fn cancel(self) {}
}

/// A non-owning view of a [`TimerHandle`]'s liveness.
#[derive(Clone, Debug)]
pub struct TimerWatch {
    id: TimerId,
    token: Weak<Token>,
}

impl TimerWatch {
    /// Returns the identifier of the watched timer.
    #[must_use]
    pub fn id(&self) -> TimerId {
        self.id
    }

    /// Returns `true` while the watched handle has not been dropped.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.token.strong_count() > 0
    }
}
