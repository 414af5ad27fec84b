// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The viewport observation capability.
//!
//! A showcase does not detect visibility itself. It subscribes to a
//! [`ViewportObserver`] for each item and is told, through
//! [`ShowcaseController::on_item_enters_viewport`](crate::ShowcaseController::on_item_enters_viewport),
//! when an item crosses into view. The observer may be a platform API
//! wrapper, the geometric [`IntersectionObserver`](crate::IntersectionObserver),
//! or a test fake that fires synthetic events.
//!
//! Subscriptions are drop-guards: dropping a [`Subscription`] is how a
//! subscriber unsubscribes. Observer implementations can use [`Subscribers`]
//! to hand out subscriptions and to check which items are still wanted.

use alloc::rc::{Rc, Weak};

use smallvec::SmallVec;

#[derive(Debug)]
struct Token;

/// A live interest in one item's visibility.
#[must_use = "dropping a Subscription unsubscribes immediately"]
#[derive(Debug)]
pub struct Subscription {
    item: usize,
    _token: Rc<Token>,
}

impl Subscription {
    /// The item this subscription is for.
    #[must_use]
    pub fn item(&self) -> usize {
        self.item
    }

    /// Unsubscribes. Equivalent to dropping the subscription.
    pub fn cancel(self) {}
}

/// Something that reports when items enter the viewport.
pub trait ViewportObserver {
    /// Starts observing `item`; observation stops when the returned
    /// subscription is dropped.
    fn subscribe(&mut self, item: usize) -> Subscription;
}

impl<O: ViewportObserver + ?Sized> ViewportObserver for &mut O {
    fn subscribe(&mut self, item: usize) -> Subscription {
        (**self).subscribe(item)
    }
}

/// Subscription bookkeeping for [`ViewportObserver`] implementations.
///
/// ```rust
/// use understory_showcase::Subscribers;
///
/// let mut subscribers = Subscribers::new();
/// let first = subscribers.subscribe(0);
/// let _second = subscribers.subscribe(1);
/// assert!(subscribers.is_subscribed(0));
///
/// drop(first);
/// assert!(!subscribers.is_subscribed(0));
/// assert_eq!(subscribers.items().collect::<Vec<_>>(), vec![1]);
/// ```
#[derive(Debug, Default)]
pub struct Subscribers {
    entries: SmallVec<[(usize, Weak<Token>); 8]>,
}

impl Subscribers {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers interest in `item`.
    pub fn subscribe(&mut self, item: usize) -> Subscription {
        self.prune();
        let token = Rc::new(Token);
        self.entries.push((item, Rc::downgrade(&token)));
        Subscription {
            item,
            _token: token,
        }
    }

    /// Returns `true` while at least one subscription for `item` is alive.
    #[must_use]
    pub fn is_subscribed(&self, item: usize) -> bool {
        self.entries
            .iter()
            .any(|(i, token)| *i == item && token.strong_count() > 0)
    }

    /// Items with at least one live subscription, in subscription order.
    ///
    /// An item subscribed more than once is reported once per subscription.
    pub fn items(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries
            .iter()
            .filter(|(_, token)| token.strong_count() > 0)
            .map(|(item, _)| *item)
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items().count()
    }

    /// Returns `true` if no subscription is alive.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forgets dropped subscriptions.
    pub fn prune(&mut self) {
        self.entries.retain(|(_, token)| token.strong_count() > 0);
    }
}

/// A bare registry observes nothing by itself; the host decides when items
/// enter view. Useful for hosts with their own visibility source, and in tests.
impl ViewportObserver for Subscribers {
    fn subscribe(&mut self, item: usize) -> Subscription {
        Self::subscribe(self, item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_subscriptions_are_independent() {
        let mut subs = Subscribers::new();
        let a = subs.subscribe(3);
        let b = subs.subscribe(3);
        assert_eq!(subs.len(), 2);

        a.cancel();
        assert!(subs.is_subscribed(3));
        drop(b);
        assert!(!subs.is_subscribed(3));
        assert!(subs.is_empty());
    }

    #[test]
    fn prune_drops_dead_entries() {
        let mut subs = Subscribers::new();
        let keep = subs.subscribe(1);
        drop(subs.subscribe(2));
        subs.prune();
        assert_eq!(subs.entries.len(), 1);
        assert_eq!(keep.item(), 1);
    }
}
