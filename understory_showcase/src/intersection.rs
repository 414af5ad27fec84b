// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A geometric viewport observer.

use hashbrown::HashSet;
use kurbo::Rect;
use smallvec::SmallVec;

use crate::observer::{Subscribers, Subscription, ViewportObserver};

/// When an item counts as "in view".
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VisibilityThreshold {
    /// Fraction of the item's area, in `[0, 1]`, that must lie inside the
    /// viewport. `0.0` means "touching is enough".
    pub ratio: f64,
    /// Amount the viewport is grown by on every side before testing. Negative
    /// values shrink it, so items must travel further in before they count.
    pub root_margin: f64,
}

impl VisibilityThreshold {
    /// A fifth of the item visible, no margin. Suits full-height project panels.
    pub const DEFAULT: Self = Self {
        ratio: 0.2,
        root_margin: 0.0,
    };

    /// A tenth of the item visible inside a viewport shrunk by 50 units.
    /// Suits short narrative sections.
    pub const SECTION: Self = Self {
        ratio: 0.1,
        root_margin: -50.0,
    };

    /// Fraction of `bounds` inside `viewport` (after applying the root margin).
    ///
    /// Returns `None` when the two do not touch at all, or when either
    /// rectangle has a non-finite coordinate. A zero-area item that touches
    /// the viewport counts as fully inside.
    #[must_use]
    pub fn visible_ratio(&self, viewport: Rect, bounds: Rect) -> Option<f64> {
        // Checked before `abs`, whose `min`/`max` would swallow NaN.
        if !viewport.is_finite() || !bounds.is_finite() {
            return None;
        }
        let root = viewport.abs().inflate(self.root_margin, self.root_margin);
        if !root.is_finite() {
            return None;
        }
        let bounds = bounds.abs();
        let x0 = bounds.x0.max(root.x0);
        let x1 = bounds.x1.min(root.x1);
        let y0 = bounds.y0.max(root.y0);
        let y1 = bounds.y1.min(root.y1);
        if x1 < x0 || y1 < y0 {
            return None;
        }
        let area = bounds.area();
        if area <= 0.0 {
            return Some(1.0);
        }
        Some(((x1 - x0) * (y1 - y0) / area).min(1.0))
    }

    /// Returns `true` if `bounds` is visible enough inside `viewport`.
    #[must_use]
    pub fn is_met(&self, viewport: Rect, bounds: Rect) -> bool {
        self.visible_ratio(viewport, bounds)
            .is_some_and(|ratio| ratio >= self.ratio)
    }
}

impl Default for VisibilityThreshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A [`ViewportObserver`] computed from layout rectangles.
///
/// The host calls [`update`](Self::update) whenever scroll position or layout
/// changes, passing the viewport and the current bounds of each item. The
/// observer reports each subscribed item once per crossing from "not
/// intersecting" to "intersecting"; an item has to leave and come back to be
/// reported again.
///
/// ```rust
/// use kurbo::Rect;
/// use understory_showcase::{IntersectionObserver, ViewportObserver, VisibilityThreshold};
///
/// let mut observer = IntersectionObserver::new(VisibilityThreshold::DEFAULT);
/// let _sub = observer.subscribe(0);
///
/// let panel = Rect::new(0.0, 900.0, 800.0, 1700.0);
/// let viewport_at = |y: f64| Rect::new(0.0, y, 800.0, y + 800.0);
///
/// // 100 of 800 units visible: not enough yet.
/// assert!(observer.update(viewport_at(200.0), [(0, panel)]).is_empty());
/// // 400 of 800 units visible.
/// assert_eq!(observer.update(viewport_at(500.0), [(0, panel)]).as_slice(), &[0]);
/// // Still visible: no new report.
/// assert!(observer.update(viewport_at(600.0), [(0, panel)]).is_empty());
/// ```
#[derive(Debug, Default)]
pub struct IntersectionObserver {
    threshold: VisibilityThreshold,
    subscribers: Subscribers,
    intersecting: HashSet<usize>,
}

impl IntersectionObserver {
    /// Creates an observer with the given threshold and no subscriptions.
    #[must_use]
    pub fn new(threshold: VisibilityThreshold) -> Self {
        Self {
            threshold,
            subscribers: Subscribers::new(),
            intersecting: HashSet::new(),
        }
    }

    /// The active threshold.
    #[must_use]
    pub fn threshold(&self) -> VisibilityThreshold {
        self.threshold
    }

    /// Returns `true` if `item` was intersecting at the last update.
    #[must_use]
    pub fn is_intersecting(&self, item: usize) -> bool {
        self.intersecting.contains(&item)
    }

    /// Re-evaluates intersections and returns the items that entered view.
    ///
    /// Items without a live subscription are skipped and forgotten. Items that
    /// are not listed in `bounds` keep their previous status.
    pub fn update(
        &mut self,
        viewport: Rect,
        bounds: impl IntoIterator<Item = (usize, Rect)>,
    ) -> SmallVec<[usize; 8]> {
        self.subscribers.prune();
        let subscribers = &self.subscribers;
        self.intersecting
            .retain(|item| subscribers.is_subscribed(*item));

        let mut entered = SmallVec::new();
        for (item, rect) in bounds {
            if !self.subscribers.is_subscribed(item) {
                continue;
            }
            if self.threshold.is_met(viewport, rect) {
                if self.intersecting.insert(item) {
                    tracing::trace!(item, "item entered viewport");
                    entered.push(item);
                }
            } else {
                self.intersecting.remove(&item);
            }
        }
        entered
    }
}

impl ViewportObserver for IntersectionObserver {
    fn subscribe(&mut self, item: usize) -> Subscription {
        self.subscribers.subscribe(item)
    }
}
