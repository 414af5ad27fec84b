// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The showcase controller: state plus its collaborators.

use alloc::vec;
use alloc::vec::Vec;
use core::ops::Range;
use core::time::Duration;

use understory_timing::{Scheduler, TimerHandle, TimerId};

use crate::error::ShowcaseError;
use crate::focus::FocusPolicy;
use crate::item::{Direction, Item};
use crate::observer::{Subscription, ViewportObserver};
use crate::snapshot::ShowcaseSnapshot;
use crate::state::ShowcaseState;

/// Auto-advance interval used by [`ShowcaseConfig::default`].
pub const DEFAULT_AUTO_ADVANCE: Duration = Duration::from_millis(4_000);

/// Construction-time settings for a [`ShowcaseController`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ShowcaseConfig {
    /// Interval between auto-advance ticks, or `None` to only move slides on
    /// explicit requests.
    pub auto_advance: Option<Duration>,
    /// How the focused item follows the viewport center.
    pub focus: FocusPolicy,
}

impl ShowcaseConfig {
    /// Returns this config with a different auto-advance interval.
    #[must_use]
    pub const fn with_auto_advance(mut self, interval: Option<Duration>) -> Self {
        self.auto_advance = interval;
        self
    }

    /// Returns this config with a different focus policy.
    #[must_use]
    pub const fn with_focus(mut self, focus: FocusPolicy) -> Self {
        self.focus = focus;
        self
    }
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            auto_advance: Some(DEFAULT_AUTO_ADVANCE),
            focus: FocusPolicy::default(),
        }
    }
}

/// Drives a [`ShowcaseState`] from viewport, timer, and user signals.
///
/// A controller is created with [`mount`](Self::mount), which subscribes to a
/// [`ViewportObserver`] for every item and, when auto-advance is enabled and
/// some item has more than one slide, registers a repeating timer with a
/// [`Scheduler`]. The controller owns those subscriptions and that timer:
/// dropping it (or calling [`unmount`](Self::unmount)) releases all of them,
/// so nothing can fire against a discarded showcase.
///
/// The host is responsible for:
///
/// - Forwarding entered items from its observer to
///   [`on_item_enters_viewport`](Self::on_item_enters_viewport).
/// - Reporting measured item extents with [`set_item_region`](Self::set_item_region)
///   and forwarding scroll events to
///   [`on_scroll_position_changed`](Self::on_scroll_position_changed).
/// - Routing fired timer ids to [`on_timer`](Self::on_timer).
/// - Rendering from [`snapshot`](Self::snapshot).
///
/// All methods take `&mut self` and complete immediately, so signals are
/// applied strictly in arrival order.
#[derive(Debug)]
pub struct ShowcaseController {
    state: ShowcaseState,
    config: ShowcaseConfig,
    regions: Vec<Option<Range<f64>>>,
    subscriptions: Vec<Subscription>,
    auto_advance: Option<TimerHandle>,
}

impl ShowcaseController {
    /// Creates a controller for `items` and acquires its subscriptions and timer.
    ///
    /// On error nothing stays registered: anything acquired before the failure
    /// is released on the way out.
    pub fn mount<S, O>(
        items: impl IntoIterator<Item = Item>,
        config: ShowcaseConfig,
        scheduler: &mut S,
        observer: &mut O,
    ) -> Result<Self, ShowcaseError>
    where
        S: Scheduler + ?Sized,
        O: ViewportObserver + ?Sized,
    {
        if config.auto_advance.is_some_and(|interval| interval.is_zero()) {
            return Err(ShowcaseError::ZeroAutoAdvanceInterval);
        }
        let state = ShowcaseState::new(items)?;
        let count = state.item_count();

        let subscriptions = (0..count).map(|index| observer.subscribe(index)).collect();
        let auto_advance = match config.auto_advance {
            Some(interval) if state.items().iter().any(Item::rotates) => {
                Some(scheduler.schedule_repeating(interval))
            }
            _ => None,
        };

        tracing::debug!(
            items = count,
            auto_advance = ?config.auto_advance,
            focus = ?config.focus,
            "mounted showcase"
        );
        Ok(Self {
            state,
            config,
            regions: vec![None; count],
            subscriptions,
            auto_advance,
        })
    }

    /// Releases every subscription and timer. Equivalent to dropping the controller.
    pub fn unmount(self) {}

    /// The configuration the controller was mounted with.
    #[must_use]
    pub fn config(&self) -> ShowcaseConfig {
        self.config
    }

    /// Direct read access to the underlying state.
    #[must_use]
    pub fn state(&self) -> &ShowcaseState {
        &self.state
    }

    /// A read-only view for rendering.
    #[must_use]
    pub fn snapshot(&self) -> ShowcaseSnapshot<'_> {
        ShowcaseSnapshot::new(&self.state)
    }

    /// The subscriptions held on behalf of each item, in item order.
    #[must_use]
    pub fn subscriptions(&self) -> &[Subscription] {
        &self.subscriptions
    }

    /// Records that `index` crossed into view.
    ///
    /// Returns `true` the first time only; repeat reports must not replay the
    /// entrance animation. Stale indices are ignored.
    pub fn on_item_enters_viewport(&mut self, index: usize) -> bool {
        self.state.mark_visible(index)
    }

    /// Forwards a batch of entered items, returning how many were new.
    pub fn apply_entered(&mut self, items: impl IntoIterator<Item = usize>) -> usize {
        items
            .into_iter()
            .filter(|&index| self.on_item_enters_viewport(index))
            .count()
    }

    /// Records the extent of `index` along the scroll axis.
    ///
    /// Ignored for unknown items and for ranges that are inverted or not finite.
    pub fn set_item_region(&mut self, index: usize, region: Range<f64>) -> bool {
        let valid = region.start.is_finite() && region.end.is_finite() && region.start <= region.end;
        match self.regions.get_mut(index) {
            Some(slot) if valid => {
                *slot = Some(region);
                true
            }
            _ => {
                tracing::trace!(index, ?region, "ignoring item region");
                false
            }
        }
    }

    /// Replaces all item extents, in item order.
    ///
    /// Items beyond the end of `regions` become unmeasured; extra regions are
    /// ignored.
    pub fn set_item_regions(&mut self, regions: impl IntoIterator<Item = Range<f64>>) {
        self.regions.iter_mut().for_each(|slot| *slot = None);
        for (index, region) in regions.into_iter().enumerate().take(self.regions.len()) {
            self.set_item_region(index, region);
        }
    }

    /// Forgets the measured extent of `index`.
    pub fn clear_item_region(&mut self, index: usize) {
        if let Some(slot) = self.regions.get_mut(index) {
            *slot = None;
        }
    }

    /// The measured extent of `index`, if any.
    #[must_use]
    pub fn item_region(&self, index: usize) -> Option<Range<f64>> {
        self.regions.get(index)?.clone()
    }

    /// Updates the focused item for a viewport centered at `center_y`.
    ///
    /// If the focus policy finds no candidate the current focus is kept.
    /// Returns `true` if the focused item changed.
    pub fn on_scroll_position_changed(&mut self, center_y: f64) -> bool {
        match self.config.focus.pick(center_y, &self.regions) {
            Some(index) => self.state.focus(index),
            None => false,
        }
    }

    /// Steps the slide of `index` in `direction`, wrapping at both ends.
    pub fn advance_slide(&mut self, index: usize, direction: Direction) -> bool {
        self.state.advance_slide(index, direction)
    }

    /// Shows slide `slide` of `index`; out-of-range requests are rejected.
    pub fn select_slide(&mut self, index: usize, slide: usize) -> bool {
        self.state.select_slide(index, slide)
    }

    /// Advances every item with more than one slide, as one auto-advance tick.
    ///
    /// Returns how many items moved.
    pub fn tick(&mut self) -> usize {
        let moved = self.state.advance_all();
        tracing::trace!(moved, "auto-advance tick");
        moved
    }

    /// Handles a fired timer.
    ///
    /// Returns `true` if `id` is this controller's auto-advance timer, in
    /// which case one tick has been applied.
    pub fn on_timer(&mut self, id: TimerId) -> bool {
        if self.auto_advance.as_ref().map(TimerHandle::id) != Some(id) {
            return false;
        }
        self.tick();
        true
    }

    /// Returns `true` while the auto-advance timer is registered.
    #[must_use]
    pub fn is_auto_advancing(&self) -> bool {
        self.auto_advance.is_some()
    }

    /// Cancels auto-advance for the rest of the controller's life.
    pub fn stop_auto_advance(&mut self) {
        if let Some(timer) = self.auto_advance.take() {
            tracing::debug!(timer = ?timer.id(), "stopping auto-advance");
            timer.cancel();
        }
    }
}

impl Drop for ShowcaseController {
    fn drop(&mut self) {
        tracing::debug!(
            subscriptions = self.subscriptions.len(),
            auto_advance = self.auto_advance.is_some(),
            "unmounting showcase"
        );
    }
}
