// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The mutable state behind a showcase.

use alloc::vec::Vec;

use hashbrown::{HashMap, HashSet};

use crate::error::ShowcaseError;
use crate::item::{Direction, Item};

/// Visibility, focus, and slide positions for a fixed list of items.
///
/// `ShowcaseState` is pure bookkeeping: it has no timers, no observers, and no
/// geometry. [`ShowcaseController`](crate::ShowcaseController) wraps it with
/// those collaborators, but the state is usable on its own when a host already
/// has its own event plumbing.
///
/// Guarantees, for any sequence of calls:
///
/// - The visible set only grows.
/// - [`active_project`](Self::active_project) is always a valid item index.
/// - [`active_slide`](Self::active_slide) is always within the item's sequence.
/// - [`revision`](Self::revision) changes exactly when observable state changes.
///
/// Every mutator tolerates stale or invalid input (an unknown item index, a
/// slide past the end, an item without slides) by doing nothing and returning
/// `false`.
#[derive(Clone, Debug)]
pub struct ShowcaseState {
    items: Vec<Item>,
    ever_visible: HashSet<usize>,
    active_project: usize,
    /// Sparse: a missing entry means slide 0.
    active_slide: HashMap<usize, usize>,
    revision: u64,
}

impl ShowcaseState {
    /// Creates state for `items`, with nothing visible, the first item in
    /// focus, and every item on its first slide.
    pub fn new(items: impl IntoIterator<Item = Item>) -> Result<Self, ShowcaseError> {
        let items: Vec<Item> = items.into_iter().collect();
        if items.is_empty() {
            return Err(ShowcaseError::NoItems);
        }
        Ok(Self {
            items,
            ever_visible: HashSet::new(),
            active_project: 0,
            active_slide: HashMap::new(),
            revision: 0,
        })
    }

    /// The declared items, in list order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Returns the item at `index`, if declared.
    #[must_use]
    pub fn item(&self, index: usize) -> Option<Item> {
        self.items.get(index).copied()
    }

    /// Number of items. Never zero.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Counter bumped on every observable change. Wraps on overflow, so
    /// compare revisions for equality only.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Records that `index` has been seen.
    ///
    /// Returns `true` only the first time; that is when an entrance animation
    /// should start. Unknown indices are ignored.
    pub fn mark_visible(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            tracing::trace!(index, "ignoring visibility for unknown item");
            return false;
        }
        if !self.ever_visible.insert(index) {
            return false;
        }
        self.bump();
        true
    }

    /// Returns `true` if `index` has ever been reported visible.
    #[must_use]
    pub fn is_visible(&self, index: usize) -> bool {
        self.ever_visible.contains(&index)
    }

    /// Number of items that have been seen so far.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.ever_visible.len()
    }

    /// The item currently in focus.
    #[must_use]
    pub fn active_project(&self) -> usize {
        self.active_project
    }

    /// Moves focus to `index`. Unknown indices are ignored.
    pub fn focus(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            tracing::trace!(index, "ignoring focus on unknown item");
            return false;
        }
        if index == self.active_project {
            return false;
        }
        tracing::debug!(from = self.active_project, to = index, "active project changed");
        self.active_project = index;
        self.bump();
        true
    }

    /// The slide shown for `index`.
    ///
    /// Returns `None` for unknown items and for items without slides.
    #[must_use]
    pub fn active_slide(&self, index: usize) -> Option<usize> {
        let item = self.items.get(index)?;
        if !item.has_slides() {
            return None;
        }
        Some(self.active_slide.get(&index).copied().unwrap_or(0))
    }

    /// Steps the slide of `index` one position in `direction`, wrapping at both ends.
    pub fn advance_slide(&mut self, index: usize, direction: Direction) -> bool {
        let Some(current) = self.active_slide(index) else {
            tracing::trace!(index, ?direction, "ignoring slide step without slides");
            return false;
        };
        let count = self.items[index].slide_count();
        match direction.step(current, count) {
            Some(next) => self.store_slide(index, next),
            None => false,
        }
    }

    /// Shows slide `slide` of `index`.
    ///
    /// Requests past the end of the sequence are rejected rather than clamped.
    pub fn select_slide(&mut self, index: usize, slide: usize) -> bool {
        let Some(item) = self.items.get(index) else {
            tracing::trace!(index, slide, "ignoring slide selection for unknown item");
            return false;
        };
        if slide >= item.slide_count() {
            tracing::trace!(
                index,
                slide,
                count = item.slide_count(),
                "rejecting out-of-range slide"
            );
            return false;
        }
        self.store_slide(index, slide)
    }

    /// Advances every item with more than one slide.
    ///
    /// Returns how many items moved.
    pub fn advance_all(&mut self) -> usize {
        let mut moved = 0;
        for index in 0..self.items.len() {
            if self.items[index].rotates() && self.advance_slide(index, Direction::Next) {
                moved += 1;
            }
        }
        moved
    }

    fn store_slide(&mut self, index: usize, slide: usize) -> bool {
        let previous = self.active_slide.get(&index).copied().unwrap_or(0);
        if previous == slide {
            return false;
        }
        if slide == 0 {
            self.active_slide.remove(&index);
        } else {
            self.active_slide.insert(index, slide);
        }
        self.bump();
        true
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(counts: &[usize]) -> ShowcaseState {
        ShowcaseState::new(counts.iter().copied().map(Item::new)).unwrap()
    }

    #[test]
    fn empty_list_is_rejected() {
        let err = ShowcaseState::new(core::iter::empty()).unwrap_err();
        assert_eq!(err, ShowcaseError::NoItems);
    }

    #[test]
    fn fresh_state() {
        let s = state(&[6, 7, 6]);
        assert_eq!(s.item_count(), 3);
        assert_eq!(s.active_project(), 0);
        assert_eq!(s.visible_count(), 0);
        assert_eq!(s.active_slide(1), Some(0));
        assert_eq!(s.revision(), 0);
    }

    #[test]
    fn mark_visible_is_set_like() {
        let mut s = state(&[6, 7, 6]);
        assert!(s.mark_visible(1));
        assert!(!s.mark_visible(1));
        assert_eq!(s.visible_count(), 1);
        assert!(s.is_visible(1));
        assert!(!s.is_visible(0));
        assert_eq!(s.revision(), 1);
    }

    #[test]
    fn unknown_indices_are_ignored() {
        let mut s = state(&[2, 2]);
        assert!(!s.mark_visible(2));
        assert!(!s.focus(9));
        assert!(!s.advance_slide(5, Direction::Next));
        assert!(!s.select_slide(5, 0));
        assert_eq!(s.active_slide(5), None);
        assert_eq!(s.revision(), 0);
    }

    #[test]
    fn focus_changes_bump_revision_only_on_change() {
        let mut s = state(&[1, 1, 1]);
        assert!(!s.focus(0));
        assert!(s.focus(2));
        assert_eq!(s.active_project(), 2);
        assert_eq!(s.revision(), 1);
    }

    #[test]
    fn advance_wraps_both_ways() {
        let mut s = state(&[6, 7, 6]);
        for _ in 0..6 {
            assert!(s.advance_slide(0, Direction::Next));
        }
        assert_eq!(s.active_slide(0), Some(0));

        assert!(s.advance_slide(0, Direction::Previous));
        assert_eq!(s.active_slide(0), Some(5));
    }

    #[test]
    fn select_slide_rejects_out_of_range() {
        let mut s = state(&[6, 7, 6]);
        assert!(!s.select_slide(2, 99));
        assert_eq!(s.active_slide(2), Some(0));

        assert!(s.select_slide(2, 5));
        assert!(!s.select_slide(2, 6));
        assert_eq!(s.active_slide(2), Some(5));
    }

    #[test]
    fn selecting_the_current_slide_is_a_no_op() {
        let mut s = state(&[3]);
        assert!(!s.select_slide(0, 0));
        assert_eq!(s.revision(), 0);
    }

    #[test]
    fn empty_sequences_never_change() {
        let mut s = state(&[0, 3]);
        assert_eq!(s.active_slide(0), None);
        assert!(!s.advance_slide(0, Direction::Next));
        assert!(!s.advance_slide(0, Direction::Previous));
        assert!(!s.select_slide(0, 0));
        assert_eq!(s.active_slide(0), None);
        assert_eq!(s.revision(), 0);
    }

    #[test]
    fn advance_all_skips_static_items() {
        let mut s = state(&[0, 1, 3, 2]);
        assert_eq!(s.advance_all(), 2);
        assert_eq!(s.active_slide(0), None);
        assert_eq!(s.active_slide(1), Some(0));
        assert_eq!(s.active_slide(2), Some(1));
        assert_eq!(s.active_slide(3), Some(1));

        assert_eq!(s.advance_all(), 2);
        assert_eq!(s.active_slide(3), Some(0));
    }

    #[test]
    fn slide_zero_is_stored_sparsely() {
        let mut s = state(&[2]);
        s.advance_slide(0, Direction::Next);
        s.advance_slide(0, Direction::Next);
        assert_eq!(s.active_slide(0), Some(0));
        assert!(s.active_slide.is_empty());
    }

    #[test]
    fn revision_wraps_on_overflow() {
        let mut s = state(&[3]);
        s.revision = u64::MAX;
        assert!(s.advance_slide(0, Direction::Next));
        assert_eq!(s.revision(), 0);
    }
}
