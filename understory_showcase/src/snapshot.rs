// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Read-only view handed to renderers.

use crate::state::ShowcaseState;

/// What to paint in an item's slide area.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SlideView {
    /// Slide `index` of a `count`-slide sequence.
    Showing {
        /// Zero-based slide index, always `< count`.
        index: usize,
        /// Length of the sequence, always `> 0`.
        count: usize,
    },
    /// The item has no slides.
    Placeholder,
}

/// A borrowed, read-only view of a showcase.
///
/// Nothing reachable from a snapshot can mutate the showcase, so renderers may
/// hold one for the duration of a paint.
#[derive(Copy, Clone, Debug)]
pub struct ShowcaseSnapshot<'a> {
    state: &'a ShowcaseState,
}

impl<'a> ShowcaseSnapshot<'a> {
    pub(crate) fn new(state: &'a ShowcaseState) -> Self {
        Self { state }
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.item_count()
    }

    /// Always `false`: a showcase has at least one item.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns `true` once `index` has been seen.
    #[must_use]
    pub fn is_visible(&self, index: usize) -> bool {
        self.state.is_visible(index)
    }

    /// The item in focus.
    #[must_use]
    pub fn active_project(&self) -> usize {
        self.state.active_project()
    }

    /// The slide shown for `index`; see [`ShowcaseState::active_slide`].
    #[must_use]
    pub fn active_slide(&self, index: usize) -> Option<usize> {
        self.state.active_slide(index)
    }

    /// What to paint for `index`, or `None` for an unknown item.
    #[must_use]
    pub fn slide(&self, index: usize) -> Option<SlideView> {
        let item = self.state.item(index)?;
        Some(match self.state.active_slide(index) {
            Some(slide) => SlideView::Showing {
                index: slide,
                count: item.slide_count(),
            },
            None => SlideView::Placeholder,
        })
    }

    /// Revision of the underlying state at the time of the snapshot.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.state.revision()
    }
}
