// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Showcase items and slide stepping.

/// One showcased entry with its own slide sequence.
///
/// An item's identity is its position in the list handed to
/// [`ShowcaseState::new`](crate::ShowcaseState::new); the item itself only
/// carries how many slides it has. A count of zero is allowed and means the
/// renderer should show a placeholder.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Item {
    slide_count: usize,
}

impl Item {
    /// Creates an item with `slide_count` slides.
    #[must_use]
    pub const fn new(slide_count: usize) -> Self {
        Self { slide_count }
    }

    /// Number of slides in this item's sequence.
    #[must_use]
    pub const fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Returns `true` if the item has at least one slide.
    #[must_use]
    pub const fn has_slides(&self) -> bool {
        self.slide_count > 0
    }

    /// Returns `true` if the item takes part in auto-advance.
    #[must_use]
    pub const fn rotates(&self) -> bool {
        self.slide_count > 1
    }
}

impl From<usize> for Item {
    fn from(slide_count: usize) -> Self {
        Self::new(slide_count)
    }
}

/// Direction of a single slide step.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards the next slide, wrapping from the last back to the first.
    Next,
    /// Towards the previous slide, wrapping from the first to the last.
    Previous,
}

impl Direction {
    /// Returns the slide reached from `current` in a sequence of `count` slides.
    ///
    /// Returns `None` when `count` is zero; there is nothing to step through.
    /// A `current` outside `0..count` is reduced modulo `count` first.
    #[must_use]
    pub fn step(self, current: usize, count: usize) -> Option<usize> {
        if count == 0 {
            return None;
        }
        let current = current % count;
        Some(match self {
            Self::Next => (current + 1) % count,
            Self::Previous => current.checked_sub(1).unwrap_or(count - 1),
        })
    }
}
