// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_showcase --heading-base-level=0

//! Understory Showcase: viewport-reactive state for scrolling project showcases.
//!
//! A showcase is a vertical list of items (projects), each with a sequence of
//! slides (screenshots). As the page scrolls, items animate in the first time
//! they are seen, the item nearest the middle of the viewport becomes the
//! "active" one (useful for ambient theming), and each item's slides can be
//! stepped by the user or advanced automatically on a timer.
//!
//! The core pieces are:
//!
//! - [`Item`] and [`Direction`]: an item's slide count and wrap-around stepping.
//! - [`ShowcaseState`]: the bookkeeping. Which items have ever been visible,
//!   which one is active, and which slide each item shows.
//! - [`ShowcaseController`]: the state plus its collaborators. It subscribes to
//!   a [`ViewportObserver`], registers an auto-advance timer with an
//!   [`understory_timing::Scheduler`], and releases both when dropped.
//! - [`FocusPolicy`]: how the active item follows the viewport center.
//! - [`IntersectionObserver`]: a [`ViewportObserver`] computed from layout
//!   rectangles and a [`VisibilityThreshold`].
//! - [`CueTimeline`]: staged, timer-driven entrance animations.
//! - [`ShowcaseSnapshot`]: the read-only view renderers consume.
//!
//! This crate does **not** render, lay out, or own an event loop. Hosts feed it
//! scroll positions, measured item extents, intersection reports, and fired
//! timer ids, then paint from a snapshot.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use understory_showcase::{
//!     Direction, Item, ShowcaseConfig, ShowcaseController, SlideView, Subscribers,
//! };
//! use understory_timing::TimerQueue;
//!
//! let mut timers = TimerQueue::new();
//! let mut observer = Subscribers::new();
//! let mut showcase = ShowcaseController::mount(
//!     [Item::new(6), Item::new(7), Item::new(0)],
//!     ShowcaseConfig::default(),
//!     &mut timers,
//!     &mut observer,
//! )
//! .unwrap();
//!
//! // Layout: each item is a 900-unit-tall panel.
//! showcase.set_item_regions([0.0..900.0, 900.0..1800.0, 1800.0..2700.0]);
//!
//! // The second panel scrolls into view and reaches the middle of the screen.
//! assert!(showcase.on_item_enters_viewport(1));
//! assert!(showcase.on_scroll_position_changed(1_200.0));
//!
//! // User clicks "previous" on the first item: wraps to its last slide.
//! showcase.advance_slide(0, Direction::Previous);
//!
//! // Four seconds later the carousel auto-advances.
//! for id in timers.advance_by(Duration::from_secs(4)) {
//!     showcase.on_timer(id);
//! }
//!
//! let snapshot = showcase.snapshot();
//! assert_eq!(snapshot.active_project(), 1);
//! assert_eq!(snapshot.active_slide(0), Some(0));
//! assert_eq!(snapshot.active_slide(1), Some(1));
//! assert_eq!(snapshot.slide(2), Some(SlideView::Placeholder));
//!
//! // Unmounting cancels the timer and the subscriptions.
//! showcase.unmount();
//! assert!(timers.is_empty());
//! assert!(observer.is_empty());
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards to `kurbo/std`.
//! - `libm`: forwards to `kurbo/libm` for `no_std` targets.
//!
//! Controllers, timers, and subscriptions are single-threaded (`!Send`); they
//! belong to the event loop that created them.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod controller;
mod cue;
mod error;
mod focus;
mod intersection;
mod item;
mod observer;
mod snapshot;
mod state;

pub use controller::{DEFAULT_AUTO_ADVANCE, ShowcaseConfig, ShowcaseController};
pub use cue::{CueTimeline, IntroCue};
pub use error::ShowcaseError;
pub use focus::FocusPolicy;
pub use intersection::{IntersectionObserver, VisibilityThreshold};
pub use item::{Direction, Item};
pub use observer::{Subscribers, Subscription, ViewportObserver};
pub use snapshot::{ShowcaseSnapshot, SlideView};
pub use state::ShowcaseState;
