// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Splash and hero entrance cues.
//!
//! Play the splash screen timeline, then hand over to the hero section's own
//! timeline, stepping a virtual clock in 100ms frames.
//!
//! Run:
//! - `cargo run -p understory_demos --example intro_cues`

use core::time::Duration;

use understory_demos::init_tracing;
use understory_showcase::{CueTimeline, IntroCue};
use understory_timing::TimerQueue;

const FRAME: Duration = Duration::from_millis(100);

fn main() {
    init_tracing();

    let mut timers = TimerQueue::new();
    let mut splash = CueTimeline::start(IntroCue::SPLASH, &mut timers);

    while !splash.has_reached(IntroCue::Complete) {
        for id in timers.advance_by(FRAME) {
            if let Some(cue) = splash.on_timer(id) {
                tracing::info!(at = ?timers.now(), ?cue, "splash");
            }
        }
    }
    drop(splash);

    let mut hero = CueTimeline::start(IntroCue::HERO, &mut timers);
    while !hero.is_finished() {
        for id in timers.advance_by(FRAME) {
            if let Some(cue) = hero.on_timer(id) {
                tracing::info!(at = ?timers.now(), ?cue, "hero");
            }
        }
    }
}
