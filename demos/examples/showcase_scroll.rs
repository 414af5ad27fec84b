// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Showcase scrolling basics.
//!
//! Scroll a page of three project panels from top to bottom while the
//! carousels auto-advance, and print what a renderer would react to.
//!
//! Run:
//! - `cargo run -p understory_demos --example showcase_scroll`
//! - `RUST_LOG=trace cargo run -p understory_demos --example showcase_scroll`

use core::time::Duration;

use understory_demos::{PanelPage, init_tracing};
use understory_showcase::{
    Direction, IntersectionObserver, Item, ShowcaseConfig, ShowcaseController, SlideView,
    VisibilityThreshold,
};
use understory_timing::TimerQueue;

const FRAME: Duration = Duration::from_millis(16);

fn main() {
    init_tracing();

    let projects = [("Narbl", 6), ("NeuraNote", 7), ("Spotify", 6)];
    let page = PanelPage {
        viewport: (1_280.0, 800.0),
        header: 400.0,
        panel: 900.0,
        panels: projects.len(),
    };

    let mut timers = TimerQueue::new();
    let mut observer = IntersectionObserver::new(VisibilityThreshold::DEFAULT);
    let mut showcase = match ShowcaseController::mount(
        projects.iter().map(|&(_, slides)| Item::new(slides)),
        ShowcaseConfig::default(),
        &mut timers,
        &mut observer,
    ) {
        Ok(showcase) => showcase,
        Err(err) => {
            eprintln!("cannot mount showcase: {err}");
            return;
        }
    };
    showcase.set_item_regions(page.panel_regions());

    // Scroll at a steady 600 units per second.
    let max_scroll = page.height() - page.viewport.1;
    let mut scroll_y = 0.0;
    let mut last_revision = showcase.snapshot().revision();
    let mut frame = 0_u32;
    while scroll_y < max_scroll {
        frame += 1;
        scroll_y = (scroll_y + 600.0 * FRAME.as_secs_f64()).min(max_scroll);

        for id in timers.advance_by(FRAME) {
            showcase.on_timer(id);
        }
        for item in observer.update(page.viewport_at(scroll_y), page.panel_rects()) {
            if showcase.on_item_enters_viewport(item) {
                tracing::info!(frame, project = projects[item].0, "animates in");
            }
        }
        if showcase.on_scroll_position_changed(scroll_y + page.viewport.1 * 0.5) {
            let active = showcase.snapshot().active_project();
            tracing::info!(frame, project = projects[active].0, "background tint");
        }

        // A visitor clicks "previous" on the second project halfway down.
        if frame == 150 {
            showcase.advance_slide(1, Direction::Previous);
        }

        let snapshot = showcase.snapshot();
        if snapshot.revision() != last_revision {
            last_revision = snapshot.revision();
            print_slides(frame, &projects, &showcase);
        }
    }

    showcase.unmount();
    println!("unmounted; {} timers left armed", timers.len());
}

fn print_slides(frame: u32, projects: &[(&str, usize)], showcase: &ShowcaseController) {
    let snapshot = showcase.snapshot();
    let mut line = format!("frame {frame:4}: slides");
    for (index, (name, _)) in projects.iter().enumerate() {
        match snapshot.slide(index) {
            Some(SlideView::Showing { index, count }) => {
                line.push_str(&format!(" {name} {}/{count}", index + 1));
            }
            Some(SlideView::Placeholder) => line.push_str(&format!(" {name} (coming soon)")),
            None => {}
        }
    }
    println!("{line}");
}
