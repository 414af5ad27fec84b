// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the headless showcase demos.

use kurbo::Rect;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Installs a `fmt` subscriber filtered by `RUST_LOG`, defaulting to `debug`.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).without_time())
        .with(env_filter)
        .init();
}

/// A page of full-height panels stacked vertically, one per showcased project.
#[derive(Clone, Debug)]
pub struct PanelPage {
    /// Viewport width and height.
    pub viewport: (f64, f64),
    /// Height of the header above the first panel.
    pub header: f64,
    /// Height of each panel.
    pub panel: f64,
    /// Number of panels.
    pub panels: usize,
}

impl PanelPage {
    /// Bounds of panel `index` in page coordinates.
    pub fn panel_rect(&self, index: usize) -> Rect {
        let top = self.header + index as f64 * self.panel;
        Rect::new(0.0, top, self.viewport.0, top + self.panel)
    }

    /// Bounds of every panel, paired with its index.
    pub fn panel_rects(&self) -> impl Iterator<Item = (usize, Rect)> + '_ {
        (0..self.panels).map(|i| (i, self.panel_rect(i)))
    }

    /// Vertical extents of every panel.
    pub fn panel_regions(&self) -> impl Iterator<Item = core::ops::Range<f64>> + '_ {
        self.panel_rects().map(|(_, r)| r.y0..r.y1)
    }

    /// The viewport when scrolled to `scroll_y`.
    pub fn viewport_at(&self, scroll_y: f64) -> Rect {
        Rect::new(0.0, scroll_y, self.viewport.0, scroll_y + self.viewport.1)
    }

    /// Total scrollable height.
    pub fn height(&self) -> f64 {
        self.header + self.panels as f64 * self.panel
    }
}
