// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Choosing the focused item from the viewport center.

use core::ops::Range;

/// How the focused item is derived from the viewport's vertical center.
///
/// Regions are `[start, end)` extents along the scroll axis, in the same
/// coordinate space as the center passed to
/// [`ShowcaseController::on_scroll_position_changed`](crate::ShowcaseController::on_scroll_position_changed).
/// Unmeasured items (`None`) never qualify.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FocusPolicy {
    /// The first item, in list order, whose region contains the center.
    ///
    /// Between sections nothing qualifies and focus stays where it was.
    #[default]
    FirstStraddling,
    /// The item whose region midpoint is closest to the center; ties go to the
    /// lower index.
    ///
    /// Always picks something once any region is measured.
    NearestCenter,
}

impl FocusPolicy {
    /// Returns the item to focus for `center`, or `None` to keep the current one.
    #[must_use]
    pub fn pick(self, center: f64, regions: &[Option<Range<f64>>]) -> Option<usize> {
        if !center.is_finite() {
            return None;
        }
        let measured = regions
            .iter()
            .enumerate()
            .filter_map(|(index, region)| region.as_ref().map(|r| (index, r)));
        match self {
            Self::FirstStraddling => measured
                .filter(|(_, r)| r.contains(&center))
                .map(|(index, _)| index)
                .next(),
            Self::NearestCenter => {
                let mut best: Option<(usize, f64)> = None;
                for (index, r) in measured {
                    let distance = ((r.start + r.end) * 0.5 - center).abs();
                    if best.is_none_or(|(_, d)| distance < d) {
                        best = Some((index, distance));
                    }
                }
                best.map(|(index, _)| index)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn first_straddling_uses_half_open_regions() {
        let regions = vec![Some(0.0..100.0), Some(100.0..200.0), Some(200.0..300.0)];
        let policy = FocusPolicy::FirstStraddling;
        assert_eq!(policy.pick(0.0, &regions), Some(0));
        assert_eq!(policy.pick(99.9, &regions), Some(0));
        assert_eq!(policy.pick(100.0, &regions), Some(1));
        assert_eq!(policy.pick(300.0, &regions), None);
    }

    #[test]
    fn first_straddling_prefers_list_order_on_overlap() {
        let regions = vec![Some(50.0..150.0), Some(0.0..200.0)];
        assert_eq!(FocusPolicy::FirstStraddling.pick(60.0, &regions), Some(0));
        assert_eq!(FocusPolicy::FirstStraddling.pick(10.0, &regions), Some(1));
    }

    #[test]
    fn gaps_and_unmeasured_items_keep_focus() {
        let regions = vec![Some(0.0..100.0), None, Some(400.0..500.0)];
        assert_eq!(FocusPolicy::FirstStraddling.pick(250.0, &regions), None);
    }

    #[test]
    fn nearest_center_bridges_gaps() {
        let regions = vec![Some(0.0..100.0), None, Some(400.0..500.0)];
        let policy = FocusPolicy::NearestCenter;
        assert_eq!(policy.pick(200.0, &regions), Some(0));
        assert_eq!(policy.pick(300.0, &regions), Some(2));
        // Equidistant from both midpoints.
        assert_eq!(policy.pick(250.0, &regions), Some(0));
    }

    #[test]
    fn nearest_center_needs_a_measurement() {
        let regions: [Option<Range<f64>>; 2] = [None, None];
        assert_eq!(FocusPolicy::NearestCenter.pick(0.0, &regions), None);
    }

    #[test]
    fn non_finite_centers_are_ignored() {
        let regions = vec![Some(f64::NEG_INFINITY..f64::INFINITY)];
        assert_eq!(FocusPolicy::FirstStraddling.pick(f64::NAN, &regions), None);
        assert_eq!(FocusPolicy::NearestCenter.pick(f64::INFINITY, &regions), None);
    }
}
