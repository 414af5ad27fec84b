// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Reasons a showcase cannot be constructed.
///
/// Runtime signals never produce errors; they are ignored when they do not
/// apply. Only construction is fallible.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShowcaseError {
    /// The item list was empty, so there is no item to focus initially.
    NoItems,
    /// Auto-advance was requested with a zero interval.
    ZeroAutoAdvanceInterval,
}

impl fmt::Display for ShowcaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoItems => f.write_str("a showcase needs at least one item"),
            Self::ZeroAutoAdvanceInterval => {
                f.write_str("auto-advance interval must be greater than zero")
            }
        }
    }
}

impl core::error::Error for ShowcaseError {}
