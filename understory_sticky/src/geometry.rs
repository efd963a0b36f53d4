// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-range geometry and placement resolution.
//!
//! Everything here is pure: callers feed in measurements and get back the
//! boundaries of the sticky range and the offset an element should take for a
//! given scroll position.

/// Derived scroll-range boundaries of a sticky element, in page coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Boundaries {
    /// Top of the element relative to its parent when the element is at rest.
    pub offset_within_parent: f64,
    /// Page scroll position where the element starts tracking.
    pub range_start: f64,
    /// Rendered height of the parent.
    pub parent_height: f64,
    /// Page scroll position where the parent's remaining space ends.
    ///
    /// Equals `range_start + parent_height - offset_within_parent`.
    pub range_end: f64,
}

impl Boundaries {
    /// Computes boundaries from the parent's page top, its height, and the
    /// element's offset within it.
    #[must_use]
    pub fn compute(parent_top: f64, parent_height: f64, offset_within_parent: f64) -> Self {
        let range_start = parent_top + offset_within_parent;
        Self {
            offset_within_parent,
            range_start,
            parent_height,
            range_end: range_start + parent_height - offset_within_parent,
        }
    }

    /// Returns `true` if an element of `element_height` fits in the space
    /// left below its resting position.
    ///
    /// Elements that do not fit never move.
    #[must_use]
    pub fn fits(&self, element_height: f64) -> bool {
        self.parent_height - self.offset_within_parent > element_height
    }

    /// Offset that aligns the element's bottom edge with the parent's.
    #[must_use]
    pub fn bottom_offset(&self, element_height: f64) -> f64 {
        self.parent_height - element_height - self.offset_within_parent
    }

    /// Resolves where an element of `element_height` belongs for `scroll_top`.
    ///
    /// `scroll_top` already includes any configured extra offset.
    #[must_use]
    pub fn resolve(&self, scroll_top: f64, element_height: f64) -> Placement {
        if !self.fits(element_height) {
            return Placement::Unfit;
        }
        let effective_end = self.range_end - element_height;
        if scroll_top < self.range_start {
            Placement::PinnedTop
        } else if scroll_top > effective_end {
            Placement::PinnedBottom(self.bottom_offset(element_height))
        } else {
            Placement::Tracking(scroll_top - self.range_start)
        }
    }
}

/// Where a sticky element sits for a particular scroll position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Placement {
    /// The element is taller than the space below its resting position and
    /// stays where layout put it.
    Unfit,
    /// The element follows the scroll position at the given offset.
    Tracking(f64),
    /// The element rests at the top of its range (offset `0`).
    PinnedTop,
    /// The element rests against the bottom of its parent at the given offset.
    PinnedBottom(f64),
}

impl Placement {
    /// The offset to apply, or `None` for [`Placement::Unfit`].
    #[must_use]
    pub fn offset(self) -> Option<f64> {
        match self {
            Self::Unfit => None,
            Self::Tracking(y) | Self::PinnedBottom(y) => Some(y),
            Self::PinnedTop => Some(0.0),
        }
    }

    /// Returns `true` for the two pinned placements.
    #[must_use]
    pub fn is_pinned(self) -> bool {
        matches!(self, Self::PinnedTop | Self::PinnedBottom(_))
    }
}
