// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! How an offset change reaches the element.

use core::fmt;

use crate::StickyOptions;

/// A host-side transition on the element's vertical offset.
///
/// Attached once during initialization; every later offset write is then
/// smoothed by the host. Formats as a CSS `transition` value, for example
/// `top 200ms ease-in-out`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    /// Duration in milliseconds.
    pub duration_ms: u32,
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "top {}ms ease-in-out", self.duration_ms)
    }
}

/// A discrete, delayed animation of the element's vertical offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Animation {
    /// Wait before the animation starts, in milliseconds.
    pub delay_ms: u32,
    /// Duration of the animation, in milliseconds.
    pub duration_ms: u32,
}

/// Strategy used to write a new offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApplyStrategy {
    /// Write the offset directly (a transition, if attached, smooths it).
    Immediate,
    /// Halt any running animation, then run this one.
    Scheduled(Animation),
}

impl ApplyStrategy {
    /// Picks the strategy described by `options`.
    #[must_use]
    pub fn from_options(options: &StickyOptions) -> Self {
        if options.animate {
            Self::Scheduled(Animation {
                delay_ms: options.anim_delay,
                duration_ms: options.anim_time,
            })
        } else {
            Self::Immediate
        }
    }
}
