// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_sticky --heading-base-level=0

//! Understory Sticky: keep an element within its container while the page scrolls.
//!
//! A sticky element follows the page scroll position as long as its parent
//! container is on screen, and comes to rest against the parent's top or bottom
//! edge once the scroll position leaves that range. This crate is a headless
//! model of that behavior:
//!
//! - [`Boundaries`] and [`Placement`]: pure geometry. Given the parent's page
//!   top and height plus the element's resting offset, compute the scroll range
//!   and where the element belongs for a scroll position.
//! - [`StickyController`]: one per element. Applies placements through a
//!   [`StickyHost`], suppresses redundant writes, supports freezing, and emits
//!   [`StickyEvent`]s to observers.
//! - [`StickyManager`]: owns all controllers and dispatches page-level events
//!   (scroll, resize, and a periodic parent-height [`PollSchedule`]). It also
//!   offers a string-driven [`StickyManager::bind`] entry point for scripting
//!   layers.
//!
//! The crate does **not** own any nodes or touch a DOM. Hosts implement
//! [`StickyHost`] to measure nodes and write the element's vertical offset,
//! either immediately, smoothed by a host-side [`Transition`], or as a delayed
//! [`Animation`] (see [`ApplyStrategy`]).
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use understory_sticky::{
//!     Animation, Binding, OptionsPatch, StickyHost, StickyManager, Transition,
//! };
//!
//! /// A page with one 1000px container at y=100 and a 100px sticky child.
//! struct Page {
//!     scroll: f64,
//!     offset: f64,
//! }
//!
//! impl StickyHost for Page {
//!     type Node = u32;
//!     fn scroll_top(&self) -> f64 { self.scroll }
//!     fn page_rect(&self, node: u32) -> Rect {
//!         match node {
//!             0 => Rect::new(0.0, 100.0, 800.0, 1100.0),
//!             _ => Rect::new(0.0, 100.0 + self.offset, 800.0, 200.0 + self.offset),
//!         }
//!     }
//!     fn outer_height(&self, _: u32) -> f64 { 100.0 }
//!     fn position_top(&self, _: u32) -> f64 { self.offset }
//!     fn parent(&self, node: u32) -> Option<u32> { (node == 1).then_some(0) }
//!     fn make_positioning_context(&mut self, _: u32) {}
//!     fn prepare_element(&mut self, _: u32, _: Option<Transition>) {}
//!     fn set_offset(&mut self, _: u32, y: f64) { self.offset = y; }
//!     fn animate_offset(&mut self, _: u32, y: f64, _: Animation) { self.offset = y; }
//!     fn stop_animation(&mut self, _: u32) {}
//! }
//!
//! let mut page = Page { scroll: 0.0, offset: 0.0 };
//! let mut sticky = StickyManager::new();
//! sticky.bind(&mut page, [1], Binding::Options(OptionsPatch::default()));
//!
//! // Scrolled 250px into the container: the element follows.
//! page.scroll = 350.0;
//! sticky.on_scroll(&mut page);
//! assert_eq!(page.offset, 250.0);
//!
//! // Past the end: the element rests against the container's bottom edge.
//! page.scroll = 5_000.0;
//! sticky.on_scroll(&mut page);
//! assert_eq!(page.offset, 900.0);
//! ```
//!
//! ## Signals
//!
//! Controllers emit [`StickyEvent`]s to observers subscribed with a
//! [`StickySignals`] mask. Boundary signals ([`StickyEvent::HitTop`],
//! [`StickyEvent::HitBottom`]) fire only when the element goes from tracking to
//! resting, never again while it stays at rest.
//!
//! ## Logging
//!
//! Lifecycle steps are logged through the [`log`] facade at `debug` level,
//! per-scroll placement at `trace` level, and rejected bindings at `error`
//! level.
//!
//! ## Features
//!
//! - `std` (default) / `libm`: forwarded to `kurbo`.
//! - `serde`: `Serialize`/`Deserialize` for [`StickyOptions`] and
//!   [`OptionsPatch`], with camelCase field names and a lenient `offset`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod apply;
mod controller;
mod error;
mod geometry;
mod host;
mod manager;
mod method;
mod options;
mod poll;
mod signal;

#[cfg(test)]
mod test_host;

pub use apply::{Animation, ApplyStrategy, Transition};
pub use controller::StickyController;
pub use error::StickyError;
pub use geometry::{Boundaries, Placement};
pub use host::StickyHost;
pub use manager::{BindOutcome, Binding, OPTIONS_CALL, StickyManager};
pub use method::{Arg, Method, MethodOutput};
pub use options::{
    DEFAULT_ANIM_DELAY, DEFAULT_ANIM_TIME, OptionsPatch, StickyOptions, int_from_f64, parse_int,
};
pub use poll::{POLL_INTERVAL_MS, PollSchedule};
pub use signal::{Observer, StickyEvent, StickySignals};
