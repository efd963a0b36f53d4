// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The seam between sticky controllers and the environment that owns the nodes.

use core::fmt::Debug;
use core::hash::Hash;

use kurbo::Rect;

use crate::{Animation, Transition};

/// Measurement and style access for the nodes a sticky controller manages.
///
/// Implementations wrap a concrete environment: a browser binding that reads
/// offsets from the DOM, a native toolkit's layout tree, or a test double.
/// All coordinates are in the same 1D page space (typically CSS pixels) with
/// `y` growing downwards.
pub trait StickyHost {
    /// Key identifying a node. Nodes are owned by the host.
    type Node: Copy + Eq + Hash + Debug;

    /// Current vertical scroll position of the page.
    fn scroll_top(&self) -> f64;

    /// Border box of `node` in page coordinates.
    ///
    /// `y0` is the page-absolute top and `height()` the rendered height.
    fn page_rect(&self, node: Self::Node) -> Rect;

    /// Rendered height of `element` including its vertical margins.
    fn outer_height(&self, element: Self::Node) -> f64;

    /// Top of `element` relative to its positioning context.
    fn position_top(&self, element: Self::Node) -> f64;

    /// Immediate parent of `node`, if any.
    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    /// Returns `true` if the host can smooth offset writes with a transition.
    fn supports_transition(&self) -> bool {
        true
    }

    /// Makes `parent` the positioning context for its children.
    fn make_positioning_context(&mut self, parent: Self::Node);

    /// Makes `element` relatively positioned and attaches `transition`, if any.
    fn prepare_element(&mut self, element: Self::Node, transition: Option<Transition>);

    /// Sets the vertical offset of `element` immediately.
    fn set_offset(&mut self, element: Self::Node, y: f64);

    /// Starts animating the vertical offset of `element` towards `y`.
    fn animate_offset(&mut self, element: Self::Node, y: f64, animation: Animation);

    /// Halts any queued or running offset animation on `element`.
    ///
    /// The element keeps whatever offset it had reached.
    fn stop_animation(&mut self, element: Self::Node);
}
