// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording host double for unit tests.

use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::Rect;

use crate::{Animation, StickyHost, Transition};

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Op {
    Context(u32),
    Prepare(u32, Option<Transition>),
    Set(u32, f64),
    Animate(u32, f64, Animation),
    Stop(u32),
}

#[derive(Clone, Copy, Debug)]
struct Node {
    parent: Option<u32>,
    rect: Rect,
    outer_height: f64,
    position_top: f64,
}

#[derive(Debug, Default)]
pub(crate) struct TestHost {
    pub(crate) scroll: f64,
    pub(crate) no_transitions: bool,
    pub(crate) ops: Vec<Op>,
    nodes: HashMap<u32, Node>,
}

impl TestHost {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Adds a node at page `top` with the given height.
    pub(crate) fn node(mut self, id: u32, parent: Option<u32>, top: f64, height: f64) -> Self {
        let position_top = parent
            .and_then(|p| self.nodes.get(&p))
            .map_or(0.0, |p| top - p.rect.y0);
        self.nodes.insert(
            id,
            Node {
                parent,
                rect: Rect::new(0.0, top, 100.0, top + height),
                outer_height: height,
                position_top,
            },
        );
        self
    }

    /// Parent 1 at y=100, 1000 tall; element 2 of height 100 at its top.
    pub(crate) fn sample() -> Self {
        Self::new()
            .node(1, None, 100.0, 1000.0)
            .node(2, Some(1), 100.0, 100.0)
    }

    pub(crate) fn resize(&mut self, id: u32, height: f64) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.rect.y1 = node.rect.y0 + height;
        }
    }

    pub(crate) fn take_ops(&mut self) -> Vec<Op> {
        core::mem::take(&mut self.ops)
    }

    fn get(&self, id: u32) -> Node {
        self.nodes[&id]
    }
}

impl StickyHost for TestHost {
    type Node = u32;

    fn scroll_top(&self) -> f64 {
        self.scroll
    }

    fn page_rect(&self, node: u32) -> Rect {
        self.get(node).rect
    }

    fn outer_height(&self, element: u32) -> f64 {
        self.get(element).outer_height
    }

    fn position_top(&self, element: u32) -> f64 {
        self.get(element).position_top
    }

    fn parent(&self, node: u32) -> Option<u32> {
        self.nodes.get(&node).and_then(|n| n.parent)
    }

    fn supports_transition(&self) -> bool {
        !self.no_transitions
    }

    fn make_positioning_context(&mut self, parent: u32) {
        self.ops.push(Op::Context(parent));
    }

    fn prepare_element(&mut self, element: u32, transition: Option<Transition>) {
        self.ops.push(Op::Prepare(element, transition));
    }

    fn set_offset(&mut self, element: u32, y: f64) {
        self.ops.push(Op::Set(element, y));
    }

    fn animate_offset(&mut self, element: u32, y: f64, animation: Animation) {
        self.ops.push(Op::Animate(element, y, animation));
    }

    fn stop_animation(&mut self, element: u32) {
        self.ops.push(Op::Stop(element));
    }
}
