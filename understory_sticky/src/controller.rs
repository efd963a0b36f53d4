// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-element sticky controller.

use core::fmt::Debug;

use crate::signal::Observers;
use crate::{
    ApplyStrategy, Arg, Boundaries, Method, MethodOutput, Observer, OptionsPatch, Placement,
    StickyEvent, StickyHost, StickyOptions, StickySignals, Transition,
};

/// Keeps one element within the visible part of its parent while the page scrolls.
///
/// A controller is created with [`StickyController::new`], which has no side
/// effects, and brought to life with [`StickyController::init`], which
/// prepares the nodes, emits [`StickyEvent::Created`] and runs a first
/// [`StickyController::update`]. Subscribe observers in between to see the
/// creation signal.
///
/// All operations take the [`StickyHost`] that owns the nodes.
#[derive(Debug)]
pub struct StickyController<K> {
    element: K,
    parent: K,
    options: StickyOptions,
    frozen: bool,
    stopped: bool,
    bounds: Boundaries,
    last_applied: Option<f64>,
    observers: Observers<K>,
}

impl<K: Copy + Debug> StickyController<K> {
    /// Creates a controller for `element` inside `parent`.
    #[must_use]
    pub fn new(element: K, parent: K, options: StickyOptions) -> Self {
        Self {
            element,
            parent,
            options,
            frozen: false,
            stopped: true,
            bounds: Boundaries::default(),
            last_applied: None,
            observers: Observers::new(),
        }
    }

    /// The managed element.
    #[must_use]
    pub fn element(&self) -> K {
        self.element
    }

    /// The container whose extent bounds the sticky range.
    #[must_use]
    pub fn parent(&self) -> K {
        self.parent
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &StickyOptions {
        &self.options
    }

    /// Merges `patch` into the options and returns the result.
    ///
    /// Nothing is re-applied: the new values take effect on the next
    /// repositioning.
    pub fn merge_options(&mut self, patch: &OptionsPatch) -> StickyOptions {
        self.options.merge(patch);
        self.options
    }

    /// Returns `true` while position updates are suspended.
    #[must_use]
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Returns `true` while the element rests at a boundary.
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Boundaries from the last [`StickyController::set_boundaries`].
    #[must_use]
    pub fn boundaries(&self) -> Boundaries {
        self.bounds
    }

    /// The last offset written to the element, if any.
    #[must_use]
    pub fn last_applied(&self) -> Option<f64> {
        self.last_applied
    }

    /// The strategy the next offset write will use.
    #[must_use]
    pub fn apply_strategy(&self) -> ApplyStrategy {
        ApplyStrategy::from_options(&self.options)
    }

    /// Number of observers attached to this controller.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Calls `observer` for every emitted event contained in `signals`.
    pub fn subscribe(&mut self, signals: StickySignals, observer: Observer<K>) {
        self.observers.push(signals, observer);
    }

    /// Prepares the nodes, emits [`StickyEvent::Created`], then updates.
    ///
    /// If the host supports transitions and [`StickyOptions::use_transition`]
    /// is set, a transition is attached and discrete animation is switched off.
    pub fn init<H: StickyHost<Node = K>>(&mut self, host: &mut H) {
        let transition = if self.options.use_transition && host.supports_transition() {
            self.options.animate = false;
            Some(Transition {
                duration_ms: self.options.anim_time,
            })
        } else {
            None
        };
        host.make_positioning_context(self.parent);
        host.prepare_element(self.element, transition);
        log::debug!(
            "sticky element {:?} created in {:?} ({:?})",
            self.element,
            self.parent,
            self.apply_strategy()
        );
        self.emit(StickyEvent::Created);
        self.update(host);
    }

    /// Recomputes boundaries, repositions, and emits [`StickyEvent::Update`].
    ///
    /// The offset within the parent is taken as `0`: the element's measured
    /// top already includes the offset this controller applied.
    pub fn update<H: StickyHost<Node = K>>(&mut self, host: &mut H) {
        self.set_boundaries(&*host, Some(0.0));
        self.move_it(host);
        self.emit(StickyEvent::Update);
    }

    /// Recomputes and stores the scroll-range boundaries.
    ///
    /// With `offset == None` the element's current top within its positioning
    /// context is measured; otherwise `offset` is used as-is.
    pub fn set_boundaries<H: StickyHost<Node = K>>(
        &mut self,
        host: &H,
        offset: Option<f64>,
    ) -> Boundaries {
        let offset_within_parent = offset.unwrap_or_else(|| host.position_top(self.element));
        let parent = host.page_rect(self.parent);
        self.bounds = Boundaries::compute(parent.y0, parent.height(), offset_within_parent);
        self.bounds
    }

    /// Repositions the element for the current scroll position.
    ///
    /// Returns `None` without touching anything while frozen. Boundary signals
    /// fire only when the element goes from tracking to pinned.
    pub fn move_it<H: StickyHost<Node = K>>(&mut self, host: &mut H) -> Option<Placement> {
        if self.frozen {
            return None;
        }
        let scroll_top = host.scroll_top() + f64::from(self.options.offset);
        let element_height = host.outer_height(self.element);
        let placement = self.bounds.resolve(scroll_top, element_height);
        match placement {
            Placement::Unfit => {}
            Placement::Tracking(y) => {
                self.update_offset(host, y);
                self.stopped = false;
            }
            Placement::PinnedTop => {
                self.update_offset(host, 0.0);
                if !self.stopped {
                    self.emit(StickyEvent::HitTop);
                }
                self.stopped = true;
            }
            Placement::PinnedBottom(y) => {
                self.update_offset(host, y);
                if !self.stopped {
                    self.emit(StickyEvent::HitBottom);
                }
                self.stopped = true;
            }
        }
        log::trace!(
            "sticky element {:?} at scroll {scroll_top}: {placement:?}",
            self.element
        );
        Some(placement)
    }

    /// Replaces the extra scroll offset and repositions.
    ///
    /// Boundaries are not recomputed.
    pub fn set_offset<H: StickyHost<Node = K>>(
        &mut self,
        host: &mut H,
        offset: i32,
    ) -> Option<Placement> {
        self.options.offset = offset;
        self.move_it(host)
    }

    /// Like [`StickyController::set_offset`], parsing `text` as an integer.
    ///
    /// Returns `false` and leaves the offset unchanged if `text` does not
    /// start with an integer.
    pub fn set_offset_str<H: StickyHost<Node = K>>(&mut self, host: &mut H, text: &str) -> bool {
        match crate::options::parse_int(text) {
            Some(offset) => {
                self.set_offset(host, offset);
                true
            }
            None => false,
        }
    }

    /// Writes `y` as the element's offset using the current strategy.
    ///
    /// Returns `false` without touching the host if `y` equals the last
    /// written offset.
    pub fn update_offset<H: StickyHost<Node = K>>(&mut self, host: &mut H, y: f64) -> bool {
        if self.last_applied == Some(y) {
            return false;
        }
        match self.apply_strategy() {
            ApplyStrategy::Scheduled(animation) => {
                host.stop_animation(self.element);
                host.animate_offset(self.element, y, animation);
            }
            ApplyStrategy::Immediate => host.set_offset(self.element, y),
        }
        self.last_applied = Some(y);
        true
    }

    /// Suspends or resumes position updates and returns the new frozen state.
    ///
    /// Any running animation is halted either way. Resuming repositions the
    /// element immediately.
    pub fn toggle_freeze<H: StickyHost<Node = K>>(&mut self, host: &mut H) -> bool {
        self.frozen = !self.frozen;
        host.stop_animation(self.element);
        if self.frozen {
            self.emit(StickyEvent::Frozen);
        } else {
            self.emit(StickyEvent::Unfrozen);
            self.move_it(host);
        }
        self.frozen
    }

    /// Invokes `method` with an optional argument.
    ///
    /// Arguments that a method cannot interpret are treated as absent:
    /// [`Method::SetBoundaries`] then measures the offset, while
    /// [`Method::SetOffset`] and [`Method::UpdateOffset`] do nothing.
    pub fn invoke<H: StickyHost<Node = K>>(
        &mut self,
        host: &mut H,
        method: Method,
        arg: Option<Arg<'_>>,
    ) -> MethodOutput {
        match method {
            Method::Init => {
                self.init(host);
                MethodOutput::Unit
            }
            Method::Update => {
                self.update(host);
                MethodOutput::Unit
            }
            Method::MoveIt => MethodOutput::Placement(self.move_it(host)),
            Method::SetBoundaries => {
                MethodOutput::Boundaries(self.set_boundaries(&*host, arg.and_then(Arg::as_f64)))
            }
            Method::SetOffset => match arg.and_then(Arg::as_int) {
                Some(offset) => {
                    self.set_offset(host, offset);
                    MethodOutput::Applied(true)
                }
                None => MethodOutput::Applied(false),
            },
            Method::UpdateOffset => MethodOutput::Applied(
                arg.and_then(Arg::as_f64)
                    .is_some_and(|y| self.update_offset(host, y)),
            ),
            Method::ToggleFreeze => MethodOutput::Frozen(self.toggle_freeze(host)),
        }
    }

    /// Returns `true` if the parent's rendered height differs from the one
    /// the current boundaries were computed with.
    pub(crate) fn parent_resized<H: StickyHost<Node = K>>(&self, host: &H) -> bool {
        host.page_rect(self.parent).height() != self.bounds.parent_height
    }

    fn emit(&self, event: StickyEvent) {
        self.observers.emit(self.element, event);
    }
}
