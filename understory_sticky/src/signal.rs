// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lifecycle signals and observer plumbing.

use alloc::rc::Rc;
use core::fmt;

use bitflags::bitflags;
use smallvec::SmallVec;

/// A lifecycle notification emitted by a sticky controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StickyEvent {
    /// The controller finished preparing its element.
    Created,
    /// Boundaries were recomputed and the element repositioned.
    Update,
    /// The element stopped tracking and came to rest at the top of its range.
    HitTop,
    /// The element stopped tracking and came to rest at the bottom of its parent.
    HitBottom,
    /// Position updates were suspended.
    Frozen,
    /// Position updates resumed.
    Unfrozen,
}

impl StickyEvent {
    /// All events, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Created,
        Self::Update,
        Self::HitTop,
        Self::HitBottom,
        Self::Frozen,
        Self::Unfrozen,
    ];

    /// Canonical event name, as used for DOM custom events.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Created => "sticky-created",
            Self::Update => "sticky-update",
            Self::HitTop => "sticky-hit-top",
            Self::HitBottom => "sticky-hit-bottom",
            Self::Frozen => "sticky-frozen",
            Self::Unfrozen => "sticky-unfrozen",
        }
    }

    /// Looks an event up by its canonical name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.name() == name)
    }

    /// The single-bit mask matching this event.
    #[must_use]
    pub const fn signal(self) -> StickySignals {
        match self {
            Self::Created => StickySignals::CREATED,
            Self::Update => StickySignals::UPDATE,
            Self::HitTop => StickySignals::HIT_TOP,
            Self::HitBottom => StickySignals::HIT_BOTTOM,
            Self::Frozen => StickySignals::FROZEN,
            Self::Unfrozen => StickySignals::UNFROZEN,
        }
    }
}

impl fmt::Display for StickyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// Set of [`StickyEvent`]s an observer is interested in.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct StickySignals: u8 {
        /// [`StickyEvent::Created`].
        const CREATED = 1 << 0;
        /// [`StickyEvent::Update`].
        const UPDATE = 1 << 1;
        /// [`StickyEvent::HitTop`].
        const HIT_TOP = 1 << 2;
        /// [`StickyEvent::HitBottom`].
        const HIT_BOTTOM = 1 << 3;
        /// [`StickyEvent::Frozen`].
        const FROZEN = 1 << 4;
        /// [`StickyEvent::Unfrozen`].
        const UNFROZEN = 1 << 5;
        /// Both boundary hits.
        const BOUNDARY = Self::HIT_TOP.bits() | Self::HIT_BOTTOM.bits();
        /// Both freeze transitions.
        const FREEZE = Self::FROZEN.bits() | Self::UNFROZEN.bits();
    }
}

/// Callback receiving the element key and the event.
pub type Observer<K> = Rc<dyn Fn(K, StickyEvent)>;

/// Observers of one controller, each with the signals it subscribed to.
pub(crate) struct Observers<K> {
    entries: SmallVec<[(StickySignals, Observer<K>); 2]>,
}

impl<K: Copy> Observers<K> {
    pub(crate) fn new() -> Self {
        Self {
            entries: SmallVec::new(),
        }
    }

    pub(crate) fn push(&mut self, signals: StickySignals, observer: Observer<K>) {
        if !signals.is_empty() {
            self.entries.push((signals, observer));
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn emit(&self, element: K, event: StickyEvent) {
        let bit = event.signal();
        for (signals, observer) in &self.entries {
            if signals.contains(bit) {
                observer(element, event);
            }
        }
    }
}

impl<K> fmt::Debug for Observers<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|(signals, _)| signals))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    use super::{Observers, StickyEvent, StickySignals};

    #[test]
    fn names_round_trip() {
        for e in StickyEvent::ALL {
            assert_eq!(StickyEvent::from_name(e.name()), Some(e));
        }
        assert_eq!(StickyEvent::from_name("sticky-nope"), None);
        assert_eq!(StickyEvent::HitBottom.name(), "sticky-hit-bottom");
    }

    #[test]
    fn emit_respects_masks() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut observers = Observers::<u32>::new();
        let log = seen.clone();
        observers.push(
            StickySignals::BOUNDARY,
            Rc::new(move |k: u32, e: StickyEvent| log.borrow_mut().push((k, e))),
        );
        observers.push(
            StickySignals::empty(),
            Rc::new(|_: u32, _: StickyEvent| panic!("never subscribed")),
        );
        assert_eq!(observers.len(), 1);

        observers.emit(7, StickyEvent::Update);
        observers.emit(7, StickyEvent::HitTop);
        observers.emit(8, StickyEvent::HitBottom);
        assert_eq!(
            *seen.borrow(),
            [(7, StickyEvent::HitTop), (8, StickyEvent::HitBottom)]
        );
    }
}
