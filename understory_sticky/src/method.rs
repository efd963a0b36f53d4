// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named controller operations, for string-driven bindings.

use alloc::string::ToString;

use crate::options::{int_from_f64, parse_int};
use crate::{Boundaries, Placement, StickyError};

/// A controller operation that can be invoked by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    /// [`StickyController::init`](crate::StickyController::init).
    Init,
    /// [`StickyController::update`](crate::StickyController::update).
    Update,
    /// [`StickyController::move_it`](crate::StickyController::move_it).
    MoveIt,
    /// [`StickyController::set_boundaries`](crate::StickyController::set_boundaries).
    SetBoundaries,
    /// [`StickyController::set_offset`](crate::StickyController::set_offset).
    SetOffset,
    /// [`StickyController::update_offset`](crate::StickyController::update_offset).
    UpdateOffset,
    /// [`StickyController::toggle_freeze`](crate::StickyController::toggle_freeze).
    ToggleFreeze,
}

impl Method {
    /// All methods, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Init,
        Self::Update,
        Self::MoveIt,
        Self::SetBoundaries,
        Self::SetOffset,
        Self::UpdateOffset,
        Self::ToggleFreeze,
    ];

    /// The name a binding uses to invoke this method.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Update => "update",
            Self::MoveIt => "moveIt",
            Self::SetBoundaries => "setBoundaries",
            Self::SetOffset => "setOffset",
            Self::UpdateOffset => "updateOffset",
            Self::ToggleFreeze => "toggleFreeze",
        }
    }

    /// Looks a method up by name.
    ///
    /// # Errors
    ///
    /// Returns [`StickyError::UnknownMethod`] if `name` is not a known method.
    pub fn from_name<K>(name: &str) -> Result<Self, StickyError<K>> {
        Self::ALL
            .into_iter()
            .find(|m| m.name() == name)
            .ok_or_else(|| StickyError::UnknownMethod {
                name: name.to_string(),
            })
    }
}

/// Argument passed along with a named method.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Arg<'a> {
    /// A numeric argument.
    Number(f64),
    /// A textual argument, parsed by the method as needed.
    Text(&'a str),
}

impl Arg<'_> {
    /// Integer view: numbers truncate, text yields its leading integer.
    #[must_use]
    pub fn as_int(self) -> Option<i32> {
        match self {
            Self::Number(v) => int_from_f64(v),
            Self::Text(t) => parse_int(t),
        }
    }

    /// Floating-point view: text must parse as a whole.
    #[must_use]
    pub fn as_f64(self) -> Option<f64> {
        match self {
            Self::Number(v) if v.is_finite() => Some(v),
            Self::Number(_) => None,
            Self::Text(t) => t.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        }
    }
}

impl From<f64> for Arg<'_> {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Arg<'_> {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

/// Result of invoking a [`Method`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MethodOutput {
    /// The method produces no value.
    Unit,
    /// New frozen state, from [`Method::ToggleFreeze`].
    Frozen(bool),
    /// Recomputed boundaries, from [`Method::SetBoundaries`].
    Boundaries(Boundaries),
    /// Resolved placement, from [`Method::MoveIt`]; `None` while frozen.
    Placement(Option<Placement>),
    /// Whether an offset was written, from [`Method::UpdateOffset`] and
    /// [`Method::SetOffset`].
    Applied(bool),
}

#[cfg(test)]
mod tests {
    use super::{Arg, Method};
    use crate::StickyError;

    #[test]
    fn names_resolve() {
        for m in Method::ALL {
            assert_eq!(Method::from_name::<u32>(m.name()), Ok(m));
        }
        assert_eq!(
            Method::from_name::<u32>("explode"),
            Err(StickyError::UnknownMethod {
                name: "explode".into()
            })
        );
        // Names are case-sensitive.
        assert!(Method::from_name::<u32>("togglefreeze").is_err());
    }

    #[test]
    fn arg_views() {
        assert_eq!(Arg::from("12px").as_int(), Some(12));
        assert_eq!(Arg::from("12px").as_f64(), None);
        assert_eq!(Arg::from(" 2.5 ").as_f64(), Some(2.5));
        assert_eq!(Arg::from(7.9).as_int(), Some(7));
        assert_eq!(Arg::from(f64::NAN).as_f64(), None);
        assert_eq!(Arg::from("abc").as_int(), None);
    }
}
