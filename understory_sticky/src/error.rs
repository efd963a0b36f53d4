// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt;

/// Errors reported by [`StickyManager`](crate::StickyManager) and
/// [`Method`](crate::Method) parsing.
#[derive(Clone, PartialEq, Eq)]
pub enum StickyError<K> {
    /// A named operation does not exist.
    UnknownMethod {
        /// The name that was requested.
        name: String,
    },
    /// The element already has a controller.
    AlreadyBound {
        /// The element that was bound twice.
        element: K,
    },
    /// No suitable parent was found for the element.
    NoParent {
        /// The element without a parent.
        element: K,
    },
}

impl<K: fmt::Debug> fmt::Debug for StickyError<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownMethod { name } => write!(f, "UnknownMethod {{ name: {name:?} }}"),
            Self::AlreadyBound { element } => write!(f, "AlreadyBound {{ element: {element:?} }}"),
            Self::NoParent { element } => write!(f, "NoParent {{ element: {element:?} }}"),
        }
    }
}

impl<K: fmt::Debug> fmt::Display for StickyError<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownMethod { name } => {
                write!(f, "sticky element has no option/method named {name:?}")
            }
            Self::AlreadyBound { element } => {
                write!(f, "element {element:?} already has a sticky controller")
            }
            Self::NoParent { element } => {
                write!(f, "element {element:?} has no suitable parent container")
            }
        }
    }
}

impl<K: fmt::Debug> core::error::Error for StickyError<K> {}
