// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration for sticky controllers.

/// Default duration of a repositioning animation or transition, in milliseconds.
pub const DEFAULT_ANIM_TIME: u32 = 200;

/// Default delay before a discrete repositioning animation starts, in milliseconds.
pub const DEFAULT_ANIM_DELAY: u32 = 300;

/// Per-instance configuration of a [`StickyController`](crate::StickyController).
///
/// `use_transition` and `animate` select between the two animation strategies.
/// When the host supports transitions and `use_transition` is set, the
/// controller attaches a transition to the element during initialization and
/// switches `animate` off, so the two strategies never run together.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct StickyOptions {
    /// Prefer a host-side transition on the vertical offset.
    pub use_transition: bool,
    /// Animate offset changes discretely (delay, then animate).
    pub animate: bool,
    /// Duration of the transition or animation, in milliseconds.
    pub anim_time: u32,
    /// Delay before a discrete animation starts, in milliseconds.
    pub anim_delay: u32,
    /// Extra offset added to the page scroll position before range checks.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "lenient::offset"))]
    pub offset: i32,
}

impl Default for StickyOptions {
    fn default() -> Self {
        Self {
            use_transition: true,
            animate: true,
            anim_time: DEFAULT_ANIM_TIME,
            anim_delay: DEFAULT_ANIM_DELAY,
            offset: 0,
        }
    }
}

impl StickyOptions {
    /// Sets [`Self::use_transition`].
    #[must_use]
    pub fn with_transition(mut self, use_transition: bool) -> Self {
        self.use_transition = use_transition;
        self
    }

    /// Sets [`Self::animate`].
    #[must_use]
    pub fn with_animate(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }

    /// Sets [`Self::anim_time`].
    #[must_use]
    pub fn with_anim_time(mut self, anim_time: u32) -> Self {
        self.anim_time = anim_time;
        self
    }

    /// Sets [`Self::anim_delay`].
    #[must_use]
    pub fn with_anim_delay(mut self, anim_delay: u32) -> Self {
        self.anim_delay = anim_delay;
        self
    }

    /// Sets [`Self::offset`].
    #[must_use]
    pub fn with_offset(mut self, offset: i32) -> Self {
        self.offset = offset;
        self
    }

    /// Overwrites every field that is present in `patch`.
    pub fn merge(&mut self, patch: &OptionsPatch) {
        if let Some(v) = patch.use_transition {
            self.use_transition = v;
        }
        if let Some(v) = patch.animate {
            self.animate = v;
        }
        if let Some(v) = patch.anim_time {
            self.anim_time = v;
        }
        if let Some(v) = patch.anim_delay {
            self.anim_delay = v;
        }
        if let Some(v) = patch.offset {
            self.offset = v;
        }
    }

    /// Returns a copy of `self` with `patch` merged over it.
    #[must_use]
    pub fn merged(mut self, patch: &OptionsPatch) -> Self {
        self.merge(patch);
        self
    }
}

/// A partial [`StickyOptions`] record; absent fields leave the target untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct OptionsPatch {
    /// See [`StickyOptions::use_transition`].
    pub use_transition: Option<bool>,
    /// See [`StickyOptions::animate`].
    pub animate: Option<bool>,
    /// See [`StickyOptions::anim_time`].
    pub anim_time: Option<u32>,
    /// See [`StickyOptions::anim_delay`].
    pub anim_delay: Option<u32>,
    /// See [`StickyOptions::offset`].
    #[cfg_attr(feature = "serde", serde(deserialize_with = "lenient::some_offset"))]
    pub offset: Option<i32>,
}

impl OptionsPatch {
    /// Sets the offset from free-form text.
    ///
    /// Text that does not start with an integer normalizes to `0`.
    #[must_use]
    pub fn with_offset_text(mut self, text: &str) -> Self {
        self.offset = Some(parse_int(text).unwrap_or(0));
        self
    }
}

impl From<StickyOptions> for OptionsPatch {
    fn from(options: StickyOptions) -> Self {
        Self {
            use_transition: Some(options.use_transition),
            animate: Some(options.animate),
            anim_time: Some(options.anim_time),
            anim_delay: Some(options.anim_delay),
            offset: Some(options.offset),
        }
    }
}

/// Parses the leading integer of `text`.
///
/// Leading whitespace and a single sign are accepted, and parsing stops at the
/// first non-digit, so `"  -12px"` yields `-12`. Returns `None` when no digit
/// follows. Out-of-range values saturate to the `i32` bounds.
#[must_use]
pub fn parse_int(text: &str) -> Option<i32> {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let mut value: i64 = 0;
    let mut seen = false;
    for b in digits.bytes() {
        if !b.is_ascii_digit() {
            break;
        }
        seen = true;
        value = value
            .saturating_mul(10)
            .saturating_add(i64::from(b - b'0'));
    }
    if !seen {
        return None;
    }
    let value = if negative { -value } else { value };
    Some(saturate_i32(value))
}

/// Truncates a float toward zero into an `i32`; non-finite input yields `None`.
#[must_use]
pub fn int_from_f64(value: f64) -> Option<i32> {
    if !value.is_finite() {
        return None;
    }
    let clamped = value.clamp(f64::from(i32::MIN), f64::from(i32::MAX));
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Value is finite and clamped into the i32 range"
    )]
    let truncated = clamped as i32;
    Some(truncated)
}

fn saturate_i32(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}

#[cfg(feature = "serde")]
mod lenient {
    use core::fmt;

    use serde::Deserializer;
    use serde::de::{self, Visitor};

    struct OffsetVisitor;

    impl<'de> Visitor<'de> for OffsetVisitor {
        type Value = i32;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an integer offset, or text starting with one")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<i32, E> {
            Ok(super::saturate_i32(v))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<i32, E> {
            Ok(i32::try_from(v).unwrap_or(i32::MAX))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<i32, E> {
            Ok(super::int_from_f64(v).unwrap_or(0))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<i32, E> {
            Ok(super::parse_int(v).unwrap_or(0))
        }

        fn visit_bool<E: de::Error>(self, _: bool) -> Result<i32, E> {
            Ok(0)
        }

        fn visit_unit<E: de::Error>(self) -> Result<i32, E> {
            Ok(0)
        }

        fn visit_none<E: de::Error>(self) -> Result<i32, E> {
            Ok(0)
        }

        fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<i32, D::Error> {
            d.deserialize_any(Self)
        }
    }

    pub(super) fn offset<'de, D: Deserializer<'de>>(d: D) -> Result<i32, D::Error> {
        d.deserialize_any(OffsetVisitor)
    }

    pub(super) fn some_offset<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i32>, D::Error> {
        d.deserialize_any(OffsetVisitor).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::{OptionsPatch, StickyOptions, int_from_f64, parse_int};

    #[test]
    fn defaults_match_documented_values() {
        let o = StickyOptions::default();
        assert!(o.use_transition);
        assert!(o.animate);
        assert_eq!(o.anim_time, 200);
        assert_eq!(o.anim_delay, 300);
        assert_eq!(o.offset, 0);
    }

    #[test]
    fn parse_int_reads_leading_integer() {
        assert_eq!(parse_int("42"), Some(42));
        assert_eq!(parse_int("  -12px"), Some(-12));
        assert_eq!(parse_int("+7"), Some(7));
        assert_eq!(parse_int("3.9"), Some(3));
        assert_eq!(parse_int("px12"), None);
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("-"), None);
        assert_eq!(parse_int("99999999999999"), Some(i32::MAX));
    }

    #[test]
    fn int_from_f64_truncates_and_rejects_non_finite() {
        assert_eq!(int_from_f64(12.7), Some(12));
        assert_eq!(int_from_f64(-3.2), Some(-3));
        assert_eq!(int_from_f64(f64::NAN), None);
        assert_eq!(int_from_f64(f64::INFINITY), None);
    }

    #[test]
    fn merge_only_touches_present_fields() {
        let mut o = StickyOptions::default().with_offset(5);
        o.merge(&OptionsPatch {
            anim_time: Some(50),
            ..OptionsPatch::default()
        });
        assert_eq!(o.anim_time, 50);
        assert_eq!(o.offset, 5);
        assert!(o.animate);
    }

    #[test]
    fn offset_text_normalizes_to_zero() {
        let patch = OptionsPatch::default().with_offset_text("abc");
        assert_eq!(patch.offset, Some(0));
        let patch = OptionsPatch::default().with_offset_text("30px");
        assert_eq!(patch.offset, Some(30));
    }
}
