// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Canonical half-open valid-time period.
//!
//! [`Period`] models the span during which a fact was true.  Whatever bound
//! combination a caller supplies — `[a,b]`, `(a,b]`, `(a,b)` — the stored
//! form is always the equivalent half-open `[a',b')`: an exclusive start is
//! bumped forward by one resolution step, an inclusive end likewise, and the
//! flags are forced to closed-start/open-end.  The rewrite happens inside
//! the setters, so the invariant holds after *every* mutation path, not just
//! construction.
//!
//! A period with no concrete end runs until [`TIME_CURRENT`] and reports
//! [`is_current`](Period::is_current).

use crate::error::TemporalError;
use crate::instant::{Instant, TIME_CURRENT, TIME_RESOLUTION};
use crate::literal;
use std::fmt;
use std::str::FromStr;

/// A half-open `[start, end)` span between two instants.
///
/// Field access goes through normalizing accessors; the canonical invariant
/// (`start_included == true`, `end_included == false`) cannot be broken from
/// outside the crate.
///
/// # Examples
///
/// ```
/// use validtime::Period;
///
/// let p: Period = "[2009-06-04 12:00:00+01:00,2009-06-05 12:00:00+01:00)"
///     .parse()
///     .unwrap();
/// assert_eq!(
///     p.to_string(),
///     "[2009-06-04 11:00:00.000000+0000,2009-06-05 11:00:00.000000+0000)"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    start: Instant,
    end: Instant,
    start_included: bool,
    end_included: bool,
}

impl Period {
    // ── constructors ──────────────────────────────────────────────────

    /// A period from `start` (inclusive) to `end` (exclusive).
    pub fn new(start: Instant, end: Instant) -> Self {
        Self {
            start: start.without_zone(),
            end: end.without_zone(),
            start_included: true,
            end_included: false,
        }
    }

    /// An open-ended period: `end` defaults to [`TIME_CURRENT`], exclusive.
    pub fn from_start(start: Instant) -> Self {
        Self::new(start, TIME_CURRENT)
    }

    /// A period from explicit bounds and inclusivity flags.
    ///
    /// The flags describe the *supplied* bounds; the stored form is the
    /// normalized half-open equivalent.
    pub fn with_bounds(
        start: Instant,
        end: Instant,
        start_included: bool,
        end_included: bool,
    ) -> Self {
        let mut period = Self::new(start, end);
        period.set_start_included(start_included);
        period.set_end_included(end_included);
        period
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// Start of the period (always inclusive).
    pub fn start(&self) -> Instant {
        self.start
    }

    /// End of the period (always exclusive).
    pub fn end(&self) -> Instant {
        self.end
    }

    /// Always `true` after normalization.
    pub fn start_included(&self) -> bool {
        self.start_included
    }

    /// Always `false` after normalization.
    pub fn end_included(&self) -> bool {
        self.end_included
    }

    // ── normalizing setters ───────────────────────────────────────────

    /// Set the start bound.  The zone tag is stripped; the wall clock is
    /// kept as the canonical UTC-equivalent value.
    pub fn set_start(&mut self, value: Instant) {
        self.start = value.without_zone();
    }

    /// Set the end bound.  Same zone-stripping rule as [`set_start`](Self::set_start).
    pub fn set_end(&mut self, value: Instant) {
        self.end = value.without_zone();
    }

    /// Declare the start bound open or closed.
    ///
    /// An exclusive start is rewritten to `start + resolution` with the flag
    /// forced back to inclusive.
    pub fn set_start_included(&mut self, value: bool) {
        if !value {
            self.start = self.start + TIME_RESOLUTION;
        }
        self.start_included = true;
    }

    /// Declare the end bound open or closed.
    ///
    /// An inclusive end is rewritten to `end + resolution` with the flag
    /// forced back to exclusive.
    pub fn set_end_included(&mut self, value: bool) {
        if value {
            self.end = self.end + TIME_RESOLUTION;
        }
        self.end_included = false;
    }

    // ── boundary points ───────────────────────────────────────────────

    /// The first instant inside the period.
    pub fn first(&self) -> Instant {
        self.start
    }

    /// The last instant before the period.
    pub fn prior(&self) -> Instant {
        self.start - TIME_RESOLUTION
    }

    /// The last instant inside the period.
    pub fn last(&self) -> Instant {
        self.end - TIME_RESOLUTION
    }

    /// The first instant after the period.
    pub fn next(&self) -> Instant {
        self.end
    }

    // ── open-endedness ────────────────────────────────────────────────

    /// Whether the period is still open ("currently true").
    pub fn is_current(&self) -> bool {
        self.end == TIME_CURRENT && !self.end_included
    }

    /// Re-open the period: `end` becomes [`TIME_CURRENT`], exclusive.
    pub fn set_current(&mut self) {
        self.set_end(TIME_CURRENT);
        self.set_end_included(false);
    }
}

// ── Parse / Display ───────────────────────────────────────────────────────

impl FromStr for Period {
    type Err = TemporalError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        literal::parse_period(text)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        literal::format_period(self, f)
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

// The wire form is the canonical range literal, so serialized periods can be
// handed straight to a half-open timestamp-range column.
#[cfg(feature = "serde")]
impl serde::Serialize for Period {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Period {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::Deserialize;
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
