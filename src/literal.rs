// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Textual range-literal grammar.
//!
//! The persisted form of a period is the bracketed literal understood by
//! native half-open timestamp-range columns:
//!
//! ```text
//! [2009-06-04 11:00:00.000000+0000,2009-06-05 11:00:00.000000+0000)
//! ```
//!
//! Parsing accepts any bracket combination (`[`/`(` … `]`/`)`) and maps it
//! onto the pre-normalization inclusivity flags; formatting always emits the
//! canonical `[…,…)` form with both endpoints rendered as UTC.  Round-tripping
//! `format → parse` is therefore the identity on canonical periods only.

use crate::error::TemporalError;
use crate::instant::Instant;
use crate::period::Period;
use chrono::{TimeZone, Utc};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static PERIOD_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([\[(])([^,]+),([^\])]+)([\])])$").expect("period literal pattern")
});

/// Strip one pair of surrounding double quotes, if present.
fn unquote(text: &str) -> &str {
    text.strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(text)
}

/// Parse a bracketed range literal into a normalized [`Period`].
///
/// Fails with [`TemporalError::Parse`] carrying the offending literal when
/// the bracket/comma structure does not match, or with the inner timestamp
/// error when an endpoint is malformed.
pub(crate) fn parse_period(text: &str) -> Result<Period, TemporalError> {
    let trimmed = unquote(text.trim());
    let caps = PERIOD_LITERAL
        .captures(trimmed)
        .ok_or_else(|| TemporalError::Parse(text.to_owned()))?;

    let start = Instant::parse(caps[2].trim())?;
    let end = Instant::parse(caps[3].trim())?;
    let start_included = &caps[1] == "[";
    let end_included = &caps[4] == "]";

    Ok(Period::with_bounds(start, end, start_included, end_included))
}

/// Write the canonical half-open literal for `period`.
pub(crate) fn format_period(period: &Period, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
        f,
        "[{},{})",
        format_utc(period.start()),
        format_utc(period.end())
    )
}

/// An endpoint as `YYYY-MM-DD HH:MM:SS.ffffff+0000`.
///
/// Stored endpoints are zone-naive UTC-equivalents, so the offset is
/// always `+0000`.
fn format_utc(instant: Instant) -> String {
    Utc.from_utc_datetime(&instant.naive())
        .format("%Y-%m-%d %H:%M:%S%.6f%z")
        .to_string()
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
