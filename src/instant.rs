// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Timezone-aware point in time with microsecond resolution.
//!
//! [`Instant`] is the leaf type of the crate.  It stores a single scalar —
//! microseconds since the Unix epoch of the **wall-clock** fields — plus an
//! optional zone tag; chrono is only involved at the edges (parsing,
//! formatting, zone conversion).  Two sentinels anchor the domain:
//!
//! - [`TIME_CURRENT`] — the maximum representable instant, meaning
//!   "no known end" when used as a period's end bound.
//! - [`TIME_RESOLUTION`] — one microsecond, the granularity used to convert
//!   between open and closed interval bounds.

use crate::error::TemporalError;
use crate::zone;
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta, Utc};
use chrono_tz::Tz;
use regex::Regex;
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::sync::LazyLock;

// ═══════════════════════════════════════════════════════════════════════════
// Sentinels and representable range
// ═══════════════════════════════════════════════════════════════════════════

/// The smallest representable step between two instants: 1 µs.
pub const TIME_RESOLUTION: TimeDelta = TimeDelta::microseconds(1);

/// Microseconds of `0001-01-01 00:00:00`, the lower bound of the domain.
const MIN_MICROS: i64 = -62_135_596_800_000_000;

/// Microseconds of `9999-12-31 23:59:59.999999`, the upper bound.
const MAX_MICROS: i64 = 253_402_300_799_999_999;

/// The "no known end" sentinel: the maximum representable instant.
///
/// A period whose end equals `TIME_CURRENT` (exclusively) is still open.
/// The sentinel serializes as the literal maximum timestamp and parses back
/// to the same value; it is never treated as an ordinary date by this crate.
pub const TIME_CURRENT: Instant = Instant {
    micros: MAX_MICROS,
    zone: None,
};

#[inline]
fn clamp_micros(micros: i64) -> i64 {
    micros.clamp(MIN_MICROS, MAX_MICROS)
}

// ═══════════════════════════════════════════════════════════════════════════
// Instant
// ═══════════════════════════════════════════════════════════════════════════

/// A point in time with microsecond precision and an optional zone tag.
///
/// The scalar holds the *wall-clock* fields; without a zone tag they are
/// assumed UTC-equivalent.  Equality and ordering always work on the
/// UTC-normalized value, so `2009-06-04 12:00:00+01:00` parsed from text
/// equals a naive `2009-06-04 11:00:00`.
///
/// # Examples
///
/// ```
/// use validtime::Instant;
///
/// let explicit = Instant::parse("2009-06-04 12:00:00+01:00").unwrap();
/// let naive = Instant::parse("2009-06-04 11:00:00").unwrap();
/// assert_eq!(explicit, naive);
/// ```
#[derive(Debug, Copy, Clone)]
pub struct Instant {
    micros: i64,
    zone: Option<Tz>,
}

// 2009-06-04 12:00:00+01:00 or 2009-06-04 12:00:00 +0100
static TZ_OFFSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^"?(.*?)\s?([-+])(\d{2}):?(\d{2})?"?$"#).expect("offset pattern")
});

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

fn parse_naive(text: &str) -> Option<NaiveDateTime> {
    for format in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive);
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

impl Instant {
    // ── constructors ──────────────────────────────────────────────────

    /// Create a zone-naive instant from chrono wall-clock fields.
    ///
    /// Sub-microsecond precision is truncated.
    pub fn from_naive(naive: NaiveDateTime) -> Self {
        Self {
            micros: clamp_micros(naive.and_utc().timestamp_micros()),
            zone: None,
        }
    }

    /// Create a UTC-tagged instant from a `chrono::DateTime<Utc>`.
    pub fn from_utc(datetime: DateTime<Utc>) -> Self {
        Self {
            micros: clamp_micros(datetime.timestamp_micros()),
            zone: Some(Tz::UTC),
        }
    }

    /// Parse a timestamp.
    ///
    /// Two grammars are accepted, optionally surrounded by double quotes:
    ///
    /// - a bare timestamp (`YYYY-MM-DD HH:MM:SS[.ffffff]`, `T` separator, or
    ///   a bare date) — tagged with the process default zone, wall clock
    ///   unshifted;
    /// - the same followed by a sign+hours\[:minutes\] offset
    ///   (`…+01:00`, `…+0100`, `…-05`) — shifted to UTC and tagged UTC.
    ///
    /// Anything else fails with [`TemporalError::Parse`] carrying the input.
    pub fn parse(text: &str) -> Result<Self, TemporalError> {
        let trimmed = text.trim();
        if let Some(naive) = parse_naive(trimmed.trim_matches('"')) {
            return Ok(Self {
                micros: clamp_micros(naive.and_utc().timestamp_micros()),
                zone: Some(zone::default_timezone()),
            });
        }
        if let Some(caps) = TZ_OFFSET.captures(trimmed) {
            if let Some(naive) = parse_naive(caps[1].trim()) {
                let sign: i64 = if &caps[2] == "-" { -1 } else { 1 };
                let hours: i64 = caps[3].parse().unwrap_or(0);
                let minutes: i64 = caps
                    .get(4)
                    .map(|m| m.as_str().parse().unwrap_or(0))
                    .unwrap_or(0);
                let offset_micros = sign * (hours * 60 + minutes) * 60 * 1_000_000;
                return Ok(Self {
                    micros: clamp_micros(
                        naive
                            .and_utc()
                            .timestamp_micros()
                            .saturating_sub(offset_micros),
                    ),
                    zone: Some(Tz::UTC),
                });
            }
        }
        Err(TemporalError::Parse(text.to_owned()))
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// The wall-clock fields as a chrono `NaiveDateTime`.
    pub fn naive(&self) -> NaiveDateTime {
        // micros is clamped to the chrono-representable window on every write.
        DateTime::from_timestamp_micros(self.micros)
            .map(|dt| dt.naive_utc())
            .unwrap_or(NaiveDateTime::MIN)
    }

    /// The zone tag, if any.
    pub fn zone(&self) -> Option<Tz> {
        self.zone
    }

    /// The same wall clock with the zone tag removed.
    pub(crate) fn without_zone(self) -> Self {
        Self {
            micros: self.micros,
            zone: None,
        }
    }

    /// Microseconds of the UTC-normalized value, the comparison key.
    pub(crate) fn utc_micros(&self) -> i64 {
        match self.zone {
            None | Some(Tz::UTC) => self.micros,
            Some(tz) => zone::localize(tz, self.naive())
                .with_timezone(&Utc)
                .timestamp_micros(),
        }
    }

    // ── zone normalization ────────────────────────────────────────────

    /// Normalize this instant to `zone`.
    ///
    /// A zone-naive instant is *localized*: the tag is attached without
    /// shifting the wall-clock fields.  A zoned instant is *converted*: the
    /// wall clock is rewritten to read correctly in the target zone.
    pub fn normalize_to(&self, target: Tz) -> Self {
        match self.zone {
            None => Self {
                micros: self.micros,
                zone: Some(target),
            },
            Some(tz) => {
                let converted = zone::localize(tz, self.naive()).with_timezone(&target);
                Self {
                    micros: clamp_micros(converted.naive_local().and_utc().timestamp_micros()),
                    zone: Some(target),
                }
            }
        }
    }

    /// This instant in the process default zone.  Display only: storage
    /// always goes through the zone-naive canonical form.
    pub fn as_local_timezone(&self) -> Self {
        self.normalize_to(zone::default_timezone())
    }

    // ── min / max ─────────────────────────────────────────────────────

    /// The earlier of two instants on the UTC axis.
    pub fn min(self, other: Self) -> Self {
        if self.utc_micros() <= other.utc_micros() {
            self
        } else {
            other
        }
    }

    /// The later of two instants on the UTC axis.
    pub fn max(self, other: Self) -> Self {
        if self.utc_micros() >= other.utc_micros() {
            self
        } else {
            other
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Trait implementations
// ═══════════════════════════════════════════════════════════════════════════

// ── Ordering ──────────────────────────────────────────────────────────────

impl PartialEq for Instant {
    fn eq(&self, other: &Self) -> bool {
        self.utc_micros() == other.utc_micros()
    }
}

impl Eq for Instant {}

impl PartialOrd for Instant {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Instant {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.utc_micros().cmp(&other.utc_micros())
    }
}

// ── Display ───────────────────────────────────────────────────────────────

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.zone {
            None => write!(f, "{}", self.naive().format("%Y-%m-%d %H:%M:%S%.6f")),
            Some(tz) => write!(
                f,
                "{}",
                zone::localize(tz, self.naive()).format("%Y-%m-%d %H:%M:%S%.6f%z")
            ),
        }
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

#[inline]
fn delta_micros(delta: TimeDelta) -> i64 {
    // Deltas beyond ±i64 µs saturate; the domain never produces them.
    delta.num_microseconds().unwrap_or_else(|| {
        if delta > TimeDelta::zero() {
            i64::MAX
        } else {
            i64::MIN
        }
    })
}

impl Add<TimeDelta> for Instant {
    type Output = Self;
    fn add(self, rhs: TimeDelta) -> Self::Output {
        Self {
            micros: clamp_micros(self.micros.saturating_add(delta_micros(rhs))),
            zone: self.zone,
        }
    }
}

impl AddAssign<TimeDelta> for Instant {
    fn add_assign(&mut self, rhs: TimeDelta) {
        *self = *self + rhs;
    }
}

impl Sub<TimeDelta> for Instant {
    type Output = Self;
    fn sub(self, rhs: TimeDelta) -> Self::Output {
        Self {
            micros: clamp_micros(self.micros.saturating_sub(delta_micros(rhs))),
            zone: self.zone,
        }
    }
}

impl SubAssign<TimeDelta> for Instant {
    fn sub_assign(&mut self, rhs: TimeDelta) {
        *self = *self - rhs;
    }
}

impl Sub for Instant {
    type Output = TimeDelta;
    fn sub(self, rhs: Self) -> Self::Output {
        TimeDelta::microseconds(self.utc_micros().saturating_sub(rhs.utc_micros()))
    }
}

// ── From/Into chrono ──────────────────────────────────────────────────────

impl From<NaiveDateTime> for Instant {
    fn from(naive: NaiveDateTime) -> Self {
        Self::from_naive(naive)
    }
}

impl From<DateTime<Utc>> for Instant {
    fn from(datetime: DateTime<Utc>) -> Self {
        Self::from_utc(datetime)
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl serde::Serialize for Instant {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Instant {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::Deserialize;
        let text = String::deserialize(deserializer)?;
        Instant::parse(&text).map_err(serde::de::Error::custom)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    fn naive(text: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%.f").unwrap()
    }

    #[test]
    fn parse_bare_timestamp_keeps_wall_clock() {
        let instant = Instant::parse("2009-06-04 12:00:00").unwrap();
        assert_eq!(instant.naive(), naive("2009-06-04 12:00:00"));
        // Test binaries run with the UTC fallback default zone.
        assert_eq!(instant.zone(), Some(Tz::UTC));
    }

    #[test]
    fn parse_accepts_t_separator_and_fractions() {
        let instant = Instant::parse("2020-01-01T08:30:15.250000").unwrap();
        assert_eq!(instant.naive(), naive("2020-01-01 08:30:15.25"));
    }

    #[test]
    fn parse_accepts_bare_date_as_midnight() {
        let instant = Instant::parse("2009-06-04").unwrap();
        assert_eq!(instant.naive(), naive("2009-06-04 00:00:00"));
    }

    #[test]
    fn parse_offset_with_colon_shifts_to_utc() {
        let instant = Instant::parse("2009-06-04 12:00:00+01:00").unwrap();
        assert_eq!(instant.naive(), naive("2009-06-04 11:00:00"));
        assert_eq!(instant.zone(), Some(Tz::UTC));
    }

    #[test]
    fn parse_compact_and_hours_only_offsets() {
        let compact = Instant::parse("2009-06-04 12:00:00 +0100").unwrap();
        assert_eq!(compact.naive(), naive("2009-06-04 11:00:00"));

        let hours_only = Instant::parse("2009-06-04 12:00:00-05").unwrap();
        assert_eq!(hours_only.naive(), naive("2009-06-04 17:00:00"));
    }

    #[test]
    fn parse_negative_offset_applies_sign_to_minutes_too() {
        // -05:30 means 5h30m behind UTC, so the UTC value is 5h30m later.
        let instant = Instant::parse("2009-06-04 12:00:00-05:30").unwrap();
        assert_eq!(instant.naive(), naive("2009-06-04 17:30:00"));
    }

    #[test]
    fn parse_strips_surrounding_quotes() {
        let quoted = Instant::parse("\"2009-06-04 12:00:00+01:00\"").unwrap();
        let plain = Instant::parse("2009-06-04 12:00:00+01:00").unwrap();
        assert_eq!(quoted, plain);
    }

    #[test]
    fn parse_failure_carries_input() {
        let err = Instant::parse("yesterday-ish").unwrap_err();
        assert_eq!(err, TemporalError::Parse("yesterday-ish".to_owned()));
    }

    #[test]
    fn comparison_is_utc_normalized() {
        let offset = Instant::parse("2009-06-04 12:00:00+01:00").unwrap();
        let bare = Instant::parse("2009-06-04 11:00:00").unwrap();
        assert_eq!(offset, bare);

        let later = Instant::parse("2009-06-04 11:00:01").unwrap();
        assert!(offset < later);
        assert_eq!(offset.max(later), later);
        assert_eq!(offset.min(later), offset);
    }

    #[test]
    fn resolution_arithmetic_is_exact() {
        let instant = Instant::parse("2020-01-01 00:00:00").unwrap();
        let bumped = instant + TIME_RESOLUTION;
        assert_eq!(bumped.naive(), naive("2020-01-01 00:00:00.000001"));
        assert_eq!(bumped - TIME_RESOLUTION, instant);
        assert_eq!(bumped - instant, TIME_RESOLUTION);
    }

    #[test]
    fn arithmetic_saturates_at_the_sentinel() {
        let past_the_end = TIME_CURRENT + TIME_RESOLUTION;
        assert_eq!(past_the_end, TIME_CURRENT);
        assert_eq!(
            TIME_CURRENT
                .naive()
                .format("%Y-%m-%d %H:%M:%S%.6f")
                .to_string(),
            "9999-12-31 23:59:59.999999"
        );
    }

    #[test]
    fn add_assign_sub_assign() {
        let mut instant = Instant::parse("2020-01-01 00:00:00").unwrap();
        instant += TimeDelta::seconds(90);
        assert_eq!(instant.naive(), naive("2020-01-01 00:01:30"));
        instant -= TimeDelta::seconds(30);
        assert_eq!(instant.naive(), naive("2020-01-01 00:01:00"));
    }

    #[test]
    fn normalize_naive_attaches_without_shifting() {
        let instant = Instant::from_naive(naive("2009-06-04 12:00:00"));
        let localized = instant.normalize_to(Tz::Europe__London);
        assert_eq!(localized.naive(), naive("2009-06-04 12:00:00"));
        assert_eq!(localized.zone(), Some(Tz::Europe__London));
    }

    #[test]
    fn normalize_zoned_converts_wall_clock() {
        // 11:00 UTC is 12:00 BST during the London summer.
        let utc = Instant::parse("2009-06-04 11:00:00+00:00").unwrap();
        let london = utc.normalize_to(Tz::Europe__London);
        assert_eq!(london.naive(), naive("2009-06-04 12:00:00"));
        // Still the same point on the UTC axis.
        assert_eq!(london, utc);
    }

    #[test]
    fn as_local_timezone_uses_the_default() {
        let instant = Instant::from_naive(naive("2009-06-04 12:00:00"));
        let local = instant.as_local_timezone();
        assert_eq!(local.zone(), Some(Tz::UTC));
        assert_eq!(local.naive(), instant.naive());
    }

    #[test]
    fn display_naive_and_zoned() {
        let instant = Instant::from_naive(naive("2009-06-04 12:00:00"));
        assert_eq!(instant.to_string(), "2009-06-04 12:00:00.000000");

        let zoned = Instant::parse("2009-06-04 12:00:00+01:00").unwrap();
        assert_eq!(zoned.to_string(), "2009-06-04 11:00:00.000000+0000");
    }

    #[test]
    fn from_chrono_values() {
        let dt = DateTime::from_timestamp(1_244_113_200, 0).unwrap(); // 2009-06-04 11:00 UTC
        let from_utc = Instant::from(dt);
        let from_naive = Instant::from(dt.naive_utc());
        assert_eq!(from_utc, from_naive);
        assert_eq!(from_utc.zone(), Some(Tz::UTC));
        assert_eq!(from_naive.zone(), None);
    }
}
