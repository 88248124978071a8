// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time-zone resolution and the process-wide default zone.
//!
//! Naive timestamps carry no zone of their own; parsing tags them with the
//! configured default zone (without shifting the wall-clock fields).  The
//! default is process-wide, set once at startup via [`set_default_timezone`],
//! and read-only afterwards — parsers may consult it concurrently without
//! synchronization.

use crate::error::TemporalError;
use chrono::{LocalResult, NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use std::sync::OnceLock;

static DEFAULT_ZONE: OnceLock<Tz> = OnceLock::new();

/// Resolve an IANA zone name (e.g. `"Europe/Ljubljana"`).
pub fn lookup_timezone(name: &str) -> Result<Tz, TemporalError> {
    name.parse()
        .map_err(|_| TemporalError::Timezone(name.to_owned()))
}

/// Configure the default zone applied to naive timestamps.
///
/// May be called at most once, before any parsing has consulted the default.
/// Later calls fail with [`TemporalError::InvalidArgument`] rather than
/// racing with readers.
pub fn set_default_timezone(name: &str) -> Result<(), TemporalError> {
    let tz = lookup_timezone(name)?;
    DEFAULT_ZONE.set(tz).map_err(|_| {
        TemporalError::InvalidArgument("default time zone is already configured".to_owned())
    })
}

/// The configured default zone, falling back to UTC.
///
/// The first read pins the value for the lifetime of the process.
pub fn default_timezone() -> Tz {
    *DEFAULT_ZONE.get_or_init(|| Tz::UTC)
}

/// Attach `zone` to a naive wall-clock value.
///
/// Wall times made ambiguous by a DST transition take the earlier offset;
/// wall times skipped by a transition fall back to the UTC-aligned reading.
pub(crate) fn localize(zone: Tz, naive: NaiveDateTime) -> chrono::DateTime<Tz> {
    match zone.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earlier, _) => earlier,
        LocalResult::None => zone.from_utc_datetime(&naive),
    }
}
