// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Valid-Time Module
//!
//! This crate provides the value types and interval algebra for modelling
//! *valid time* — the span during which a fact was true — in a bitemporal
//! store.  SQL generation, schema management, and ORM wiring are external
//! collaborators: they hand this core literal strings and instants, and
//! persist the canonical textual form it produces.
//!
//! # Core types
//!
//! - [`Instant`] — timezone-aware point in time, microsecond resolution.
//! - [`Period`] — canonical half-open `[start, end)` span of two instants.
//! - [`TIME_CURRENT`] — the "no known end" sentinel (maximum instant).
//! - [`TIME_RESOLUTION`] — one microsecond, the open/closed conversion step.
//! - [`PeriodOperator`] / [`Operand`] / [`evaluate`] — named predicate
//!   dispatch for the query layer.
//! - [`TemporalError`] — parse, argument, operator, and zone failures.
//!
//! # Canonical form
//!
//! Whatever bound combination is supplied, a stored period is always
//! half-open: an exclusive start becomes `start + 1µs` (closed), an
//! inclusive end becomes `end + 1µs` (open).  The literal form is
//!
//! ```text
//! [2009-06-04 11:00:00.000000+0000,2009-06-05 11:00:00.000000+0000)
//! ```
//!
//! # Operators
//!
//! | Name | Meaning |
//! |------|---------|
//! | `exact` / `nequals` | span equality / inequality |
//! | `contains` / `contained_by` | containment either way |
//! | `overlaps` | shared instants |
//! | `before` / `after` | strict ordering with no overlap |
//! | `overleft` / `overright` | does not extend right / left of |
//! | `adjacent` | shares exactly one boundary |
//! | `lt` / `lte` / `gt` / `gte` | ordering on the period **start** |
//! | `prior` / `first` / `last` / `next` | boundary-point match |
//!
//! # Time zones
//!
//! Bare timestamps are tagged with the process default zone (configured once
//! via [`set_default_timezone`], UTC by default); offset-suffixed timestamps
//! are shifted to UTC on parse.  Stored period bounds are zone-naive
//! UTC-equivalents, so all predicate evaluation is plain scalar comparison.
//!
//! ```
//! use validtime::{evaluate, Instant, Operand, Period};
//!
//! let p: Period = "[2009-06-04 12:00:00+01:00,2009-06-05 12:00:00+01:00)"
//!     .parse()
//!     .unwrap();
//! let ongoing = Period::from_start(Instant::parse("2009-06-05 11:00:00").unwrap());
//!
//! assert!(ongoing.is_current());
//! assert!(evaluate("before", &p, &Operand::Period(ongoing)).unwrap());
//! ```

mod algebra;
mod error;
mod instant;
mod literal;
mod period;
mod zone;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use algebra::{evaluate, Operand, PeriodOperator};
pub use error::TemporalError;
pub use instant::{Instant, TIME_CURRENT, TIME_RESOLUTION};
pub use period::Period;
pub use zone::{default_timezone, lookup_timezone, set_default_timezone};
