// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Interval algebra over canonical half-open periods.
//!
//! All predicates are pure functions of two already-normalized periods and
//! are mutually consistent: `overlaps` is symmetric, mutual containment
//! implies equality, and adjacency excludes overlap.  Because every period
//! is stored half-open, none of the definitions needs to special-case the
//! inclusivity flags.
//!
//! The query layer addresses these predicates by name through
//! [`PeriodOperator`] and [`evaluate`]; any name outside the supported set
//! is rejected with [`TemporalError::UnsupportedOperator`].

use crate::error::TemporalError;
use crate::instant::Instant;
use crate::period::Period;
use std::fmt;
use std::str::FromStr;

// ═══════════════════════════════════════════════════════════════════════════
// Predicates
// ═══════════════════════════════════════════════════════════════════════════

impl Period {
    /// Same span: equal starts and equal ends.
    pub fn equals(&self, other: &Period) -> bool {
        self.start() == other.start() && self.end() == other.end()
    }

    /// Negation of [`equals`](Self::equals).
    pub fn nequals(&self, other: &Period) -> bool {
        !self.equals(other)
    }

    /// `other` lies entirely within `self`.
    pub fn contains(&self, other: &Period) -> bool {
        self.start() <= other.start() && other.end() <= self.end()
    }

    /// `self` lies entirely within `other`.
    pub fn contained_by(&self, other: &Period) -> bool {
        other.contains(self)
    }

    /// The two spans share at least one instant.
    pub fn overlaps(&self, other: &Period) -> bool {
        self.start() < other.end() && other.start() < self.end()
    }

    /// `self` ends at or before `other` starts.
    pub fn before(&self, other: &Period) -> bool {
        self.end() <= other.start()
    }

    /// `self` starts at or after `other` ends.
    pub fn after(&self, other: &Period) -> bool {
        other.end() <= self.start()
    }

    /// The spans share exactly one boundary with no overlap.
    pub fn adjacent(&self, other: &Period) -> bool {
        self.end() == other.start() || other.end() == self.start()
    }

    /// `self` does not extend to the right of `other`.
    pub fn overleft(&self, other: &Period) -> bool {
        self.start() <= other.start() && self.end() <= other.end()
    }

    /// `self` does not extend to the left of `other`.
    pub fn overright(&self, other: &Period) -> bool {
        self.start() >= other.start() && self.end() >= other.end()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Operator dispatch
// ═══════════════════════════════════════════════════════════════════════════

/// The lookup names consumed by the query layer, 1:1 with a predicate or a
/// boundary point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodOperator {
    Exact,
    Lt,
    Lte,
    Gt,
    Gte,
    Nequals,
    Contains,
    ContainedBy,
    Overlaps,
    Before,
    After,
    Overleft,
    Overright,
    Adjacent,
    Prior,
    First,
    Last,
    Next,
}

impl PeriodOperator {
    /// The wire name of the operator.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Lt => "lt",
            Self::Lte => "lte",
            Self::Gt => "gt",
            Self::Gte => "gte",
            Self::Nequals => "nequals",
            Self::Contains => "contains",
            Self::ContainedBy => "contained_by",
            Self::Overlaps => "overlaps",
            Self::Before => "before",
            Self::After => "after",
            Self::Overleft => "overleft",
            Self::Overright => "overright",
            Self::Adjacent => "adjacent",
            Self::Prior => "prior",
            Self::First => "first",
            Self::Last => "last",
            Self::Next => "next",
        }
    }
}

impl FromStr for PeriodOperator {
    type Err = TemporalError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "exact" => Ok(Self::Exact),
            "lt" => Ok(Self::Lt),
            "lte" => Ok(Self::Lte),
            "gt" => Ok(Self::Gt),
            "gte" => Ok(Self::Gte),
            "nequals" => Ok(Self::Nequals),
            "contains" => Ok(Self::Contains),
            "contained_by" => Ok(Self::ContainedBy),
            "overlaps" => Ok(Self::Overlaps),
            "before" => Ok(Self::Before),
            "after" => Ok(Self::After),
            "overleft" => Ok(Self::Overleft),
            "overright" => Ok(Self::Overright),
            "adjacent" => Ok(Self::Adjacent),
            "prior" => Ok(Self::Prior),
            "first" => Ok(Self::First),
            "last" => Ok(Self::Last),
            "next" => Ok(Self::Next),
            other => Err(TemporalError::UnsupportedOperator(other.to_owned())),
        }
    }
}

impl fmt::Display for PeriodOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Right-hand side of an [`evaluate`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Period(Period),
    Instant(Instant),
}

impl From<Period> for Operand {
    fn from(period: Period) -> Self {
        Self::Period(period)
    }
}

impl From<Instant> for Operand {
    fn from(instant: Instant) -> Self {
        Self::Instant(instant)
    }
}

impl Operand {
    fn period(&self, operator: PeriodOperator) -> Result<&Period, TemporalError> {
        match self {
            Self::Period(period) => Ok(period),
            Self::Instant(_) => Err(TemporalError::InvalidArgument(format!(
                "operator {operator} requires a period operand"
            ))),
        }
    }

    fn instant(&self, operator: PeriodOperator) -> Result<Instant, TemporalError> {
        match self {
            Self::Instant(instant) => Ok(*instant),
            Self::Period(_) => Err(TemporalError::InvalidArgument(format!(
                "operator {operator} requires an instant operand"
            ))),
        }
    }
}

/// Evaluate a named operator against a period and an operand.
///
/// Interval operators (`exact`, `contains`, `overlaps`, …) require a period
/// operand.  The ordering operators `lt`/`lte`/`gt`/`gte` compare the
/// period's **start** against an instant operand (or another period's
/// start).  The point operators `prior`/`first`/`last`/`next` require an
/// instant operand and test whether the named boundary point equals it.
///
/// # Examples
///
/// ```
/// use validtime::{evaluate, Operand, Period};
///
/// let a: Period = "[2020-01-01 00:00:00,2020-06-01 00:00:00)".parse().unwrap();
/// let b: Period = "[2020-03-01 00:00:00,2020-09-01 00:00:00)".parse().unwrap();
/// assert!(evaluate("overlaps", &a, &Operand::Period(b)).unwrap());
/// ```
pub fn evaluate(operator: &str, lhs: &Period, rhs: &Operand) -> Result<bool, TemporalError> {
    let operator: PeriodOperator = operator.parse()?;
    let outcome = match operator {
        PeriodOperator::Exact => lhs.equals(rhs.period(operator)?),
        PeriodOperator::Nequals => lhs.nequals(rhs.period(operator)?),
        PeriodOperator::Contains => lhs.contains(rhs.period(operator)?),
        PeriodOperator::ContainedBy => lhs.contained_by(rhs.period(operator)?),
        PeriodOperator::Overlaps => lhs.overlaps(rhs.period(operator)?),
        PeriodOperator::Before => lhs.before(rhs.period(operator)?),
        PeriodOperator::After => lhs.after(rhs.period(operator)?),
        PeriodOperator::Overleft => lhs.overleft(rhs.period(operator)?),
        PeriodOperator::Overright => lhs.overright(rhs.period(operator)?),
        PeriodOperator::Adjacent => lhs.adjacent(rhs.period(operator)?),
        PeriodOperator::Lt | PeriodOperator::Lte | PeriodOperator::Gt | PeriodOperator::Gte => {
            let point = match rhs {
                Operand::Instant(instant) => *instant,
                Operand::Period(period) => period.start(),
            };
            match operator {
                PeriodOperator::Lt => lhs.start() < point,
                PeriodOperator::Lte => lhs.start() <= point,
                PeriodOperator::Gt => lhs.start() > point,
                _ => lhs.start() >= point,
            }
        }
        PeriodOperator::Prior => lhs.prior() == rhs.instant(operator)?,
        PeriodOperator::First => lhs.first() == rhs.instant(operator)?,
        PeriodOperator::Last => lhs.last() == rhs.instant(operator)?,
        PeriodOperator::Next => lhs.next() == rhs.instant(operator)?,
    };
    Ok(outcome)
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    fn period(text: &str) -> Period {
        text.parse().unwrap()
    }

    fn instant(text: &str) -> Instant {
        Instant::parse(text).unwrap()
    }

    // [Jan, Mar)  [Feb, Apr)  [Mar, May)
    fn jan_mar() -> Period {
        period("[2020-01-01 00:00:00,2020-03-01 00:00:00)")
    }
    fn feb_apr() -> Period {
        period("[2020-02-01 00:00:00,2020-04-01 00:00:00)")
    }
    fn mar_may() -> Period {
        period("[2020-03-01 00:00:00,2020-05-01 00:00:00)")
    }
    fn jan_may() -> Period {
        period("[2020-01-01 00:00:00,2020-05-01 00:00:00)")
    }

    #[test]
    fn equals_and_nequals() {
        assert!(jan_mar().equals(&jan_mar()));
        assert!(!jan_mar().equals(&feb_apr()));
        assert!(jan_mar().nequals(&feb_apr()));
    }

    #[test]
    fn containment() {
        assert!(jan_may().contains(&feb_apr()));
        assert!(feb_apr().contained_by(&jan_may()));
        assert!(!feb_apr().contains(&jan_may()));
        // Containment is reflexive on half-open spans.
        assert!(jan_mar().contains(&jan_mar()));
    }

    #[test]
    fn mutual_containment_implies_equality() {
        let a = jan_mar();
        let b = period("(2019-12-31 23:59:59.999999,2020-02-29 23:59:59.999999]");
        assert!(a.contains(&b) && b.contains(&a));
        assert!(a.equals(&b));
    }

    #[test]
    fn overlaps_is_symmetric() {
        assert!(jan_mar().overlaps(&feb_apr()));
        assert!(feb_apr().overlaps(&jan_mar()));
        assert!(!jan_mar().overlaps(&mar_may()));
        assert!(!mar_may().overlaps(&jan_mar()));
    }

    #[test]
    fn before_and_after() {
        assert!(jan_mar().before(&mar_may()));
        assert!(mar_may().after(&jan_mar()));
        assert!(!jan_mar().before(&feb_apr()));
        assert!(!jan_mar().after(&feb_apr()));
    }

    #[test]
    fn adjacency_excludes_overlap() {
        assert!(jan_mar().adjacent(&mar_may()));
        assert!(mar_may().adjacent(&jan_mar()));
        assert!(!jan_mar().overlaps(&mar_may()));
        assert!(!jan_mar().adjacent(&feb_apr()));
    }

    #[test]
    fn overleft_and_overright() {
        assert!(jan_mar().overleft(&feb_apr()));
        assert!(!feb_apr().overleft(&jan_mar()));
        assert!(feb_apr().overright(&jan_mar()));
        assert!(!jan_mar().overright(&feb_apr()));
        // A span is overleft and overright of itself.
        assert!(jan_mar().overleft(&jan_mar()));
        assert!(jan_mar().overright(&jan_mar()));
    }

    #[test]
    fn operator_names_parse_one_to_one() {
        for name in [
            "exact",
            "lt",
            "lte",
            "gt",
            "gte",
            "nequals",
            "contains",
            "contained_by",
            "overlaps",
            "before",
            "after",
            "overleft",
            "overright",
            "adjacent",
            "prior",
            "first",
            "last",
            "next",
        ] {
            let operator: PeriodOperator = name.parse().unwrap();
            assert_eq!(operator.as_str(), name);
        }
    }

    #[test]
    fn unknown_operator_is_rejected_by_name() {
        let err = evaluate("between", &jan_mar(), &Operand::Period(feb_apr())).unwrap_err();
        assert_eq!(err, TemporalError::UnsupportedOperator("between".to_owned()));
    }

    #[test]
    fn evaluate_dispatches_interval_operators() {
        let a = jan_mar();
        assert!(evaluate("exact", &a, &Operand::Period(jan_mar())).unwrap());
        assert!(evaluate("nequals", &a, &Operand::Period(feb_apr())).unwrap());
        assert!(evaluate("overlaps", &a, &Operand::Period(feb_apr())).unwrap());
        assert!(evaluate("before", &a, &Operand::Period(mar_may())).unwrap());
        assert!(evaluate("adjacent", &a, &Operand::Period(mar_may())).unwrap());
        assert!(evaluate("contained_by", &a, &Operand::Period(jan_may())).unwrap());
    }

    #[test]
    fn interval_operators_require_a_period_operand() {
        let err = evaluate(
            "overlaps",
            &jan_mar(),
            &Operand::Instant(instant("2020-02-01 00:00:00")),
        )
        .unwrap_err();
        assert!(matches!(err, TemporalError::InvalidArgument(_)));
    }

    #[test]
    fn ordering_operators_compare_starts() {
        let a = jan_mar();
        let after_start = Operand::Instant(instant("2020-01-15 00:00:00"));
        let at_start = Operand::Instant(instant("2020-01-01 00:00:00"));

        assert!(evaluate("lt", &a, &after_start).unwrap());
        assert!(evaluate("lte", &a, &at_start).unwrap());
        assert!(!evaluate("gt", &a, &at_start).unwrap());
        assert!(evaluate("gte", &a, &at_start).unwrap());

        // Against a period operand the comparison uses the other start too.
        assert!(evaluate("lt", &a, &Operand::Period(feb_apr())).unwrap());
        assert!(!evaluate("gt", &a, &Operand::Period(feb_apr())).unwrap());
    }

    #[test]
    fn point_operators_match_boundary_points() {
        let a = jan_mar();
        assert!(evaluate(
            "first",
            &a,
            &Operand::Instant(instant("2020-01-01 00:00:00"))
        )
        .unwrap());
        assert!(evaluate(
            "prior",
            &a,
            &Operand::Instant(instant("2019-12-31 23:59:59.999999"))
        )
        .unwrap());
        assert!(evaluate(
            "last",
            &a,
            &Operand::Instant(instant("2020-02-29 23:59:59.999999"))
        )
        .unwrap());
        assert!(evaluate(
            "next",
            &a,
            &Operand::Instant(instant("2020-03-01 00:00:00"))
        )
        .unwrap());
        assert!(!evaluate(
            "next",
            &a,
            &Operand::Instant(instant("2020-03-01 00:00:01"))
        )
        .unwrap());
    }

    #[test]
    fn point_operators_require_an_instant_operand() {
        let err = evaluate("first", &jan_mar(), &Operand::Period(feb_apr())).unwrap_err();
        assert!(matches!(err, TemporalError::InvalidArgument(_)));
    }
}
