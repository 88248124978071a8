// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error taxonomy for the valid-time core.
//!
//! Every failure carries the offending input verbatim.  There is no silent
//! coercion anywhere in the crate: parsers and constructors either return a
//! fully-normalized value or one of these errors, never a partial one.

/// Errors surfaced by parsing, construction, and operator dispatch.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemporalError {
    /// A timestamp or period literal did not match the expected grammar.
    #[error("invalid timestamp or period literal: {0:?}")]
    Parse(String),

    /// Constructor or operator arguments were insufficient or mismatched.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An operator name outside the supported lookup set.
    #[error("unsupported period operator: {0:?}")]
    UnsupportedOperator(String),

    /// A time zone name that does not resolve to an IANA zone.
    #[error("unknown time zone: {0:?}")]
    Timezone(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_the_offending_input() {
        let err = TemporalError::Parse("not-a-date".to_owned());
        assert!(err.to_string().contains("not-a-date"));

        let err = TemporalError::UnsupportedOperator("between".to_owned());
        assert!(err.to_string().contains("between"));

        let err = TemporalError::Timezone("Mars/Olympus".to_owned());
        assert!(err.to_string().contains("Mars/Olympus"));
    }
}
