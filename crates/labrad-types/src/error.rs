// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Error types.
//!
//! [`TypeError`] covers misuse of descriptors and rejected extractions,
//! [`ParseError`] covers malformed type tags. Both are logic errors
//! reported to the immediate caller; nothing here is transient.

use crate::types::Type;
use thiserror::Error;

/// Errors raised by descriptor queries and typed extraction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TypeError {
    /// The payload's wire type does not satisfy the declared type.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch { expected: Type, actual: Type },

    /// `data_width` was asked of a variable-width type.
    #[error("type {0} has no fixed data width")]
    WidthUnavailable(Type),

    /// No getter is registered for the requested native type.
    #[error("no getter registered for native type {0}")]
    UnregisteredType(&'static str),

    /// Units text that cannot appear inside a `[...]` annotation.
    #[error("invalid units {0:?}")]
    InvalidUnits(String),

    /// A payload could not be built from the given parts.
    #[error("invalid data: {0}")]
    InvalidData(String),
}

impl TypeError {
    pub(crate) fn mismatch(expected: &Type, actual: &Type) -> Self {
        Self::TypeMismatch {
            expected: expected.clone(),
            actual: actual.clone(),
        }
    }
}

/// Errors raised while parsing a type tag.
///
/// Positions are character offsets into the original tag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unexpected character '{ch}' at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    #[error("unexpected end of type tag")]
    UnexpectedEnd,

    #[error("units opened at position {pos} are never closed")]
    UnclosedUnits { pos: usize },

    #[error("empty cluster at position {pos}")]
    EmptyCluster { pos: usize },

    #[error("invalid list depth at position {pos}")]
    InvalidDepth { pos: usize },

    #[error("type nested too deeply at position {pos}")]
    TooDeep { pos: usize },
}

pub type Result<T> = std::result::Result<T, TypeError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_errors_threadsafe() {
        assert_send_sync::<TypeError>();
        assert_send_sync::<ParseError>();
    }

    #[test]
    fn test_mismatch_display() {
        let err = TypeError::mismatch(Type::int(), Type::str());
        assert_eq!(err.to_string(), "type mismatch: expected i, got s");
    }

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::UnexpectedChar { ch: 'x', pos: 3 };
        assert_eq!(err.to_string(), "unexpected character 'x' at position 3");
    }
}
