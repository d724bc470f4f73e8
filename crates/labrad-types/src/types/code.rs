// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Wire-type discriminants.
//!
//! A [`Code`] identifies the kind of a wire type without any of the
//! parameters a composite type carries (cluster members, list element,
//! units). It is what the signature grammar prints as the first character
//! of a type tag.

/// Discriminant of a wire type variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Code {
    /// Wildcard, compatible with every type
    Any,
    /// No data (zero bytes)
    Empty,
    /// Boolean (1 byte)
    Bool,
    /// Signed 32-bit integer
    Int,
    /// Unsigned 32-bit integer
    Word,
    /// Length-prefixed byte string
    Str,
    /// Timestamp (seconds + binary fraction, 16 bytes)
    Time,
    /// 64-bit float, optionally with units
    Value,
    /// Pair of 64-bit floats, optionally with units
    Complex,
    /// Ordered heterogeneous tuple
    Cluster,
    /// Homogeneous n-dimensional list
    List,
    /// Error record with optional payload
    Error,
}

impl Code {
    /// Every code, in declaration order.
    pub const ALL: [Code; 12] = [
        Code::Any,
        Code::Empty,
        Code::Bool,
        Code::Int,
        Code::Word,
        Code::Str,
        Code::Time,
        Code::Value,
        Code::Complex,
        Code::Cluster,
        Code::List,
        Code::Error,
    ];

    /// Signature character used in type tags.
    ///
    /// Composite codes return the character that opens their tag (`(` for
    /// clusters, `*` for lists, `E` for errors).
    pub const fn as_char(self) -> char {
        match self {
            Code::Any => '?',
            Code::Empty => '_',
            Code::Bool => 'b',
            Code::Int => 'i',
            Code::Word => 'w',
            Code::Str => 's',
            Code::Time => 't',
            Code::Value => 'v',
            Code::Complex => 'c',
            Code::Cluster => '(',
            Code::List => '*',
            Code::Error => 'E',
        }
    }

    /// Inverse of [`Code::as_char`].
    pub const fn from_char(ch: char) -> Option<Code> {
        match ch {
            '?' => Some(Code::Any),
            '_' => Some(Code::Empty),
            'b' => Some(Code::Bool),
            'i' => Some(Code::Int),
            'w' => Some(Code::Word),
            's' => Some(Code::Str),
            't' => Some(Code::Time),
            'v' => Some(Code::Value),
            'c' => Some(Code::Complex),
            '(' => Some(Code::Cluster),
            '*' => Some(Code::List),
            'E' => Some(Code::Error),
            _ => None,
        }
    }

    /// Human-readable name for diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Code::Any => "any",
            Code::Empty => "empty",
            Code::Bool => "bool",
            Code::Int => "int",
            Code::Word => "word",
            Code::Str => "string",
            Code::Time => "time",
            Code::Value => "value",
            Code::Complex => "complex",
            Code::Cluster => "cluster",
            Code::List => "list",
            Code::Error => "error",
        }
    }

    /// Returns true for codes whose descriptors nest other descriptors.
    pub const fn is_composite(self) -> bool {
        matches!(self, Code::Cluster | Code::List | Code::Error)
    }

    /// Returns the wire width in bytes of a simple code, `None` for
    /// variable-width and composite codes.
    ///
    /// Clusters may still be fixed-width; that depends on their members and
    /// is answered by [`Type::fixed_width`](crate::Type::fixed_width).
    pub const fn simple_width(self) -> Option<usize> {
        match self {
            Code::Empty => Some(0),
            Code::Bool => Some(1),
            Code::Int | Code::Word => Some(4),
            Code::Value => Some(8),
            Code::Time | Code::Complex => Some(16),
            Code::Any | Code::Str | Code::Cluster | Code::List | Code::Error => None,
        }
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_roundtrip() {
        for code in Code::ALL {
            assert_eq!(Code::from_char(code.as_char()), Some(code));
        }
        assert_eq!(Code::from_char('x'), None);
        assert_eq!(Code::from_char(')'), None);
    }

    #[test]
    fn test_chars_unique() {
        let mut chars: Vec<char> = Code::ALL.iter().map(|c| c.as_char()).collect();
        chars.sort_unstable();
        chars.dedup();
        assert_eq!(chars.len(), Code::ALL.len());
    }

    #[test]
    fn test_simple_widths() {
        assert_eq!(Code::Int.simple_width(), Some(4));
        assert_eq!(Code::Bool.simple_width(), Some(1));
        assert_eq!(Code::Time.simple_width(), Some(16));
        assert_eq!(Code::Empty.simple_width(), Some(0));
        assert_eq!(Code::Str.simple_width(), None);
        assert_eq!(Code::Any.simple_width(), None);
    }

    #[test]
    fn test_composite_codes() {
        assert!(Code::Cluster.is_composite());
        assert!(Code::List.is_composite());
        assert!(Code::Error.is_composite());
        assert!(!Code::Int.is_composite());
        assert_eq!(Code::Str.to_string(), "string");
    }
}
