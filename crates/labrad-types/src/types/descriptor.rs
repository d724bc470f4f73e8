// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type descriptors for LabRAD wire values.

use crate::error::TypeError;
use crate::types::{Code, ANY, BOOL, COMPLEX, EMPTY, INT, STR, TIME, VALUE, WORD};
use std::fmt;
use std::num::NonZeroU32;
use std::ops::Deref;

/// A wire type.
///
/// Simple variants carry no fields and have one canonical `static`
/// instance each (see [`Type::int`] and friends). Composite variants nest
/// other descriptors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Type {
    /// Wildcard.
    Any,
    /// No data.
    Empty,
    /// Boolean.
    Bool,
    /// Signed 32-bit integer.
    Int,
    /// Unsigned 32-bit integer.
    Word,
    /// Byte string.
    Str,
    /// Timestamp.
    Time,
    /// Real value with optional units (`v`, `v[Hz]`).
    Value(Option<Units>),
    /// Complex value with optional units (`c`, `c[V]`).
    Complex(Option<Units>),
    /// Ordered, non-empty members.
    Cluster(Members),
    /// Rectangular list of `depth` dimensions.
    List { element: Box<Type>, depth: NonZeroU32 },
    /// Error record, optionally carrying a typed payload.
    Error(Option<Box<Type>>),
}

impl Type {
    /// Canonical wildcard descriptor.
    pub fn any() -> &'static Type {
        &ANY
    }

    /// Canonical empty descriptor.
    pub fn empty() -> &'static Type {
        &EMPTY
    }

    /// Canonical boolean descriptor.
    pub fn bool() -> &'static Type {
        &BOOL
    }

    /// Canonical 32-bit signed integer descriptor.
    pub fn int() -> &'static Type {
        &INT
    }

    /// Canonical 32-bit unsigned integer descriptor.
    pub fn word() -> &'static Type {
        &WORD
    }

    /// Canonical string descriptor.
    pub fn str() -> &'static Type {
        &STR
    }

    /// Canonical timestamp descriptor.
    pub fn time() -> &'static Type {
        &TIME
    }

    /// Canonical unitless real value descriptor.
    pub fn value() -> &'static Type {
        &VALUE
    }

    /// Canonical unitless complex descriptor.
    pub fn complex() -> &'static Type {
        &COMPLEX
    }

    /// Real value tagged with units. Fails if `units` contains `]`.
    pub fn value_with_units(units: impl Into<String>) -> Result<Type, TypeError> {
        Ok(Type::Value(Some(Units::new(units)?)))
    }

    /// Complex value tagged with units. Fails if `units` contains `]`.
    pub fn complex_with_units(units: impl Into<String>) -> Result<Type, TypeError> {
        Ok(Type::Complex(Some(Units::new(units)?)))
    }

    /// Cluster of the given members. No members gives [`Type::Empty`].
    pub fn cluster(members: impl IntoIterator<Item = Type>) -> Type {
        let members: Vec<Type> = members.into_iter().collect();
        Members::try_from(members).map_or(Type::Empty, Type::Cluster)
    }

    /// One-dimensional list.
    pub fn list(element: Type) -> Type {
        Self::list_nd(element, 1)
    }

    /// List of `depth` dimensions. A depth of zero is raised to one.
    pub fn list_nd(element: Type, depth: u32) -> Type {
        Type::List {
            element: Box::new(element),
            depth: NonZeroU32::new(depth).unwrap_or(NonZeroU32::MIN),
        }
    }

    /// Error with a typed payload.
    pub fn error_with_payload(payload: Type) -> Type {
        Type::Error(Some(Box::new(payload)))
    }

    /// Variant discriminant.
    pub fn code(&self) -> Code {
        match self {
            Type::Any => Code::Any,
            Type::Empty => Code::Empty,
            Type::Bool => Code::Bool,
            Type::Int => Code::Int,
            Type::Word => Code::Word,
            Type::Str => Code::Str,
            Type::Time => Code::Time,
            Type::Value(_) => Code::Value,
            Type::Complex(_) => Code::Complex,
            Type::Cluster(_) => Code::Cluster,
            Type::List { .. } => Code::List,
            Type::Error(_) => Code::Error,
        }
    }

    /// Character this variant contributes to a type tag.
    pub fn signature_char(&self) -> char {
        self.code().as_char()
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Type::Any)
    }

    pub fn is_composite(&self) -> bool {
        self.code().is_composite()
    }

    /// Compatibility check: does `other` satisfy a requirement declared as
    /// `self`?
    ///
    /// Call it as `declared.matches(actual)`. `Any` on either side matches
    /// everything; otherwise codes must agree and nested descriptors must
    /// match recursively. Units match when either side has none or both
    /// are equal. The relation is symmetric for every pair of descriptors,
    /// which the tests check in both directions.
    pub fn matches(&self, other: &Type) -> bool {
        if other.is_any() {
            return true;
        }
        match self {
            Type::Any => true,
            Type::Empty | Type::Bool | Type::Int | Type::Word | Type::Str | Type::Time => {
                self.code() == other.code()
            }
            Type::Value(units) => {
                matches!(other, Type::Value(theirs) if units_compatible(units, theirs))
            }
            Type::Complex(units) => {
                matches!(other, Type::Complex(theirs) if units_compatible(units, theirs))
            }
            Type::Cluster(members) => match other {
                Type::Cluster(theirs) => {
                    members.len() == theirs.len()
                        && members.iter().zip(theirs.iter()).all(|(a, b)| a.matches(b))
                }
                _ => false,
            },
            Type::List { element, depth } => match other {
                Type::List {
                    element: theirs,
                    depth: their_depth,
                } => depth == their_depth && element.matches(theirs),
                _ => false,
            },
            Type::Error(payload) => match other {
                Type::Error(theirs) => match (payload, theirs) {
                    (Some(a), Some(b)) => a.matches(b),
                    _ => true,
                },
                _ => false,
            },
        }
    }

    /// Wire width in bytes, `None` when values of this type vary in size.
    pub fn fixed_width(&self) -> Option<usize> {
        match self {
            Type::Cluster(members) => members.iter().map(Type::fixed_width).sum(),
            Type::Any
            | Type::Empty
            | Type::Bool
            | Type::Int
            | Type::Word
            | Type::Str
            | Type::Time
            | Type::Value(_)
            | Type::Complex(_)
            | Type::List { .. }
            | Type::Error(_) => self.code().simple_width(),
        }
    }

    /// Returns true if every value of this type has the same wire width.
    pub fn is_fixed_width(&self) -> bool {
        self.fixed_width().is_some()
    }

    /// Wire width in bytes.
    ///
    /// Only meaningful for fixed-width types: asking a variable-width type
    /// is a caller bug reported as [`TypeError::WidthUnavailable`].
    pub fn data_width(&self) -> Result<usize, TypeError> {
        self.fixed_width()
            .ok_or_else(|| TypeError::WidthUnavailable(self.clone()))
    }

    /// Units of a value or complex type.
    pub fn units(&self) -> Option<&str> {
        match self {
            Type::Value(units) | Type::Complex(units) => units.as_ref().map(Units::as_str),
            _ => None,
        }
    }

    /// Members of a cluster.
    pub fn members(&self) -> Option<&[Type]> {
        match self {
            Type::Cluster(members) => Some(members.as_slice()),
            _ => None,
        }
    }

    /// Element type of a list, payload type of an error.
    pub fn element(&self) -> Option<&Type> {
        match self {
            Type::List { element, .. } => Some(element),
            Type::Error(payload) => payload.as_deref(),
            _ => None,
        }
    }

    /// Number of list dimensions, `None` for non-lists.
    pub fn depth(&self) -> Option<u32> {
        match self {
            Type::List { depth, .. } => Some(depth.get()),
            _ => None,
        }
    }

    /// Human-oriented name, for diagnostics only.
    pub fn pretty(&self) -> String {
        match self {
            Type::Value(Some(units)) | Type::Complex(Some(units)) => {
                format!("{}[{}]", self.code().name(), units)
            }
            Type::Cluster(members) => {
                let inner: Vec<String> = members.iter().map(Type::pretty).collect();
                format!("cluster({})", inner.join(", "))
            }
            Type::List { element, depth } if depth.get() == 1 => {
                format!("list({})", element.pretty())
            }
            Type::List { element, depth } => format!("list{}d({})", depth, element.pretty()),
            Type::Error(Some(payload)) => format!("error({})", payload.pretty()),
            _ => self.code().name().to_string(),
        }
    }
}

impl Type {
    fn ends_with_bare_error(&self) -> bool {
        match self {
            Type::Error(None) => true,
            Type::Error(Some(inner)) => inner.ends_with_bare_error(),
            Type::List { element, .. } => element.ends_with_bare_error(),
            _ => false,
        }
    }
}

fn units_compatible(a: &Option<Units>, b: &Option<Units>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a == b,
        _ => true,
    }
}

/// Physical units annotation of a value or complex type.
///
/// Any text without `]`, which would close the bracket in the tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Units(String);

impl Units {
    pub fn new(units: impl Into<String>) -> Result<Self, TypeError> {
        let units = units.into();
        if units.contains(']') {
            return Err(TypeError::InvalidUnits(units));
        }
        Ok(Self(units))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Units {
    type Error = TypeError;

    fn try_from(units: String) -> Result<Self, Self::Error> {
        Self::new(units)
    }
}

impl From<Units> for String {
    fn from(units: Units) -> Self {
        units.0
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Members of a cluster type. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Type>", into = "Vec<Type>")
)]
pub struct Members(Vec<Type>);

impl Members {
    pub fn as_slice(&self) -> &[Type] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<Type> {
        self.0
    }
}

impl TryFrom<Vec<Type>> for Members {
    type Error = TypeError;

    fn try_from(members: Vec<Type>) -> Result<Self, Self::Error> {
        if members.is_empty() {
            return Err(TypeError::InvalidData("cluster must have members".into()));
        }
        Ok(Self(members))
    }
}

impl From<Members> for Vec<Type> {
    fn from(members: Members) -> Self {
        members.0
    }
}

impl Deref for Members {
    type Target = [Type];

    fn deref(&self) -> &[Type] {
        &self.0
    }
}

impl fmt::Display for Type {
    /// Writes the canonical type tag, which [`parse_tag`](crate::parse_tag)
    /// reads back.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Value(Some(units)) | Type::Complex(Some(units)) => {
                write!(f, "{}[{}]", self.signature_char(), units)
            }
            Type::Cluster(members) => {
                f.write_str("(")?;
                for (i, member) in members.iter().enumerate() {
                    write!(f, "{}", member)?;
                    // A trailing bare `E` would swallow the next member as its payload.
                    if member.ends_with_bare_error() && i + 1 < members.len() {
                        f.write_str(",")?;
                    }
                }
                f.write_str(")")
            }
            Type::List { element, depth } if depth.get() == 1 => write!(f, "*{}", element),
            Type::List { element, depth } => write!(f, "*{}{}", depth, element),
            Type::Error(Some(payload)) => write!(f, "E{}", payload),
            _ => write!(f, "{}", self.signature_char()),
        }
    }
}
