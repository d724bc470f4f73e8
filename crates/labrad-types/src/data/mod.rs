// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Tagged payload container.
//!
//! A [`Data`] holds one wire value together with its [`Type`]. Constructors
//! derive or validate the type, so the tag always describes what is
//! stored. Native values come out through [`Data::get`] or a
//! [`TypedGetter`](crate::TypedGetter), both of which check the type first.
//!
//! # Example
//!
//! ```rust
//! use labrad_types::{Data, Type};
//!
//! let data = Data::cluster(vec![Data::int(3), Data::string("ch3")]).unwrap();
//! assert_eq!(data.ty().to_string(), "(is)");
//!
//! let (channel, name): (i32, String) = data.get().unwrap();
//! assert_eq!((channel, name.as_str()), (3, "ch3"));
//! assert!(data.get::<i32>().is_err());
//! ```

mod time;
mod value;

pub use time::{Timestamp, LABRAD_EPOCH_OFFSET};
pub use value::{Complex, DataValue};

use crate::error::{Result, TypeError};
use crate::getter::{FromData, Getter, TypedGetter};
use crate::types::{Members, Type};

/// One wire value and its type.
#[derive(Debug, Clone, PartialEq)]
pub struct Data {
    ty: Type,
    value: DataValue,
}

impl Data {
    pub fn empty() -> Self {
        Self::simple(Type::Empty, DataValue::Empty)
    }

    pub fn bool(v: bool) -> Self {
        Self::simple(Type::Bool, DataValue::Bool(v))
    }

    pub fn int(v: i32) -> Self {
        Self::simple(Type::Int, DataValue::Int(v))
    }

    pub fn word(v: u32) -> Self {
        Self::simple(Type::Word, DataValue::Word(v))
    }

    pub fn string(v: impl Into<String>) -> Self {
        Self::bytes(v.into().into_bytes())
    }

    pub fn bytes(v: impl Into<Vec<u8>>) -> Self {
        Self::simple(Type::Str, DataValue::Str(v.into()))
    }

    pub fn time(v: Timestamp) -> Self {
        Self::simple(Type::Time, DataValue::Time(v))
    }

    /// Unitless real value (`v`).
    pub fn real(v: f64) -> Self {
        Self::simple(Type::Value(None), DataValue::Value(v))
    }

    pub fn value_with_units(v: f64, units: impl Into<String>) -> Result<Self> {
        Ok(Self::simple(Type::value_with_units(units)?, DataValue::Value(v)))
    }

    pub fn complex(v: Complex) -> Self {
        Self::simple(Type::Complex(None), DataValue::Complex(v))
    }

    pub fn complex_with_units(v: Complex, units: impl Into<String>) -> Result<Self> {
        Ok(Self::simple(Type::complex_with_units(units)?, DataValue::Complex(v)))
    }

    fn simple(ty: Type, value: DataValue) -> Self {
        Self { ty, value }
    }

    /// Cluster of the given members. Clusters cannot be empty.
    pub fn cluster(members: Vec<Data>) -> Result<Self> {
        let types: Vec<Type> = members.iter().map(|m| m.ty.clone()).collect();
        let ty = Type::Cluster(Members::try_from(types)?);
        Ok(Self {
            ty,
            value: DataValue::Cluster(members),
        })
    }

    /// One-dimensional list, element type taken from the first item.
    ///
    /// An empty list gets element type `_`.
    pub fn list(items: Vec<Data>) -> Result<Self> {
        let element = items.first().map_or(Type::Empty, |first| first.ty.clone());
        Self::list_of(element, items)
    }

    /// One-dimensional list with a declared element type.
    pub fn list_of(element: Type, items: Vec<Data>) -> Result<Self> {
        let shape = vec![items.len()];
        Self::array(element, shape, items)
    }

    /// Rectangular list of `shape.len()` dimensions, items in row-major order.
    ///
    /// Every item must carry exactly `element`, units included; only an
    /// `Any` position in `element` accepts any item type there.
    pub fn array(element: Type, shape: Vec<usize>, items: Vec<Data>) -> Result<Self> {
        if shape.is_empty() {
            return Err(TypeError::InvalidData("list shape has no dimensions".into()));
        }
        let expected = shape
            .iter()
            .try_fold(1usize, |acc, &dim| acc.checked_mul(dim))
            .ok_or_else(|| {
                TypeError::InvalidData(format!("shape {:?} overflows item count", shape))
            })?;
        if expected != items.len() {
            return Err(TypeError::InvalidData(format!(
                "shape {:?} needs {} items, got {}",
                shape,
                expected,
                items.len()
            )));
        }
        if let Some(bad) = items.iter().find(|item| !conforms(&element, &item.ty)) {
            return Err(TypeError::mismatch(&element, &bad.ty));
        }
        let depth = u32::try_from(shape.len())
            .map_err(|_| TypeError::InvalidData("too many list dimensions".into()))?;
        Ok(Self {
            ty: Type::list_nd(element, depth),
            value: DataValue::List { shape, items },
        })
    }

    /// Error record with an optional payload.
    pub fn error(code: i32, message: impl Into<String>, payload: Option<Data>) -> Self {
        let ty = Type::Error(payload.as_ref().map(|p| Box::new(p.ty.clone())));
        Self {
            ty,
            value: DataValue::Error {
                code,
                message: message.into(),
                payload: payload.map(Box::new),
            },
        }
    }

    /// Wire type of the stored value.
    pub fn ty(&self) -> &Type {
        &self.ty
    }

    pub fn value(&self) -> &DataValue {
        &self.value
    }

    pub fn into_value(self) -> DataValue {
        self.value
    }

    /// Tag of the stored value, e.g. `"*(is)"`.
    pub fn tag(&self) -> String {
        self.ty.to_string()
    }

    /// Extracts a native value, checking the type first.
    pub fn get<T: FromData>(&self) -> Result<T> {
        TypedGetter::<T>::of().get(self)
    }

    /// Member `index` of a cluster or item `index` of a list.
    pub fn index(&self, index: usize) -> Result<&Data> {
        let items = match &self.value {
            DataValue::Cluster(items) | DataValue::List { items, .. } => items,
            _ => {
                return Err(TypeError::InvalidData(format!(
                    "cannot index into {}",
                    self.ty.pretty()
                )))
            }
        };
        items.get(index).ok_or_else(|| {
            TypeError::InvalidData(format!("index {} out of bounds ({})", index, items.len()))
        })
    }

    /// Number of members or items; `None` for non-composite payloads.
    pub fn len(&self) -> Option<usize> {
        match &self.value {
            DataValue::Cluster(items) | DataValue::List { items, .. } => Some(items.len()),
            _ => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self.value, DataValue::Error { .. })
    }

    /// Code, message and payload of an error record.
    pub fn as_error(&self) -> Option<(i32, &str, Option<&Data>)> {
        match &self.value {
            DataValue::Error {
                code,
                message,
                payload,
            } => Some((*code, message, payload.as_deref())),
            _ => None,
        }
    }
}

/// Does a value typed `actual` fit a slot declared `declared` without the
/// slot's tag misdescribing it? Stricter than [`Type::matches`]: units and
/// payload presence must agree exactly.
fn conforms(declared: &Type, actual: &Type) -> bool {
    match (declared, actual) {
        (Type::Any, _) => true,
        (Type::Cluster(ours), Type::Cluster(theirs)) => {
            ours.len() == theirs.len()
                && ours.iter().zip(theirs.iter()).all(|(a, b)| conforms(a, b))
        }
        (
            Type::List { element, depth },
            Type::List {
                element: theirs,
                depth: their_depth,
            },
        ) => depth == their_depth && conforms(element, theirs),
        (Type::Error(Some(ours)), Type::Error(Some(theirs))) => conforms(ours, theirs),
        _ => declared == actual,
    }
}

macro_rules! impl_data_from {
    ($ty:ty, $ctor:ident) => {
        impl From<$ty> for Data {
            fn from(v: $ty) -> Self {
                Data::$ctor(v)
            }
        }
    };
}

impl_data_from!(bool, bool);
impl_data_from!(i32, int);
impl_data_from!(u32, word);
impl_data_from!(f64, real);
impl_data_from!(Complex, complex);
impl_data_from!(Timestamp, time);
impl_data_from!(String, string);
impl_data_from!(&str, string);

impl From<()> for Data {
    fn from(_: ()) -> Self {
        Data::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_payloads() {
        assert_eq!(Data::int(42).ty(), Type::int());
        assert_eq!(Data::word(1).ty(), Type::word());
        assert_eq!(Data::from("hi").ty(), Type::str());
        assert_eq!(Data::from(()).ty(), Type::empty());
        assert_eq!(
            Data::value_with_units(1.5, "GHz").expect("units").tag(),
            "v[GHz]"
        );
        assert_eq!(Data::from(2.5).ty(), Type::value());
        assert!(Data::value_with_units(1.0, "a]b").is_err());
        assert_eq!(Data::int(42).value().as_int(), Some(42));
        assert_eq!(Data::int(42).len(), None);
    }

    #[test]
    fn test_cluster_payload() {
        let data = Data::cluster(vec![Data::int(1), Data::string("a"), Data::bool(true)])
            .expect("cluster");
        assert_eq!(data.tag(), "(isb)");
        assert_eq!(data.len(), Some(3));
        assert_eq!(data.index(1).expect("member").value().as_str(), Some("a"));
        assert!(data.index(3).is_err());
        assert!(Data::cluster(Vec::new()).is_err());
    }

    #[test]
    fn test_list_payload() {
        let data = Data::list(vec![Data::int(1), Data::int(2)]).expect("list");
        assert_eq!(data.tag(), "*i");
        assert_eq!(data.value().shape(), Some(&[2][..]));

        let empty = Data::list(Vec::new()).expect("empty list");
        assert_eq!(empty.tag(), "*_");

        let mixed = Data::list(vec![Data::int(1), Data::string("x")]);
        assert!(matches!(mixed, Err(TypeError::TypeMismatch { .. })));
    }

    #[test]
    fn test_array_payload() {
        let items = (0..6).map(Data::int).collect();
        let data = Data::array(Type::Int, vec![2, 3], items).expect("2x3");
        assert_eq!(data.tag(), "*2i");
        assert_eq!(data.len(), Some(6));

        let short = Data::array(Type::Int, vec![2, 3], vec![Data::int(0)]);
        assert!(matches!(short, Err(TypeError::InvalidData(_))));
        assert!(Data::array(Type::Int, Vec::new(), Vec::new()).is_err());
    }

    #[test]
    fn test_array_shape_overflow() {
        let huge = Data::array(Type::Int, vec![usize::MAX, 2], Vec::new());
        assert!(matches!(huge, Err(TypeError::InvalidData(_))));
        let wide = Data::array(Type::Int, vec![1 << (usize::BITS - 1), 2], Vec::new());
        assert!(matches!(wide, Err(TypeError::InvalidData(_))));
    }

    #[test]
    fn test_list_items_keep_declared_units() {
        let hz = Data::value_with_units(1.0, "Hz").expect("units");
        let mv = Data::value_with_units(2.0, "mV").expect("units");

        let mixed = Data::list(vec![hz.clone(), mv.clone()]);
        assert!(matches!(mixed, Err(TypeError::TypeMismatch { .. })));

        let unitless = Data::list_of(Type::Value(None), vec![hz.clone()]);
        assert!(matches!(unitless, Err(TypeError::TypeMismatch { .. })));

        let same = Data::list(vec![hz.clone(), hz.clone()]).expect("same units");
        assert_eq!(same.tag(), "*v[Hz]");

        let any = Data::list_of(Type::Any, vec![hz, mv]).expect("any");
        assert_eq!(any.tag(), "*?");

        let pairs = Data::list_of(
            Type::cluster([Type::Int, Type::Any]),
            vec![
                Data::cluster(vec![Data::int(1), Data::string("a")]).expect("pair"),
                Data::cluster(vec![Data::int(2), Data::bool(true)]).expect("pair"),
            ],
        );
        assert!(pairs.is_ok());

        let bare_error = Data::list_of(
            Type::Error(None),
            vec![Data::error(1, "x", Some(Data::int(3)))],
        );
        assert!(bare_error.is_err());
    }

    #[test]
    fn test_error_payload() {
        let err = Data::error(17, "channel busy", Some(Data::int(3)));
        assert_eq!(err.tag(), "Ei");
        assert!(err.is_error());
        let (code, message, payload) = err.as_error().expect("error record");
        assert_eq!(code, 17);
        assert_eq!(message, "channel busy");
        assert_eq!(payload, Some(&Data::int(3)));

        assert_eq!(Data::error(1, "x", None).tag(), "E");
        assert!(!Data::int(1).is_error());
    }
}
