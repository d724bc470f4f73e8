// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Typed extraction from untyped payloads.
//!
//! A [`TypedGetter<T>`] pairs the [`Type`] it requires with a pure function
//! from [`Data`] to `T`. [`Getter::get`] always runs
//! `declared.matches(actual)` before the extraction function, and reports
//! [`TypeError::TypeMismatch`] instead of reinterpreting an incompatible
//! payload.
//!
//! Native types opt in through [`FromData`]; [`GetterRegistry`] collects
//! getters keyed by native type for callers that select them at runtime.

mod registry;

pub use registry::{GetterRegistry, GetterRegistryBuilder};

use crate::data::{Complex, Data, DataValue, Timestamp};
use crate::error::{Result, TypeError};
use crate::types::Type;
use std::fmt;
use std::time::SystemTime;

/// Capability to read a `T` out of a payload.
pub trait Getter<T> {
    /// Type a payload must satisfy for [`Getter::get`] to succeed.
    fn ty(&self) -> &Type;

    /// Reads a `T` from `data` without modifying it.
    fn get(&self, data: &Data) -> Result<T>;
}

/// Native types with a canonical wire type.
pub trait FromData: Sized {
    /// Wire type this native type is read from.
    fn wire_type() -> Type;

    /// Reads the stored value. Returns `None` when the storage does not
    /// hold a `Self`; callers go through [`Getter::get`], which has
    /// already checked the type.
    fn from_data(data: &Data) -> Option<Self>;
}

/// A declared type plus an extraction function.
pub struct TypedGetter<T> {
    ty: Type,
    extract: fn(&Data) -> Option<T>,
}

impl<T> TypedGetter<T> {
    pub fn new(ty: Type, extract: fn(&Data) -> Option<T>) -> Self {
        Self { ty, extract }
    }

    pub fn ty(&self) -> &Type {
        &self.ty
    }
}

impl<T: FromData> TypedGetter<T> {
    /// Getter for a [`FromData`] type.
    pub fn of() -> Self {
        Self::new(T::wire_type(), T::from_data)
    }
}

impl<T> Getter<T> for TypedGetter<T> {
    fn ty(&self) -> &Type {
        &self.ty
    }

    fn get(&self, data: &Data) -> Result<T> {
        if !self.ty.matches(data.ty()) {
            log::debug!(
                "[getter] rejected {} payload, declared {}",
                data.ty(),
                self.ty
            );
            return Err(TypeError::mismatch(&self.ty, data.ty()));
        }
        (self.extract)(data).ok_or_else(|| TypeError::mismatch(&self.ty, data.ty()))
    }
}

impl<T> Clone for TypedGetter<T> {
    fn clone(&self) -> Self {
        Self {
            ty: self.ty.clone(),
            extract: self.extract,
        }
    }
}

impl<T> fmt::Debug for TypedGetter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedGetter")
            .field("ty", &self.ty)
            .field("target", &std::any::type_name::<T>())
            .finish()
    }
}

macro_rules! impl_from_data {
    ($ty:ty, $wire:expr, $accessor:ident) => {
        impl FromData for $ty {
            fn wire_type() -> Type {
                $wire
            }

            fn from_data(data: &Data) -> Option<Self> {
                data.value().$accessor()
            }
        }
    };
}

impl_from_data!(bool, Type::Bool, as_bool);
impl_from_data!(i32, Type::Int, as_int);
impl_from_data!(u32, Type::Word, as_word);
impl_from_data!(f64, Type::Value(None), as_value);
impl_from_data!(Complex, Type::Complex(None), as_complex);
impl_from_data!(Timestamp, Type::Time, as_time);

impl FromData for () {
    fn wire_type() -> Type {
        Type::Empty
    }

    fn from_data(data: &Data) -> Option<Self> {
        matches!(data.value(), DataValue::Empty).then_some(())
    }
}

impl FromData for String {
    fn wire_type() -> Type {
        Type::Str
    }

    fn from_data(data: &Data) -> Option<Self> {
        data.value().as_str().map(str::to_owned)
    }
}

impl FromData for SystemTime {
    fn wire_type() -> Type {
        Type::Time
    }

    fn from_data(data: &Data) -> Option<Self> {
        data.value().as_time()?.to_system_time()
    }
}

/// The payload itself, accepting any type.
impl FromData for Data {
    fn wire_type() -> Type {
        Type::Any
    }

    fn from_data(data: &Data) -> Option<Self> {
        Some(data.clone())
    }
}

impl<T: FromData> FromData for Vec<T> {
    fn wire_type() -> Type {
        Type::list(T::wire_type())
    }

    fn from_data(data: &Data) -> Option<Self> {
        match data.value() {
            DataValue::List { shape, items } if shape.len() == 1 => {
                items.iter().map(T::from_data).collect()
            }
            _ => None,
        }
    }
}

macro_rules! impl_from_data_tuple {
    ($($name:ident : $idx:tt),+) => {
        impl<$($name: FromData),+> FromData for ($($name,)+) {
            fn wire_type() -> Type {
                Type::cluster([$($name::wire_type()),+])
            }

            fn from_data(data: &Data) -> Option<Self> {
                let members = data.value().as_cluster()?;
                if members.len() != [$($idx),+].len() {
                    return None;
                }
                Some(($($name::from_data(&members[$idx])?,)+))
            }
        }
    };
}

impl_from_data_tuple!(A: 0, B: 1);
impl_from_data_tuple!(A: 0, B: 1, C: 2);
impl_from_data_tuple!(A: 0, B: 1, C: 2, D: 3);

#[cfg(test)]
mod tests;
