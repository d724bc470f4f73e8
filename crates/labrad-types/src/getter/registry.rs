// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Immutable table of getters keyed by native type.

use crate::data::{Complex, Data, Timestamp};
use crate::error::{Result, TypeError};
use crate::getter::{FromData, Getter, TypedGetter};
use crate::types::Type;
use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;
use std::time::SystemTime;

static STANDARD: OnceLock<GetterRegistry> = OnceLock::new();

struct Entry {
    target: &'static str,
    getter: Box<dyn Any + Send + Sync>,
    ty: Type,
}

/// Getters for a fixed set of native types.
///
/// Built once through [`GetterRegistry::builder`] and read-only afterwards,
/// so a published registry can be shared across threads without locking.
///
/// # Example
///
/// ```rust
/// use labrad_types::{Data, GetterRegistry};
///
/// let registry = GetterRegistry::standard();
/// assert_eq!(registry.extract::<i32>(&Data::int(42)).unwrap(), 42);
/// assert!(registry.extract::<i32>(&Data::string("42")).is_err());
/// ```
pub struct GetterRegistry {
    entries: HashMap<TypeId, Entry>,
}

impl GetterRegistry {
    pub fn builder() -> GetterRegistryBuilder {
        GetterRegistryBuilder::default()
    }

    /// Process-wide registry covering every built-in [`FromData`] type.
    pub fn standard() -> &'static GetterRegistry {
        STANDARD.get_or_init(|| {
            Self::builder()
                .register::<()>()
                .register::<bool>()
                .register::<i32>()
                .register::<u32>()
                .register::<String>()
                .register::<f64>()
                .register::<Complex>()
                .register::<Timestamp>()
                .register::<SystemTime>()
                .register::<Data>()
                .register::<Vec<bool>>()
                .register::<Vec<i32>>()
                .register::<Vec<u32>>()
                .register::<Vec<String>>()
                .register::<Vec<f64>>()
                .register::<Vec<Complex>>()
                .build()
        })
    }

    /// Getter for `T`, if registered.
    pub fn get<T: 'static>(&self) -> Option<&TypedGetter<T>> {
        self.entries
            .get(&TypeId::of::<T>())
            .and_then(|entry| entry.getter.downcast_ref::<TypedGetter<T>>())
    }

    /// Reads a `T` from `data` with the registered getter.
    pub fn extract<T: 'static>(&self, data: &Data) -> Result<T> {
        self.get::<T>()
            .ok_or(TypeError::UnregisteredType(type_name::<T>()))?
            .get(data)
    }

    /// Type a payload must have to be read as `T`.
    pub fn declared_type<T: 'static>(&self) -> Option<&Type> {
        self.entries.get(&TypeId::of::<T>()).map(|entry| &entry.ty)
    }

    pub fn contains<T: 'static>(&self) -> bool {
        self.entries.contains_key(&TypeId::of::<T>())
    }

    /// Native type names and their declared types, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Type)> {
        self.entries.values().map(|entry| (entry.target, &entry.ty))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for GetterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.values().map(|e| (e.target, e.ty.to_string())))
            .finish()
    }
}

/// Collects getters before a [`GetterRegistry`] is published.
#[derive(Default)]
pub struct GetterRegistryBuilder {
    entries: HashMap<TypeId, Entry>,
}

impl GetterRegistryBuilder {
    /// Registers the [`FromData`] getter for `T`.
    pub fn register<T: FromData + 'static>(self) -> Self {
        self.register_getter(TypedGetter::<T>::of())
    }

    /// Registers a custom getter, replacing any earlier one for `T`.
    pub fn register_getter<T: 'static>(mut self, getter: TypedGetter<T>) -> Self {
        let ty = getter.ty().clone();
        let replaced = self.entries.insert(
            TypeId::of::<T>(),
            Entry {
                target: type_name::<T>(),
                getter: Box::new(getter),
                ty,
            },
        );
        if replaced.is_some() {
            log::debug!("[registry] replaced getter for {}", type_name::<T>());
        }
        self
    }

    pub fn build(self) -> GetterRegistry {
        log::debug!("[registry] published {} getters", self.entries.len());
        GetterRegistry {
            entries: self.entries,
        }
    }
}
