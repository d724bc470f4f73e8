// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # labrad-types - wire type descriptors for LabRAD
//!
//! Every value exchanged with a LabRAD manager or server is tagged with a
//! type signature (`i`, `*v[GHz]`, `(is)`, ...). This crate models those
//! signatures and the typed extraction of native values from tagged
//! payloads. Transport, framing and RPC dispatch live elsewhere and build
//! on the types here.
//!
//! ## Quick Start
//!
//! ```rust
//! use labrad_types::{parse_tag, Data, Getter, TypedGetter, Type};
//!
//! // Descriptors
//! let int = Type::int();
//! assert_eq!(int.to_string(), "i");
//! assert_eq!(int.data_width(), Ok(4));
//! assert!(parse_tag("i").unwrap().matches(int));
//!
//! // Typed extraction
//! let getter = TypedGetter::<i32>::of();
//! assert_eq!(getter.get(&Data::int(42)), Ok(42));
//! assert!(getter.get(&Data::string("42")).is_err());
//! ```
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Type`] | Closed set of wire types, simple and composite |
//! | [`Code`] | Variant discriminant and signature character |
//! | [`Data`] | Tagged payload holding one wire value |
//! | [`TypedGetter`] | Declared type plus extraction function |
//! | [`GetterRegistry`] | Immutable getter table keyed by native type |
//!
//! ## Compatibility direction
//!
//! [`Type::matches`] is always called as `declared.matches(actual)`. The
//! relation is symmetric for all descriptors this crate can build, but
//! callers should keep that order so a one-sided rule never sneaks in.
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Type`], [`Code`],
//!   [`Timestamp`] and [`Complex`].

/// Tagged payload container.
pub mod data;
/// Error types.
pub mod error;
/// Typed getters and the getter registry.
pub mod getter;
/// Type descriptors and tag parsing.
pub mod types;

pub use data::{Complex, Data, DataValue, Timestamp};
pub use error::{ParseError, Result, TypeError};
pub use getter::{FromData, Getter, GetterRegistry, GetterRegistryBuilder, TypedGetter};
pub use types::{parse_tag, Code, Members, Type, Units};
