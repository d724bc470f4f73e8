// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Wire type descriptors.
//!
//! # Features
//!
//! - **Code**: variant discriminant and signature character
//! - **Type**: closed descriptor enum, simple and composite variants
//! - **Tags**: canonical text form via `Display`, parsed back by [`parse_tag`]
//!
//! Simple descriptors are process-wide `static`s. Accessors such as
//! [`Type::int`] hand out references to them, so two lookups of the same
//! variant yield the same address.
//!
//! # Example
//!
//! ```rust
//! use labrad_types::{parse_tag, Type};
//!
//! let int = Type::int();
//! assert!(std::ptr::eq(int, Type::int()));
//! assert_eq!(int.data_width(), Ok(4));
//!
//! let tag = parse_tag("*(s, v[Hz])").unwrap();
//! assert_eq!(tag.to_string(), "*(sv[Hz])");
//! assert!(!tag.is_fixed_width());
//! ```

mod code;
mod descriptor;
mod parse;

pub use code::Code;
pub use descriptor::{Members, Type, Units};
pub use parse::{parse_tag, MAX_NESTING};

pub static ANY: Type = Type::Any;
pub static EMPTY: Type = Type::Empty;
pub static BOOL: Type = Type::Bool;
pub static INT: Type = Type::Int;
pub static WORD: Type = Type::Word;
pub static STR: Type = Type::Str;
pub static TIME: Type = Type::Time;
pub static VALUE: Type = Type::Value(None);
pub static COMPLEX: Type = Type::Complex(None);
