// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Stored payload values.

use crate::data::{Data, Timestamp};

/// Complex number as carried by `c` values.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }
}

/// Storage behind a [`Data`] payload.
#[derive(Debug, Clone, PartialEq)]
pub enum DataValue {
    Empty,
    Bool(bool),
    Int(i32),
    Word(u32),
    Str(Vec<u8>),
    Time(Timestamp),
    Value(f64),
    Complex(Complex),
    Cluster(Vec<Data>),
    /// Row-major items with one extent per dimension.
    List {
        shape: Vec<usize>,
        items: Vec<Data>,
    },
    Error {
        code: i32,
        message: String,
        payload: Option<Box<Data>>,
    },
}

impl DataValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_word(&self) -> Option<u32> {
        match self {
            Self::Word(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Str(v) => Some(v),
            _ => None,
        }
    }

    /// String contents, `None` if not a string or not valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        self.as_bytes()
            .and_then(|bytes| std::str::from_utf8(bytes).ok())
    }

    pub fn as_time(&self) -> Option<Timestamp> {
        match self {
            Self::Time(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_value(&self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_complex(&self) -> Option<Complex> {
        match self {
            Self::Complex(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_cluster(&self) -> Option<&[Data]> {
        match self {
            Self::Cluster(members) => Some(members),
            _ => None,
        }
    }

    /// Items of a list, flattened row-major.
    pub fn as_list(&self) -> Option<&[Data]> {
        match self {
            Self::List { items, .. } => Some(items),
            _ => None,
        }
    }

    pub fn shape(&self) -> Option<&[usize]> {
        match self {
            Self::List { shape, .. } => Some(shape),
            _ => None,
        }
    }
}
