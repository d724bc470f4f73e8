// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type tag parser.
//!
//! Grammar accepted (whitespace and `,` separate items and are otherwise
//! ignored, everything after a `:` outside units is a comment):
//!
//! ```text
//! tag     := item*                   (none: empty, several: cluster)
//! item    := '?' | '_' | 'b' | 'i' | 'w' | 's' | 't'
//!          | ('v' | 'c') units?
//!          | '(' item+ ')'
//!          | '*' digits? item
//!          | 'E' item?               (payload only if directly adjacent)
//! units   := '[' [^\]]* ']'
//! ```
//!
//! Composite items nest at most [`MAX_NESTING`] levels deep.

use crate::error::ParseError;
use crate::types::{Code, Members, Type, Units};
use std::iter::{Enumerate, Peekable};
use std::num::NonZeroU32;
use std::str::{Chars, FromStr};

type Cursor<'a> = Peekable<Enumerate<Chars<'a>>>;

/// Deepest nesting of lists, clusters and error payloads a tag may have.
pub const MAX_NESTING: usize = 64;

/// Parse a type tag into a descriptor.
pub fn parse_tag(tag: &str) -> Result<Type, ParseError> {
    let mut cursor = strip_comment(tag).chars().enumerate().peekable();

    let mut items = Vec::new();
    loop {
        skip_separators(&mut cursor);
        if cursor.peek().is_none() {
            break;
        }
        items.push(parse_item(&mut cursor, 0)?);
    }

    let ty = match items.len() {
        1 => items.remove(0),
        _ => Type::cluster(items),
    };
    log::trace!("[parse] {:?} -> {}", tag, ty);
    Ok(ty)
}

impl FromStr for Type {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_tag(s)
    }
}

fn strip_comment(tag: &str) -> &str {
    let mut in_units = false;
    for (i, ch) in tag.char_indices() {
        match ch {
            '[' => in_units = true,
            ']' => in_units = false,
            ':' if !in_units => return &tag[..i],
            _ => {}
        }
    }
    tag
}

fn skip_separators(cursor: &mut Cursor<'_>) {
    while let Some(&(_, ch)) = cursor.peek() {
        if ch.is_whitespace() || ch == ',' {
            cursor.next();
        } else {
            break;
        }
    }
}

fn parse_item(cursor: &mut Cursor<'_>, nesting: usize) -> Result<Type, ParseError> {
    skip_separators(cursor);
    let (pos, ch) = cursor.next().ok_or(ParseError::UnexpectedEnd)?;
    let code = Code::from_char(ch).ok_or(ParseError::UnexpectedChar { ch, pos })?;
    if code.is_composite() && nesting >= MAX_NESTING {
        return Err(ParseError::TooDeep { pos });
    }

    match code {
        Code::Any => Ok(Type::Any),
        Code::Empty => Ok(Type::Empty),
        Code::Bool => Ok(Type::Bool),
        Code::Int => Ok(Type::Int),
        Code::Word => Ok(Type::Word),
        Code::Str => Ok(Type::Str),
        Code::Time => Ok(Type::Time),
        Code::Value => Ok(Type::Value(parse_units(cursor)?)),
        Code::Complex => Ok(Type::Complex(parse_units(cursor)?)),
        Code::Cluster => parse_cluster(cursor, pos, nesting + 1),
        Code::List => {
            let depth = parse_depth(cursor)?;
            let element = parse_item(cursor, nesting + 1)?;
            Ok(Type::List {
                element: Box::new(element),
                depth,
            })
        }
        Code::Error => {
            let payload = match cursor.peek() {
                Some(&(_, next)) if Code::from_char(next).is_some() => {
                    Some(Box::new(parse_item(cursor, nesting + 1)?))
                }
                _ => None,
            };
            Ok(Type::Error(payload))
        }
    }
}

fn parse_units(cursor: &mut Cursor<'_>) -> Result<Option<Units>, ParseError> {
    let open = match cursor.peek() {
        Some(&(pos, '[')) => pos,
        _ => return Ok(None),
    };
    cursor.next();

    let mut units = String::new();
    for (_, ch) in cursor.by_ref() {
        if ch == ']' {
            let units = Units::new(units).map_err(|_| ParseError::UnclosedUnits { pos: open })?;
            return Ok(Some(units));
        }
        units.push(ch);
    }
    Err(ParseError::UnclosedUnits { pos: open })
}

fn parse_cluster(
    cursor: &mut Cursor<'_>,
    open: usize,
    nesting: usize,
) -> Result<Type, ParseError> {
    let mut members = Vec::new();
    loop {
        skip_separators(cursor);
        match cursor.peek() {
            None => return Err(ParseError::UnexpectedEnd),
            Some(&(_, ')')) => {
                cursor.next();
                break;
            }
            Some(_) => members.push(parse_item(cursor, nesting)?),
        }
    }
    Members::try_from(members)
        .map(Type::Cluster)
        .map_err(|_| ParseError::EmptyCluster { pos: open })
}

fn parse_depth(cursor: &mut Cursor<'_>) -> Result<NonZeroU32, ParseError> {
    let start = match cursor.peek() {
        Some(&(pos, ch)) if ch.is_ascii_digit() => pos,
        _ => return Ok(NonZeroU32::MIN),
    };

    let mut digits = String::new();
    while let Some(&(_, ch)) = cursor.peek() {
        if !ch.is_ascii_digit() {
            break;
        }
        digits.push(ch);
        cursor.next();
    }

    digits
        .parse::<NonZeroU32>()
        .map_err(|_| ParseError::InvalidDepth { pos: start })
}
