// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Extraction tests across payload kinds.

use super::*;
use std::time::{Duration, UNIX_EPOCH};

#[test]
fn test_int_extraction() {
    let getter = TypedGetter::<i32>::of();
    assert_eq!(getter.ty(), Type::int());
    assert_eq!(getter.get(&Data::int(42)), Ok(42));
}

#[test]
fn test_int_rejects_string() {
    let getter = TypedGetter::<i32>::of();
    let err = getter.get(&Data::string("42")).unwrap_err();
    assert_eq!(
        err,
        TypeError::TypeMismatch {
            expected: Type::Int,
            actual: Type::Str,
        }
    );
}

#[test]
fn test_no_numeric_coercion() {
    assert!(Data::word(7).get::<i32>().is_err());
    assert!(Data::int(7).get::<u32>().is_err());
    assert!(Data::int(7).get::<f64>().is_err());
    assert!(Data::real(7.0).get::<i32>().is_err());
    assert!(Data::bool(true).get::<i32>().is_err());
}

#[test]
fn test_get_does_not_mutate() {
    let data = Data::cluster(vec![Data::int(1), Data::string("x")]).expect("cluster");
    let before = data.clone();
    let getter = TypedGetter::<(i32, String)>::of();
    assert_eq!(getter.get(&data), Ok((1, "x".to_string())));
    assert_eq!(getter.get(&data), Ok((1, "x".to_string())));
    assert_eq!(data, before);
}

#[test]
fn test_value_units_ignored_by_f64() {
    let data = Data::value_with_units(2.5, "GHz").expect("units");
    assert_eq!(data.get::<f64>(), Ok(2.5));

    let ghz = Type::value_with_units("GHz").expect("units");
    let ghz_only = TypedGetter::new(ghz, f64::from_data);
    assert_eq!(ghz_only.get(&data), Ok(2.5));
    let mhz = Data::value_with_units(2.5, "MHz").expect("units");
    assert!(ghz_only.get(&mhz).is_err());
    assert_eq!(ghz_only.get(&Data::real(1.0)), Ok(1.0));
}

#[test]
fn test_complex_and_time() {
    let z = Complex::new(1.0, -2.0);
    assert_eq!(Data::complex(z).get::<Complex>(), Ok(z));
    assert!(Data::complex(z).get::<f64>().is_err());

    let t = UNIX_EPOCH + Duration::from_secs(1_700_000_000);
    let data = Data::time(Timestamp::from(t));
    assert_eq!(data.get::<SystemTime>(), Ok(t));
    assert_eq!(data.get::<Timestamp>().map(|ts| ts.fraction), Ok(0));
}

#[test]
fn test_list_extraction() {
    let data = Data::list(vec![Data::int(1), Data::int(2), Data::int(3)]).expect("list");
    assert_eq!(data.get::<Vec<i32>>(), Ok(vec![1, 2, 3]));
    assert!(data.get::<Vec<u32>>().is_err());
    assert!(data.get::<i32>().is_err());

    let typed_empty = Data::list_of(Type::Int, Vec::new()).expect("empty");
    assert_eq!(typed_empty.get::<Vec<i32>>(), Ok(Vec::new()));

    let untyped_empty = Data::list(Vec::new()).expect("empty");
    assert!(untyped_empty.get::<Vec<i32>>().is_err());
}

#[test]
fn test_nested_list_depth() {
    let grid = Data::array(Type::Int, vec![2, 2], (1..=4).map(Data::int).collect()).expect("2x2");
    assert!(grid.get::<Vec<i32>>().is_err());
    assert!(grid.get::<Vec<Vec<i32>>>().is_err());

    let rows = Data::list(vec![
        Data::list(vec![Data::int(1), Data::int(2)]).expect("row"),
        Data::list(vec![Data::int(3)]).expect("row"),
    ])
    .expect("ragged");
    assert_eq!(rows.tag(), "**i");
    assert_eq!(rows.get::<Vec<Vec<i32>>>(), Ok(vec![vec![1, 2], vec![3]]));
}

#[test]
fn test_list_of_any_checks_items() {
    let data = Data::list_of(Type::Any, vec![Data::string("a")]).expect("list");
    assert_eq!(data.tag(), "*?");
    let err = data.get::<Vec<i32>>().unwrap_err();
    assert!(matches!(err, TypeError::TypeMismatch { .. }));
    assert_eq!(data.get::<Vec<String>>(), Ok(vec!["a".to_string()]));
}

#[test]
fn test_tuple_extraction() {
    let data = Data::cluster(vec![Data::int(1), Data::real(2.0), Data::bool(true)])
        .expect("cluster");
    assert_eq!(data.get::<(i32, f64, bool)>(), Ok((1, 2.0, true)));
    assert!(data.get::<(i32, f64)>().is_err());
    assert!(data.get::<(i32, f64, i32)>().is_err());
}

#[test]
fn test_any_getter_accepts_everything() {
    let getter = TypedGetter::<Data>::of();
    assert_eq!(getter.ty(), Type::any());
    for data in [
        Data::empty(),
        Data::int(1),
        Data::string("s"),
        Data::error(3, "boom", None),
    ] {
        assert_eq!(getter.get(&data).as_ref(), Ok(&data));
    }
}

#[test]
fn test_custom_extractor_failure_is_mismatch() {
    fn never(_: &Data) -> Option<i32> {
        None
    }
    let getter = TypedGetter::new(Type::Any, never);
    assert!(matches!(
        getter.get(&Data::int(5)),
        Err(TypeError::TypeMismatch { .. })
    ));
}

#[test]
fn test_invalid_utf8_is_not_a_string() {
    let data = Data::bytes(vec![0xc3, 0x28]);
    assert!(data.get::<String>().is_err());
    assert_eq!(data.value().as_bytes(), Some(&[0xc3, 0x28][..]));
}

#[test]
fn test_unit_extraction() {
    assert_eq!(Data::empty().get::<()>(), Ok(()));
    assert!(Data::int(0).get::<()>().is_err());
}

#[test]
fn test_getter_debug() {
    let text = format!("{:?}", TypedGetter::<i32>::of());
    assert!(text.contains("Int"));
    assert!(text.contains("i32"));
}
