#![cfg(test)]

use std::cmp::Ordering;

use super::*;
use crate::iter::{Iterable, Position};
use crate::parse::{InvalidLiteral, NoDigits, ParseError};

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("neat=trace")
        .try_init();
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Point {
    x: i32,
    y: i32,
}

fn point_to_string(point: &Point) -> String {
    format!("({}, {})", point.x, point.y)
}

fn point_compare(a: &Point, b: &Point) -> Ordering {
    (a.x, a.y).cmp(&(b.x, b.y))
}

fn loose_bool(input: &str) -> Result<bool, ParseError> {
    match input {
        "true" | "TRUE" | "T" | "1" => Ok(true),
        "false" | "FALSE" | "F" | "0" => Ok(false),
        _ => Err(InvalidLiteral.into()),
    }
}

/// A fixed ring of values whose cursor is a plain index, with `len` as the end sentinel.
struct Ring {
    values: Vec<u8>,
}

fn ring_begin(_: &Ring) -> usize {
    0
}

fn ring_end(ring: &Ring) -> usize {
    ring.values.len()
}

fn ring_next(ring: &Ring, cursor: usize) -> usize {
    (cursor + 1).min(ring.values.len())
}

#[test]
fn test_defaults_cover_builtins() {
    init_logging();
    let registry = Registry::defaults();

    assert!(registry.supports::<Compare, u8>());
    assert!(registry.supports::<Stringify, f64>());
    assert!(registry.supports::<Parse, String>());
    assert!(registry.supports::<Compare, &'static str>());
    assert!(
        !registry.supports::<Parse, &'static str>(),
        "Borrowed strings can't be produced by parsing."
    );
    assert!(!registry.supports::<Compare, Point>());
    assert!(!registry.is_empty());
}

#[test]
fn test_unsupported_type() {
    let registry = Registry::defaults();
    let error = UnsupportedType {
        type_name: "i32",
        verb: "iterate",
    };

    assert_eq!(registry.resolve::<Iterate<usize>, i32>().err(), Some(error));
    assert_eq!(error.to_string(), "no iterate operation is registered for type i32");

    let missing = registry.stringify(&Point { x: 0, y: 0 }).unwrap_err();
    assert_eq!(missing.verb, "stringify");
    assert!(missing.type_name.ends_with("Point"));

    let mut points = [Point { x: 2, y: 0 }, Point { x: 1, y: 0 }];
    assert!(registry.sort(&mut points).is_err());
    assert_eq!(
        points,
        [Point { x: 2, y: 0 }, Point { x: 1, y: 0 }],
        "A failed lookup should leave the sequence untouched."
    );
}

#[test]
fn test_builtin_verbs_through_registry() {
    let registry = Registry::defaults();

    assert_eq!(registry.compare(&"abc", &"abd"), Ok(Ordering::Less));
    assert_eq!(registry.stringify(&false), Ok(String::from("false")));
    assert_eq!(registry.stringify(&0.5_f32), Ok(String::from("0.5")));
    assert_eq!(registry.array_to_string(&[1_u64, 2, 3]), Ok(String::from("{1, 2, 3}")));
    assert_eq!(registry.array_to_string::<char>(&[]), Ok(String::from("{}")));

    assert_eq!(registry.parse::<i32>("-42"), Ok(-42));
    assert_eq!(
        registry.parse::<bool>("TRUE"),
        Err(RegistryParseError::Parse(InvalidLiteral.into()))
    );
    assert_eq!(registry.parse::<u8>("x"), Err(ParseError::from(NoDigits).into()));
    assert!(registry.parse::<Point>("(1, 2)").unwrap_err().is_unsupported());
}

#[test]
fn test_sorting_and_searching_through_registry() {
    let registry = Registry::defaults();

    let mut values = vec![5_i32, -2, 9, 0];
    registry.sort(&mut values).unwrap();
    assert_eq!(values, [-2, 0, 5, 9]);
    assert_eq!(registry.binary_search(&values, &5), Ok(Some(2)));
    assert_eq!(registry.binary_search(&values, &4), Ok(None));

    registry.sort_desc(&mut values).unwrap();
    assert_eq!(values, [9, 5, 0, -2]);
    assert_eq!(registry.linear_search(&values, &0), Ok(Some(2)));
    assert_eq!(registry.linear_search(&values, &1), Ok(None));
}

#[test]
fn test_user_extension() {
    init_logging();
    let registry = Registry::builder()
        .with::<Stringify, Point>(point_to_string)
        .with::<Compare, Point>(point_compare)
        .build()
        .unwrap();

    let mut points = vec![Point { x: 3, y: 1 }, Point { x: -1, y: 4 }, Point { x: 3, y: 0 }];
    registry.sort(&mut points).unwrap();
    assert_eq!(
        registry.array_to_string(&points),
        Ok(String::from("{(-1, 4), (3, 0), (3, 1)}"))
    );
    assert_eq!(
        registry.stringify(&7_i8),
        Ok(String::from("7")),
        "Extending the defaults shouldn't remove them."
    );
}

#[test]
fn test_duplicate_policy() {
    init_logging();
    let rejected = Registry::builder().with::<Parse, bool>(loose_bool).build();
    assert_eq!(
        rejected.err(),
        Some(DuplicateRegistration {
            type_name: "bool",
            verb: "parse",
        }),
        "Re-registering a built-in should fail under the default policy."
    );

    let overridden = Registry::builder()
        .policy(DuplicatePolicy::Override)
        .with::<Parse, bool>(loose_bool)
        .build()
        .unwrap();
    assert_eq!(overridden.parse::<bool>("T"), Ok(true));
    assert_eq!(overridden.parse::<bool>("0"), Ok(false));
    assert_eq!(overridden.len(), Registry::defaults().len());

    let mut builder = RegistryBuilder::new();
    builder.register::<Stringify, Point>(point_to_string);
    builder.register::<Stringify, Point>(point_to_string);
    assert!(builder.build().is_err(), "Duplicates are rejected even for identical operations.");
}

#[test]
fn test_empty_builder() {
    let registry = RegistryBuilder::new().build().unwrap();
    assert!(registry.is_empty());
    assert!(registry.compare(&1, &2).is_err());
    assert!(DuplicatePolicy::default().is_reject());
}

#[test]
fn test_traversals_through_registry() {
    let registry = RegistryBuilder::new()
        .with_reverse_iterable::<Vec<i32>>()
        .with::<Iterate<usize>, Ring>(
            CursorOps::new()
                .with_begin(ring_begin)
                .with_end(ring_end)
                .with_next(ring_next),
        )
        .build()
        .unwrap();

    let values = vec![10, 20, 30, 40, 50];
    let forward: Vec<i32> = registry
        .forward::<Vec<i32>, Position>(&values)
        .unwrap()
        .filter_map(|cursor| values.read(cursor).copied())
        .collect();
    assert_eq!(forward, [10, 20, 30, 40, 50]);

    let backward: Vec<i32> = registry
        .backward_skip::<Vec<i32>, Position>(&values, 2)
        .unwrap()
        .items()
        .copied()
        .collect();
    assert_eq!(backward, [50, 30, 10]);

    let ring = Ring {
        values: vec![1, 2, 3, 4, 5],
    };
    let cursors: Vec<usize> = registry.forward_skip::<Ring, usize>(&ring, 2).unwrap().collect();
    assert_eq!(cursors, [0, 2, 4]);

    let missing = registry.backward::<Ring, usize>(&ring).err();
    assert_eq!(
        missing,
        Some(TraversalError::MissingOperation(MissingOperation {
            type_name: std::any::type_name::<Ring>(),
            slot: "prev",
        }))
    );

    assert!(registry.forward_skip::<Ring, usize>(&ring, 0).err().is_some_and(|e| e.is_zero_step()));
    assert!(
        registry.forward::<Ring, u32>(&ring).err().is_some_and(|e| e.is_unsupported()),
        "Cursor types are part of the registered verb."
    );
}

#[test]
fn test_global_registry() {
    assert!(global().supports::<Compare, i64>());
    assert_eq!(global().stringify(&-1_i64), Ok(String::from("-1")));
    assert!(std::ptr::eq(global(), global()), "The global registry should be created once.");
    assert_eq!(
        install(Registry::defaults()),
        Err(AlreadyInstalled),
        "Installing after first use should fail."
    );
}

#[test]
fn test_debug_output() {
    let registry = RegistryBuilder::new()
        .with_comparable::<i32>()
        .with_stringable::<i32>()
        .build()
        .unwrap();
    assert_eq!(format!("{registry:?}"), "{(i32, compare), (i32, stringify)}");
}

#[test]
fn test_registry_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Registry>();
    assert_send_sync::<RegistryBuilder>();
}
