#![cfg(test)]

use super::*;

#[test]
fn test_integers() {
    assert_eq!(to_string(&0_u8), "0");
    assert_eq!(to_string(&-42_i32), "-42");
    assert_eq!(to_string(&i8::MIN), "-128");
    assert_eq!(to_string(&u64::MAX), "18446744073709551615");
    assert_eq!(to_string(&i128::MIN), "-170141183460469231731687303715884105728");
    assert_eq!(to_string(&7_usize), "7", "There should be no padding or leading zeros.");
}

#[test]
fn test_bool_char_and_strings() {
    assert_eq!(to_string(&true), "true");
    assert_eq!(to_string(&false), "false");
    assert_eq!(to_string(&'x'), "x");
    assert_eq!(to_string(&'\u{1f980}'), "\u{1f980}");
    assert_eq!(to_string("tab\there"), "tab\there", "Strings should not be escaped.");
    assert_eq!(to_string(&String::from("owned")), "owned");
    assert_eq!(to_string(&Box::new(5_u8)), "5");
}

#[test]
fn test_floats_fixed_layout() {
    assert_eq!(to_string(&0.0_f64), "0");
    assert_eq!(to_string(&-0.0_f64), "-0");
    assert_eq!(to_string(&1.0_f64), "1");
    assert_eq!(to_string(&0.1_f64), "0.1");
    assert_eq!(to_string(&-2.5_f32), "-2.5");
    assert_eq!(to_string(&100000.0_f64), "100000");
    assert_eq!(to_string(&123456.7_f64), "123456.7");
    assert_eq!(to_string(&0.0001_f64), "0.0001");
    assert_eq!(to_string(&0.00012_f64), "0.00012");
}

#[test]
fn test_floats_exponential_layout() {
    assert_eq!(to_string(&1000000.0_f64), "1e+06");
    assert_eq!(to_string(&1234567.0_f64), "1.234567e+06");
    assert_eq!(to_string(&0.00001_f64), "1e-05");
    assert_eq!(to_string(&-1.5e-7_f64), "-1.5e-07");
    assert_eq!(to_string(&1.5e300_f64), "1.5e+300");
    assert_eq!(to_string(&f32::MAX), "3.4028235e+38");
}

#[test]
fn test_floats_special_values() {
    assert_eq!(to_string(&f64::INFINITY), "inf");
    assert_eq!(to_string(&f64::NEG_INFINITY), "-inf");
    assert_eq!(to_string(&f32::NAN), "nan");
}

#[test]
fn test_array_to_string() {
    assert_eq!(array_to_string::<i32>(&[]), "{}");
    assert_eq!(array_to_string(&[1, 2, 3]), "{1, 2, 3}");
    assert_eq!(array_to_string(&[-1]), "{-1}", "A single element needs no separator.");
    assert_eq!(array_to_string(&["a", "b"]), "{a, b}");
    assert_eq!(array_to_string(&[true, false]), "{true, false}");
    assert_eq!(
        array_to_string_with(&[1, 2], |value| format!("<{value}>")),
        "{<1>, <2>}"
    );
}
