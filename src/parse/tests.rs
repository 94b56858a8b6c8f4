#![cfg(test)]

use proptest::prelude::*;

use super::*;

#[test]
fn test_integers_scanner_semantics() {
    assert_eq!(parse::<i32>("-42"), Ok(-42));
    assert_eq!(parse::<i32>("+42"), Ok(42));
    assert_eq!(parse::<i32>(" \t\n 7"), Ok(7), "Leading whitespace should be skipped.");
    assert_eq!(parse::<i32>("12abc"), Ok(12), "Parsing should stop at the first invalid byte.");
    assert_eq!(parse::<i64>("0009"), Ok(9));
    assert_eq!(
        i16::parse_prefix("  -300;"),
        Ok((-300, 6)),
        "Skipped whitespace should count towards the consumed bytes."
    );
    assert_eq!(i16::parse_prefix("-300;"), Ok((-300, 4)));

    assert_eq!(parse::<i32>(""), Err(NoDigits.into()));
    assert_eq!(parse::<i32>("   "), Err(NoDigits.into()));
    assert_eq!(parse::<i32>("-"), Err(NoDigits.into()));
    assert_eq!(parse::<i32>("abc12"), Err(NoDigits.into()));
    assert_eq!(parse::<i32>("- 1"), Err(NoDigits.into()), "The sign must touch the digits.");
}

#[test]
fn test_integer_ranges() {
    assert_eq!(parse::<i8>("-128"), Ok(i8::MIN));
    assert_eq!(parse::<i8>("127"), Ok(i8::MAX));
    assert_eq!(parse::<i8>("128"), Err(OutOfRange.into()));
    assert_eq!(parse::<i8>("-129"), Err(OutOfRange.into()));
    assert_eq!(parse::<u8>("255"), Ok(u8::MAX));
    assert_eq!(parse::<u8>("256"), Err(OutOfRange.into()));
    assert_eq!(parse::<i128>("-170141183460469231731687303715884105728"), Ok(i128::MIN));
    assert_eq!(parse::<u128>("340282366920938463463374607431768211455"), Ok(u128::MAX));
    assert_eq!(
        parse::<u128>("340282366920938463463374607431768211456"),
        Err(OutOfRange.into()),
        "Overflowing the widest type should be reported, not wrapped."
    );
    assert_eq!(parse::<u32>("-1"), Err(OutOfRange.into()), "Negative unsigned values don't wrap.");
    assert_eq!(parse::<u32>("-0"), Ok(0));
}

#[test]
fn test_floats() {
    assert_eq!(parse::<f64>("3.25"), Ok(3.25));
    assert_eq!(parse::<f64>("  -1e-3kg"), Ok(-0.001));
    assert_eq!(parse::<f64>(".5"), Ok(0.5));
    assert_eq!(parse::<f64>("5."), Ok(5.0));
    assert_eq!(parse::<f32>("1e+06"), Ok(1_000_000.0));
    assert_eq!(f64::parse_prefix("2e"), Ok((2.0, 1)));
    assert_eq!(parse::<f64>("-inf"), Ok(f64::NEG_INFINITY));
    assert_eq!(parse::<f64>("Infinity"), Ok(f64::INFINITY));
    assert!(parse::<f32>("NaN").is_ok_and(f32::is_nan));
    assert_eq!(parse::<f64>("."), Err(NoDigits.into()));
    assert_eq!(parse::<f64>("e5"), Err(NoDigits.into()));
}

#[test]
fn test_bool_literals() {
    assert_eq!(parse::<bool>("true"), Ok(true));
    assert_eq!(parse::<bool>("false"), Ok(false));
    for rejected in ["TRUE", "True", "T", "1", "yes", " true", "true ", "", "falsey"] {
        assert_eq!(
            parse::<bool>(rejected),
            Err(InvalidLiteral.into()),
            "Only the exact lowercase literals should be accepted."
        );
    }
}

#[test]
fn test_char_and_string_never_fail() {
    assert_eq!(parse::<char>("xyz"), Ok('x'));
    assert_eq!(parse::<char>("\u{e9}t\u{e9}"), Ok('\u{e9}'));
    assert_eq!(parse::<char>(""), Ok('\0'));
    assert_eq!(char::parse_prefix("\u{e9}t"), Ok(('\u{e9}', 2)));
    assert_eq!(parse::<String>("  as is  "), Ok(String::from("  as is  ")));
    assert_eq!(parse::<String>(""), Ok(String::new()));
    assert_eq!(parse::<Box<u8>>("9"), Ok(Box::new(9)));
}

#[test]
fn test_parse_exact() {
    assert_eq!(parse_exact::<i32>("  -42"), Ok(-42));
    assert_eq!(parse_exact::<i32>("-42x"), Err(TrailingInput { consumed: 3 }.into()));
    assert_eq!(parse_exact::<f64>("1.5 "), Err(TrailingInput { consumed: 3 }.into()));
    assert_eq!(parse_exact::<char>("ab"), Err(TrailingInput { consumed: 1 }.into()));
    assert_eq!(parse_exact::<bool>("false"), Ok(false));
    assert!(
        parse_exact::<u8>("x").unwrap_err().is_no_digits(),
        "Errors from the prefix parse should take precedence."
    );
}

#[test]
fn test_error_messages() {
    assert_eq!(
        ParseError::from(TrailingInput { consumed: 4 }).to_string(),
        "unparsed input remains after byte 4"
    );
    assert_eq!(
        ParseError::from(OutOfRange).to_string(),
        "parsed number is out of range for the target type"
    );
}

#[cfg(feature = "string")]
mod round_trip {
    use proptest::prelude::*;

    use crate::parse::parse_exact;
    use crate::string::to_string;

    #[test]
    fn test_examples() {
        assert_eq!(to_string(&-42_i32), "-42");
        assert_eq!(parse_exact::<i32>("-42"), Ok(-42));
        assert_eq!(parse_exact::<bool>(&to_string(&true)), Ok(true));
        assert_eq!(parse_exact::<f64>(&to_string(&1.5e300_f64)), Ok(1.5e300));
    }

    macro_rules! round_trip_props {
        ($($name:ident: $type:ty),* $(,)?) => {
            proptest! {
                $(
                    #[test]
                    fn $name(value in any::<$type>()) {
                        prop_assert_eq!(parse_exact::<$type>(&to_string(&value)), Ok(value));
                    }
                )*
            }
        };
    }

    round_trip_props!(
        prop_round_trip_i8: i8,
        prop_round_trip_i32: i32,
        prop_round_trip_i64: i64,
        prop_round_trip_i128: i128,
        prop_round_trip_u16: u16,
        prop_round_trip_u64: u64,
        prop_round_trip_usize: usize,
        prop_round_trip_char: char,
        prop_round_trip_bool: bool,
    );

    proptest! {
        #[test]
        fn prop_round_trip_f64(value in any::<f64>().prop_filter("NaN never equals itself", |v| !v.is_nan())) {
            let parsed = parse_exact::<f64>(&to_string(&value));
            prop_assert_eq!(parsed.map(f64::to_bits), Ok(value.to_bits()));
        }

        #[test]
        fn prop_round_trip_f32(value in any::<f32>().prop_filter("NaN never equals itself", |v| !v.is_nan())) {
            let parsed = parse_exact::<f32>(&to_string(&value));
            prop_assert_eq!(parsed.map(f32::to_bits), Ok(value.to_bits()));
        }
    }
}

proptest! {
    #[test]
    fn prop_prefix_never_consumes_past_input(input in ".{0,16}") {
        if let Ok((_, consumed)) = i64::parse_prefix(&input) {
            prop_assert!(consumed <= input.len());
            prop_assert!(input.is_char_boundary(consumed));
        }
        if let Ok((_, consumed)) = f64::parse_prefix(&input) {
            prop_assert!(consumed <= input.len());
        }
    }
}
