use std::str::FromStr;

use super::scan::{self, Float};
use super::{InvalidLiteral, NoDigits, OutOfRange, ParseError, TrailingInput};

/// A type that can be read back out of a string.
///
/// Implementors only provide [`parse_prefix`](Parsable::parse_prefix); the other two methods
/// decide what to do with any input left over afterwards.
pub trait Parsable: Sized {
    /// Parses a value from the start of `input`, returning it along with the number of bytes
    /// consumed. Any bytes after those are left alone.
    fn parse_prefix(input: &str) -> Result<(Self, usize), ParseError>;

    /// Parses a value from the start of `input` and ignores whatever follows it, the same way
    /// `sscanf` stops at the first character that doesn't fit.
    fn parse(input: &str) -> Result<Self, ParseError> {
        Self::parse_prefix(input).map(|(value, _)| value)
    }

    /// Parses a value that must span the entire input.
    ///
    /// # Errors
    /// On top of the errors from [`parse_prefix`](Parsable::parse_prefix), returns
    /// [`TrailingInput`] if any bytes remain after the value.
    fn parse_exact(input: &str) -> Result<Self, ParseError> {
        let (value, consumed) = Self::parse_prefix(input)?;
        if consumed == input.len() {
            Ok(value)
        } else {
            Err(TrailingInput { consumed })?
        }
    }
}

/// Parses a `T` from the start of `input`, ignoring any trailing characters. Leading whitespace
/// is skipped for numbers.
///
/// # Examples
/// ```
/// # use neat::parse::{parse, ParseError};
/// assert_eq!(parse::<i32>("-42"), Ok(-42));
/// assert_eq!(parse::<u8>("  17 apples"), Ok(17));
/// assert_eq!(parse::<f64>("2.5e3"), Ok(2500.0));
/// assert_eq!(parse::<bool>("true"), Ok(true));
/// assert!(parse::<bool>("TRUE").is_err());
/// assert!(parse::<i64>("apples").unwrap_err().is_no_digits());
/// ```
pub fn parse<T: Parsable>(input: &str) -> Result<T, ParseError> {
    T::parse(input)
}

/// Parses a `T` that must make up the whole of `input`.
///
/// # Examples
/// ```
/// # use neat::parse::parse_exact;
/// assert_eq!(parse_exact::<u16>("  512"), Ok(512));
/// assert!(parse_exact::<u16>("512 ").unwrap_err().is_trailing_input());
/// ```
pub fn parse_exact<T: Parsable>(input: &str) -> Result<T, ParseError> {
    T::parse_exact(input)
}

macro_rules! impl_parsable_signed {
    ($($type:ty),* $(,)?) => {
        $(
            impl Parsable for $type {
                fn parse_prefix(input: &str) -> Result<(Self, usize), ParseError> {
                    let int = scan::scan_integer(input)?;
                    let magnitude = int.magnitude()?;
                    let wide = if int.negative {
                        0_i128.checked_sub_unsigned(magnitude)
                    } else {
                        i128::try_from(magnitude).ok()
                    };
                    let value = wide
                        .and_then(|wide| <$type>::try_from(wide).ok())
                        .ok_or(OutOfRange)?;
                    Ok((value, int.end))
                }
            }
        )*
    };
}

macro_rules! impl_parsable_unsigned {
    ($($type:ty),* $(,)?) => {
        $(
            impl Parsable for $type {
                fn parse_prefix(input: &str) -> Result<(Self, usize), ParseError> {
                    let int = scan::scan_integer(input)?;
                    let magnitude = int.magnitude()?;
                    // Unlike `%u`, a negative number doesn't wrap around. Only "-0" is accepted.
                    if int.negative && magnitude != 0 {
                        return Err(OutOfRange.into());
                    }
                    let value = <$type>::try_from(magnitude).map_err(|_| OutOfRange)?;
                    Ok((value, int.end))
                }
            }
        )*
    };
}

impl_parsable_signed!(i8, i16, i32, i64, i128, isize);
impl_parsable_unsigned!(u8, u16, u32, u64, u128, usize);

macro_rules! impl_parsable_float {
    ($($type:ty),*) => {
        $(
            impl Parsable for $type {
                fn parse_prefix(input: &str) -> Result<(Self, usize), ParseError> {
                    match scan::scan_float(input)? {
                        Float::Number { token, end } => {
                            // The scanner only hands over tokens that FromStr accepts.
                            let value = <$type>::from_str(token).map_err(|_| NoDigits)?;
                            Ok((value, end))
                        },
                        Float::Infinity { negative: true, end } => Ok((<$type>::NEG_INFINITY, end)),
                        Float::Infinity { negative: false, end } => Ok((<$type>::INFINITY, end)),
                        Float::NaN { end } => Ok((<$type>::NAN, end)),
                    }
                }
            }
        )*
    };
}

impl_parsable_float!(f32, f64);

impl Parsable for bool {
    /// Only the exact, lowercase literals `true` and `false` are accepted, and they must make up
    /// the whole input. Other spellings such as `TRUE`, `T` or `1` are left for users to define
    /// with their own types.
    fn parse_prefix(input: &str) -> Result<(Self, usize), ParseError> {
        match input {
            "true" => Ok((true, input.len())),
            "false" => Ok((false, input.len())),
            _ => Err(InvalidLiteral)?,
        }
    }
}

impl Parsable for char {
    /// Takes the first character of the input, or `'\0'` for an empty input. Never fails.
    fn parse_prefix(input: &str) -> Result<(Self, usize), ParseError> {
        Ok(input
            .chars()
            .next()
            .map_or(('\0', 0), |first| (first, first.len_utf8())))
    }
}

impl Parsable for String {
    /// Copies the input unchanged. Never fails.
    fn parse_prefix(input: &str) -> Result<(Self, usize), ParseError> {
        Ok((input.to_owned(), input.len()))
    }
}

impl<T: Parsable> Parsable for Box<T> {
    fn parse_prefix(input: &str) -> Result<(Self, usize), ParseError> {
        T::parse_prefix(input).map(|(value, consumed)| (Box::new(value), consumed))
    }
}
