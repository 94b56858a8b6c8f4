use std::fmt::LowerExp;

/// Decimal exponents below this use exponential notation, matching `%g`.
const MIN_FIXED_EXP: i32 = -4;
/// Decimal exponents at or above this use exponential notation, matching `%g`'s default precision.
const MAX_FIXED_EXP: i32 = 6;

pub(crate) trait Float: LowerExp + Copy {
    fn is_nan(self) -> bool;
    fn is_infinite(self) -> bool;
    fn is_sign_negative(self) -> bool;
}

macro_rules! impl_float {
    ($($type:ty),*) => {
        $(
            impl Float for $type {
                fn is_nan(self) -> bool {
                    <$type>::is_nan(self)
                }

                fn is_infinite(self) -> bool {
                    <$type>::is_infinite(self)
                }

                fn is_sign_negative(self) -> bool {
                    <$type>::is_sign_negative(self)
                }
            }
        )*
    };
}

impl_float!(f32, f64);

/// Formats a float the way `%g` lays numbers out, using the shortest digit string that round-trips
/// instead of a fixed six significant digits.
pub(crate) fn format_general<F: Float>(value: F) -> String {
    if value.is_nan() {
        return String::from("nan");
    }

    let sign = if value.is_sign_negative() { "-" } else { "" };
    if value.is_infinite() {
        return format!("{sign}inf");
    }

    // `{:e}` gives the shortest round-trip digits as `d.ddde[-]x`, without a sign on the exponent.
    let scientific = format!("{value:e}");
    let scientific = scientific.trim_start_matches('-');
    let (mantissa, exp) = scientific.split_once('e').unwrap_or((scientific, "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();

    if digits.bytes().all(|digit| digit == b'0') {
        return format!("{sign}0");
    }

    if exp < MIN_FIXED_EXP || exp >= MAX_FIXED_EXP {
        let exp_sign = if exp < 0 { '-' } else { '+' };
        format!("{sign}{mantissa}e{exp_sign}{:02}", exp.unsigned_abs())
    } else if exp < 0 {
        let zeros = "0".repeat((-exp - 1) as usize);
        format!("{sign}0.{zeros}{digits}")
    } else {
        let int_len = exp as usize + 1;
        if digits.len() <= int_len {
            let zeros = "0".repeat(int_len - digits.len());
            format!("{sign}{digits}{zeros}")
        } else {
            let (int, frac) = digits.split_at(int_len);
            format!("{sign}{int}.{frac}")
        }
    }
}
