use super::{NoDigits, OutOfRange};

/// A signed run of decimal digits, as read by `%d`.
pub(crate) struct Integer<'a> {
    pub negative: bool,
    pub digits: &'a str,
    pub end: usize,
}

impl Integer<'_> {
    /// The absolute value of the integer, or [`OutOfRange`] if it doesn't fit in 128 bits.
    pub fn magnitude(&self) -> Result<u128, OutOfRange> {
        self.digits
            .bytes()
            .try_fold(0_u128, |acc, digit| {
                acc.checked_mul(10)?.checked_add(u128::from(digit - b'0'))
            })
            .ok_or(OutOfRange)
    }
}

/// A floating point token, as read by `%f`. The token excludes leading whitespace.
pub(crate) enum Float<'a> {
    Number { token: &'a str, end: usize },
    Infinity { negative: bool, end: usize },
    NaN { end: usize },
}

/// Returns the number of bytes of leading whitespace, using the same set as C's `isspace`.
pub(crate) fn skip_whitespace(input: &str) -> usize {
    input
        .bytes()
        .take_while(|byte| matches!(byte, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r'))
        .count()
}

fn count_digits(input: &str, from: usize) -> usize {
    input.as_bytes()[from..].iter().take_while(|byte| byte.is_ascii_digit()).count()
}

/// Returns the position after an optional sign, and whether that sign was `-`.
fn scan_sign(input: &str, from: usize) -> (usize, bool) {
    match input.as_bytes().get(from) {
        Some(b'-') => (from + 1, true),
        Some(b'+') => (from + 1, false),
        _ => (from, false),
    }
}

fn starts_with_ignore_case(input: &str, from: usize, word: &str) -> bool {
    input.as_bytes()[from..]
        .get(..word.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(word.as_bytes()))
}

pub(crate) fn scan_integer(input: &str) -> Result<Integer<'_>, NoDigits> {
    let (start, negative) = scan_sign(input, skip_whitespace(input));
    let end = start + count_digits(input, start);

    if end == start {
        return Err(NoDigits);
    }

    Ok(Integer {
        negative,
        digits: &input[start..end],
        end,
    })
}

pub(crate) fn scan_float(input: &str) -> Result<Float<'_>, NoDigits> {
    let token_start = skip_whitespace(input);
    let (mut pos, negative) = scan_sign(input, token_start);

    if starts_with_ignore_case(input, pos, "infinity") {
        return Ok(Float::Infinity { negative, end: pos + 8 });
    }
    if starts_with_ignore_case(input, pos, "inf") {
        return Ok(Float::Infinity { negative, end: pos + 3 });
    }
    if starts_with_ignore_case(input, pos, "nan") {
        return Ok(Float::NaN { end: pos + 3 });
    }

    let int_digits = count_digits(input, pos);
    pos += int_digits;

    let mut frac_digits = 0;
    if input.as_bytes().get(pos) == Some(&b'.') {
        frac_digits = count_digits(input, pos + 1);
        // A lone '.' with no digits on either side isn't consumed.
        if int_digits + frac_digits > 0 {
            pos += 1 + frac_digits;
        }
    }

    if int_digits + frac_digits == 0 {
        return Err(NoDigits);
    }

    // The exponent only counts if at least one digit follows the marker and optional sign.
    if matches!(input.as_bytes().get(pos), Some(b'e' | b'E')) {
        let (exp_start, _) = scan_sign(input, pos + 1);
        let exp_digits = count_digits(input, exp_start);
        if exp_digits > 0 {
            pos = exp_start + exp_digits;
        }
    }

    Ok(Float::Number {
        token: &input[token_start..pos],
        end: pos,
    })
}
