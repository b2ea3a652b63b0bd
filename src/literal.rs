//! Digit-by-digit transliteration of integers, numeric strings and fractions.

use std::borrow::Cow;

use tracing::debug;

use crate::error::{ConvertError, Result};
use crate::numerals::{CaseStyle, digit_glyph, map_digits};

/// A value accepted by [`transliterate`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Literal<'a> {
    Signed(i128),
    Unsigned(u128),
    Text(&'a str),
    /// Rejected with `UnsupportedType`.
    Float(f64),
}

macro_rules! literal_from {
    ($variant:ident, $wide:ty => $($ty:ty),+) => {
        $(
            impl From<$ty> for Literal<'_> {
                fn from(value: $ty) -> Self {
                    Literal::$variant(value as $wide)
                }
            }
        )+
    };
}

literal_from!(Signed, i128 => i8, i16, i32, i64, i128, isize);
literal_from!(Unsigned, u128 => u8, u16, u32, u64, u128, usize);
literal_from!(Float, f64 => f32, f64);

impl<'a> From<&'a str> for Literal<'a> {
    fn from(value: &'a str) -> Self {
        Literal::Text(value)
    }
}

impl<'a> From<&'a String> for Literal<'a> {
    fn from(value: &'a String) -> Self {
        Literal::Text(value.as_str())
    }
}

impl<'a> Literal<'a> {
    fn to_decimal(self) -> Result<Cow<'a, str>> {
        match self {
            Literal::Signed(n) => Ok(Cow::Owned(n.to_string())),
            Literal::Unsigned(n) => Ok(Cow::Owned(n.to_string())),
            Literal::Text(s) => Ok(Cow::Borrowed(s)),
            Literal::Float(_) => Err(ConvertError::UnsupportedType("floating-point number")),
        }
    }
}

/// Writes every digit of `value` as a glyph. Signs and decimal points are dropped.
pub fn transliterate<'a>(value: impl Into<Literal<'a>>, case: CaseStyle) -> Result<String> {
    let text = value.into().to_decimal()?;
    let mut out = String::with_capacity(text.len() * 3);
    for ch in text.chars() {
        if ch == '-' || ch == '.' {
            continue;
        }
        let glyph = digit_glyph(ch, case).map_err(|_| ConvertError::ConversionFailed(ch))?;
        out.push_str(glyph);
    }
    debug!(input = %text, output = %out, ?case, "transliterated literal");
    Ok(out)
}

/// Returns `(lowercase, uppercase)` for the same input.
pub fn transliterate_both<'a>(value: impl Into<Literal<'a>>) -> Result<(String, String)> {
    let value = value.into();
    let lower = transliterate(value, CaseStyle::Lower)?;
    let upper = transliterate(value, CaseStyle::Upper)?;
    Ok((lower, upper))
}

/// Transliterates the digits after the decimal point of `value`, which must lie in (0, 1).
///
/// The value is printed with the shortest representation that round-trips,
/// so `0.1` yields one glyph, not seventeen.
pub fn fraction_to_chinese(value: f64, case: CaseStyle) -> Result<String> {
    if !(value > 0.0 && value < 1.0) {
        return Err(ConvertError::DomainError(value));
    }
    let text = value.to_string();
    let digits = text
        .strip_prefix("0.")
        .ok_or(ConvertError::DomainError(value))?;
    map_digits(digits, case)
}
