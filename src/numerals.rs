use serde::Serialize;

use crate::error::{ConvertError, Result};

pub const LOWER_DIGITS: [&str; 10] = ["零", "一", "二", "三", "四", "五", "六", "七", "八", "九"];
pub const UPPER_DIGITS: [&str; 10] = ["零", "壹", "貳", "參", "肆", "伍", "陸", "柒", "捌", "玖"];

/// Which numeral set a digit is written in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStyle {
    /// Everyday numerals (一二三).
    #[default]
    Lower,
    /// Financial numerals (壹貳參), used on cheques and invoices.
    Upper,
}

impl CaseStyle {
    pub fn table(self) -> &'static [&'static str; 10] {
        match self {
            CaseStyle::Lower => &LOWER_DIGITS,
            CaseStyle::Upper => &UPPER_DIGITS,
        }
    }
}

pub fn digit_glyph(ch: char, case: CaseStyle) -> Result<&'static str> {
    let index = ch.to_digit(10).ok_or(ConvertError::UnsupportedCharacter(ch))?;
    Ok(case.table()[index as usize])
}

/// Substitutes every character of `digits` with its glyph; nothing positional.
pub fn map_digits(digits: &str, case: CaseStyle) -> Result<String> {
    let mut out = String::with_capacity(digits.len() * 3);
    for ch in digits.chars() {
        out.push_str(digit_glyph(ch, case)?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::{CaseStyle, digit_glyph, map_digits};
    use crate::error::ConvertError;

    #[test]
    fn digit_glyph_matches_tables() {
        let lower = ["零", "一", "二", "三", "四", "五", "六", "七", "八", "九"];
        let upper = ["零", "壹", "貳", "參", "肆", "伍", "陸", "柒", "捌", "玖"];
        for (d, ch) in ('0'..='9').enumerate() {
            assert_eq!(digit_glyph(ch, CaseStyle::Lower).expect("lower"), lower[d]);
            assert_eq!(digit_glyph(ch, CaseStyle::Upper).expect("upper"), upper[d]);
        }
    }

    #[test]
    fn digit_glyph_rejects_non_ascii_digits() {
        assert_eq!(
            digit_glyph('x', CaseStyle::Lower),
            Err(ConvertError::UnsupportedCharacter('x'))
        );
        // Full-width digits are not ASCII.
        assert_eq!(
            digit_glyph('３', CaseStyle::Upper),
            Err(ConvertError::UnsupportedCharacter('３'))
        );
        assert!(digit_glyph('-', CaseStyle::Lower).is_err());
    }

    #[test]
    fn map_digits_is_char_for_char() {
        assert_eq!(map_digits("1009", CaseStyle::Lower).expect("map"), "一零零九");
        assert_eq!(map_digits("", CaseStyle::Upper).expect("map"), "");
    }
}
