use tracing::debug;

use crate::utils::{group_from_right, split_sign};

/// Scale words for successive four-digit groups, counted from the right.
pub const SCALE_WORDS: [&str; 3] = ["萬", "億", "兆"];

const SCALE_RULES: [(&str, &str); 5] = [
    ("萬0000", "萬"),
    ("億0000", "億"),
    ("兆0000", "兆"),
    ("億萬", "億"),
    ("兆億", "兆"),
];

/// Groups the integer part of `value` by four digits and puts a scale word between groups.
///
/// `43314.15` becomes `4萬3314.15`; all-zero groups are dropped, so `1e8` is `1億.00`.
/// The fraction is always two digits. Past 兆 the scale words start over at 萬.
/// Never fails: a minus sign is kept in front, and NaN or infinities come back as text.
pub fn abbreviate(value: f64) -> String {
    let text = format!("{value:.2}");
    let (sign, unsigned) = split_sign(&text);
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, format!(".{fraction}")),
        None => (unsigned, String::new()),
    };

    let mut out = String::from(sign);
    let groups = group_from_right(integer, 4);
    if let Some((head, tail)) = groups.split_first() {
        out.push_str(head);
        for (i, group) in tail.iter().enumerate() {
            out.push_str(SCALE_WORDS[(tail.len() - 1 - i) % SCALE_WORDS.len()]);
            out.push_str(group);
        }
    }
    out.push_str(&fraction);
    debug!(value, grouped = %out, "grouped digits");

    SCALE_RULES
        .iter()
        .fold(out, |text, (from, to)| text.replace(from, to))
}

#[cfg(test)]
mod tests {
    use super::abbreviate;

    #[test]
    fn abbreviate_inserts_wan() {
        assert_eq!(abbreviate(43314.15), "4萬3314.15");
        assert_eq!(abbreviate(123_456_789.0), "1億2345萬6789.00");
    }

    #[test]
    fn abbreviate_small_values_unchanged() {
        assert_eq!(abbreviate(1234.5), "1234.50");
        assert_eq!(abbreviate(0.0), "0.00");
    }

    #[test]
    fn abbreviate_drops_zero_groups() {
        assert_eq!(abbreviate(50_000.0), "5萬.00");
        assert_eq!(abbreviate(100_000_000.0), "1億.00");
        assert_eq!(abbreviate(1_000_000_000_000.0), "1兆.00");
        assert_eq!(abbreviate(1e16), "1萬兆.00");
    }

    #[test]
    fn abbreviate_keeps_sign_outside_groups() {
        assert_eq!(abbreviate(-12345.6), "-1萬2345.60");
        assert_eq!(abbreviate(-1234.0), "-1234.00");
    }

    #[test]
    fn abbreviate_passes_non_finite_through() {
        assert_eq!(abbreviate(f64::NAN), "NaN");
        assert_eq!(abbreviate(f64::INFINITY), "inf");
        assert_eq!(abbreviate(f64::NEG_INFINITY), "-inf");
    }
}
