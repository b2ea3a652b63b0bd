//! Renminbi amounts written out in financial numerals (壹佰元整 style).

use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};
use tracing::{debug, trace};

use crate::error::{ConvertError, Result};
use crate::numerals::{CaseStyle, digit_glyph};

/// Positional units, most significant first. The last two are always 角 and 分.
pub const UNIT_SUFFIXES: [&str; 14] = [
    "仟", "佰", "拾", "億", "仟", "佰", "拾", "萬", "仟", "佰", "拾", "元", "角", "分",
];

const ZERO_AMOUNT: &str = "零元整";

/// One find-and-replace pass over the generated amount text.
#[derive(Debug)]
pub struct CleanupRule {
    pub pattern: &'static str,
    pub replacement: &'static str,
    pub intent: &'static str,
}

/// Applied in this order, each exactly once. Later rules rely on earlier ones.
pub static CLEANUP_RULES: [CleanupRule; 10] = [
    CleanupRule {
        pattern: "零角零分$",
        replacement: "整",
        intent: "no fractional part",
    },
    CleanupRule {
        pattern: "零角",
        replacement: "零",
        intent: "zero jiao with a fen digit after it",
    },
    CleanupRule {
        pattern: "零分$",
        replacement: "整",
        intent: "jiao present, fen zero",
    },
    CleanupRule {
        pattern: "零[仟佰拾]",
        replacement: "零",
        intent: "zero digits carry no unit",
    },
    CleanupRule {
        pattern: "零{2,}",
        replacement: "零",
        intent: "collapse runs of zeros",
    },
    CleanupRule {
        pattern: "零億",
        replacement: "億",
        intent: "zero before 億",
    },
    CleanupRule {
        pattern: "零萬",
        replacement: "萬",
        intent: "zero before 萬",
    },
    CleanupRule {
        pattern: "零*元",
        replacement: "元",
        intent: "zeros before 元",
    },
    CleanupRule {
        pattern: "億零{0,3}萬",
        replacement: "^元",
        intent: "empty 萬 group after 億; marks output with ^, pending product-owner review",
    },
    CleanupRule {
        pattern: "零元",
        replacement: "零",
        intent: "all-zero integer part",
    },
];

static COMPILED_RULES: Lazy<Vec<(Regex, &'static CleanupRule)>> = Lazy::new(|| {
    CLEANUP_RULES
        .iter()
        .map(|rule| (Regex::new(rule.pattern).expect("valid cleanup pattern"), rule))
        .collect()
});

/// Runs the cleanup rules over already generated digit+unit text.
pub fn clean_amount_text(raw: &str) -> String {
    COMPILED_RULES
        .iter()
        .fold(raw.to_string(), |text, (re, rule)| {
            let replaced = re
                .replace_all(&text, NoExpand(rule.replacement))
                .into_owned();
            if replaced != text {
                trace!(pattern = rule.pattern, before = %text, after = %replaced, "cleanup rule applied");
            }
            replaced
        })
}

/// Writes `amount` (yuan, at most two decimals) in words, e.g. `1001.5` -> `壹仟零壹元伍角整`.
///
/// Amounts are rounded to the fen. Anything that rounds to zero is `零元整`.
pub fn amount_in_words(amount: f64) -> Result<String> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(ConvertError::InvalidAmount(amount));
    }
    // abs() only matters for -0.0
    let digits = format!("{:.0}", (amount * 100.0).abs());
    if digits.bytes().all(|b| b == b'0') {
        return Ok(ZERO_AMOUNT.to_string());
    }
    if digits.len() > UNIT_SUFFIXES.len() {
        return Err(ConvertError::MagnitudeOverflow {
            digits: digits.len(),
            max: UNIT_SUFFIXES.len(),
        });
    }

    let units = &UNIT_SUFFIXES[UNIT_SUFFIXES.len() - digits.len()..];
    let mut raw = String::with_capacity(digits.len() * 6);
    for (ch, unit) in digits.chars().zip(units) {
        raw.push_str(digit_glyph(ch, CaseStyle::Upper)?);
        raw.push_str(unit);
    }
    debug!(amount, raw = %raw, "generated amount text");

    Ok(clean_amount_text(&raw))
}
