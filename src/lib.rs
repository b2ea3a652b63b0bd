//! Chinese renderings of numbers: digit transliteration, renminbi amounts in
//! words, and 萬/億/兆 abbreviation.

pub mod abbrev;
pub mod error;
pub mod literal;
pub mod numerals;
pub mod rmb;
mod utils;

pub use abbrev::abbreviate;
pub use error::{ConvertError, Result};
pub use literal::{Literal, fraction_to_chinese, transliterate, transliterate_both};
pub use numerals::CaseStyle;
pub use rmb::amount_in_words;
