pub fn split_sign(s: &str) -> (&str, &str) {
    match s.strip_prefix('-') {
        Some(stripped) => ("-", stripped),
        None => ("", s),
    }
}

/// Chunks ASCII text into `width`-byte groups counted from the right.
/// Only the first group can be shorter than `width`.
pub fn group_from_right(s: &str, width: usize) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut end = s.len();
    while end > 0 {
        let start = end.saturating_sub(width);
        parts.push(&s[start..end]);
        end = start;
    }
    parts.reverse();
    parts
}

#[cfg(test)]
mod tests {
    use super::{group_from_right, split_sign};

    #[test]
    fn group_from_right_keeps_short_head() {
        assert_eq!(group_from_right("43314", 4), ["4", "3314"]);
        assert_eq!(group_from_right("12345678", 4), ["1234", "5678"]);
        assert_eq!(group_from_right("12", 4), ["12"]);
        assert!(group_from_right("", 4).is_empty());
    }

    #[test]
    fn split_sign_only_strips_leading_minus() {
        assert_eq!(split_sign("-12.50"), ("-", "12.50"));
        assert_eq!(split_sign("12-5"), ("", "12-5"));
    }
}
