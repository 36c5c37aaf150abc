use crate::models::FIELD_NAMES;

/// Check a header row or key list against the required field names.
///
/// Matching is positional and case-sensitive: there must be exactly as many fields as
/// [`FIELD_NAMES`], and each one, trimmed, must equal the expected name at that index.
pub fn validate_headers<S: AsRef<str>>(fields: &[S]) -> bool {
    fields.len() == FIELD_NAMES.len()
        && fields.iter().zip(FIELD_NAMES).all(|(field, expected)| field.as_ref().trim() == expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_headers_pass() {
        assert!(validate_headers(&FIELD_NAMES));
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        let padded: Vec<String> = FIELD_NAMES.iter().map(|f| format!("  {}\t", f)).collect();
        assert!(validate_headers(&padded));
    }

    #[test]
    fn test_wrong_count_fails() {
        assert!(!validate_headers(&FIELD_NAMES[..8]));

        let mut extra = FIELD_NAMES.to_vec();
        extra.push("Extra");
        assert!(!validate_headers(&extra));

        assert!(!validate_headers::<&str>(&[]));
    }

    #[test]
    fn test_reordered_headers_fail() {
        let mut swapped = FIELD_NAMES;
        swapped.swap(0, 1);
        assert!(!validate_headers(&swapped));
    }

    #[test]
    fn test_case_sensitive() {
        let mut lower = FIELD_NAMES.map(String::from);
        lower[0] = "date".to_string();
        assert!(!validate_headers(&lower));
    }
}
