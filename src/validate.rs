//! Form Validation
//!
//! Field rules mirroring the `required`, `maxlength` and `type=url`
//! attributes on the form inputs, plus the URL scheme normaliser.

use url::Url;

use crate::config::{BOOKMARK_MAX_LEN, CATEGORY_MAX_LEN, PASSWORD_MAX_LEN};

/// How `max_len` is measured
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LenUnit {
    /// Characters, as the `maxlength` attribute counts them
    Chars,
    /// UTF-8 bytes, as the server counts category names
    Bytes,
}

impl LenUnit {
    pub fn measure(&self, value: &str) -> usize {
        match self {
            LenUnit::Chars => value.chars().count(),
            LenUnit::Bytes => value.len(),
        }
    }
}

/// Constraints on a single input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rule {
    pub required: bool,
    pub max_len: Option<usize>,
    pub unit: LenUnit,
    pub url: bool,
}

pub const CATEGORY_NAME: Rule = Rule {
    required: true,
    max_len: Some(CATEGORY_MAX_LEN),
    unit: LenUnit::Bytes,
    url: false,
};
pub const BOOKMARK_NAME: Rule = Rule {
    required: true,
    max_len: Some(BOOKMARK_MAX_LEN),
    unit: LenUnit::Chars,
    url: false,
};
pub const BOOKMARK_URL: Rule = Rule { required: true, max_len: None, unit: LenUnit::Chars, url: true };
pub const BOOKMARK_CATEGORY: Rule = Rule {
    required: false,
    max_len: Some(CATEGORY_MAX_LEN),
    unit: LenUnit::Bytes,
    url: false,
};
pub const PASSWORD: Rule = Rule {
    required: true,
    max_len: Some(PASSWORD_MAX_LEN),
    unit: LenUnit::Chars,
    url: false,
};

/// Why a value failed its rule
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Invalid {
    Missing,
    TooLong { max: usize, unit: LenUnit },
    BadUrl,
}

impl Invalid {
    /// Feedback shown under the input
    pub fn message(&self) -> String {
        match self {
            Invalid::Missing => "This field is required.".to_string(),
            Invalid::TooLong { max, unit: LenUnit::Chars } => format!("At most {} characters.", max),
            Invalid::TooLong { max, unit: LenUnit::Bytes } => {
                format!("At most {} characters. One chinese character equal three characters.", max)
            }
            Invalid::BadUrl => "Please enter a valid URL.".to_string(),
        }
    }
}

/// Check one value against its rule
pub fn check(value: &str, rule: &Rule) -> Result<(), Invalid> {
    if value.is_empty() {
        return if rule.required { Err(Invalid::Missing) } else { Ok(()) };
    }
    if let Some(max) = rule.max_len {
        if rule.unit.measure(value) > max {
            return Err(Invalid::TooLong { max, unit: rule.unit });
        }
    }
    if rule.url && !is_web_url(value) {
        return Err(Invalid::BadUrl);
    }
    Ok(())
}

/// True when every `(value, rule)` pair passes
pub fn all_valid(fields: &[(&str, Rule)]) -> bool {
    fields.iter().all(|(value, rule)| check(value, rule).is_ok())
}

/// Feedback text for `value`, defaulting to the required-field message
pub fn feedback(value: &str, rule: &Rule) -> String {
    check(value, rule).err().unwrap_or(Invalid::Missing).message()
}

/// Absolute URL with an http or https scheme and a host
pub fn is_web_url(value: &str) -> bool {
    match Url::parse(value) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.host().is_some(),
        Err(_) => false,
    }
}

/// Prepend `http://` to a non-empty URL that has no http(s) scheme
pub fn normalize_url(value: &str) -> String {
    if value.is_empty() || value.starts_with("http:") || value.starts_with("https:") {
        value.to_string()
    } else {
        format!("http://{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_field_rejects_empty() {
        assert_eq!(check("", &CATEGORY_NAME), Err(Invalid::Missing));
        assert_eq!(check("", &BOOKMARK_CATEGORY), Ok(()));
    }

    #[test]
    fn test_category_max_len_counts_bytes() {
        let too_long = Err(Invalid::TooLong { max: 15, unit: LenUnit::Bytes });
        assert_eq!(check("abcdefghijklmno", &CATEGORY_NAME), Ok(()));
        assert_eq!(check("abcdefghijklmnop", &CATEGORY_NAME), too_long);
        // Five CJK characters are fifteen bytes, six are too many
        assert_eq!(check("书签书签书", &CATEGORY_NAME), Ok(()));
        assert_eq!(check("书签书签书签", &CATEGORY_NAME), too_long);
        assert_eq!(check("书签书签书签", &BOOKMARK_CATEGORY), too_long);
    }

    #[test]
    fn test_bookmark_name_and_password_count_chars() {
        assert_eq!(check(&"书".repeat(14), &BOOKMARK_NAME), Ok(()));
        assert_eq!(check(&"书".repeat(40), &BOOKMARK_NAME), Ok(()));
        assert_eq!(
            check(&"书".repeat(41), &BOOKMARK_NAME),
            Err(Invalid::TooLong { max: 40, unit: LenUnit::Chars })
        );
        assert_eq!(check(&"密".repeat(7), &PASSWORD), Ok(()));
        assert_eq!(check(&"密".repeat(20), &PASSWORD), Ok(()));
        assert_eq!(
            check(&"a".repeat(21), &PASSWORD),
            Err(Invalid::TooLong { max: 20, unit: LenUnit::Chars })
        );
    }

    #[test]
    fn test_feedback_names_the_problem() {
        assert_eq!(feedback("", &BOOKMARK_NAME), "This field is required.");
        assert_eq!(feedback(&"a".repeat(41), &BOOKMARK_NAME), "At most 40 characters.");
        assert_eq!(
            feedback("书签书签书签", &CATEGORY_NAME),
            "At most 15 characters. One chinese character equal three characters."
        );
        assert_eq!(feedback("example", &BOOKMARK_URL), "Please enter a valid URL.");
        // A valid value keeps the required message for the hidden feedback slot
        assert_eq!(feedback("Rust", &BOOKMARK_NAME), "This field is required.");
    }

    #[test]
    fn test_url_rule() {
        assert_eq!(check("https://example.com/a?b=c", &BOOKMARK_URL), Ok(()));
        assert_eq!(check("example.com", &BOOKMARK_URL), Err(Invalid::BadUrl));
        assert_eq!(check("ftp://example.com", &BOOKMARK_URL), Err(Invalid::BadUrl));
        assert_eq!(check("", &BOOKMARK_URL), Err(Invalid::Missing));
    }

    #[test]
    fn test_all_valid() {
        assert!(all_valid(&[("Rust", BOOKMARK_NAME), ("https://rust-lang.org", BOOKMARK_URL), ("", BOOKMARK_CATEGORY)]));
        assert!(!all_valid(&[("Rust", BOOKMARK_NAME), ("", BOOKMARK_URL)]));
    }

    #[test]
    fn test_normalize_url_prepends_scheme() {
        assert_eq!(normalize_url("example.com"), "http://example.com");
        assert_eq!(normalize_url("www.example.com/path"), "http://www.example.com/path");
    }

    #[test]
    fn test_normalize_url_keeps_http_and_https() {
        assert_eq!(normalize_url("http://example.com"), "http://example.com");
        assert_eq!(normalize_url("https://example.com"), "https://example.com");
        assert_eq!(normalize_url(""), "");
    }

    #[test]
    fn test_normalized_url_passes_rule() {
        assert_eq!(check(&normalize_url("example.com"), &BOOKMARK_URL), Ok(()));
    }
}
