//! Shared utility functions for SIE crates.

/// Number formatting for income displays
pub mod format {
    /// Placeholder shown wherever a value is missing.
    pub const MISSING: &str = "N/A";

    /// Insert `,` thousands separators into a string of ASCII digits.
    fn group_digits(digits: &str) -> String {
        let len = digits.len();
        let mut out = String::with_capacity(len + len / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        out
    }

    /// Format a whole-number amount with thousands separators, e.g. `60000.4` -> `"60,000"`.
    ///
    /// The value is rounded to zero decimal places first. Negative amounts keep their sign
    /// in front of the digits.
    pub fn format_thousands(value: f64) -> String {
        let rounded = format!("{:.0}", value);
        match rounded.strip_prefix('-') {
            Some(digits) if digits.chars().any(|c| c != '0') => {
                format!("-{}", group_digits(digits))
            }
            Some(_) => "0".to_string(),
            None => group_digits(&rounded),
        }
    }

    /// Format an optional amount as currency: `$` prefix, thousands separators, no decimals.
    ///
    /// Missing values render as [`MISSING`].
    pub fn format_currency(value: Option<f64>) -> String {
        match value {
            Some(v) if v.is_finite() => format!("${}", format_thousands(v)),
            _ => MISSING.to_string(),
        }
    }

}

/// Error types
pub mod error {
    use std::fmt;

    /// A remote resource could not be retrieved: network failure, DNS failure,
    /// or a non-success HTTP status.
    #[derive(Debug, Clone, PartialEq)]
    pub struct FetchError {
        pub url: String,
        pub reason: String,
    }

    impl FetchError {
        pub fn new(url: impl Into<String>, reason: impl fmt::Display) -> Self {
            Self {
                url: url.into(),
                reason: reason.to_string(),
            }
        }
    }

    impl fmt::Display for FetchError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "Fetch error for {}: {}", self.url, self.reason)
        }
    }

    impl std::error::Error for FetchError {}

    #[cfg(test)]
    mod tests {
        use super::FetchError;

        #[test]
        fn fetch_error_converts_into_anyhow() {
            let err: anyhow::Error = FetchError::new("http://example.test/a.csv", "HTTP 404").into();
            assert_eq!(
                err.to_string(),
                "Fetch error for http://example.test/a.csv: HTTP 404"
            );
            assert!(err.downcast_ref::<FetchError>().is_some());
        }
    }
}
