use crate::domain::ports::PhoneFormatter;

/// North American Numbering Plan formatting for 10-digit numbers, with an optional
/// leading country code `1`. Other input is passed through untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct NanpPhoneFormatter;

impl NanpPhoneFormatter {
    fn national_digits(raw: &str) -> Option<String> {
        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
        match digits.len() {
            10 => Some(digits),
            11 if digits.starts_with('1') => Some(digits[1..].to_string()),
            _ => None,
        }
    }
}

impl PhoneFormatter for NanpPhoneFormatter {
    fn format(&self, raw: &str) -> String {
        match Self::national_digits(raw) {
            Some(d) => format!("({}) {}-{}", &d[0..3], &d[3..6], &d[6..]),
            None => raw.to_string(),
        }
    }

    fn to_e164(&self, raw: &str) -> Option<String> {
        Self::national_digits(raw).map(|d| format!("+1{}", d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_national() {
        let f = NanpPhoneFormatter;
        assert_eq!(f.format("5551234567"), "(555) 123-4567");
        assert_eq!(f.format("+1 555.123.4567"), "(555) 123-4567");
        assert_eq!(f.format("12345"), "12345");
    }

    #[test]
    fn test_to_e164() {
        let f = NanpPhoneFormatter;
        assert_eq!(f.to_e164("(555) 123-4567").as_deref(), Some("+15551234567"));
        assert_eq!(f.to_e164("25551234567"), None);
        assert_eq!(f.to_e164(""), None);
    }
}
