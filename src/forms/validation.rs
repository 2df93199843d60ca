// Form Validation
// Local validation rules for the lead-capture forms

/// Require a trimmed value of at least `min` characters
pub fn require_min_len(label: &str, value: &str, min: usize) -> Result<String, String> {
    let trimmed = value.trim();
    if trimmed.chars().count() < min {
        Err(format!("{label} must be at least {min} characters"))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Require a well-formed email address: local part, '@', dotted domain
pub fn require_email(value: &str) -> Result<String, String> {
    let trimmed = value.trim();
    let valid = match trimmed.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !trimmed.contains(char::is_whitespace)
                && !domain.contains('@')
        }
        None => false,
    };
    if valid {
        Ok(trimmed.to_string())
    } else {
        Err("Must be a valid email".to_string())
    }
}

/// Require an international mobile number: leading '+' and 8-15 digits
/// (spaces between digit groups are accepted and stripped)
pub fn require_mobile(value: &str) -> Result<String, String> {
    let trimmed = value.trim();
    let digits: String = match trimmed.strip_prefix('+') {
        Some(rest) => rest.chars().filter(|c| !c.is_whitespace()).collect(),
        None => return Err("Mobile must start with a country code, e.g. +971".to_string()),
    };
    if digits.chars().all(|c| c.is_ascii_digit()) && (8..=15).contains(&digits.len()) {
        Ok(format!("+{digits}"))
    } else {
        Err("Must be a valid mobile number".to_string())
    }
}

/// Require a selected option on a choice field
pub fn require_choice(label: &str, selection: Option<&str>) -> Result<String, String> {
    match selection {
        Some(value) => Ok(value.to_string()),
        None => Err(format!("{label} is required")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_len() {
        assert!(require_min_len("Name", "Jo", 3).is_err());
        assert_eq!(require_min_len("Name", "  Joe ", 3).unwrap(), "Joe");
    }

    #[test]
    fn test_email_accepts_plain_addresses() {
        assert_eq!(require_email("a@b.co").unwrap(), "a@b.co");
        assert_eq!(require_email(" user@mail.example.com ").unwrap(), "user@mail.example.com");
    }

    #[test]
    fn test_email_rejects_malformed_addresses() {
        assert!(require_email("").is_err());
        assert!(require_email("plainaddress").is_err());
        assert!(require_email("@nolocal.com").is_err());
        assert!(require_email("user@nodot").is_err());
        assert!(require_email("user@.com").is_err());
        assert!(require_email("user name@mail.com").is_err());
    }

    #[test]
    fn test_mobile_requires_country_code() {
        assert!(require_mobile("0501234567").is_err());
        assert_eq!(require_mobile("+971 50 123 4567").unwrap(), "+971501234567");
    }

    #[test]
    fn test_mobile_length_bounds() {
        assert!(require_mobile("+1234567").is_err());
        assert_eq!(require_mobile("+12345678").unwrap(), "+12345678");
        assert!(require_mobile("+1234567890123456").is_err());
    }

    #[test]
    fn test_choice_required() {
        assert!(require_choice("Property type", None).is_err());
        assert_eq!(require_choice("Property type", Some("Villa")).unwrap(), "Villa");
    }
}
