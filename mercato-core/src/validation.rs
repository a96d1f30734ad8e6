//! Pure input validators. Invalid input is reported as a value, never a
//! panic; only the predicates that answer a yes/no question return bool.

use thiserror::Error;

pub const MIN_SIGNUP_USERNAME_LEN: usize = 3;
pub const MIN_SIGNUP_AGE: i64 = 18;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid username: must be at least {min} characters")]
    InvalidUsername { min: usize },

    #[error("invalid age: must be at least {min}")]
    InvalidAge { min: i64 },

    #[error("invalid country code: {code}")]
    InvalidCountryCode { code: String },
}

/// RFC-like address shape: one `@`, non-empty local part, dotted domain,
/// no whitespace. Anything stricter is the mail provider's problem.
pub fn is_valid_email(address: &str) -> bool {
    if address.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = address.splitn(2, '@');
    let (local, domain) = match (parts.next(), parts.next()) {
        (Some(local), Some(domain)) => (local, domain),
        _ => return false,
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

/// Display-name rule for public profiles: 5 to 15 characters.
pub fn is_valid_username(username: &str) -> bool {
    let len = username.chars().count();
    (5..=15).contains(&len)
}

/// Signup-form rule: username at least 3 characters, age at least 18.
pub fn validate_user_input(username: &str, age: i64) -> Result<(), ValidationError> {
    if username.trim().chars().count() < MIN_SIGNUP_USERNAME_LEN {
        return Err(ValidationError::InvalidUsername {
            min: MIN_SIGNUP_USERNAME_LEN,
        });
    }

    if age < MIN_SIGNUP_AGE {
        return Err(ValidationError::InvalidAge {
            min: MIN_SIGNUP_AGE,
        });
    }

    Ok(())
}

/// Legal driving age per supported country.
pub fn can_drive(age: u32, country: &str) -> Result<bool, ValidationError> {
    let legal_age = match country {
        "US" => 16,
        "UK" => 17,
        other => {
            return Err(ValidationError::InvalidCountryCode {
                code: other.to_string(),
            })
        }
    };

    Ok(age >= legal_age)
}

/// Closed interval check, both bounds inclusive.
pub fn is_price_in_range(price: f64, min: f64, max: f64) -> bool {
    price >= min && price <= max
}

/// At least 8 characters with an uppercase letter, a lowercase letter and
/// a digit.
pub fn is_strong_password(password: &str) -> bool {
    password.chars().count() >= 8
        && password.chars().any(|c| c.is_uppercase())
        && password.chars().any(|c| c.is_lowercase())
        && password.chars().any(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("name@domain.com"));
        assert!(is_valid_email("first.last@mail.example.org"));

        assert!(!is_valid_email("as"));
        assert!(!is_valid_email("@domain.com"));
        assert!(!is_valid_email("name@domain"));
        assert!(!is_valid_email("name@@domain.com"));
        assert!(!is_valid_email("name@domain..com"));
        assert!(!is_valid_email("na me@domain.com"));
    }

    #[test]
    fn test_username_length_bounds() {
        assert!(is_valid_username("mosha"));
        assert!(is_valid_username("fifteen_chars__"));

        assert!(!is_valid_username("four"));
        assert!(!is_valid_username("sixteen_chars___"));
    }

    #[test]
    fn test_user_input_rules() {
        assert!(validate_user_input("bob", 18).is_ok());

        let err = validate_user_input("bo", 30).unwrap_err();
        assert!(err.to_string().contains("invalid username"));

        let err = validate_user_input("alice", 17).unwrap_err();
        assert!(err.to_string().contains("invalid age"));
    }

    #[test]
    fn test_driving_ages() {
        assert!(can_drive(16, "US").unwrap());
        assert!(!can_drive(15, "US").unwrap());
        assert!(can_drive(17, "UK").unwrap());
        assert!(!can_drive(16, "UK").unwrap());

        let err = can_drive(30, "FR").unwrap_err();
        assert!(err.to_string().to_lowercase().contains("invalid country code"));
    }

    #[test]
    fn test_price_range_is_closed() {
        assert!(is_price_in_range(10.0, 10.0, 20.0));
        assert!(is_price_in_range(20.0, 10.0, 20.0));
        assert!(is_price_in_range(15.0, 10.0, 20.0));

        assert!(!is_price_in_range(9.99, 10.0, 20.0));
        assert!(!is_price_in_range(20.01, 10.0, 20.0));
    }

    #[test]
    fn test_password_strength() {
        assert!(is_strong_password("Passw0rd"));

        assert!(!is_strong_password("short1A"));
        assert!(!is_strong_password("alllowercase1"));
        assert!(!is_strong_password("ALLUPPERCASE1"));
        assert!(!is_strong_password("NoDigitsHere"));
    }
}
