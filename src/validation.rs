//! Input checks shared by the actors' `from_create_params`.
//!
//! Each check returns the cleaned value or a message; the caller wraps the message in
//! its own `ValidationError`.

use regex::Regex;
use std::sync::LazyLock;

pub const MAX_NAME_LEN: usize = 100;
pub const MAX_PARTY_SIZE: u32 = 20;
pub const MAX_CONTACT_LEN: usize = 20;
pub const MIN_CONTACT_DIGITS: usize = 7;
pub const MAX_PREFERENCES_LEN: usize = 500;

static CUSTOMER_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\p{L}[\p{L} '.\-]*$").expect("customer name pattern is valid")
});

static CONTACT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9 +\-()]+$").expect("contact pattern is valid"));

/// Trimmed, non-empty, at most [`MAX_NAME_LEN`] characters.
pub fn label(field: &str, value: &str) -> Result<String, String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(format!("{field} must not be empty"));
    }
    if value.chars().count() > MAX_NAME_LEN {
        return Err(format!("{field} must be at most {MAX_NAME_LEN} characters"));
    }
    Ok(value.to_string())
}

/// A [`label`] made only of letters, spaces, apostrophes, periods and hyphens.
pub fn customer_name(value: &str) -> Result<String, String> {
    let name = label("customer_name", value)?;
    if !CUSTOMER_NAME.is_match(&name) {
        return Err(
            "customer_name may only contain letters, spaces, apostrophes, periods and hyphens"
                .to_string(),
        );
    }
    Ok(name)
}

pub fn party_size(value: u32) -> Result<u32, String> {
    if (1..=MAX_PARTY_SIZE).contains(&value) {
        Ok(value)
    } else {
        Err(format!("party_size must be between 1 and {MAX_PARTY_SIZE}"))
    }
}

/// Phone-like text; blank input counts as absent.
pub fn contact(value: Option<&str>) -> Result<Option<String>, String> {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    if value.chars().count() > MAX_CONTACT_LEN {
        return Err(format!("contact must be at most {MAX_CONTACT_LEN} characters"));
    }
    if !CONTACT.is_match(value) {
        return Err("contact may only contain digits, spaces, +, -, ( and )".to_string());
    }
    let digits = value.chars().filter(char::is_ascii_digit).count();
    if digits < MIN_CONTACT_DIGITS {
        return Err(format!("contact must contain at least {MIN_CONTACT_DIGITS} digits"));
    }
    Ok(Some(value.to_string()))
}

/// Free text; blank input counts as absent.
pub fn preferences(value: Option<&str>) -> Result<Option<String>, String> {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    if value.chars().count() > MAX_PREFERENCES_LEN {
        return Err(format!(
            "preferences must be at most {MAX_PREFERENCES_LEN} characters"
        ));
    }
    Ok(Some(value.to_string()))
}
