//! Pure input checks shared by the account forms.
//!
//! These mirror the backend's account rules so obvious mistakes are caught
//! before a round trip; the backend stays authoritative.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

pub const MIN_NAME_CHARS: usize = 3;
pub const MIN_PASSWORD_CHARS: usize = 8;

/// Loose `local@domain.tld` shape check.
pub fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !local.is_empty()
        && !host.is_empty()
        && !tld.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
}

/// Ten-digit domestic mobile number starting with `0`.
pub fn looks_like_phone(phone: &str) -> bool {
    phone.len() == 10 && phone.starts_with('0') && phone.chars().all(|c| c.is_ascii_digit())
}

/// First rule the password breaks, if any.
pub fn password_problem(password: &str) -> Option<&'static str> {
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Some("Password must be at least 8 characters.");
    }
    if !password.chars().any(char::is_uppercase) {
        return Some("Password must contain an uppercase letter.");
    }
    if !password.chars().any(char::is_lowercase) {
        return Some("Password must contain a lowercase letter.");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Some("Password must contain a digit.");
    }
    None
}

/// Trimmed display name, if long enough.
pub fn normalize_name(name: &str) -> Result<String, &'static str> {
    let name = name.trim();
    if name.chars().count() < MIN_NAME_CHARS {
        return Err("Name must be at least 3 characters.");
    }
    Ok(name.to_owned())
}

/// Optional phone: blank becomes `None`, anything else must be well formed.
pub fn normalize_optional_phone(phone: &str) -> Result<Option<String>, &'static str> {
    let phone = phone.trim();
    if phone.is_empty() {
        return Ok(None);
    }
    if !looks_like_phone(phone) {
        return Err("Phone must be 10 digits starting with 0.");
    }
    Ok(Some(phone.to_owned()))
}
