//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! All checks run before any datastore call; a failure aborts the
//! operation with an inline validation error.

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Business names, promotion titles
pub const MAX_NAME_LEN: usize = 200;

/// Descriptions / promotion conditions
pub const MAX_DESCRIPTION_LEN: usize = 1000;

/// WhatsApp numbers (digits with country code)
pub const MAX_PHONE_LEN: usize = 20;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Passwords (before hashing)
pub const MAX_PASSWORD_LEN: usize = 128;
pub const MIN_PASSWORD_LEN: usize = 6;

/// URLs / image paths
pub const MAX_URL_LEN: usize = 2048;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

/// Validate an email address shape (local@domain, length-capped).
///
/// Full RFC validation is intentionally out of scope; the mailbox check
/// here is the same minimal one the signup form performs.
pub fn validate_email(email: &str) -> Result<(), AppError> {
    validate_required_text(email, "email", MAX_EMAIL_LEN)?;
    let Some((local, domain)) = email.split_once('@') else {
        return Err(AppError::validation("email is not a valid address"));
    };
    if local.is_empty() || domain.is_empty() || !domain.contains('.') {
        return Err(AppError::validation("email is not a valid address"));
    }
    Ok(())
}

/// Validate a password before hashing.
pub fn validate_password(password: &str) -> Result<(), AppError> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::validation(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    if password.len() > MAX_PASSWORD_LEN {
        return Err(AppError::validation(format!(
            "password is too long (max {MAX_PASSWORD_LEN} characters)"
        )));
    }
    Ok(())
}

/// Normalize a promotion's weekday set: must be non-empty, every entry in
/// 0-6 (0 = Sunday). Returns the set deduplicated and sorted.
pub fn normalize_days_of_week(days: &[u8]) -> Result<Vec<u8>, AppError> {
    if days.is_empty() {
        return Err(AppError::validation(
            "select at least one day of the week",
        ));
    }
    if let Some(bad) = days.iter().find(|d| **d > 6) {
        return Err(AppError::validation(format!(
            "invalid day of week: {bad} (expected 0-6)"
        )));
    }
    let mut normalized = days.to_vec();
    normalized.sort_unstable();
    normalized.dedup();
    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text_rejects_blank() {
        assert!(validate_required_text("  ", "name", MAX_NAME_LEN).is_err());
        assert!(validate_required_text("Kiosco 24", "name", MAX_NAME_LEN).is_ok());
    }

    #[test]
    fn test_required_text_rejects_overlong() {
        let long = "x".repeat(MAX_NAME_LEN + 1);
        assert!(validate_required_text(&long, "name", MAX_NAME_LEN).is_err());
    }

    #[test]
    fn test_optional_text_allows_none() {
        assert!(validate_optional_text(&None, "description", MAX_DESCRIPTION_LEN).is_ok());
    }

    #[test]
    fn test_email_shape() {
        assert!(validate_email("dueno@negocio.com.ar").is_ok());
        assert!(validate_email("sin-arroba").is_err());
        assert!(validate_email("a@b").is_err());
        assert!(validate_email("@dominio.com").is_err());
    }

    #[test]
    fn test_days_of_week_dedup_and_sort() {
        assert_eq!(normalize_days_of_week(&[3, 1, 3, 1]).unwrap(), vec![1, 3]);
    }

    #[test]
    fn test_days_of_week_rejects_empty_and_out_of_range() {
        assert!(normalize_days_of_week(&[]).is_err());
        assert!(normalize_days_of_week(&[7]).is_err());
    }
}
