/// Normalizes an email address for storage and lookup.
///
/// Surrounding whitespace is removed and the domain part is lowercased. The local part
/// is left untouched since mail servers are allowed to treat it case sensitively.
pub fn normalize_email(email: &str) -> String {
    let email = email.trim();

    match email.rsplit_once('@') {
        Some((local, domain)) => format!("{}@{}", local, domain.to_lowercase()),
        None => email.to_string(),
    }
}

/// Minimal structural check: a non-empty local part and a dotted domain without whitespace.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.rsplit_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && domain.contains('.')
        && !email.chars().any(char::is_whitespace)
}
