pub const MIN_PASSWORD_LEN: usize = 8;

/// True if pw is at least `MIN_PASSWORD_LEN` characters and not all whitespace.
pub fn is_valid_password(pw: &str) -> bool {
    pw.chars().count() >= MIN_PASSWORD_LEN && !pw.trim().is_empty()
}
