use crate::validation::is_valid_password;

/// Plaintext password as received from a caller. Never stored.
#[derive(PartialEq, Debug, Clone)]
pub struct Password(String);

impl Password {
    /// Accepts any non-empty password. Used for sign-in.
    pub fn parse(password: String) -> Result<Password, String> {
        if password.is_empty() {
            return Err("Password is required".to_owned());
        }
        Ok(Password(password))
    }

    /// Applies the registration policy on top of `parse`.
    pub fn parse_new(password: String) -> Result<Password, String> {
        match is_valid_password(&password) {
            true => Ok(Password(password)),
            false => Err("Password is not valid, must be at least 8 characters long".to_owned()),
        }
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
