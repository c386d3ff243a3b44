use std::fmt;

use crate::validation::is_valid_email;

#[derive(PartialEq, Debug, Clone, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Trims and lowercases before validating, so lookups are case-insensitive.
    pub fn parse(email: impl AsRef<str>) -> Result<Email, String> {
        let normalized = email.as_ref().trim().to_lowercase();
        match is_valid_email(&normalized) {
            true => Ok(Email(normalized)),
            false => Err(format!("Email {} is not valid", email.as_ref())),
        }
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
