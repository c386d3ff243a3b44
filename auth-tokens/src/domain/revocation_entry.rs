use std::time::Duration;

use uuid::Uuid;

/// Denylist entry for one access token, keyed by `<user id>_<exp>`.
#[derive(Debug, Clone, PartialEq)]
pub struct RevocationEntry {
    pub key: String,
    pub token: String,
    pub ttl: Duration,
}

impl RevocationEntry {
    pub fn key(user_id: Uuid, expires_at: i64) -> String {
        format!("{}_{}", user_id, expires_at)
    }

    /// Entry for `token`, or `None` once the token is already past its `exp`.
    /// `now` is whole seconds, so the entry may outlive `exp` by less than a second.
    /// Verify rejects the token at `exp` regardless.
    pub fn for_token(user_id: Uuid, expires_at: i64, token: &str, now: i64) -> Option<Self> {
        let remaining = expires_at.checked_sub(now)?;
        if remaining <= 0 {
            return None;
        }
        Some(Self {
            key: Self::key(user_id, expires_at),
            token: token.to_owned(),
            ttl: Duration::from_secs(remaining as u64),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_user_and_expiry() {
        let id = Uuid::nil();
        assert_eq!(
            RevocationEntry::key(id, 1_700_000_900),
            "00000000-0000-0000-0000-000000000000_1700000900"
        );
    }

    #[test]
    fn ttl_is_exactly_the_remaining_lifetime() {
        let entry = RevocationEntry::for_token(Uuid::nil(), 1_000, "tok", 400).unwrap();
        assert_eq!(entry.ttl, Duration::from_secs(600));
        assert_eq!(entry.token, "tok");
    }

    #[test]
    fn no_entry_for_expired_tokens() {
        assert!(RevocationEntry::for_token(Uuid::nil(), 1_000, "tok", 1_000).is_none());
        assert!(RevocationEntry::for_token(Uuid::nil(), 1_000, "tok", 5_000).is_none());
    }
}
