use jsonwebtoken::{DecodingKey, EncodingKey};

use crate::utils::Config;

/// Which secret a token is signed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Access,
    Refresh,
}

#[derive(Clone)]
struct KeyPair {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl KeyPair {
    fn from_secret(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }
}

/// The two HMAC secrets, fixed for the lifetime of the process.
#[derive(Clone)]
pub struct JwtKeyStore {
    access: KeyPair,
    refresh: KeyPair,
}

impl JwtKeyStore {
    pub fn new(access_secret: &[u8], refresh_secret: &[u8]) -> Self {
        Self {
            access: KeyPair::from_secret(access_secret),
            refresh: KeyPair::from_secret(refresh_secret),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.access_token_key().as_bytes(),
            config.refresh_token_key().as_bytes(),
        )
    }

    fn pair(&self, kind: TokenKind) -> &KeyPair {
        match kind {
            TokenKind::Access => &self.access,
            TokenKind::Refresh => &self.refresh,
        }
    }

    pub fn encoding_key(&self, kind: TokenKind) -> &EncodingKey {
        &self.pair(kind).encoding
    }

    pub fn decoding_key(&self, kind: TokenKind) -> &DecodingKey {
        &self.pair(kind).decoding
    }
}
