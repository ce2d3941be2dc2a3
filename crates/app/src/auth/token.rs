//! API tokens.
//!
//! Tokens look like `sf_{token uuid}_{64 hex chars}`. Only the SHA-256 of
//! the whole token is persisted.

use std::fmt;

use rand::{RngCore, rngs::OsRng};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Prefix identifying storefront API tokens.
pub const API_TOKEN_PREFIX: &str = "sf";

const SECRET_BYTES: usize = 32;

/// A raw bearer token.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// Mint a token for `token_uuid` with a fresh random secret.
    #[must_use]
    pub fn generate(token_uuid: Uuid) -> Self {
        let mut secret = [0_u8; SECRET_BYTES];

        OsRng.fill_bytes(&mut secret);

        let secret_hex: String = secret.iter().map(|byte| format!("{byte:02x}")).collect();

        Self(format!(
            "{API_TOKEN_PREFIX}_{}_{secret_hex}",
            token_uuid.simple()
        ))
    }

    /// Accept `raw` only if it has the shape of a token we could have issued.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let (token_uuid, secret_hex) = raw
            .strip_prefix(API_TOKEN_PREFIX)?
            .strip_prefix('_')?
            .split_once('_')?;

        let well_formed = Uuid::try_parse(token_uuid).is_ok()
            && secret_hex.len() == SECRET_BYTES * 2
            && secret_hex.bytes().all(|b| b.is_ascii_hexdigit());

        well_formed.then(|| Self(raw.to_owned()))
    }

    /// Lowercase SHA-256 hex digest, the form stored in `api_tokens`.
    #[must_use]
    pub fn hash(&self) -> String {
        format!("{:x}", Sha256::digest(self.0.as_bytes()))
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(**redacted**)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_tokens_parse() {
        let token = ApiToken::generate(Uuid::nil());
        let raw = token.clone().into_string();

        assert!(
            raw.starts_with("sf_00000000000000000000000000000000_"),
            "unexpected token shape: {raw}"
        );
        assert_eq!(ApiToken::parse(&raw), Some(token));
    }

    #[test]
    fn generated_tokens_are_unique() {
        assert_ne!(
            ApiToken::generate(Uuid::nil()),
            ApiToken::generate(Uuid::nil()),
            "secrets should differ"
        );
    }

    #[test]
    fn parse_rejects_malformed_tokens() {
        let secret = "ab".repeat(SECRET_BYTES);

        for raw in [
            "garbage".to_owned(),
            format!("xx_00000000000000000000000000000000_{secret}"),
            format!("sf_not-a-uuid_{secret}"),
            "sf_00000000000000000000000000000000_abcd".to_owned(),
            format!("sf_00000000000000000000000000000000_{}", "zz".repeat(SECRET_BYTES)),
        ] {
            assert!(ApiToken::parse(&raw).is_none(), "{raw} should be rejected");
        }
    }

    #[test]
    fn hash_is_lowercase_sha256_hex() {
        assert_eq!(
            ApiToken("abc".to_owned()).hash(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn debug_is_redacted() {
        assert_eq!(
            format!("{:?}", ApiToken::generate(Uuid::nil())),
            "ApiToken(**redacted**)"
        );
    }
}
