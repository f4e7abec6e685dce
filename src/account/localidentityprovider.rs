use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::{debug, info};
use uuid::Uuid;

use crate::account::accounterror::AccountError;
use crate::account::credentialmanager::CredentialManager;
use crate::account::identityprovider::{IdentityProvider, SessionToken};

pub const DEFAULT_TOKEN_LIFETIME_SECS: i64 = 3600;

type HmacSha256 = Hmac<Sha256>;

struct StoredUser {
    salt: String,
    password_digest: Vec<u8>
}

/// In-process identity provider.
///
/// Passwords are kept as HMAC-SHA256 digests keyed by a per-user salt. Id
/// tokens have the form `hex(email).expires_at.signature`, where the signature
/// is an HMAC-SHA256 keyed by the credentials' `api_key`. Both are checked in
/// constant time.
pub struct LocalIdentityProvider {
    users: RwLock<HashMap<String, StoredUser>>,
    signing_key: String,
    token_lifetime_secs: i64
}

fn keyed_mac(key: &str, message: &str) -> Option<HmacSha256> {
    // HMAC accepts keys of any length, so this only fails on a broken backend.
    let mut mac = HmacSha256::new_from_slice(key.as_bytes()).ok()?;
    mac.update(message.as_bytes());
    Some(mac)
}

impl LocalIdentityProvider {
    pub fn new(credentials: &CredentialManager) -> LocalIdentityProvider {
        let signing_key = if credentials.api_key().is_empty() {
            info!("no api_key in credentials; signing tokens with an ephemeral key");
            Uuid::new_v4().to_string()
        } else {
            credentials.api_key().to_owned()
        };
        LocalIdentityProvider::with_signing_key(signing_key, DEFAULT_TOKEN_LIFETIME_SECS)
    }

    pub fn with_signing_key(
        signing_key: String,
        token_lifetime_secs: i64,
    ) -> LocalIdentityProvider {
        LocalIdentityProvider {
            users: RwLock::new(HashMap::new()),
            signing_key,
            token_lifetime_secs
        }
    }

    fn issue_id_token(&self, email: &str, now: i64) -> Result<String, AccountError> {
        let email_hex = hex::encode(email);
        let expires_at = now + self.token_lifetime_secs;
        let payload = format!("{email_hex}.{expires_at}");
        let mac = keyed_mac(&self.signing_key, &payload).ok_or(AccountError::InvalidToken)?;
        Ok(format!("{payload}.{}", hex::encode(mac.finalize().into_bytes())))
    }

    fn verify_token_at(&self, id_token: &str, now: i64) -> Result<String, AccountError> {
        let mut parts = id_token.split('.');
        let (Some(email_hex), Some(expires_at), Some(signature), None) =
            (parts.next(), parts.next(), parts.next(), parts.next()) else {
            return Err(AccountError::InvalidToken);
        };

        let signature = hex::decode(signature).map_err(|_| AccountError::InvalidToken)?;
        keyed_mac(&self.signing_key, &format!("{email_hex}.{expires_at}"))
            .ok_or(AccountError::InvalidToken)?
            .verify_slice(&signature)
            .map_err(|_| AccountError::InvalidToken)?;

        let expires_at: i64 = expires_at.parse().map_err(|_| AccountError::InvalidToken)?;
        if expires_at <= now {
            return Err(AccountError::InvalidToken);
        }

        let email_bytes = hex::decode(email_hex).map_err(|_| AccountError::InvalidToken)?;
        String::from_utf8(email_bytes).map_err(|_| AccountError::InvalidToken)
    }
}

impl IdentityProvider for LocalIdentityProvider {
    fn create_user(&self, email: &str, password: &str) -> Result<(), AccountError> {
        let mut users = self.users.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        if users.contains_key(email) {
            return Err(AccountError::UserAlreadyExists(email.to_owned()));
        }
        let salt = Uuid::new_v4().simple().to_string();
        let password_digest = keyed_mac(&salt, password)
            .ok_or(AccountError::AuthenticationFailed)?
            .finalize()
            .into_bytes()
            .to_vec();
        users.insert(email.to_owned(), StoredUser { salt, password_digest });
        debug!(email, "created user");
        Ok(())
    }

    fn login(&self, email: &str, password: &str) -> Result<SessionToken, AccountError> {
        let users = self.users.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        let user = users.get(email).ok_or(AccountError::AuthenticationFailed)?;
        keyed_mac(&user.salt, password)
            .ok_or(AccountError::AuthenticationFailed)?
            .verify_slice(&user.password_digest)
            .map_err(|_| AccountError::AuthenticationFailed)?;

        Ok(SessionToken {
            email: email.to_owned(),
            expires_in: self.token_lifetime_secs,
            id_token: self.issue_id_token(email, Utc::now().timestamp())?,
            access_token: Uuid::new_v4().simple().to_string()
        })
    }

    fn verify_token(&self, id_token: &str) -> Result<String, AccountError> {
        self.verify_token_at(id_token, Utc::now().timestamp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> LocalIdentityProvider {
        LocalIdentityProvider::with_signing_key("test_api_key".to_owned(), 60)
    }

    #[test]
    fn login_round_trip() {
        let provider = provider();
        provider.create_user("jo@example.com", "2cH88^qmmjSj").unwrap();

        let session = provider.login("jo@example.com", "2cH88^qmmjSj").unwrap();
        assert_eq!(session.email, "jo@example.com");
        assert_eq!(session.expires_in, 60);
        assert_eq!(provider.verify_token(&session.id_token).unwrap(), "jo@example.com");
    }

    #[test]
    fn wrong_password_and_unknown_user_fail_alike() {
        let provider = provider();
        provider.create_user("jo@example.com", "2cH88^qmmjSj").unwrap();
        assert!(matches!(provider.login("jo@example.com", "nope"), Err(AccountError::AuthenticationFailed)));
        assert!(matches!(provider.login("al@example.com", "2cH88^qmmjSj"), Err(AccountError::AuthenticationFailed)));
    }

    #[test]
    fn duplicate_users_are_rejected() {
        let provider = provider();
        provider.create_user("jo@example.com", "2cH88^qmmjSj").unwrap();
        assert!(matches!(
            provider.create_user("jo@example.com", "7S$u37M8M^kF"),
            Err(AccountError::UserAlreadyExists(_))
        ));
    }

    #[test]
    fn tampered_and_expired_tokens_are_rejected() {
        let provider = provider();
        let token = provider.issue_id_token("jo@example.com", 1_000).unwrap();
        assert_eq!(provider.verify_token_at(&token, 1_059).unwrap(), "jo@example.com");
        assert!(provider.verify_token_at(&token, 1_060).is_err());

        let forged = token.replacen(&hex::encode("jo@example.com"), &hex::encode("al@example.com"), 1);
        assert!(provider.verify_token_at(&forged, 1_000).is_err());

        let other = LocalIdentityProvider::with_signing_key("other_key".to_owned(), 60);
        assert!(other.verify_token_at(&token, 1_000).is_err());
        assert!(provider.verify_token_at("not-a-token", 1_000).is_err());
    }

    #[test]
    fn signature_differing_in_last_digit_is_rejected() {
        let provider = provider();
        let token = provider.issue_id_token("jo@example.com", 1_000).unwrap();
        let (head, last) = token.split_at(token.len() - 1);
        let flipped = if last == "0" { "1" } else { "0" };
        let altered = format!("{head}{flipped}");

        assert_ne!(altered, token);
        assert!(matches!(provider.verify_token_at(&altered, 1_000), Err(AccountError::InvalidToken)));
        assert!(provider.verify_token_at(&token, 1_000).is_ok());
    }

    #[test]
    fn truncated_signature_is_rejected() {
        let provider = provider();
        let token = provider.issue_id_token("jo@example.com", 1_000).unwrap();
        assert!(provider.verify_token_at(&token[..token.len() - 2], 1_000).is_err());
    }
}
