use std::sync::Arc;

use tracing::info;

use crate::account::accounterror::AccountError;
use crate::account::identityprovider::{IdentityProvider, SessionToken};
use crate::account::security::is_strong_password;

/// Account operations exposed over HTTP, in front of an identity provider.
pub struct AccountManagementService {
    identity_provider: Arc<dyn IdentityProvider>
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        None => false,
    }
}

impl AccountManagementService {
    pub fn new(identity_provider: Arc<dyn IdentityProvider>) -> AccountManagementService {
        AccountManagementService { identity_provider }
    }

    pub fn create_user(&self, email: &str, password: &str) -> Result<(), AccountError> {
        if !is_plausible_email(email) {
            return Err(AccountError::InvalidEmail(email.to_owned()));
        }
        if !is_strong_password(password) {
            return Err(AccountError::WeakPassword);
        }
        self.identity_provider.create_user(email, password)?;
        info!(email, "account created");
        Ok(())
    }

    pub fn login(&self, email: &str, password: &str) -> Result<SessionToken, AccountError> {
        self.identity_provider.login(email, password)
    }

    pub fn validate_token(&self, id_token: &str) -> Result<String, AccountError> {
        self.identity_provider.verify_token(id_token)
    }
}
