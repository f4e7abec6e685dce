use crate::account::accounterror::AccountError;

/// A logged-in session as handed back to clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken {
    pub email: String,
    pub expires_in: i64,
    pub id_token: String,
    pub access_token: String
}

/// The service that owns user accounts and issues session tokens.
pub trait IdentityProvider: Send + Sync {
    fn create_user(&self, email: &str, password: &str) -> Result<(), AccountError>;

    fn login(&self, email: &str, password: &str) -> Result<SessionToken, AccountError>;

    /// The email an `id_token` was issued to, if the token is valid.
    fn verify_token(&self, id_token: &str) -> Result<String, AccountError>;
}
