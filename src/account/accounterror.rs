use thiserror::Error;

#[derive(Debug, Error)]
pub enum AccountError {
    #[error(
        "Password must be at least six characters long and contain lowercase, uppercase, \
         numeric and special characters."
    )]
    WeakPassword,

    #[error("'{0}' is not a valid email address.")]
    InvalidEmail(String),

    #[error("A user with email '{0}' already exists.")]
    UserAlreadyExists(String),

    #[error("Authentication error.")]
    AuthenticationFailed,

    #[error("Invalid or expired token.")]
    InvalidToken,

    #[error("credentials not found in '{path}' or environment variable '{environment_key}'")]
    CredentialsNotFound { path: String, environment_key: String },

    #[error("{0}")]
    CredentialsIO(#[from] std::io::Error),

    #[error("malformed credentials: {0}")]
    CredentialsParse(#[from] serde_json::Error)
}
