use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::debug;

use crate::account::accounterror::AccountError;

/// Identity-provider credentials, read from a JSON file when it exists and
/// otherwise from an environment variable holding the same JSON document.
pub struct CredentialManager {
    raw_credentials: Map<String, Value>
}

impl CredentialManager {
    pub fn new(
        credentials_path: impl AsRef<Path>,
        environment_key: &str,
    ) -> Result<CredentialManager, AccountError> {
        let credentials_path = credentials_path.as_ref();

        let raw_credentials: Map<String, Value> = if credentials_path.exists() {
            debug!(path = %credentials_path.display(), "reading credentials from file");
            let reader = BufReader::new(File::open(credentials_path)?);
            serde_json::from_reader(reader)?
        } else {
            let json_str = std::env::var(environment_key).map_err(|_| {
                AccountError::CredentialsNotFound {
                    path: credentials_path.display().to_string(),
                    environment_key: environment_key.to_owned(),
                }
            })?;
            debug!(environment_key, "reading credentials from environment");
            serde_json::from_str(&json_str)?
        };

        Ok(CredentialManager { raw_credentials })
    }

    pub fn from_raw(raw_credentials: Map<String, Value>) -> CredentialManager {
        CredentialManager { raw_credentials }
    }

    /// Empty when the credentials carry no `api_key`.
    pub fn api_key(&self) -> &str {
        self.raw_credentials
            .get("api_key")
            .and_then(Value::as_str)
            .unwrap_or("")
    }
}
