use std::fmt;

use secrecy::SecretVec;

mod assertion;
mod installation;

pub(crate) use assertion::sign_assertion;
pub(crate) use installation::issue_installation_token;

/// Who we authenticate as: a GitHub App and its private key.
pub(crate) struct AppIdentity {
    pub(crate) app_id: u64,
    /// PEM-encoded RSA private key
    pub(crate) private_key: SecretVec<u8>,
}

impl fmt::Debug for AppIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppIdentity")
            .field("app_id", &self.app_id)
            .finish_non_exhaustive()
    }
}
