use std::path::PathBuf;

/// Everything that can abort a run. None of these are recovered from.
#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
    #[error("no private key provided, please use --key-from-file or --key-from-env-var")]
    MissingKeySource,
    #[error("failed to read private key from {}", path.display())]
    KeyFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("environment variable {name} does not hold a private key")]
    KeyEnvVar {
        name: String,
        source: std::env::VarError,
    },
    #[error("environment variable {name} does not hold a base64-encoded private key")]
    KeyBase64 {
        name: String,
        source: base64::DecodeError,
    },
    #[error("failed to parse RSA private key")]
    KeyParse(#[source] jsonwebtoken::errors::Error),
    #[error("failed to sign app assertion")]
    Signing(#[source] jsonwebtoken::errors::Error),
    #[error("failed to set up GitHub client")]
    Client(#[source] octocrab::Error),
    #[error("GitHub API call failed: {action}")]
    Api {
        action: &'static str,
        source: octocrab::Error,
    },
    #[error("app is not installed for account {org}")]
    InstallationNotFound { org: String },
    #[error("failed to read comment body from stdin")]
    Stdin(#[source] std::io::Error),
}

impl Error {
    pub(crate) fn api(action: &'static str) -> impl FnOnce(octocrab::Error) -> Self {
        move |source| Error::Api { action, source }
    }
}
