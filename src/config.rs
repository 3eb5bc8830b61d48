use std::path::PathBuf;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use secrecy::SecretVec;

use crate::cli::Cli;
use crate::error::Error;
use crate::token::AppIdentity;

/// Where the app’s private key is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum KeySource {
    /// PEM file on disk
    File(PathBuf),
    /// Name of an environment variable holding the base64-encoded PEM
    EnvVar(String),
}

impl KeySource {
    /// Pick the key source. A key file wins over an environment variable if both are given.
    pub(crate) fn select(file: Option<PathBuf>, env_var: Option<String>) -> Result<Self, Error> {
        match (file, env_var) {
            (Some(path), _) => Ok(KeySource::File(path)),
            (None, Some(name)) => Ok(KeySource::EnvVar(name)),
            (None, None) => Err(Error::MissingKeySource),
        }
    }

    pub(crate) fn load(&self) -> Result<SecretVec<u8>, Error> {
        let pem = match self {
            KeySource::File(path) => std::fs::read(path).map_err(|source| Error::KeyFile {
                path: path.clone(),
                source,
            })?,
            KeySource::EnvVar(name) => {
                let encoded = std::env::var(name).map_err(|source| Error::KeyEnvVar {
                    name: name.clone(),
                    source,
                })?;
                BASE64
                    .decode(encoded.trim())
                    .map_err(|source| Error::KeyBase64 {
                        name: name.clone(),
                        source,
                    })?
            }
        };
        Ok(SecretVec::new(pem))
    }
}

/// Everything a run needs, validated once at startup.
#[derive(Debug)]
pub(crate) struct Config {
    pub(crate) identity: AppIdentity,
    pub(crate) org: String,
    pub(crate) repository: String,
    /// `None` if no comment should be placed
    pub(crate) pr_number: Option<u64>,
    pub(crate) prefix: String,
    pub(crate) api_url: String,
}

impl TryFrom<Cli> for Config {
    type Error = Error;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let key_source = KeySource::select(cli.key_from_file, cli.key_from_env_var)?;
        tracing::debug!("Reading private key from {key_source:?}");
        Ok(Config {
            identity: AppIdentity {
                app_id: cli.application_id,
                private_key: key_source.load()?,
            },
            org: cli.org,
            repository: cli.repository,
            pr_number: (cli.pr_comment != 0).then_some(cli.pr_comment),
            prefix: cli.prefix,
            api_url: cli.api_url,
        })
    }
}
