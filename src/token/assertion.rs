use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use super::AppIdentity;
use crate::constants::{ASSERTION_BACKDATE_SECS, ASSERTION_LIFETIME_SECS};
use crate::error::Error;

/// Claims of the JWT an app authenticates with.
///
/// See <https://docs.github.com/en/apps/creating-github-apps/authenticating-with-a-github-app/generating-a-json-web-token-jwt-for-a-github-app>
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Claims {
    pub(crate) iat: i64,
    pub(crate) iss: u64,
    pub(crate) exp: i64,
}

impl Claims {
    pub(crate) fn new(app_id: u64, now: DateTime<Utc>) -> Self {
        let now = now.timestamp();
        Claims {
            iat: now - ASSERTION_BACKDATE_SECS,
            iss: app_id,
            exp: now + ASSERTION_LIFETIME_SECS,
        }
    }
}

/// Sign a short-lived RS256 assertion for `identity`, valid from a minute ago to ten minutes from now.
pub(crate) fn sign_assertion(identity: &AppIdentity) -> Result<SecretString, Error> {
    let key = EncodingKey::from_rsa_pem(identity.private_key.expose_secret())
        .map_err(Error::KeyParse)?;
    let claims = Claims::new(identity.app_id, Utc::now());
    let jwt = jsonwebtoken::encode(&Header::new(Algorithm::RS256), &claims, &key)
        .map_err(Error::Signing)?;
    Ok(SecretString::new(jwt))
}
