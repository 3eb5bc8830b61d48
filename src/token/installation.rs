use chrono::{DateTime, Utc};
use octocrab::{models::InstallationId, Octocrab, Page};
use secrecy::SecretString;
use serde::Deserialize;

use super::{sign_assertion, AppIdentity};
use crate::constants::bot_login;
use crate::error::Error;
use crate::octocrab_utils::{self, PageExt, PerPage};

/// The parts of an entry of `GET /app/installations` we use.
/// (octocrab’s [`octocrab::models::Installation`] lacks the app slug.)
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct AppInstallation {
    pub(crate) id: InstallationId,
    pub(crate) app_slug: String,
    pub(crate) account: Account,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Account {
    pub(crate) login: String,
}

#[derive(Deserialize)]
struct AccessToken {
    token: String,
    expires_at: Option<DateTime<Utc>>,
}

/// A token to act as one installation of an app.
#[derive(Debug)]
pub(crate) struct InstallationToken {
    pub(crate) token: SecretString,
    pub(crate) app_slug: String,
    pub(crate) expires_at: Option<DateTime<Utc>>,
}

impl InstallationToken {
    /// Login of the bot user this installation acts as.
    pub(crate) fn bot_login(&self) -> String {
        bot_login(&self.app_slug)
    }
}

/// Authenticate as the app, then exchange that for a token of its installation on `org`.
pub(crate) async fn issue_installation_token(
    api_url: &str,
    identity: &AppIdentity,
    org: &str,
) -> Result<InstallationToken, Error> {
    let app_api = octocrab_utils::client(api_url, sign_assertion(identity)?)?;

    let installation = find_installation(&app_api, org).await?;
    tracing::info!(
        "Found installation {} of app {} on {org}",
        installation.id,
        installation.app_slug,
    );

    let AccessToken { token, expires_at } = app_api
        .post(
            format!("/app/installations/{}/access_tokens", installation.id),
            None::<&()>,
        )
        .await
        .map_err(Error::api("create installation token"))?;
    Ok(InstallationToken {
        token: SecretString::new(token),
        app_slug: installation.app_slug,
        expires_at,
    })
}

/// Find the installation whose account login is exactly `org`.
async fn find_installation(app_api: &Octocrab, org: &str) -> Result<AppInstallation, Error> {
    let page: Page<AppInstallation> = app_api
        .get("/app/installations", Some(&PerPage::MAX))
        .await
        .map_err(Error::api("list installations"))?;
    page.find(app_api, |installation| installation.account.login == org)
        .await
        .map_err(Error::api("list installations"))?
        .ok_or_else(|| Error::InstallationNotFound {
            org: org.to_owned(),
        })
}
