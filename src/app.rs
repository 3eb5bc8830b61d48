use octocrab::models::issues::Comment;
use tokio::io::AsyncBufRead;
use tracing::Instrument;

use crate::comment::{place_comment, CommentTarget};
use crate::config::Config;
use crate::error::Error;
use crate::input::read_body;
use crate::octocrab_utils;
use crate::token::issue_installation_token;

/// Authenticate as the app’s installation on the configured org and, if a PR number is
/// configured, place the comment read from `input` on it.
///
/// Returns the created or edited comment, or `None` if no PR number is configured.
pub(crate) async fn run<R>(config: &Config, input: R) -> Result<Option<Comment>, Error>
where
    R: AsyncBufRead + Unpin,
{
    let token = issue_installation_token(&config.api_url, &config.identity, &config.org)
        .instrument(tracing::info_span!("issue_installation_token"))
        .await?;
    if let Some(expires_at) = token.expires_at {
        tracing::debug!("Installation token expires at {expires_at}");
    }

    let Some(pr_number) = config.pr_number else {
        tracing::info!("No PR number given, not commenting");
        return Ok(None);
    };
    tracing::info!("Commenting on PR {pr_number}");

    tracing::info!("Reading comment text from stdin");
    let target = CommentTarget {
        org: config.org.clone(),
        repository: config.repository.clone(),
        pr_number,
        prefix: config.prefix.clone(),
        body: read_body(input).await?,
    };

    let bot_login = token.bot_login();
    let installation_api = octocrab_utils::client(&config.api_url, token.token)?;
    let placement = place_comment(&installation_api, &target, &bot_login)
        .instrument(tracing::info_span!("place_comment"))
        .await?;
    Ok(Some(placement.into_comment()))
}
