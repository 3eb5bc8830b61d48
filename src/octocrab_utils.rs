use std::pin::pin;

use futures::{future, TryStreamExt};
use octocrab::{service::middleware::retry::RetryConfig, Octocrab, Page};
use secrecy::SecretString;
use serde::{de::DeserializeOwned, Serialize};

use crate::constants::MAX_PER_PAGE;
use crate::error::Error;

/// Query parameters for listing endpoints.
#[derive(Serialize)]
pub(crate) struct PerPage {
    per_page: u8,
}

impl PerPage {
    pub(crate) const MAX: Self = Self {
        per_page: MAX_PER_PAGE,
    };
}

/// Build a client talking to `base_uri` that authenticates every request with `Bearer <token>`.
///
/// The token may be an app assertion or an installation token; GitHub tells them apart.
/// Failed requests are not retried.
pub(crate) fn client(base_uri: &str, token: SecretString) -> Result<Octocrab, Error> {
    let mut builder = Octocrab::builder();
    builder.add_retry_config(RetryConfig::None);
    builder
        .personal_token(token)
        .base_uri(base_uri)
        .and_then(|builder| builder.build())
        .map_err(Error::Client)
}

pub(crate) trait PageExt<I>
where
    I: DeserializeOwned + 'static,
{
    /// Find the first item matching `pred`, fetching further pages only while nothing matched.
    async fn find<F: Fn(&I) -> bool>(
        self,
        github_api: &Octocrab,
        pred: F,
    ) -> octocrab::Result<Option<I>>;
}

impl<I> PageExt<I> for Page<I>
where
    I: DeserializeOwned + 'static,
{
    async fn find<F: Fn(&I) -> bool>(
        self,
        github_api: &Octocrab,
        pred: F,
    ) -> octocrab::Result<Option<I>> {
        let mut items = pin!(self
            .into_stream(github_api)
            .try_filter(|item| future::ready(pred(item))));
        items.try_next().await
    }
}
