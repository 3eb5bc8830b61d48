use octocrab::{models::issues::Comment, Octocrab};

use crate::constants::MAX_PER_PAGE;
use crate::error::Error;
use crate::octocrab_utils::PageExt;

/// A comment to be placed on a PR.
#[derive(Debug, Clone)]
pub(crate) struct CommentTarget {
    pub(crate) org: String,
    pub(crate) repository: String,
    pub(crate) pr_number: u64,
    /// Start of the body identifying a previously placed comment
    pub(crate) prefix: String,
    pub(crate) body: String,
}

/// Selects the comment to edit: authored by the bot and starting with the prefix.
/// An empty prefix matches every comment by the bot.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BotCommentMatcher<'a> {
    pub(crate) bot_login: &'a str,
    pub(crate) prefix: &'a str,
}

impl BotCommentMatcher<'_> {
    pub(crate) fn matches(&self, comment: &Comment) -> bool {
        comment.user.login == self.bot_login
            && comment
                .body
                .as_deref()
                .unwrap_or_default()
                .starts_with(self.prefix)
    }
}

#[derive(Debug)]
pub(crate) enum Placement {
    Created(Comment),
    Updated(Comment),
}

impl Placement {
    pub(crate) fn into_comment(self) -> Comment {
        match self {
            Placement::Created(comment) | Placement::Updated(comment) => comment,
        }
    }
}

/// Edit the first comment on the PR matching the bot and prefix, or create a new one.
pub(crate) async fn place_comment(
    github_api: &Octocrab,
    target: &CommentTarget,
    bot_login: &str,
) -> Result<Placement, Error> {
    let matcher = BotCommentMatcher {
        bot_login,
        prefix: &target.prefix,
    };
    let issue_api = github_api.issues(&target.org, &target.repository);
    let existing = issue_api
        .list_comments(target.pr_number)
        .per_page(MAX_PER_PAGE)
        .send()
        .await
        .map_err(Error::api("list comments"))?
        .find(github_api, |comment| matcher.matches(comment))
        .await
        .map_err(Error::api("list comments"))?;

    if let Some(existing) = existing {
        tracing::info!("Detected existing comment id:{}", existing.id);
        let comment = issue_api
            .update_comment(existing.id, &target.body)
            .await
            .map_err(Error::api("update comment"))?;
        tracing::info!("Updated comment at {}", comment.html_url);
        Ok(Placement::Updated(comment))
    } else {
        let comment = issue_api
            .create_comment(target.pr_number, &target.body)
            .await
            .map_err(Error::api("create comment"))?;
        tracing::info!("Created comment at {}", comment.html_url);
        Ok(Placement::Created(comment))
    }
}
