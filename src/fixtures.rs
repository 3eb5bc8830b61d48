use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};

use octocrab::models::issues::Comment;
use serde_json::{json, Value};
use tokio::io::{AsyncBufRead, AsyncRead, ReadBuf};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

/// RSA key pair generated for tests only.
pub(crate) const APP_KEY: &str = include_str!("fixtures/app_key.pem");
pub(crate) const APP_PUBLIC_KEY: &str = include_str!("fixtures/app_key.pub.pem");

pub(crate) fn user(login: &str) -> Value {
    let api = format!("https://api.github.com/users/{login}");
    json!({
        "login": login,
        "id": 1,
        "node_id": "MDQ6VXNlcjE=",
        "avatar_url": "https://github.com/images/error/octocat_happy.gif",
        "gravatar_id": "",
        "url": api,
        "html_url": format!("https://github.com/{login}"),
        "followers_url": format!("{api}/followers"),
        "following_url": format!("{api}/following{{/other_user}}"),
        "gists_url": format!("{api}/gists{{/gist_id}}"),
        "starred_url": format!("{api}/starred{{/owner}}{{/repo}}"),
        "subscriptions_url": format!("{api}/subscriptions"),
        "organizations_url": format!("{api}/orgs"),
        "repos_url": format!("{api}/repos"),
        "events_url": format!("{api}/events{{/privacy}}"),
        "received_events_url": format!("{api}/received_events"),
        "type": if login.ends_with("[bot]") { "Bot" } else { "User" },
        "site_admin": false,
    })
}

/// An issue comment on acme/widgets#5 as returned by the REST API.
pub(crate) fn comment(id: u64, login: &str, body: Option<&str>) -> Value {
    json!({
        "id": id,
        "node_id": "IC_kwDOA",
        "url": format!("https://api.github.com/repos/acme/widgets/issues/comments/{id}"),
        "html_url": format!("https://github.com/acme/widgets/pull/5#issuecomment-{id}"),
        "issue_url": "https://api.github.com/repos/acme/widgets/issues/5",
        "body": body,
        "user": user(login),
        "author_association": "NONE",
        "created_at": "2024-03-01T12:00:00Z",
        "updated_at": "2024-03-01T12:00:00Z",
    })
}

pub(crate) fn comment_model(id: u64, login: &str, body: Option<&str>) -> Comment {
    serde_json::from_value(comment(id, login, body)).unwrap()
}

/// An entry of `GET /app/installations`.
pub(crate) fn installation(id: u64, app_slug: &str, account: &str) -> Value {
    json!({
        "id": id,
        "app_id": 1234,
        "app_slug": app_slug,
        "account": user(account),
        "target_type": "Organization",
        "repository_selection": "all",
        "access_tokens_url": format!("https://api.github.com/app/installations/{id}/access_tokens"),
        "permissions": {"issues": "write", "pull_requests": "write"},
        "events": [],
    })
}

pub(crate) async fn mock_installations(server: &MockServer, installations: &[Value]) {
    Mock::given(method("GET"))
        .and(path("/app/installations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(installations))
        .expect(1)
        .mount(server)
        .await;
}

pub(crate) async fn mock_access_token(server: &MockServer, installation_id: u64, token: &str) {
    Mock::given(method("POST"))
        .and(path(format!(
            "/app/installations/{installation_id}/access_tokens"
        )))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "token": token,
            "expires_at": "2024-03-01T13:00:00Z",
            "permissions": {"issues": "write", "pull_requests": "write"},
            "repository_selection": "all",
        })))
        .expect(1)
        .mount(server)
        .await;
}

/// Input whose every read fails.
pub(crate) struct UnreadableInput;

fn unreadable() -> io::Error {
    io::Error::other("input is not readable")
}

impl AsyncRead for UnreadableInput {
    fn poll_read(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        _buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        Poll::Ready(Err(unreadable()))
    }
}

impl AsyncBufRead for UnreadableInput {
    fn poll_fill_buf(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<&[u8]>> {
        Poll::Ready(Err(unreadable()))
    }

    fn consume(self: Pin<&mut Self>, _amt: usize) {}
}
