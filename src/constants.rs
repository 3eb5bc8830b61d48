pub(crate) const DEFAULT_API_URL: &str = "https://api.github.com";
/// Appended to an app’s slug to get the login its comments are authored by.
pub(crate) const BOT_LOGIN_SUFFIX: &str = "[bot]";
pub(crate) const MAX_PER_PAGE: u8 = 100;

/// Issued-at is backdated to tolerate clock drift between us and GitHub.
pub(crate) const ASSERTION_BACKDATE_SECS: i64 = 60;
/// GitHub rejects app assertions that live longer than 10 minutes.
pub(crate) const ASSERTION_LIFETIME_SECS: i64 = 10 * 60;

pub(crate) fn bot_login(app_slug: &str) -> String {
    format!("{app_slug}{BOT_LOGIN_SUFFIX}")
}
