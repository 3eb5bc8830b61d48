use std::path::PathBuf;

use clap::Parser;

use crate::constants::DEFAULT_API_URL;

/// Post or update a pull request comment as a GitHub App.
///
/// The comment body is read from stdin.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub(crate) struct Cli {
    /// Path to the private key file
    #[arg(long, env = "GITHUB_APP_KEY_FILE")]
    pub(crate) key_from_file: Option<PathBuf>,
    /// Name of the environment variable containing the base64-encoded private key
    #[arg(long)]
    pub(crate) key_from_env_var: Option<String>,
    /// PR number to post the comment to (0: only authenticate)
    #[arg(long, default_value_t = 0)]
    pub(crate) pr_comment: u64,
    /// Prefix to detect an existing comment.
    /// If empty, the first comment by the app is edited.
    /// Otherwise the first comment by the app starting with the prefix is edited.
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub(crate) prefix: String,
    /// ID of the GitHub App
    #[arg(long, env = "GITHUB_APP_ID", value_parser = clap::value_parser!(u64).range(1..))]
    pub(crate) application_id: u64,
    /// Name of the repository
    #[arg(long)]
    pub(crate) repository: String,
    /// Name of the organization (or user) the app is installed for
    #[arg(long)]
    pub(crate) org: String,
    /// Base URL of the GitHub REST API
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub(crate) api_url: String,
}
