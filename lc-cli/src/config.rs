//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::CliError;
use lc_http_client::Credentials;
use std::path::PathBuf;
use std::time::Duration;
use zeroize::Zeroizing;

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// Username and optional tokens (tokens zeroized on drop)
    pub credentials: Credentials,
    /// Document to update
    pub readme: PathBuf,
    /// Base URL of the LeetCode site
    pub endpoint: String,
    /// Request timeout
    pub timeout: Duration,
    /// Compare only, never write
    pub dry_run: bool,
    /// Number of -v flags
    pub verbosity: u8,
}

impl Config {
    /// Build config from CLI args
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let username = args.username.trim();
        if username.is_empty() {
            return Err(CliError::Config(
                "LC_USERNAME must not be empty".to_string(),
            ));
        }

        // Raw flag values are wiped once Credentials holds its own copy
        let session = args.session.map(Zeroizing::new);
        let csrf_token = args.csrf_token.map(Zeroizing::new);

        let mut credentials = Credentials::new(username);
        if let Some(session) = &session {
            credentials = credentials.with_session(session.as_str());
        }
        if let Some(csrf_token) = &csrf_token {
            credentials = credentials.with_csrf_token(csrf_token.as_str());
        }

        Ok(Config {
            credentials,
            readme: args.readme,
            endpoint: args.endpoint,
            timeout: Duration::from_secs(args.timeout),
            dry_run: args.dry_run,
            verbosity: args.verbose,
        })
    }
}
