//! LeetCode GraphQL client implementation

use crate::credentials::Credentials;
use crate::error::LcError;
use crate::parser::{self, DifficultyCount};
use reqwest::header::{COOKIE, HeaderValue, REFERER};
use std::time::Duration;
use tracing::{debug, info};
use zeroize::Zeroize;

const DEFAULT_BASE_URL: &str = "https://leetcode.com";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
const CSRF_HEADER: &str = "x-csrftoken";

const USER_PROFILE_QUERY: &str = r#"
query userProfile($username: String!) {
  matchedUser(username: $username) {
    submitStatsGlobal {
      acSubmissionNum {
        difficulty
        count
      }
    }
  }
}
"#;

/// The LeetCode GraphQL client
///
/// Every call performs exactly one POST to `{base_url}/graphql`. Nothing is
/// retried; a failed or timed-out request is returned as an error.
///
/// # Example
///
/// ```no_run
/// use lc_http_client::{Credentials, LeetCodeClient};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = LeetCodeClient::new()?;
/// let credentials = Credentials::new("some_user")
///     .with_session("session_cookie")
///     .with_csrf_token("csrf_cookie");
///
/// let stats = client.fetch_submission_stats(&credentials)?;
/// for entry in &stats {
///     println!("{}: {}", entry.difficulty, entry.count);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct LeetCodeClient {
    client: reqwest::blocking::Client,
    base_url: reqwest::Url,
    endpoint: reqwest::Url,
    referer: HeaderValue,
}

impl LeetCodeClient {
    /// Create a client for `https://leetcode.com` with a 30 second timeout
    ///
    /// # Errors
    ///
    /// Returns `LcError::ClientInit` if the HTTP client cannot be initialized.
    pub fn new() -> Result<Self, LcError> {
        Self::builder().build()
    }

    /// Create a builder for configuring the client
    ///
    /// # Example
    ///
    /// ```no_run
    /// use lc_http_client::LeetCodeClient;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = LeetCodeClient::builder()
    ///     .base_url("http://localhost:1234")?
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn builder() -> LeetCodeClientBuilder {
        LeetCodeClientBuilder::new()
    }

    /// Fetch the total number of accepted submissions for a user
    ///
    /// # Errors
    ///
    /// * `LcError::Request` - Network error or timeout
    /// * `LcError::InvalidStatus` - Non-success HTTP status
    /// * `LcError::Json` - Body is not the expected JSON document
    /// * `LcError::UserNotFound` - Unknown or mistyped username
    /// * `LcError::MissingStats` - No recognised difficulty entries
    pub fn fetch_solved_count(&self, credentials: &Credentials) -> Result<u64, LcError> {
        let stats = self.fetch_submission_stats(credentials)?;
        let solved = parser::total_solved(&stats)?;
        info!(username = credentials.username(), solved, "Fetched solved count");
        Ok(solved)
    }

    /// Fetch the per-difficulty accepted submission counts for a user
    ///
    /// Tokens present in `credentials` are sent as cookies. A CSRF token is
    /// additionally sent as the `x-csrftoken` header together with a `Referer`
    /// pointing at the base URL's origin.
    pub fn fetch_submission_stats(
        &self,
        credentials: &Credentials,
    ) -> Result<Vec<DifficultyCount>, LcError> {
        let payload = serde_json::json!({
            "query": USER_PROFILE_QUERY,
            "variables": {
                "username": credentials.username(),
            }
        });

        let mut request = self.client.post(self.endpoint.clone()).json(&payload);

        if let Some(cookie_header) = Self::create_cookie_header(credentials)? {
            request = request.header(COOKIE, cookie_header);
        }

        if let Some(csrf_token) = credentials.csrf_token() {
            request = request
                .header(CSRF_HEADER, Self::sensitive_header(csrf_token)?)
                .header(REFERER, self.referer.clone());
        }

        debug!(
            endpoint = %self.endpoint,
            username = credentials.username(),
            anonymous = credentials.is_anonymous(),
            "Sending userProfile query"
        );

        let response = request.send()?;

        if !response.status().is_success() {
            return Err(LcError::InvalidStatus {
                status: response.status(),
            });
        }

        let body = response.text()?;
        parser::parse_submission_stats(&body, credentials.username())
    }

    /// Build the `Cookie` header from whichever tokens are present
    ///
    /// The header is marked sensitive and the temporary strings are zeroized.
    fn create_cookie_header(credentials: &Credentials) -> Result<Option<HeaderValue>, LcError> {
        let mut cookies = Vec::with_capacity(2);
        if let Some(session) = credentials.session() {
            cookies.push(format!("LEETCODE_SESSION={}", session));
        }
        if let Some(csrf_token) = credentials.csrf_token() {
            cookies.push(format!("csrftoken={}", csrf_token));
        }
        if cookies.is_empty() {
            return Ok(None);
        }

        let mut cookie_string = cookies.join("; ");
        cookies.zeroize();
        let header = Self::sensitive_header(&cookie_string);
        cookie_string.zeroize();

        header.map(Some)
    }

    fn sensitive_header(value: &str) -> Result<HeaderValue, LcError> {
        let mut header = HeaderValue::from_str(value).map_err(|_| LcError::InvalidHeader)?;
        header.set_sensitive(true);
        Ok(header)
    }
}

/// Builder for configuring a LeetCode client
///
/// The timeout and user agent are always applied on top of whatever
/// `reqwest` builder is supplied.
///
/// # Example
///
/// ```no_run
/// use lc_http_client::LeetCodeClient;
/// use std::time::Duration;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = LeetCodeClient::builder()
///     .base_url("http://localhost:1234")?
///     .timeout(Duration::from_secs(5))
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct LeetCodeClientBuilder {
    base_url: Option<reqwest::Url>,
    client_builder: Option<reqwest::blocking::ClientBuilder>,
    timeout: Duration,
    user_agent: String,
}

impl LeetCodeClientBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            base_url: None,
            client_builder: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Set a custom base URL; the query is posted to `{url}/graphql`
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn base_url(mut self, url: impl reqwest::IntoUrl) -> Result<Self, LcError> {
        self.base_url = Some(url.into_url()?);
        Ok(self)
    }

    /// Set the total request timeout (connect through body read)
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the `User-Agent` header
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set a custom HTTP client builder (proxies, extra root certificates, ...)
    pub fn client_builder(mut self, builder: reqwest::blocking::ClientBuilder) -> Self {
        self.client_builder = Some(builder);
        self
    }

    /// Build the client with the configured settings
    ///
    /// # Errors
    ///
    /// Returns `LcError::ClientInit` if the HTTP client cannot be initialized
    /// or the base URL cannot carry a path.
    pub fn build(self) -> Result<LeetCodeClient, LcError> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => reqwest::Url::parse(DEFAULT_BASE_URL)
                .map_err(|e| LcError::ClientInit(e.to_string()))?,
        };

        let mut endpoint = base_url.clone();
        endpoint
            .path_segments_mut()
            .map_err(|_| LcError::ClientInit("Cannot modify base URL path".to_string()))?
            .clear()
            .push("graphql");

        let referer = HeaderValue::from_str(&base_url.origin().ascii_serialization())
            .map_err(|e| LcError::ClientInit(e.to_string()))?;

        let builder = self
            .client_builder
            .unwrap_or_else(|| reqwest::blocking::Client::builder().use_rustls_tls());

        let client = builder
            .timeout(self.timeout)
            .user_agent(self.user_agent)
            .build()
            .map_err(|e| LcError::ClientInit(e.to_string()))?;

        Ok(LeetCodeClient {
            client,
            base_url,
            endpoint,
            referer,
        })
    }
}

impl Default for LeetCodeClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
