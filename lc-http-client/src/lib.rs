//! LeetCode HTTP Client Library
//!
//! This library fetches the number of problems a LeetCode user has solved by
//! issuing a single GraphQL query against the public `leetcode.com/graphql`
//! endpoint.
//!
//! # Features
//!
//! - Anonymous queries, or authenticated ones using the `LEETCODE_SESSION`
//!   and `csrftoken` cookies when the endpoint rejects anonymous access
//! - Secret tokens are zeroized on drop and sent as sensitive headers
//! - Secure TLS using rustls (no OpenSSL dependencies)
//! - Blocking synchronous API with a bounded timeout
//! - Well-typed errors using thiserror
//!
//! # Example
//!
//! ```no_run
//! use lc_http_client::{Credentials, LeetCodeClient};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = LeetCodeClient::new()?;
//! let credentials = Credentials::new("some_user");
//!
//! let solved = client.fetch_solved_count(&credentials)?;
//! println!("Solved {} problems", solved);
//! # Ok(())
//! # }
//! ```

mod client;
mod credentials;
mod error;
mod parser;

pub use client::{LeetCodeClient, LeetCodeClientBuilder};
pub use credentials::Credentials;
pub use error::LcError;
pub use parser::{DifficultyCount, total_solved};
