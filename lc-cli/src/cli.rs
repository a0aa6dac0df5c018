//! CLI argument parsing using clap

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Keep a README's LeetCode solved count up to date
#[derive(Parser, Debug)]
#[command(name = "lc-solved", about = "Update the LeetCode solved count in a README", version)]
pub struct Args {
    /// LeetCode username to query
    #[arg(long, env = "LC_USERNAME")]
    pub username: String,

    /// LEETCODE_SESSION cookie, only needed when anonymous queries are rejected
    #[arg(long, env = "LC_SESSION", hide_env_values = true)]
    pub session: Option<String>,

    /// csrftoken cookie, also sent as the x-csrftoken header
    #[arg(long, env = "CSRF_TOKEN", hide_env_values = true)]
    pub csrf_token: Option<String>,

    /// Document containing the LC_SOLVED_START/LC_SOLVED_END markers
    #[arg(long, env = "LC_README", default_value = "README.md")]
    pub readme: PathBuf,

    /// Base URL of the LeetCode site
    #[arg(long, env = "LC_ENDPOINT", default_value = "https://leetcode.com")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,

    /// Fetch and compare, but never write the document
    #[arg(long)]
    pub dry_run: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
