//! GraphQL response parsing utilities

use crate::error::LcError;
use serde::Deserialize;
use tracing::debug;

/// Label of the aggregate entry in `acSubmissionNum`
const ALL_DIFFICULTIES: &str = "All";

/// Labels summed when the aggregate entry is missing
const DIFFICULTIES: [&str; 3] = ["Easy", "Medium", "Hard"];

/// Accepted submission count for one difficulty level
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DifficultyCount {
    /// Difficulty label ("All", "Easy", "Medium" or "Hard")
    pub difficulty: String,
    /// Number of accepted submissions at this difficulty
    pub count: u64,
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    data: Option<ResponseData>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponseData {
    matched_user: Option<MatchedUser>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MatchedUser {
    submit_stats_global: SubmitStats,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubmitStats {
    ac_submission_num: Vec<DifficultyCount>,
}

/// Extract the per-difficulty accepted counts from a `userProfile` response body
pub(crate) fn parse_submission_stats(
    body: &str,
    username: &str,
) -> Result<Vec<DifficultyCount>, LcError> {
    let response: GraphQlResponse = serde_json::from_str(body)?;

    for error in &response.errors {
        debug!(message = %error.message, "GraphQL error in response");
    }

    response
        .data
        .and_then(|data| data.matched_user)
        .map(|user| user.submit_stats_global.ac_submission_num)
        .ok_or_else(|| LcError::UserNotFound {
            username: username.to_string(),
        })
}

/// Total accepted submissions across all difficulties
///
/// Uses the "All" entry when present, otherwise sums the "Easy", "Medium" and
/// "Hard" entries that are present.
///
/// # Errors
///
/// Returns `LcError::MissingStats` if none of those labels appear, and
/// `LcError::CountOverflow` if their sum does not fit in a `u64`.
///
/// # Example
///
/// ```
/// use lc_http_client::{DifficultyCount, total_solved};
///
/// let entries = vec![
///     DifficultyCount { difficulty: "Easy".to_string(), count: 10 },
///     DifficultyCount { difficulty: "Hard".to_string(), count: 2 },
/// ];
/// assert_eq!(total_solved(&entries).unwrap(), 12);
/// ```
pub fn total_solved(entries: &[DifficultyCount]) -> Result<u64, LcError> {
    if let Some(all) = entries.iter().find(|e| e.difficulty == ALL_DIFFICULTIES) {
        return Ok(all.count);
    }

    let mut levels = entries
        .iter()
        .filter(|e| DIFFICULTIES.contains(&e.difficulty.as_str()))
        .peekable();

    if levels.peek().is_none() {
        return Err(LcError::MissingStats);
    }

    levels
        .try_fold(0u64, |total, e| total.checked_add(e.count))
        .ok_or(LcError::CountOverflow)
}
