//! Marker-bounded rewrite of the solved count in a document

use crate::error::ReadmeError;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::{debug, info};

/// Matches the first `<!-- LC_SOLVED_START -->...<!-- LC_SOLVED_END -->` pair.
/// Whitespace inside the comment delimiters is optional and the region may
/// span lines. Group 1 is the region between the markers.
const MARKER_PATTERN: &str = r"<!--\s*LC_SOLVED_START\s*-->(?s:(.*?))<!--\s*LC_SOLVED_END\s*-->";

fn marker_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(MARKER_PATTERN).expect("marker pattern is valid"))
}

/// Result of splicing a count into document text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Splice {
    /// The region already holds the count
    Unchanged,
    /// The region was replaced
    Replaced {
        /// Trimmed region content before the replacement
        previous: String,
        /// Full document text after the replacement
        text: String,
    },
}

/// Outcome of an update against a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The region differed (and was rewritten unless this was a check)
    Changed { previous: String },
    /// The region already holds the count, nothing written
    Unchanged,
}

impl UpdateOutcome {
    pub fn changed(&self) -> bool {
        matches!(self, UpdateOutcome::Changed { .. })
    }
}

/// Replace the content of the first marker region with `count`
///
/// Returns `None` if the document has no marker pair. The markers themselves
/// are kept byte for byte; later marker pairs are left untouched.
pub fn splice_count(text: &str, count: u64) -> Option<Splice> {
    let region = marker_regex().captures(text)?.get(1)?;
    let new_value = count.to_string();
    let previous = region.as_str().trim();

    if previous == new_value {
        return Some(Splice::Unchanged);
    }

    let mut updated = String::with_capacity(text.len() + new_value.len());
    updated.push_str(&text[..region.start()]);
    updated.push_str(&new_value);
    updated.push_str(&text[region.end()..]);

    Some(Splice::Replaced {
        previous: previous.to_string(),
        text: updated,
    })
}

/// Rewrites the marker region of a single document
///
/// The file is read fully, and written back in place only when the count
/// differs. There is no temp-file swap or backup.
pub struct ReadmeUpdater {
    path: PathBuf,
}

impl ReadmeUpdater {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `count` into the marker region if it differs from the current value
    ///
    /// # Errors
    ///
    /// * `ReadmeError::Io` - The document cannot be read or written
    /// * `ReadmeError::MissingMarkers` - No marker pair; nothing is written
    pub fn update(&self, count: u64) -> Result<UpdateOutcome, ReadmeError> {
        self.apply(count, true)
    }

    /// Same comparison as [`update`](Self::update) without writing
    pub fn check(&self, count: u64) -> Result<UpdateOutcome, ReadmeError> {
        self.apply(count, false)
    }

    fn apply(&self, count: u64, write: bool) -> Result<UpdateOutcome, ReadmeError> {
        let text = fs::read_to_string(&self.path).map_err(|source| self.io_error(source))?;

        let splice = splice_count(&text, count).ok_or_else(|| ReadmeError::MissingMarkers {
            path: self.path.clone(),
        })?;

        match splice {
            Splice::Unchanged => {
                debug!(path = %self.path.display(), count, "Marker region already up to date");
                Ok(UpdateOutcome::Unchanged)
            }
            Splice::Replaced { previous, text } => {
                if write {
                    fs::write(&self.path, text).map_err(|source| self.io_error(source))?;
                    info!(path = %self.path.display(), %previous, count, "Updated marker region");
                }
                Ok(UpdateOutcome::Changed { previous })
            }
        }
    }

    fn io_error(&self, source: std::io::Error) -> ReadmeError {
        ReadmeError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
