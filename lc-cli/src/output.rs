//! Summary line printed after a run

use crate::readme::UpdateOutcome;

/// Format the one-line run summary
pub fn format_summary(solved: u64, outcome: &UpdateOutcome, dry_run: bool) -> String {
    let line = format!("Solved={}, changed={}", solved, outcome.changed());
    if dry_run {
        format!("{} (dry run)", line)
    } else {
        line
    }
}

/// Print the summary to stdout
pub fn print_summary(solved: u64, outcome: &UpdateOutcome, dry_run: bool) {
    println!("{}", format_summary(solved, outcome, dry_run));
}
