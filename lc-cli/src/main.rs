//! lc-solved - keep a README's LeetCode solved count up to date

mod cli;
mod config;
mod error;
mod logging;
mod output;
mod readme;

use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use lc_http_client::LeetCodeClient;
use readme::{ReadmeUpdater, UpdateOutcome};
use tracing::info;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;
    logging::init(config.verbosity)?;

    let (solved, outcome) = sync_readme(&config)?;

    output::print_summary(solved, &outcome, config.dry_run);
    Ok(())
}

/// Fetch the solved count and apply it to the configured document
///
/// The document is only touched after a successful fetch.
fn sync_readme(config: &Config) -> Result<(u64, UpdateOutcome), CliError> {
    let client = LeetCodeClient::builder()
        .base_url(config.endpoint.as_str())
        .map_err(|e| CliError::Config(format!("Invalid endpoint {}: {}", config.endpoint, e)))?
        .timeout(config.timeout)
        .build()?;

    let solved = client.fetch_solved_count(&config.credentials)?;

    let updater = ReadmeUpdater::new(&config.readme);
    let outcome = if config.dry_run {
        let outcome = updater.check(solved)?;
        if outcome.changed() {
            info!(path = %updater.path().display(), "Dry run, not writing document");
        }
        outcome
    } else {
        updater.update(solved)?
    };

    Ok((solved, outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use error::ReadmeError;
    use lc_http_client::LcError;
    use std::fs;
    use tempfile::TempDir;

    const DOC_42: &str = "Solved: <!-- LC_SOLVED_START -->42<!-- LC_SOLVED_END -->\n";

    const SOLVED_57: &str = r#"{"data":{"matchedUser":{"submitStatsGlobal":{"acSubmissionNum":[
        {"difficulty":"All","count":57},
        {"difficulty":"Easy","count":50},
        {"difficulty":"Medium","count":7},
        {"difficulty":"Hard","count":0}
    ]}}}}"#;

    fn config_for(server: &mockito::Server, readme: &std::path::Path, extra: &[&str]) -> Config {
        let endpoint = server.url();
        let readme = readme.to_string_lossy().into_owned();
        let mut argv = vec![
            "lc-solved",
            "--username",
            "alice",
            "--endpoint",
            endpoint.as_str(),
            "--readme",
            readme.as_str(),
        ];
        argv.extend_from_slice(extra);
        Config::from_args(Args::try_parse_from(argv).unwrap()).unwrap()
    }

    fn mock_graphql(server: &mut mockito::Server, status: usize, body: &str) -> mockito::Mock {
        server
            .mock("POST", "/graphql")
            .with_status(status)
            .with_body(body)
            .expect(1)
            .create()
    }

    #[test]
    fn test_sync_rewrites_document() {
        let mut server = mockito::Server::new();
        let mock = mock_graphql(&mut server, 200, SOLVED_57);
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("README.md");
        fs::write(&path, DOC_42).unwrap();

        let (solved, outcome) = sync_readme(&config_for(&server, &path, &[])).unwrap();

        assert_eq!(solved, 57);
        assert!(outcome.changed());
        assert_eq!(
            output::format_summary(solved, &outcome, false),
            "Solved=57, changed=true"
        );
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Solved: <!-- LC_SOLVED_START -->57<!-- LC_SOLVED_END -->\n"
        );
        mock.assert();
    }

    #[test]
    fn test_sync_unchanged_document() {
        let mut server = mockito::Server::new();
        let mock = mock_graphql(&mut server, 200, SOLVED_57);
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("README.md");
        let content = "<!-- LC_SOLVED_START --> 57 <!-- LC_SOLVED_END -->";
        fs::write(&path, content).unwrap();

        let (solved, outcome) = sync_readme(&config_for(&server, &path, &[])).unwrap();

        assert_eq!(solved, 57);
        assert_eq!(outcome, UpdateOutcome::Unchanged);
        assert_eq!(fs::read_to_string(&path).unwrap(), content);
        mock.assert();
    }

    #[test]
    fn test_sync_dry_run_does_not_write() {
        let mut server = mockito::Server::new();
        let mock = mock_graphql(&mut server, 200, SOLVED_57);
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("README.md");
        fs::write(&path, DOC_42).unwrap();

        let (_, outcome) = sync_readme(&config_for(&server, &path, &["--dry-run"])).unwrap();

        assert!(outcome.changed());
        assert_eq!(fs::read_to_string(&path).unwrap(), DOC_42);
        mock.assert();
    }

    #[test]
    fn test_fetch_failure_leaves_document() {
        let mut server = mockito::Server::new();
        let mock = mock_graphql(&mut server, 503, "Service Unavailable");
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("README.md");
        fs::write(&path, DOC_42).unwrap();

        let result = sync_readme(&config_for(&server, &path, &[]));

        assert!(matches!(
            result,
            Err(CliError::Http(LcError::InvalidStatus { .. }))
        ));
        assert_eq!(fs::read_to_string(&path).unwrap(), DOC_42);
        mock.assert();
    }

    #[test]
    fn test_unknown_user_leaves_document() {
        let mut server = mockito::Server::new();
        let mock = mock_graphql(&mut server, 200, r#"{"data":{"matchedUser":null}}"#);
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("README.md");
        fs::write(&path, DOC_42).unwrap();

        let result = sync_readme(&config_for(&server, &path, &[]));

        assert!(matches!(
            result,
            Err(CliError::Http(LcError::UserNotFound { .. }))
        ));
        assert_eq!(fs::read_to_string(&path).unwrap(), DOC_42);
        mock.assert();
    }

    #[test]
    fn test_missing_markers_is_readme_error() {
        let mut server = mockito::Server::new();
        let mock = mock_graphql(&mut server, 200, SOLVED_57);
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("README.md");
        fs::write(&path, "# No markers here\n").unwrap();

        let result = sync_readme(&config_for(&server, &path, &[]));

        assert!(matches!(
            result,
            Err(CliError::Readme(ReadmeError::MissingMarkers { .. }))
        ));
        assert_eq!(fs::read_to_string(&path).unwrap(), "# No markers here\n");
        mock.assert();
    }
}
