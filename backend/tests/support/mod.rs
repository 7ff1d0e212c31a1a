//! Shared helpers for backend integration tests.
//!
//! PostgreSQL-backed suites read their connection string from
//! `ACCOUNTS_TEST_DATABASE_URL`. When it is unset the suites print a
//! `SKIP-TEST-CLUSTER` marker and return early; when it is set but setup
//! fails they panic unless `SKIP_TEST_CLUSTER` is truthy, so CI breakage is
//! not masked.

/// Environment variable naming the test database.
pub const TEST_DATABASE_URL_ENV: &str = "ACCOUNTS_TEST_DATABASE_URL";

/// Connection string for the test database, if configured.
pub fn test_database_url() -> Option<String> {
    std::env::var(TEST_DATABASE_URL_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
}

/// Returns true when `SKIP_TEST_CLUSTER` is "1", "true", or "yes"
/// (case-insensitive).
pub fn should_skip_test_cluster() -> bool {
    std::env::var("SKIP_TEST_CLUSTER")
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// Print the skip marker picked up by CI log scrapers.
#[expect(clippy::print_stderr, reason = "skip markers are read from test logs")]
pub fn report_skip(reason: impl std::fmt::Display) {
    eprintln!("SKIP-TEST-CLUSTER: {reason}");
}

/// Handle database setup failures consistently across suites.
pub fn handle_cluster_setup_failure<T>(reason: impl std::fmt::Display) -> Option<T> {
    if should_skip_test_cluster() {
        report_skip(reason);
        None
    } else {
        panic!("Test database setup failed: {reason}. Set SKIP_TEST_CLUSTER=1 to skip.");
    }
}
