//! Resolver tests against the real process environment.
//!
//! These mutate process-wide state, so every test is `#[serial]` and uses
//! variable names unique to this file.

mod common;

use common::document_path;
use env_resolver::VariableResolver;
use serial_test::serial;
use std::env;

struct EnvGuard(&'static [&'static str]);

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for name in self.0 {
            env::remove_var(name);
        }
    }
}

#[test]
#[serial]
fn test_open_reads_process_environment() {
    let _guard = EnvGuard(&["ENV_RESOLVER_IT_HOST"]);
    env::set_var("ENV_RESOLVER_IT_HOST", "from-process");

    let dir = tempfile::tempdir().unwrap();
    let resolver = VariableResolver::open(document_path(dir.path()));

    assert_eq!(
        resolver.get_string("ENV_RESOLVER_IT_HOST", true).unwrap(),
        Some("from-process".to_string())
    );
    assert_eq!(
        resolver.required_string("ENV_RESOLVER_IT_HOST").unwrap(),
        "from-process"
    );
}

#[test]
#[serial]
fn test_environment_changes_are_seen_without_reopening() {
    let _guard = EnvGuard(&["ENV_RESOLVER_IT_LIMIT"]);
    let dir = tempfile::tempdir().unwrap();
    let resolver = VariableResolver::open(document_path(dir.path()));

    assert_eq!(resolver.get_int("ENV_RESOLVER_IT_LIMIT", false).unwrap(), None);

    env::set_var("ENV_RESOLVER_IT_LIMIT", "25");
    assert_eq!(
        resolver.get_int("ENV_RESOLVER_IT_LIMIT", false).unwrap(),
        Some(25)
    );
}

#[test]
#[serial]
fn test_load_from_process_environment() {
    let _guard = EnvGuard(&["ENV_RESOLVER_IT_A", "ENV_RESOLVER_IT_B"]);
    env::set_var("ENV_RESOLVER_IT_A", "1");
    env::set_var("ENV_RESOLVER_IT_B", "x");

    let dir = tempfile::tempdir().unwrap();
    let resolver = VariableResolver::open(document_path(dir.path()));
    let count = resolver.load_from_environment().unwrap();

    assert!(count >= 2);
    assert_eq!(
        resolver.saved_value("ENV_RESOLVER_IT_A"),
        Some("1".to_string())
    );
    assert_eq!(
        resolver.saved_value("ENV_RESOLVER_IT_B"),
        Some("x".to_string())
    );

    // Saved copies now win over later environment changes
    env::set_var("ENV_RESOLVER_IT_A", "2");
    assert_eq!(resolver.get_int("ENV_RESOLVER_IT_A", true).unwrap(), Some(1));
}
