//! CLI command flow tests
//!
//! Drive `run_cli_command` end to end over the mock backend.

#![cfg(feature = "cli")]

use std::sync::Arc;

use clap::Parser;
use quanklink::cli::Cli;
use quanklink::config::{MockConfig, StaticConfig};
use quanklink::context::AppContext;
use quanklink::interfaces::cli::{CliError, run_cli_command};
use quanklink::session::SessionStore;
use tempfile::TempDir;

fn context_with(session: Arc<SessionStore>) -> AppContext {
    let config = StaticConfig {
        mock: MockConfig::without_delays(),
        ..StaticConfig::default()
    };
    AppContext::with_session(Arc::new(config), session)
}

fn run(ctx: &AppContext, args: &[&str]) -> Result<(), CliError> {
    let mut argv = vec!["quanklink"];
    argv.extend_from_slice(args);
    let cli = Cli::try_parse_from(argv).expect("arguments should parse");
    tokio_test::block_on(run_cli_command(cli.command, ctx))
}

#[test]
fn test_public_create_needs_no_login() {
    let ctx = context_with(Arc::new(SessionStore::in_memory()));
    assert!(run(&ctx, &["create", "https://www.example.com/page"]).is_ok());
}

#[test]
fn test_public_create_rejects_bad_url() {
    let ctx = context_with(Arc::new(SessionStore::in_memory()));
    assert!(matches!(
        run(&ctx, &["create", "javascript:alert(1)"]),
        Err(CliError::ParseError(_))
    ));
}

#[test]
fn test_admin_commands_require_login() {
    let ctx = context_with(Arc::new(SessionStore::in_memory()));
    for args in [
        vec!["query"],
        vec!["admin-create", "https://a.test"],
        vec!["update", "3", "--short-url", "https://s.test/x"],
        vec!["delete", "3"],
    ] {
        match run(&ctx, &args) {
            Err(CliError::LoginRequired { redirect }) => assert_eq!(redirect, "/admin"),
            other => panic!("{:?}: expected LoginRequired, got {:?}", args, other),
        }
    }
}

#[test]
fn test_admin_flow_after_login() {
    let td = TempDir::new().unwrap();
    let session = Arc::new(SessionStore::open(td.path().join("s.json")).unwrap());
    let ctx = context_with(session);

    run(&ctx, &["login", "secret", "--from", "/login?redirect=%2Fadmin"]).unwrap();
    run(&ctx, &["query", "--page", "2", "--page-size", "5", "--sort", "id", "--order", "desc"])
        .unwrap();
    run(&ctx, &["admin-create", "https://a.test", "--short-url", "https://s.test/a"]).unwrap();
    run(&ctx, &["update", "3", "--expired", "true"]).unwrap();
    run(&ctx, &["delete", "3"]).unwrap();

    run(&ctx, &["logout"]).unwrap();
    assert!(matches!(
        run(&ctx, &["delete", "3"]),
        Err(CliError::LoginRequired { .. })
    ));
}

#[test]
fn test_update_without_fields_rejected() {
    let session = Arc::new(SessionStore::in_memory());
    session.set_token("t").unwrap();
    let ctx = context_with(session);
    assert!(matches!(
        run(&ctx, &["update", "3"]),
        Err(CliError::ParseError(_))
    ));
}

#[test]
fn test_navigate_and_proxy() {
    let ctx = context_with(Arc::new(SessionStore::in_memory()));
    assert!(run(&ctx, &["navigate", "/admin"]).is_ok());
    assert!(run(&ctx, &["navigate", "/"]).is_ok());
    assert!(run(&ctx, &["navigate", "/unknown"]).is_err());
    assert!(run(&ctx, &["proxy", "/api/quank-links"]).is_ok());
}
