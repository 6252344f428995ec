//! Unit tests for configuration loading and field resolution.

use ortho_config::MergeComposer;
use rstest::rstest;
use serde_json::{Value, json};

use super::{ClosingRefsConfig, Subcommand};
use crate::github::error::AuditError;

fn apply_layer(composer: &mut MergeComposer, layer_type: &str, value: Value) {
    match layer_type {
        "defaults" => composer.push_defaults(value),
        "file" => composer.push_file(value, None),
        "environment" => composer.push_environment(value),
        "cli" => composer.push_cli(value),
        _ => panic!("unknown layer type: {layer_type}"),
    }
}

fn merge(layers: Vec<(&str, Value)>) -> ClosingRefsConfig {
    let mut composer = MergeComposer::new();
    for (layer_type, value) in layers {
        apply_layer(&mut composer, layer_type, value);
    }
    ClosingRefsConfig::merge_from_layers(composer.layers()).expect("merge should succeed")
}

#[rstest]
#[case::file_overrides_defaults(
    vec![("defaults", json!({"owner": "default-owner"})), ("file", json!({"owner": "file-owner"}))],
    "owner",
    "file-owner"
)]
#[case::environment_overrides_file(
    vec![("file", json!({"token": "file-token"})), ("environment", json!({"token": "env-token"}))],
    "token",
    "env-token"
)]
#[case::cli_overrides_environment(
    vec![("environment", json!({"name": "env-repo"})), ("cli", json!({"name": "cli-repo"}))],
    "name",
    "cli-repo"
)]
#[case::cli_wins_across_all_layers(
    vec![
        ("defaults", json!({"api_base": "https://default.example/api"})),
        ("file", json!({"api_base": "https://file.example/api"})),
        ("environment", json!({"api_base": "https://env.example/api"})),
        ("cli", json!({"api_base": "https://cli.example/api"}))
    ],
    "api_base",
    "https://cli.example/api"
)]
fn later_layers_override_earlier_ones(
    #[case] layers: Vec<(&str, Value)>,
    #[case] field: &str,
    #[case] expected: &str,
) {
    let config = merge(layers);

    let actual = match field {
        "token" => config.token.as_deref(),
        "owner" => config.owner.as_deref(),
        "name" => config.name.as_deref(),
        "api_base" => config.api_base.as_deref(),
        _ => panic!("unknown field: {field}"),
    };

    assert_eq!(actual, Some(expected), "{field} should come from the last layer");
}

#[rstest]
fn numeric_fields_merge_from_layers() {
    let config = merge(vec![
        ("file", json!({"max": 500, "page_size": 50})),
        ("cli", json!({"max": 250})),
    ]);

    assert_eq!(config.max, Some(250));
    assert_eq!(config.page_size, 50);
}

#[rstest]
fn defaults_leave_repository_unset_and_use_full_pages() {
    let config = merge(vec![("defaults", json!({"owner": null, "token": null}))]);

    assert!(config.owner.is_none(), "owner should be None");
    assert!(config.name.is_none(), "name should be None");
    assert!(config.max.is_none(), "max should be None");
    assert_eq!(config.page_size, 100, "page size should default to 100");
}

#[rstest]
fn resolve_token_prefers_configured_value() {
    let _guard = env_lock::lock_env([("GITHUB_TOKEN", Some("legacy-token"))]);
    let config = ClosingRefsConfig {
        token: Some("configured-token".to_owned()),
        ..Default::default()
    };

    assert_eq!(config.resolve_token(), Ok("configured-token".to_owned()));
}

#[rstest]
fn resolve_token_falls_back_to_legacy_variable() {
    let _guard = env_lock::lock_env([("GITHUB_TOKEN", Some("legacy-token"))]);
    let config = ClosingRefsConfig::default();

    assert_eq!(config.resolve_token(), Ok("legacy-token".to_owned()));
}

#[rstest]
#[case::unset(None)]
#[case::blank(Some("   "))]
fn resolve_token_reports_missing_token(#[case] legacy: Option<&str>) {
    let _guard = env_lock::lock_env([("GITHUB_TOKEN", legacy)]);
    let config = ClosingRefsConfig::default();

    assert_eq!(config.resolve_token(), Err(AuditError::MissingToken));
}

#[rstest]
#[case::owner_missing(None, Some("hello-world"), "owner")]
#[case::name_missing(Some("octocat"), None, "name")]
fn require_repository_names_the_missing_flag(
    #[case] owner: Option<&str>,
    #[case] name: Option<&str>,
    #[case] expected_fragment: &str,
) {
    let config = ClosingRefsConfig {
        owner: owner.map(str::to_owned),
        name: name.map(str::to_owned),
        ..Default::default()
    };

    let error = config
        .require_repository()
        .expect_err("incomplete repository should be rejected");

    assert!(
        matches!(&error, AuditError::Configuration { message } if message.contains(expected_fragment)),
        "expected Configuration error mentioning {expected_fragment}, got {error:?}"
    );
}

#[rstest]
fn repository_locator_applies_api_base() {
    let config = ClosingRefsConfig {
        owner: Some("octocat".to_owned()),
        name: Some("hello-world".to_owned()),
        api_base: Some("https://ghe.example.com/api".to_owned()),
        ..Default::default()
    };

    let locator = config
        .repository_locator()
        .expect("complete configuration should build a locator");

    assert_eq!(locator.to_string(), "octocat/hello-world");
    assert_eq!(locator.api_base().as_str(), "https://ghe.example.com/api");
}

#[rstest]
#[case::unbounded(None, None)]
#[case::zero_is_unbounded(Some(0), None)]
#[case::capped(Some(300), Some(300))]
fn traversal_limits_normalise_max(#[case] max: Option<u64>, #[case] expected: Option<u64>) {
    let config = ClosingRefsConfig {
        max,
        ..Default::default()
    };

    let limits = config
        .traversal_limits()
        .expect("default page size should be valid");

    assert_eq!(limits.max_items(), expected);
    assert_eq!(limits.page_size().get(), 100);
}

#[rstest]
#[case::zero(0)]
#[case::over_maximum(101)]
fn traversal_limits_reject_invalid_page_size(#[case] page_size: u8) {
    let config = ClosingRefsConfig {
        page_size,
        ..Default::default()
    };

    assert!(
        matches!(
            config.traversal_limits(),
            Err(AuditError::InvalidPagination { .. })
        ),
        "page size {page_size} should be rejected"
    );
}

#[rstest]
#[case::stale("stale-prs", Subcommand::StalePullRequests)]
#[case::multiple("multiple-prs", Subcommand::MultiplePullRequests)]
fn subcommand_parses_command_line_spelling(#[case] input: &str, #[case] expected: Subcommand) {
    assert_eq!(input.parse::<Subcommand>(), Ok(expected));
    assert_eq!(expected.as_str(), input);
}

#[rstest]
fn subcommand_rejects_unknown_names() {
    assert_eq!(
        "stale".parse::<Subcommand>(),
        Err(AuditError::InvalidArgument {
            argument: "stale".to_owned()
        })
    );
}
