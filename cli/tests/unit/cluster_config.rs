//! `config <target> <get|set|rm>` against an in-memory store.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use strata_cli::application::services::cluster_config::{ConfigEntry, config};
use strata_cli::domain::ConfigAction;

use crate::helpers::{MemoryConfig, names};

#[tokio::test]
async fn set_writes_under_target_namespace() {
    let store = MemoryConfig::default();
    let entries = config(
        &store,
        "platform",
        ConfigAction::Set,
        &names(&["domain=example.com", "sshPrivateKey=/keys/id=rsa"]),
    )
    .await
    .expect("set succeeds");

    assert_eq!(store.value("/strata/platform/domain").as_deref(), Some("example.com"));
    assert_eq!(
        store.value("/strata/platform/sshPrivateKey").as_deref(),
        Some("/keys/id=rsa")
    );
    assert_eq!(entries.len(), 2);
}

#[tokio::test]
async fn malformed_assignment_writes_nothing() {
    let store = MemoryConfig::default();
    let err = config(
        &store,
        "platform",
        ConfigAction::Set,
        &names(&["domain=example.com", "oops"]),
    )
    .await
    .unwrap_err();

    assert!(err.to_string().contains("'oops'"), "got: {err}");
    assert_eq!(store.value("/strata/platform/domain"), None);
}

#[tokio::test]
async fn get_reports_missing_key_as_unset() {
    let store = MemoryConfig::with(&[("/strata/logs/drain", "tcp://logs.example.com:514")]);
    let entries = config(&store, "logs", ConfigAction::Get, &names(&["drain", "level"]))
        .await
        .expect("get succeeds");

    assert_eq!(
        entries,
        vec![
            ConfigEntry {
                key: "drain".to_string(),
                value: Some("tcp://logs.example.com:514".to_string()),
            },
            ConfigEntry {
                key: "level".to_string(),
                value: None,
            },
        ]
    );
}

#[tokio::test]
async fn rm_deletes_key() {
    let store = MemoryConfig::with(&[("/strata/platform/domain", "example.com")]);
    config(&store, "platform", ConfigAction::Rm, &names(&["domain"]))
        .await
        .expect("rm succeeds");
    assert_eq!(store.value("/strata/platform/domain"), None);
}

#[tokio::test]
async fn rm_of_missing_key_propagates_store_error() {
    let store = MemoryConfig::default();
    let err = config(&store, "platform", ConfigAction::Rm, &names(&["domain"]))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Key not found"), "got: {err}");
}

#[tokio::test]
async fn empty_key_is_rejected() {
    let store = MemoryConfig::default();
    assert!(
        config(&store, "platform", ConfigAction::Get, &names(&[""]))
            .await
            .is_err()
    );
}
