//! Inspection passthroughs.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use strata_cli::application::services::inspect;

use crate::helpers::{RecordingBackend, names};

#[tokio::test]
async fn status_queries_each_target_in_order() {
    let backend = RecordingBackend::new();
    inspect::status(&backend, &names(&["controller", "router@1"]))
        .await
        .expect("status succeeds");
    assert_eq!(
        backend.batches("status"),
        vec![names(&["controller"]), names(&["router@1"])]
    );
}

#[tokio::test]
async fn journal_stops_at_first_failure() {
    let backend = RecordingBackend::failing_on("journal", "builder");
    let result = inspect::journal(&backend, &names(&["builder", "controller"])).await;
    assert!(result.is_err());
    assert_eq!(backend.batches("journal"), vec![names(&["builder"])]);
}

#[tokio::test]
async fn status_without_targets_is_rejected() {
    let backend = RecordingBackend::new();
    assert!(inspect::status(&backend, &[]).await.is_err());
    assert!(backend.events().is_empty());
}

#[tokio::test]
async fn listing_and_ssh_pass_straight_through() {
    let backend = RecordingBackend::new();
    inspect::list_units(&backend).await.unwrap();
    inspect::list_unit_files(&backend).await.unwrap();
    inspect::ssh(&backend, "controller").await.unwrap();
    let ops: Vec<&str> = backend.all_batches().into_iter().map(|(op, _)| op).collect();
    assert_eq!(ops, vec!["list-units", "list-unit-files", "ssh"]);
}
