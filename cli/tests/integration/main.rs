//! Integration tests for the strata CLI
//!
//! These tests spawn the actual binary and test end-to-end behavior.
//! They never reach a cluster: every case fails or finishes before the
//! first fleetctl or etcdctl call.

mod cli_tests;
