//! Prometheus metrics for the catalog service.
//!
//! This module provides metrics for:
//! - Votes (accepted, duplicate, withdrawn, failed)
//! - Catalog writes (create, update)
//! - Ranking queries

use once_cell::sync::Lazy;
use prometheus::{IntCounterVec, Opts};

// =============================================================================
// Votes
// =============================================================================

/// Vote operations by result.
pub static VOTES: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("marquee_votes_total", "Total vote operations"),
        &["result"], // "accepted", "duplicate", "withdrawn", "failed"
    )
    .unwrap()
});

// =============================================================================
// Catalog
// =============================================================================

/// Catalog writes by operation and result.
pub static CATALOG_WRITES: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("marquee_catalog_writes_total", "Total catalog writes"),
        &["operation", "result"], // operation: "create", "update"
    )
    .unwrap()
});

// =============================================================================
// Rankings
// =============================================================================

/// Ranking queries by ranking and result.
pub static RANKING_QUERIES: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("marquee_ranking_queries_total", "Total ranking queries"),
        &["ranking", "result"], // result: "ok" or an error kind
    )
    .unwrap()
});

// =============================================================================
// Helper functions
// =============================================================================

/// Get all core metrics for registration in a registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        Box::new(VOTES.clone()),
        Box::new(CATALOG_WRITES.clone()),
        Box::new(RANKING_QUERIES.clone()),
    ]
}
