//! Tracing setup tests.

use contrib_core::tracing::init_tracing;

/// LOG-01: initialization is idempotent and logging afterwards is safe.
#[test]
fn test_init_tracing_idempotent() {
    std::env::set_var("CONTRIB_LOG", "contrib_core=debug");
    init_tracing();
    init_tracing();
    tracing::debug!(target: "contrib_core", "tracing initialized twice");
}
