//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging for the whole kitchen.
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: kitchen startup and shutdown, with final queue and
//!   ledger sizes.
//! - **Scheduling events**: order received, order admitted to preparation
//!   (with the items it consumes and the computed duration), order out for
//!   delivery (with the capacity freed).
//! - **Anomalies**: carts that can never fit the kitchen, status queries for
//!   unknown ids.
//!
//! ## Usage
//!
//! ```bash
//! # Compact scheduling log
//! RUST_LOG=info cargo test -- --nocapture
//!
//! # Include per-request receipt logs
//! RUST_LOG=debug cargo test -- --nocapture
//! ```
//!
//! A typical `RUST_LOG=info` trace of the capacity gate at work:
//!
//! ```text
//! INFO Kitchen started max_preparing_items=4
//! INFO Order received order_id=1 items=3
//! INFO Order admitted to preparation order_id=1 items=3 preparing_items=3 duration=90s
//! INFO Order received order_id=2 items=2
//! INFO Order out for delivery order_id=1 preparing_items=0
//! INFO Order admitted to preparation order_id=2 items=2 preparing_items=2 duration=60s
//! ```
//!
//! Note that order 2 is admitted only after order 1 frees its capacity.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Module paths add noise; the messages carry the context
        .compact()
        .init();
}
