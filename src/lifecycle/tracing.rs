//! # Observability & Tracing
//!
//! This module provides the tracing infrastructure for the entire actor
//! system.
//!
//! ## Configuration
//!
//! [`setup_tracing`] initializes structured logging with the `tracing`
//! crate in a compact format that hides the crate/module prefix
//! (`with_target(false)`) - actors log an `entity_type` field instead, so
//! log lines stay short while keeping rich structured data.
//!
//! Log levels are controlled via `RUST_LOG`:
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Show full payloads with debug logs
//! RUST_LOG=debug cargo run
//!
//! # Filter to specific modules
//! RUST_LOG=bazaar_api::cart_actor=debug cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: startup, shutdown, and final store size.
//! - **Cart operations**: every `AddProduct`/`CompleteOrder`/... message
//!   with customer and order ids, plus a warn with the failure reason when
//!   an operation is rejected.
//! - **Catalog operations**: Create/Get per entity type.
//! - **Request flow**: `#[instrument]` spans on every client method, so
//!   `RUST_LOG=debug` shows the complete path of a request through the
//!   system, e.g.:
//!
//! ```text
//! DEBUG add_product: Sending request
//! DEBUG customer=alice product_id=product_1 AddProduct
//! DEBUG entity_type="Product" id=product_1 found=true Get
//! INFO  customer=alice product_id=product_1 Product added to cart
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - actors log entity_type instead
        .compact()
        .init();
}
