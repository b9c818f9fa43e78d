#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Bazaar API
//!
//! > **A marketplace backend built on resource-oriented actors.**
//!
//! This crate exposes product listings, shopping carts, and order
//! completion over HTTP. Its core is the **cart lifecycle subsystem**: the
//! rules governing how a customer accumulates items into an implicit open
//! order (their cart), how that order's total is computed, how it closes by
//! binding a payment method, and how a fresh cart appears once the prior
//! one closes.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Why the Actor Model?
//!
//! The cart has real state-machine semantics and invariants across related
//! rows: at most one open order per customer, idempotent add/remove, a
//! one-way open → closed transition. Instead of guarding all of that with
//! locks or storage constraints, each stateful resource is an actor that
//! owns its state and processes messages *sequentially*. The dangerous
//! "find-or-create the open order" step is atomic by construction - two
//! concurrent adds can never race each other into two open orders.
//!
//! ### Generics: The Power of `T`
//!
//! Catalog resources (products, payment methods) are plain lookup
//! collaborators, so they share one generic implementation:
//! `ResourceActor<T: ActorEntity>`. We wrote the message loop once and it
//! works for both. The cart actor is different - its operations are keyed
//! by customer, not entity id - so it gets a hand-written actor with the
//! same channel/oneshot shape.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic `ResourceActor<T>` powering the catalog actors, plus the
//! [`mock`](framework::mock) utilities for testing clients in isolation.
//!
//! ### 2. The Core ([`cart_actor`])
//! The cart state machine: [`CartActor`](cart_actor::CartActor)
//! orchestrating the [`OrderRepository`](cart_actor::repository::OrderRepository)
//! and [`LineItemStore`](cart_actor::line_items::LineItemStore).
//!
//! ### 3. The Interface ([`clients`])
//! Typed wrappers hiding raw message passing:
//! [`CartClient`](clients::CartClient), [`ProductClient`](clients::ProductClient),
//! [`PaymentClient`](clients::PaymentClient).
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! [`CartSystem`](lifecycle::CartSystem) spins up the actors, wires their
//! dependencies, and shuts them down gracefully.
//!
//! ### 5. The Edge ([`http`])
//! The axum router translating the REST surface onto the cart client, with
//! the [`Caller`](http::identity::Caller) extractor standing in for the
//! external identity collaborator.
//!
//! ## 🚀 Running the Demo
//!
//! ```bash
//! # Serve the API on port 8000 with info logs
//! RUST_LOG=info cargo run
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod cart_actor;
pub mod clients;
pub mod framework;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod payment_actor;
pub mod product_actor;
