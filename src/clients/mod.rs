//! Type-safe wrappers around the raw actor channels.
//!
//! The rest of the app never touches message passing directly: catalog
//! actors are reached through [`ProductClient`] and [`PaymentClient`]
//! (thin wrappers over [`ResourceClient`](crate::framework::ResourceClient)),
//! and the cart actor through [`CartClient`].

pub mod actor_client;
pub mod cart_client;
pub mod payment_client;
pub mod product_client;

pub use cart_client::*;
pub use payment_client::*;
pub use product_client::*;
