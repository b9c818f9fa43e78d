//! Pure data structures (DTOs) for the marketplace domain.
//!
//! Catalog types ([`Product`], [`PaymentMethod`]) implement the
//! [`ActorEntity`](crate::framework::ActorEntity) trait so the generic
//! [`ResourceActor`](crate::framework::ResourceActor) can manage them.
//! Order types ([`Order`], [`LineItem`]) are owned by the cart actor.

pub mod ids;
pub mod order;
pub mod payment;
pub mod product;

pub use ids::*;
pub use order::*;
pub use payment::*;
pub use product::*;
