//! # Core Actor Framework
//!
//! This module defines the generic building blocks for the actor system.
//!
//! ## Key Types
//!
//! - [`ActorEntity`]: The trait that all catalog resource types must implement.
//! - [`ResourceActor`]: The generic actor that manages entities.
//! - [`ResourceClient`]: The generic client for communicating with actors.
//! - [`FrameworkError`]: Common errors (e.g., ActorClosed).
//!
//! The cart subsystem consumes catalog actors purely as lookup
//! collaborators, so the framework is deliberately small: entities are
//! created and fetched, nothing else. Resource-specific state machines (the
//! cart itself) live in their own hand-written actors with the same
//! channel/oneshot shape.

use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any catalog resource must implement to be managed by a
/// [`ResourceActor`].
///
/// # Architecture Note
/// By defining a contract that all our catalog types (Product,
/// PaymentMethod) must satisfy, we write the actor message loop *once* and
/// reuse it for every resource. Associated types keep the contract
/// type-safe: you cannot send a `ProductCreate` payload to the
/// PaymentMethod actor, the compiler rejects it outright.
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance (DTO).
    type CreateParams: Send + Sync + Debug;

    /// Construct the full entity from its assigned id and the payload.
    ///
    /// Returning `Err` rejects the creation; the message is turned into a
    /// [`FrameworkError::Custom`] for the caller.
    fn from_create_params(id: Self::Id, params: Self::CreateParams) -> Result<Self, String>;
}

// =============================================================================
// 2. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Custom error: {0}")]
    Custom(String),
}

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// # Resource-Oriented Architecture
/// Each actor manages one resource type. Rather than ad-hoc messages per
/// operation we standardize on the lifecycle operations a catalog lookup
/// collaborator actually needs:
///
/// - **Create**: Register a new resource from [`ActorEntity::CreateParams`].
/// - **Get**: Fetch the current state by id. Absence is `Ok(None)`, not an
///   error; callers decide whether a missing resource is fatal.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::CreateParams,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// The generic actor that manages a collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state
/// (`store`) and the receiver end of the channel.
///
/// **Concurrency Model**:
/// Each `ResourceActor` processes its own messages *sequentially* in a
/// loop, so the `store` needs no `Mutex` or `RwLock`. The actor model gives
/// us safety through exclusive ownership of state within the task.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: ActorEntity> ResourceActor<T> {
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel
    /// closes (i.e., until every client has been dropped).
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "Product" instead of
        // "bazaar_api::model::product::Product")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = (self.next_id_fn)();

                    match T::from_create_params(id.clone(), params) {
                        Ok(item) => {
                            self.store.insert(id.clone(), item);
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::Custom(e)));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A type-safe client for interacting with a `ResourceActor`.
#[derive(Clone)]
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn create(&self, params: T::CreateParams) -> Result<T::Id, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Create { params, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Get { id, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    // --- Domain Definition ---

    #[derive(Clone, Debug, PartialEq)]
    struct Coupon {
        id: String,
        code: String,
        percent_off: u32,
    }

    #[derive(Debug)]
    struct CouponCreate {
        code: String,
        percent_off: u32,
    }

    impl ActorEntity for Coupon {
        type Id = String;
        type CreateParams = CouponCreate;

        fn from_create_params(id: String, params: CouponCreate) -> Result<Self, String> {
            if params.code.is_empty() {
                return Err("Coupon code must not be empty".to_string());
            }
            Ok(Self {
                id,
                code: params.code,
                percent_off: params.percent_off,
            })
        }
    }

    // --- Test ---

    #[tokio::test]
    async fn test_resource_actor_create_and_get() {
        // ID Generator
        let counter = Arc::new(AtomicU64::new(1));
        let next_id = move || {
            let id = counter.fetch_add(1, Ordering::SeqCst);
            format!("coupon_{}", id)
        };

        // Start Actor
        let (actor, client) = ResourceActor::new(10, next_id);
        tokio::spawn(actor.run());

        // 1. Create
        let payload = CouponCreate {
            code: "WELCOME10".into(),
            percent_off: 10,
        };
        let id: String = client.create(payload).await.unwrap();
        assert_eq!(id, "coupon_1");

        // 2. Get it back
        let coupon: Coupon = client.get(id.clone()).await.unwrap().unwrap();
        assert_eq!(coupon.code, "WELCOME10");
        assert_eq!(coupon.percent_off, 10);

        // 3. Get a missing id: absence is Ok(None), not an error
        let missing = client.get("coupon_999".to_string()).await.unwrap();
        assert!(missing.is_none());

        // 4. Invalid payload is rejected by from_create_params
        let bad = CouponCreate {
            code: String::new(),
            percent_off: 50,
        };
        let err = client.create(bad).await.unwrap_err();
        assert_eq!(
            err,
            FrameworkError::Custom("Coupon code must not be empty".to_string())
        );
    }
}
