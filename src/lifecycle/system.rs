use crate::clients::{CartClient, PaymentClient, ProductClient};
use tracing::{error, info};

/// The main runtime orchestrator for the marketplace backend.
///
/// `CartSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping all actors in the system
/// - **Dependency Wiring**: Injecting the catalog clients into the cart actor
///
/// # Architecture
///
/// The system consists of three actors:
/// - **Product Actor**: catalog lookup collaborator (existence, name, price)
/// - **PaymentMethod Actor**: payment lookup collaborator (existence, ownership)
/// - **Cart Actor**: the order/cart state machine, which consumes the two
///   catalog clients as its runtime context
///
/// # Example
///
/// ```ignore
/// let system = CartSystem::new();
///
/// let product_id = system.product_client.create_product(params).await?;
/// system.cart_client.add_product(customer, product_id).await?;
///
/// // Gracefully shut down when done
/// system.shutdown().await?;
/// ```
pub struct CartSystem {
    /// Client for the cart actor - the entry point for every cart operation
    pub cart_client: CartClient,

    /// Client for the Product actor
    pub product_client: ProductClient,

    /// Client for the PaymentMethod actor
    pub payment_client: PaymentClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CartSystem {
    /// Creates and initializes a new `CartSystem` with all actors running.
    ///
    /// The catalog actors have no dependencies and start immediately; the
    /// cart actor receives the catalog clients as its injected context
    /// ("late binding" - dependencies arrive at `run()`, not construction).
    pub fn new() -> Self {
        // 1. Create actors (no dependencies yet)
        let (product_actor, product_client) = crate::product_actor::new();
        let (payment_actor, payment_client) = crate::payment_actor::new();
        let (cart_actor, cart_client) = crate::cart_actor::new();

        // 2. Start actors with injected context
        let product_handle = tokio::spawn(product_actor.run());
        let payment_handle = tokio::spawn(payment_actor.run());

        // Cart actor needs the catalog clients (Context = (ProductClient, PaymentClient))
        let cart_handle = tokio::spawn(cart_actor.run((
            product_client.clone(),
            payment_client.clone(),
        )));

        Self {
            cart_client,
            product_client,
            payment_client,
            handles: vec![product_handle, payment_handle, cart_handle],
        }
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the clients closes the underlying channels; each actor
    /// detects its closed channel and exits its event loop. We then wait
    /// for all actor tasks to complete.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        // Step 1: Close all channels by dropping clients
        drop(self.cart_client);
        drop(self.product_client);
        drop(self.payment_client);

        // Step 2: Wait for all actor tasks to complete
        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for CartSystem {
    fn default() -> Self {
        Self::new()
    }
}
