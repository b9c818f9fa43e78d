//! Orchestration layer: spins up the actors, wires their dependencies, and
//! owns graceful shutdown.

pub mod system;
pub mod tracing;

pub use system::CartSystem;
pub use tracing::setup_tracing;
