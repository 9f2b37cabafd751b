//! The order-preparation scheduler: admission queue, capacity gate, and
//! preparation timers, all owned by a single actor.

pub mod actor;
pub mod capacity;
pub mod client;
pub mod error;

pub use actor::*;
pub use client::*;
pub use error::*;

use tokio::sync::mpsc;

/// Kitchen configuration, fixed for the actor's lifetime.
#[derive(Debug, Clone)]
pub struct KitchenConfig {
    /// Maximum total cart-item count across all simultaneously preparing
    /// orders. There is no dynamic resizing.
    pub max_preparing_items: usize,
}

impl Default for KitchenConfig {
    fn default() -> Self {
        Self {
            max_preparing_items: 4,
        }
    }
}

/// Creates a new kitchen actor and its client.
///
/// The actor does nothing until [`KitchenActor::run`] is spawned; see
/// [`Kitchen`](crate::lifecycle::Kitchen) for the wired-up version.
pub fn new(config: KitchenConfig) -> (KitchenActor, KitchenClient) {
    let (sender, receiver) = mpsc::channel(32);
    let actor = KitchenActor::new(config, receiver);
    let client = KitchenClient::new(sender);
    (actor, client)
}
