use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::kitchen::{self, KitchenClient, KitchenConfig, ShutdownError};

/// The runtime orchestrator for the kitchen scheduler.
///
/// `Kitchen` is responsible for:
/// - **Lifecycle**: spawning the actor task and shutting it down gracefully.
/// - **Handles**: handing out [`KitchenClient`] clones to collaborators.
///
/// # Example
///
/// ```ignore
/// let kitchen = Kitchen::new(KitchenConfig::default());
/// let client = kitchen.client();
///
/// let order_id = client.submit(order).await?;
/// let status = client.status_of(order_id).await?;
///
/// // Gracefully shut down when done
/// kitchen.shutdown().await?;
/// ```
pub struct Kitchen {
    client: KitchenClient,
    /// Join handle for the actor task, kept so shutdown can observe a panic
    /// instead of silently losing it.
    handle: JoinHandle<()>,
}

impl Kitchen {
    /// Spawns the kitchen actor and returns the running system.
    pub fn new(config: KitchenConfig) -> Self {
        let (actor, client) = kitchen::new(config);
        let handle = tokio::spawn(actor.run());
        Self { client, handle }
    }

    /// A fresh client handle for this kitchen.
    pub fn client(&self) -> KitchenClient {
        self.client.clone()
    }

    /// Gracefully shuts down the kitchen.
    ///
    /// Dropping the client closes the request channel; the actor then
    /// finishes every preparation already in flight before exiting, so this
    /// call waits for the last admitted order to reach `Delivering`. Orders
    /// still blocked in the queue at that point are abandoned (all state is
    /// process-lifetime only).
    ///
    /// Note that client clones handed out via [`Kitchen::client`] also hold
    /// the channel open; shutdown completes once the last of them is gone.
    pub async fn shutdown(self) -> Result<(), ShutdownError> {
        info!("Shutting down kitchen...");
        drop(self.client);

        if let Err(e) = self.handle.await {
            error!("Kitchen task failed: {:?}", e);
            return Err(ShutdownError::TaskFailed(e));
        }

        info!("Kitchen shutdown complete.");
        Ok(())
    }
}
