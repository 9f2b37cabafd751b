//! Type-safe client handle for the kitchen actor.

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

use crate::kitchen::actor::KitchenRequest;
use crate::kitchen::error::KitchenError;
use crate::model::{Order, OrderId, OrderStatus};

/// A cloneable handle for talking to the kitchen actor.
///
/// Every operation sends a request carrying a one-shot responder and awaits
/// the answer. Dropping the last clone closes the request channel, which is
/// how the kitchen learns to shut down.
#[derive(Clone)]
pub struct KitchenClient {
    sender: mpsc::Sender<KitchenRequest>,
}

impl KitchenClient {
    pub(crate) fn new(sender: mpsc::Sender<KitchenRequest>) -> Self {
        Self { sender }
    }

    /// Submits an order to the kitchen, transferring ownership of it.
    ///
    /// Never rejects on cart size: there is no maximum queue length, and an
    /// order whose cart exceeds the kitchen's capacity is accepted but will
    /// wait in the queue forever.
    ///
    /// Returns the id the kitchen assigned.
    #[instrument(skip(self, order))]
    pub async fn submit(&self, order: Order) -> Result<OrderId, KitchenError> {
        debug!(items = order.cart_size(), "Sending submit to kitchen");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(KitchenRequest::Submit { order, respond_to })
            .await
            .map_err(|_| KitchenError::KitchenClosed)?;
        response.await.map_err(|_| KitchenError::KitchenDropped)?
    }

    /// Point-in-time status of a single order.
    ///
    /// Reflects the most recently committed transition; there is no ordering
    /// guarantee relative to transitions still in flight.
    #[instrument(skip(self))]
    pub async fn status_of(&self, id: OrderId) -> Result<OrderStatus, KitchenError> {
        debug!("Sending status request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(KitchenRequest::Status { id, respond_to })
            .await
            .map_err(|_| KitchenError::KitchenClosed)?;
        response.await.map_err(|_| KitchenError::KitchenDropped)?
    }

    /// Snapshot of every known order with its status, in submission order.
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<(OrderId, OrderStatus)>, KitchenError> {
        debug!("Sending list request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(KitchenRequest::List { respond_to })
            .await
            .map_err(|_| KitchenError::KitchenClosed)?;
        response.await.map_err(|_| KitchenError::KitchenDropped)?
    }
}
