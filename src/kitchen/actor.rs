//! The kitchen actor: single owner of all mutable scheduler state.
//!
//! ## Key Types
//!
//! - [`KitchenActor`]: the event loop owning the order ledger, the admission
//!   queue, and the preparing set.
//! - [`KitchenRequest`]: the message enum sent by
//!   [`KitchenClient`](crate::kitchen::KitchenClient).
//!
//! ## Concurrency Model
//!
//! Every mutation of scheduler state happens inside the actor's task, applied
//! in message-arrival order. No locks: the actor has exclusive ownership of
//! its state. The only suspending operation is the preparation wait itself,
//! which runs in its own spawned task and reports back over a channel, so the
//! actor stays responsive while any number of orders are preparing.

use std::collections::{BTreeMap, HashSet, VecDeque};
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use crate::kitchen::capacity::can_admit;
use crate::kitchen::error::KitchenError;
use crate::kitchen::KitchenConfig;
use crate::model::{Order, OrderId, OrderStatus};

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, KitchenError>>;

/// Requests sent from `KitchenClient` to the actor.
#[derive(Debug)]
pub enum KitchenRequest {
    /// Accept an order into the kitchen: assign an id, enqueue, try to admit.
    Submit {
        order: Order,
        respond_to: Response<OrderId>,
    },
    /// Point-in-time status of a single order.
    Status {
        id: OrderId,
        respond_to: Response<OrderStatus>,
    },
    /// Snapshot of every known order, in submission order.
    List {
        respond_to: Response<Vec<(OrderId, OrderStatus)>>,
    },
}

/// Internal event: a preparation timer elapsed.
#[derive(Debug)]
struct PrepFinished {
    order_id: OrderId,
}

/// The actor owning the kitchen's scheduler state.
///
/// State is split into three collections whose membership is mutually
/// exclusive for any order: the FIFO admission `queue`, the `preparing` set,
/// and (implicitly) "neither" once an order reaches `Delivering`. The
/// `orders` ledger holds every order ever accepted regardless of phase; ids
/// are assigned in submission order, so iterating the ledger yields
/// submission order.
pub struct KitchenActor {
    config: KitchenConfig,
    receiver: mpsc::Receiver<KitchenRequest>,
    /// Completion events from preparation timers. The actor holds a sender so
    /// the channel stays open between timer tasks.
    done_tx: mpsc::UnboundedSender<PrepFinished>,
    done_rx: mpsc::UnboundedReceiver<PrepFinished>,
    orders: BTreeMap<OrderId, Order>,
    /// Ids waiting for admission, strict arrival order.
    queue: VecDeque<OrderId>,
    /// Ids currently consuming capacity.
    preparing: HashSet<OrderId>,
    /// Total cart items across the preparing set. Never exceeds
    /// `config.max_preparing_items`.
    preparing_items: usize,
    next_id: OrderId,
}

impl KitchenActor {
    pub(crate) fn new(config: KitchenConfig, receiver: mpsc::Receiver<KitchenRequest>) -> Self {
        let (done_tx, done_rx) = mpsc::unbounded_channel();
        Self {
            config,
            receiver,
            done_tx,
            done_rx,
            orders: BTreeMap::new(),
            queue: VecDeque::new(),
            preparing: HashSet::new(),
            preparing_items: 0,
            next_id: 1,
        }
    }

    /// Runs the actor's event loop.
    ///
    /// The loop multiplexes client requests with completion events from the
    /// preparation timers. Once every client is dropped the request channel
    /// closes; the actor then finishes the preparations already in flight
    /// before exiting, so no admitted order is ever left without its
    /// completion transition.
    pub async fn run(mut self) {
        info!(
            max_preparing_items = self.config.max_preparing_items,
            "Kitchen started"
        );

        let mut accepting = true;
        loop {
            tokio::select! {
                req = self.receiver.recv(), if accepting => match req {
                    Some(req) => self.handle_request(req),
                    None => accepting = false,
                },
                // Never yields `None`: the actor holds a sender.
                Some(done) = self.done_rx.recv() => self.handle_completion(done),
            }
            if !accepting && self.preparing.is_empty() {
                break;
            }
        }

        info!(
            orders = self.orders.len(),
            still_queued = self.queue.len(),
            "Kitchen shutdown"
        );
    }

    // =========================================================================
    // Request handling
    // =========================================================================

    fn handle_request(&mut self, req: KitchenRequest) {
        match req {
            KitchenRequest::Submit { mut order, respond_to } => {
                let id = self.next_id;
                self.next_id += 1;
                order.id = id;

                let items = order.cart_size();
                debug!(order_id = id, items, "Submit");
                if items > self.config.max_preparing_items {
                    warn!(
                        order_id = id,
                        items,
                        max_preparing_items = self.config.max_preparing_items,
                        "Cart exceeds kitchen capacity; order can never be admitted"
                    );
                }

                self.orders.insert(id, order);
                self.queue.push_back(id);
                info!(order_id = id, items, "Order received");
                let _ = respond_to.send(Ok(id));
                self.drain();
            }
            KitchenRequest::Status { id, respond_to } => {
                let result = match self.orders.get(&id) {
                    Some(order) => {
                        debug!(order_id = id, status = %order.status(), "Status");
                        Ok(order.status())
                    }
                    None => {
                        warn!(order_id = id, "Not found");
                        Err(KitchenError::NotFound(id))
                    }
                };
                let _ = respond_to.send(result);
            }
            KitchenRequest::List { respond_to } => {
                let snapshot: Vec<(OrderId, OrderStatus)> = self
                    .orders
                    .iter()
                    .map(|(id, order)| (*id, order.status()))
                    .collect();
                debug!(orders = snapshot.len(), "List");
                let _ = respond_to.send(Ok(snapshot));
            }
        }
    }

    // =========================================================================
    // Admission
    // =========================================================================

    /// Admission pass over the head of the queue.
    ///
    /// Strict head-of-line blocking: if the head order does not fit the
    /// remaining capacity, the whole pass stops. Orders further back are
    /// never considered, even when they individually would fit. Runs after
    /// every accepted submission and every completion; a redundant pass with
    /// no capacity change admits nothing and is a no-op.
    fn drain(&mut self) {
        while let Some(&head) = self.queue.front() {
            let (items, duration) = match self.orders.get_mut(&head) {
                Some(order) => {
                    let items = order.cart_size();
                    if !can_admit(items, self.preparing_items, self.config.max_preparing_items) {
                        debug!(
                            order_id = head,
                            items,
                            preparing_items = self.preparing_items,
                            "Head does not fit; admission stops"
                        );
                        break;
                    }
                    order.update_status(OrderStatus::Preparing);
                    (items, order.preparation_time())
                }
                None => {
                    // Queue and ledger can only disagree through a logic bug;
                    // drop the stale id rather than stall the queue.
                    warn!(order_id = head, "Queued id missing from ledger");
                    self.queue.pop_front();
                    continue;
                }
            };

            self.queue.pop_front();
            self.preparing.insert(head);
            self.preparing_items += items;
            info!(
                order_id = head,
                items,
                preparing_items = self.preparing_items,
                ?duration,
                "Order admitted to preparation"
            );
            self.spawn_preparation(head, duration);
        }
    }

    /// Spawns the preparation timer for an admitted order.
    ///
    /// The timer task holds no scheduler state, only the order id and a
    /// sender; it fires exactly once per admission.
    fn spawn_preparation(&self, order_id: OrderId, duration: Duration) {
        let done_tx = self.done_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            let _ = done_tx.send(PrepFinished { order_id });
        });
    }

    // =========================================================================
    // Completion
    // =========================================================================

    fn handle_completion(&mut self, done: PrepFinished) {
        let PrepFinished { order_id } = done;
        if !self.preparing.remove(&order_id) {
            // Each admission fires one completion, so this cannot happen
            // without a logic bug; dropping it keeps the counter honest.
            warn!(order_id, "Completion for order not in the preparing set");
            return;
        }
        if let Some(order) = self.orders.get_mut(&order_id) {
            self.preparing_items -= order.cart_size();
            order.update_status(OrderStatus::Delivering);
            info!(
                order_id,
                preparing_items = self.preparing_items,
                "Order out for delivery"
            );
        }
        self.drain();
    }
}
