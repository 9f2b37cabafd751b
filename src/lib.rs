//! # Kitchen Scheduler
//!
//! > **A single-kitchen order-preparation scheduler built on the actor model.**
//!
//! Orders arrive, wait in a FIFO queue, and are admitted into preparation
//! only while aggregate kitchen capacity allows. Admitted orders run an
//! independent preparation timer and transition to `Delivering` when it
//! elapses, freeing their capacity for the next order in line.
//!
//! ## Design Philosophy
//!
//! All mutable scheduler state — the order ledger, the admission queue, the
//! preparing set, the capacity counter — is owned by **one actor task**.
//! Clients talk to it over a channel; it processes messages sequentially, so
//! no locks guard the state and the capacity invariant can never be violated
//! by a race between a submission and a completion.
//!
//! The preparation wait is the only suspending operation, and it never runs
//! inside the actor: each admitted order spawns a timer task that reports
//! back over a completion channel. The completion is a first-class event the
//! actor handles like any other message, not a fire-and-forget continuation.
//!
//! ## Scheduling Contract
//!
//! - **Capacity** is counted in cart items across all preparing orders, not
//!   in orders, and never exceeds the configured maximum.
//! - **Strict FIFO with head-of-line blocking**: if the head of the queue
//!   does not fit, nothing behind it is considered — one large order can hold
//!   back smaller ones that would fit. This is a deliberate fairness
//!   trade-off, not a bug; there is no best-fit look-ahead.
//! - **Status transitions are monotonic**: `Received → Preparing →
//!   Delivering`, never skipped, never reversed.
//! - **Menu priority is data, not behavior**: `FoodOption::priority` is
//!   carried on the menu but never consulted when ordering the queue.
//! - An order with a cart larger than the kitchen's capacity is accepted and
//!   queues forever (logged with a warning at submission).
//!
//! ## Module Tour
//!
//! ### 1. The Data ([`model`])
//! [`Order`](model::Order), [`OrderStatus`](model::OrderStatus), and
//! [`FoodOption`](model::FoodOption). Entities stay data-only; invariants are
//! enforced where transitions are decided, in the actor.
//!
//! ### 2. The Scheduler ([`kitchen`])
//! The heart of the crate: [`KitchenActor`](kitchen::KitchenActor) (event
//! loop, admission drain, preparation timers), the pure
//! [`capacity`](kitchen::capacity) predicate, and the
//! [`KitchenClient`](kitchen::KitchenClient) handle.
//!
//! ### 3. The Orchestrator ([`lifecycle`])
//! [`Kitchen`](lifecycle::Kitchen) spawns the actor, hands out clients, and
//! shuts the system down gracefully. [`setup_tracing`](lifecycle::setup_tracing)
//! wires up structured logging.
//!
//! ### 4. The Menu ([`catalog`])
//! Collaborator-side data: providers, menus, and operating-hours windows.
//! The scheduler never reads it; it exists so callers can build orders from
//! real menu data.
//!
//! ## Quick Start
//!
//! ```ignore
//! use kitchen_scheduler::kitchen::KitchenConfig;
//! use kitchen_scheduler::lifecycle::Kitchen;
//! use kitchen_scheduler::model::Order;
//!
//! let kitchen = Kitchen::new(KitchenConfig::default());
//! let client = kitchen.client();
//!
//! let mut order = Order::new();
//! order.add_to_cart(menu_item, 2);
//!
//! let id = client.submit(order).await?;
//! println!("order {id}: {}", client.status_of(id).await?);
//!
//! kitchen.shutdown().await?;
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```
//!
//! The integration tests drive the preparation timers under tokio's paused
//! virtual time, so the multi-minute scheduling scenarios finish instantly.

pub mod catalog;
pub mod kitchen;
pub mod lifecycle;
pub mod model;
