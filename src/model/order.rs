//! The order entity: cart contents plus lifecycle status.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::model::FoodOption;

/// Unique order identifier, assigned by the kitchen at submission.
///
/// Ids start at 1, increase monotonically, and are never reused within a
/// process lifetime. An order that has not been submitted yet carries id 0.
pub type OrderId = u64;

/// Lifecycle status of an order.
///
/// Transitions are monotonic and unidirectional:
/// `Received → Preparing → Delivering`. The entity performs no validation of
/// its own; the kitchen actor is the only writer after submission and decides
/// every transition (see [`Order::update_status`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Accepted into the kitchen, waiting in the admission queue.
    Received,
    /// Admitted: consuming kitchen capacity while its timer runs.
    Preparing,
    /// Preparation finished. Terminal as far as the kitchen is concerned.
    Delivering,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OrderStatus::Received => "received",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Delivering => "delivering",
        };
        f.write_str(s)
    }
}

/// A customer order: the cart built by the collaborator plus the status
/// driven by the kitchen.
///
/// The cart is populated through [`Order::add_to_cart`] and becomes immutable
/// once the order is submitted: [`submit`](crate::kitchen::KitchenClient::submit)
/// takes the `Order` by value, so ownership moves into the kitchen and the
/// collaborator keeps no handle to mutate it with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// 0 until the kitchen assigns the real id at submission.
    pub id: OrderId,
    cart: Vec<FoodOption>,
    status: OrderStatus,
}

impl Order {
    /// Creates an empty order in the `Received` state.
    pub fn new() -> Self {
        Self {
            id: 0,
            cart: Vec::new(),
            status: OrderStatus::Received,
        }
    }

    /// Appends `quantity` copies of `item` to the cart.
    ///
    /// No upper bound is enforced here; capacity is checked at admission time
    /// by the kitchen. A cart larger than the kitchen's capacity will queue
    /// forever once submitted.
    pub fn add_to_cart(&mut self, item: FoodOption, quantity: u32) {
        for _ in 0..quantity {
            self.cart.push(item.clone());
        }
    }

    /// The cart contents, in insertion order.
    pub fn cart(&self) -> &[FoodOption] {
        &self.cart
    }

    /// Number of item instances in the cart (duplicates counted).
    pub fn cart_size(&self) -> usize {
        self.cart.len()
    }

    /// Total preparation duration: the sum over every item instance in the
    /// cart, duplicates included.
    pub fn preparation_time(&self) -> Duration {
        self.cart.iter().map(|item| item.preparation_time).sum()
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// Unconditional status assignment.
    ///
    /// The entity stays data-only: callers (in practice, only the kitchen
    /// actor once the order is submitted) are responsible for only ever
    /// advancing the status forward.
    pub fn update_status(&mut self, status: OrderStatus) {
        self.status = status;
    }

    /// Builds a priced summary of the cart: per-name quantities, subtotals,
    /// and the order total.
    pub fn summary(&self) -> OrderSummary {
        let mut lines: Vec<SummaryLine> = Vec::new();
        for item in &self.cart {
            match lines.iter().position(|line| line.name == item.name) {
                Some(pos) => {
                    lines[pos].quantity += 1;
                    lines[pos].subtotal += item.price;
                }
                None => lines.push(SummaryLine {
                    name: item.name.clone(),
                    quantity: 1,
                    unit_price: item.price,
                    subtotal: item.price,
                }),
            }
        }
        let total = lines.iter().map(|line| line.subtotal).sum();
        OrderSummary { lines, total }
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::new()
    }
}

/// One summary line: all cart instances of a single menu item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryLine {
    pub name: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub subtotal: f64,
}

/// Priced summary of an order, grouped by item name in first-appearance
/// order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub lines: Vec<SummaryLine>,
    pub total: f64,
}

impl fmt::Display for OrderSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(
                f,
                "{}x {} - ${:.2} each (subtotal ${:.2})",
                line.quantity, line.name, line.unit_price, line.subtotal
            )?;
        }
        write!(f, "Order total: ${:.2}", self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn muffin() -> FoodOption {
        FoodOption::new("Muffin", 2.50, 3, Duration::from_secs(120))
    }

    fn coffee() -> FoodOption {
        FoodOption::new("Caffè", 1.00, 5, Duration::from_secs(30))
    }

    #[test]
    fn add_to_cart_appends_quantity_copies() {
        let mut order = Order::new();
        order.add_to_cart(muffin(), 3);
        order.add_to_cart(coffee(), 1);

        assert_eq!(order.cart_size(), 4);
        assert_eq!(order.cart()[0].name, "Muffin");
        assert_eq!(order.cart()[3].name, "Caffè");
    }

    #[test]
    fn preparation_time_sums_every_instance() {
        let mut order = Order::new();
        order.add_to_cart(muffin(), 2);
        order.add_to_cart(coffee(), 1);

        assert_eq!(order.preparation_time(), Duration::from_secs(270));
    }

    #[test]
    fn empty_cart_prepares_in_zero_time() {
        let order = Order::new();
        assert_eq!(order.cart_size(), 0);
        assert_eq!(order.preparation_time(), Duration::ZERO);
    }

    #[test]
    fn new_order_starts_received() {
        let order = Order::new();
        assert_eq!(order.status(), OrderStatus::Received);
        assert_eq!(order.id, 0);
    }

    #[test]
    fn summary_groups_by_name_and_totals() {
        let mut order = Order::new();
        order.add_to_cart(muffin(), 2);
        order.add_to_cart(coffee(), 1);
        order.add_to_cart(muffin(), 1);

        let summary = order.summary();
        assert_eq!(summary.lines.len(), 2);

        let muffins = &summary.lines[0];
        assert_eq!(muffins.name, "Muffin");
        assert_eq!(muffins.quantity, 3);
        assert_eq!(muffins.subtotal, 7.50);

        assert_eq!(summary.total, 8.50);
        let rendered = summary.to_string();
        assert!(rendered.contains("3x Muffin - $2.50 each (subtotal $7.50)"));
        assert!(rendered.contains("Order total: $8.50"));
    }
}
