//! Menu item data consumed read-only by the scheduler.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A single menu item as offered by a food provider.
///
/// The scheduler reads exactly two things from this type: the fact that one
/// `FoodOption` occupies one cart slot (capacity is counted in cart items),
/// and `preparation_time`, which contributes to the order's total preparation
/// duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodOption {
    pub name: String,
    pub price: f64,
    /// Recorded on the menu but never consulted for scheduling.
    /// Admission order is strictly first-come-first-served.
    pub priority: u8,
    pub preparation_time: Duration,
}

impl FoodOption {
    /// Creates a new menu item.
    ///
    /// # Arguments
    /// * `name` - Display name of the item
    /// * `price` - Unit price
    /// * `priority` - Menu priority (display data only, see field docs)
    /// * `preparation_time` - Time one instance takes to prepare
    pub fn new(
        name: impl Into<String>,
        price: f64,
        priority: u8,
        preparation_time: Duration,
    ) -> Self {
        Self {
            name: name.into(),
            price,
            priority,
            preparation_time,
        }
    }
}
