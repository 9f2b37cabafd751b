//! Pure data types handled by the kitchen: menu items and orders.

pub mod food;
pub mod order;

pub use food::*;
pub use order::*;
