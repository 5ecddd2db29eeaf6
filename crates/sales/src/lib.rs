//! Customer orders: line snapshots, totals and lifecycle status.
//!
//! Orders are built by callers and handed to the warehouse; the warehouse
//! decides where an order currently lives.

pub mod order;

pub use order::{Order, OrderStatus};
