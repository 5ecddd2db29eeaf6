//! Inventory domain module.
//!
//! Stock lines keyed by article id, with the business rules for receiving
//! goods, correcting line information and reserving/releasing stock for
//! orders. Deterministic domain logic only (no IO, no storage).

pub mod stock;

pub use stock::{Inventory, Receipt};
