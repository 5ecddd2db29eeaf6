//! Parties: the customers orders are shipped to and the staff who handle them.

pub mod client;
pub mod staff;

pub use client::Client;
pub use staff::{Actor, Courier, Employee};
