//! Parties domain module: customers.
//!
//! Suppliers are not modelled as records; purchases carry a free-text supplier name.

pub mod customer;

pub use customer::{Customer, CustomerDraft};
