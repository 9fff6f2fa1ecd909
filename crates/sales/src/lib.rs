//! Sales domain module.
//!
//! A sale records tiles leaving stock for a customer.

pub mod sale;

pub use sale::{quote_total, Sale, SaleDraft};
