//! Purchasing domain module.
//!
//! A purchase records tiles arriving from a supplier, named in free text.

pub mod purchase;

pub use purchase::{Purchase, PurchaseDraft};
