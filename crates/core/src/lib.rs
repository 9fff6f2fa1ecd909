//! `tilestock-core`: shared domain building blocks.
//!
//! Identifiers, money, and the domain error model. No storage or IO lives here.

pub mod entity;
pub mod error;
pub mod id;
pub mod money;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{CustomerId, PurchaseId, SaleId, TileId};
pub use money::Money;
pub use value_object::ValueObject;
