//! Record store: the single owner of tiles, customers, sales and purchases.
//!
//! The store is the only place tile quantities change. Recording a sale takes
//! stock out of the referenced tile, recording a purchase puts stock back in.
//! Transactions that reference an unknown tile are still recorded; the outcome
//! is reported through [`StockAdjustment::TileMissing`] instead of an error.

pub mod error;
pub mod in_memory;
pub mod record_store;
pub mod sequence;
pub mod snapshot;
pub mod summary;

pub use error::{StoreError, StoreResult};
pub use in_memory::InMemoryRecordStore;
pub use record_store::{RecordStore, Recorded, StockAdjustment, UNKNOWN_NAME};
pub use snapshot::StoreSnapshot;
pub use summary::DashboardSummary;
