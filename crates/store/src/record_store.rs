use std::sync::Arc;

use serde::{Deserialize, Serialize};

use tilestock_core::{CustomerId, TileId};
use tilestock_inventory::{Tile, TileDraft};
use tilestock_parties::{Customer, CustomerDraft};
use tilestock_purchasing::{Purchase, PurchaseDraft};
use tilestock_sales::{Sale, SaleDraft};

use crate::error::StoreResult;
use crate::summary::DashboardSummary;

/// Display name used when a referenced record does not exist.
pub const UNKNOWN_NAME: &str = "N/A";

/// What recording a transaction did to its tile's stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StockAdjustment {
    /// The tile existed and its quantity moved from `previous` to `current`.
    Applied {
        tile_id: TileId,
        previous: i64,
        current: i64,
    },
    /// No tile has this id; the transaction was recorded without touching stock.
    TileMissing { tile_id: TileId },
}

impl StockAdjustment {
    pub fn is_applied(&self) -> bool {
        matches!(self, StockAdjustment::Applied { .. })
    }
}

/// A newly created transaction plus its effect on stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recorded<T> {
    pub record: T,
    pub stock_adjustment: StockAdjustment,
}

/// Record store contract.
///
/// Lists return snapshot copies in insertion order and never mutate state.
/// Each `add_*` is atomic with respect to other callers: id allocation, the
/// append, and any tile quantity change happen as one step.
pub trait RecordStore: Send + Sync {
    fn list_tiles(&self) -> StoreResult<Vec<Tile>>;
    fn add_tile(&self, draft: TileDraft) -> StoreResult<Tile>;
    fn get_tile(&self, id: &TileId) -> StoreResult<Option<Tile>>;

    fn list_customers(&self) -> StoreResult<Vec<Customer>>;
    fn add_customer(&self, draft: CustomerDraft) -> StoreResult<Customer>;
    fn get_customer(&self, id: &CustomerId) -> StoreResult<Option<Customer>>;

    fn list_sales(&self) -> StoreResult<Vec<Sale>>;
    /// Record a sale and take its quantity out of the referenced tile (no floor).
    fn add_sale(&self, draft: SaleDraft) -> StoreResult<Recorded<Sale>>;

    fn list_purchases(&self) -> StoreResult<Vec<Purchase>>;
    /// Record a purchase and add its quantity to the referenced tile.
    fn add_purchase(&self, draft: PurchaseDraft) -> StoreResult<Recorded<Purchase>>;

    /// Headline counts and totals for the dashboard.
    fn summary(&self) -> StoreResult<DashboardSummary> {
        Ok(DashboardSummary::from_records(
            &self.list_tiles()?,
            self.list_customers()?.len(),
            &self.list_sales()?,
            self.list_purchases()?.len(),
        ))
    }

    /// Tile name for display, or [`UNKNOWN_NAME`].
    fn tile_name(&self, id: &TileId) -> StoreResult<String> {
        Ok(self
            .get_tile(id)?
            .map(|t| t.name)
            .unwrap_or_else(|| UNKNOWN_NAME.to_string()))
    }

    /// Customer name for display, or [`UNKNOWN_NAME`].
    fn customer_name(&self, id: &CustomerId) -> StoreResult<String> {
        Ok(self
            .get_customer(id)?
            .map(|c| c.name)
            .unwrap_or_else(|| UNKNOWN_NAME.to_string()))
    }
}

impl<S> RecordStore for Arc<S>
where
    S: RecordStore + ?Sized,
{
    fn list_tiles(&self) -> StoreResult<Vec<Tile>> {
        (**self).list_tiles()
    }

    fn add_tile(&self, draft: TileDraft) -> StoreResult<Tile> {
        (**self).add_tile(draft)
    }

    fn get_tile(&self, id: &TileId) -> StoreResult<Option<Tile>> {
        (**self).get_tile(id)
    }

    fn list_customers(&self) -> StoreResult<Vec<Customer>> {
        (**self).list_customers()
    }

    fn add_customer(&self, draft: CustomerDraft) -> StoreResult<Customer> {
        (**self).add_customer(draft)
    }

    fn get_customer(&self, id: &CustomerId) -> StoreResult<Option<Customer>> {
        (**self).get_customer(id)
    }

    fn list_sales(&self) -> StoreResult<Vec<Sale>> {
        (**self).list_sales()
    }

    fn add_sale(&self, draft: SaleDraft) -> StoreResult<Recorded<Sale>> {
        (**self).add_sale(draft)
    }

    fn list_purchases(&self) -> StoreResult<Vec<Purchase>> {
        (**self).list_purchases()
    }

    fn add_purchase(&self, draft: PurchaseDraft) -> StoreResult<Recorded<Purchase>> {
        (**self).add_purchase(draft)
    }

    fn summary(&self) -> StoreResult<DashboardSummary> {
        (**self).summary()
    }
}
