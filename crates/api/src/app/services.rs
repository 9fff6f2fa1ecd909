use std::sync::Arc;

use chrono::Utc;

use tilestock_ai::{generator_from_config, AiError, DescriptionGenerator};
use tilestock_core::{CustomerId, DomainError, Money, TileId};
use tilestock_inventory::Tile;
use tilestock_parties::{Customer, CustomerDraft};
use tilestock_purchasing::Purchase;
use tilestock_sales::{quote_total, Sale};
use tilestock_store::{InMemoryRecordStore, RecordStore, Recorded};

use crate::app::dto;
use crate::app::errors::ApiError;
use crate::config::ApiConfig;

/// Shared handles behind every route.
#[derive(Clone)]
pub struct AppServices {
    store: Arc<dyn RecordStore>,
    descriptions: Arc<dyn DescriptionGenerator>,
}

impl AppServices {
    pub fn new(store: Arc<dyn RecordStore>, descriptions: Arc<dyn DescriptionGenerator>) -> Self {
        Self { store, descriptions }
    }

    /// Wire the in-memory store and the configured description generator.
    pub fn from_config(config: &ApiConfig) -> Result<Self, AiError> {
        let store: Arc<dyn RecordStore> = if config.seed_demo {
            Arc::new(InMemoryRecordStore::with_demo_data())
        } else {
            Arc::new(InMemoryRecordStore::new())
        };
        let descriptions = generator_from_config(config.descriptions.clone())?;
        Ok(Self::new(store, descriptions))
    }

    pub fn store(&self) -> &dyn RecordStore {
        self.store.as_ref()
    }

    pub fn add_tile(&self, body: dto::CreateTileRequest) -> Result<Tile, ApiError> {
        let draft = body.into_draft()?;
        draft.validate()?;
        Ok(self.store.add_tile(draft)?)
    }

    pub fn get_tile(&self, id: &str) -> Result<Tile, ApiError> {
        let id = TileId::from(id);
        self.store
            .get_tile(&id)?
            .ok_or_else(|| DomainError::not_found("tile", id.as_str()).into())
    }

    pub fn add_customer(&self, draft: CustomerDraft) -> Result<Customer, ApiError> {
        draft.validate()?;
        Ok(self.store.add_customer(draft)?)
    }

    pub fn get_customer(&self, id: &str) -> Result<Customer, ApiError> {
        let id = CustomerId::from(id);
        self.store
            .get_customer(&id)?
            .ok_or_else(|| DomainError::not_found("customer", id.as_str()).into())
    }

    /// Record a sale, quoting the total from the tile price when the caller left it out.
    pub fn record_sale(&self, body: dto::CreateSaleRequest) -> Result<Recorded<Sale>, ApiError> {
        let quoted = match body.total_price {
            Some(_) => Money::ZERO,
            None => self
                .store
                .get_tile(&TileId::from(body.tile_id.as_str()))?
                .map(|t| quote_total(t.price, body.quantity))
                .unwrap_or(Money::ZERO),
        };

        let draft = body.into_draft(quoted, Utc::now());
        draft.validate()?;
        Ok(self.store.add_sale(draft)?)
    }

    pub fn record_purchase(
        &self,
        body: dto::CreatePurchaseRequest,
    ) -> Result<Recorded<Purchase>, ApiError> {
        let draft = body.into_draft(Utc::now());
        draft.validate()?;
        Ok(self.store.add_purchase(draft)?)
    }

    pub fn sale_rows(&self) -> Result<Vec<dto::SaleRow>, ApiError> {
        let mut rows = Vec::new();
        for sale in self.store.list_sales()? {
            let customer_name = self.store.customer_name(&sale.customer_id)?;
            let tile_name = self.store.tile_name(&sale.tile_id)?;
            rows.push(dto::SaleRow {
                sale,
                customer_name,
                tile_name,
            });
        }
        Ok(rows)
    }

    pub fn purchase_rows(&self) -> Result<Vec<dto::PurchaseRow>, ApiError> {
        let mut rows = Vec::new();
        for purchase in self.store.list_purchases()? {
            let tile_name = self.store.tile_name(&purchase.tile_id)?;
            rows.push(dto::PurchaseRow { purchase, tile_name });
        }
        Ok(rows)
    }

    /// Never fails; the generator degrades to a fallback string.
    pub async fn describe(&self, name: &str) -> String {
        self.descriptions.describe(name).await
    }
}
