use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tilestock_core::{CustomerId, DomainResult, Money, TileId};
use tilestock_inventory::{Tile, TileDraft, UnitType};
use tilestock_purchasing::{Purchase, PurchaseDraft};
use tilestock_sales::{Sale, SaleDraft};
use tilestock_store::StockAdjustment;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CreateTileRequest {
    pub name: String,
    pub sku: String,
    #[serde(default)]
    pub quantity: i64,
    /// `piece`, `box` or `square feet` (aliases `sqft`, `square-feet`); defaults to `piece`.
    #[serde(default)]
    pub unit_type: Option<String>,
    #[serde(default)]
    pub price: Option<PriceInput>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Unit price as integer cents (`1250`) or a decimal string (`"12.50"`).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PriceInput {
    Cents(u64),
    Decimal(String),
}

impl PriceInput {
    pub fn into_money(self) -> DomainResult<Money> {
        match self {
            PriceInput::Cents(cents) => Ok(Money::from_cents(cents)),
            PriceInput::Decimal(s) => s.parse(),
        }
    }
}

impl CreateTileRequest {
    pub fn into_draft(self) -> DomainResult<TileDraft> {
        let unit_type = match self.unit_type {
            Some(raw) => raw.parse()?,
            None => UnitType::Piece,
        };
        let price = match self.price {
            Some(price) => price.into_money()?,
            None => Money::ZERO,
        };
        Ok(TileDraft {
            name: self.name,
            sku: self.sku,
            quantity: self.quantity,
            unit_type,
            price,
            description: self.description,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateSaleRequest {
    pub customer_id: String,
    pub tile_id: String,
    pub quantity: i64,
    /// Total in cents. Quoted from the tile's price when omitted.
    #[serde(default)]
    pub total_price: Option<Money>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

impl CreateSaleRequest {
    pub fn into_draft(self, quoted_total: Money, now: DateTime<Utc>) -> SaleDraft {
        SaleDraft {
            customer_id: CustomerId::from(self.customer_id),
            tile_id: TileId::from(self.tile_id),
            quantity: self.quantity,
            total_price: self.total_price.unwrap_or(quoted_total),
            date: self.date.unwrap_or(now),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreatePurchaseRequest {
    pub tile_id: String,
    pub supplier_name: String,
    pub quantity: i64,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

impl CreatePurchaseRequest {
    pub fn into_draft(self, now: DateTime<Utc>) -> PurchaseDraft {
        PurchaseDraft {
            tile_id: TileId::from(self.tile_id),
            supplier_name: self.supplier_name,
            quantity: self.quantity,
            date: self.date.unwrap_or(now),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DescribeRequest {
    pub name: String,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct ItemsResponse<T> {
    pub items: Vec<T>,
}

#[derive(Debug, Serialize)]
pub struct SaleRecordedResponse {
    pub sale: Sale,
    pub stock_adjustment: StockAdjustment,
}

#[derive(Debug, Serialize)]
pub struct PurchaseRecordedResponse {
    pub purchase: Purchase,
    pub stock_adjustment: StockAdjustment,
}

/// Sale row with display names resolved (`N/A` for dangling references).
#[derive(Debug, Serialize)]
pub struct SaleRow {
    #[serde(flatten)]
    pub sale: Sale,
    pub customer_name: String,
    pub tile_name: String,
}

/// Purchase row with the tile name resolved.
#[derive(Debug, Serialize)]
pub struct PurchaseRow {
    #[serde(flatten)]
    pub purchase: Purchase,
    pub tile_name: String,
}

#[derive(Debug, Serialize)]
pub struct DescriptionResponse {
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct TileResponse {
    #[serde(flatten)]
    pub tile: Tile,
    /// Price formatted with two decimals, for display.
    pub price_display: String,
}

impl From<Tile> for TileResponse {
    fn from(tile: Tile) -> Self {
        let price_display = tile.price.to_string();
        Self { tile, price_display }
    }
}
