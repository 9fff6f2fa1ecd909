use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tilestock_core::error::{require_positive, require_present};
use tilestock_core::{DomainResult, Entity, PurchaseId, TileId};
use tilestock_inventory::StockMovement;

/// A recorded purchase. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Purchase {
    pub id: PurchaseId,
    pub tile_id: TileId,
    pub supplier_name: String,
    pub quantity: i64,
    pub date: DateTime<Utc>,
}

impl Entity for Purchase {
    type Id = PurchaseId;
    const KIND: &'static str = "purchase";

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Purchase {
    /// Stock movement this purchase causes on its tile.
    pub fn movement(&self) -> StockMovement {
        StockMovement::Inbound(self.quantity)
    }
}

/// A purchase as submitted for recording.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseDraft {
    pub tile_id: TileId,
    pub supplier_name: String,
    pub quantity: i64,
    pub date: DateTime<Utc>,
}

impl PurchaseDraft {
    pub fn validate(&self) -> DomainResult<()> {
        require_present("supplier_name", &self.supplier_name)?;
        require_present("tile_id", self.tile_id.as_str())?;
        require_positive("quantity", self.quantity)?;
        Ok(())
    }

    pub fn into_purchase(self, id: PurchaseId) -> Purchase {
        Purchase {
            id,
            tile_id: self.tile_id,
            supplier_name: self.supplier_name,
            quantity: self.quantity,
            date: self.date,
        }
    }
}
