use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tilestock_core::error::{require_positive, require_present};
use tilestock_core::{CustomerId, DomainResult, Entity, Money, SaleId, TileId};
use tilestock_inventory::StockMovement;

/// A recorded sale. Immutable once created.
///
/// `total_price` and `date` are taken from the caller as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sale {
    pub id: SaleId,
    pub customer_id: CustomerId,
    pub tile_id: TileId,
    pub quantity: i64,
    pub total_price: Money,
    pub date: DateTime<Utc>,
}

impl Entity for Sale {
    type Id = SaleId;
    const KIND: &'static str = "sale";

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Sale {
    /// Stock movement this sale causes on its tile.
    pub fn movement(&self) -> StockMovement {
        StockMovement::Outbound(self.quantity)
    }
}

/// A sale as submitted for recording.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleDraft {
    pub customer_id: CustomerId,
    pub tile_id: TileId,
    pub quantity: i64,
    pub total_price: Money,
    pub date: DateTime<Utc>,
}

impl SaleDraft {
    pub fn validate(&self) -> DomainResult<()> {
        require_present("customer_id", self.customer_id.as_str())?;
        require_present("tile_id", self.tile_id.as_str())?;
        require_positive("quantity", self.quantity)?;
        Ok(())
    }

    pub fn into_sale(self, id: SaleId) -> Sale {
        Sale {
            id,
            customer_id: self.customer_id,
            tile_id: self.tile_id,
            quantity: self.quantity,
            total_price: self.total_price,
            date: self.date,
        }
    }
}

/// Price of `quantity` units at `unit_price`.
pub fn quote_total(unit_price: Money, quantity: i64) -> Money {
    unit_price.times(quantity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilestock_core::DomainError;

    fn draft(quantity: i64) -> SaleDraft {
        SaleDraft {
            customer_id: CustomerId::from("c1"),
            tile_id: TileId::from("t1"),
            quantity,
            total_price: Money::from_cents(62_500),
            date: Utc::now(),
        }
    }

    #[test]
    fn sale_moves_stock_outbound() {
        let sale = draft(50).into_sale(SaleId::from("s2"));
        assert_eq!(sale.movement(), StockMovement::Outbound(50));
        assert_eq!(sale.movement().delta(), -50);
    }

    #[test]
    fn draft_requires_customer_tile_and_positive_quantity() {
        assert!(draft(1).validate().is_ok());
        assert!(matches!(draft(0).validate(), Err(DomainError::Validation(_))));

        let mut d = draft(5);
        d.customer_id = CustomerId::from("");
        assert!(d.validate().is_err());

        let mut d = draft(5);
        d.tile_id = TileId::from(" ");
        assert!(d.validate().is_err());
    }

    #[test]
    fn quote_multiplies_unit_price() {
        assert_eq!(quote_total(Money::from_cents(1250), 50), Money::from_cents(62_500));
        assert_eq!(quote_total(Money::from_cents(875), 0), Money::ZERO);
    }
}
