use core::str::FromStr;
use serde::{Deserialize, Serialize};

use tilestock_core::error::require_present;
use tilestock_core::{DomainError, DomainResult, Entity, Money, TileId, ValueObject};

/// Unit a tile's quantity and price are denominated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitType {
    #[serde(rename = "piece")]
    Piece,
    #[serde(rename = "box")]
    Box,
    #[serde(rename = "square feet", alias = "sqft", alias = "square-feet")]
    SquareFeet,
}

impl ValueObject for UnitType {}

impl UnitType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitType::Piece => "piece",
            UnitType::Box => "box",
            UnitType::SquareFeet => "square feet",
        }
    }
}

impl core::fmt::Display for UnitType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "piece" => Ok(UnitType::Piece),
            "box" => Ok(UnitType::Box),
            "square feet" | "square-feet" | "sqft" => Ok(UnitType::SquareFeet),
            other => Err(DomainError::invalid_value(format!(
                "unit type '{other}' (expected piece, box or square feet)"
            ))),
        }
    }
}

/// A stocked tile.
///
/// `quantity` is signed: the store never clamps it, so oversold tiles go negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub id: TileId,
    pub name: String,
    pub sku: String,
    pub quantity: i64,
    pub unit_type: UnitType,
    pub price: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Entity for Tile {
    type Id = TileId;
    const KIND: &'static str = "tile";

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Tile {
    /// Apply a stock movement in place and return the resulting quantity.
    pub fn apply(&mut self, movement: StockMovement) -> i64 {
        self.quantity = movement.apply_to(self.quantity);
        self.quantity
    }
}

/// A tile as submitted for creation (everything but the id).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileDraft {
    pub name: String,
    pub sku: String,
    pub quantity: i64,
    pub unit_type: UnitType,
    pub price: Money,
    #[serde(default)]
    pub description: Option<String>,
}

impl TileDraft {
    /// Presence checks applied at the boundary (the store itself accepts anything).
    pub fn validate(&self) -> DomainResult<()> {
        require_present("name", &self.name)?;
        require_present("sku", &self.sku)?;
        Ok(())
    }

    pub fn into_tile(self, id: TileId) -> Tile {
        Tile {
            id,
            name: self.name,
            sku: self.sku,
            quantity: self.quantity,
            unit_type: self.unit_type,
            price: self.price,
            description: self.description.filter(|d| !d.trim().is_empty()),
        }
    }
}

/// Stock movement caused by a transaction.
///
/// Sales take stock out, purchases bring it in. There is no floor: a sale
/// larger than the stock on hand leaves a negative quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "direction", content = "quantity", rename_all = "lowercase")]
pub enum StockMovement {
    Outbound(i64),
    Inbound(i64),
}

impl ValueObject for StockMovement {}

impl StockMovement {
    /// Signed change to the stock level.
    pub fn delta(&self) -> i64 {
        match *self {
            StockMovement::Outbound(n) => n.saturating_neg(),
            StockMovement::Inbound(n) => n,
        }
    }

    pub fn apply_to(&self, quantity: i64) -> i64 {
        quantity.saturating_add(self.delta())
    }
}
