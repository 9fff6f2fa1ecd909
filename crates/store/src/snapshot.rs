//! Whole-store snapshots and the demo data set.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tilestock_core::{CustomerId, Money, PurchaseId, SaleId, TileId};
use tilestock_inventory::{Tile, UnitType};
use tilestock_parties::Customer;
use tilestock_purchasing::Purchase;
use tilestock_sales::Sale;

/// Every record in the store, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    #[serde(default)]
    pub tiles: Vec<Tile>,
    #[serde(default)]
    pub customers: Vec<Customer>,
    #[serde(default)]
    pub sales: Vec<Sale>,
    #[serde(default)]
    pub purchases: Vec<Purchase>,
}

impl StoreSnapshot {
    /// Showroom demo records.
    ///
    /// The sale and purchase are settled history: tile quantities already
    /// reflect them, so restoring this snapshot does not adjust stock.
    pub fn demo(now: DateTime<Utc>) -> Self {
        let tile = |id: &str, name: &str, sku: &str, quantity, unit_type, cents, description: &str| Tile {
            id: TileId::from(id),
            name: name.to_string(),
            sku: sku.to_string(),
            quantity,
            unit_type,
            price: Money::from_cents(cents),
            description: Some(description.to_string()),
        };
        let customer = |id: &str, name: &str, email: &str, phone: &str, address: &str| Customer {
            id: CustomerId::from(id),
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            address: address.to_string(),
        };

        Self {
            tiles: vec![
                tile(
                    "t1",
                    "Calacatta Gold Marble",
                    "CGM-001",
                    150,
                    UnitType::SquareFeet,
                    1250,
                    "Elegant white marble with gold veining.",
                ),
                tile(
                    "t2",
                    "Nero Marquina Porcelain",
                    "NMP-002",
                    300,
                    UnitType::Piece,
                    875,
                    "Durable black porcelain with white streaks.",
                ),
                tile(
                    "t3",
                    "Classic Subway Tile",
                    "CST-003",
                    100,
                    UnitType::Box,
                    2500,
                    "Timeless white ceramic subway tiles.",
                ),
            ],
            customers: vec![
                customer(
                    "c1",
                    "John Doe",
                    "john.doe@example.com",
                    "123-456-7890",
                    "123 Main St, Anytown, USA",
                ),
                customer(
                    "c2",
                    "Jane Smith",
                    "jane.smith@example.com",
                    "098-765-4321",
                    "456 Oak Ave, Somewhere, USA",
                ),
            ],
            sales: vec![Sale {
                id: SaleId::from("s1"),
                customer_id: CustomerId::from("c1"),
                tile_id: TileId::from("t1"),
                quantity: 50,
                total_price: Money::from_cents(62_500),
                date: now,
            }],
            purchases: vec![Purchase {
                id: PurchaseId::from("p1"),
                tile_id: TileId::from("t2"),
                supplier_name: "Global Ceramics Inc.".to_string(),
                quantity: 200,
                date: now,
            }],
        }
    }
}
