use serde::{Deserialize, Serialize};

use tilestock_core::Money;
use tilestock_inventory::Tile;
use tilestock_sales::Sale;

/// Dashboard headline figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub tile_count: usize,
    pub customer_count: usize,
    pub sale_count: usize,
    pub purchase_count: usize,
    /// Sum of all tile quantities, regardless of unit type. Negative stock counts against it.
    pub total_stock: i64,
    pub sales_revenue: Money,
}

impl DashboardSummary {
    pub fn from_records(
        tiles: &[Tile],
        customer_count: usize,
        sales: &[Sale],
        purchase_count: usize,
    ) -> Self {
        Self {
            tile_count: tiles.len(),
            customer_count,
            sale_count: sales.len(),
            purchase_count,
            total_stock: tiles.iter().fold(0i64, |acc, t| acc.saturating_add(t.quantity)),
            sales_revenue: sales.iter().map(|s| s.total_price).sum(),
        }
    }
}
