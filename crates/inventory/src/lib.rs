//! Inventory domain module.
//!
//! Tiles, their unit of measure, and the stock-movement rule applied when a
//! sale or purchase is recorded. Pure domain logic (no IO, no storage).

pub mod tile;

pub use tile::{StockMovement, Tile, TileDraft, UnitType};
