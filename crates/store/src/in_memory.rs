use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use tracing::{debug, info, warn};

use tilestock_core::{CustomerId, Entity, PurchaseId, SaleId, TileId};
use tilestock_inventory::{StockMovement, Tile, TileDraft};
use tilestock_parties::{Customer, CustomerDraft};
use tilestock_purchasing::{Purchase, PurchaseDraft};
use tilestock_sales::{Sale, SaleDraft};

use crate::error::{StoreError, StoreResult};
use crate::record_store::{RecordStore, Recorded, StockAdjustment};
use crate::sequence::IdSequence;
use crate::snapshot::StoreSnapshot;
use crate::summary::DashboardSummary;

#[derive(Debug, Default)]
struct Collections {
    tiles: Vec<Tile>,
    customers: Vec<Customer>,
    sales: Vec<Sale>,
    purchases: Vec<Purchase>,
    tile_ids: IdSequence,
    customer_ids: IdSequence,
    sale_ids: IdSequence,
    purchase_ids: IdSequence,
}

impl Collections {
    /// Read-modify-write of one tile's quantity. Callers hold the write lock.
    fn adjust_stock(&mut self, tile_id: &TileId, movement: StockMovement) -> StockAdjustment {
        match self.tiles.iter_mut().find(|t| &t.id == tile_id) {
            Some(tile) => {
                let previous = tile.quantity;
                let current = tile.apply(movement);
                StockAdjustment::Applied {
                    tile_id: tile_id.clone(),
                    previous,
                    current,
                }
            }
            None => StockAdjustment::TileMissing {
                tile_id: tile_id.clone(),
            },
        }
    }
}

fn find_by_id<'a, E: Entity>(records: &'a [E], id: &E::Id) -> Option<&'a E> {
    records.iter().find(|r| r.id() == id)
}

fn log_adjustment<E: Entity>(record: &E, adjustment: &StockAdjustment) {
    match adjustment {
        StockAdjustment::Applied {
            tile_id,
            previous,
            current,
        } => {
            info!(
                kind = E::KIND,
                id = %record.id(),
                tile_id = %tile_id,
                previous,
                current,
                "stock adjusted"
            );
            if *current < 0 {
                warn!(tile_id = %tile_id, quantity = current, "tile stock is negative");
            }
        }
        StockAdjustment::TileMissing { tile_id } => {
            warn!(
                kind = E::KIND,
                id = %record.id(),
                tile_id = %tile_id,
                "recorded against unknown tile; stock unchanged"
            );
        }
    }
}

/// In-memory record store.
///
/// All four collections live behind one lock so the tile read-modify-write in
/// `add_sale`/`add_purchase` cannot interleave with another writer. Data lives
/// for the lifetime of the value.
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    inner: RwLock<Collections>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the showroom demo records.
    pub fn with_demo_data() -> Self {
        Self::from_snapshot(StoreSnapshot::demo(Utc::now()))
    }

    /// Restore records verbatim. No stock adjustments are applied.
    ///
    /// Id sequences are advanced past any allocated-shape id already present,
    /// so later allocations never reuse one.
    pub fn from_snapshot(snapshot: StoreSnapshot) -> Self {
        let mut c = Collections::default();
        for t in &snapshot.tiles {
            c.tile_ids.observe(t.id.sequence());
        }
        for cu in &snapshot.customers {
            c.customer_ids.observe(cu.id.sequence());
        }
        for s in &snapshot.sales {
            c.sale_ids.observe(s.id.sequence());
        }
        for p in &snapshot.purchases {
            c.purchase_ids.observe(p.id.sequence());
        }

        debug!(
            tiles = snapshot.tiles.len(),
            customers = snapshot.customers.len(),
            sales = snapshot.sales.len(),
            purchases = snapshot.purchases.len(),
            "record store restored from snapshot"
        );

        c.tiles = snapshot.tiles;
        c.customers = snapshot.customers;
        c.sales = snapshot.sales;
        c.purchases = snapshot.purchases;

        Self {
            inner: RwLock::new(c),
        }
    }

    /// Consistent copy of every collection.
    pub fn snapshot(&self) -> StoreResult<StoreSnapshot> {
        let c = self.read()?;
        Ok(StoreSnapshot {
            tiles: c.tiles.clone(),
            customers: c.customers.clone(),
            sales: c.sales.clone(),
            purchases: c.purchases.clone(),
        })
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Collections>> {
        self.inner
            .read()
            .map_err(|e| StoreError::Poisoned(e.to_string()))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Collections>> {
        self.inner
            .write()
            .map_err(|e| StoreError::Poisoned(e.to_string()))
    }
}

impl RecordStore for InMemoryRecordStore {
    fn list_tiles(&self) -> StoreResult<Vec<Tile>> {
        Ok(self.read()?.tiles.clone())
    }

    fn add_tile(&self, draft: TileDraft) -> StoreResult<Tile> {
        let mut c = self.write()?;
        let id = TileId::from_sequence(c.tile_ids.allocate(Tile::KIND)?);
        let tile = draft.into_tile(id);
        c.tiles.push(tile.clone());
        info!(id = %tile.id, sku = %tile.sku, quantity = tile.quantity, "tile added");
        Ok(tile)
    }

    fn get_tile(&self, id: &TileId) -> StoreResult<Option<Tile>> {
        Ok(find_by_id(&self.read()?.tiles, id).cloned())
    }

    fn list_customers(&self) -> StoreResult<Vec<Customer>> {
        Ok(self.read()?.customers.clone())
    }

    fn add_customer(&self, draft: CustomerDraft) -> StoreResult<Customer> {
        let mut c = self.write()?;
        let id = CustomerId::from_sequence(c.customer_ids.allocate(Customer::KIND)?);
        let customer = draft.into_customer(id);
        c.customers.push(customer.clone());
        info!(id = %customer.id, "customer added");
        Ok(customer)
    }

    fn get_customer(&self, id: &CustomerId) -> StoreResult<Option<Customer>> {
        Ok(find_by_id(&self.read()?.customers, id).cloned())
    }

    fn list_sales(&self) -> StoreResult<Vec<Sale>> {
        Ok(self.read()?.sales.clone())
    }

    fn add_sale(&self, draft: SaleDraft) -> StoreResult<Recorded<Sale>> {
        let mut c = self.write()?;
        let id = SaleId::from_sequence(c.sale_ids.allocate(Sale::KIND)?);
        let sale = draft.into_sale(id);
        c.sales.push(sale.clone());
        let stock_adjustment = c.adjust_stock(&sale.tile_id, sale.movement());
        drop(c);

        log_adjustment(&sale, &stock_adjustment);
        Ok(Recorded {
            record: sale,
            stock_adjustment,
        })
    }

    fn list_purchases(&self) -> StoreResult<Vec<Purchase>> {
        Ok(self.read()?.purchases.clone())
    }

    fn add_purchase(&self, draft: PurchaseDraft) -> StoreResult<Recorded<Purchase>> {
        let mut c = self.write()?;
        let id = PurchaseId::from_sequence(c.purchase_ids.allocate(Purchase::KIND)?);
        let purchase = draft.into_purchase(id);
        c.purchases.push(purchase.clone());
        let stock_adjustment = c.adjust_stock(&purchase.tile_id, purchase.movement());
        drop(c);

        log_adjustment(&purchase, &stock_adjustment);
        Ok(Recorded {
            record: purchase,
            stock_adjustment,
        })
    }

    fn summary(&self) -> StoreResult<DashboardSummary> {
        let c = self.read()?;
        Ok(DashboardSummary::from_records(
            &c.tiles,
            c.customers.len(),
            &c.sales,
            c.purchases.len(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use chrono::{DateTime, Utc};
    use proptest::prelude::*;
    use tilestock_core::Money;
    use tilestock_inventory::UnitType;

    use super::*;
    use crate::record_store::UNKNOWN_NAME;

    fn test_time() -> DateTime<Utc> {
        Utc::now()
    }

    fn tile_draft(name: &str, quantity: i64) -> TileDraft {
        TileDraft {
            name: name.to_string(),
            sku: format!("SKU-{name}"),
            quantity,
            unit_type: UnitType::Piece,
            price: Money::from_cents(500),
            description: None,
        }
    }

    fn sale_draft(tile_id: &str, quantity: i64) -> SaleDraft {
        SaleDraft {
            customer_id: CustomerId::from("c1"),
            tile_id: TileId::from(tile_id),
            quantity,
            total_price: Money::ZERO,
            date: test_time(),
        }
    }

    fn purchase_draft(tile_id: &str, quantity: i64) -> PurchaseDraft {
        PurchaseDraft {
            tile_id: TileId::from(tile_id),
            supplier_name: "Global Ceramics Inc.".to_string(),
            quantity,
            date: test_time(),
        }
    }

    fn quantity_of(store: &InMemoryRecordStore, id: &str) -> i64 {
        store.get_tile(&TileId::from(id)).unwrap().unwrap().quantity
    }

    #[test]
    fn sale_against_seeded_tile_decrements_stock() {
        let store = InMemoryRecordStore::with_demo_data();
        assert_eq!(quantity_of(&store, "t1"), 150);

        let recorded = store.add_sale(sale_draft("t1", 50)).unwrap();

        assert_eq!(quantity_of(&store, "t1"), 100);
        assert_eq!(
            recorded.stock_adjustment,
            StockAdjustment::Applied {
                tile_id: TileId::from("t1"),
                previous: 150,
                current: 100,
            }
        );
    }

    #[test]
    fn purchase_against_seeded_tile_increments_stock() {
        let store = InMemoryRecordStore::with_demo_data();
        store.add_purchase(purchase_draft("t2", 200)).unwrap();
        assert_eq!(quantity_of(&store, "t2"), 500);
    }

    #[test]
    fn sale_against_unknown_tile_is_recorded_without_touching_stock() {
        let store = InMemoryRecordStore::with_demo_data();
        let before = store.list_tiles().unwrap();

        let recorded = store.add_sale(sale_draft("does-not-exist", 10)).unwrap();

        assert_eq!(
            recorded.stock_adjustment,
            StockAdjustment::TileMissing {
                tile_id: TileId::from("does-not-exist")
            }
        );
        assert!(store.list_sales().unwrap().contains(&recorded.record));
        assert_eq!(store.list_tiles().unwrap(), before);
    }

    #[test]
    fn purchase_against_unknown_tile_is_recorded_without_touching_stock() {
        let store = InMemoryRecordStore::with_demo_data();
        let before = store.list_tiles().unwrap();

        let recorded = store.add_purchase(purchase_draft("t99", 5)).unwrap();

        assert!(!recorded.stock_adjustment.is_applied());
        assert_eq!(store.list_purchases().unwrap().len(), 2);
        assert_eq!(store.list_tiles().unwrap(), before);
    }

    #[test]
    fn oversell_leaves_negative_stock() {
        let store = InMemoryRecordStore::new();
        let tile = store.add_tile(tile_draft("Slate", 5)).unwrap();
        store.add_sale(sale_draft(tile.id.as_str(), 8)).unwrap();
        assert_eq!(quantity_of(&store, tile.id.as_str()), -3);
    }

    #[test]
    fn add_tile_appends_without_altering_existing_tiles() {
        let store = InMemoryRecordStore::with_demo_data();
        let before = store.list_tiles().unwrap();

        let tile = store.add_tile(tile_draft("Terracotta", 40)).unwrap();

        let after = store.list_tiles().unwrap();
        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(&after[..before.len()], &before[..]);
        assert_eq!(after.last(), Some(&tile));
        assert!(before.iter().all(|t| t.id != tile.id));
    }

    #[test]
    fn ids_allocated_after_restore_do_not_collide_with_restored_ids() {
        let store = InMemoryRecordStore::with_demo_data();
        assert_eq!(store.add_tile(tile_draft("Onyx", 1)).unwrap().id.as_str(), "t4");
        assert_eq!(
            store
                .add_customer(CustomerDraft {
                    name: "Ana".to_string(),
                    email: "ana@example.com".to_string(),
                    phone: String::new(),
                    address: String::new(),
                })
                .unwrap()
                .id
                .as_str(),
            "c3"
        );
        assert_eq!(store.add_sale(sale_draft("t1", 1)).unwrap().record.id.as_str(), "s2");
        assert_eq!(store.add_purchase(purchase_draft("t1", 1)).unwrap().record.id.as_str(), "p2");
    }

    #[test]
    fn exhausted_id_space_fails_instead_of_reusing_an_id() {
        let mut snapshot = StoreSnapshot::demo(test_time());
        let mut last = snapshot.tiles[0].clone();
        last.id = TileId::from_sequence(u64::MAX);
        snapshot.tiles.push(last);
        let store = InMemoryRecordStore::from_snapshot(snapshot);
        let before = store.snapshot().unwrap();

        for _ in 0..2 {
            assert_eq!(
                store.add_tile(tile_draft("Overflow", 1)),
                Err(StoreError::IdSpaceExhausted { kind: "tile" })
            );
        }
        assert_eq!(store.snapshot().unwrap(), before);

        let ids: HashSet<TileId> = store.list_tiles().unwrap().into_iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), 4);

        // Other kinds keep allocating.
        assert_eq!(store.add_sale(sale_draft("t1", 1)).unwrap().record.id.as_str(), "s2");
    }

    #[test]
    fn exhausted_sale_ids_leave_stock_untouched() {
        let mut snapshot = StoreSnapshot::demo(test_time());
        let mut last = snapshot.sales[0].clone();
        last.id = SaleId::from_sequence(u64::MAX);
        snapshot.sales.push(last);
        let store = InMemoryRecordStore::from_snapshot(snapshot);

        assert_eq!(
            store.add_sale(sale_draft("t1", 10)).map(|r| r.record.id),
            Err(StoreError::IdSpaceExhausted { kind: "sale" })
        );
        assert_eq!(quantity_of(&store, "t1"), 150);
        assert_eq!(store.list_sales().unwrap().len(), 2);
    }

    #[test]
    fn lists_preserve_insertion_order() {
        let store = InMemoryRecordStore::new();
        for name in ["a", "b", "c"] {
            store.add_tile(tile_draft(name, 1)).unwrap();
        }
        let names: Vec<String> = store.list_tiles().unwrap().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn name_lookups_fall_back_for_unknown_ids() {
        let store = InMemoryRecordStore::with_demo_data();
        assert_eq!(store.tile_name(&TileId::from("t3")).unwrap(), "Classic Subway Tile");
        assert_eq!(store.tile_name(&TileId::from("nope")).unwrap(), UNKNOWN_NAME);
        assert_eq!(store.customer_name(&CustomerId::from("c2")).unwrap(), "Jane Smith");
        assert_eq!(store.customer_name(&CustomerId::from("c9")).unwrap(), UNKNOWN_NAME);
    }

    #[test]
    fn summary_counts_records_and_totals_stock_and_revenue() {
        let store = InMemoryRecordStore::with_demo_data();
        let summary = store.summary().unwrap();
        assert_eq!(summary.tile_count, 3);
        assert_eq!(summary.customer_count, 2);
        assert_eq!(summary.sale_count, 1);
        assert_eq!(summary.purchase_count, 1);
        assert_eq!(summary.total_stock, 550);
        assert_eq!(summary.sales_revenue, Money::from_cents(62_500));

        let via_arc: Arc<dyn RecordStore> = Arc::new(store);
        assert_eq!(via_arc.summary().unwrap(), summary);
    }

    #[test]
    fn snapshot_round_trips_through_restore() {
        let store = InMemoryRecordStore::with_demo_data();
        store.add_sale(sale_draft("t3", 4)).unwrap();
        let snap = store.snapshot().unwrap();

        let restored = InMemoryRecordStore::from_snapshot(snap.clone());
        assert_eq!(restored.snapshot().unwrap(), snap);
        assert_eq!(quantity_of(&restored, "t3"), 96);
    }

    #[test]
    fn concurrent_sales_on_one_tile_are_serialized() {
        let store = Arc::new(InMemoryRecordStore::new());
        let tile = store.add_tile(tile_draft("Granite", 10_000)).unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                let id = tile.id.to_string();
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        store.add_sale(sale_draft(&id, 3)).unwrap();
                        store.add_purchase(purchase_draft(&id, 1)).unwrap();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(quantity_of(&store, tile.id.as_str()), 10_000 - 800 * 3 + 800);
        let ids: HashSet<_> = store.list_sales().unwrap().into_iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), 800);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 128,
            ..ProptestConfig::default()
        })]

        /// Property: N tile additions yield N pairwise distinct ids.
        #[test]
        fn tile_ids_are_pairwise_distinct(n in 1usize..200) {
            let store = InMemoryRecordStore::with_demo_data();
            let mut seen: HashSet<TileId> =
                store.list_tiles().unwrap().into_iter().map(|t| t.id).collect();
            for i in 0..n {
                let tile = store.add_tile(tile_draft(&format!("tile-{i}"), 0)).unwrap();
                prop_assert!(seen.insert(tile.id));
            }
        }

        /// Property: a sale of n against a tile holding q leaves q - n;
        /// a purchase of m then leaves q - n + m.
        #[test]
        fn transactions_move_stock_by_their_quantity(
            q in -10_000i64..10_000,
            n in 0i64..10_000,
            m in 0i64..10_000,
        ) {
            let store = InMemoryRecordStore::new();
            let tile = store.add_tile(tile_draft("Porcelain", q)).unwrap();
            store.add_sale(sale_draft(tile.id.as_str(), n)).unwrap();
            prop_assert_eq!(quantity_of(&store, tile.id.as_str()), q - n);
            store.add_purchase(purchase_draft(tile.id.as_str(), m)).unwrap();
            prop_assert_eq!(quantity_of(&store, tile.id.as_str()), q - n + m);
        }

        /// Property: listing never changes what the next listing returns.
        #[test]
        fn lists_are_idempotent(reads in 1usize..10, sales in prop::collection::vec(0i64..100, 0..10)) {
            let store = InMemoryRecordStore::with_demo_data();
            for qty in &sales {
                store.add_sale(sale_draft("t2", *qty)).unwrap();
            }
            let first = store.snapshot().unwrap();
            for _ in 0..reads {
                store.list_tiles().unwrap();
                store.list_customers().unwrap();
                store.list_sales().unwrap();
                store.list_purchases().unwrap();
                store.summary().unwrap();
            }
            prop_assert_eq!(store.snapshot().unwrap(), first);
        }
    }
}
