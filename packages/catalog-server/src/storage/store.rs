//! Concurrent keyed store with monotonic ID allocation.

use std::collections::HashMap;

use parking_lot::RwLock;

use catalog_core::{CatalogError, CatalogRecord};

/// Mutex-guarded map + counter behind the store contract.
///
/// The map and the `next_id` counter live inside one [`RwLock`] so ID
/// allocation and insertion are a single atomic step under the write
/// lock: a concurrent reader either sees a create completely or not at
/// all, and two concurrent creators always receive distinct, strictly
/// increasing identifiers in lock-acquisition order.
///
/// Reads (`list`, `get`) take the shared lock and proceed in parallel;
/// `create` takes the exclusive lock. No lock is held across I/O.
pub struct CatalogStore<R> {
    inner: RwLock<StoreInner<R>>,
}

struct StoreInner<R> {
    records: HashMap<u32, R>,
    next_id: u32,
}

impl<R: CatalogRecord> CatalogStore<R> {
    /// Creates an empty store; the first created record receives ID 1.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(Vec::new())
    }

    /// Creates a store pre-populated with `records`, keyed by their IDs.
    ///
    /// The ID counter is positioned strictly above the highest seeded ID
    /// so seeded and created records never collide.
    #[must_use]
    pub fn with_seed(records: Vec<R>) -> Self {
        let max_id = records.iter().map(CatalogRecord::id).max().unwrap_or(0);
        let records = records.into_iter().map(|r| (r.id(), r)).collect();
        Self {
            inner: RwLock::new(StoreInner {
                records,
                next_id: max_id + 1,
            }),
        }
    }

    /// Returns a snapshot copy of all current records, order unspecified.
    #[must_use]
    pub fn list(&self) -> Vec<R> {
        self.inner.read().records.values().cloned().collect()
    }

    /// Returns the record for `id`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if no record has that ID.
    pub fn get(&self, id: u32) -> Result<R, CatalogError> {
        self.inner
            .read()
            .records
            .get(&id)
            .cloned()
            .ok_or(CatalogError::NotFound { id })
    }

    /// Allocates the next ID, stamps it on `record`, stores it, and
    /// returns the stored record.
    ///
    /// Validation runs before the write lock is taken, so a rejected
    /// create leaves the ID counter untouched.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidInput`] if the title is empty.
    pub fn create(&self, mut record: R) -> Result<R, CatalogError> {
        if record.title().trim().is_empty() {
            return Err(CatalogError::InvalidInput(
                "title is required".to_string(),
            ));
        }

        let mut inner = self.inner.write();
        let id = inner.next_id;
        inner.next_id += 1;
        record.set_id(id);
        inner.records.insert(id, record.clone());
        Ok(record)
    }

    /// Number of live records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().records.len()
    }

    /// Whether the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.read().records.is_empty()
    }

    /// The ID the next successful create will receive. Diagnostic only.
    #[must_use]
    pub fn next_id(&self) -> u32 {
        self.inner.read().next_id
    }
}

impl<R: CatalogRecord> Default for CatalogStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::sync::Arc;

    use catalog_core::Movie;

    use super::*;

    fn movie(title: &str) -> Movie {
        Movie {
            id: 0,
            title: title.to_string(),
            genre: "Drama".to_string(),
            year: 2020,
        }
    }

    fn seeded() -> CatalogStore<Movie> {
        CatalogStore::with_seed(vec![
            Movie {
                id: 1,
                title: "Inception".to_string(),
                genre: "Sci-Fi Action".to_string(),
                year: 2010,
            },
            Movie {
                id: 2,
                title: "The Dark Knight".to_string(),
                genre: "Action Thriller".to_string(),
                year: 2008,
            },
        ])
    }

    #[test]
    fn seed_positions_counter_above_highest_id() {
        let store = seeded();
        assert_eq!(store.next_id(), 3);

        let created = store.create(movie("Interstellar")).unwrap();
        assert_eq!(created.id, 3);
    }

    #[test]
    fn create_then_get_round_trips() {
        let store = seeded();
        let created = store.create(movie("Interstellar")).unwrap();

        let fetched = store.get(created.id).unwrap();
        assert_eq!(fetched, created);
    }

    #[test]
    fn create_overwrites_caller_supplied_id() {
        let store = seeded();
        let mut m = movie("Interstellar");
        m.id = 999;

        let created = store.create(m).unwrap();
        assert_eq!(created.id, 3);
        assert!(store.get(999).is_err());
    }

    #[test]
    fn get_unknown_id_is_not_found() {
        let store = seeded();
        assert_eq!(
            store.get(9999),
            Err(CatalogError::NotFound { id: 9999 })
        );
    }

    #[test]
    fn create_empty_title_rejected_without_allocating() {
        let store = seeded();

        let err = store.create(movie("")).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidInput(_)));
        assert_eq!(store.next_id(), 3);

        let err = store.create(movie("   ")).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidInput(_)));
        assert_eq!(store.next_id(), 3);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn list_returns_snapshot_of_all_records() {
        let store = seeded();
        let mut titles: Vec<String> =
            store.list().into_iter().map(|m| m.title).collect();
        titles.sort();
        assert_eq!(titles, vec!["Inception", "The Dark Knight"]);
    }

    #[test]
    fn empty_store_starts_at_id_one() {
        let store: CatalogStore<Movie> = CatalogStore::new();
        assert!(store.is_empty());

        let created = store.create(movie("First")).unwrap();
        assert_eq!(created.id, 1);
    }

    #[test]
    fn concurrent_creates_receive_contiguous_unique_ids() {
        let store = Arc::new(seeded());
        let threads: u32 = 8;
        let per_thread: u32 = 25;

        let handles: Vec<_> = (0..threads)
            .map(|t| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    (0..per_thread)
                        .map(|i| {
                            store
                                .create(movie(&format!("t{t}-{i}")))
                                .unwrap()
                                .id
                        })
                        .collect::<Vec<u32>>()
                })
            })
            .collect();

        let mut ids = BTreeSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(ids.insert(id), "duplicate ID {id}");
            }
        }

        // Exactly {3 .. 2 + threads * per_thread}: no duplicates, no gaps.
        let expected: BTreeSet<u32> = (3..3 + threads * per_thread).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn concurrent_readers_never_observe_partial_creates() {
        let store = Arc::new(seeded());
        let writer = {
            let store = Arc::clone(&store);
            std::thread::spawn(move || {
                for i in 0..100 {
                    store.create(movie(&format!("m{i}"))).unwrap();
                }
            })
        };

        // Every record visible in a snapshot must be fully populated.
        for _ in 0..100 {
            for record in store.list() {
                assert!(record.id >= 1);
                assert!(!record.title.is_empty());
            }
        }
        writer.join().unwrap();
        assert_eq!(store.len(), 102);
    }
}
