//! Persistence gateway over a key-value store
//!
//! Each collection is one JSON array stored under a fixed key. Reads and
//! writes always move the whole collection; there is no merging and the
//! last writer wins.

use miette::Diagnostic;
use std::collections::HashSet;
use thiserror::Error;
use tracing::{debug, info};

use crate::core::entity::{Collection, Record, RecordError};
use crate::core::storage::{KeyValueStore, StorageError};
use crate::entities::{HeroMedia, Inquiry, PreOrder, Testimonial, Vehicle};
use crate::json::{self, JsonSyntaxError};

/// Errors returned by [`Repository`] operations
#[derive(Debug, Error, Diagnostic)]
pub enum RepositoryError {
    #[error(transparent)]
    #[diagnostic(code(showroom::store::io))]
    Storage(#[from] StorageError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Corrupt(#[from] JsonSyntaxError),

    #[error("invalid {collection} record '{id}': {source}")]
    #[diagnostic(code(showroom::record::invalid))]
    Invalid {
        collection: Collection,
        id: String,
        #[source]
        source: RecordError,
    },

    #[error("duplicate id '{id}' in {collection}")]
    #[diagnostic(
        code(showroom::record::duplicate_id),
        help("identifiers must be unique within a collection")
    )]
    DuplicateId { collection: Collection, id: String },

    #[error("failed to serialize {collection}: {source}")]
    #[diagnostic(code(showroom::store::serialize))]
    Serialize {
        collection: Collection,
        #[source]
        source: serde_json::Error,
    },
}

/// Collection access with explicit seeding
#[derive(Debug)]
pub struct Repository<S> {
    store: S,
}

impl<S: KeyValueStore> Repository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Open a repository and seed any missing collections
    pub fn open(store: S) -> Result<Self, RepositoryError> {
        let mut repo = Self::new(store);
        repo.ensure_seeded()?;
        Ok(repo)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Write seed data for every collection whose key is absent.
    ///
    /// Returns the collections that were seeded; a second call returns an
    /// empty list.
    pub fn ensure_seeded(&mut self) -> Result<Vec<Collection>, RepositoryError> {
        let mut seeded = Vec::new();
        for collection in Collection::all() {
            if self.stored(collection.key())?.is_some() {
                continue;
            }
            match collection {
                Collection::Vehicles => self.write(&Vehicle::seed())?,
                Collection::Inquiries => self.write(&Inquiry::seed())?,
                Collection::PreOrders => self.write(&PreOrder::seed())?,
                Collection::Testimonials => self.write(&Testimonial::seed())?,
                Collection::HeroMedia => self.write(&HeroMedia::seed())?,
            }
            debug!(collection = %collection, "seeded collection");
            seeded.push(*collection);
        }
        Ok(seeded)
    }

    /// Load a whole collection.
    ///
    /// An absent key is seeded first, so this never reports "missing".
    pub fn get_all<R: Record>(&mut self) -> Result<Vec<R>, RepositoryError> {
        let key = R::COLLECTION.key();
        match self.stored(key)? {
            Some(text) => {
                let items = json::parse_collection(&text, key)?;
                Ok(items)
            }
            None => {
                let seed = R::seed();
                self.write(&seed)?;
                debug!(collection = %R::COLLECTION, "seeded collection on first read");
                Ok(seed)
            }
        }
    }

    /// Replace the whole collection
    pub fn save<R: Record>(&mut self, items: &[R]) -> Result<(), RepositoryError> {
        check_records(items)?;
        self.write(items)?;
        info!(collection = %R::COLLECTION, count = items.len(), "saved collection");
        Ok(())
    }

    /// Prepend `item` to the collection
    pub fn add<R: Record>(&mut self, item: R) -> Result<(), RepositoryError> {
        check_record(&item)?;
        let mut items: Vec<R> = self.get_all()?;
        if items.iter().any(|r| r.id() == item.id()) {
            return Err(RepositoryError::DuplicateId {
                collection: R::COLLECTION,
                id: item.id().to_string(),
            });
        }
        info!(collection = %R::COLLECTION, id = item.id(), "adding record");
        items.insert(0, item);
        self.write(&items)
    }

    /// Replace the record with the same id, keeping order.
    ///
    /// Returns `false` and leaves storage untouched when no record matches.
    pub fn update<R: Record>(&mut self, item: R) -> Result<bool, RepositoryError> {
        check_record(&item)?;
        let mut items: Vec<R> = self.get_all()?;
        let Some(slot) = items.iter_mut().find(|r| r.id() == item.id()) else {
            debug!(collection = %R::COLLECTION, id = item.id(), "update matched no record");
            return Ok(false);
        };
        info!(collection = %R::COLLECTION, id = item.id(), "updating record");
        *slot = item;
        self.write(&items)?;
        Ok(true)
    }

    /// Clear a collection; the next access re-seeds it
    pub fn reset(&mut self, collection: Collection) -> Result<bool, RepositoryError> {
        let removed = self.store.remove(collection.key())?;
        if removed {
            info!(collection = %collection, "cleared collection");
        }
        Ok(removed)
    }

    /// The stored text for a collection, without parsing
    pub fn raw(&self, collection: Collection) -> Result<Option<String>, RepositoryError> {
        self.stored(collection.key())
    }

    /// Blank values (an interrupted write leaves an empty file) count as absent
    fn stored(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        let text = self.store.get(key)?;
        Ok(text.filter(|t| !t.trim().is_empty()))
    }

    fn write<R: Record>(&mut self, items: &[R]) -> Result<(), RepositoryError> {
        let text = serde_json::to_string_pretty(items).map_err(|source| {
            RepositoryError::Serialize {
                collection: R::COLLECTION,
                source,
            }
        })?;
        self.store.set(R::COLLECTION.key(), &text)?;
        Ok(())
    }
}

fn check_record<R: Record>(item: &R) -> Result<(), RepositoryError> {
    item.validate().map_err(|source| RepositoryError::Invalid {
        collection: R::COLLECTION,
        id: item.id().to_string(),
        source,
    })
}

fn check_records<R: Record>(items: &[R]) -> Result<(), RepositoryError> {
    let mut seen = HashSet::new();
    for item in items {
        check_record(item)?;
        if !seen.insert(item.id()) {
            return Err(RepositoryError::DuplicateId {
                collection: R::COLLECTION,
                id: item.id().to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::MemoryStore;
    use crate::entities::{InquiryKind, InquiryStatus};

    fn inquiry(name: &str) -> Inquiry {
        Inquiry::create(
            InquiryKind::General,
            name.to_string(),
            format!("{}@example.com", name.to_lowercase()),
            String::new(),
            "Interested".to_string(),
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_first_read_returns_seed_and_is_idempotent() {
        let mut repo = Repository::new(MemoryStore::new());

        let first: Vec<Vehicle> = repo.get_all().unwrap();
        assert_eq!(first, Vehicle::seed());

        let second: Vec<Vehicle> = repo.get_all().unwrap();
        assert_eq!(second, first);
        assert_eq!(second.len(), 4);
    }

    #[test]
    fn test_ensure_seeded_is_idempotent() {
        let mut repo = Repository::new(MemoryStore::new());
        assert_eq!(repo.ensure_seeded().unwrap().len(), 5);
        assert!(repo.ensure_seeded().unwrap().is_empty());

        let keys = repo.store().keys().unwrap();
        assert_eq!(keys.len(), 5);
    }

    #[test]
    fn test_ensure_seeded_keeps_existing_data() {
        let mut store = MemoryStore::new();
        store.set(Collection::Vehicles.key(), "[]").unwrap();

        let mut repo = Repository::new(store);
        let seeded = repo.ensure_seeded().unwrap();
        assert!(!seeded.contains(&Collection::Vehicles));

        let vehicles: Vec<Vehicle> = repo.get_all().unwrap();
        assert!(vehicles.is_empty());
    }

    #[test]
    fn test_add_prepends() {
        let mut repo = Repository::open(MemoryStore::new()).unwrap();
        let a = inquiry("Ada");
        let b = inquiry("Ben");
        repo.add(a.clone()).unwrap();
        let before: Vec<Inquiry> = repo.get_all().unwrap();

        repo.add(b.clone()).unwrap();
        let after: Vec<Inquiry> = repo.get_all().unwrap();

        assert_eq!(after[0], b);
        assert_eq!(&after[1..], before.as_slice());
    }

    #[test]
    fn test_add_rejects_duplicate_id() {
        let mut repo = Repository::open(MemoryStore::new()).unwrap();
        let mut dup = Vehicle::seed().remove(0);
        dup.model = "Ghost".to_string();

        let err = repo.add(dup).unwrap_err();
        assert!(matches!(err, RepositoryError::DuplicateId { .. }));
    }

    #[test]
    fn test_update_replaces_in_place() {
        let mut repo = Repository::open(MemoryStore::new()).unwrap();
        let mut vehicles: Vec<Vehicle> = repo.get_all().unwrap();
        let mut changed = vehicles[2].clone();
        changed.price = 199000.0;

        assert!(repo.update(changed.clone()).unwrap());

        vehicles[2] = changed;
        let stored: Vec<Vehicle> = repo.get_all().unwrap();
        assert_eq!(stored, vehicles);
    }

    #[test]
    fn test_update_unknown_id_leaves_collection_unchanged() {
        let mut repo = Repository::open(MemoryStore::new()).unwrap();
        let before = repo.raw(Collection::Vehicles).unwrap();

        let mut ghost = Vehicle::seed().remove(0);
        ghost.id = "missing".to_string();
        assert!(!repo.update(ghost).unwrap());

        assert_eq!(repo.raw(Collection::Vehicles).unwrap(), before);
    }

    #[test]
    fn test_update_status_round_trip() {
        let mut repo = Repository::open(MemoryStore::new()).unwrap();
        let mut item = inquiry("Chi");
        repo.add(item.clone()).unwrap();

        item.status = InquiryStatus::Contacted;
        assert!(repo.update(item.clone()).unwrap());

        let stored: Vec<Inquiry> = repo.get_all().unwrap();
        assert_eq!(stored[0].status, InquiryStatus::Contacted);
    }

    #[test]
    fn test_save_replaces_whole_collection() {
        let mut repo = Repository::open(MemoryStore::new()).unwrap();
        let mut media: Vec<HeroMedia> = repo.get_all().unwrap();
        media[0].active = false;
        media.truncate(1);

        repo.save(&media).unwrap();
        let stored: Vec<HeroMedia> = repo.get_all().unwrap();
        assert_eq!(stored, media);
    }

    #[test]
    fn test_save_rejects_duplicates_and_invalid() {
        let mut repo = Repository::open(MemoryStore::new()).unwrap();
        let t = Testimonial::seed();
        let dupes = vec![t[0].clone(), t[0].clone()];
        assert!(matches!(
            repo.save(&dupes).unwrap_err(),
            RepositoryError::DuplicateId { .. }
        ));

        let mut bad = t[0].clone();
        bad.rating = 9;
        assert!(matches!(
            repo.save(&[bad]).unwrap_err(),
            RepositoryError::Invalid { .. }
        ));

        let stored: Vec<Testimonial> = repo.get_all().unwrap();
        assert_eq!(stored, t);
    }

    #[test]
    fn test_corrupt_content_is_reported() {
        let mut store = MemoryStore::new();
        store.set(Collection::Vehicles.key(), "[{\"id\": ").unwrap();
        let mut repo = Repository::new(store);

        let err = repo.get_all::<Vehicle>().unwrap_err();
        match err {
            RepositoryError::Corrupt(diag) => assert_eq!(diag.key, "emphathon_cars"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_blank_content_counts_as_absent() {
        let mut store = MemoryStore::new();
        store.set(Collection::Vehicles.key(), "").unwrap();
        store.set(Collection::HeroMedia.key(), "  \n").unwrap();
        let mut repo = Repository::new(store);
        assert!(repo.raw(Collection::Vehicles).unwrap().is_none());

        let vehicles: Vec<Vehicle> = repo.get_all().unwrap();
        assert_eq!(vehicles, Vehicle::seed());
        assert!(repo.raw(Collection::Vehicles).unwrap().is_some());

        let seeded = repo.ensure_seeded().unwrap();
        assert!(seeded.contains(&Collection::HeroMedia));
        assert!(!seeded.contains(&Collection::Vehicles));
    }

    #[test]
    fn test_empty_list_is_not_reseeded() {
        let mut repo = Repository::open(MemoryStore::new()).unwrap();
        repo.save::<Vehicle>(&[]).unwrap();
        let vehicles: Vec<Vehicle> = repo.get_all().unwrap();
        assert!(vehicles.is_empty());
    }

    #[test]
    fn test_reset_reseeds_on_next_read() {
        let mut repo = Repository::open(MemoryStore::new()).unwrap();
        repo.save::<Vehicle>(&[]).unwrap();
        assert!(repo.reset(Collection::Vehicles).unwrap());
        assert!(!repo.reset(Collection::Vehicles).unwrap());

        let vehicles: Vec<Vehicle> = repo.get_all().unwrap();
        assert_eq!(vehicles.len(), 4);
    }
}
