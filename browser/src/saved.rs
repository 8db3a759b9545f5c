//! The user's saved listings, mirrored to durable storage after every change.

use listings_backend::models::Listing;
use log::warn;

use crate::storage::DurableStorage;

/// Storage slot holding the serialized saved listings.
pub const SAVED_SLOT: &str = "savedProperties";

/// Ordered snapshots of saved listings, unique by id.
///
/// The set is owned by whoever constructs it and handed to the views that
/// need it; there is no global instance. Storage failures are logged and
/// skipped: an unreadable slot loads as empty and a failed write leaves the
/// in-memory set changed.
#[derive(Debug)]
pub struct SavedSet<S: DurableStorage> {
    storage: S,
    items: Vec<Listing>,
}

impl<S: DurableStorage> SavedSet<S> {
    /// Reads the persisted set, e.g. when a view mounts.
    pub fn load(storage: S) -> Self {
        let items = read_slot(&storage);
        Self { storage, items }
    }

    /// Re-reads storage, discarding the in-memory copy.
    pub fn reload(&mut self) {
        self.items = read_slot(&self.storage);
    }

    pub fn items(&self) -> &[Listing] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_saved(&self, id: i64) -> bool {
        self.items.iter().any(|listing| listing.id == id)
    }

    /// Removes the listing if it is saved, appends it otherwise. Returns
    /// whether the listing is saved afterwards.
    pub fn toggle(&mut self, listing: &Listing) -> bool {
        let now_saved = if self.is_saved(listing.id) {
            self.items.retain(|saved| saved.id != listing.id);
            false
        } else {
            self.items.push(listing.clone());
            true
        };
        self.save();
        now_saved
    }

    /// Returns whether anything was removed.
    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.items.len();
        self.items.retain(|saved| saved.id != id);
        self.save();
        self.items.len() != before
    }

    /// Writes the whole set to storage, e.g. before a view unloads.
    pub fn save(&self) {
        let encoded = match serde_json::to_string(&self.items) {
            Ok(encoded) => encoded,
            Err(e) => {
                warn!("Skipping saved listings write: {}", e);
                return;
            }
        };
        if let Err(e) = self.storage.set_item(SAVED_SLOT, &encoded) {
            warn!("Skipping saved listings write: {}", e);
        }
    }
}

fn read_slot<S: DurableStorage>(storage: &S) -> Vec<Listing> {
    let raw = match storage.get_item(SAVED_SLOT) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!("Saved listings unreadable, starting empty: {}", e);
            return Vec::new();
        }
    };
    let mut items: Vec<Listing> = match serde_json::from_str(&raw) {
        Ok(items) => items,
        Err(e) => {
            warn!("Saved listings malformed, starting empty: {}", e);
            return Vec::new();
        }
    };
    // A hand-edited slot may repeat an id; keep the first snapshot.
    let mut seen = std::collections::HashSet::new();
    items.retain(|listing| seen.insert(listing.id));
    items
}
