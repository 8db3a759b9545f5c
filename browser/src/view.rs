//! Per-view state for the catalog and detail pages.
//!
//! Each fetch is tagged with a [`RequestHandle`]. Only the most recent
//! handle may deliver a result; anything older is dropped, so a slow
//! response can never overwrite a newer one.

use listings_backend::models::Listing;
use log::debug;

use crate::client::ClientError;
use crate::filter::FilterCriteria;
use crate::saved::SavedSet;
use crate::storage::DurableStorage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestHandle(u64);

#[derive(Debug, Default)]
struct RequestTracker {
    issued: u64,
    current: Option<u64>,
}

impl RequestTracker {
    fn begin(&mut self) -> RequestHandle {
        self.issued += 1;
        self.current = Some(self.issued);
        RequestHandle(self.issued)
    }

    /// Consumes the handle if it is still current.
    fn finish(&mut self, handle: RequestHandle) -> bool {
        if self.current == Some(handle.0) {
            self.current = None;
            true
        } else {
            false
        }
    }

    fn cancel(&mut self) {
        self.current = None;
    }

    fn in_flight(&self) -> bool {
        self.current.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

/// Listing with its saved flag, ready for a card.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingCard<'a> {
    pub listing: &'a Listing,
    pub saved: bool,
}

/// Home page state: the full catalog, the filtered subset and the criteria.
#[derive(Debug)]
pub struct CatalogView {
    requests: RequestTracker,
    state: LoadState,
    catalog: Vec<Listing>,
    filtered: Vec<Listing>,
    pub criteria: FilterCriteria,
}

impl Default for CatalogView {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogView {
    pub fn new() -> Self {
        Self {
            requests: RequestTracker::default(),
            state: LoadState::Idle,
            catalog: Vec::new(),
            filtered: Vec::new(),
            criteria: FilterCriteria::default(),
        }
    }

    /// Starts a catalog fetch, superseding any fetch still in flight.
    pub fn begin_load(&mut self) -> RequestHandle {
        self.state = LoadState::Loading;
        self.requests.begin()
    }

    /// Applies a fetch result. Returns `false` and changes nothing when the
    /// handle has been superseded or cancelled.
    pub fn finish_load(
        &mut self,
        handle: RequestHandle,
        result: Result<Vec<Listing>, ClientError>,
    ) -> bool {
        if !self.requests.finish(handle) {
            debug!("Discarding stale catalog response {:?}", handle);
            return false;
        }
        match result {
            Ok(listings) => {
                self.filtered = listings.clone();
                self.catalog = listings;
                self.state = LoadState::Loaded;
            }
            Err(e) => self.state = LoadState::Failed(e.to_string()),
        }
        true
    }

    pub fn cancel(&mut self) {
        self.requests.cancel();
        if self.state == LoadState::Loading {
            self.state = if self.catalog.is_empty() {
                LoadState::Idle
            } else {
                LoadState::Loaded
            };
        }
    }

    pub fn is_loading(&self) -> bool {
        self.requests.in_flight()
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn catalog(&self) -> &[Listing] {
        &self.catalog
    }

    pub fn results(&self) -> &[Listing] {
        &self.filtered
    }

    /// Re-runs the criteria over the loaded catalog.
    pub fn search(&mut self) -> &[Listing] {
        self.filtered = self.criteria.apply(&self.catalog);
        &self.filtered
    }

    pub fn cards<'a, S: DurableStorage>(&'a self, saved: &SavedSet<S>) -> Vec<ListingCard<'a>> {
        self.filtered
            .iter()
            .map(|listing| ListingCard {
                listing,
                saved: saved.is_saved(listing.id),
            })
            .collect()
    }
}

/// Detail page state for one listing id.
#[derive(Debug)]
pub struct DetailView {
    id: i64,
    requests: RequestTracker,
    state: LoadState,
    listing: Option<Listing>,
}

impl DetailView {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            requests: RequestTracker::default(),
            state: LoadState::Idle,
            listing: None,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    /// Points the view at another listing; results for the old id are
    /// discarded when they arrive.
    pub fn navigate(&mut self, id: i64) -> RequestHandle {
        self.id = id;
        self.listing = None;
        self.begin_load()
    }

    pub fn begin_load(&mut self) -> RequestHandle {
        self.state = LoadState::Loading;
        self.requests.begin()
    }

    pub fn finish_load(&mut self, handle: RequestHandle, result: Result<Listing, ClientError>) -> bool {
        if !self.requests.finish(handle) {
            debug!("Discarding stale detail response {:?} for {}", handle, self.id);
            return false;
        }
        match result {
            Ok(listing) if listing.id == self.id => {
                self.listing = Some(listing);
                self.state = LoadState::Loaded;
            }
            Ok(listing) => {
                self.state = LoadState::Failed(format!(
                    "expected listing {}, received {}",
                    self.id, listing.id
                ));
            }
            Err(e) => {
                self.listing = None;
                self.state = LoadState::Failed(e.to_string());
            }
        }
        true
    }

    pub fn cancel(&mut self) {
        self.requests.cancel();
        if self.state == LoadState::Loading {
            self.state = if self.listing.is_some() {
                LoadState::Loaded
            } else {
                LoadState::Idle
            };
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn listing(&self) -> Option<&Listing> {
        self.listing.as_ref()
    }

    pub fn is_saved<S: DurableStorage>(&self, saved: &SavedSet<S>) -> bool {
        saved.is_saved(self.id)
    }

    /// Save toggle for the shown listing. Returns the new saved state, or
    /// `None` while nothing is loaded.
    pub fn toggle_saved<S: DurableStorage>(&self, saved: &mut SavedSet<S>) -> Option<bool> {
        self.listing.as_ref().map(|listing| saved.toggle(listing))
    }
}
