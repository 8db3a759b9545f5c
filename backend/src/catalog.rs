use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{error, info};
use thiserror::Error;
use tokio::sync::OnceCell;

use crate::models::Listing;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("listing store unavailable: {0}")]
    DataUnavailable(String),
    #[error("no listing with id {0}")]
    NotFound(i64),
}

/// Read-only view over the listing store file.
///
/// With caching on, the first successful read is reused for the lifetime
/// of the process; the store does not change at runtime.
#[derive(Debug)]
pub struct Catalog {
    path: PathBuf,
    cache: Option<OnceCell<Arc<Vec<Listing>>>>,
}

impl Catalog {
    pub fn open(path: impl Into<PathBuf>, caching: bool) -> Self {
        Self {
            path: path.into(),
            cache: caching.then(OnceCell::new),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every listing, in store order.
    pub async fn list_all(&self) -> Result<Arc<Vec<Listing>>, CatalogError> {
        match &self.cache {
            Some(cell) => cell.get_or_try_init(|| self.read_store()).await.cloned(),
            None => self.read_store().await,
        }
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Listing, CatalogError> {
        let listings = self.list_all().await?;
        listings
            .iter()
            .find(|listing| listing.id == id)
            .cloned()
            .ok_or(CatalogError::NotFound(id))
    }

    async fn read_store(&self) -> Result<Arc<Vec<Listing>>, CatalogError> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            error!("Failed to read listing store {}: {}", self.path.display(), e);
            CatalogError::DataUnavailable(format!("read {}: {}", self.path.display(), e))
        })?;
        let listings = parse_listings(&raw).map_err(|e| {
            error!("Rejected listing store {}: {}", self.path.display(), e);
            e
        })?;
        info!(
            "Loaded {} listings from {}",
            listings.len(),
            self.path.display()
        );
        Ok(Arc::new(listings))
    }
}

/// Deserializes and validates a store document.
pub fn parse_listings(raw: &str) -> Result<Vec<Listing>, CatalogError> {
    let listings: Vec<Listing> = serde_json::from_str(raw)
        .map_err(|e| CatalogError::DataUnavailable(format!("malformed store: {}", e)))?;

    let mut seen = HashSet::with_capacity(listings.len());
    for listing in &listings {
        listing.check_price().map_err(CatalogError::DataUnavailable)?;
        if !seen.insert(listing.id) {
            return Err(CatalogError::DataUnavailable(format!(
                "duplicate listing id {}",
                listing.id
            )));
        }
    }
    Ok(listings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const STORE: &str = r#"[
        {"Id": 1, "DateListed": "2023-02-01", "Title": "A", "Description": "",
         "Sale Price": 150000, "Location": "X", "Sqft": 900,
         "Bedrooms": 2, "Bathrooms": 1, "Parking": 1, "YearBuilt": 1999},
        {"Id": 2, "DateListed": "2023-03-01", "Title": "B", "Description": "",
         "Sale Price": 200000, "Location": "Y", "Sqft": 700,
         "Bedrooms": 1, "Bathrooms": 1, "Parking": 0, "YearBuilt": 2005}
    ]"#;

    fn store_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn parse_rejects_duplicate_ids() {
        let raw = STORE.replace("\"Id\": 2", "\"Id\": 1");
        let err = parse_listings(&raw).unwrap_err();
        assert!(matches!(err, CatalogError::DataUnavailable(msg) if msg.contains("duplicate")));
    }

    #[test]
    fn parse_rejects_non_array_and_missing_fields() {
        assert!(parse_listings(r#"{"Id": 1}"#).is_err());
        assert!(parse_listings(r#"[{"Id": 1, "Title": "no rest"}]"#).is_err());
    }

    #[test]
    fn parse_rejects_negative_price() {
        let raw = STORE.replace("200000", "-5");
        assert!(matches!(
            parse_listings(&raw),
            Err(CatalogError::DataUnavailable(_))
        ));
    }

    #[tokio::test]
    async fn list_all_keeps_store_order() {
        let file = store_file(STORE);
        let catalog = Catalog::open(file.path(), false);
        let ids: Vec<i64> = catalog.list_all().await.unwrap().iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn get_by_id_matches_list_entry() {
        let file = store_file(STORE);
        let catalog = Catalog::open(file.path(), true);
        for listing in catalog.list_all().await.unwrap().iter() {
            assert_eq!(&catalog.get_by_id(listing.id).await.unwrap(), listing);
        }
        assert!(matches!(
            catalog.get_by_id(999).await,
            Err(CatalogError::NotFound(999))
        ));
    }

    #[tokio::test]
    async fn missing_store_is_unavailable() {
        let catalog = Catalog::open("/nonexistent/listings.json", true);
        assert!(matches!(
            catalog.list_all().await,
            Err(CatalogError::DataUnavailable(_))
        ));
        assert!(matches!(
            catalog.get_by_id(1).await,
            Err(CatalogError::DataUnavailable(_))
        ));
    }

    #[tokio::test]
    async fn cached_catalog_survives_store_removal() {
        let file = store_file(STORE);
        let path = file.path().to_path_buf();
        let catalog = Catalog::open(&path, true);
        assert_eq!(catalog.list_all().await.unwrap().len(), 2);
        drop(file);
        assert_eq!(catalog.list_all().await.unwrap().len(), 2);

        let uncached = Catalog::open(&path, false);
        assert!(uncached.list_all().await.is_err());
    }
}
