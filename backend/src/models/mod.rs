use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Sale price exactly as written in the store, so `150000` is served back
/// as `150000` and not `150000.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Number);

impl Price {
    /// `None` for NaN or infinite amounts.
    pub fn from_f64(amount: f64) -> Option<Self> {
        Number::from_f64(amount).map(Price)
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.0.as_f64()
    }
}

impl From<u64> for Price {
    fn from(amount: u64) -> Self {
        Price(Number::from(amount))
    }
}

/// One property record from the listing store.
///
/// Field names follow the keys of the store file (`"Sale Price"`,
/// `"ThumbnailURL"`, ...); camelCase spellings are accepted on input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    #[serde(rename = "Id", alias = "id")]
    pub id: i64,
    #[serde(rename = "DateListed", alias = "dateListed")]
    pub date_listed: String,
    #[serde(rename = "Title", alias = "title")]
    pub title: String,
    #[serde(rename = "Description", alias = "description")]
    pub description: String,
    #[serde(rename = "Sale Price", alias = "salePrice", default)]
    pub sale_price: Option<Price>,
    #[serde(
        rename = "ThumbnailURL",
        alias = "thumbnailUrl",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub thumbnail_url: Option<String>,
    #[serde(
        rename = "PictureURL",
        alias = "pictureUrl",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub picture_url: Option<String>,
    #[serde(rename = "Location", alias = "location")]
    pub location: String,
    #[serde(rename = "Sqft", alias = "sqft")]
    pub sqft: u32,
    #[serde(rename = "Bedrooms", alias = "bedrooms")]
    pub bedrooms: u32,
    #[serde(rename = "Bathrooms", alias = "bathrooms")]
    pub bathrooms: u32,
    #[serde(rename = "Parking", alias = "parking")]
    pub parking: u32,
    #[serde(rename = "YearBuilt", alias = "yearBuilt")]
    pub year_built: u32,
}

impl Listing {
    /// Sale price as a plain amount, `None` when the listing has no price.
    pub fn price(&self) -> Option<f64> {
        self.sale_price.as_ref().and_then(Price::as_f64)
    }

    /// Calendar date the listing went up, if `date_listed` is an RFC 3339
    /// timestamp or a plain `YYYY-MM-DD` date.
    pub fn listed_on(&self) -> Option<NaiveDate> {
        let raw = self.date_listed.trim();
        if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
            return Some(ts.date_naive());
        }
        if let Ok(ts) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
            return Some(ts.date());
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
    }

    #[cfg(feature = "server")]
    pub(crate) fn check_price(&self) -> Result<(), String> {
        match (&self.sale_price, self.price()) {
            (None, _) => Ok(()),
            (Some(_), Some(price)) if price.is_finite() && price >= 0.0 => Ok(()),
            (Some(raw), _) => Err(format!(
                "listing {} has invalid sale price {:?}",
                self.id, raw
            )),
        }
    }
}

/// Body of every non-2xx JSON response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
