//! Search criteria and the inclusion test applied to the catalog.

use listings_backend::models::Listing;
use thiserror::Error;

pub const PRICE_SLIDER_MIN: f64 = 100_000.0;
pub const PRICE_SLIDER_MAX: f64 = 800_000.0;
pub const PRICE_SLIDER_STEP: f64 = 10_000.0;

pub const BEDROOM_CHOICES: [u32; 5] = [1, 2, 3, 4, 5];
pub const BATHROOM_CHOICES: [u32; 5] = [1, 2, 3, 4, 5];
pub const PARKING_CHOICES: [u32; 6] = [1, 2, 3, 4, 5, 6];

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CriteriaError {
    #[error("price range {min}..{max} is inverted")]
    InvertedPriceRange { min: f64, max: f64 },
    #[error("price bound {0} is not a finite amount")]
    InvalidPrice(f64),
    #[error("{value}+ is not an offered {field} choice")]
    UnsupportedChoice { field: &'static str, value: u32 },
}

fn offered(field: &'static str, choices: &[u32], value: u32) -> Result<u32, CriteriaError> {
    if choices.contains(&value) {
        Ok(value)
    } else {
        Err(CriteriaError::UnsupportedChoice { field, value })
    }
}

fn snap_to_slider(amount: f64) -> f64 {
    let steps = ((amount - PRICE_SLIDER_MIN) / PRICE_SLIDER_STEP).round();
    (PRICE_SLIDER_MIN + steps * PRICE_SLIDER_STEP).clamp(PRICE_SLIDER_MIN, PRICE_SLIDER_MAX)
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub min_bedrooms: u32,
    pub min_bathrooms: u32,
    pub min_parking: u32,
    price_min: f64,
    price_max: f64,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            min_bedrooms: 1,
            min_bathrooms: 1,
            min_parking: 1,
            price_min: PRICE_SLIDER_MIN,
            price_max: PRICE_SLIDER_MAX,
        }
    }
}

impl FilterCriteria {
    pub fn price_range(&self) -> (f64, f64) {
        (self.price_min, self.price_max)
    }

    pub fn select_min_bedrooms(&mut self, choice: u32) -> Result<(), CriteriaError> {
        self.min_bedrooms = offered("bedrooms", &BEDROOM_CHOICES, choice)?;
        Ok(())
    }

    pub fn select_min_bathrooms(&mut self, choice: u32) -> Result<(), CriteriaError> {
        self.min_bathrooms = offered("bathrooms", &BATHROOM_CHOICES, choice)?;
        Ok(())
    }

    pub fn select_min_parking(&mut self, choice: u32) -> Result<(), CriteriaError> {
        self.min_parking = offered("parking", &PARKING_CHOICES, choice)?;
        Ok(())
    }

    /// Price range from the slider handles: each bound is clamped to the
    /// slider range and snapped to the nearest step.
    pub fn set_price_slider(&mut self, min: f64, max: f64) -> Result<(), CriteriaError> {
        for bound in [min, max] {
            if !bound.is_finite() {
                return Err(CriteriaError::InvalidPrice(bound));
            }
        }
        self.set_price_range(snap_to_slider(min), snap_to_slider(max))
    }

    /// Leaves the criteria untouched when the range is rejected.
    pub fn set_price_range(&mut self, min: f64, max: f64) -> Result<(), CriteriaError> {
        for bound in [min, max] {
            if !bound.is_finite() {
                return Err(CriteriaError::InvalidPrice(bound));
            }
        }
        if min > max {
            return Err(CriteriaError::InvertedPriceRange { min, max });
        }
        self.price_min = min;
        self.price_max = max;
        Ok(())
    }

    /// Inclusive on every bound. A listing without a price never matches.
    pub fn matches(&self, listing: &Listing) -> bool {
        let in_price_range = listing
            .price()
            .is_some_and(|price| self.price_min <= price && price <= self.price_max);

        listing.bedrooms >= self.min_bedrooms
            && listing.bathrooms >= self.min_bathrooms
            && listing.parking >= self.min_parking
            && in_price_range
    }

    /// Matching listings in catalog order.
    pub fn apply(&self, catalog: &[Listing]) -> Vec<Listing> {
        catalog
            .iter()
            .filter(|listing| self.matches(listing))
            .cloned()
            .collect()
    }
}
