//! Client-side core of the listings browser: filtering, saved listings,
//! the contact form and stale-safe view state over the catalog endpoints.

pub mod client;
pub mod contact;
pub mod display;
pub mod filter;
pub mod saved;
pub mod storage;
pub mod view;

pub use listings_backend::models::Listing;

#[cfg(test)]
pub(crate) mod test_support {
    use listings_backend::models::{Listing, Price};

    pub fn listing(
        id: i64,
        bedrooms: u32,
        bathrooms: u32,
        parking: u32,
        sale_price: Option<f64>,
    ) -> Listing {
        Listing {
            id,
            date_listed: "2023-01-01".to_string(),
            title: format!("Listing {}", id),
            description: String::new(),
            sale_price: sale_price.and_then(Price::from_f64),
            thumbnail_url: None,
            picture_url: None,
            location: "Somewhere".to_string(),
            sqft: 1000,
            bedrooms,
            bathrooms,
            parking,
            year_built: 2000,
        }
    }
}
