//! The browser links the listing model, not the catalog server.

const MANIFEST: &str = include_str!("../Cargo.toml");

fn dependency_line(section: &str) -> &'static str {
    let start = MANIFEST
        .find(section)
        .unwrap_or_else(|| panic!("no {} section", section));
    let rest: &'static str = &MANIFEST[start..];
    rest.lines()
        .find(|line| line.starts_with("listings-backend"))
        .unwrap_or_else(|| panic!("no listings-backend in {}", section))
}

#[test]
fn runtime_dependency_excludes_server_stack() {
    let line = dependency_line("[dependencies]");
    assert!(line.contains("default-features = false"), "{}", line);
    assert!(!line.contains("server"), "{}", line);
}

#[test]
fn server_is_only_pulled_in_for_tests() {
    let line = dependency_line("[dev-dependencies]");
    assert!(line.contains("features = [\"server\"]"), "{}", line);
}

#[test]
fn listing_model_round_trips_without_server_types() {
    use listings_backend::models::{ErrorBody, Price};
    use listings_browser::Listing;

    let listing: Listing = serde_json::from_str(
        r#"{"Id": 2, "DateListed": "2023-06-01", "Title": "Flat", "Description": "",
            "Sale Price": 275000, "Location": "Town", "Sqft": 700, "Bedrooms": 1,
            "Bathrooms": 1, "Parking": 0, "YearBuilt": 2011}"#,
    )
    .unwrap();
    assert_eq!(listing.sale_price, Some(Price::from(275000)));

    let body: ErrorBody = serde_json::from_str(r#"{"error": "Property not found"}"#).unwrap();
    assert_eq!(body.error, "Property not found");
}
