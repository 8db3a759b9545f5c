use listings_backend::models::Listing;

pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// `$1,234,567`, or `N/A` when the listing has no price. Cents are rounded.
pub fn format_price(price: Option<f64>) -> String {
    let Some(price) = price.filter(|p| p.is_finite()) else {
        return "N/A".to_string();
    };
    let whole = price.round().abs() as u64;
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if price.round() < 0.0 { "-" } else { "" };
    format!("{}${}", sign, grouped)
}

/// `May 1, 2023`; the raw string when it does not parse as a date.
pub fn format_listed_date(listing: &Listing) -> String {
    match listing.listed_on() {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => listing.date_listed.clone(),
    }
}

pub fn thumbnail_or_placeholder(listing: &Listing) -> &str {
    image_or_placeholder(listing.thumbnail_url.as_deref())
}

pub fn picture_or_placeholder(listing: &Listing) -> &str {
    image_or_placeholder(listing.picture_url.as_deref())
}

fn image_or_placeholder(url: Option<&str>) -> &str {
    match url {
        Some(url) if !url.trim().is_empty() => url,
        _ => PLACEHOLDER_IMAGE,
    }
}
