pub mod error;
pub mod faq_list;
pub mod field;
pub mod property_card;
pub mod search_card;

pub use error::error_page;
pub use faq_list::faq_list;
pub use field::{select_field, text_field, textarea_field, Field};
pub use property_card::{price_tag, property_grid};
pub use search_card::{search_card, SearchCardVm};

/// Image keys with a matching `{key}.svg` under `static/images`.
pub const KNOWN_IMAGES: [&str; 9] = [
    "property-1",
    "property-2",
    "property-3",
    "property-4",
    "property-5",
    "property-6",
    "property-7",
    "property-8",
    "hero-bg",
];

/// Resolve an opaque image key; unknown keys fall back to the first property photo.
pub fn image_url(key: &str) -> String {
    let key = if KNOWN_IMAGES.contains(&key) { key } else { KNOWN_IMAGES[0] };
    format!("/static/images/{key}.svg")
}

/// Thousands-separated amount, at most two decimals, trailing zeros dropped.
pub fn format_price(price: f64) -> String {
    let cents_total = (price.abs() * 100.0).round() as u64;
    let whole = (cents_total / 100).to_string();
    let cents = cents_total % 100;

    let mut out = String::with_capacity(whole.len() + whole.len() / 3 + 3);
    if price < 0.0 && cents_total > 0 {
        out.push('-');
    }
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if cents > 0 {
        let frac = format!("{cents:02}");
        out.push('.');
        out.push_str(frac.trim_end_matches('0'));
    }
    out
}
