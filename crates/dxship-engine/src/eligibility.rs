//! Postcode eligibility
//!
//! The service ships to UK mainland only. Exclusions are literal postcode
//! prefixes checked with string comparison; none of the patterns needs a
//! regular expression.

/// Countries the service ships to
pub const ALLOWED_COUNTRIES: &[&str] = &["GB", "UK"];

/// Excluded postcode prefixes with their region, checked in order
///
/// First match wins; the prefixes are disjoint so order does not change the
/// outcome.
pub const EXCLUDED_POSTCODE_PREFIXES: &[(&str, &str)] = &[
    ("BT", "Northern Ireland"),
    ("GY", "Guernsey"),
    ("JE", "Jersey"),
    ("IM", "Isle of Man"),
    ("HS", "Outer Hebrides"),
    ("ZE", "Shetland"),
    ("KW", "Orkney"),
    ("IV", "Highlands"),
    ("PH", "Highlands"),
    ("PA", "Argyll & islands"),
    ("FK18", "Trossachs highlands"),
    ("FK19", "Trossachs highlands"),
];

/// Advisory notice shown at checkout for excluded destinations
pub const EXCLUDED_AREA_MESSAGE: &str = "We currently only deliver via DX to UK Mainland \
     addresses. Please contact us for delivery options to your region.";

/// Whether the country is on the service allow-list
pub fn is_allowed_country(country: &str) -> bool {
    ALLOWED_COUNTRIES.contains(&country.to_uppercase().as_str())
}

/// First exclusion-table entry matching the postcode, if any
///
/// The postcode is trimmed and uppercased before the prefix comparison.
pub fn matched_exclusion(postcode: &str) -> Option<(&'static str, &'static str)> {
    let normalized = postcode.trim().to_uppercase();
    EXCLUDED_POSTCODE_PREFIXES
        .iter()
        .copied()
        .find(|(prefix, _)| normalized.starts_with(prefix))
}

/// Whether a destination is outside the serviceable area
///
/// Fails open on missing data: an empty country or postcode never excludes
/// on its own; the country allow-list gate elsewhere restricts to GB/UK.
/// Both the availability check and the checkout advisory route through this
/// predicate.
pub fn is_excluded_postcode(country: &str, postcode: &str) -> bool {
    if country.is_empty() {
        return false;
    }

    if !is_allowed_country(country) {
        return true;
    }

    if postcode.trim().is_empty() {
        return false;
    }

    matched_exclusion(postcode).is_some()
}
