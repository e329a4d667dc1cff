use serde::{Deserialize, Serialize};

/// One entry of the daily rates feed.
///
/// A missing or empty feed tag leaves the field at its default; numeric tags
/// that fail to parse recover to zero instead of sinking the record (see
/// [`parse_or_default`](crate::feed::parse_or_default)). Text fields are
/// kept exactly as published, with no trimming or normalization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Currency {
    /// Numeric currency code as published, e.g. "036".
    pub code: String,
    /// Human-readable currency name.
    pub name: String,
    /// Alphabetic code, e.g. "USD". This is the filter key.
    pub short_name: String,
    /// Unit scale the rate applies to, e.g. 1, 10 or 100.
    pub amount: u32,
    /// Exchange rate for `amount` units of the currency.
    pub rate: f64,
}
