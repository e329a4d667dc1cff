use chrono::NaiveDate;
use reqwest::Client;

use crate::error::RatesError;
use crate::feed::{filter_by_short_names, parse_daily_rates};
use crate::models::Currency;

/// Daily rates endpoint of the NBRB statistics service. A date, when given,
/// is appended verbatim as the `ondate` query value.
pub const DAILY_RATES_URL: &str = "http://nbrb.by/Services/XmlExRates.aspx?ondate=";

/// Client for the NBRB daily exchange rates feed.
///
/// The underlying HTTP client is built once and reused across calls; no other
/// state is carried between calls.
pub struct NbrbClient {
    client: Client,
    base_url: String,
}

impl NbrbClient {
    pub fn new() -> Self {
        Self::with_base_url(DAILY_RATES_URL)
    }

    /// Point the client at a different endpoint, e.g. a local stub server in
    /// tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn daily_rates_url(&self, date: Option<&str>) -> String {
        match date {
            Some(date) => format!("{}{}", self.base_url, date),
            None => self.base_url.clone(),
        }
    }

    /// Fetch the raw XML feed for `date` (`MM/dd/yyyy`, e.g. `01/25/2012`),
    /// or the most recent feed when `date` is `None`.
    ///
    /// The date string is not validated here; the provider answers a
    /// malformed date with its own error document.
    pub async fn fetch_daily_rates(&self, date: Option<&str>) -> Result<String, RatesError> {
        let url = self.daily_rates_url(date);
        let response = self.client.get(&url).send().await?;
        let body = response.error_for_status()?.text().await?;
        Ok(body)
    }

    /// Currency rates on a given date, optionally narrowed to `short_names`.
    ///
    /// This is the whole pipeline: fetch, extract, filter. `None` for
    /// `short_names` returns every currency in the feed; `None` for `date`
    /// returns the most recent rates. The result preserves feed order and may
    /// be empty.
    pub async fn daily_rates(
        &self,
        short_names: Option<&[String]>,
        date: Option<&str>,
    ) -> Result<Vec<Currency>, RatesError> {
        let xml = self.fetch_daily_rates(date).await?;
        let currencies = parse_daily_rates(&xml)?;
        Ok(filter_by_short_names(currencies, short_names))
    }

    /// Typed-date variant of [`daily_rates`](Self::daily_rates).
    pub async fn daily_rates_on(
        &self,
        short_names: Option<&[String]>,
        date: NaiveDate,
    ) -> Result<Vec<Currency>, RatesError> {
        let date = date.format("%m/%d/%Y").to_string();
        self.daily_rates(short_names, Some(&date)).await
    }
}

impl Default for NbrbClient {
    fn default() -> Self {
        Self::new()
    }
}
