//! Client for the daily exchange rates feed published by the National Bank
//! of the Republic of Belarus (`http://nbrb.by/Services/XmlExRates.aspx`).
//!
//! The crate does one thing: fetch the XML rates document for an optional
//! date, extract one [`Currency`] record per feed entry, and optionally
//! narrow the records to a set of currency short codes.
//!
//! ```no_run
//! use nbrb_rates::NbrbClient;
//!
//! # async fn run() -> Result<(), nbrb_rates::RatesError> {
//! let client = NbrbClient::new();
//! let filter = vec!["USD".to_string(), "EUR".to_string()];
//! let rates = client.daily_rates(Some(&filter), Some("01/25/2012")).await?;
//! for currency in rates {
//!     println!("{}: {} per {} units", currency.short_name, currency.rate, currency.amount);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod feed;
pub mod models;

pub use client::{NbrbClient, DAILY_RATES_URL};
pub use error::RatesError;
pub use feed::{filter_by_short_names, parse_daily_rates, parse_or_default};
pub use models::Currency;
