use thiserror::Error;

/// Errors surfaced by the rates pipeline.
///
/// Field-level defects inside an otherwise well-formed feed (a missing tag,
/// a non-numeric scale) are deliberately not represented here: they recover
/// to field defaults during extraction.
#[derive(Debug, Error)]
pub enum RatesError {
    /// The HTTP retrieval failed: connectivity, a non-2xx status, or a
    /// response body that could not be read.
    #[error("failed to fetch rates feed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The response body was not a well-formed feed document.
    #[error("failed to parse rates feed: {0}")]
    Parse(String),
}

impl From<quick_xml::Error> for RatesError {
    fn from(err: quick_xml::Error) -> Self {
        RatesError::Parse(err.to_string())
    }
}
