use std::str::FromStr;

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::RatesError;
use crate::models::Currency;

const CURRENCY_TAG: &[u8] = b"Currency";

/// The five child fields of a `Currency` element, keyed by feed tag name.
#[derive(Clone, Copy)]
enum Field {
    Code,
    Name,
    ShortName,
    Amount,
    Rate,
}

impl Field {
    fn for_tag(tag: &[u8]) -> Option<Self> {
        match tag {
            b"NumCode" => Some(Self::Code),
            b"Name" => Some(Self::Name),
            b"CharCode" => Some(Self::ShortName),
            b"Scale" => Some(Self::Amount),
            b"Rate" => Some(Self::Rate),
            _ => None,
        }
    }
}

/// Raw field text of one `Currency` element, captured exactly as published
/// before any numeric interpretation. `Some("")` is a present-but-empty tag,
/// `None` an absent one; both fall back to the field default.
#[derive(Default)]
struct RawCurrency {
    code: Option<String>,
    name: Option<String>,
    short_name: Option<String>,
    amount: Option<String>,
    rate: Option<String>,
}

impl RawCurrency {
    fn slot(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Code => &mut self.code,
            Field::Name => &mut self.name,
            Field::ShortName => &mut self.short_name,
            Field::Amount => &mut self.amount,
            Field::Rate => &mut self.rate,
        }
    }

    fn into_currency(self) -> Currency {
        Currency {
            code: self.code.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            short_name: self.short_name.unwrap_or_default(),
            amount: parse_or_default(self.amount.as_deref().unwrap_or_default()),
            rate: parse_or_default(self.rate.as_deref().unwrap_or_default()),
        }
    }
}

/// Parse a daily rates document into its currency records.
///
/// Records come back in document order; a document with no `Currency`
/// elements parses to an empty vector. Field text is the first text node of
/// the first matching child tag, taken verbatim with no trimming or
/// normalization. Only structural malformation of the XML itself is an
/// error.
pub fn parse_daily_rates(xml: &str) -> Result<Vec<Currency>, RatesError> {
    let mut reader = Reader::from_str(xml);
    let mut currencies = Vec::new();
    let mut saw_element = false;
    let mut current: Option<RawCurrency> = None;
    // field whose first text node is still awaited
    let mut capture: Option<Field> = None;

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                saw_element = true;
                let name = start.local_name();
                match current.as_mut() {
                    None if name.as_ref() == CURRENCY_TAG => {
                        current = Some(RawCurrency::default());
                    }
                    Some(raw) => {
                        if let Some(field) = Field::for_tag(name.as_ref()) {
                            let slot = raw.slot(field);
                            // first matching tag wins; repeats are ignored
                            if slot.is_none() {
                                *slot = Some(String::new());
                                capture = Some(field);
                            }
                        }
                    }
                    None => {}
                }
            }
            Event::Empty(start) => {
                saw_element = true;
                let name = start.local_name();
                match current.as_mut() {
                    None if name.as_ref() == CURRENCY_TAG => {
                        currencies.push(Currency::default());
                    }
                    Some(raw) => {
                        if let Some(field) = Field::for_tag(name.as_ref()) {
                            let slot = raw.slot(field);
                            if slot.is_none() {
                                *slot = Some(String::new());
                            }
                        }
                    }
                    None => {}
                }
            }
            Event::Text(text) => {
                if let (Some(raw), Some(field)) = (current.as_mut(), capture.take()) {
                    if let Some(value) = raw.slot(field).as_mut() {
                        *value = text.unescape()?.into_owned();
                    }
                }
            }
            Event::CData(cdata) => {
                if let (Some(raw), Some(field)) = (current.as_mut(), capture.take()) {
                    let text = reader.decoder().decode(&cdata.into_inner())?.into_owned();
                    if let Some(value) = raw.slot(field).as_mut() {
                        *value = text;
                    }
                }
            }
            Event::End(end) => {
                if end.local_name().as_ref() == CURRENCY_TAG {
                    if let Some(raw) = current.take() {
                        currencies.push(raw.into_currency());
                    }
                }
                capture = None;
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !saw_element {
        return Err(RatesError::Parse(
            "missing root element in rates document".to_string(),
        ));
    }
    Ok(currencies)
}

/// Parse `raw` as `T`, recovering to `T::default()` on failure.
///
/// The feed occasionally carries empty or non-numeric text in a numeric
/// field. Policy is to zero that field and keep the record, rather than drop
/// the record or fail the whole document.
pub fn parse_or_default<T: FromStr + Default>(raw: &str) -> T {
    raw.parse().unwrap_or_default()
}

/// Keep only the records whose short code appears in `short_names`.
///
/// `None` returns the input unchanged. Matching is exact string equality of
/// the stored short code, case-sensitive and untrimmed, and relative order
/// is preserved; a duplicated entry in `short_names` does not duplicate
/// output records.
pub fn filter_by_short_names(
    records: Vec<Currency>,
    short_names: Option<&[String]>,
) -> Vec<Currency> {
    match short_names {
        None => records,
        Some(names) => records
            .into_iter()
            .filter(|currency| names.contains(&currency.short_name))
            .collect(),
    }
}
