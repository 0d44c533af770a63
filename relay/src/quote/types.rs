use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use serde_json::{Map, Value};

// Provider keys inside the "Global Quote" object.
pub const SYMBOL_KEY: &str = "01. symbol";
pub const OPEN_KEY: &str = "02. open";
pub const HIGH_KEY: &str = "03. high";
pub const LOW_KEY: &str = "04. low";
pub const PRICE_KEY: &str = "05. price";
pub const VOLUME_KEY: &str = "06. volume";
pub const LATEST_TRADING_DAY_KEY: &str = "07. latest trading day";
pub const PREVIOUS_CLOSE_KEY: &str = "08. previous close";
pub const CHANGE_KEY: &str = "09. change";
pub const CHANGE_PERCENT_KEY: &str = "10. change percent";

/// Raw `GLOBAL_QUOTE` response document.
///
/// The provider answers throttled or bad requests with 200 and one of the
/// advisory fields instead of a quote.
#[derive(Debug, Default, Deserialize)]
pub struct GlobalQuoteEnvelope {
    #[serde(rename = "Global Quote", default, deserialize_with = "quote_object")]
    pub global_quote: Option<Map<String, Value>>,

    #[serde(rename = "Note", default, deserialize_with = "advisory_text")]
    pub note: Option<String>,

    #[serde(rename = "Information", default, deserialize_with = "advisory_text")]
    pub information: Option<String>,

    #[serde(rename = "Error Message", default, deserialize_with = "advisory_text")]
    pub error_message: Option<String>,
}

/// `null` and `[]` carry no quote; any other non-object is malformed.
fn quote_object<'de, D>(de: D) -> Result<Option<Map<String, Value>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(de)? {
        Value::Object(map) => Ok(Some(map)),
        Value::Null => Ok(None),
        Value::Array(items) if items.is_empty() => Ok(None),
        other => Err(D::Error::custom(format!(
            "\"Global Quote\" is not an object: {other}"
        ))),
    }
}

/// Advisories are only logged; a value that is not a string is dropped.
fn advisory_text<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(de)? {
        Value::String(text) => Some(text),
        _ => None,
    })
}

impl GlobalQuoteEnvelope {
    /// Remaps the provider object into a [`Quote`].
    ///
    /// Returns `None` when the "Global Quote" object is missing or has no
    /// fields. Values are copied as-is; a key that is missing, or whose value
    /// is not a string, leaves its field empty.
    pub fn into_quote(self) -> Option<Quote> {
        let raw = self.global_quote.filter(|m| !m.is_empty())?;
        let field = |key: &str| raw.get(key).and_then(Value::as_str).map(str::to_owned);

        Some(Quote {
            symbol: field(SYMBOL_KEY),
            open: field(OPEN_KEY),
            high: field(HIGH_KEY),
            low: field(LOW_KEY),
            price: field(PRICE_KEY),
            volume: field(VOLUME_KEY),
            latest_trading_day: field(LATEST_TRADING_DAY_KEY),
            previous_close: field(PREVIOUS_CLOSE_KEY),
            change: field(CHANGE_KEY),
            change_percent: field(CHANGE_PERCENT_KEY),
        })
    }

    /// First advisory message the provider attached, if any.
    pub fn advisory(&self) -> Option<&str> {
        self.note
            .as_deref()
            .or(self.information.as_deref())
            .or(self.error_message.as_deref())
    }
}

/// Normalized quote returned to callers. Prices stay strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Quote {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_trading_day: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_close: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_percent: Option<String>,
}
