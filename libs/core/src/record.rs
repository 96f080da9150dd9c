use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::FetchError;

/// One row of the names sheet: a name observed in a given year.
///
/// The sheet is loosely typed, so every field is validated here and columns
/// other than these four are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRecord {
    #[serde(default, deserialize_with = "text_or_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub year: String,
    /// `None` when the sheet cell holds nothing that reads as an integer.
    #[serde(default, deserialize_with = "lenient_rank")]
    pub rank: Option<i64>,
    #[serde(default, deserialize_with = "optional_text")]
    pub meaning: Option<String>,
}

impl NameRecord {
    pub fn new(name: &str, year: &str, rank: Option<i64>, meaning: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            year: year.to_string(),
            rank,
            meaning: meaning.map(str::to_string),
        }
    }

    /// Rank clamped to the unranked value for anything below 1.
    pub fn rank_value(&self) -> Option<u64> {
        self.rank.map(|rank| u64::try_from(rank).unwrap_or(0))
    }
}

/// Parses a response body that must be a JSON array of row objects.
pub fn parse_records(body: &str) -> Result<Vec<NameRecord>, FetchError> {
    let records = serde_json::from_str::<Vec<NameRecord>>(body)?;
    Ok(records)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Cell {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
    Other(IgnoredAny),
}

fn text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_text(deserializer)?.unwrap_or_default())
}

fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let cell = Option::<Cell>::deserialize(deserializer)?;
    Ok(match cell {
        Some(Cell::Text(text)) => Some(text),
        Some(Cell::Int(value)) => Some(value.to_string()),
        Some(Cell::Float(value)) => Some(value.to_string()),
        Some(Cell::Bool(value)) => Some(value.to_string()),
        Some(Cell::Other(_)) | None => None,
    })
}

fn lenient_rank<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let cell = Option::<Cell>::deserialize(deserializer)?;
    Ok(match cell {
        Some(Cell::Int(value)) => Some(value),
        Some(Cell::Float(value)) => truncate_float(value),
        Some(Cell::Text(text)) => leading_integer(&text),
        Some(Cell::Bool(_) | Cell::Other(_)) | None => None,
    })
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn truncate_float(value: f64) -> Option<i64> {
    if !value.is_finite() || value.abs() >= i64::MAX as f64 {
        return None;
    }
    Some(value.trunc() as i64)
}

/// Reads the integer at the start of `text`: "12", " 7 " and "12th" all
/// yield a value, "abc" and "" do not.
pub fn leading_integer(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let magnitude = rest[..digits_len].parse::<i64>().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
