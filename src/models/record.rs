use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The single persisted document.
///
/// Every field falls back to its default when missing, so partially written
/// or hand-edited documents still load. Documents saved by the old browser
/// page (Spanish keys) decode through the aliases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersistedRecord {
    #[serde(alias = "empleado")]
    pub employee_name: String,

    #[serde(alias = "horas_contrato", deserialize_with = "lenient_hours")]
    pub contracted_hours_per_period: u32,

    #[serde(alias = "periodo")]
    pub period: Period,

    #[serde(alias = "registro")]
    pub entries: BTreeMap<String, DayEntry>,
}

/// Inclusive period bounds, kept as the raw `YYYY-MM-DD` strings the user
/// entered. Parsing happens in the row generator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Period {
    #[serde(alias = "inicio", skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,

    #[serde(alias = "fin", skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

/// One day of the sheet. Empty strings mean "not entered yet".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DayEntry {
    #[serde(alias = "entrada")]
    pub time_in: String,

    #[serde(alias = "salida")]
    pub time_out: String,

    #[serde(alias = "notas")]
    pub notes: String,
}

impl PersistedRecord {
    pub fn entry(&self, key: &str) -> Option<&DayEntry> {
        self.entries.get(key)
    }
}

impl Period {
    pub fn new(start: Option<&str>, end: Option<&str>) -> Self {
        Self {
            start: start.map(str::to_string),
            end: end.map(str::to_string),
        }
    }

    pub fn start(&self) -> Option<&str> {
        self.start.as_deref()
    }

    pub fn end(&self) -> Option<&str> {
        self.end.as_deref()
    }
}

impl DayEntry {
    pub fn new(time_in: &str, time_out: &str, notes: &str) -> Self {
        Self {
            time_in: time_in.to_string(),
            time_out: time_out.to_string(),
            notes: notes.to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.time_in.is_empty() && self.time_out.is_empty() && self.notes.is_empty()
    }
}

/// Parse contracted hours the way the form field did: trim, optional `+`,
/// then the leading run of ASCII digits (`"40h"` → 40). Anything else,
/// negatives included, is absent.
pub fn parse_contracted_hours(text: &str) -> Option<u32> {
    let t = text.trim();
    let digits = t.strip_prefix('+').unwrap_or(t);
    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(digits.len());

    digits[..end].parse::<u32>().ok()
}

/// Accepts numbers, numeric strings and null; anything that does not yield a
/// non-negative integer becomes 0.
fn lenient_hours<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    struct HoursVisitor;

    impl<'de> Visitor<'de> for HoursVisitor {
        type Value = u32;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a number of hours")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<u32, E> {
            Ok(u32::try_from(v).unwrap_or(0))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<u32, E> {
            Ok(u32::try_from(v).unwrap_or(0))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<u32, E> {
            if v.is_finite() && v >= 0.0 && v <= u32::MAX as f64 {
                Ok(v.trunc() as u32)
            } else {
                Ok(0)
            }
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<u32, E> {
            Ok(parse_contracted_hours(v).unwrap_or(0))
        }

        fn visit_bool<E: de::Error>(self, _v: bool) -> Result<u32, E> {
            Ok(0)
        }

        fn visit_unit<E: de::Error>(self) -> Result<u32, E> {
            Ok(0)
        }

        fn visit_none<E: de::Error>(self) -> Result<u32, E> {
            Ok(0)
        }

        fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<u32, D::Error> {
            d.deserialize_any(HoursVisitor)
        }
    }

    deserializer.deserialize_any(HoursVisitor)
}
