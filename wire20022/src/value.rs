//! Leaf values and the converters between them
//!
//! Every copy moves exactly one [`Value`]. Leaf types convert to and from it
//! through [`Leaf`]; the conversions are the only coercions the engine performs.

use crate::error::AccessError;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Value read from or written to a leaf
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Any text-like leaf
    Text(String),
    /// Amounts, sums and sequence numbers
    Decimal(Decimal),
    /// Indicators
    Bool(bool),
    /// Timestamp with offset
    DateTime(DateTime<FixedOffset>),
    /// Calendar date
    Date(NaiveDate),
}

impl Value {
    /// Short type name used in conversion errors
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Text(_) => "text",
            Value::Decimal(_) => "decimal",
            Value::Bool(_) => "bool",
            Value::DateTime(_) => "date-time",
            Value::Date(_) => "date",
        }
    }

    /// Zero value of its type: empty text, zero, `false`
    pub fn is_blank(&self) -> bool {
        match self {
            Value::Text(text) => text.is_empty(),
            Value::Decimal(d) => d.is_zero(),
            Value::Bool(b) => !*b,
            Value::DateTime(_) | Value::Date(_) => false,
        }
    }

    /// Canonical text form
    pub fn into_text(self) -> String {
        match self {
            Value::Text(text) => text,
            Value::Decimal(d) => d.normalize().to_string(),
            Value::Bool(b) => b.to_string(),
            Value::DateTime(dt) => format_datetime(&dt),
            Value::Date(date) => format_date(&date),
        }
    }

    /// Decimal, parsing text
    pub fn into_decimal(self) -> Result<Decimal, AccessError> {
        match self {
            Value::Decimal(d) => Ok(d),
            Value::Text(text) => parse_decimal(&text),
            other => Err(mismatch(&other, "decimal")),
        }
    }

    /// Boolean, parsing text
    pub fn into_bool(self) -> Result<bool, AccessError> {
        match self {
            Value::Bool(b) => Ok(b),
            Value::Text(text) => match text.trim() {
                "true" | "1" => Ok(true),
                "false" | "0" => Ok(false),
                _ => Err(AccessError::InvalidBool(text)),
            },
            other => Err(mismatch(&other, "bool")),
        }
    }

    /// Timestamp; dates become midnight UTC
    pub fn into_datetime(self) -> Result<DateTime<FixedOffset>, AccessError> {
        match self {
            Value::DateTime(dt) => Ok(dt),
            Value::Date(date) => midnight(date),
            Value::Text(text) => parse_datetime(&text),
            other => Err(mismatch(&other, "date-time")),
        }
    }

    /// Calendar date; timestamps are truncated
    pub fn into_date(self) -> Result<NaiveDate, AccessError> {
        match self {
            Value::Date(date) => Ok(date),
            Value::DateTime(dt) => Ok(dt.date_naive()),
            Value::Text(text) => parse_date(&text),
            other => Err(mismatch(&other, "date")),
        }
    }
}

fn mismatch(value: &Value, to: &'static str) -> AccessError {
    AccessError::TypeMismatch {
        from: value.type_name(),
        to,
    }
}

fn midnight(date: NaiveDate) -> Result<DateTime<FixedOffset>, AccessError> {
    let naive = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| AccessError::InvalidDateTime(date.to_string()))?;
    Ok(Utc.from_utc_datetime(&naive).into())
}

/// Parse decimal text, accepting scientific notation
pub fn parse_decimal(text: &str) -> Result<Decimal, AccessError> {
    let trimmed = text.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| AccessError::InvalidNumber(text.to_string()))
}

/// Parse an ISO date-time; a missing offset means UTC
pub fn parse_datetime(text: &str) -> Result<DateTime<FixedOffset>, AccessError> {
    let trimmed = text.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt);
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(Utc.from_utc_datetime(&naive).into());
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return midnight(date);
    }
    Err(AccessError::InvalidDateTime(text.to_string()))
}

/// Parse an ISO date; a full timestamp is truncated
pub fn parse_date(text: &str) -> Result<NaiveDate, AccessError> {
    let trimmed = text.trim();
    match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        Ok(date) => Ok(date),
        Err(_) => parse_datetime(trimmed).map(|dt| dt.date_naive()),
    }
}

/// ISO text form of a timestamp, `Z` for UTC
pub fn format_datetime(dt: &DateTime<FixedOffset>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// ISO text form of a date
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Conversion between a leaf type and [`Value`]
pub trait Leaf: Sized {
    /// Current value
    fn to_value(&self) -> Value;

    /// Build from a value, coercing or rejecting it
    fn from_value(value: Value) -> Result<Self, AccessError>;

    /// Zero value of the type (treated as absent when copying to a document)
    fn is_zero(&self) -> bool {
        false
    }
}

impl Leaf for String {
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }

    fn from_value(value: Value) -> Result<Self, AccessError> {
        Ok(value.into_text())
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl Leaf for Decimal {
    fn to_value(&self) -> Value {
        Value::Decimal(*self)
    }

    fn from_value(value: Value) -> Result<Self, AccessError> {
        value.into_decimal()
    }

    fn is_zero(&self) -> bool {
        Decimal::is_zero(self)
    }
}

impl Leaf for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }

    fn from_value(value: Value) -> Result<Self, AccessError> {
        value.into_bool()
    }

    fn is_zero(&self) -> bool {
        !*self
    }
}

impl Leaf for DateTime<Utc> {
    fn to_value(&self) -> Value {
        Value::DateTime((*self).into())
    }

    fn from_value(value: Value) -> Result<Self, AccessError> {
        Ok(value.into_datetime()?.with_timezone(&Utc))
    }
}

impl Leaf for NaiveDate {
    fn to_value(&self) -> Value {
        Value::Date(*self)
    }

    fn from_value(value: Value) -> Result<Self, AccessError> {
        value.into_date()
    }
}
