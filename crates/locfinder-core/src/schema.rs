//! Service-point response types.
//!
//! Incoming field names are `camelCase`; the Rust fields use the internal
//! `snake_case` names, and serialise that way too (serialisation is for
//! display only, never sent upstream). Required fields have no default, so a
//! response missing one fails to parse instead of being silently filled in.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{de, Deserialize, Deserializer, Serialize};

use crate::types::CountryCode;

/// One service point returned by the location finder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct ServicePoint {
    pub url: String,
    pub location: Location,
    pub name: String,
    /// Distance from the search origin in metres; only set by radius searches.
    #[serde(default, deserialize_with = "whole_metres")]
    pub distance: Option<u64>,
    pub place: Place,
    #[serde(default)]
    pub opening_hours: Vec<OpeningHours>,
    #[serde(default)]
    pub closure_periods: Vec<ClosurePeriod>,
    #[serde(default)]
    pub service_types: Vec<String>,
    #[serde(default)]
    pub available_capacity: Option<String>,
    #[serde(default, rename(deserialize = "averageCapacityDayOfWeek"))]
    pub average_capacity_per_day: Vec<AverageCapacityPerDay>,
}

/// Body of the list-shaped endpoints: `{ "locations": [ ... ] }`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LocationList {
    #[serde(default)]
    pub locations: Vec<ServicePoint>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct Location {
    pub ids: Vec<BusinessUnit>,
    pub keyword: String,
    pub keyword_id: String,
    #[serde(rename(deserialize = "type"))]
    pub kind: String,
    #[serde(default, rename(deserialize = "leanLocker"))]
    pub is_lean_locker: Option<bool>,
}

/// A provider-specific identifier for the same physical location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessUnit {
    #[serde(rename(deserialize = "locationId"))]
    pub id: String,
    pub provider: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub address: Address,
    pub geo: Geo,
    #[serde(default, rename(deserialize = "containedInPlace"))]
    pub contained_in: Option<ContainedInPlace>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct Address {
    pub country_code: CountryCode,
    pub postal_code: String,
    pub address_locality: String,
    pub street_address: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geo {
    pub latitude: f64,
    pub longitude: f64,
}

/// Shopping centre, station or similar the service point sits inside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainedInPlace {
    pub name: String,
}

/// One opening interval on one weekday. A day may have several.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningHours {
    #[serde(rename(deserialize = "opens"))]
    pub opens_at: NaiveTime,
    #[serde(rename(deserialize = "closes"))]
    pub closes_at: NaiveTime,
    /// Weekday as a schema.org link, e.g. `http://schema.org/Monday`.
    #[serde(rename(deserialize = "dayOfWeek"))]
    pub day_of_week: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosurePeriod {
    #[serde(rename(deserialize = "type"))]
    pub kind: String,
    #[serde(rename(deserialize = "fromDate"))]
    pub from_date: ClosureDate,
    // Upstream has been observed sending `to_date`; accept either spelling.
    #[serde(rename(deserialize = "toDate"), alias = "to_date")]
    pub to_date: ClosureDate,
}

/// Accepts `412` and `412.0`; a fractional or negative distance is rejected.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::float_cmp
)]
fn whole_metres<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawDistance {
        Whole(u64),
        Float(f64),
    }

    match Option::<RawDistance>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawDistance::Whole(metres)) => Ok(Some(metres)),
        Some(RawDistance::Float(metres))
            if metres.is_finite()
                && metres >= 0.0
                && metres.fract() == 0.0
                && metres < u64::MAX as f64 =>
        {
            Ok(Some(metres as u64))
        }
        Some(RawDistance::Float(metres)) => Err(de::Error::custom(format!(
            "distance must be a whole number of metres, got {metres}"
        ))),
    }
}

/// Closure boundary; the upstream sends either a plain date or a timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClosureDate {
    Zoned(DateTime<FixedOffset>),
    Local(NaiveDateTime),
    Date(NaiveDate),
}

impl ClosureDate {
    /// Calendar day of this boundary, dropping any time of day.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        match self {
            ClosureDate::Zoned(dt) => dt.date_naive(),
            ClosureDate::Local(dt) => dt.date(),
            ClosureDate::Date(d) => *d,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AverageCapacityPerDay {
    #[serde(rename(deserialize = "dayOfWeek"))]
    pub day: String,
    pub capacity: String,
}

#[cfg(test)]
#[path = "schema_test.rs"]
mod tests;
