//! Query parameter variants for the three search endpoints.
//!
//! Each variant lists its fields explicitly in [`QueryParams::to_request_format`],
//! so adding a field without encoding it is caught in review rather than at
//! runtime. Every declared field is emitted: unset optionals become an
//! explicit JSON `null`, never a missing key. Whether a `null` is sent on the
//! wire is decided by the transport.

use std::fmt::Display;

use chrono::NaiveDate;
use serde_json::{Map, Value};

use crate::casing::snake_to_camel;
use crate::types::{CountryCode, LocationType, ProviderType, ServiceType};
use crate::ParamsError;

/// Wire-format query mapping, keyed by `camelCase` field name in field
/// declaration order.
pub type WireParams = Map<String, Value>;

/// Default search radius in metres.
pub const DEFAULT_RADIUS: u32 = 5000;

/// Default maximum number of locations returned.
pub const DEFAULT_LIMIT: u32 = 15;

/// A search-mode parameter set that can be encoded for the upstream API.
pub trait QueryParams {
    /// Encodes every declared field into its wire name and wire value.
    fn to_request_format(&self) -> WireParams;
}

fn put(map: &mut WireParams, field: &str, value: Value) {
    map.insert(snake_to_camel(field), value);
}

fn opt_string(value: Option<&str>) -> Value {
    value.map_or(Value::Null, |s| Value::String(s.to_string()))
}

/// Absent stays `null`; present-but-empty becomes `[]`.
fn enum_list<T: Display>(values: Option<&[T]>) -> Value {
    values.map_or(Value::Null, |vs| {
        Value::Array(vs.iter().map(|v| Value::String(v.to_string())).collect())
    })
}

fn calendar_date(date: Option<NaiveDate>) -> Value {
    date.map_or(Value::Null, |d| {
        Value::String(d.format("%Y-%m-%d").to_string())
    })
}

// ---------------------------------------------------------------------------
// find-by-keyword-id
// ---------------------------------------------------------------------------

/// Parameters for `find-by-keyword-id`. All fields are required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindByKeywordIdParams {
    pub keyword_id: String,
    pub country_code: CountryCode,
    pub postal_code: String,
}

impl FindByKeywordIdParams {
    #[must_use]
    pub fn new(
        keyword_id: impl Into<String>,
        country_code: CountryCode,
        postal_code: impl Into<String>,
    ) -> Self {
        Self {
            keyword_id: keyword_id.into(),
            country_code,
            postal_code: postal_code.into(),
        }
    }
}

impl QueryParams for FindByKeywordIdParams {
    fn to_request_format(&self) -> WireParams {
        let mut map = WireParams::new();
        put(&mut map, "keyword_id", Value::String(self.keyword_id.clone()));
        put(
            &mut map,
            "country_code",
            Value::String(self.country_code.to_string()),
        );
        put(&mut map, "postal_code", Value::String(self.postal_code.clone()));
        map
    }
}

// ---------------------------------------------------------------------------
// find-by-address
// ---------------------------------------------------------------------------

/// Parameters for `find-by-address`.
///
/// Only `country_code` is required; use the `with_*` setters for the rest.
#[derive(Debug, Clone, PartialEq)]
pub struct FindByAddressParams {
    pub country_code: CountryCode,
    pub address_locality: Option<String>,
    pub postal_code: Option<String>,
    pub street_address: Option<String>,
    pub provider_type: Option<Vec<ProviderType>>,
    pub location_type: Option<Vec<LocationType>>,
    pub service_type: Option<Vec<ServiceType>>,
    /// Search radius in metres.
    pub radius: u32,
    pub limit: u32,
    pub hide_closed_locations: bool,
    pub current_date: Option<NaiveDate>,
}

impl FindByAddressParams {
    #[must_use]
    pub fn new(country_code: CountryCode) -> Self {
        Self {
            country_code,
            address_locality: None,
            postal_code: None,
            street_address: None,
            provider_type: None,
            location_type: None,
            service_type: None,
            radius: DEFAULT_RADIUS,
            limit: DEFAULT_LIMIT,
            hide_closed_locations: false,
            current_date: None,
        }
    }

    #[must_use]
    pub fn with_address_locality(mut self, locality: impl Into<String>) -> Self {
        self.address_locality = Some(locality.into());
        self
    }

    #[must_use]
    pub fn with_postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = Some(postal_code.into());
        self
    }

    #[must_use]
    pub fn with_street_address(mut self, street: impl Into<String>) -> Self {
        self.street_address = Some(street.into());
        self
    }

    #[must_use]
    pub fn with_provider_types(mut self, types: Vec<ProviderType>) -> Self {
        self.provider_type = Some(types);
        self
    }

    #[must_use]
    pub fn with_location_types(mut self, types: Vec<LocationType>) -> Self {
        self.location_type = Some(types);
        self
    }

    #[must_use]
    pub fn with_service_types(mut self, types: Vec<ServiceType>) -> Self {
        self.service_type = Some(types);
        self
    }

    #[must_use]
    pub fn with_radius(mut self, radius: u32) -> Self {
        self.radius = radius;
        self
    }

    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    #[must_use]
    pub fn with_hide_closed_locations(mut self, hide: bool) -> Self {
        self.hide_closed_locations = hide;
        self
    }

    #[must_use]
    pub fn with_current_date(mut self, date: NaiveDate) -> Self {
        self.current_date = Some(date);
        self
    }
}

impl QueryParams for FindByAddressParams {
    fn to_request_format(&self) -> WireParams {
        let mut map = WireParams::new();
        put(
            &mut map,
            "country_code",
            Value::String(self.country_code.to_string()),
        );
        put(
            &mut map,
            "address_locality",
            opt_string(self.address_locality.as_deref()),
        );
        put(&mut map, "postal_code", opt_string(self.postal_code.as_deref()));
        put(
            &mut map,
            "street_address",
            opt_string(self.street_address.as_deref()),
        );
        put(&mut map, "provider_type", enum_list(self.provider_type.as_deref()));
        put(&mut map, "location_type", enum_list(self.location_type.as_deref()));
        put(&mut map, "service_type", enum_list(self.service_type.as_deref()));
        put(&mut map, "radius", Value::from(self.radius));
        put(&mut map, "limit", Value::from(self.limit));
        put(
            &mut map,
            "hide_closed_locations",
            Value::Bool(self.hide_closed_locations),
        );
        put(&mut map, "current_date", calendar_date(self.current_date));
        map
    }
}

// ---------------------------------------------------------------------------
// find-by-geo
// ---------------------------------------------------------------------------

/// Parameters for `find-by-geo`.
///
/// The coordinates are private so they can only be set through the
/// range-checked [`FindByGeoParams::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct FindByGeoParams {
    latitude: f64,
    longitude: f64,
    pub provider_type: Option<Vec<ProviderType>>,
    pub location_type: Option<Vec<LocationType>>,
    pub service_type: Option<Vec<ServiceType>>,
    /// Search radius in metres.
    pub radius: u32,
    pub limit: u32,
    pub country_code: Option<CountryCode>,
    pub hide_closed_locations: bool,
    pub current_date: Option<NaiveDate>,
}

impl FindByGeoParams {
    /// Creates geo parameters with every optional field unset.
    ///
    /// # Errors
    ///
    /// Returns [`ParamsError::InvalidCoordinate`] when latitude is outside
    /// `-90..=90`, longitude is outside `-180..=180`, or either is not finite.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ParamsError> {
        if !(latitude.is_finite() && (-90.0..=90.0).contains(&latitude)) {
            return Err(ParamsError::InvalidCoordinate {
                axis: "latitude",
                value: latitude,
            });
        }
        if !(longitude.is_finite() && (-180.0..=180.0).contains(&longitude)) {
            return Err(ParamsError::InvalidCoordinate {
                axis: "longitude",
                value: longitude,
            });
        }

        Ok(Self {
            latitude,
            longitude,
            provider_type: None,
            location_type: None,
            service_type: None,
            radius: DEFAULT_RADIUS,
            limit: DEFAULT_LIMIT,
            country_code: None,
            hide_closed_locations: false,
            current_date: None,
        })
    }

    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    #[must_use]
    pub fn with_provider_types(mut self, types: Vec<ProviderType>) -> Self {
        self.provider_type = Some(types);
        self
    }

    #[must_use]
    pub fn with_location_types(mut self, types: Vec<LocationType>) -> Self {
        self.location_type = Some(types);
        self
    }

    #[must_use]
    pub fn with_service_types(mut self, types: Vec<ServiceType>) -> Self {
        self.service_type = Some(types);
        self
    }

    #[must_use]
    pub fn with_radius(mut self, radius: u32) -> Self {
        self.radius = radius;
        self
    }

    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    #[must_use]
    pub fn with_country_code(mut self, country_code: CountryCode) -> Self {
        self.country_code = Some(country_code);
        self
    }

    #[must_use]
    pub fn with_hide_closed_locations(mut self, hide: bool) -> Self {
        self.hide_closed_locations = hide;
        self
    }

    #[must_use]
    pub fn with_current_date(mut self, date: NaiveDate) -> Self {
        self.current_date = Some(date);
        self
    }
}

impl QueryParams for FindByGeoParams {
    fn to_request_format(&self) -> WireParams {
        let mut map = WireParams::new();
        put(&mut map, "latitude", Value::from(self.latitude));
        put(&mut map, "longitude", Value::from(self.longitude));
        put(&mut map, "provider_type", enum_list(self.provider_type.as_deref()));
        put(&mut map, "location_type", enum_list(self.location_type.as_deref()));
        put(&mut map, "service_type", enum_list(self.service_type.as_deref()));
        put(&mut map, "radius", Value::from(self.radius));
        put(&mut map, "limit", Value::from(self.limit));
        put(
            &mut map,
            "country_code",
            opt_string(self.country_code.as_ref().map(CountryCode::as_str)),
        );
        put(
            &mut map,
            "hide_closed_locations",
            Value::Bool(self.hide_closed_locations),
        );
        put(&mut map, "current_date", calendar_date(self.current_date));
        map
    }
}

#[cfg(test)]
#[path = "params_test.rs"]
mod tests;
