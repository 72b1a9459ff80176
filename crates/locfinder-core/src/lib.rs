//! Core types for the service-point location finder client.
//!
//! Everything in this crate is pure: query parameter encoding, response
//! schema parsing and the success/failure envelope carry no I/O. The HTTP
//! round trip lives in `locfinder-client`.

pub mod app_config;
pub mod casing;
pub mod config;
pub mod envelope;
pub mod params;
pub mod schema;
pub mod types;

use thiserror::Error;

pub use app_config::ClientConfig;
pub use casing::snake_to_camel;
pub use config::{load_client_config, load_client_config_from_env};
pub use envelope::{Envelope, FailureResponse};
pub use params::{
    FindByAddressParams, FindByGeoParams, FindByKeywordIdParams, QueryParams, WireParams,
};
pub use schema::{
    Address, AverageCapacityPerDay, BusinessUnit, ClosureDate, ClosurePeriod, ContainedInPlace,
    Geo, Location, LocationList, OpeningHours, Place, ServicePoint,
};
pub use types::{CountryCode, LocationType, ProviderType, ServiceType};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Caller-input errors raised while building query parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamsError {
    #[error("invalid country code {0:?}: expected two ASCII letters (ISO 3166-1 alpha-2)")]
    InvalidCountryCode(String),

    #[error("unknown provider type: {0}")]
    UnknownProviderType(String),

    #[error("unknown location type: {0}")]
    UnknownLocationType(String),

    #[error("unknown service type: {0}")]
    UnknownServiceType(String),

    #[error("{axis} {value} is out of range")]
    InvalidCoordinate { axis: &'static str, value: f64 },
}
