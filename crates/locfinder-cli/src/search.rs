//! Command handlers for the four lookup subcommands.
//!
//! Each handler builds the query parameters, performs one call, prints the
//! success payload as pretty JSON on stdout and returns `true`. A structured
//! failure from the upstream is printed to stderr and returns `false`.

use chrono::NaiveDate;
use clap::Args;
use locfinder_client::LocationFinderClient;
use locfinder_core::params::{DEFAULT_LIMIT, DEFAULT_RADIUS};
use locfinder_core::{
    CountryCode, Envelope, FindByAddressParams, FindByGeoParams, FindByKeywordIdParams,
    LocationType, ProviderType, ServiceType,
};
use serde::Serialize;

/// Filters shared by the address and geo searches.
#[derive(Debug, Args)]
pub struct FilterArgs {
    /// Provider types, comma-separated (express,parcel)
    #[arg(long, value_delimiter = ',')]
    pub provider_type: Option<Vec<ProviderType>>,
    /// Location types, comma-separated (e.g. locker,postoffice)
    #[arg(long, value_delimiter = ',')]
    pub location_type: Option<Vec<LocationType>>,
    /// Service types, comma-separated (e.g. parcel:pick-up,parking)
    #[arg(long, value_delimiter = ',')]
    pub service_type: Option<Vec<ServiceType>>,
    /// Search radius in metres
    #[arg(long, default_value_t = DEFAULT_RADIUS)]
    pub radius: u32,
    /// Maximum number of locations to return
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    pub limit: u32,
    /// Leave out locations that are currently closed
    #[arg(long)]
    pub hide_closed: bool,
    /// Reference date for opening state (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Args)]
pub struct AddressArgs {
    /// ISO 3166-1 alpha-2 country code
    #[arg(long)]
    pub country: CountryCode,
    /// City or town
    #[arg(long)]
    pub locality: Option<String>,
    #[arg(long)]
    pub postal_code: Option<String>,
    /// Street and house number
    #[arg(long)]
    pub street: Option<String>,
    #[command(flatten)]
    pub filters: FilterArgs,
}

#[derive(Debug, Args)]
pub struct GeoArgs {
    #[arg(long, allow_hyphen_values = true)]
    pub latitude: f64,
    #[arg(long, allow_hyphen_values = true)]
    pub longitude: f64,
    /// Restrict results to one country
    #[arg(long)]
    pub country: Option<CountryCode>,
    #[command(flatten)]
    pub filters: FilterArgs,
}

impl AddressArgs {
    pub(crate) fn into_params(self) -> FindByAddressParams {
        let filters = self.filters;
        FindByAddressParams {
            country_code: self.country,
            address_locality: self.locality,
            postal_code: self.postal_code,
            street_address: self.street,
            provider_type: filters.provider_type,
            location_type: filters.location_type,
            service_type: filters.service_type,
            radius: filters.radius,
            limit: filters.limit,
            hide_closed_locations: filters.hide_closed,
            current_date: filters.date,
        }
    }
}

impl GeoArgs {
    pub(crate) fn into_params(self) -> anyhow::Result<FindByGeoParams> {
        let filters = self.filters;
        let mut params = FindByGeoParams::new(self.latitude, self.longitude)?
            .with_radius(filters.radius)
            .with_limit(filters.limit)
            .with_hide_closed_locations(filters.hide_closed);
        if let Some(types) = filters.provider_type {
            params = params.with_provider_types(types);
        }
        if let Some(types) = filters.location_type {
            params = params.with_location_types(types);
        }
        if let Some(types) = filters.service_type {
            params = params.with_service_types(types);
        }
        if let Some(country) = self.country {
            params = params.with_country_code(country);
        }
        if let Some(date) = filters.date {
            params = params.with_current_date(date);
        }
        Ok(params)
    }
}

pub(crate) async fn run_address(
    client: &LocationFinderClient,
    args: AddressArgs,
) -> anyhow::Result<bool> {
    let params = args.into_params();
    let envelope = client.find_by_address(&params).await?;
    report(envelope)
}

pub(crate) async fn run_geo(client: &LocationFinderClient, args: GeoArgs) -> anyhow::Result<bool> {
    let params = args.into_params()?;
    let envelope = client.find_by_geo(&params).await?;
    report(envelope)
}

pub(crate) async fn run_keyword(
    client: &LocationFinderClient,
    keyword_id: String,
    country: CountryCode,
    postal_code: String,
) -> anyhow::Result<bool> {
    let params = FindByKeywordIdParams::new(keyword_id, country, postal_code);
    let envelope = client.find_by_keyword_id(&params).await?;
    report(envelope)
}

pub(crate) async fn run_location(client: &LocationFinderClient, id: &str) -> anyhow::Result<bool> {
    let envelope = client.find_by_location_id(id).await?;
    report(envelope)
}

/// Prints the payload or the failure and reports which one it was.
fn report<T: Serialize>(envelope: Envelope<T>) -> anyhow::Result<bool> {
    match envelope {
        Envelope::Success(payload) => {
            println!("{}", serde_json::to_string_pretty(&payload)?);
            Ok(true)
        }
        Envelope::Failure(failure) => {
            tracing::debug!(?failure, "lookup failed");
            eprintln!("lookup failed: {failure}");
            Ok(false)
        }
    }
}
