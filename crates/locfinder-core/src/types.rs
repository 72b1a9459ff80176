//! Filter enumerations and value types shared by the query parameter
//! variants and the response schema.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ParamsError;

/// Declares a closed enum whose variants map one-to-one onto canonical wire
/// strings, with `as_str`, `Display` and `FromStr` derived from that table.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $err:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Canonical lowercase wire string.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParamsError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $($wire => Ok($name::$variant),)+
                    other => Err(ParamsError::$err(other.to_string())),
                }
            }
        }
    };
}

wire_enum! {
    /// Carrier network a service point belongs to.
    ProviderType, UnknownProviderType {
        Express => "express",
        Parcel => "parcel",
    }
}

wire_enum! {
    /// Physical kind of service point.
    LocationType, UnknownLocationType {
        ServicePoint => "servicepoint",
        Locker => "locker",
        PostOffice => "postoffice",
        Postbank => "postbank",
        PoBox => "pobox",
        Postbox => "postbox",
    }
}

wire_enum! {
    /// Service offered at a location.
    ServiceType, UnknownServiceType {
        ParcelPickUpAll => "parcel:pick-up-all",
        ParcelDropOffAll => "parcel:drop-off-all",
        AgeVerification => "age-verification",
        CashOnDelivery => "cash-on-delivery",
        CashService => "cash-service",
        ExpressDropOff => "express:drop-off",
        ExpressDropOffAccount => "express:drop-off-account",
        ExpressDropOffEasy => "express:drop-off-easy",
        ExpressDropOffPrelabeled => "express:drop-off-prelabeled",
        ExpressDropOffUnlabeled => "express:drop-off-unlabeled",
        ExpressPickUp => "express:pick-up",
        Franking => "franking",
        HandicappedAccess => "handicapped-access",
        LetterService => "letter-service",
        PackagingMaterial => "packaging-material",
        ParcelDropOff => "parcel:drop-off",
        ParcelDropOffFirstmile => "parcel:drop-off-firstmile",
        ParcelDropOffFirstmileUnlabeled => "parcel:drop-off-firstmile-unlabeled",
        ParcelDropOffReturn => "parcel:drop-off-return",
        ParcelDropOffReturnUnlabeled => "parcel:drop-off-return-unlabeled",
        ParcelDropOffUnlabeled => "parcel:drop-off-unlabeled",
        ParcelDropOffUnregistered => "parcel:drop-off-unregistered",
        ParcelPickUp => "parcel:pick-up",
        ParcelPickUpRegistered => "parcel:pick-up-registered",
        ParcelPickUpUnregistered => "parcel:pick-up-unregistered",
        Parking => "parking",
        Postbank => "postbank",
        Postident => "postident",
    }
}

/// ISO 3166-1 alpha-2 country code, stored uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountryCode(String);

impl CountryCode {
    /// Validates and normalises a two-letter country code.
    ///
    /// # Errors
    ///
    /// Returns [`ParamsError::InvalidCountryCode`] unless `raw` is exactly
    /// two ASCII letters.
    pub fn parse(raw: &str) -> Result<Self, ParamsError> {
        if raw.len() == 2 && raw.bytes().all(|b| b.is_ascii_alphabetic()) {
            Ok(Self(raw.to_ascii_uppercase()))
        } else {
            Err(ParamsError::InvalidCountryCode(raw.to_string()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CountryCode {
    type Err = ParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CountryCode {
    type Error = ParamsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CountryCode> for String {
    fn from(code: CountryCode) -> Self {
        code.0
    }
}
