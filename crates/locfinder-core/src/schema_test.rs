use chrono::{NaiveDate, NaiveTime};
use serde_json::{json, Value};

use super::*;

/// A locker record shaped like a live `find-by-geo` response entry.
fn locker_json() -> Value {
    json!({
        "url": "/locations/8003-4103268",
        "location": {
            "ids": [
                { "locationId": "8003-4103268", "provider": "parcel" }
            ],
            "keyword": "Packstation",
            "keywordId": "153",
            "type": "locker",
            "leanLocker": false
        },
        "name": "Packstation 153",
        "distance": 412,
        "place": {
            "address": {
                "countryCode": "DE",
                "postalCode": "53113",
                "addressLocality": "Bonn",
                "streetAddress": "Charles-de-Gaulle-Str. 20"
            },
            "geo": { "latitude": 50.7160027, "longitude": 7.1300817 },
            "containedInPlace": { "name": "Post Tower" }
        },
        "openingHours": [
            { "opens": "00:00:00", "closes": "23:59:00", "dayOfWeek": "http://schema.org/Monday" },
            { "opens": "00:00:00", "closes": "23:59:00", "dayOfWeek": "http://schema.org/Tuesday" }
        ],
        "closurePeriods": [
            { "type": "maintenance", "fromDate": "2024-12-24", "toDate": "2024-12-26" }
        ],
        "serviceTypes": ["parcel:pick-up-registered", "parcel:drop-off"],
        "availableCapacity": "high",
        "averageCapacityDayOfWeek": [
            { "dayOfWeek": "http://schema.org/Monday", "capacity": "high" }
        ]
    })
}

/// Only the required fields.
fn minimal_json() -> Value {
    json!({
        "url": "/locations/8007-563491",
        "location": {
            "ids": [],
            "keyword": "Filiale",
            "keywordId": "502",
            "type": "postoffice"
        },
        "name": "Filiale 502",
        "place": {
            "address": {
                "countryCode": "DE",
                "postalCode": "10115",
                "addressLocality": "Berlin",
                "streetAddress": "Invalidenstr. 1"
            },
            "geo": { "latitude": 52.53, "longitude": 13.38 }
        }
    })
}

#[test]
fn full_record_maps_wire_names_to_fields() {
    let point: ServicePoint = serde_json::from_value(locker_json()).unwrap();

    assert_eq!(point.name, "Packstation 153");
    assert_eq!(point.distance, Some(412));
    assert_eq!(point.location.keyword_id, "153");
    assert_eq!(point.location.kind, "locker");
    assert_eq!(point.location.is_lean_locker, Some(false));
    assert_eq!(point.location.ids[0].id, "8003-4103268");
    assert_eq!(point.place.address.country_code.as_str(), "DE");
    assert_eq!(point.place.address.street_address, "Charles-de-Gaulle-Str. 20");
    assert_eq!(
        point.place.contained_in.as_ref().map(|c| c.name.as_str()),
        Some("Post Tower")
    );
    assert!((point.place.geo.latitude - 50.716_002_7).abs() < f64::EPSILON);
    assert_eq!(point.available_capacity.as_deref(), Some("high"));
    assert_eq!(point.service_types, ["parcel:pick-up-registered", "parcel:drop-off"]);
    assert_eq!(point.average_capacity_per_day[0].capacity, "high");
}

#[test]
fn opening_hours_keep_order_and_parse_times() {
    let point: ServicePoint = serde_json::from_value(locker_json()).unwrap();

    assert_eq!(point.opening_hours.len(), 2);
    assert_eq!(point.opening_hours[0].day_of_week, "http://schema.org/Monday");
    assert_eq!(point.opening_hours[1].day_of_week, "http://schema.org/Tuesday");
    assert_eq!(
        point.opening_hours[0].closes_at,
        NaiveTime::from_hms_opt(23, 59, 0).unwrap()
    );
}

#[test]
fn distance_accepts_whole_number_floats() {
    let mut body = locker_json();
    body["distance"] = json!(412.0);
    let point: ServicePoint = serde_json::from_value(body).unwrap();
    assert_eq!(point.distance, Some(412));

    let mut body = locker_json();
    body["distance"] = Value::Null;
    let point: ServicePoint = serde_json::from_value(body).unwrap();
    assert!(point.distance.is_none());
}

#[test]
fn fractional_or_negative_distance_fails() {
    for bad in [json!(412.5), json!(-3), json!(-3.0)] {
        let mut body = locker_json();
        body["distance"] = bad.clone();
        assert!(
            serde_json::from_value::<ServicePoint>(body).is_err(),
            "distance {bad} should be rejected"
        );
    }
}

#[test]
fn optional_fields_default_when_absent() {
    let point: ServicePoint = serde_json::from_value(minimal_json()).unwrap();

    assert!(point.distance.is_none());
    assert!(point.available_capacity.is_none());
    assert!(point.place.contained_in.is_none());
    assert!(point.location.is_lean_locker.is_none());
    assert!(point.opening_hours.is_empty());
    assert!(point.closure_periods.is_empty());
    assert!(point.service_types.is_empty());
    assert!(point.average_capacity_per_day.is_empty());
}

#[test]
fn missing_required_field_fails() {
    let mut body = minimal_json();
    body["place"]["address"]
        .as_object_mut()
        .unwrap()
        .remove("postalCode");

    assert!(serde_json::from_value::<ServicePoint>(body).is_err());
}

#[test]
fn wrong_primitive_type_fails() {
    let mut body = minimal_json();
    body["place"]["geo"]["latitude"] = json!("fifty");

    assert!(serde_json::from_value::<ServicePoint>(body).is_err());
}

#[test]
fn invalid_country_code_fails() {
    let mut body = minimal_json();
    body["place"]["address"]["countryCode"] = json!("DEU");

    assert!(serde_json::from_value::<ServicePoint>(body).is_err());
}

#[test]
fn closure_period_accepts_plain_dates() {
    let point: ServicePoint = serde_json::from_value(locker_json()).unwrap();
    let period = &point.closure_periods[0];

    assert_eq!(period.kind, "maintenance");
    assert_eq!(
        period.from_date,
        ClosureDate::Date(NaiveDate::from_ymd_opt(2024, 12, 24).unwrap())
    );
    assert_eq!(
        period.to_date.date(),
        NaiveDate::from_ymd_opt(2024, 12, 26).unwrap()
    );
}

#[test]
fn closure_period_accepts_timestamps() {
    let period: ClosurePeriod = serde_json::from_value(json!({
        "type": "holiday",
        "fromDate": "2024-12-24T12:00:00",
        "toDate": "2024-12-26T08:00:00+01:00"
    }))
    .unwrap();

    assert!(matches!(period.from_date, ClosureDate::Local(_)));
    assert!(matches!(period.to_date, ClosureDate::Zoned(_)));
    assert_eq!(
        period.from_date.date(),
        NaiveDate::from_ymd_opt(2024, 12, 24).unwrap()
    );
    assert_eq!(
        period.to_date.date(),
        NaiveDate::from_ymd_opt(2024, 12, 26).unwrap()
    );
}

#[test]
fn closure_period_accepts_underscored_to_date() {
    let period: ClosurePeriod = serde_json::from_value(json!({
        "type": "holiday",
        "fromDate": "2025-01-01",
        "to_date": "2025-01-02"
    }))
    .unwrap();

    assert_eq!(
        period.to_date,
        ClosureDate::Date(NaiveDate::from_ymd_opt(2025, 1, 2).unwrap())
    );
}

#[test]
fn location_list_defaults_to_empty() {
    let list: LocationList = serde_json::from_value(json!({})).unwrap();
    assert!(list.locations.is_empty());

    let list: LocationList =
        serde_json::from_value(json!({ "locations": [minimal_json(), locker_json()] })).unwrap();
    assert_eq!(list.locations.len(), 2);
    assert_eq!(list.locations[1].name, "Packstation 153");
}

#[test]
fn serializes_with_internal_field_names() {
    let point: ServicePoint = serde_json::from_value(locker_json()).unwrap();
    let out = serde_json::to_value(&point).unwrap();

    assert_eq!(out["location"]["keyword_id"], json!("153"));
    assert_eq!(out["opening_hours"][0]["opens_at"], json!("00:00:00"));
    assert!(out.get("openingHours").is_none());
}
