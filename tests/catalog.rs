use neo_impact_calculator::catalog::{CatalogError, demo_catalog, parse_feed};

const FEED_SAMPLE: &str = r#"{
  "element_count": 3,
  "near_earth_objects": {
    "2025-08-24": [
      {
        "id": "54016476",
        "name": "(2020 HT7)",
        "nasa_jpl_url": "http://ssd.jpl.nasa.gov/sbdb.cgi?sstr=54016476",
        "absolute_magnitude_h": 26.1,
        "estimated_diameter": {
          "kilometers": {
            "estimated_diameter_min": 0.0146,
            "estimated_diameter_max": 0.0325
          }
        },
        "is_potentially_hazardous_asteroid": false,
        "close_approach_data": [
          {
            "close_approach_date": "2025-08-24",
            "relative_velocity": { "kilometers_per_second": "8.0766", "kilometers_per_hour": "29075.9" },
            "miss_distance": { "kilometers": "4622496.5", "astronomical": "0.0309" }
          }
        ]
      }
    ],
    "2025-08-23": [
      {
        "id": "3726710",
        "name": "(2015 RC)",
        "estimated_diameter": {
          "kilometers": {
            "estimated_diameter_min": 0.013,
            "estimated_diameter_max": 0.029
          }
        },
        "is_potentially_hazardous_asteroid": true,
        "close_approach_data": [
          {
            "close_approach_date": "2025-08-23",
            "relative_velocity": { "kilometers_per_second": "19.49" },
            "miss_distance": { "kilometers": "4027962.7" }
          }
        ]
      },
      {
        "id": "2465633",
        "name": "465633 (2009 JR5)",
        "estimated_diameter": {
          "kilometers": {
            "estimated_diameter_min": 0.2170475943,
            "estimated_diameter_max": 0.4853331752
          }
        },
        "is_potentially_hazardous_asteroid": true,
        "close_approach_data": []
      }
    ]
  }
}"#;

#[test]
fn feed_parses_and_flattens_in_date_order() {
    let feed = parse_feed(FEED_SAMPLE).expect("valid feed JSON");
    assert_eq!(feed.element_count, 3);

    let objects = feed.into_objects();
    assert_eq!(objects.len(), 3);
    // 2025-08-23 entries come before 2025-08-24 regardless of JSON key order.
    assert_eq!(objects[0].name, "(2015 RC)");
    assert_eq!(objects[2].name, "(2020 HT7)");
    assert!(objects[0].is_potentially_hazardous_asteroid);

    // Unknown fields in the response (kilometers_per_hour) are ignored,
    // and optional ones (nasa_jpl_url, astronomical) default quietly.
    assert_eq!(objects[0].nasa_jpl_url, "");
    assert_eq!(objects[0].approach_velocity_km_s().unwrap(), 19.49);
}

#[test]
fn feed_rejects_malformed_json() {
    let result = parse_feed("{ not json");
    assert!(matches!(result, Err(CatalogError::Json(_))));
}

#[test]
fn missing_close_approach_data_is_an_error() {
    let feed = parse_feed(FEED_SAMPLE).unwrap();
    let objects = feed.into_objects();
    let bare = &objects[1];
    assert_eq!(bare.name, "465633 (2009 JR5)");
    assert!(matches!(
        bare.approach_velocity_km_s(),
        Err(CatalogError::MissingCloseApproach { ref name }) if name == "465633 (2009 JR5)"
    ));
    assert!(bare.miss_distance_km().is_err());
}

#[test]
fn non_numeric_velocity_string_is_an_error() {
    let mut objects = demo_catalog();
    objects[0].close_approach_data[0]
        .relative_velocity
        .kilometers_per_second = "fast".to_string();
    assert!(matches!(
        objects[0].approach_velocity_km_s(),
        Err(CatalogError::InvalidNumericField { field: "relative velocity", .. })
    ));
}

#[test]
fn demo_catalog_matches_published_estimates() {
    let objects = demo_catalog();
    assert_eq!(objects.len(), 3);

    let eros = &objects[0];
    assert_eq!(eros.id, "2000433");
    assert_eq!(eros.name, "433 Eros");
    assert!(!eros.is_potentially_hazardous_asteroid);
    // Mean of 16.8 km and 37.6 km, converted to metres.
    assert!((eros.average_diameter_m() - 27_200.0).abs() < 1e-6);
    assert_eq!(eros.approach_velocity_km_s().unwrap(), 23.5);
    assert_eq!(eros.miss_distance_km().unwrap(), 54_000_000.0);

    let apophis = &objects[2];
    assert_eq!(apophis.name, "99942 Apophis");
    assert!(apophis.is_potentially_hazardous_asteroid);
    assert_eq!(apophis.approach_velocity_km_s().unwrap(), 30.7);

    assert!(objects[1].is_potentially_hazardous_asteroid);
}
