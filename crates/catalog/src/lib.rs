//! Near-Earth object records in the shape of NASA's NeoWs feed.
//!
//! Field names mirror the NeoWs JSON so records deserialize straight from
//! the API response. Close-approach velocity and miss distance arrive as
//! numeric strings in the feed; the accessor methods own that parse and
//! surface failures as [`CatalogError`].

use std::collections::BTreeMap;

use neo_core::units::km_to_m;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One catalog record, matching a NeoWs `near_earth_objects` entry.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct NearEarthObject {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub nasa_jpl_url: String,
    #[serde(default)]
    pub absolute_magnitude_h: Option<f64>,
    pub estimated_diameter: EstimatedDiameter,
    pub is_potentially_hazardous_asteroid: bool,
    #[serde(default)]
    pub close_approach_data: Vec<CloseApproach>,
}

/// Diameter estimates keyed by unit; the feed carries more units but
/// kilometres is the only one this catalog consumes.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct EstimatedDiameter {
    pub kilometers: DiameterRangeKm,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct DiameterRangeKm {
    pub estimated_diameter_min: f64,
    pub estimated_diameter_max: f64,
}

/// One close-approach event for a record.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct CloseApproach {
    #[serde(default)]
    pub close_approach_date: String,
    pub relative_velocity: RelativeVelocity,
    pub miss_distance: MissDistance,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct RelativeVelocity {
    pub kilometers_per_second: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct MissDistance {
    pub kilometers: String,
    #[serde(default)]
    pub astronomical: Option<String>,
}

/// Envelope of the NeoWs feed endpoint: objects grouped by approach date.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct NeoFeed {
    pub element_count: u64,
    pub near_earth_objects: BTreeMap<String, Vec<NearEarthObject>>,
}

impl NeoFeed {
    /// Flatten the per-date groups into a single list, date-ordered.
    pub fn into_objects(self) -> Vec<NearEarthObject> {
        self.near_earth_objects
            .into_values()
            .flatten()
            .collect()
    }
}

/// Errors surfaced while parsing feed JSON or record fields.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse NEO feed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("record `{name}` has no close-approach data")]
    MissingCloseApproach { name: String },
    #[error("record `{name}` reports a non-numeric {field}: {value:?}")]
    InvalidNumericField {
        name: String,
        field: &'static str,
        value: String,
    },
}

/// Parse a raw NeoWs feed response body.
pub fn parse_feed(json: &str) -> Result<NeoFeed, CatalogError> {
    Ok(serde_json::from_str(json)?)
}

impl NearEarthObject {
    /// Mean of the minimum and maximum estimated diameter, in metres.
    pub fn average_diameter_m(&self) -> f64 {
        let km = &self.estimated_diameter.kilometers;
        km_to_m((km.estimated_diameter_min + km.estimated_diameter_max) / 2.0)
    }

    fn first_approach(&self) -> Result<&CloseApproach, CatalogError> {
        self.close_approach_data
            .first()
            .ok_or_else(|| CatalogError::MissingCloseApproach {
                name: self.name.clone(),
            })
    }

    /// Relative velocity of the first close approach, parsed from the
    /// feed's numeric string (km/s).
    pub fn approach_velocity_km_s(&self) -> Result<f64, CatalogError> {
        let approach = self.first_approach()?;
        parse_numeric(
            &self.name,
            "relative velocity",
            &approach.relative_velocity.kilometers_per_second,
        )
    }

    /// Miss distance of the first close approach (km).
    pub fn miss_distance_km(&self) -> Result<f64, CatalogError> {
        let approach = self.first_approach()?;
        parse_numeric(&self.name, "miss distance", &approach.miss_distance.kilometers)
    }
}

fn parse_numeric(name: &str, field: &'static str, value: &str) -> Result<f64, CatalogError> {
    value
        .parse()
        .map_err(|_| CatalogError::InvalidNumericField {
            name: name.to_string(),
            field,
            value: value.to_string(),
        })
}

/// Approach date carried by the demo records.
pub const DEMO_APPROACH_DATE: &str = "2025-01-01";

/// Fixed three-record catalog used when the live feed is unreachable.
///
/// The numbers are real published estimates for 433 Eros, 2010 PK9, and
/// 99942 Apophis, so the fallback still exercises realistic scales.
pub fn demo_catalog() -> Vec<NearEarthObject> {
    vec![
        demo_record(
            "2000433",
            "433 Eros",
            "http://ssd.jpl.nasa.gov/sbdb.cgi?sstr=2000433",
            10.4,
            (16.8, 37.6),
            false,
            "23.5",
            ("54000000", "0.361"),
        ),
        demo_record(
            "3542519",
            "(2010 PK9)",
            "http://ssd.jpl.nasa.gov/sbdb.cgi?sstr=3542519",
            21.7,
            (0.12, 0.27),
            true,
            "18.7",
            ("7500000", "0.05"),
        ),
        demo_record(
            "2099942",
            "99942 Apophis",
            "http://ssd.jpl.nasa.gov/sbdb.cgi?sstr=2099942",
            19.7,
            (0.31, 0.70),
            true,
            "30.7",
            ("31000000", "0.207"),
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn demo_record(
    id: &str,
    name: &str,
    jpl_url: &str,
    magnitude: f64,
    diameter_km: (f64, f64),
    hazardous: bool,
    velocity_km_s: &str,
    miss_distance: (&str, &str),
) -> NearEarthObject {
    NearEarthObject {
        id: id.to_string(),
        name: name.to_string(),
        nasa_jpl_url: jpl_url.to_string(),
        absolute_magnitude_h: Some(magnitude),
        estimated_diameter: EstimatedDiameter {
            kilometers: DiameterRangeKm {
                estimated_diameter_min: diameter_km.0,
                estimated_diameter_max: diameter_km.1,
            },
        },
        is_potentially_hazardous_asteroid: hazardous,
        close_approach_data: vec![CloseApproach {
            close_approach_date: DEMO_APPROACH_DATE.to_string(),
            relative_velocity: RelativeVelocity {
                kilometers_per_second: velocity_km_s.to_string(),
            },
            miss_distance: MissDistance {
                kilometers: miss_distance.0.to_string(),
                astronomical: Some(miss_distance.1.to_string()),
            },
        }],
    }
}
