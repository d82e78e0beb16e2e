//! NeoWs wire format and request building.
//!
//! Two response shapes are consumed: the feed (all close approaches in a
//! date range, keyed by day) and the lookup of a single object. NeoWs
//! encodes most physical quantities as JSON strings; those fields are
//! parsed to `f64` while deserializing. Fields the pages never display
//! are left undeclared and skipped by serde.

use std::collections::BTreeMap;
use std::env;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

#[derive(Clone, Debug)]
pub struct NeoWsConfig {
    pub base_url: String,
    pub api_key: String,
}

impl NeoWsConfig {
    /// `NEO_API_KEY` falls back to NASA's rate-limited demo key,
    /// `NEO_API_BASE` exists so tests can point at a local server.
    pub fn from_env() -> Self {
        NeoWsConfig {
            base_url: env::var("NEO_API_BASE")
                .unwrap_or_else(|_| String::from("https://api.nasa.gov")),
            api_key: env::var("NEO_API_KEY").unwrap_or_else(|_| String::from("DEMO_KEY")),
        }
    }

    pub fn feed_url(&self, date: NaiveDate) -> String {
        format!(
            "{}/neo/rest/v1/feed?start_date={}&end_date={}&api_key={}",
            self.base_url, date, date, self.api_key
        )
    }

    pub fn lookup_url(&self, id: u32) -> String {
        format!(
            "{}/neo/rest/v1/neo/{}?api_key={}",
            self.base_url, id, self.api_key
        )
    }
}

#[derive(Deserialize, Debug)]
pub struct NeoFeed {
    pub element_count: i64,
    pub near_earth_objects: FeedDays,
}

/// The feed object's keys are the days of the requested range.
#[derive(Deserialize, Debug)]
pub struct FeedDays {
    #[serde(flatten)]
    pub days: BTreeMap<NaiveDate, Vec<NeoSummary>>,
}

#[derive(Deserialize, Debug)]
pub struct NeoSummary {
    pub neo_reference_id: String,
    pub name: String,
    pub estimated_diameter: Diameters,
    pub is_potentially_hazardous_asteroid: bool,
    pub close_approach_data: Vec<CloseApproach>,
}

#[derive(Deserialize, Debug)]
pub struct Diameters {
    pub kilometers: DiameterRange,
}

#[derive(Deserialize, Debug)]
pub struct DiameterRange {
    pub estimated_diameter_min: f64,
    pub estimated_diameter_max: f64,
}

#[derive(Deserialize, Debug)]
pub struct CloseApproach {
    pub close_approach_date: NaiveDate,
    pub close_approach_date_full: String,
    pub relative_velocity: Velocity,
    pub miss_distance: MissDistance,
    pub orbiting_body: String,
}

#[derive(Deserialize, Debug)]
pub struct Velocity {
    #[serde(deserialize_with = "string_to_f64")]
    pub kilometers_per_hour: f64,
}

#[derive(Deserialize, Debug)]
pub struct MissDistance {
    #[serde(deserialize_with = "string_to_f64")]
    pub kilometers: f64,
}

#[derive(Deserialize, Debug)]
pub struct NeoRecord {
    pub neo_reference_id: String,
    pub name: String,
    pub designation: String,
    pub nasa_jpl_url: String,
    pub absolute_magnitude_h: f64,
    pub estimated_diameter: Diameters,
    pub is_potentially_hazardous_asteroid: bool,
    pub close_approach_data: Vec<CloseApproach>,
    pub orbital_data: OrbitalData,
}

#[derive(Deserialize, Debug)]
pub struct OrbitalData {
    pub eccentricity: String,
    pub inclination: String,
    pub orbital_period: String,
    pub orbit_class: OrbitClass,
}

#[derive(Deserialize, Debug)]
pub struct OrbitClass {
    pub orbit_class_description: String,
}

fn string_to_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let s: String = Deserialize::deserialize(deserializer)?;
    s.parse::<f64>().map_err(serde::de::Error::custom)
}
