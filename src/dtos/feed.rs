use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct NeoFeedDto {
    pub date: NaiveDate,
    pub element_count: i64,
    pub rows: Vec<NeoRowDto>,
}

/// One object on the feed screen. Velocity and miss distance come from the
/// object's first close approach of the day.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NeoRowDto {
    pub reference_id: String,
    pub name: String,
    pub diameter_km: f64,
    pub velocity_kph: f64,
    pub miss_distance_km: f64,
    pub approach_time: String,
    pub hazardous: bool,
}
