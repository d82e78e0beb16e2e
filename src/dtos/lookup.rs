use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct NeoDetailsDto {
    pub reference_id: String,
    pub name: String,
    pub designation: String,
    pub jpl_url: String,
    pub absolute_magnitude: f64,
    pub diameter_km_min: f64,
    pub diameter_km_max: f64,
    pub hazardous: bool,
    pub orbit: OrbitDto,
    pub approaches: Vec<ApproachDto>,
}

/// Orbital elements stay in the string form NeoWs delivers them in; they
/// are display-only and carry more precision than f64 guarantees.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct OrbitDto {
    pub eccentricity: String,
    pub inclination: String,
    pub orbital_period: String,
    pub class_description: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ApproachDto {
    pub date: NaiveDate,
    pub velocity_kph: f64,
    pub miss_distance_km: f64,
    pub orbiting_body: String,
}
