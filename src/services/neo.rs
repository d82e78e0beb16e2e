use chrono::NaiveDate;
use leptos::prelude::*;

use crate::dtos::feed::{NeoFeedDto, NeoRowDto};
use crate::dtos::lookup::{ApproachDto, NeoDetailsDto, OrbitDto};
#[cfg(feature = "ssr")]
use crate::services::nasa::{NeoFeed, NeoRecord, NeoWsConfig};

#[server]
pub async fn fetch_feed(date: NaiveDate) -> Result<NeoFeedDto, ServerFnError> {
    use chrono::Utc;
    use leptos::logging::log;
    use reqwest::Client;

    let client: Client =
        use_context().ok_or(ServerFnError::new("Failed to retrieve the http client"))?;
    let config: NeoWsConfig =
        use_context().ok_or(ServerFnError::new("Failed to retrieve the NeoWs configuration"))?;

    if date > Utc::now().date_naive() {
        return Err(ServerFnError::new(
            "Close approach data only exists for dates up to today",
        ));
    }

    let response = client.get(config.feed_url(date)).send().await?;
    if !response.status().is_success() {
        log!(
            "NeoWs feed request for {} failed with status {}",
            date,
            response.status()
        );
        return Err(ServerFnError::new("NeoWs returned no feed for this date"));
    }

    Ok(into_feed_dto(date, response.json::<NeoFeed>().await?))
}

#[server]
pub async fn fetch_neo(id: u32) -> Result<NeoDetailsDto, ServerFnError> {
    use leptos::logging::log;
    use reqwest::Client;

    let client: Client =
        use_context().ok_or(ServerFnError::new("Failed to retrieve the http client"))?;
    let config: NeoWsConfig =
        use_context().ok_or(ServerFnError::new("Failed to retrieve the NeoWs configuration"))?;

    let response = client.get(config.lookup_url(id)).send().await?;
    if response.status() == reqwest::StatusCode::NOT_FOUND {
        return Err(ServerFnError::new("No object with this reference id"));
    }
    if !response.status().is_success() {
        log!(
            "NeoWs lookup of {} failed with status {}",
            id,
            response.status()
        );
        return Err(ServerFnError::new("NeoWs returned no object for this id"));
    }

    Ok(into_details_dto(response.json::<NeoRecord>().await?))
}

/// Flattens the day-keyed feed into display rows, closest approach first.
/// Velocity, distance and time come from the object's first listed close
/// approach; an object without one is dropped.
#[cfg(feature = "ssr")]
pub fn into_feed_dto(date: NaiveDate, feed: NeoFeed) -> NeoFeedDto {
    let mut rows = feed
        .near_earth_objects
        .days
        .into_values()
        .flatten()
        .filter_map(|neo| {
            let approach = neo.close_approach_data.into_iter().next()?;
            Some(NeoRowDto {
                reference_id: neo.neo_reference_id,
                name: neo.name,
                diameter_km: neo.estimated_diameter.kilometers.estimated_diameter_max,
                velocity_kph: approach.relative_velocity.kilometers_per_hour,
                miss_distance_km: approach.miss_distance.kilometers,
                approach_time: approach.close_approach_date_full,
                hazardous: neo.is_potentially_hazardous_asteroid,
            })
        })
        .collect::<Vec<_>>();
    rows.sort_by(|a, b| a.miss_distance_km.total_cmp(&b.miss_distance_km));

    NeoFeedDto {
        date,
        element_count: feed.element_count,
        rows,
    }
}

#[cfg(feature = "ssr")]
pub fn into_details_dto(record: NeoRecord) -> NeoDetailsDto {
    let approaches = record
        .close_approach_data
        .into_iter()
        .map(|approach| ApproachDto {
            date: approach.close_approach_date,
            velocity_kph: approach.relative_velocity.kilometers_per_hour,
            miss_distance_km: approach.miss_distance.kilometers,
            orbiting_body: approach.orbiting_body,
        })
        .collect();

    NeoDetailsDto {
        reference_id: record.neo_reference_id,
        name: record.name,
        designation: record.designation,
        jpl_url: record.nasa_jpl_url,
        absolute_magnitude: record.absolute_magnitude_h,
        diameter_km_min: record.estimated_diameter.kilometers.estimated_diameter_min,
        diameter_km_max: record.estimated_diameter.kilometers.estimated_diameter_max,
        hazardous: record.is_potentially_hazardous_asteroid,
        orbit: OrbitDto {
            eccentricity: record.orbital_data.eccentricity,
            inclination: record.orbital_data.inclination,
            orbital_period: record.orbital_data.orbital_period,
            class_description: record.orbital_data.orbit_class.orbit_class_description,
        },
        approaches,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::services::nasa::{
        CloseApproach, Diameters, DiameterRange, FeedDays, MissDistance, NeoSummary, OrbitClass,
        OrbitalData, Velocity,
    };
    use std::collections::BTreeMap;

    fn approach(miss_km: f64) -> CloseApproach {
        CloseApproach {
            close_approach_date: NaiveDate::from_ymd_opt(2015, 9, 8).unwrap(),
            close_approach_date_full: String::from("2015-Sep-08 20:28"),
            relative_velocity: Velocity {
                kilometers_per_hour: 65260.5,
            },
            miss_distance: MissDistance {
                kilometers: miss_km,
            },
            orbiting_body: String::from("Earth"),
        }
    }

    fn summary(id: &str, approaches: Vec<CloseApproach>) -> NeoSummary {
        NeoSummary {
            neo_reference_id: String::from(id),
            name: format!("({})", id),
            estimated_diameter: Diameters {
                kilometers: DiameterRange {
                    estimated_diameter_min: 0.1,
                    estimated_diameter_max: 0.4,
                },
            },
            is_potentially_hazardous_asteroid: false,
            close_approach_data: approaches,
        }
    }

    #[test]
    fn feed_rows_flatten_days_and_order_by_miss_distance() {
        let mut days = BTreeMap::new();
        days.insert(
            NaiveDate::from_ymd_opt(2015, 9, 8).unwrap(),
            vec![summary("1111", vec![approach(45_290_298.2)])],
        );
        days.insert(
            NaiveDate::from_ymd_opt(2015, 9, 9).unwrap(),
            vec![summary("2222", vec![approach(4_027_630.3)])],
        );
        let feed = NeoFeed {
            element_count: 2,
            near_earth_objects: FeedDays { days },
        };

        let dto = into_feed_dto(NaiveDate::from_ymd_opt(2015, 9, 8).unwrap(), feed);

        assert_eq!(dto.element_count, 2);
        assert_eq!(dto.rows.len(), 2);
        assert_eq!(dto.rows[0].reference_id, "2222");
        assert_eq!(dto.rows[1].reference_id, "1111");
    }

    #[test]
    fn feed_rows_drop_objects_without_close_approaches() {
        let mut days = BTreeMap::new();
        days.insert(
            NaiveDate::from_ymd_opt(2015, 9, 8).unwrap(),
            vec![
                summary("1111", vec![]),
                summary("2222", vec![approach(4_027_630.3)]),
            ],
        );
        let feed = NeoFeed {
            element_count: 2,
            near_earth_objects: FeedDays { days },
        };

        let dto = into_feed_dto(NaiveDate::from_ymd_opt(2015, 9, 8).unwrap(), feed);

        assert_eq!(dto.rows.len(), 1);
        assert_eq!(dto.rows[0].reference_id, "2222");
        assert_eq!(dto.rows[0].approach_time, "2015-Sep-08 20:28");
    }

    #[test]
    fn details_carry_orbit_and_approach_history() {
        let record = NeoRecord {
            neo_reference_id: String::from("3542519"),
            name: String::from("(2010 PK9)"),
            designation: String::from("2010 PK9"),
            nasa_jpl_url: String::from(
                "https://ssd.jpl.nasa.gov/tools/sbdb_lookup.html#/?sstr=3542519",
            ),
            absolute_magnitude_h: 21.81,
            estimated_diameter: Diameters {
                kilometers: DiameterRange {
                    estimated_diameter_min: 0.2170475943,
                    estimated_diameter_max: 0.4853331752,
                },
            },
            is_potentially_hazardous_asteroid: true,
            close_approach_data: vec![approach(6_664_518.7), approach(45_290_298.2)],
            orbital_data: OrbitalData {
                eccentricity: String::from(".675827388781843"),
                inclination: String::from("12.58812105676965"),
                orbital_period: String::from("205.7501064196426"),
                orbit_class: OrbitClass {
                    orbit_class_description: String::from(
                        "Near-Earth asteroid orbits similar to that of 2062 Aten",
                    ),
                },
            },
        };

        let dto = into_details_dto(record);

        assert!(dto.hazardous);
        assert_eq!(dto.diameter_km_max, 0.4853331752);
        assert_eq!(dto.orbit.eccentricity, ".675827388781843");
        assert_eq!(dto.approaches.len(), 2);
        assert_eq!(dto.approaches[0].miss_distance_km, 6_664_518.7);
        assert_eq!(dto.approaches[0].orbiting_body, "Earth");
    }
}
