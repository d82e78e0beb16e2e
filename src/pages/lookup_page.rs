use leptos::{either::Either, prelude::*};
use leptos_router::hooks::use_params;
use leptos_router::params::Params;

use crate::{
    components::loader::Loader,
    dtos::lookup::NeoDetailsDto,
    services::neo::fetch_neo,
};

#[derive(Params, PartialEq)]
pub struct LookupParams {
    pub id: Option<u32>,
}

#[component]
pub fn LookupPage() -> impl IntoView {
    let params = use_params::<LookupParams>();
    let id = move || params.read().as_ref().ok().and_then(|params| params.id);

    view! {
        {move || match id() {
            Some(id) => Either::Left(view! { <NeoDetails id /> }),
            None => {
                Either::Right(
                    view! {
                        <main class="vertical gap padded">
                            <div class="background-2 rounded padded">
                                "Not a valid NEO reference id."
                            </div>
                        </main>
                    },
                )
            }
        }}
    }
}

#[component]
fn NeoDetails(id: u32) -> impl IntoView {
    let details = Resource::new(move || id, |id| async move { fetch_neo(id).await });

    view! {
        <main class="vertical gap padded">
            <Loader>
                {move || Suspend::new(async move {
                    let details = details.await?;
                    Ok::<_, ServerFnError>(view! { <DetailsCard details /> })
                })}
            </Loader>
        </main>
    }
}

#[component]
fn DetailsCard(details: NeoDetailsDto) -> impl IntoView {
    let approaches = details.approaches.clone();

    view! {
        <div class="background-2 rounded padded vertical gap">
            <h1>{details.name}</h1>
            <p>{format!("Designation {}", details.designation)}</p>
            <p class:hazardous=details.hazardous>
                {if details.hazardous {
                    "Potentially hazardous"
                } else {
                    "Not considered hazardous"
                }}
            </p>
            <p>
                {format!(
                    "Estimated diameter {:.3} to {:.3} km, absolute magnitude {:.2}",
                    details.diameter_km_min,
                    details.diameter_km_max,
                    details.absolute_magnitude,
                )}
            </p>
            <a class="interactive" href=details.jpl_url rel="external">
                "JPL small-body database entry"
            </a>
        </div>
        <div class="background-2 rounded padded vertical gap">
            <h2>Orbit</h2>
            <p>{details.orbit.class_description}</p>
            <p>
                {format!(
                    "Eccentricity {}, inclination {} deg, period {} days",
                    details.orbit.eccentricity,
                    details.orbit.inclination,
                    details.orbit.orbital_period,
                )}
            </p>
        </div>
        <div class="background-2 rounded padded vertical gap">
            <h2>"Close approaches"</h2>
            <table>
                <thead>
                    <tr>
                        <th>Date</th>
                        <th>"Velocity (km/h)"</th>
                        <th>"Miss distance (km)"</th>
                        <th>"Orbiting body"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || approaches.clone()
                        key=|approach| (approach.date, approach.orbiting_body.clone())
                        let:approach
                    >
                        <tr>
                            <td>{approach.date.to_string()}</td>
                            <td>{format!("{:.0}", approach.velocity_kph)}</td>
                            <td>{format!("{:.0}", approach.miss_distance_km)}</td>
                            <td>{approach.orbiting_body}</td>
                        </tr>
                    </For>
                </tbody>
            </table>
        </div>
    }
}
