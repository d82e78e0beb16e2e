use chrono::{Days, NaiveDate};
use leptos::{either::Either, prelude::*};
use leptos_router::hooks::{use_navigate, use_query};
use leptos_router::params::Params;

use crate::{
    components::loader::Loader,
    dtos::feed::{NeoFeedDto, NeoRowDto},
    icons::{left_arrow::LeftArrow, right_arrow::RightArrow},
    services::neo::fetch_feed,
};

#[derive(Params, PartialEq)]
pub struct FeedQuery {
    pub neo_date: Option<NaiveDate>,
}

/// The "/neo" screen. The landing page form lands here with its date in
/// the `neo_date` query parameter; a missing or unparseable value renders
/// a prompt instead of an error.
#[component]
pub fn FeedPage() -> impl IntoView {
    let query = use_query::<FeedQuery>();
    let date = move || query.read().as_ref().ok().and_then(|query| query.neo_date);

    view! {
        {move || match date() {
            Some(date) => Either::Left(view! { <DayFeed date /> }),
            None => {
                Either::Right(
                    view! {
                        <main class="vertical gap padded">
                            <div class="background-2 rounded padded">
                                "No date selected. " <a href="/">"Pick one on the start page."</a>
                            </div>
                        </main>
                    },
                )
            }
        }}
    }
}

#[component]
fn DayFeed(date: NaiveDate) -> impl IntoView {
    let feed = Resource::new(move || date, |date| async move { fetch_feed(date).await });

    view! {
        <main class="vertical gap padded">
            <FeedNav date />
            <Loader>
                {move || Suspend::new(async move {
                    let feed = feed.await?;
                    Ok::<_, ServerFnError>(view! { <FeedTable feed /> })
                })}
            </Loader>
        </main>
    }
}

#[component]
fn FeedNav(date: NaiveDate) -> impl IntoView {
    let prev = date.checked_sub_days(Days::new(1));
    let next = date.checked_add_days(Days::new(1));

    view! {
        <div class="horizontal gap align-center space-between background-2 rounded padded">
            {prev
                .map(|prev| {
                    view! {
                        <button
                            class="interactive icon-button"
                            on:click=move |_| {
                                use_navigate()(
                                    &format!("/neo?neo_date={}", prev),
                                    Default::default(),
                                )
                            }
                        >
                            <LeftArrow />
                        </button>
                    }
                })}
            <a class="interactive rounded padded" href="/">
                New search
            </a>
            {next
                .map(|next| {
                    view! {
                        <button
                            class="interactive icon-button"
                            on:click=move |_| {
                                use_navigate()(
                                    &format!("/neo?neo_date={}", next),
                                    Default::default(),
                                )
                            }
                        >
                            <RightArrow />
                        </button>
                    }
                })}
        </div>
    }
}

#[component]
fn FeedTable(feed: NeoFeedDto) -> impl IntoView {
    let rows = feed.rows.clone();

    view! {
        <div class="background-2 rounded padded vertical gap">
            <h1>{format!("Close approaches on {}", feed.date)}</h1>
            <p>{format!("{} objects reported", feed.element_count)}</p>
            {if rows.is_empty() {
                Either::Left(view! { <p>"No close approaches recorded for this day."</p> })
            } else {
                Either::Right(
                    view! {
                        <table>
                            <thead>
                                <tr>
                                    <th>Name</th>
                                    <th>"Est. diameter (km)"</th>
                                    <th>"Velocity (km/h)"</th>
                                    <th>"Miss distance (km)"</th>
                                    <th>"Closest at"</th>
                                    <th>Hazardous</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || rows.clone()
                                    key=|row| row.reference_id.clone()
                                    let:row
                                >
                                    <FeedRow row />
                                </For>
                            </tbody>
                        </table>
                    },
                )
            }}
        </div>
    }
}

#[component]
fn FeedRow(row: NeoRowDto) -> impl IntoView {
    view! {
        <tr class:hazardous=row.hazardous>
            <td>
                <a class="interactive" href=format!("/neo/{}", row.reference_id)>
                    {row.name}
                </a>
            </td>
            <td>{format!("{:.3}", row.diameter_km)}</td>
            <td>{format!("{:.0}", row.velocity_kph)}</td>
            <td>{format!("{:.0}", row.miss_distance_km)}</td>
            <td>{row.approach_time}</td>
            <td>{if row.hazardous { "yes" } else { "no" }}</td>
        </tr>
    }
}
