use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::pages::{feed_page::FeedPage, home_page::HomePage, lookup_page::LookupPage};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/neo-explorer.css" />

        <Title text="NEO Explorer" />

        <Router>
            <Routes fallback=|| "No such page".into_view()>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/neo") view=FeedPage />
                <Route path=path!("/neo/:id") view=LookupPage />
            </Routes>
        </Router>
    }
}
