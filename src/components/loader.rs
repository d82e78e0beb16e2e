use leptos::prelude::*;

#[component]
pub fn Loader(children: ChildrenFn) -> impl IntoView {
    view! {
        <Suspense fallback=|| view! { <div class="loading padded">Loading</div> }>
            <ErrorBoundary fallback=|errors| {
                view! {
                    <div class="error rounded padded">
                        <ul class="vertical">
                            {errors
                                .get()
                                .into_iter()
                                .map(|(_, error)| {
                                    view! { <li class="error-item">{error.to_string()}</li> }
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                    </div>
                }
            }>{children()}</ErrorBoundary>
        </Suspense>
    }
}
