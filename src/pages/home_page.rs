use leptos::prelude::*;

/// The landing page. Submitting the form navigates to
/// `/neo?neo_date=YYYY-MM-DD` through plain browser form submission,
/// no client-side handling involved.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="vertical gap padded">
            <h1>"Welcome to the NEO explorer."</h1>
            <form action="/neo" method="get" class="vertical gap">
                <label for="neo_date">Date</label>
                <input type="date" name="neo_date" id="neo_date" class="rounded padded" />
                <p>
                    <input type="submit" value="Submit" class="interactive rounded padded" />
                </p>
            </form>
        </main>
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn render() -> String {
        view! { <HomePage /> }.to_html()
    }

    #[test]
    fn renders_one_heading_with_welcome_text() {
        let html = render();
        assert_eq!(html.matches("<h1").count(), 1);
        assert!(html.contains("Welcome to the NEO explorer."));
    }

    #[test]
    fn renders_one_get_form_targeting_neo() {
        let html = render();
        assert_eq!(html.matches("<form").count(), 1);
        assert!(html.contains("action=\"/neo\""));
        assert!(html.contains("method=\"get\""));
    }

    #[test]
    fn renders_one_labeled_date_input() {
        let html = render();
        assert_eq!(html.matches("type=\"date\"").count(), 1);
        assert!(html.contains("name=\"neo_date\""));
        assert!(html.contains("id=\"neo_date\""));
        assert!(html.contains("for=\"neo_date\""));
    }

    #[test]
    fn renders_one_submit_control() {
        let html = render();
        assert_eq!(html.matches("type=\"submit\"").count(), 1);
    }
}
