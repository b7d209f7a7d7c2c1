use crate::error_template::{AppError, ErrorTemplate};
use crate::pages::Dashboard;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/jobmatch-gui.css"/>
        <Title text="JobMatch"/>

        <Router fallback=|| {
            let mut outside_errors = Errors::default();
            outside_errors.insert_with_default_key(AppError::NotFound);
            view! {
                <ErrorTemplate outside_errors/>
            }
            .into_view()
        }>
            <main>
                <Routes>
                    <Route path="" view=Dashboard/>
                </Routes>
            </main>
        </Router>
    }
}
