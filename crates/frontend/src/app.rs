use leptos::prelude::*;
use leptos_meta::provide_meta_context;

use crate::pages::LandingView;

#[component]
pub fn App() -> impl IntoView {
    // Provide the meta context so views can contribute <head> tags.
    provide_meta_context();

    view! {
        <LandingView />
    }
}
