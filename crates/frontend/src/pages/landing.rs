use contracts::pages::landing::{
    LANDING_DESCRIPTION, LANDING_HEADING, LANDING_SUBTITLE, LANDING_TITLE,
};
use leptos::prelude::*;
use leptos_meta::{Meta, Title};

/// Landing view rendered at the root route.
///
/// Stateless and pure: contributes the fixed document title and description
/// to the head, and renders the centered hero block. All strings live in
/// `contracts::pages::landing`.
#[component]
pub fn LandingView() -> impl IntoView {
    view! {
        <Title text=LANDING_TITLE />
        <Meta name="description" content=LANDING_DESCRIPTION />

        <main class="landing">
            <div class="landing-hero">
                <h1 class="landing-heading">{LANDING_HEADING}</h1>
                <p class="landing-subtitle">{LANDING_SUBTITLE}</p>
            </div>
        </main>
    }
}
