use leptos::prelude::*;

use crate::components::Navbar;

/// Public landing page. The navbar renders here without user controls, so
/// only the branding and the AI badges are visible.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Navbar/>
        <section class="page page--home">
            <h1>"Welcome to Mindscroll"</h1>
            <p>"Track your food, exercise, and lifestyle with an AI companion."</p>
        </section>
    }
}
