use leptos::prelude::*;

use crate::components::Navbar;

/// Profile page, the edit-profile navigation target. User controls are
/// enabled here, so a loaded user gets the full desktop block and the
/// mobile menu.
#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <Navbar show_user_controls=true/>
        <section class="page page--profile">
            <h1>"Your Profile"</h1>
            <p>"Profile editing lives here."</p>
        </section>
    }
}
