use leptos::prelude::*;

use crate::actions::{edit_profile, go_home, log_out};
use crate::identity::{load_current_user, UserRecord};
use crate::navigation::BrowserNavigator;
use crate::storage::LocalStorage;
use crate::visibility::{mobile_panel_visible, RegionVisibility};

/// Top navigation bar: branding, authenticated-user controls, and the
/// responsive mobile menu.
///
/// The current user is whatever the persistent store held at mount; this
/// component never validates it, and only ever clears it (on logout).
#[component]
pub fn Navbar(
    /// Brand label next to the logo.
    #[prop(default = String::from("Mindscroll"))]
    title: String,
    /// Gates all authenticated-user UI, independent of whether a user is
    /// actually loaded.
    #[prop(optional)]
    show_user_controls: bool,
) -> impl IntoView {
    let current_user = RwSignal::new(None::<UserRecord>);
    let mobile_menu_open = RwSignal::new(false);
    let navigator = BrowserNavigator::from_router();

    // Identity load. Nothing reactive is tracked inside, so this runs once
    // per component lifetime, client side only.
    Effect::new(move |_| {
        current_user.set(load_current_user(&LocalStorage));
    });

    let regions = Memo::new(move |_| {
        RegionVisibility::derive(show_user_controls, current_user.with(Option::is_some))
    });
    let panel_open = Memo::new(move |_| {
        mobile_panel_visible(
            mobile_menu_open.get(),
            show_user_controls,
            current_user.with(Option::is_some),
        )
    });

    let close_menu = move || mobile_menu_open.set(false);

    let on_home = {
        let navigator = navigator.clone();
        move |_| go_home(&navigator, close_menu)
    };
    let on_profile = {
        let navigator = navigator.clone();
        move |_| edit_profile(&navigator, close_menu)
    };
    let on_logout = {
        let navigator = navigator.clone();
        move |_| {
            log_out(&LocalStorage, &navigator, move || {
                current_user.set(None);
                mobile_menu_open.set(false);
            });
        }
    };
    // The desktop block and the mobile panel each own a handler copy; the
    // view children are separate closures.
    let on_profile_menu = on_profile.clone();
    let on_logout_menu = on_logout.clone();

    let on_toggle = move |_| {
        // The button only renders while controls are active, but the gate
        // holds the menu invariant even for a stale queued event.
        if regions.get().mobile_menu_toggle {
            mobile_menu_open.update(|open| *open = !*open);
        }
    };

    view! {
        <nav class="navbar">
            <div class="navbar__container">
                <div class="navbar__row">
                    <button class="navbar__brand" on:click=on_home.clone()>
                        <span class="navbar__logo">"🧠"</span>
                        <span class="navbar__title">{title}</span>
                    </button>

                    <div class="navbar__desktop">
                        <Show when=move || regions.get().desktop_user_block>
                            <UserIdentity user=current_user/>
                            <button
                                class="navbar__action navbar__action--profile"
                                on:click=on_profile.clone()
                            >
                                "Edit Profile"
                            </button>
                            <button
                                class="navbar__action navbar__action--logout"
                                on:click=on_logout.clone()
                            >
                                "Logout"
                            </button>
                        </Show>
                        <Show when=move || regions.get().desktop_ai_badge>
                            <AiActiveBadge/>
                        </Show>
                    </div>

                    <Show when=move || regions.get().mobile_menu_toggle>
                        <button class="navbar__menu-toggle" on:click=on_toggle>
                            {move || if mobile_menu_open.get() {
                                view! {
                                    <svg class="navbar__menu-icon" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"></path>
                                    </svg>
                                }.into_any()
                            } else {
                                view! {
                                    <svg class="navbar__menu-icon" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"></path>
                                    </svg>
                                }.into_any()
                            }}
                        </button>
                    </Show>

                    <Show when=move || regions.get().mobile_ai_badge>
                        <AiActiveBadge compact=true/>
                    </Show>
                </div>
            </div>

            <Show when=move || panel_open.get()>
                <div class="navbar__mobile-menu">
                    <div class="navbar__mobile-user">
                        <UserIdentity user=current_user/>
                    </div>
                    <AiActiveBadge/>
                    <button
                        class="navbar__action navbar__action--profile navbar__action--block"
                        on:click=on_profile_menu.clone()
                    >
                        "Edit Profile"
                    </button>
                    <button
                        class="navbar__action navbar__action--logout navbar__action--block"
                        on:click=on_logout_menu.clone()
                    >
                        "Logout"
                    </button>
                </div>
            </Show>
        </nav>
    }
}

/// Avatar glyph plus the resolved display names. Shared by the desktop
/// block and the mobile panel so the two render paths can never diverge.
#[component]
fn UserIdentity(user: RwSignal<Option<UserRecord>>) -> impl IntoView {
    let glyph = move || {
        user.with(|user| {
            user.as_ref()
                .map(|user| user.avatar_glyph().to_string())
                .unwrap_or_default()
        })
    };
    let primary = move || {
        user.with(|user| {
            user.as_ref()
                .map(|user| user.primary_label().to_string())
                .unwrap_or_default()
        })
    };
    let secondary = move || {
        user.with(|user| {
            user.as_ref()
                .map(|user| user.secondary_label().to_string())
                .unwrap_or_default()
        })
    };

    view! {
        <div class="navbar__user">
            <span class="navbar__avatar">{glyph}</span>
            <div class="navbar__user-labels">
                <div class="navbar__user-primary">{primary}</div>
                <div class="navbar__user-secondary">{secondary}</div>
            </div>
        </div>
    }
}

/// Pulsing "AI Active" indicator; the compact form carries the short
/// label used in the tight mobile header.
#[component]
fn AiActiveBadge(#[prop(optional)] compact: bool) -> impl IntoView {
    view! {
        <div class="navbar__ai-badge">
            <span class="navbar__ai-dot"></span>
            <span class="navbar__ai-label">{if compact { "AI" } else { "AI Active" }}</span>
        </div>
    }
}
