//! Which navbar regions render for a given configuration and user state.

/// Render decision for the navbar's gated regions, recomputed fresh on
/// every render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegionVisibility {
    pub desktop_user_block: bool,
    pub mobile_menu_toggle: bool,
    pub mobile_ai_badge: bool,
    pub desktop_ai_badge: bool,
}

impl RegionVisibility {
    /// User controls render only when enabled by configuration AND a user
    /// is actually loaded; the compact mobile badge takes their place
    /// otherwise. The desktop badge is unconditional.
    pub fn derive(show_user_controls: bool, user_present: bool) -> Self {
        let controls_active = show_user_controls && user_present;
        Self {
            desktop_user_block: controls_active,
            mobile_menu_toggle: controls_active,
            mobile_ai_badge: !controls_active,
            desktop_ai_badge: true,
        }
    }
}

/// The expanded mobile panel is always this conjunction, never the open
/// flag alone: losing the user or disabling controls hides the panel even
/// while the flag is still set.
pub fn mobile_panel_visible(menu_open: bool, show_user_controls: bool, user_present: bool) -> bool {
    menu_open && show_user_controls && user_present
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn controls_hidden_when_disabled_by_configuration() {
        for user_present in [false, true] {
            let regions = RegionVisibility::derive(false, user_present);
            assert!(!regions.desktop_user_block);
            assert!(!regions.mobile_menu_toggle);
            assert!(regions.mobile_ai_badge);
            assert!(regions.desktop_ai_badge);
        }
    }

    #[test]
    fn controls_hidden_when_no_user_is_loaded() {
        let regions = RegionVisibility::derive(true, false);
        assert!(!regions.desktop_user_block);
        assert!(!regions.mobile_menu_toggle);
        assert!(regions.mobile_ai_badge);
        assert!(regions.desktop_ai_badge);
    }

    #[test]
    fn controls_shown_when_enabled_and_user_present() {
        let regions = RegionVisibility::derive(true, true);
        assert!(regions.desktop_user_block);
        assert!(regions.mobile_menu_toggle);
        assert!(!regions.mobile_ai_badge);
        assert!(regions.desktop_ai_badge);
    }

    #[test]
    fn mobile_panel_requires_all_three_conditions() {
        assert!(mobile_panel_visible(true, true, true));

        // A stale open flag never shows the panel on its own.
        assert!(!mobile_panel_visible(true, false, true));
        assert!(!mobile_panel_visible(true, true, false));
        assert!(!mobile_panel_visible(false, true, true));
    }
}
