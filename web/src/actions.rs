//! User-gesture handlers: what each navbar action does to storage, view
//! state, and the router.

use leptos::logging;
use thiserror::Error;

use crate::identity::USER_KEY;
use crate::navigation::{NavigationError, Navigator, HOME_PATH, PROFILE_PATH};
use crate::storage::{KeyValueStore, StoreError};

/// Store keys cleared on logout: the user record plus the cached domain
/// datasets written by other parts of the app. The caches are opaque here;
/// they are deleted, never read.
pub const LOGOUT_KEYS: [&str; 4] = [
    USER_KEY,
    "userFoodData",
    "userExerciseData",
    "userLifestyleData",
];

/// Faults that divert logout onto the hard-redirect fallback.
#[derive(Debug, Error)]
pub enum LogoutError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Navigation(#[from] NavigationError),
}

/// Brand/home gesture: close the mobile menu, go to the home page. The
/// store is never touched; a soft-navigation fault is the router's
/// concern, not ours.
pub fn go_home(nav: &impl Navigator, close_menu: impl FnOnce()) {
    close_menu();
    if let Err(err) = nav.navigate(HOME_PATH) {
        logging::warn!("navbar: home navigation failed: {err}");
    }
}

/// Edit-profile gesture: close the mobile menu, go to the profile page.
pub fn edit_profile(nav: &impl Navigator, close_menu: impl FnOnce()) {
    close_menu();
    if let Err(err) = nav.navigate(PROFILE_PATH) {
        logging::warn!("navbar: profile navigation failed: {err}");
    }
}

/// Logout gesture, ordered effects: clear the four store keys, clear the
/// caller's view state, navigate home, then reload so no authenticated
/// view survives in cached render state or back-navigation.
///
/// Any fault in that sequence falls through to a hard redirect home; the
/// user always leaves the authenticated area and nothing escapes this
/// handler.
pub fn log_out(store: &impl KeyValueStore, nav: &impl Navigator, clear_view_state: impl FnOnce()) {
    if let Err(err) = try_log_out(store, nav, clear_view_state) {
        logging::error!("navbar: logout failed, falling back to hard redirect: {err}");
        nav.redirect(HOME_PATH);
    }
}

fn try_log_out(
    store: &impl KeyValueStore,
    nav: &impl Navigator,
    clear_view_state: impl FnOnce(),
) -> Result<(), LogoutError> {
    for key in LOGOUT_KEYS {
        store.remove(key)?;
    }
    clear_view_state();
    nav.navigate(HOME_PATH)?;
    // Only after the soft navigation has been handed off.
    nav.reload()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use std::cell::RefCell;
    use std::rc::Rc;

    type EventLog = Rc<RefCell<Vec<String>>>;

    /// Store fake that journals removals into a shared log and can be
    /// switched to fail them.
    struct RecordingStore {
        inner: MemoryStore,
        log: EventLog,
        fail_removals: bool,
    }

    impl RecordingStore {
        fn seeded(log: &EventLog) -> Self {
            let inner = MemoryStore::new();
            for key in LOGOUT_KEYS {
                inner.set(key, "{}").unwrap();
            }
            Self {
                inner,
                log: Rc::clone(log),
                fail_removals: false,
            }
        }
    }

    impl KeyValueStore for RecordingStore {
        fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) -> Result<(), StoreError> {
            if self.fail_removals {
                return Err(StoreError::Backend("storage unavailable".to_string()));
            }
            self.log.borrow_mut().push(format!("remove:{key}"));
            self.inner.remove(key)
        }
    }

    /// Navigator fake journaling every call into the shared log.
    struct RecordingNavigator {
        log: EventLog,
        fail_navigation: bool,
    }

    impl RecordingNavigator {
        fn new(log: &EventLog) -> Self {
            Self {
                log: Rc::clone(log),
                fail_navigation: false,
            }
        }
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, path: &str) -> Result<(), NavigationError> {
            if self.fail_navigation {
                return Err(NavigationError::NoWindow);
            }
            self.log.borrow_mut().push(format!("navigate:{path}"));
            Ok(())
        }

        fn redirect(&self, path: &str) {
            self.log.borrow_mut().push(format!("redirect:{path}"));
        }

        fn reload(&self) -> Result<(), NavigationError> {
            self.log.borrow_mut().push("reload".to_string());
            Ok(())
        }
    }

    fn log() -> EventLog {
        Rc::new(RefCell::new(Vec::new()))
    }

    #[test]
    fn logout_clears_store_and_state_then_navigates_and_reloads_in_order() {
        let events = log();
        let store = RecordingStore::seeded(&events);
        let nav = RecordingNavigator::new(&events);

        let state_log = Rc::clone(&events);
        log_out(&store, &nav, move || {
            state_log.borrow_mut().push("clear-view-state".to_string());
        });

        assert_eq!(
            *events.borrow(),
            vec![
                "remove:user",
                "remove:userFoodData",
                "remove:userExerciseData",
                "remove:userLifestyleData",
                "clear-view-state",
                "navigate:/",
                "reload",
            ]
        );
        assert!(store.inner.is_empty());
    }

    #[test]
    fn logout_falls_back_to_hard_redirect_when_the_store_fails() {
        let events = log();
        let mut store = RecordingStore::seeded(&events);
        store.fail_removals = true;
        let nav = RecordingNavigator::new(&events);

        let cleared = Rc::new(RefCell::new(false));
        let cleared_flag = Rc::clone(&cleared);
        log_out(&store, &nav, move || {
            *cleared_flag.borrow_mut() = true;
        });

        // No soft navigation, no reload, just the terminal escape hatch.
        assert_eq!(*events.borrow(), vec!["redirect:/"]);
        assert!(!*cleared.borrow());
    }

    #[test]
    fn logout_falls_back_to_hard_redirect_when_navigation_fails() {
        let events = log();
        let store = RecordingStore::seeded(&events);
        let mut nav = RecordingNavigator::new(&events);
        nav.fail_navigation = true;

        log_out(&store, &nav, || {});

        let recorded = events.borrow();
        assert_eq!(recorded.last().map(String::as_str), Some("redirect:/"));
        assert!(!recorded.iter().any(|event| event == "reload"));
    }

    #[test]
    fn go_home_closes_menu_and_navigates_without_touching_the_store() {
        let events = log();
        let store = RecordingStore::seeded(&events);
        let nav = RecordingNavigator::new(&events);

        let menu_log = Rc::clone(&events);
        go_home(&nav, move || {
            menu_log.borrow_mut().push("close-menu".to_string());
        });

        assert_eq!(*events.borrow(), vec!["close-menu", "navigate:/"]);
        for key in LOGOUT_KEYS {
            assert!(store.inner.contains(key));
        }
    }

    #[test]
    fn edit_profile_closes_menu_and_navigates_to_profile() {
        let events = log();
        let nav = RecordingNavigator::new(&events);

        let menu_log = Rc::clone(&events);
        edit_profile(&nav, move || {
            menu_log.borrow_mut().push("close-menu".to_string());
        });

        assert_eq!(*events.borrow(), vec!["close-menu", "navigate:/profile"]);
    }
}
