//! Routing seam: soft in-app navigation plus the hard full-document escape
//! hatch used when logout cleanup goes wrong.

use std::sync::Arc;

use thiserror::Error;

/// Soft-navigation target of the brand/home action and of logout.
pub const HOME_PATH: &str = "/";

/// Soft-navigation target of the edit-profile action.
pub const PROFILE_PATH: &str = "/profile";

#[derive(Debug, Error)]
pub enum NavigationError {
    /// No browser window is available.
    #[error("browser window unavailable")]
    NoWindow,
    /// The browser rejected the navigation primitive.
    #[error("browser navigation error: {0}")]
    Browser(String),
}

/// Navigation operations the navbar consumes from the router.
pub trait Navigator {
    /// In-app navigation. `Ok` means the request has been handed to the
    /// router; callers sequencing further effects (the logout reload) run
    /// them strictly after this returns.
    fn navigate(&self, path: &str) -> Result<(), NavigationError>;

    /// Full-document navigation bypassing in-app routing. Terminal
    /// fallback: best effort, never fails from the caller's perspective.
    fn redirect(&self, path: &str);

    /// Full reload of the application context, discarding in-memory state.
    fn reload(&self) -> Result<(), NavigationError>;
}

/// Production navigator: the leptos router for soft navigation, the window
/// location for redirect and reload.
#[derive(Clone)]
pub struct BrowserNavigator {
    navigate: Arc<dyn Fn(&str) + Send + Sync>,
}

impl BrowserNavigator {
    /// Must be constructed inside a `<Router>` context.
    pub fn from_router() -> Self {
        let navigate = leptos_router::hooks::use_navigate();
        Self {
            navigate: Arc::new(move |path: &str| navigate(path, Default::default())),
        }
    }
}

impl Navigator for BrowserNavigator {
    fn navigate(&self, path: &str) -> Result<(), NavigationError> {
        (self.navigate)(path);
        Ok(())
    }

    fn redirect(&self, path: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }

    fn reload(&self) -> Result<(), NavigationError> {
        let window = web_sys::window().ok_or(NavigationError::NoWindow)?;
        window
            .location()
            .reload()
            .map_err(|err| NavigationError::Browser(format!("{err:?}")))
    }
}
