//! Browser Bindings
//!
//! `Navigator`/`Confirm` backed by `window`, and controller construction for
//! the same-origin backend.

use taskboard_client::{
    AuthController, ClientConfig, Confirm, HttpTaskApi, Navigator, TaskBoardController,
};

/// Full-page navigation through `window.location`
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, route: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(route) {
                leptos::logging::error!("navigation to {route} failed: {e:?}");
            }
        }
    }
}

/// `window.confirm`; a missing window counts as "no"
pub struct BrowserConfirm;

impl Confirm for BrowserConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(prompt).ok())
            .unwrap_or(false)
    }
}

pub type BrowserAuth = AuthController<HttpTaskApi, BrowserNavigator>;
pub type BrowserBoard = TaskBoardController<HttpTaskApi, BrowserNavigator, BrowserConfirm>;

/// API at the page's own origin
pub fn client_config() -> ClientConfig {
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| ClientConfig::default().base_url);
    ClientConfig::for_origin(origin)
}

pub fn auth_controller() -> BrowserAuth {
    let config = client_config();
    AuthController::new(HttpTaskApi::new(config.clone()), BrowserNavigator, config)
}

pub fn board_controller() -> BrowserBoard {
    let config = client_config();
    TaskBoardController::new(
        HttpTaskApi::new(config.clone()),
        BrowserNavigator,
        BrowserConfirm,
        config,
    )
}
