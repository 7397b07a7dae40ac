//! Top-level component tree: router, session provider and the gate.

use crate::api::ProcuraClient;
use crate::components::{Loading, theme_switcher::apply_theme};
use crate::config::FrontendConfig;
use crate::containers::{Layout, SessionProvider, use_session};
use crate::gate::{Gate, GateState, GateView};
use crate::location::Location;
use crate::models::ui_state::UiState;
use crate::pages::LoginPage;
use crate::routes::{AppRoute, switch};
use yew::{Html, function_component, html, use_effect_with, use_memo};
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

#[function_component(App)]
pub fn app() -> Html {
    let client = use_memo((), |()| {
        let config = FrontendConfig::new();
        log::info!("using API at {}", config.api_base_url);
        ProcuraClient::new(&config.api_base_url)
    });

    html! {
        <BrowserRouter>
            <SessionProvider client={(*client).clone()}>
                <AppGate />
            </SessionProvider>
        </BrowserRouter>
    }
}

/// Shows exactly one of the loading screen, the login form or the shell.
///
/// The router's path is pushed into the gate's [`Location`] on every render;
/// session changes reach the gate through its own subscription.
#[function_component(AppGate)]
fn app_gate() -> Html {
    let auth = use_session();
    let navigator = use_navigator();
    let path = use_location().map_or_else(|| "/".to_string(), |location| location.path().to_string());
    let theme = use_selector(|state: &UiState| state.theme);

    use_effect_with(*theme, |theme| {
        apply_theme(*theme);
        || ()
    });

    let gate = {
        let handle = auth.handle().clone();
        let initial = path.clone();
        use_memo((), move |()| Gate::new(handle, Location::new(initial)))
    };
    gate.location().navigate(path);
    let state = gate.state();

    use_effect_with(state, move |state| {
        if *state == GateState::AuthenticatedRedirecting
            && let Some(navigator) = navigator
        {
            navigator.replace(&AppRoute::Dashboard);
        }
        || ()
    });

    match gate.view() {
        GateView::Loading => html! { <Loading label="app.loading" /> },
        GateView::Login => html! { <LoginPage /> },
        GateView::Shell { active } => {
            let body = switch(active.clone());
            html! {
                <Layout current_route={active}>
                    { body }
                </Layout>
            }
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
#[path = "app_test.rs"]
mod tests;
