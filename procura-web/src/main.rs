mod api;
mod app;
mod components;
mod config;
mod containers;
mod format;
mod gate;
mod hooks;
mod language;
mod location;
mod models;
mod observable;
mod pages;
mod routes;
mod session;

use app::App;
use i18nrs::yew::I18nProvider;
use i18nrs::yew::I18nProviderConfig;
use language::{DEFAULT_LANGUAGE, translation_bundles};
use yew::Renderer;
use yew::{Html, function_component, html};
use yewdux::YewduxRoot;

#[function_component(InternationalApp)]
fn international_app() -> Html {
    let config = I18nProviderConfig {
        translations: translation_bundles(),
        default_language: DEFAULT_LANGUAGE.to_string(),
        ..Default::default()
    };

    html! {
        <YewduxRoot>
            <I18nProvider ..config>
                <App />
            </I18nProvider>
        </YewduxRoot>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));

    log::info!("starting Procura {}", env!("CARGO_PKG_VERSION"));

    // Mounts on <body>.
    Renderer::<InternationalApp>::new().render();
}
