use i18nrs::yew::use_translation;
use web_sys::window;
use yew::{Classes, Html, Properties, function_component, html};
use yew_icons::{Icon, IconId};
use yewdux::prelude::use_store;

use crate::models::ui_state::{Theme, UiState};

#[derive(Properties, PartialEq, Eq)]
pub struct ThemeSwitcherProps {
    #[prop_or_default]
    pub class: Classes,
}

/// Write `theme` to the `data-theme` attribute of the root element.
pub fn apply_theme(theme: Theme) {
    if let Some(html_element) = window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
        && let Err(err) = html_element.set_attribute("data-theme", theme.as_str())
    {
        log::warn!("could not apply theme: {err:?}");
    }
}

#[function_component(ThemeSwitcher)]
pub fn theme_switcher(props: &ThemeSwitcherProps) -> Html {
    let (i18n, ..) = use_translation();
    let (ui_state, dispatch) = use_store::<UiState>();
    let theme = ui_state.theme;

    let toggle_theme = dispatch.reduce_mut_callback(|state: &mut UiState| {
        state.theme = state.theme.toggled();
    });

    // Sun switches to light, moon switches to dark.
    let theme_icon = match theme {
        Theme::Light => IconId::HeroiconsSolidMoon,
        Theme::Dark => IconId::HeroiconsSolidSun,
    };

    html! {
        <div class={props.class.clone()}>
            <button
                class="btn btn-ghost btn-circle"
                onclick={toggle_theme}
                aria-label={i18n.t("theme.selector")}
            >
                <Icon icon_id={theme_icon} class="h-5 w-5" />
            </button>
        </div>
    }
}
