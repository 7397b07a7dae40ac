use crate::{
    components::{
        language_selector::LanguageSelector, theme_switcher::ThemeSwitcher,
        user_dropdown::UserDropdown,
    },
    containers::session_provider::use_session,
    models::ui_state::UiState,
    routes::AppRoute,
};
use i18nrs::yew::use_translation;
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::use_store;

#[derive(Properties, PartialEq, Eq)]
pub struct HeaderProps {
    pub current_route: AppRoute,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let (i18n, ..) = use_translation();
    let auth = use_session();
    let (_, dispatch) = use_store::<UiState>();
    let toggle_sidebar = dispatch.reduce_mut_callback(|state: &mut UiState| {
        state.sidebar_collapsed = !state.sidebar_collapsed;
    });

    html! {
        <nav class="navbar justify-between bg-base-300">
            <div class="flex items-center gap-2">
                <label for="sidebar-drawer" class="btn btn-ghost btn-square lg:hidden" aria-label={i18n.t("header.menu")}>
                    <span class="text-lg">{"☰"}</span>
                </label>
                <button class="btn btn-ghost btn-square hidden lg:inline-flex" onclick={toggle_sidebar} aria-label={i18n.t("header.menu")}>
                    <span class="text-lg">{"☰"}</span>
                </button>
                <Link<AppRoute> to={AppRoute::Dashboard} classes="btn btn-ghost text-lg">
                    {i18n.t("app.title")}
                </Link<AppRoute>>
                <span class="hidden sm:inline text-base-content/60">
                    {i18n.t(props.current_route.translation_key())}
                </span>
            </div>
            <div class="flex items-center">
                <LanguageSelector />
                <ThemeSwitcher />
                {
                    auth.user().map_or_else(
                        || html! {},
                        |user| html! {
                            <>
                                <span class="hidden sm:inline text-sm text-base-content/80 mr-2">{ user.label() }</span>
                                <UserDropdown />
                            </>
                        },
                    )
                }
            </div>
        </nav>
    }
}
