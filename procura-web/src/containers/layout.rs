use crate::containers::{header::Header, sidebar::Sidebar};
use crate::models::ui_state::UiState;
use crate::routes::AppRoute;
use i18nrs::yew::use_translation;
use yew::{Children, Html, Properties, classes, function_component, html};
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    pub current_route: AppRoute,
}

/// The authenticated shell: header, sidebar, page body and footer.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let (i18n, ..) = use_translation();
    let collapsed = use_selector(|state: &UiState| state.sidebar_collapsed);
    let drawer_open = (!*collapsed).then_some("lg:drawer-open");

    html! {
    <>
        <Header current_route={props.current_route.clone()} />
        <div class={classes!("min-h-screen", "bg-base-100", "drawer", drawer_open)}>
            <input id="sidebar-drawer" type="checkbox" class="drawer-toggle" />
            <div class="drawer-content flex flex-col">
                <main class={classes!(
                    "flex-grow",
                    "p-4",
                    "transition-all",
                    "duration-300",
                    "lg:ml-0"
                )}>
                    {props.children.clone()}
                </main>
                <footer class="footer footer-center p-4 border-t border-base-300 text-base-content">
                    <div>
                        <p>{ i18n.t("app.footer") }</p>
                    </div>
                </footer>
            </div>
            <Sidebar current_route={props.current_route.clone()} />
        </div>
    </>
    }
}
