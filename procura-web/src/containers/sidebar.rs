use crate::{components::sidebar_nav_item::SidebarNavItem, routes::AppRoute};
use yew::prelude::*;

#[derive(Properties, PartialEq, Eq)]
pub struct SidebarProps {
    pub current_route: AppRoute,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    html! {
        <div class="drawer-side z-20">
            <label for="sidebar-drawer" aria-label="close sidebar" class="drawer-overlay"></label>
            <ul class="menu bg-base-200 min-h-full w-64 p-4 gap-1">
                { for AppRoute::sidebar_routes().into_iter().map(|route| html! {
                    <SidebarNavItem {route} current_route={props.current_route.clone()} />
                }) }
            </ul>
        </div>
    }
}
