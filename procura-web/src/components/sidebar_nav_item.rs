use i18nrs::yew::use_translation;
use yew::{Html, Properties, classes, function_component, html};
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;

use crate::routes::AppRoute;

#[derive(Properties, PartialEq, Eq)]
pub struct SidebarNavItemProps {
    pub route: AppRoute,
    pub current_route: AppRoute,
}

/// Icon shown next to each sidebar entry.
pub const fn route_icon(route: &AppRoute) -> IconId {
    match route.section() {
        AppRoute::Orders => IconId::HeroiconsOutlineClipboardDocumentList,
        AppRoute::Vendors => IconId::HeroiconsOutlineBuildingStorefront,
        AppRoute::Items => IconId::HeroiconsOutlineCube,
        AppRoute::Projects => IconId::HeroiconsOutlineBriefcase,
        AppRoute::Users => IconId::HeroiconsOutlineUsers,
        AppRoute::Templates => IconId::HeroiconsOutlineDocumentDuplicate,
        AppRoute::Reports => IconId::HeroiconsOutlineChartBar,
        _ => IconId::HeroiconsOutlineHome,
    }
}

#[function_component(SidebarNavItem)]
pub fn sidebar_nav_item(props: &SidebarNavItemProps) -> Html {
    let (i18n, ..) = use_translation();

    let active_route_class = if props.current_route.section() == props.route {
        "menu-active"
    } else {
        ""
    };

    html! {
      <li>
          <Link<AppRoute> to={props.route.clone()} classes={classes!("gap-2", active_route_class)}>
              <Icon icon_id={route_icon(&props.route)} class="w-5 h-5" />
              { i18n.t(props.route.translation_key()) }
          </Link<AppRoute>>
      </li>
    }
}
