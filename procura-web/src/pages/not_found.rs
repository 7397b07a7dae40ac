use crate::routes::AppRoute;
use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};
use yew_router::prelude::Link;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    let (i18n, _) = use_translation();

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{ i18n.t("not_found.title") }</h1>
            <p>{ i18n.t("not_found.body") }</p>
            <Link<AppRoute> to={AppRoute::Dashboard} classes="btn btn-primary">
                { i18n.t("routes.dashboard") }
            </Link<AppRoute>>
        </div>
    }
}
