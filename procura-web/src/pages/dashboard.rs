use crate::config::FrontendConfig;
use crate::containers::session_provider::use_session;
use crate::hooks::use_resource_list;
use crate::routes::AppRoute;
use i18nrs::yew::use_translation;
use shared::models::{OrderStatus, OrderSummary, PurchaseOrder};
use yew::{Html, Properties, function_component, html, use_memo};
use yew_icons::{Icon, IconId};
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
struct DashboardCardProps {
    icon: IconId,
    title: String,
    description: String,
    action: String,
    route: AppRoute,
}

#[function_component(DashboardCard)]
fn dashboard_card(props: &DashboardCardProps) -> Html {
    html! {
        <div class="card bg-base-200 shadow-xl">
            <div class="card-body">
                <h2 class="card-title">
                    <Icon icon_id={props.icon} class="w-6 h-6" />
                    { &props.title }
                </h2>
                <p>{ &props.description }</p>
                <div class="card-actions justify-end">
                    <Link<AppRoute> to={props.route.clone()} classes="btn btn-primary">
                        { &props.action }
                    </Link<AppRoute>>
                </div>
            </div>
        </div>
    }
}

/// Dashboard page component
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let (i18n, _) = use_translation();
    let auth = use_session();
    let config = use_memo((), |()| FrontendConfig::new());
    let orders = use_resource_list::<PurchaseOrder>();
    let summary = orders.data.as_deref().map(OrderSummary::from_orders);
    let stat = |status: OrderStatus| {
        summary
            .as_ref()
            .map_or_else(|| "–".to_string(), |summary| summary.count(status).to_string())
    };

    let card = |route: AppRoute, icon: IconId, key: &str| {
        html! {
            <DashboardCard
                {icon}
                title={i18n.t(route.translation_key())}
                description={i18n.t(&format!("dashboard.cards.{key}.description"))}
                action={i18n.t(&format!("dashboard.cards.{key}.action"))}
                {route}
            />
        }
    };

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">
                { i18n.t("dashboard.welcome") }
                { auth.user().map(|user| format!(", {}", user.label())).unwrap_or_default() }
            </h1>

            <div class="stats shadow w-full">
                <div class="stat">
                    <div class="stat-figure text-warning">
                        <Icon icon_id={IconId::HeroiconsOutlineClock} class="w-8 h-8" />
                    </div>
                    <div class="stat-title">{ i18n.t("orders.status.pending_approval") }</div>
                    <div class="stat-value text-warning">{ stat(OrderStatus::PendingApproval) }</div>
                </div>
                <div class="stat">
                    <div class="stat-figure text-secondary">
                        <Icon icon_id={IconId::HeroiconsOutlinePencilSquare} class="w-8 h-8" />
                    </div>
                    <div class="stat-title">{ i18n.t("orders.status.draft") }</div>
                    <div class="stat-value text-secondary">{ stat(OrderStatus::Draft) }</div>
                </div>
                <div class="stat">
                    <div class="stat-figure text-success">
                        <Icon icon_id={IconId::HeroiconsOutlineCheck} class="w-8 h-8" />
                    </div>
                    <div class="stat-title">{ i18n.t("orders.status.approved") }</div>
                    <div class="stat-value text-success">{ stat(OrderStatus::Approved) }</div>
                </div>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                { card(AppRoute::Orders, IconId::HeroiconsOutlineClipboardDocumentList, "orders") }
                { card(AppRoute::Vendors, IconId::HeroiconsOutlineBuildingStorefront, "vendors") }
                { card(AppRoute::Reports, IconId::HeroiconsOutlineChartBar, "reports") }

                <div class="card bg-base-200 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title">
                            <Icon icon_id={IconId::HeroiconsOutlineDocumentText} class="w-6 h-6" />
                            { i18n.t("dashboard.cards.documentation.title") }
                        </h2>
                        <p>{ i18n.t("dashboard.cards.documentation.description") }</p>
                        <div class="card-actions justify-end">
                            <a href={config.documentation_url().to_string()} target="_blank" class="btn btn-outline">
                                { i18n.t("dashboard.cards.documentation.action") }
                            </a>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
