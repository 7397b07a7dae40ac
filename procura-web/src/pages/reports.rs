use i18nrs::yew::use_translation;
use shared::models::{OrderStatus, OrderSummary, PurchaseOrder};
use strum::IntoEnumIterator;
use yew::prelude::*;

use crate::components::{Loading, StatusBadge};
use crate::format::format_total;
use crate::hooks::use_resource_list;
use crate::pages::resources::{load_error, page_title};
use crate::routes::AppRoute;

#[derive(Properties, PartialEq, Eq)]
pub struct SummaryTablesProps {
    pub summary: OrderSummary,
}

#[function_component(SummaryTables)]
pub fn summary_tables(props: &SummaryTablesProps) -> Html {
    let (i18n, ..) = use_translation();
    let summary = &props.summary;

    html! {
        <div class="grid gap-6 lg:grid-cols-2">
            <table class="table">
                <thead>
                    <tr>
                        <th>{ i18n.t("reports.status") }</th>
                        <th class="text-right">{ i18n.t("reports.count") }</th>
                    </tr>
                </thead>
                <tbody>
                    { for OrderStatus::iter().map(|status| html! {
                        <tr>
                            <td><StatusBadge {status} /></td>
                            <td class="text-right">{ summary.count(status) }</td>
                        </tr>
                    }) }
                </tbody>
                <tfoot>
                    <tr>
                        <th>{ i18n.t("reports.total") }</th>
                        <th class="text-right">{ summary.total() }</th>
                    </tr>
                </tfoot>
            </table>
            <table class="table">
                <thead>
                    <tr>
                        <th>{ i18n.t("reports.currency") }</th>
                        <th class="text-right">{ i18n.t("reports.approved_spend") }</th>
                    </tr>
                </thead>
                <tbody>
                    if summary.approved_spend_minor.is_empty() {
                        <tr><td colspan="2">{ i18n.t("common.empty") }</td></tr>
                    }
                    { for summary.approved_spend_minor.iter().map(|(currency, minor)| html! {
                        <tr>
                            <td>{ currency }</td>
                            <td class="text-right">{ format_total(*minor, currency, &i18n.t("common.overflow")) }</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        </div>
    }
}

#[function_component(ReportsPage)]
pub fn reports_page() -> Html {
    let (i18n, ..) = use_translation();
    let orders = use_resource_list::<PurchaseOrder>();

    let body = match (&orders.data, &orders.error) {
        (_, Some(error)) => load_error(i18n.t("common.load_failed"), error),
        (Some(orders), None) => html! {
            <SummaryTables summary={OrderSummary::from_orders(orders)} />
        },
        _ => html! { <Loading /> },
    };

    html! {
        <div class="p-4">
            { page_title(i18n.t(AppRoute::Reports.translation_key()), html! {}) }
            { body }
        </div>
    }
}
