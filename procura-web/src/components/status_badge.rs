use i18nrs::yew::use_translation;
use shared::models::OrderStatus;
use yew::{Html, Properties, classes, function_component, html};

#[derive(Properties, PartialEq, Eq)]
pub struct StatusBadgeProps {
    pub status: OrderStatus,
}

pub const fn badge_class(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Draft => "badge-ghost",
        OrderStatus::PendingApproval => "badge-warning",
        OrderStatus::Approved => "badge-success",
        OrderStatus::Rejected => "badge-error",
        OrderStatus::Cancelled => "badge-neutral",
    }
}

pub fn status_key(status: OrderStatus) -> String {
    format!("orders.status.{}", status.as_str())
}

#[function_component(StatusBadge)]
pub fn status_badge(props: &StatusBadgeProps) -> Html {
    let (i18n, ..) = use_translation();
    html! {
        <span class={classes!("badge", badge_class(props.status))}>
            { i18n.t(&status_key(props.status)) }
        </span>
    }
}
