//! Purchase order pages: list, detail with approval actions, and creation.

use i18nrs::yew::use_translation;
use shared::models::{
    ApprovalDecision, Item, OrderStatus, Project, PurchaseOrder, Resource, Vendor,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::{Link, use_navigator};

use crate::components::{DataTable, Loading, StatusBadge, Toast, ToastKind};
use crate::config::FrontendConfig;
use crate::containers::session_provider::{use_client, use_session};
use crate::format::{format_date, format_money, format_total};
use crate::hooks::{guard_session, use_resource, use_resource_list};
use crate::pages::order_form::{LineDraft, OrderActions, OrderDraft, rejection};
use crate::pages::resources::{DetailPageProps, load_error, page_title};
use crate::routes::AppRoute;

type Notice = Option<(&'static str, ToastKind)>;

#[function_component(OrdersPage)]
pub fn orders_page() -> Html {
    let (i18n, ..) = use_translation();
    let auth = use_session();
    let orders = use_resource_list::<PurchaseOrder>();

    let new_button = if auth.user().is_some_and(|user| user.can_raise_orders()) {
        html! {
            <Link<AppRoute> to={AppRoute::OrderNew} classes="btn btn-primary">
                { i18n.t("orders.new") }
            </Link<AppRoute>>
        }
    } else {
        html! {}
    };

    let body = match (&orders.data, &orders.error) {
        (_, Some(error)) => load_error(i18n.t("common.load_failed"), error),
        (Some(rows), None) if !orders.loading => {
            let mut rows = rows.clone();
            rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            html! { <DataTable<PurchaseOrder> {rows} /> }
        }
        _ => html! { <Loading /> },
    };

    html! {
        <div class="p-4">
            { page_title(i18n.t(AppRoute::Orders.translation_key()), new_button) }
            { body }
        </div>
    }
}

/// A request the action bar can send for one order.
#[derive(Debug, Clone, PartialEq, Eq)]
enum OrderCommand {
    Submit,
    Decide(ApprovalDecision),
    Cancel,
    Delete,
}

#[function_component(OrderDetailPage)]
pub fn order_detail_page(props: &DetailPageProps) -> Html {
    let (i18n, ..) = use_translation();
    let auth = use_session();
    let client = use_client();
    let navigator = use_navigator();
    let config = use_memo((), |()| FrontendConfig::new());
    let record = use_resource::<PurchaseOrder>(props.id);
    let reason = use_state(String::new);
    let busy = use_state(|| false);
    let notice = use_state(|| Notice::None);

    let run = {
        let session = auth.handle().clone();
        let record = record.clone();
        let busy = busy.clone();
        let notice = notice.clone();
        Callback::from(move |command: OrderCommand| {
            let Some(order) = record.data.clone() else {
                return;
            };
            if *busy {
                return;
            }
            busy.set(true);
            let client = client.clone();
            let session = session.clone();
            let record = record.clone();
            let busy = busy.clone();
            let notice = notice.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                log::info!("order {}: {command:?}", order.id);
                let result = match &command {
                    OrderCommand::Submit => client.submit_order(order.id).await.map(Some),
                    OrderCommand::Decide(decision) => {
                        client.decide_order(order.id, decision).await.map(Some)
                    }
                    OrderCommand::Cancel => {
                        let cancelled = PurchaseOrder {
                            status: OrderStatus::Cancelled,
                            ..order.clone()
                        };
                        client
                            .update::<PurchaseOrder, _>(order.id, &cancelled)
                            .await
                            .map(Some)
                    }
                    OrderCommand::Delete => client
                        .delete::<PurchaseOrder>(order.id)
                        .await
                        .map(|()| None),
                };
                busy.set(false);
                match guard_session(&session, result) {
                    Ok(Some(updated)) => {
                        record.update(updated);
                        notice.set(Some(("orders.updated_toast", ToastKind::Success)));
                    }
                    Ok(None) => {
                        if let Some(navigator) = navigator {
                            navigator.push(&AppRoute::Orders);
                        }
                    }
                    Err(_) => notice.set(Some(("orders.action_failed", ToastKind::Error))),
                }
            });
        })
    };

    let on_reason = {
        let reason = reason.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlTextAreaElement>() {
                reason.set(input.value());
            }
        })
    };

    let close_notice = {
        let notice = notice.clone();
        Callback::from(move |()| notice.set(None))
    };

    let body = match (&record.data, &record.error) {
        (_, Some(error)) => load_error(i18n.t("common.load_failed"), error),
        (Some(order), None) => {
            let actions = OrderActions::for_order(order, auth.user());
            let button = |label: &str, class: &str, command: OrderCommand| {
                let run = run.clone();
                html! {
                    <button
                        class={classes!("btn", class.to_string())}
                        disabled={*busy}
                        onclick={Callback::from(move |_: MouseEvent| run.emit(command.clone()))}
                    >
                        { i18n.t(label) }
                    </button>
                }
            };
            let on_reject = {
                let run = run.clone();
                let reason = reason.clone();
                let notice = notice.clone();
                Callback::from(move |_: MouseEvent| match rejection(&reason) {
                    Ok(decision) => run.emit(OrderCommand::Decide(decision)),
                    Err(err) => notice.set(Some((err.translation_key(), ToastKind::Error))),
                })
            };

            html! {
                <div class="space-y-4">
                    <div class="flex items-center gap-4">
                        <h1 class="text-2xl font-bold">{ order.label() }</h1>
                        <StatusBadge status={order.status} />
                    </div>
                    <div class="card bg-base-200 shadow">
                        <div class="card-body">
                            <dl class="grid grid-cols-[max-content_1fr] gap-x-6 gap-y-2">
                                <dt class="font-semibold">{ i18n.t("orders.vendor") }</dt>
                                <dd>
                                    <Link<AppRoute> to={AppRoute::VendorDetail { id: order.vendor_id }} classes="link">
                                        { format!("#{}", order.vendor_id) }
                                    </Link<AppRoute>>
                                </dd>
                                <dt class="font-semibold">{ i18n.t("orders.project") }</dt>
                                <dd>{ order.project_id.map_or_else(|| i18n.t("common.none"), |id| format!("#{id}")) }</dd>
                                <dt class="font-semibold">{ i18n.t("orders.requested_by") }</dt>
                                <dd>{ format!("#{}", order.requested_by) }</dd>
                                <dt class="font-semibold">{ i18n.t("orders.created") }</dt>
                                <dd>{ format_date(order.created_at.as_datetime()) }</dd>
                                <dt class="font-semibold">{ i18n.t("orders.notes") }</dt>
                                <dd>{ order.notes.clone().unwrap_or_else(|| i18n.t("common.none")) }</dd>
                            </dl>
                        </div>
                    </div>
                    <h2 class="text-xl font-semibold">{ i18n.t("orders.lines") }</h2>
                    <table class="table">
                        <thead>
                            <tr>
                                <th>{ i18n.t("orders.description") }</th>
                                <th>{ i18n.t("orders.quantity") }</th>
                                <th>{ i18n.t("orders.unit_price") }</th>
                                <th>{ i18n.t("orders.total") }</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for order.lines.iter().map(|line| html! {
                                <tr>
                                    <td>
                                        <Link<AppRoute> to={AppRoute::ItemDetail { id: line.item_id }} classes="link">
                                            { &line.description }
                                        </Link<AppRoute>>
                                    </td>
                                    <td>{ line.quantity }</td>
                                    <td>{ format_money(line.unit_price_minor, &order.currency) }</td>
                                    <td>{ format_total(line.total_minor(), &order.currency, &i18n.t("common.overflow")) }</td>
                                </tr>
                            }) }
                        </tbody>
                        <tfoot>
                            <tr>
                                <th colspan="3">{ i18n.t("orders.total") }</th>
                                <th>{ format_total(order.total_minor(), &order.currency, &i18n.t("common.overflow")) }</th>
                            </tr>
                        </tfoot>
                    </table>
                    if actions.any() {
                        <div class="flex flex-wrap items-end gap-2">
                            if actions.submit {
                                { button("orders.submit", "btn-primary", OrderCommand::Submit) }
                            }
                            if actions.approve {
                                { button("orders.approve", "btn-success", OrderCommand::Decide(ApprovalDecision::Approve)) }
                            }
                            if actions.reject {
                                <textarea
                                    class="textarea textarea-bordered"
                                    placeholder={i18n.t("orders.reject_reason")}
                                    value={(*reason).clone()}
                                    oninput={on_reason.clone()}
                                />
                                <button class="btn btn-error" disabled={*busy} onclick={on_reject}>
                                    { i18n.t("orders.reject") }
                                </button>
                            }
                            if actions.cancel {
                                { button("orders.cancel", "btn-ghost", OrderCommand::Cancel) }
                            }
                            if actions.delete {
                                { button("common.delete", "btn-outline btn-error", OrderCommand::Delete) }
                            }
                        </div>
                    }
                </div>
            }
        }
        _ => html! { <Loading /> },
    };

    html! {
        <div class="p-4 space-y-4">
            <Link<AppRoute> to={AppRoute::Orders} classes="btn btn-ghost btn-sm">
                { "← " }{ i18n.t("common.back") }
            </Link<AppRoute>>
            { body }
            if let Some((key, kind)) = *notice {
                <Toast message={i18n.t(key)} {kind} timeout_ms={config.toast_timeout_ms} on_close={close_notice} />
            }
        </div>
    }
}

fn selected_id(event: &Event) -> Option<u64> {
    event
        .target_dyn_into::<HtmlSelectElement>()
        .and_then(|select| select.value().parse().ok())
}

fn edit(draft: &UseStateHandle<OrderDraft>, change: impl FnOnce(&mut OrderDraft)) {
    let mut next = (**draft).clone();
    change(&mut next);
    draft.set(next);
}

#[function_component(OrderNewPage)]
pub fn order_new_page() -> Html {
    let (i18n, ..) = use_translation();
    let auth = use_session();
    let client = use_client();
    let navigator = use_navigator();
    let config = use_memo((), |()| FrontendConfig::new());
    let vendors = use_resource_list::<Vendor>();
    let projects = use_resource_list::<Project>();
    let items = use_resource_list::<Item>();
    let draft = use_state(OrderDraft::default);
    let form_error = use_state(|| None::<&'static str>);
    let notice = use_state(|| Notice::None);
    let busy = use_state(|| false);

    let catalog: Vec<Item> = items.data.clone().unwrap_or_default();

    let onsubmit = {
        let draft = draft.clone();
        let form_error = form_error.clone();
        let notice = notice.clone();
        let busy = busy.clone();
        let session = auth.handle().clone();
        let catalog = catalog.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *busy {
                return;
            }
            let request = match draft.validate(&catalog) {
                Ok(request) => request,
                Err(err) => {
                    form_error.set(Some(err.translation_key()));
                    return;
                }
            };
            form_error.set(None);
            busy.set(true);
            let client = client.clone();
            let session = session.clone();
            let notice = notice.clone();
            let busy = busy.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let created = client.create::<PurchaseOrder, _>(&request).await;
                busy.set(false);
                match guard_session(&session, created) {
                    Ok(order) => {
                        log::info!("created order {}", order.number);
                        if let Some(navigator) = navigator {
                            navigator.push(&AppRoute::OrderDetail { id: order.id });
                        }
                    }
                    Err(_) => notice.set(Some(("orders.action_failed", ToastKind::Error))),
                }
            });
        })
    };

    let on_vendor = {
        let draft = draft.clone();
        Callback::from(move |event: Event| {
            let vendor_id = selected_id(&event);
            edit(&draft, |next| next.vendor_id = vendor_id);
        })
    };
    let on_project = {
        let draft = draft.clone();
        Callback::from(move |event: Event| {
            let project_id = selected_id(&event);
            edit(&draft, |next| next.project_id = project_id);
        })
    };
    let on_currency = {
        let draft = draft.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                edit(&draft, |next| next.currency = input.value());
            }
        })
    };
    let on_notes = {
        let draft = draft.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlTextAreaElement>() {
                edit(&draft, |next| next.notes = input.value());
            }
        })
    };
    let on_add_line = {
        let draft = draft.clone();
        Callback::from(move |_: MouseEvent| edit(&draft, |next| next.lines.push(LineDraft::default())))
    };

    let close_notice = {
        let notice = notice.clone();
        Callback::from(move |()| notice.set(None))
    };

    let still_loading =
        vendors.data.is_none() || projects.data.is_none() || items.data.is_none();
    if let Some(error) = vendors
        .error
        .as_ref()
        .or(projects.error.as_ref())
        .or(items.error.as_ref())
    {
        return html! {
            <div class="p-4">{ load_error(i18n.t("common.load_failed"), error) }</div>
        };
    }
    if still_loading {
        return html! { <Loading /> };
    }

    let vendor_options = vendors.data.clone().unwrap_or_default();
    let project_options = projects.data.clone().unwrap_or_default();
    let line_rows = draft.lines.iter().enumerate().map(|(index, line)| {
        let on_item = {
            let draft = draft.clone();
            Callback::from(move |event: Event| {
                let item_id = selected_id(&event);
                edit(&draft, |next| next.lines[index].item_id = item_id);
            })
        };
        let on_quantity = {
            let draft = draft.clone();
            Callback::from(move |event: InputEvent| {
                if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                    edit(&draft, |next| next.lines[index].quantity = input.value());
                }
            })
        };
        let on_remove = {
            let draft = draft.clone();
            Callback::from(move |_: MouseEvent| {
                edit(&draft, |next| {
                    next.lines.remove(index);
                });
            })
        };
        html! {
            <div class="flex gap-2 items-end" key={index}>
                <select class="select select-bordered flex-1" onchange={on_item}>
                    <option value="" selected={line.item_id.is_none()}>{ i18n.t("orders.item") }</option>
                    { for catalog.iter().map(|item| html! {
                        <option value={item.id.to_string()} selected={line.item_id == Some(item.id)}>
                            { item.label() }{ " · " }{ format_money(item.unit_price_minor, &draft.currency) }
                        </option>
                    }) }
                </select>
                <input
                    class="input input-bordered w-28"
                    type="number"
                    min="1"
                    placeholder={i18n.t("orders.quantity")}
                    value={line.quantity.clone()}
                    oninput={on_quantity}
                />
                <button type="button" class="btn btn-ghost" onclick={on_remove}>
                    { i18n.t("orders.remove_line") }
                </button>
            </div>
        }
    });

    html! {
        <div class="p-4 max-w-3xl">
            { page_title(i18n.t("orders.new"), html! {}) }
            <form class="space-y-4" {onsubmit} novalidate=true>
                if let Some(key) = *form_error {
                    <div class="alert alert-error" role="alert"><span>{ i18n.t(key) }</span></div>
                }
                <label class="form-control">
                    <span class="label-text">{ i18n.t("orders.vendor") }</span>
                    <select class="select select-bordered" onchange={on_vendor}>
                        <option value="" selected={draft.vendor_id.is_none()}>{ "—" }</option>
                        { for vendor_options.iter().filter(|vendor| vendor.active).map(|vendor| html! {
                            <option value={vendor.id.to_string()} selected={draft.vendor_id == Some(vendor.id)}>
                                { vendor.label() }
                            </option>
                        }) }
                    </select>
                </label>
                <label class="form-control">
                    <span class="label-text">{ i18n.t("orders.project") }</span>
                    <select class="select select-bordered" onchange={on_project}>
                        <option value="" selected={draft.project_id.is_none()}>{ i18n.t("common.none") }</option>
                        { for project_options.iter().filter(|project| project.active).map(|project| html! {
                            <option value={project.id.to_string()} selected={draft.project_id == Some(project.id)}>
                                { project.label() }
                            </option>
                        }) }
                    </select>
                </label>
                <label class="form-control">
                    <span class="label-text">{ i18n.t("orders.currency") }</span>
                    <input class="input input-bordered w-28" value={draft.currency.clone()} oninput={on_currency} />
                </label>
                <fieldset class="space-y-2">
                    <legend class="font-semibold">{ i18n.t("orders.lines") }</legend>
                    { for line_rows }
                    <button type="button" class="btn btn-ghost btn-sm" onclick={on_add_line}>
                        { i18n.t("orders.add_line") }
                    </button>
                </fieldset>
                <label class="form-control">
                    <span class="label-text">{ i18n.t("orders.notes") }</span>
                    <textarea class="textarea textarea-bordered" value={draft.notes.clone()} oninput={on_notes} />
                </label>
                <button class="btn btn-primary" type="submit" disabled={*busy}>
                    { i18n.t("orders.create") }
                </button>
            </form>
            if let Some((key, kind)) = *notice {
                <Toast message={i18n.t(key)} {kind} timeout_ms={config.toast_timeout_ms} on_close={close_notice} />
            }
        </div>
    }
}
