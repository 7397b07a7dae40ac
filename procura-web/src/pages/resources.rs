//! Collection and detail pages for the reference data.

use i18nrs::yew::use_translation;
use shared::models::{DirectoryUser, Item, Project, PurchaseOrder, Resource, Template, Vendor};
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::api::ApiError;
use crate::components::{
    Cell, DataTable, Loading, TableRow, status_badge::status_key,
};
use crate::format::{DEFAULT_CURRENCY, format_date, format_money};
use crate::hooks::{use_resource, use_resource_list};
use crate::routes::AppRoute;

/// A record with a page of its own.
pub trait DetailView: TableRow + Resource {
    /// Collection page this record is listed on.
    fn list_route() -> AppRoute;
    /// Labelled values shown on the detail page.
    fn fields(&self) -> Vec<(&'static str, Cell)>;
}

impl TableRow for Vendor {
    fn columns() -> Vec<&'static str> {
        vec!["common.name", "vendors.contact_email", "vendors.phone", "common.active"]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.name),
            Cell::optional(self.contact_email.as_deref()),
            Cell::optional(self.phone.as_deref()),
            Cell::flag(self.active),
        ]
    }

    fn detail_route(&self) -> AppRoute {
        AppRoute::VendorDetail { id: self.id }
    }
}

impl DetailView for Vendor {
    fn list_route() -> AppRoute {
        AppRoute::Vendors
    }

    fn fields(&self) -> Vec<(&'static str, Cell)> {
        Self::columns().into_iter().zip(self.cells()).collect()
    }
}

impl TableRow for Item {
    fn columns() -> Vec<&'static str> {
        vec!["items.sku", "common.name", "items.unit", "items.unit_price"]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.sku),
            Cell::text(&self.name),
            Cell::text(&self.unit),
            Cell::text(format_money(self.unit_price_minor, DEFAULT_CURRENCY)),
        ]
    }

    fn detail_route(&self) -> AppRoute {
        AppRoute::ItemDetail { id: self.id }
    }
}

impl DetailView for Item {
    fn list_route() -> AppRoute {
        AppRoute::Items
    }

    fn fields(&self) -> Vec<(&'static str, Cell)> {
        let mut fields: Vec<_> = Self::columns().into_iter().zip(self.cells()).collect();
        fields.push((
            "orders.vendor",
            self.vendor_id
                .map_or_else(|| Cell::translated("common.none"), |id| Cell::text(format!("#{id}"))),
        ));
        fields
    }
}

impl TableRow for Project {
    fn columns() -> Vec<&'static str> {
        vec!["projects.code", "common.name", "projects.budget", "common.active"]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.code),
            Cell::text(&self.name),
            self.budget_minor.map_or_else(
                || Cell::translated("common.none"),
                |budget| Cell::text(format_money(budget, DEFAULT_CURRENCY)),
            ),
            Cell::flag(self.active),
        ]
    }

    fn detail_route(&self) -> AppRoute {
        AppRoute::ProjectDetail { id: self.id }
    }
}

impl DetailView for Project {
    fn list_route() -> AppRoute {
        AppRoute::Projects
    }

    fn fields(&self) -> Vec<(&'static str, Cell)> {
        Self::columns().into_iter().zip(self.cells()).collect()
    }
}

impl TableRow for DirectoryUser {
    fn columns() -> Vec<&'static str> {
        vec!["common.name", "common.email", "users.role", "common.active"]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.name),
            Cell::text(&self.email),
            Cell::text(self.role.as_str()),
            Cell::flag(self.active),
        ]
    }

    fn detail_route(&self) -> AppRoute {
        AppRoute::UserDetail { id: self.id }
    }
}

impl DetailView for DirectoryUser {
    fn list_route() -> AppRoute {
        AppRoute::Users
    }

    fn fields(&self) -> Vec<(&'static str, Cell)> {
        Self::columns().into_iter().zip(self.cells()).collect()
    }
}

impl TableRow for Template {
    fn columns() -> Vec<&'static str> {
        vec!["common.name", "templates.description"]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.name),
            Cell::optional(self.description.as_deref()),
        ]
    }

    // Templates have no page of their own; rows link back to the list.
    fn detail_route(&self) -> AppRoute {
        AppRoute::Templates
    }
}

impl TableRow for PurchaseOrder {
    fn columns() -> Vec<&'static str> {
        vec![
            "orders.number",
            "common.status",
            "orders.vendor",
            "orders.total",
            "orders.created",
        ]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.number),
            Cell::translated(status_key(self.status)),
            Cell::text(format!("#{}", self.vendor_id)),
            Cell::money(self.total_minor(), &self.currency),
            Cell::text(format_date(self.created_at.as_datetime())),
        ]
    }

    fn detail_route(&self) -> AppRoute {
        AppRoute::OrderDetail { id: self.id }
    }
}

/// Alert shown when a fetch fails for a reason other than an expired session.
pub fn load_error(message: String, error: &ApiError) -> Html {
    html! {
        <div class="alert alert-error" role="alert">
            <span>{ message }{ ": " }{ error.to_string() }</span>
        </div>
    }
}

/// Heading for a collection page.
pub fn page_title(title: String, actions: Html) -> Html {
    html! {
        <div class="flex items-center justify-between mb-4">
            <h1 class="text-2xl font-bold">{ title }</h1>
            { actions }
        </div>
    }
}

#[derive(Properties, PartialEq, Eq)]
pub struct ResourceListPageProps {
    pub title_route: AppRoute,
}

#[function_component(ResourceListPage)]
pub fn resource_list_page<R: Resource + TableRow>(props: &ResourceListPageProps) -> Html {
    let (i18n, ..) = use_translation();
    let rows = use_resource_list::<R>();

    let body = match (&rows.data, &rows.error) {
        (_, Some(error)) => load_error(i18n.t("common.load_failed"), error),
        (Some(data), None) if !rows.loading => html! { <DataTable<R> rows={data.clone()} /> },
        _ => html! { <Loading /> },
    };

    html! {
        <div class="p-4">
            { page_title(i18n.t(props.title_route.translation_key()), html! {}) }
            { body }
        </div>
    }
}

#[derive(Properties, PartialEq, Eq)]
pub struct DetailPageProps {
    pub id: u64,
}

#[function_component(ResourceDetailPage)]
pub fn resource_detail_page<R: DetailView>(props: &DetailPageProps) -> Html {
    let (i18n, ..) = use_translation();
    let record = use_resource::<R>(props.id);

    let body = match (&record.data, &record.error) {
        (_, Some(error)) => load_error(i18n.t("common.load_failed"), error),
        (Some(record), None) => html! {
            <div class="card bg-base-200 shadow">
                <div class="card-body">
                    <h2 class="card-title">{ record.label() }</h2>
                    <dl class="grid grid-cols-[max-content_1fr] gap-x-6 gap-y-2">
                        { for record.fields().into_iter().map(|(key, cell)| html! {
                            <>
                                <dt class="font-semibold">{ i18n.t(key) }</dt>
                                <dd>{ match cell {
                                    Cell::Text(text) => text,
                                    Cell::Translated(key) => i18n.t(&key),
                                } }</dd>
                            </>
                        }) }
                    </dl>
                </div>
            </div>
        },
        _ => html! { <Loading /> },
    };

    html! {
        <div class="p-4 space-y-4">
            <Link<AppRoute> to={R::list_route()} classes="btn btn-ghost btn-sm">
                { "← " }{ i18n.t("common.back") }
            </Link<AppRoute>>
            { body }
        </div>
    }
}

#[function_component(VendorsPage)]
pub fn vendors_page() -> Html {
    html! { <ResourceListPage<Vendor> title_route={AppRoute::Vendors} /> }
}

#[function_component(ItemsPage)]
pub fn items_page() -> Html {
    html! { <ResourceListPage<Item> title_route={AppRoute::Items} /> }
}

#[function_component(ProjectsPage)]
pub fn projects_page() -> Html {
    html! { <ResourceListPage<Project> title_route={AppRoute::Projects} /> }
}

#[function_component(UsersPage)]
pub fn users_page() -> Html {
    html! { <ResourceListPage<DirectoryUser> title_route={AppRoute::Users} /> }
}

#[function_component(TemplatesPage)]
pub fn templates_page() -> Html {
    html! { <ResourceListPage<Template> title_route={AppRoute::Templates} /> }
}

#[function_component(VendorDetailPage)]
pub fn vendor_detail_page(props: &DetailPageProps) -> Html {
    html! { <ResourceDetailPage<Vendor> id={props.id} /> }
}

#[function_component(ItemDetailPage)]
pub fn item_detail_page(props: &DetailPageProps) -> Html {
    html! { <ResourceDetailPage<Item> id={props.id} /> }
}

#[function_component(ProjectDetailPage)]
pub fn project_detail_page(props: &DetailPageProps) -> Html {
    html! { <ResourceDetailPage<Project> id={props.id} /> }
}

#[function_component(UserDetailPage)]
pub fn user_detail_page(props: &DetailPageProps) -> Html {
    html! { <ResourceDetailPage<DirectoryUser> id={props.id} /> }
}
