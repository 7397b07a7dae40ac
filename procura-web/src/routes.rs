use crate::pages::*;
use strum::{EnumIter, IntoEnumIterator};
use yew::prelude::*;
use yew_router::prelude::*;

/// Every page reachable in the application.
#[derive(Debug, Clone, PartialEq, Eq, Routable, EnumIter)]
pub enum AppRoute {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/dashboard")]
    Dashboard,
    #[at("/orders")]
    Orders,
    #[at("/orders/new")]
    OrderNew,
    #[at("/orders/:id")]
    OrderDetail { id: u64 },
    #[at("/vendors")]
    Vendors,
    #[at("/vendors/:id")]
    VendorDetail { id: u64 },
    #[at("/items")]
    Items,
    #[at("/items/:id")]
    ItemDetail { id: u64 },
    #[at("/projects")]
    Projects,
    #[at("/projects/:id")]
    ProjectDetail { id: u64 },
    #[at("/users")]
    Users,
    #[at("/users/:id")]
    UserDetail { id: u64 },
    #[at("/templates")]
    Templates,
    #[at("/reports")]
    Reports,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl AppRoute {
    /// Match `path` against the route table; anything unknown is `NotFound`.
    pub fn resolve(path: &str) -> Self {
        Self::recognize(path).unwrap_or(Self::NotFound)
    }

    /// Paths an authenticated user is bounced from to the dashboard.
    pub const fn is_entry(&self) -> bool {
        matches!(self, Self::Home | Self::Login)
    }

    /// Top-level entries of the sidebar, in display order.
    pub fn sidebar_routes() -> Vec<Self> {
        Self::iter()
            .filter(|route| route.section() == *route && !route.is_entry())
            .filter(|route| !matches!(route, Self::NotFound))
            .collect()
    }

    /// The sidebar entry a route belongs to.
    pub const fn section(&self) -> Self {
        match self {
            Self::Home | Self::Login | Self::Dashboard => Self::Dashboard,
            Self::Orders | Self::OrderNew | Self::OrderDetail { .. } => Self::Orders,
            Self::Vendors | Self::VendorDetail { .. } => Self::Vendors,
            Self::Items | Self::ItemDetail { .. } => Self::Items,
            Self::Projects | Self::ProjectDetail { .. } => Self::Projects,
            Self::Users | Self::UserDetail { .. } => Self::Users,
            Self::Templates => Self::Templates,
            Self::Reports => Self::Reports,
            Self::NotFound => Self::NotFound,
        }
    }

    /// Key into the terminology bundle for this route's title.
    pub const fn translation_key(&self) -> &'static str {
        match self.section() {
            Self::Orders => "routes.orders",
            Self::Vendors => "routes.vendors",
            Self::Items => "routes.items",
            Self::Projects => "routes.projects",
            Self::Users => "routes.users",
            Self::Templates => "routes.templates",
            Self::Reports => "routes.reports",
            Self::NotFound => "routes.not_found",
            _ => "routes.dashboard",
        }
    }
}

/// Render the page body for `route` inside the authenticated shell.
///
/// Detail pages are keyed by id so moving between records refetches.
pub fn switch(route: AppRoute) -> Html {
    log::debug!("rendering route {route:?}");
    match route {
        AppRoute::Home | AppRoute::Login | AppRoute::Dashboard => html! { <DashboardPage /> },
        AppRoute::Orders => html! { <OrdersPage /> },
        AppRoute::OrderNew => html! { <OrderNewPage /> },
        AppRoute::OrderDetail { id } => html! { <OrderDetailPage key={id} {id} /> },
        AppRoute::Vendors => html! { <VendorsPage /> },
        AppRoute::VendorDetail { id } => html! { <VendorDetailPage key={id} {id} /> },
        AppRoute::Items => html! { <ItemsPage /> },
        AppRoute::ItemDetail { id } => html! { <ItemDetailPage key={id} {id} /> },
        AppRoute::Projects => html! { <ProjectsPage /> },
        AppRoute::ProjectDetail { id } => html! { <ProjectDetailPage key={id} {id} /> },
        AppRoute::Users => html! { <UsersPage /> },
        AppRoute::UserDetail { id } => html! { <UserDetailPage key={id} {id} /> },
        AppRoute::Templates => html! { <TemplatesPage /> },
        AppRoute::Reports => html! { <ReportsPage /> },
        AppRoute::NotFound => html! { <NotFoundPage /> },
    }
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
