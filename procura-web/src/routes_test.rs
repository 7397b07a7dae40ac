//! Tests for the route table
//!
//! Validates path recognition, id parameters and the sidebar grouping used
//! by the authenticated shell.

use super::AppRoute;
use test_case::test_case;
use yew_router::Routable;

#[test_case("/", AppRoute::Home)]
#[test_case("/login", AppRoute::Login)]
#[test_case("/dashboard", AppRoute::Dashboard)]
#[test_case("/orders", AppRoute::Orders)]
#[test_case("/orders/new", AppRoute::OrderNew)]
#[test_case("/orders/1001", AppRoute::OrderDetail { id: 1001 })]
#[test_case("/vendors/42", AppRoute::VendorDetail { id: 42 })]
#[test_case("/items/3", AppRoute::ItemDetail { id: 3 })]
#[test_case("/projects/9", AppRoute::ProjectDetail { id: 9 })]
#[test_case("/users/7", AppRoute::UserDetail { id: 7 })]
#[test_case("/templates", AppRoute::Templates)]
#[test_case("/reports", AppRoute::Reports)]
fn resolves_known_paths(path: &str, expected: AppRoute) {
    assert_eq!(AppRoute::resolve(path), expected);
}

#[test_case("/nowhere")]
#[test_case("/vendors/abc")]
#[test_case("/orders/1/lines/2")]
fn unknown_paths_resolve_to_not_found(path: &str) {
    assert_eq!(AppRoute::resolve(path), AppRoute::NotFound);
}

#[test]
fn paths_round_trip_through_to_path() {
    for route in [
        AppRoute::Dashboard,
        AppRoute::OrderDetail { id: 5 },
        AppRoute::VendorDetail { id: 42 },
        AppRoute::Reports,
    ] {
        assert_eq!(AppRoute::resolve(&route.to_path()), route);
    }
}

#[test]
fn only_root_and_login_are_entry_routes() {
    assert!(AppRoute::Home.is_entry());
    assert!(AppRoute::Login.is_entry());
    assert!(!AppRoute::Dashboard.is_entry());
    assert!(!AppRoute::NotFound.is_entry());
}

#[test]
fn sidebar_lists_collection_pages_in_order() {
    assert_eq!(
        AppRoute::sidebar_routes(),
        vec![
            AppRoute::Dashboard,
            AppRoute::Orders,
            AppRoute::Vendors,
            AppRoute::Items,
            AppRoute::Projects,
            AppRoute::Users,
            AppRoute::Templates,
            AppRoute::Reports,
        ]
    );
}

#[test]
fn detail_routes_highlight_their_collection() {
    assert_eq!(AppRoute::VendorDetail { id: 42 }.section(), AppRoute::Vendors);
    assert_eq!(AppRoute::OrderNew.section(), AppRoute::Orders);
    assert_eq!(AppRoute::Home.section(), AppRoute::Dashboard);
    assert_eq!(
        AppRoute::UserDetail { id: 1 }.translation_key(),
        "routes.users"
    );
    assert_eq!(AppRoute::Login.translation_key(), "routes.dashboard");
}
