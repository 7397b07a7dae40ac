//! Tests for the API client
//!
//! Covers URL construction, CSRF bookkeeping and the mapping of backend
//! responses onto [`ApiError`]. Nothing here touches the network.

use super::*;
use shared::models::{DirectoryUser, Vendor};

#[test]
fn api_url_joins_base_and_path() {
    let client = ProcuraClient::new("http://localhost:8080/api/");
    assert_eq!(
        client.api_url("/auth/me"),
        "http://localhost:8080/api/auth/me"
    );
    assert_eq!(client.api_url("vendors"), "http://localhost:8080/api/vendors");
}

#[test]
fn resource_paths_follow_collection_names() {
    assert_eq!(ProcuraClient::collection_path::<Vendor>(), "vendors");
    assert_eq!(ProcuraClient::resource_path::<Vendor>(42), "vendors/42");
    assert_eq!(ProcuraClient::resource_path::<DirectoryUser>(7), "users/7");
    assert_eq!(
        ProcuraClient::resource_path::<PurchaseOrder>(1001),
        "orders/1001"
    );
}

#[test]
fn csrf_token_is_shared_between_clones() {
    let client = ProcuraClient::new("/api");
    assert_eq!(client.current_csrf_token(), None);

    let clone = client.clone();
    clone.set_csrf_token(Some("abc".to_string()));
    assert_eq!(client.current_csrf_token().as_deref(), Some("abc"));
    assert_eq!(client, clone);

    client.set_csrf_token(None);
    assert_eq!(clone.current_csrf_token(), None);
}

#[test]
fn separately_built_clients_are_not_equal() {
    assert_ne!(ProcuraClient::new("/api"), ProcuraClient::new("/api"));
}

#[test]
fn unauthorized_status_maps_to_unauthorized() {
    assert_eq!(ApiError::from_status(401, "whatever"), ApiError::Unauthorized);
    assert!(ApiError::Unauthorized.is_unauthorized());
}

#[test]
fn error_body_message_is_preferred() {
    let body = r#"{"message":"Order locked","details":"already approved"}"#;
    assert_eq!(
        ApiError::from_status(409, body),
        ApiError::Status {
            status: 409,
            message: "Order locked: already approved".to_string(),
        }
    );
}

#[test]
fn plain_text_body_is_used_verbatim() {
    assert_eq!(
        ApiError::from_status(502, " upstream timeout \n"),
        ApiError::Status {
            status: 502,
            message: "upstream timeout".to_string(),
        }
    );
}

#[test]
fn empty_body_falls_back_to_reason_phrase() {
    assert_eq!(
        ApiError::from_status(404, ""),
        ApiError::Status {
            status: 404,
            message: "Not Found".to_string(),
        }
    );
}

#[test]
fn cookie_lookup_handles_spacing_and_missing_names() {
    let cookies = "theme=dark; CSRF-TOKEN=tok-1 ;other=x=y";
    assert_eq!(cookie_value(cookies, "CSRF-TOKEN").as_deref(), Some("tok-1"));
    assert_eq!(cookie_value(cookies, "other").as_deref(), Some("x=y"));
    assert_eq!(cookie_value(cookies, "missing"), None);
    assert_eq!(cookie_value("", "CSRF-TOKEN"), None);
}

#[test]
fn error_messages_are_readable() {
    assert_eq!(
        ApiError::Network("connection refused".to_string()).to_string(),
        "unable to reach the server: connection refused"
    );
    assert_eq!(
        ApiError::Status {
            status: 500,
            message: "boom".to_string()
        }
        .to_string(),
        "request failed (500): boom"
    );
}
