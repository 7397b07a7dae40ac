//! Data hooks over the REST client.
//!
//! A 401 from any of these calls invalidates the session, which sends the
//! user back to the login view on the same path.

use shared::models::Resource;
use yew::prelude::*;
use yew_hooks::{UseAsyncHandle, UseAsyncOptions, use_async_with_options};

use crate::api::ApiError;
use crate::containers::session_provider::{use_client, use_session};
use crate::session::SessionContext;

/// Pass `result` through, dropping the session when the backend refused it.
pub fn guard_session<T>(session: &SessionContext, result: Result<T, ApiError>) -> Result<T, ApiError> {
    if let Err(err) = &result {
        if err.is_unauthorized() {
            log::warn!("request rejected as unauthorized, invalidating session");
            session.invalidate();
        } else {
            log::error!("request failed: {err}");
        }
    }
    result
}

/// Fetch the whole collection of `R` on mount.
#[hook]
pub fn use_resource_list<R: Resource>() -> UseAsyncHandle<Vec<R>, ApiError> {
    let client = use_client();
    let session = use_session().handle().clone();
    use_async_with_options(
        async move { guard_session(&session, client.list::<R>().await) },
        UseAsyncOptions::enable_auto(),
    )
}

/// Fetch one `R` on mount. Callers key the component by `id`.
#[hook]
pub fn use_resource<R: Resource>(id: u64) -> UseAsyncHandle<R, ApiError> {
    let client = use_client();
    let session = use_session().handle().clone();
    use_async_with_options(
        async move { guard_session(&session, client.get::<R>(id).await) },
        UseAsyncOptions::enable_auto(),
    )
}
