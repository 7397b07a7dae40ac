use crate::{
    components::{Toast, ToastKind},
    config::FrontendConfig,
    containers::session_provider::use_session,
    session::LoginError,
};
use i18nrs::yew::use_translation;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Where a failed login is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackSlot {
    /// Next to the form, for input rejected before any request is made.
    Inline,
    /// As a transient toast, for anything the backend or network reported.
    Toast,
}

pub const fn feedback_slot(error: &LoginError) -> FeedbackSlot {
    match error {
        LoginError::Validation(_) => FeedbackSlot::Inline,
        LoginError::InvalidCredentials | LoginError::Network(_) | LoginError::Server(_) => {
            FeedbackSlot::Toast
        }
    }
}

/// Sign-in form. Success needs no handling here: the gate reacts to the
/// session change and swaps the view.
#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let (i18n, ..) = use_translation();
    let auth = use_session();
    let config = use_memo((), |()| FrontendConfig::new());
    let email = use_state(String::new);
    let password = use_state(String::new);
    let inline_error = use_state(|| None::<&'static str>);
    let toast_error = use_state(|| None::<&'static str>);
    let loading = use_state(|| false);

    let onsubmit = {
        let session = auth.handle().clone();
        let email = email.clone();
        let password = password.clone();
        let inline_error = inline_error.clone();
        let toast_error = toast_error.clone();
        let loading = loading.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *loading {
                return;
            }
            let session = session.clone();
            let email_value = (*email).clone();
            let password_value = (*password).clone();
            let inline_error = inline_error.clone();
            let toast_error = toast_error.clone();
            let loading = loading.clone();
            loading.set(true);
            inline_error.set(None);
            toast_error.set(None);
            spawn_local(async move {
                if let Err(err) = session.login(&email_value, &password_value).await {
                    log::warn!("login rejected: {err}");
                    match feedback_slot(&err) {
                        FeedbackSlot::Inline => inline_error.set(Some(err.translation_key())),
                        FeedbackSlot::Toast => toast_error.set(Some(err.translation_key())),
                    }
                }
                loading.set(false);
            });
        })
    };

    let on_email_change = {
        let email = email.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                email.set(input.value());
            }
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };

    let close_toast = {
        let toast_error = toast_error.clone();
        Callback::from(move |()| toast_error.set(None))
    };

    let is_busy = *loading;

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" onsubmit={onsubmit} novalidate=true>
                    <h2 class="card-title text-2xl">{ i18n.t("login.title") }</h2>
                    if let Some(key) = *inline_error {
                        <div class="alert alert-error" role="alert">
                            <span>{ i18n.t(key) }</span>
                        </div>
                    }
                    <div class="form-control">
                        <label class="label" for="email">
                            <span class="label-text">{ i18n.t("login.email") }</span>
                        </label>
                        <input
                            id="email"
                            class="input input-bordered"
                            type="email"
                            autocomplete="username"
                            value={(*email).clone()}
                            oninput={on_email_change}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="password">
                            <span class="label-text">{ i18n.t("login.password") }</span>
                        </label>
                        <input
                            id="password"
                            class="input input-bordered"
                            type="password"
                            autocomplete="current-password"
                            value={(*password).clone()}
                            oninput={on_password_change}
                        />
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={is_busy}>
                            { if is_busy { i18n.t("login.submitting") } else { i18n.t("login.submit") } }
                        </button>
                    </div>
                </form>
            </div>
            if let Some(key) = *toast_error {
                <Toast
                    message={i18n.t(key)}
                    kind={ToastKind::Error}
                    timeout_ms={config.toast_timeout_ms}
                    on_close={close_toast}
                />
            }
        </div>
    }
}
