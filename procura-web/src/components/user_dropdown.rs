use crate::{containers::session_provider::use_session, routes::AppRoute};
use i18nrs::yew::use_translation;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::hooks::use_navigator;

#[function_component(UserDropdown)]
pub fn user_dropdown() -> Html {
    let navigator = use_navigator();
    let (i18n, ..) = use_translation();
    let auth = use_session();
    let Some(user) = auth.user().cloned() else {
        return html! {};
    };

    let logout_button = {
        let session = auth.handle().clone();
        let onclick = Callback::from(move |event: yew::MouseEvent| {
            event.prevent_default();
            let session = session.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                session.logout().await;
                if let Some(navigator) = navigator {
                    navigator.push(&AppRoute::Login);
                }
            });
        });
        html! {
            <li><a {onclick}>{i18n.t("header.logout")}</a></li>
        }
    };

    html! {
        <div class="dropdown dropdown-end">
            <div tabindex="0" role="button" class="btn btn-ghost btn-circle">
                <span class="font-semibold">{ user.label().chars().next().unwrap_or('?').to_uppercase().to_string() }</span>
            </div>
            <ul tabIndex={0} class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-52">
                <li class="px-2 py-1 text-left">
                    <div class="text-sm font-semibold text-base-content">{ user.label() }</div>
                    <div class="text-xs text-base-content/70">{ &user.email }</div>
                    <div class="text-xs text-base-content/50">
                        { user.roles.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ") }
                    </div>
                </li>
                <div class="divider my-0"></div>
                {logout_button}
            </ul>
        </div>
    }
}
