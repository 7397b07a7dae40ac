//! Header menu for switching the interface language.

use i18nrs::yew::use_translation;
use yew::{Callback, Html, MouseEvent, function_component, html, use_effect_with, use_state_eq};

use crate::language::{self, DEFAULT_LANGUAGE, LanguageInfo};

/// One entry of the language menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageChoice {
    pub info: LanguageInfo,
    pub active: bool,
}

/// Menu entries sorted by native name, with `current` marked active.
///
/// An unknown `current` falls back to [`DEFAULT_LANGUAGE`].
pub fn language_choices(current: &str) -> Vec<LanguageChoice> {
    let current = if language::get_language_info(current).is_some() {
        current
    } else {
        DEFAULT_LANGUAGE
    };
    let mut choices: Vec<_> = language::supported_languages()
        .into_values()
        .map(|info| LanguageChoice {
            active: info.code == current,
            info,
        })
        .collect();
    choices.sort_by(|a, b| a.info.native_name.cmp(b.info.native_name));
    choices
}

#[function_component(LanguageSelector)]
pub fn language_selector() -> Html {
    let (i18n, set_language) = use_translation();
    let language_state = use_state_eq(|| i18n.get_current_language().to_string());

    {
        let language_state = language_state.clone();
        use_effect_with(i18n.clone(), move |i18n| {
            language_state.set(i18n.get_current_language().to_string());
            || ()
        });
    }

    let choose = {
        let language_state = language_state.clone();
        Callback::from(move |code: &'static str| {
            log::info!("switching language to {code}");
            language_state.set(code.to_string());
            set_language.emit(code.to_string());
        })
    };

    let choices = language_choices(language_state.as_str());
    let active_flag = choices
        .iter()
        .find(|choice| choice.active)
        .map_or("🌐", |choice| choice.info.flag);

    html! {
        <div class="dropdown dropdown-end">
            <div tabindex="0" role="button" class="btn btn-ghost btn-circle" title={i18n.t("header.language")}>
                <span>{active_flag}</span>
            </div>
            <ul tabindex="0" class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-52">
                { for choices.into_iter().map(|choice| {
                    let code = choice.info.code;
                    let choose = choose.clone();
                    let onclick = move |event: MouseEvent| {
                        event.prevent_default();
                        choose.emit(code);
                    };
                    html! {
                        <li>
                            <a class={if choice.active { "menu-active" } else { "" }} {onclick}>
                                <span>{ choice.info.flag }</span>
                                <span class="grow">{ choice.info.native_name }</span>
                                <span class="badge badge-ghost badge-sm">{ code.to_uppercase() }</span>
                            </a>
                        </li>
                    }
                }) }
            </ul>
        </div>
    }
}
