use gloo_timers::callback::Timeout;
use i18nrs::yew::use_translation;
use yew::{AttrValue, Callback, Html, Properties, function_component, html, use_effect_with};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Error,
}

impl ToastKind {
    pub const fn alert_class(self) -> &'static str {
        match self {
            Self::Info => "alert-info",
            Self::Success => "alert-success",
            Self::Error => "alert-error",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub message: AttrValue,
    #[prop_or_default]
    pub kind: ToastKind,
    pub timeout_ms: u32,
    pub on_close: Callback<()>,
}

/// A notification that dismisses itself after `timeout_ms`.
#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    let (i18n, ..) = use_translation();

    {
        let on_close = props.on_close.clone();
        use_effect_with(
            (props.message.clone(), props.timeout_ms),
            move |(_, timeout_ms)| {
                let timeout = Timeout::new(*timeout_ms, move || on_close.emit(()));
                move || drop(timeout)
            },
        );
    }

    let dismiss = props.on_close.reform(|_: yew::MouseEvent| ());

    html! {
        <div class="toast toast-end toast-bottom z-50">
            <div class={yew::classes!("alert", props.kind.alert_class())} role="status">
                <span>{ props.message.clone() }</span>
                <button class="btn btn-ghost btn-xs" onclick={dismiss} aria-label={i18n.t("common.dismiss")}>
                    {"✕"}
                </button>
            </div>
        </div>
    }
}
