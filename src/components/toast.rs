use yew::prelude::*;

use crate::hooks::{ToastKind, ToastMessage};

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    #[prop_or_default]
    pub message: Option<ToastMessage>,
    pub on_dismiss: Callback<()>,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    let Some(message) = &props.message else {
        return html! {};
    };

    let kind_class = match message.kind {
        ToastKind::Success => "toast-success",
        ToastKind::Error => "toast-error",
    };

    html! {
        <div class={classes!("toast", kind_class)} role="alert" onclick={props.on_dismiss.reform(|_| ())}>
            {message.text.clone()}
        </div>
    }
}
