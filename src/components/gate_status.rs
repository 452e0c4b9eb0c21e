use yew::prelude::*;

use crate::models::GateStatus;

#[derive(Properties, PartialEq)]
pub struct GateStatusToggleProps {
    pub initial: GateStatus,
    pub on_confirm: Callback<GateStatus>,
}

/// Gate In / Gate Out switch with an explicit confirm button
#[function_component(GateStatusToggle)]
pub fn gate_status_toggle(props: &GateStatusToggleProps) -> Html {
    let status = use_state(|| props.initial);

    let on_toggle = {
        let status = status.clone();
        Callback::from(move |_| status.set(status.toggled()))
    };

    let on_confirm = {
        let status = status.clone();
        let cb = props.on_confirm.clone();
        Callback::from(move |_| cb.emit(*status))
    };

    let is_gate_in = *status == GateStatus::GateIn;

    html! {
        <div class="gate-status">
            <p class="gate-title">{"Confirm the status"}</p>
            <label class="switch-row">
                <span>{status.label()}</span>
                <input type="checkbox" class="gate-switch" checked={is_gate_in} onchange={on_toggle} />
            </label>
            <button class="btn-primary" onclick={on_confirm}>{"Update status"}</button>
        </div>
    }
}
