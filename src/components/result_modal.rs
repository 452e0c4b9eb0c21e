use yew::prelude::*;

use crate::models::ShipmentSummary;

#[derive(Properties, PartialEq)]
pub struct ResultModalProps {
    pub summary: ShipmentSummary,
    pub on_done: Callback<()>,
}

/// Outcome of a create/assign action
#[function_component(ResultModal)]
pub fn result_modal(props: &ResultModalProps) -> Html {
    let status = &props.summary.shipment_status;

    html! {
        <div class="modal-backdrop">
            <div class="result-modal">
                <div class="modal-header">
                    <span class="modal-icon">{"🚚"}</span>
                    <h2>{"Shipment Details"}</h2>
                </div>
                <div class="shipment-header">
                    <span class="shipment-number">{props.summary.shipment_number.clone()}</span>
                    <span class={classes!("status-badge", status.badge_class())}>
                        {status.to_string()}
                    </span>
                </div>
                <button class="btn-primary" onclick={props.on_done.reform(|_| ())}>
                    {"Done"}
                </button>
            </div>
        </div>
    }
}
