use yew::prelude::*;

use crate::models::Shipment;
use crate::utils::format_date_time;

#[derive(Properties, PartialEq)]
pub struct ShipmentDetailsProps {
    pub shipment: Shipment,
    pub on_close: Callback<()>,
    /// Label of the primary action; no button when absent
    #[prop_or_default]
    pub action_label: Option<AttrValue>,
    #[prop_or_default]
    pub on_action: Callback<Shipment>,
    /// Extra content below the details (gate switch)
    #[prop_or_default]
    pub children: Children,
}

/// Bottom sheet with the full shipment
#[function_component(ShipmentDetails)]
pub fn shipment_details(props: &ShipmentDetailsProps) -> Html {
    let s = &props.shipment;
    let destination = s.destination();

    let on_action = {
        let cb = props.on_action.clone();
        let shipment = s.clone();
        Callback::from(move |_| cb.emit(shipment.clone()))
    };

    html! {
        <div class="sheet-backdrop" onclick={props.on_close.reform(|_| ())}>
            <div class="bottom-sheet" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <div class="sheet-header">
                    <h2>{"Shipment Details"}</h2>
                    <button class="btn-close" onclick={props.on_close.reform(|_| ())}>{"✕"}</button>
                </div>
                <div class="sheet-content">
                    <div class="shipment-header">
                        <span class="shipment-number-large">{s.shipment_number.clone()}</span>
                        <span class={classes!("status-badge-large", s.shipment_status.badge_class())}>
                            {s.shipment_status.to_string()}
                        </span>
                    </div>
                    <div class="detail-item">
                        {format!("Truck Type: {}", s.truck_type_name())}
                    </div>
                    <div class="detail-item">
                        {format!("Destination: {}", if destination.is_empty() { "-" } else { destination.as_str() })}
                    </div>
                    <div class="detail-item">
                        {format!("Expected Arrival: {}", format_date_time(s.expected_arrival_date.as_deref()))}
                    </div>
                </div>
                { for props.children.iter() }
                if let Some(label) = &props.action_label {
                    <button class="btn-primary" onclick={on_action}>{label.clone()}</button>
                }
            </div>
        </div>
    }
}
