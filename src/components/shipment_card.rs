use yew::prelude::*;

use crate::models::Shipment;
use crate::utils::format_date_time;

const TRUCK_TYPE_MAX_CHARS: usize = 15;

#[derive(Properties, PartialEq, Clone)]
pub struct ShipmentCardProps {
    pub shipment: Shipment,
    pub on_select: Callback<Shipment>,
    #[prop_or(false)]
    pub is_selected: bool,
}

#[function_component(ShipmentCard)]
pub fn shipment_card(props: &ShipmentCardProps) -> Html {
    let s = &props.shipment;

    let truck_type = {
        let name = s.truck_type_name();
        if name.chars().count() > TRUCK_TYPE_MAX_CHARS {
            format!("{}...", name.chars().take(TRUCK_TYPE_MAX_CHARS).collect::<String>())
        } else {
            name.to_string()
        }
    };

    let onclick = {
        let cb = props.on_select.clone();
        let shipment = s.clone();
        Callback::from(move |_| cb.emit(shipment.clone()))
    };

    html! {
        <div class={classes!("shipment-card", props.is_selected.then_some("selected"))} {onclick}>
            <div class="card-header">
                <span class="shipment-number">{s.shipment_number.clone()}</span>
                <span class={classes!("status-badge", s.shipment_status.badge_class())}>
                    {s.shipment_status.to_string()}
                </span>
            </div>
            <div class="info-row">
                <span class="info-icon">{"🚚"}</span>
                <span class="info-text">{truck_type}</span>
            </div>
            <div class="info-row">
                <span class="info-icon">{"📍"}</span>
                <span class="info-text">{s.destination_city.clone().unwrap_or_default()}</span>
            </div>
            <div class="info-row">
                <span class="info-icon">{"🕒"}</span>
                <span class="info-text">{format_date_time(s.expected_arrival_date.as_deref())}</span>
            </div>
        </div>
    }
}
