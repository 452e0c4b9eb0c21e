use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::components::ResultModal;
use crate::hooks::{use_session_context, use_toaster};
use crate::models::shipment::DESTINATION_CITIES;
use crate::models::{Route, Session, ShipmentStatus, ShipmentSummary};
use crate::services::ApiClient;
use crate::viewmodels::{fallback_truck_types, ShipmentViewModel};

#[derive(Properties, PartialEq)]
pub struct CreateShipmentProps {
    pub session: Session,
}

fn select_value(e: Event) -> String {
    let select: HtmlSelectElement = e.target_unchecked_into();
    select.value()
}

#[function_component(CreateShipment)]
pub fn create_shipment(props: &CreateShipmentProps) -> Html {
    let ctx = use_session_context();
    let report = ctx.as_ref().map(|c| c.report.clone()).unwrap_or_default();
    let navigate = ctx.as_ref().map(|c| c.navigate.clone()).unwrap_or_default();
    let toaster = use_toaster();

    let truck_types = use_state(fallback_truck_types);
    let shipment_number = use_state(|| None::<String>);
    let truck_type = use_state(String::new);
    let destination_city = use_state(String::new);
    let submitting = use_state(|| false);
    let result = use_state(|| None::<ShipmentSummary>);

    // Truck types and a fresh shipment number on mount
    {
        let truck_types = truck_types.clone();
        let shipment_number = shipment_number.clone();
        let session = props.session.clone();
        let report = report.clone();
        use_effect_with(props.session.user_id.clone(), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let vm = ShipmentViewModel::new(ApiClient::new());
                match vm.truck_type_options(&session).await {
                    Ok(names) => truck_types.set(names),
                    Err(e) => report.emit(e),
                }
                match vm.reserve_shipment_number(&session).await {
                    Ok(number) => shipment_number.set(Some(number)),
                    Err(e) => log::warn!("⚠️ No shipment number reserved, server will assign: {}", e),
                }
            });
            || ()
        });
    }

    let on_truck_type = {
        let truck_type = truck_type.clone();
        Callback::from(move |e: Event| truck_type.set(select_value(e)))
    };
    let on_city = {
        let destination_city = destination_city.clone();
        Callback::from(move |e: Event| destination_city.set(select_value(e)))
    };

    let on_submit = {
        let session = props.session.clone();
        let shipment_number = shipment_number.clone();
        let truck_type = truck_type.clone();
        let destination_city = destination_city.clone();
        let submitting = submitting.clone();
        let result = result.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            submitting.set(true);
            let session = session.clone();
            let shipment_number = (*shipment_number).clone();
            let truck_type = (*truck_type).clone();
            let destination_city = (*destination_city).clone();
            let submitting = submitting.clone();
            let result = result.clone();
            let report = report.clone();
            let toaster = toaster.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let vm = ShipmentViewModel::new(ApiClient::new());
                let created = vm
                    .create_shipment(&session, shipment_number.as_deref(), &truck_type, &destination_city)
                    .await;
                match created {
                    Ok(summary) => {
                        toaster.success(format!("Shipment {} created", summary.shipment_number));
                        result.set(Some(summary));
                    }
                    Err(e) => report.emit(e),
                }
                submitting.set(false);
            });
        })
    };

    let on_done = navigate.reform(|_| Route::ShipmentList);
    let number_text = (*shipment_number).clone().unwrap_or_else(|| "Assigned on submit".to_string());

    html! {
        <div class="form-screen">
            <h1 class="form-title">{"Create Shipment"}</h1>
            <form class="shipment-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label>{"Shipment Number"}</label>
                    <div class="readonly-input">{number_text}</div>
                </div>
                <div class="form-group">
                    <label for="truck-type">{"Truck Type"}</label>
                    <select id="truck-type" onchange={on_truck_type}>
                        <option value="" selected={truck_type.is_empty()}>{"Select Truck Type"}</option>
                        { for truck_types.iter().map(|t| html! {
                            <option value={t.clone()} selected={*truck_type == *t}>{t.clone()}</option>
                        })}
                    </select>
                </div>
                <div class="form-group">
                    <label for="destination-city">{"Destination City"}</label>
                    <select id="destination-city" onchange={on_city}>
                        <option value="" selected={destination_city.is_empty()}>{"Select City"}</option>
                        { for DESTINATION_CITIES.iter().map(|c| html! {
                            <option value={*c} selected={*destination_city == *c}>{*c}</option>
                        })}
                    </select>
                </div>
                <div class="form-group">
                    <label>{"Shipment Status"}</label>
                    <div class="readonly-input">{ShipmentStatus::PLANNED}</div>
                </div>
                <button type="submit" class="btn-primary" disabled={*submitting}>
                    { if *submitting { "Submitting..." } else { "Submit" } }
                </button>
            </form>
            if let Some(summary) = (*result).clone() {
                <ResultModal {summary} {on_done} />
            }
        </div>
    }
}
