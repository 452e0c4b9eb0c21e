use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::ResultModal;
use crate::hooks::{use_session_context, use_toaster};
use crate::models::{Route, Session, ShipmentSummary};
use crate::services::ApiClient;
use crate::viewmodels::{ShipmentViewModel, TruckForm};

#[derive(Properties, PartialEq)]
pub struct AssignTruckProps {
    pub session: Session,
    pub shipment_id: AttrValue,
}

#[function_component(AssignTruck)]
pub fn assign_truck(props: &AssignTruckProps) -> Html {
    let ctx = use_session_context();
    let report = ctx.as_ref().map(|c| c.report.clone()).unwrap_or_default();
    let navigate = ctx.as_ref().map(|c| c.navigate.clone()).unwrap_or_default();
    let toaster = use_toaster();

    let truck_number_ref = use_node_ref();
    let driver_name_ref = use_node_ref();
    let driver_mobile_ref = use_node_ref();
    let submitting = use_state(|| false);
    let result = use_state(|| None::<ShipmentSummary>);

    let on_submit = {
        let truck_number_ref = truck_number_ref.clone();
        let driver_name_ref = driver_name_ref.clone();
        let driver_mobile_ref = driver_mobile_ref.clone();
        let session = props.session.clone();
        let shipment_id = props.shipment_id.to_string();
        let submitting = submitting.clone();
        let result = result.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            let value = |node: &NodeRef| {
                node.cast::<HtmlInputElement>()
                    .map(|input| input.value())
                    .unwrap_or_default()
            };
            let form = TruckForm {
                truck_number: value(&truck_number_ref),
                driver_name: value(&driver_name_ref),
                driver_mobile: value(&driver_mobile_ref),
            };

            submitting.set(true);
            let session = session.clone();
            let shipment_id = shipment_id.clone();
            let submitting = submitting.clone();
            let result = result.clone();
            let report = report.clone();
            let toaster = toaster.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let vm = ShipmentViewModel::new(ApiClient::new());
                match vm.assign_truck(&session, &shipment_id, &form).await {
                    Ok(summary) => {
                        toaster.success(format!("Truck assigned to {}", summary.shipment_number));
                        result.set(Some(summary));
                    }
                    Err(e) => report.emit(e),
                }
                submitting.set(false);
            });
        })
    };

    let on_done = navigate.reform(|_| Route::MunshiShipments);

    html! {
        <div class="form-screen">
            <h1 class="form-title">{"Assign Truck"}</h1>
            <form class="shipment-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="truck-number">{"Truck Number"}</label>
                    <input id="truck-number" type="text" placeholder="Enter truck number" ref={truck_number_ref} required=true />
                </div>
                <div class="form-group">
                    <label for="driver-name">{"Driver Name"}</label>
                    <input id="driver-name" type="text" placeholder="Enter driver name" ref={driver_name_ref} required=true />
                </div>
                <div class="form-group">
                    <label for="driver-mobile">{"Driver Mobile Number"}</label>
                    <input id="driver-mobile" type="tel" placeholder="Enter mobile number" ref={driver_mobile_ref} required=true />
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
