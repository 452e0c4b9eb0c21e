use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::components::ResultModal;
use crate::hooks::{use_session_context, use_toaster};
use crate::models::{Company, Route, Session, ShipmentSummary};
use crate::services::ApiClient;
use crate::viewmodels::ShipmentViewModel;

#[derive(Properties, PartialEq)]
pub struct AssignTransportProps {
    pub session: Session,
    pub shipment_id: AttrValue,
}

/// Hands a `new` shipment to a transport company
#[function_component(AssignTransport)]
pub fn assign_transport(props: &AssignTransportProps) -> Html {
    let ctx = use_session_context();
    let report = ctx.as_ref().map(|c| c.report.clone()).unwrap_or_default();
    let navigate = ctx.as_ref().map(|c| c.navigate.clone()).unwrap_or_default();
    let toaster = use_toaster();

    let companies = use_state(Vec::<Company>::new);
    let companies_loading = use_state(|| true);
    let company_id = use_state(String::new);
    let submitting = use_state(|| false);
    let result = use_state(|| None::<ShipmentSummary>);

    // Load companies on mount
    {
        let companies = companies.clone();
        let companies_loading = companies_loading.clone();
        let session = props.session.clone();
        let report = report.clone();
        use_effect_with(props.shipment_id.clone(), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let vm = ShipmentViewModel::new(ApiClient::new());
                match vm.load_companies(&session).await {
                    Ok(loaded) => companies.set(loaded),
                    Err(e) => report.emit(e),
                }
                companies_loading.set(false);
            });
            || ()
        });
    }

    let on_company = {
        let company_id = company_id.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            company_id.set(select.value());
        })
    };

    let on_submit = {
        let session = props.session.clone();
        let shipment_id = props.shipment_id.to_string();
        let company_id = company_id.clone();
        let submitting = submitting.clone();
        let result = result.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            submitting.set(true);
            let session = session.clone();
            let shipment_id = shipment_id.clone();
            let company_id = (*company_id).clone();
            let submitting = submitting.clone();
            let result = result.clone();
            let report = report.clone();
            let toaster = toaster.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let vm = ShipmentViewModel::new(ApiClient::new());
                match vm.assign_transport(&session, &shipment_id, &company_id).await {
                    Ok(summary) => {
                        toaster.success(format!("Shipment {} assigned", summary.shipment_number));
                        result.set(Some(summary));
                    }
                    Err(e) => report.emit(e),
                }
                submitting.set(false);
            });
        })
    };

    let on_done = navigate.reform(|_| Route::ShipmentList);
    let placeholder = if *companies_loading { "Loading companies..." } else { "Select Transport Company" };

    html! {
        <div class="form-screen">
            <h1 class="form-title">{"Assign Shipment"}</h1>
            <form class="shipment-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="transport-company">{"Transport Company"}</label>
                    <select id="transport-company" onchange={on_company} disabled={*companies_loading}>
                        <option value="" selected={company_id.is_empty()}>{placeholder}</option>
                        { for companies.iter().map(|c| html! {
                            <option value={c.id.clone()} selected={*company_id == c.id}>{c.name.clone()}</option>
                        })}
                    </select>
                </div>
                <button type="submit" class="btn-primary" disabled={*submitting}>
                    { if *submitting { "Submitting..." } else { "Assign" } }
                </button>
            </form>
            if let Some(summary) = (*result).clone() {
                <ResultModal {summary} {on_done} />
            }
        </div>
    }
}
