use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::{GateStatusToggle, ResultModal, ShipmentCard, ShipmentDetails};
use crate::hooks::{use_session_context, use_shipment_list};
use crate::models::{GateStatus, Route, Session, Shipment, ShipmentSummary};
use crate::state::PagedListState;
use crate::viewmodels::GateCheckpoint;

/// What the list is for; decides the filter and the sheet's action
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListMode {
    /// Logistics overview with the create button
    Overview,
    /// Logistics picking a `new` shipment to hand to a transport company
    AssignTransport,
    /// Munshi picking a shipment to put a truck on
    AssignTruck,
    /// Security guard toggling gate status
    Gate,
}

impl ListMode {
    pub fn for_route(route: &Route) -> Option<ListMode> {
        match route {
            Route::ShipmentList => Some(ListMode::Overview),
            Route::AssignShipmentList => Some(ListMode::AssignTransport),
            Route::MunshiShipments => Some(ListMode::AssignTruck),
            Route::SecurityShipments => Some(ListMode::Gate),
            _ => None,
        }
    }

    fn shows(&self, shipment: &Shipment) -> bool {
        match self {
            ListMode::AssignTransport => shipment.shipment_status.is_new(),
            _ => true,
        }
    }

    fn action(&self, shipment: &Shipment) -> Option<(&'static str, Route)> {
        let shipment_id = shipment.id.clone();
        match self {
            ListMode::AssignTransport => Some(("Assign Shipment", Route::AssignTransport { shipment_id })),
            ListMode::AssignTruck => Some(("Assign Truck", Route::AssignTruck { shipment_id })),
            ListMode::Overview | ListMode::Gate => None,
        }
    }
}

/// The empty message waits until no further page can arrive; a filtered
/// page may hold no visible rows while later pages still do.
fn shows_empty_text(visible: usize, state: &PagedListState) -> bool {
    visible == 0 && !state.loading && !state.can_load_more()
}

#[derive(Properties, PartialEq)]
pub struct ShipmentListProps {
    pub session: Session,
    pub mode: ListMode,
}

#[function_component(ShipmentList)]
pub fn shipment_list(props: &ShipmentListProps) -> Html {
    let ctx = use_session_context();
    let report = ctx.as_ref().map(|c| c.report.clone()).unwrap_or_default();
    let navigate = ctx.as_ref().map(|c| c.navigate.clone()).unwrap_or_default();

    let list = use_shipment_list(props.session.clone(), report);
    let selected = use_state(|| None::<Shipment>);
    let gate = use_mut_ref(GateCheckpoint::new);
    let result = use_state(|| None::<ShipmentSummary>);

    let on_search_input = {
        let on_search = list.on_search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_search.emit(input.value());
        })
    };

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |shipment: Shipment| selected.set(Some(shipment)))
    };

    let on_close = {
        let selected = selected.clone();
        Callback::from(move |_| selected.set(None))
    };

    let on_gate_confirm = {
        let selected = selected.clone();
        let result = result.clone();
        let gate = gate.clone();
        Callback::from(move |status: GateStatus| {
            if let Some(shipment) = (*selected).clone() {
                let summary = gate.borrow_mut().confirm(&shipment, status);
                selected.set(None);
                result.set(Some(summary));
            }
        })
    };

    let on_result_done = {
        let result = result.clone();
        Callback::from(move |_| result.set(None))
    };

    let mode = props.mode;
    let visible: Vec<Shipment> = list
        .state
        .items
        .iter()
        .filter(|s| mode.shows(s))
        .map(|s| gate.borrow().echo(s))
        .collect();

    let details = (*selected).clone().map(|shipment| {
        let action = mode.action(&shipment);
        let on_action = {
            let navigate = navigate.clone();
            let route = action.as_ref().map(|(_, r)| r.clone());
            Callback::from(move |_: Shipment| {
                if let Some(route) = route.clone() {
                    navigate.emit(route);
                }
            })
        };
        let shown = gate.borrow().echo(&shipment);
        let initial = gate.borrow().status_for(&shipment);
        html! {
            <ShipmentDetails
                shipment={shown}
                on_close={on_close.clone()}
                action_label={action.map(|(label, _)| AttrValue::from(label))}
                {on_action}
            >
                if mode == ListMode::Gate {
                    <GateStatusToggle {initial} on_confirm={on_gate_confirm.clone()} />
                }
            </ShipmentDetails>
        }
    });

    let show_empty = shows_empty_text(visible.len(), &list.state);
    let show_spinner = list.state.loading && !list.state.refreshing;

    html! {
        <div class="shipment-screen">
            <div class="search-bar">
                <input
                    type="search"
                    placeholder="Search shipments"
                    value={list.search_text.clone()}
                    oninput={on_search_input}
                />
                <button class="btn-refresh" disabled={list.state.loading} onclick={list.refresh.reform(|_| ())}>
                    { if list.state.refreshing { "…" } else { "⟳" } }
                </button>
            </div>

            <div class="shipment-list" onscroll={list.on_scroll.clone()}>
                { for visible.into_iter().map(|shipment| {
                    let is_selected = selected.as_ref().map(|s| s.id == shipment.id).unwrap_or(false);
                    let key = shipment.id.clone();
                    html! {
                        <ShipmentCard key={key} {shipment} on_select={on_select.clone()} {is_selected} />
                    }
                })}

                if show_empty {
                    <div class="empty-container">
                        <p class="empty-text">{"No shipments found"}</p>
                    </div>
                }
                if show_spinner {
                    <div class="list-footer"><div class="spinner"></div></div>
                }
                if list.state.can_load_more() {
                    <button class="btn-load-more" onclick={list.load_more.reform(|_| ())}>{"Load more"}</button>
                }
            </div>

            if mode == ListMode::Overview {
                <button class="btn-create-shipment" onclick={navigate.reform(|_| Route::CreateShipment)}>
                    {"+ Create Shipment"}
                </button>
            }

            { details.unwrap_or_default() }

            if let Some(summary) = (*result).clone() {
                <ResultModal {summary} on_done={on_result_done} />
            }
        </div>
    }
}
