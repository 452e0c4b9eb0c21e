// ============================================================================
// USE SHIPMENT LIST - Paged list with debounced search and infinite scroll
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::Element;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::error::AppError;
use crate::models::Session;
use crate::services::ApiClient;
use crate::state::{near_end, ApplyOutcome, PageTicket, PagedListState};
use crate::viewmodels::ShipmentListViewModel;

type ListViewModel = ShipmentListViewModel<ApiClient>;

pub struct UseShipmentListHandle {
    pub state: PagedListState,
    /// Text currently in the search box (the list follows after the debounce)
    pub search_text: String,
    pub on_search: Callback<String>,
    pub on_scroll: Callback<Event>,
    pub load_more: Callback<()>,
    pub refresh: Callback<()>,
}

fn spawn_run(
    vm: Rc<ListViewModel>,
    session: Session,
    ticket: PageTicket,
    update: UseForceUpdateHandle,
    on_error: Callback<AppError>,
) {
    update.force_update();
    wasm_bindgen_futures::spawn_local(async move {
        let outcome = vm.run(&session, ticket).await;
        match outcome {
            ApplyOutcome::Failed(err) => {
                update.force_update();
                on_error.emit(err);
            }
            ApplyOutcome::Applied => update.force_update(),
            ApplyOutcome::Stale => {}
        }
    });
}

/// `on_error` receives every failed page; the caller toasts or signs out
#[hook]
pub fn use_shipment_list(session: Session, on_error: Callback<AppError>) -> UseShipmentListHandle {
    let vm: Rc<ListViewModel> = use_memo((), |_| {
        ShipmentListViewModel::new(ApiClient::new(), CONFIG.list_config.page_size)
    });
    let update = use_force_update();
    let search_text = use_state(String::new);
    let debounce: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);

    // First page on mount, and again if the user changes
    {
        let vm = vm.clone();
        let update = update.clone();
        let on_error = on_error.clone();
        let session = session.clone();
        use_effect_with(session.user_id.clone(), move |_| {
            let ticket = vm.begin_first_page("", false);
            spawn_run(vm, session, ticket, update, on_error);
            || ()
        });
    }

    let on_search = {
        let vm = vm.clone();
        let update = update.clone();
        let on_error = on_error.clone();
        let session = session.clone();
        let search_text = search_text.clone();
        Callback::from(move |query: String| {
            search_text.set(query.clone());
            let vm = vm.clone();
            let update = update.clone();
            let on_error = on_error.clone();
            let session = session.clone();
            // Dropping the previous Timeout cancels it
            *debounce.borrow_mut() = Some(Timeout::new(
                CONFIG.list_config.search_debounce_ms,
                move || {
                    log::info!("🔍 Search: '{}'", query);
                    let ticket = vm.begin_first_page(query.trim(), false);
                    spawn_run(vm, session, ticket, update, on_error);
                },
            ));
        })
    };

    let load_more = {
        let vm = vm.clone();
        let update = update.clone();
        let on_error = on_error.clone();
        let session = session.clone();
        Callback::from(move |_| {
            if let Some(ticket) = vm.begin_load_more() {
                spawn_run(vm.clone(), session.clone(), ticket, update.clone(), on_error.clone());
            }
        })
    };

    let on_scroll = {
        let vm = vm.clone();
        let load_more = load_more.clone();
        Callback::from(move |e: Event| {
            let list: Element = e.target_unchecked_into();
            let at_end = near_end(
                f64::from(list.scroll_top()),
                f64::from(list.client_height()),
                f64::from(list.scroll_height()),
                CONFIG.list_config.scroll_threshold,
            );
            if at_end && vm.state().borrow().can_load_more() {
                load_more.emit(());
            }
        })
    };

    let refresh = {
        let vm = vm.clone();
        let update = update.clone();
        Callback::from(move |_| {
            let search = vm.snapshot().search_query;
            let ticket = vm.begin_first_page(&search, true);
            spawn_run(vm.clone(), session.clone(), ticket, update.clone(), on_error.clone());
        })
    };

    UseShipmentListHandle {
        state: vm.snapshot(),
        search_text: (*search_text).clone(),
        on_search,
        on_scroll,
        load_more,
        refresh,
    }
}
