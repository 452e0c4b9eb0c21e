// ============================================================================
// SHIPMENT LIST VIEWMODEL - Paged fetch on top of PagedListState
// ============================================================================
// Returns outcomes; the hook decides what to render and which toast to show.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{Session, ShipmentListRequest};
use crate::services::api_client::ShipmentApi;
use crate::state::{ApplyOutcome, PageTicket, PagedListState};
use crate::utils::constants::LIST_ORDER;

pub struct ShipmentListViewModel<A> {
    api: A,
    state: Rc<RefCell<PagedListState>>,
    page_size: u32,
}

impl<A: ShipmentApi> ShipmentListViewModel<A> {
    pub fn new(api: A, page_size: u32) -> Self {
        Self {
            api,
            state: Rc::new(RefCell::new(PagedListState::new())),
            page_size: page_size.max(1),
        }
    }

    pub fn snapshot(&self) -> PagedListState {
        self.state.borrow().clone()
    }

    pub fn state(&self) -> Rc<RefCell<PagedListState>> {
        self.state.clone()
    }

    /// Ticket for page 1 with `search`
    pub fn begin_first_page(&self, search: &str, refreshing: bool) -> PageTicket {
        self.state.borrow_mut().begin(1, search, refreshing)
    }

    pub fn begin_load_more(&self) -> Option<PageTicket> {
        self.state.borrow_mut().begin_load_more()
    }

    fn request_for(&self, session: &Session, ticket: &PageTicket) -> ShipmentListRequest {
        ShipmentListRequest {
            page_size: self.page_size,
            page_no: ticket.page,
            search: ticket.search.clone(),
            order: LIST_ORDER.to_string(),
            slug: session.role_slug.clone(),
            userid: session.user_id.clone(),
        }
    }

    /// Performs the request for `ticket` and folds the answer into the list
    pub async fn run(&self, session: &Session, ticket: PageTicket) -> ApplyOutcome {
        let request = self.request_for(session, &ticket);
        let result = self.api.list_shipments(&session.auth_token, &request).await;

        if let Err(e) = &result {
            log::error!("❌ Shipments page {} failed: {}", ticket.page, e);
        }
        let outcome = self.state.borrow_mut().apply(&ticket, result);
        if outcome == ApplyOutcome::Stale {
            log::info!("🔁 Dropped stale page {} (seq {})", ticket.page, ticket.seq);
        }
        outcome
    }
}
