// ============================================================================
// LIST STATE - Cumulative paged shipment list
// ============================================================================
// Every request gets a ticket with a sequence number. Only the answer to the
// most recently issued ticket is applied; older answers are dropped.
// ============================================================================

use crate::error::AppError;
use crate::models::shipment::{Shipment, ShipmentListResponse};

/// Identifies one in-flight page request
#[derive(Debug, Clone, PartialEq)]
pub struct PageTicket {
    pub seq: u64,
    pub page: u32,
    pub search: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApplyOutcome {
    Applied,
    /// A newer request was issued after this one
    Stale,
    Failed(AppError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PagedListState {
    pub items: Vec<Shipment>,
    /// Last page successfully applied
    pub page: u32,
    pub has_more: bool,
    pub total_pages: u32,
    pub search_query: String,
    pub loading: bool,
    pub refreshing: bool,
    pub last_error: Option<AppError>,
    seq: u64,
    in_flight: Option<u64>,
}

impl Default for PagedListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            has_more: true,
            total_pages: 1,
            search_query: String::new(),
            loading: false,
            refreshing: false,
            last_error: None,
            seq: 0,
            in_flight: None,
        }
    }
}

impl PagedListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a ticket for `page`. Supersedes whatever is in flight.
    pub fn begin(&mut self, page: u32, search: &str, refreshing: bool) -> PageTicket {
        let page = page.max(1);
        self.seq += 1;
        self.in_flight = Some(self.seq);
        self.loading = true;
        self.refreshing = refreshing;
        if page == 1 {
            self.search_query = search.to_string();
        }
        PageTicket {
            seq: self.seq,
            page,
            search: search.to_string(),
        }
    }

    /// Whether a load-more request may start now
    pub fn can_load_more(&self) -> bool {
        !self.loading && self.has_more && self.page < self.total_pages
    }

    /// Ticket for the next page, or `None` when load-more is refused
    pub fn begin_load_more(&mut self) -> Option<PageTicket> {
        if !self.can_load_more() {
            return None;
        }
        let next = self.page + 1;
        let search = self.search_query.clone();
        Some(self.begin(next, &search, false))
    }

    pub fn is_latest(&self, ticket: &PageTicket) -> bool {
        self.in_flight == Some(ticket.seq)
    }

    /// Folds a response into the list.
    ///
    /// Page 1 replaces, later pages append. A failed page 1 empties the list;
    /// a failed later page leaves it untouched.
    pub fn apply(
        &mut self,
        ticket: &PageTicket,
        result: Result<ShipmentListResponse, AppError>,
    ) -> ApplyOutcome {
        if !self.is_latest(ticket) {
            return ApplyOutcome::Stale;
        }
        self.in_flight = None;
        self.loading = false;
        self.refreshing = false;

        match result {
            Ok(response) => {
                let total_pages = response.total_pages.unwrap_or(ticket.page);
                let has_more = response
                    .has_next
                    .unwrap_or(ticket.page < total_pages);

                if ticket.page == 1 {
                    self.items = response.shipments;
                } else {
                    self.items.extend(response.shipments);
                }
                self.page = ticket.page;
                self.total_pages = total_pages;
                self.has_more = has_more;
                self.last_error = None;
                ApplyOutcome::Applied
            }
            Err(err) => {
                if ticket.page == 1 {
                    self.items.clear();
                    self.page = 1;
                    self.has_more = false;
                    self.total_pages = 1;
                }
                self.last_error = Some(err.clone());
                ApplyOutcome::Failed(err)
            }
        }
    }
}

/// True when the viewport is within `threshold` visible-heights of the end
pub fn near_end(scroll_top: f64, client_height: f64, scroll_height: f64, threshold: f64) -> bool {
    if scroll_height <= 0.0 || client_height <= 0.0 {
        return false;
    }
    let remaining = scroll_height - (scroll_top + client_height);
    remaining <= client_height * threshold
}
