// In-memory ShipmentApi for unit tests

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::error::AppError;
use crate::models::{
    AssignShipmentRequest, Company, CreateShipmentRequest, CreateTruckRequest, LoginRequest,
    LoginResponse, Shipment, ShipmentListRequest, ShipmentListResponse, ShipmentStatus,
    ShipmentSummary, TruckType,
};
use crate::services::api_client::ShipmentApi;

#[derive(Default)]
pub struct FakeApi {
    pub calls: Cell<usize>,
    pub login_response: RefCell<Option<Result<LoginResponse, AppError>>>,
    pub logout_error: RefCell<Option<AppError>>,
    /// Times the logout call yields to the executor before answering
    pub logout_yields: Cell<usize>,
    /// Keyed by `page_no`; missing pages answer with an empty list
    pub pages: RefCell<HashMap<u32, Result<ShipmentListResponse, AppError>>>,
    pub companies: RefCell<Vec<Company>>,
    pub summary: RefCell<Option<Result<ShipmentSummary, AppError>>>,
    pub truck_types: RefCell<Option<Result<Vec<TruckType>, AppError>>>,
    pub shipment_number: RefCell<Option<Result<String, AppError>>>,

    pub login_requests: RefCell<Vec<LoginRequest>>,
    pub logout_tokens: RefCell<Vec<String>>,
    pub list_requests: RefCell<Vec<ShipmentListRequest>>,
    pub create_requests: RefCell<Vec<CreateShipmentRequest>>,
    pub assign_requests: RefCell<Vec<AssignShipmentRequest>>,
    pub truck_requests: RefCell<Vec<CreateTruckRequest>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(self, page: u32, result: Result<ShipmentListResponse, AppError>) -> Self {
        self.pages.borrow_mut().insert(page, result);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.get()
    }

    fn record(&self) {
        self.calls.set(self.calls.get() + 1);
    }

    fn summary_result(&self) -> Result<ShipmentSummary, AppError> {
        self.summary
            .borrow()
            .clone()
            .unwrap_or_else(|| Ok(summary("SHP-0001", "Assigned")))
    }
}

impl ShipmentApi for FakeApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AppError> {
        self.record();
        self.login_requests.borrow_mut().push(request.clone());
        self.login_response
            .borrow()
            .clone()
            .unwrap_or_else(|| Err(AppError::Network("no scripted login".into())))
    }

    async fn logout(&self, token: &str) -> Result<(), AppError> {
        self.record();
        self.logout_tokens.borrow_mut().push(token.to_string());
        for _ in 0..self.logout_yields.get() {
            tokio::task::yield_now().await;
        }
        match self.logout_error.borrow().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    async fn list_shipments(
        &self,
        _token: &str,
        request: &ShipmentListRequest,
    ) -> Result<ShipmentListResponse, AppError> {
        self.record();
        self.list_requests.borrow_mut().push(request.clone());
        self.pages
            .borrow()
            .get(&request.page_no)
            .cloned()
            .unwrap_or_else(|| Ok(ShipmentListResponse::default()))
    }

    async fn get_truck_types(&self, _token: &str) -> Result<Vec<TruckType>, AppError> {
        self.record();
        self.truck_types.borrow().clone().unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn create_shipment_number(&self, _token: &str) -> Result<String, AppError> {
        self.record();
        self.shipment_number
            .borrow()
            .clone()
            .unwrap_or_else(|| Ok("SHP-0001".to_string()))
    }

    async fn create_shipment(
        &self,
        _token: &str,
        request: &CreateShipmentRequest,
    ) -> Result<ShipmentSummary, AppError> {
        self.record();
        self.create_requests.borrow_mut().push(request.clone());
        self.summary_result()
    }

    async fn get_companies(&self, _token: &str) -> Result<Vec<Company>, AppError> {
        self.record();
        Ok(self.companies.borrow().clone())
    }

    async fn assign_shipment(
        &self,
        _token: &str,
        request: &AssignShipmentRequest,
    ) -> Result<ShipmentSummary, AppError> {
        self.record();
        self.assign_requests.borrow_mut().push(request.clone());
        self.summary_result()
    }

    async fn create_truck(
        &self,
        _token: &str,
        request: &CreateTruckRequest,
    ) -> Result<ShipmentSummary, AppError> {
        self.record();
        self.truck_requests.borrow_mut().push(request.clone());
        self.summary_result()
    }
}

pub fn shipment(id: &str, status: &str) -> Shipment {
    Shipment {
        id: id.to_string(),
        shipment_number: format!("SHP-{}", id),
        shipment_status: ShipmentStatus::new(status),
        truck_type: None,
        destination_city: Some("Chicago".to_string()),
        destination_state: Some("IL".to_string()),
        expected_arrival_date: None,
    }
}

pub fn truck_type(name: &str) -> TruckType {
    TruckType {
        id: format!("tt-{}", name.to_lowercase()),
        name: name.to_string(),
    }
}

pub fn page(ids: &[&str], has_next: bool, total_pages: u32) -> ShipmentListResponse {
    ShipmentListResponse {
        shipments: ids.iter().map(|id| shipment(id, "Planned")).collect(),
        has_next: Some(has_next),
        total_pages: Some(total_pages),
    }
}

pub fn summary(number: &str, status: &str) -> ShipmentSummary {
    ShipmentSummary {
        shipment_number: number.to_string(),
        shipment_status: ShipmentStatus::new(status),
    }
}
