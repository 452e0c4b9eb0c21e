// ============================================================================
// API CLIENT - HTTP only (stateless)
// ============================================================================
// No business rules here. Every call maps one backend endpoint; the caller
// passes the session token explicitly.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::CONFIG;
use crate::error::AppError;
use crate::models::{
    ApiErrorBody, AssignShipmentRequest, CompaniesResponse, Company, CreateShipmentRequest,
    CreateTruckRequest, LoginRequest, LoginResponse, ShipmentListRequest, ShipmentListResponse,
    ShipmentNumberResponse, ShipmentSummary, ShipmentSummaryResponse, TruckType,
    TruckTypesResponse,
};
use crate::utils::constants::DEFAULT_REQUEST_ERROR;

/// Backend operations used by the screens
#[allow(async_fn_in_trait)]
pub trait ShipmentApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AppError>;

    async fn logout(&self, token: &str) -> Result<(), AppError>;

    async fn list_shipments(
        &self,
        token: &str,
        request: &ShipmentListRequest,
    ) -> Result<ShipmentListResponse, AppError>;

    /// Names of the truck categories the backend knows
    async fn get_truck_types(&self, token: &str) -> Result<Vec<TruckType>, AppError>;

    /// Reserves the number shown on the create form
    async fn create_shipment_number(&self, token: &str) -> Result<String, AppError>;

    async fn create_shipment(
        &self,
        token: &str,
        request: &CreateShipmentRequest,
    ) -> Result<ShipmentSummary, AppError>;

    async fn get_companies(&self, token: &str) -> Result<Vec<Company>, AppError>;

    async fn assign_shipment(
        &self,
        token: &str,
        request: &AssignShipmentRequest,
    ) -> Result<ShipmentSummary, AppError>;

    async fn create_truck(
        &self,
        token: &str,
        request: &CreateTruckRequest,
    ) -> Result<ShipmentSummary, AppError>;
}

/// gloo-net implementation
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(CONFIG.backend_url())
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn get(&self, path: &str, token: Option<&str>) -> RequestBuilder {
        with_headers(Request::get(&self.url(path)), token)
    }

    fn post(&self, path: &str, token: Option<&str>) -> RequestBuilder {
        with_headers(Request::post(&self.url(path)), token)
    }

    async fn post_json<B, T>(&self, path: &str, token: Option<&str>, body: &B) -> Result<T, AppError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let request = self.post(path, token).json(body)?;
        let text = execute(request).await?;
        Ok(serde_json::from_str(&text)?)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

fn with_headers(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    let builder = builder.header("Content-Type", "application/json");
    match token {
        // Raw token, no "Bearer " prefix
        Some(token) => builder.header("authorization", token),
        None => builder,
    }
}

/// Sends the request and returns the body text of a 2xx response
async fn execute(request: Request) -> Result<String, AppError> {
    let url = request.url();
    let response = request.send().await?;
    let status = response.status();
    let text = response.text().await.unwrap_or_default();

    if !response.ok() {
        let message = error_message_from_body(&text);
        log::error!("❌ {} -> HTTP {}: {}", url, status, message);
        return Err(AppError::Http { status, message });
    }

    Ok(text)
}

/// Server-provided `message`, or the generic fallback
pub fn error_message_from_body(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_REQUEST_ERROR.to_string())
}

impl ShipmentApi for ApiClient {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AppError> {
        log::info!("🔐 Login for {}", request.email_or_username);
        self.post_json("/mobile/login", None, request).await
    }

    async fn logout(&self, token: &str) -> Result<(), AppError> {
        let request = self.post("/mobile/logout", Some(token)).build()?;
        execute(request).await?;
        log::info!("👋 Logged out on server");
        Ok(())
    }

    async fn list_shipments(
        &self,
        token: &str,
        request: &ShipmentListRequest,
    ) -> Result<ShipmentListResponse, AppError> {
        log::info!(
            "📦 Fetching shipments page {} (search: '{}')",
            request.page_no,
            request.search
        );
        let page: ShipmentListResponse = self
            .post_json("/shipment/getallshipment", Some(token), request)
            .await?;
        log::info!(
            "✅ {} shipments (has_next: {:?}, total_pages: {:?})",
            page.shipments.len(),
            page.has_next,
            page.total_pages
        );
        Ok(page)
    }

    async fn get_truck_types(&self, token: &str) -> Result<Vec<TruckType>, AppError> {
        let request = self.get("/shipment/getalltrucktype", Some(token)).build()?;
        let text = execute(request).await?;
        let types = serde_json::from_str::<TruckTypesResponse>(&text)?.into_types();
        log::info!("✅ {} truck types", types.len());
        Ok(types)
    }

    async fn create_shipment_number(&self, token: &str) -> Result<String, AppError> {
        let request = self.post("/shipment/createshipmentnumber", Some(token)).build()?;
        let text = execute(request).await?;
        let response: ShipmentNumberResponse = serde_json::from_str(&text)?;
        log::info!("🔢 Reserved shipment number {}", response.shipment_number);
        Ok(response.shipment_number)
    }

    async fn create_shipment(
        &self,
        token: &str,
        request: &CreateShipmentRequest,
    ) -> Result<ShipmentSummary, AppError> {
        let response: ShipmentSummaryResponse = self
            .post_json("/shipment/createshipment", Some(token), request)
            .await?;
        Ok(response.shipment)
    }

    async fn get_companies(&self, token: &str) -> Result<Vec<Company>, AppError> {
        let request = self.get("/api/company", Some(token)).build()?;
        let text = execute(request).await?;
        let response: CompaniesResponse = serde_json::from_str(&text)?;
        log::info!("✅ {} transport companies", response.companies.len());
        Ok(response.companies)
    }

    async fn assign_shipment(
        &self,
        token: &str,
        request: &AssignShipmentRequest,
    ) -> Result<ShipmentSummary, AppError> {
        let response: ShipmentSummaryResponse = self
            .post_json("/shipment/assignshipment", Some(token), request)
            .await?;
        Ok(response.shipment)
    }

    async fn create_truck(
        &self,
        token: &str,
        request: &CreateTruckRequest,
    ) -> Result<ShipmentSummary, AppError> {
        let response: ShipmentSummaryResponse = self
            .post_json("/shipment/createtruck", Some(token), request)
            .await?;
        Ok(response.shipment)
    }
}
