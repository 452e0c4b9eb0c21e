pub mod auth;
pub mod company;
pub mod route;
pub mod session;
pub mod shipment;

pub use auth::{ApiErrorBody, DeviceInfo, LoginRequest, LoginResponse};
pub use company::{CompaniesResponse, Company};
pub use route::Route;
pub use session::{Role, Session};
pub use shipment::{
    AssignShipmentRequest, CreateShipmentRequest, CreateTruckRequest, GateStatus, Shipment,
    ShipmentListRequest, ShipmentListResponse, ShipmentStatus, ShipmentSummary,
    ShipmentNumberResponse, ShipmentSummaryResponse, TruckType, TruckTypesResponse,
};
