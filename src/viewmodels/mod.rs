pub mod session_guard;
pub mod shipment_list_viewmodel;
pub mod shipment_viewmodel;

pub use session_guard::{GuardDecision, RouteDecision, SessionGuard};
pub use shipment_list_viewmodel::ShipmentListViewModel;
pub use shipment_viewmodel::{fallback_truck_types, GateCheckpoint, ShipmentViewModel, TruckForm};
