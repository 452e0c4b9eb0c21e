pub mod app;
pub mod assign_transport;
pub mod assign_truck;
pub mod create_shipment;
pub mod drawer;
pub mod gate_status;
pub mod login_screen;
pub mod result_modal;
pub mod shipment_card;
pub mod shipment_details;
pub mod shipment_list;
pub mod toast;

pub use app::App;
pub use assign_transport::AssignTransport;
pub use assign_truck::AssignTruck;
pub use create_shipment::CreateShipment;
pub use drawer::Drawer;
pub use gate_status::GateStatusToggle;
pub use login_screen::LoginScreen;
pub use result_modal::ResultModal;
pub use shipment_card::ShipmentCard;
pub use shipment_details::ShipmentDetails;
pub use shipment_list::{ListMode, ShipmentList};
pub use toast::Toast;
