pub mod use_session;
pub mod use_shipment_list;
pub mod use_toast;

pub use use_session::{use_session, use_session_context, UseSessionHandle};
pub use use_shipment_list::{use_shipment_list, UseShipmentListHandle};
pub use use_toast::{use_toast, use_toaster, ToastKind, ToastMessage, Toaster, UseToastHandle};
