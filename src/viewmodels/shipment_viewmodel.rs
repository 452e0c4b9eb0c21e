// ============================================================================
// SHIPMENT VIEWMODEL - Create / assign workflows
// ============================================================================

use std::collections::HashMap;

use crate::error::AppError;
use crate::models::{
    AssignShipmentRequest, Company, CreateShipmentRequest, CreateTruckRequest, GateStatus,
    Session, Shipment, ShipmentStatus, ShipmentSummary,
};
use crate::models::shipment::TRUCK_TYPES;
use crate::services::api_client::ShipmentApi;

/// Driver and truck entered by the Munshi
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TruckForm {
    pub truck_number: String,
    pub driver_name: String,
    pub driver_mobile: String,
}

pub struct ShipmentViewModel<A> {
    api: A,
}

impl<A: ShipmentApi> ShipmentViewModel<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Truck type names for the create form. The fixed list stands in when
    /// the backend knows none.
    pub async fn truck_type_options(&self, session: &Session) -> Result<Vec<String>, AppError> {
        let names: Vec<String> = self
            .api
            .get_truck_types(&session.auth_token)
            .await?
            .into_iter()
            .map(|t| t.name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();

        if names.is_empty() {
            log::warn!("⚠️ No truck types from server, using defaults");
            return Ok(fallback_truck_types());
        }
        Ok(names)
    }

    pub async fn reserve_shipment_number(&self, session: &Session) -> Result<String, AppError> {
        self.api.create_shipment_number(&session.auth_token).await
    }

    /// `shipment_number` is the reserved number, if one could be reserved;
    /// otherwise the backend assigns it.
    pub async fn create_shipment(
        &self,
        session: &Session,
        shipment_number: Option<&str>,
        truck_type: &str,
        destination_city: &str,
    ) -> Result<ShipmentSummary, AppError> {
        let truck_type = required(truck_type, "Truck type is required")?;
        let destination_city = required(destination_city, "Destination city is required")?;

        let request = CreateShipmentRequest {
            shipment_number: shipment_number
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .map(str::to_string),
            truck_type,
            destination_city,
            shipment_status: ShipmentStatus::PLANNED.to_string(),
            created_by: session.user_id.clone(),
        };
        let summary = self.api.create_shipment(&session.auth_token, &request).await?;
        log::info!("✅ Shipment {} created", summary.shipment_number);
        Ok(summary)
    }

    pub async fn load_companies(&self, session: &Session) -> Result<Vec<Company>, AppError> {
        self.api.get_companies(&session.auth_token).await
    }

    pub async fn assign_transport(
        &self,
        session: &Session,
        shipment_id: &str,
        company_id: &str,
    ) -> Result<ShipmentSummary, AppError> {
        let request = AssignShipmentRequest {
            company_id: required(company_id, "Transport company is required")?,
            shipment_id: required(shipment_id, "Shipment is required")?,
        };
        let summary = self.api.assign_shipment(&session.auth_token, &request).await?;
        log::info!(
            "✅ Shipment {} assigned to company {}",
            summary.shipment_number,
            request.company_id
        );
        Ok(summary)
    }

    /// Assigns driver and truck; `created_by` is the signed-in Munshi
    pub async fn assign_truck(
        &self,
        session: &Session,
        shipment_id: &str,
        form: &TruckForm,
    ) -> Result<ShipmentSummary, AppError> {
        let request = CreateTruckRequest {
            truck_number: required(&form.truck_number, "Truck number is required")?,
            driver_name: required(&form.driver_name, "Driver name is required")?,
            mobile_number: required(&form.driver_mobile, "Driver mobile number is required")?,
            created_by: session.user_id.clone(),
            shipment_id: required(shipment_id, "Shipment is required")?,
        };
        let summary = self.api.create_truck(&session.auth_token, &request).await?;
        log::info!("🚚 Truck {} assigned to {}", request.truck_number, summary.shipment_number);
        Ok(summary)
    }
}

pub fn fallback_truck_types() -> Vec<String> {
    TRUCK_TYPES.iter().map(|t| t.to_string()).collect()
}

fn required(value: &str, message: &str) -> Result<String, AppError> {
    let value = value.trim();
    if value.is_empty() {
        Err(AppError::Validation(message.to_string()))
    } else {
        Ok(value.to_string())
    }
}

/// Gate positions chosen by the guard during this session.
///
/// There is no backend endpoint for gate status; choices live here and are
/// echoed onto the list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GateCheckpoint {
    overrides: HashMap<String, GateStatus>,
}

impl GateCheckpoint {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status_for(&self, shipment: &Shipment) -> GateStatus {
        self.overrides
            .get(&shipment.id)
            .copied()
            .unwrap_or_else(|| GateStatus::from_status(&shipment.shipment_status))
    }

    /// Records `status` for the shipment and returns the summary to show
    pub fn confirm(&mut self, shipment: &Shipment, status: GateStatus) -> ShipmentSummary {
        self.overrides.insert(shipment.id.clone(), status);
        log::info!("🚧 {} marked {}", shipment.shipment_number, status.label());
        ShipmentSummary {
            shipment_number: shipment.shipment_number.clone(),
            shipment_status: ShipmentStatus::new(status.label()),
        }
    }

    /// Shipment as it should be displayed, with any local gate choice applied
    pub fn echo(&self, shipment: &Shipment) -> Shipment {
        let mut shown = shipment.clone();
        if let Some(status) = self.overrides.get(&shipment.id) {
            shown.shipment_status = ShipmentStatus::new(status.label());
        }
        shown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use crate::services::fake_api::{shipment, summary, truck_type, FakeApi};

    fn session() -> Session {
        Session {
            auth_token: "tok".into(),
            role: Role::Munshi,
            role_slug: "Munshi".into(),
            user_id: "munshi-1".into(),
            expires_at: i64::MAX,
        }
    }

    #[tokio::test]
    async fn assign_truck_sends_creator_and_shipment() {
        let api = FakeApi::new();
        *api.summary.borrow_mut() = Some(Ok(summary("SHP-9", "loaded")));
        let vm = ShipmentViewModel::new(api);
        let form = TruckForm {
            truck_number: " MH12AB1234 ".into(),
            driver_name: "Ravi".into(),
            driver_mobile: "9876543210".into(),
        };

        let result = vm.assign_truck(&session(), "s1", &form).await.unwrap();

        assert_eq!(result, summary("SHP-9", "loaded"));
        let sent = vm.api.truck_requests.borrow();
        assert_eq!(sent[0].created_by, "munshi-1");
        assert_eq!(sent[0].shipment_id, "s1");
        assert_eq!(sent[0].truck_number, "MH12AB1234");
    }

    #[tokio::test]
    async fn missing_fields_never_reach_the_backend() {
        let vm = ShipmentViewModel::new(FakeApi::new());
        let err = vm
            .assign_truck(&session(), "s1", &TruckForm::default())
            .await
            .unwrap_err();
        assert_eq!(err, AppError::Validation("Truck number is required".into()));

        let err = vm.assign_transport(&session(), "s1", "").await.unwrap_err();
        assert_eq!(err.user_message(), "Transport company is required");

        let err = vm.create_shipment(&session(), None, "Small", " ").await.unwrap_err();
        assert_eq!(err.user_message(), "Destination city is required");
        assert_eq!(vm.api.call_count(), 0);
    }

    #[tokio::test]
    async fn assign_transport_and_create() {
        let vm = ShipmentViewModel::new(FakeApi::new());
        vm.assign_transport(&session(), "s1", "c1").await.unwrap();
        vm.create_shipment(&session(), Some(" SHP-42 "), "Medium", "Chicago").await.unwrap();

        let assign = vm.api.assign_requests.borrow();
        assert_eq!((assign[0].company_id.as_str(), assign[0].shipment_id.as_str()), ("c1", "s1"));
        let create = vm.api.create_requests.borrow();
        assert_eq!(create[0].shipment_status, "Planned");
        assert_eq!(create[0].created_by, "munshi-1");
        assert_eq!(create[0].shipment_number.as_deref(), Some("SHP-42"));
    }

    #[tokio::test]
    async fn create_form_options_come_from_the_backend() {
        let api = FakeApi::new();
        *api.truck_types.borrow_mut() = Some(Ok(vec![truck_type("Trailer"), truck_type(" ")]));
        *api.shipment_number.borrow_mut() = Some(Ok("SHP-2001".into()));
        let vm = ShipmentViewModel::new(api);

        assert_eq!(vm.truck_type_options(&session()).await.unwrap(), vec!["Trailer"]);
        assert_eq!(vm.reserve_shipment_number(&session()).await.unwrap(), "SHP-2001");
    }

    #[tokio::test]
    async fn empty_truck_type_list_falls_back_to_defaults() {
        let vm = ShipmentViewModel::new(FakeApi::new());
        assert_eq!(
            vm.truck_type_options(&session()).await.unwrap(),
            vec!["Small", "Medium", "Large"]
        );
    }

    #[tokio::test]
    async fn backend_error_propagates() {
        let api = FakeApi::new();
        *api.summary.borrow_mut() = Some(Err(AppError::Http {
            status: 409,
            message: "Shipment already assigned".into(),
        }));
        let vm = ShipmentViewModel::new(api);
        let err = vm.assign_transport(&session(), "s1", "c1").await.unwrap_err();
        assert_eq!(err.user_message(), "Shipment already assigned");
    }

    #[test]
    fn gate_choice_is_echoed_locally() {
        let mut gate = GateCheckpoint::new();
        let row = shipment("s1", "Gate-In");
        assert_eq!(gate.status_for(&row), GateStatus::GateIn);

        let shown = gate.confirm(&row, GateStatus::GateOut);
        assert_eq!(shown.shipment_status.as_str(), "Gate Out");
        assert_eq!(gate.status_for(&row), GateStatus::GateOut);
        assert!(gate.echo(&row).shipment_status.is_gate_out());

        let other = shipment("s2", "Planned");
        assert_eq!(gate.echo(&other), other);
    }
}
