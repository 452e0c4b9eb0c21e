use serde::{Deserialize, Serialize};

/// Shipment status as the backend sends it.
///
/// The vocabulary differs between endpoints (`Gate-In`, `GateIn`, `new`,
/// `Planned`, `planned`), so the raw text is kept and compared in normalised
/// form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShipmentStatus(pub String);

impl ShipmentStatus {
    pub const PLANNED: &'static str = "Planned";

    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercase with spaces, hyphens and underscores removed
    pub fn normalized(&self) -> String {
        normalize(&self.0)
    }

    pub fn matches(&self, other: &str) -> bool {
        self.normalized() == normalize(other)
    }

    pub fn is_new(&self) -> bool {
        self.matches("new")
    }

    pub fn is_gate_in(&self) -> bool {
        self.matches("gatein")
    }

    pub fn is_gate_out(&self) -> bool {
        self.matches("gateout")
    }

    /// CSS modifier for the status badge
    pub fn badge_class(&self) -> &'static str {
        match self.normalized().as_str() {
            "planned" => "status-planned",
            "loaded" | "intransit" => "status-loaded",
            "assigned" | "delivered" => "status-assigned",
            "gatein" => "status-gate-in",
            "gateout" => "status-gate-out",
            "confirmed" => "status-confirmed",
            "new" => "status-new",
            _ => "status-unknown",
        }
    }
}

impl std::fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Truck category, both as embedded in a shipment and as listed by
/// `getalltrucktype`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TruckType {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// `getalltrucktype` answers either with a bare array or wrapped in an object
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TruckTypesResponse {
    List(Vec<TruckType>),
    Wrapped {
        #[serde(alias = "truckTypes", alias = "trucktypes", alias = "data")]
        truck_types: Vec<TruckType>,
    },
}

impl TruckTypesResponse {
    pub fn into_types(self) -> Vec<TruckType> {
        match self {
            TruckTypesResponse::List(types) => types,
            TruckTypesResponse::Wrapped { truck_types } => truck_types,
        }
    }
}

/// Number reserved by `createshipmentnumber`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ShipmentNumberResponse {
    #[serde(alias = "shipmentNumber")]
    pub shipment_number: String,
}

/// One row of the shipment list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub shipment_number: String,
    #[serde(default)]
    pub shipment_status: ShipmentStatus,
    #[serde(rename = "truckTypeId", default)]
    pub truck_type: Option<TruckType>,
    #[serde(default)]
    pub destination_city: Option<String>,
    #[serde(default)]
    pub destination_state: Option<String>,
    #[serde(default)]
    pub expected_arrival_date: Option<String>,
}

impl Shipment {
    pub fn truck_type_name(&self) -> &str {
        self.truck_type
            .as_ref()
            .map(|t| t.name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or("-")
    }

    /// `City, State`, skipping whichever part is missing
    pub fn destination(&self) -> String {
        [self.destination_city.as_deref(), self.destination_state.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.trim().is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Body of `POST /shipment/getallshipment`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShipmentListRequest {
    pub page_size: u32,
    pub page_no: u32,
    pub search: String,
    pub order: String,
    pub slug: String,
    pub userid: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ShipmentListResponse {
    #[serde(default)]
    pub shipments: Vec<Shipment>,
    #[serde(default)]
    pub has_next: Option<bool>,
    #[serde(default)]
    pub total_pages: Option<u32>,
}

/// Number and status echoed back by the create/assign endpoints
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ShipmentSummary {
    #[serde(default)]
    pub shipment_number: String,
    #[serde(default)]
    pub shipment_status: ShipmentStatus,
}

impl From<&Shipment> for ShipmentSummary {
    fn from(shipment: &Shipment) -> Self {
        Self {
            shipment_number: shipment.shipment_number.clone(),
            shipment_status: shipment.shipment_status.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ShipmentSummaryResponse {
    pub shipment: ShipmentSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateShipmentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment_number: Option<String>,
    pub truck_type: String,
    pub destination_city: String,
    pub shipment_status: String,
    pub created_by: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignShipmentRequest {
    #[serde(rename = "companyId")]
    pub company_id: String,
    #[serde(rename = "shipmentId")]
    pub shipment_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateTruckRequest {
    pub driver_name: String,
    pub mobile_number: String,
    pub truck_number: String,
    pub created_by: String,
    #[serde(rename = "shipmentId")]
    pub shipment_id: String,
}

/// Security checkpoint position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateStatus {
    GateIn,
    GateOut,
}

impl GateStatus {
    pub fn toggled(self) -> Self {
        match self {
            GateStatus::GateIn => GateStatus::GateOut,
            GateStatus::GateOut => GateStatus::GateIn,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GateStatus::GateIn => "Gate In",
            GateStatus::GateOut => "Gate Out",
        }
    }

    /// Starting position for a shipment; anything not gated out counts as in
    pub fn from_status(status: &ShipmentStatus) -> Self {
        if status.is_gate_out() {
            GateStatus::GateOut
        } else {
            GateStatus::GateIn
        }
    }
}

/// Offered when the truck type list cannot be loaded or comes back empty
pub const TRUCK_TYPES: [&str; 3] = ["Small", "Medium", "Large"];
pub const DESTINATION_CITIES: [&str; 3] = ["New York", "Los Angeles", "Chicago"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_compares_across_spellings() {
        assert!(ShipmentStatus::new("Gate-In").is_gate_in());
        assert!(ShipmentStatus::new("GateIn").is_gate_in());
        assert!(ShipmentStatus::new("gate in").is_gate_in());
        assert!(ShipmentStatus::new("Gate_Out").is_gate_out());
        assert!(!ShipmentStatus::new("Planned").is_gate_in());
        assert_eq!(ShipmentStatus::new("planned").badge_class(), "status-planned");
        assert_eq!(ShipmentStatus::new("Teleported").badge_class(), "status-unknown");
    }

    #[test]
    fn decodes_backend_shipment() {
        let json = r#"{
            "_id": "66f1",
            "shipment_number": "SHP-1001",
            "shipment_status": "Gate-In",
            "truckTypeId": { "_id": "t1", "name": "Medium" },
            "destination_city": "Chicago",
            "destination_state": "IL",
            "expected_arrival_date": "2025-04-10T14:30:00Z",
            "extra": 1
        }"#;
        let shipment: Shipment = serde_json::from_str(json).unwrap();
        assert_eq!(shipment.id, "66f1");
        assert_eq!(shipment.truck_type_name(), "Medium");
        assert_eq!(shipment.destination(), "Chicago, IL");
        assert_eq!(shipment.shipment_status.as_str(), "Gate-In");
    }

    #[test]
    fn sparse_shipment_still_decodes() {
        let shipment: Shipment = serde_json::from_str(r#"{"_id":"x"}"#).unwrap();
        assert_eq!(shipment.truck_type_name(), "-");
        assert_eq!(shipment.destination(), "");
        assert_eq!(shipment.shipment_status, ShipmentStatus::default());
    }

    #[test]
    fn list_response_fields_are_optional() {
        let page: ShipmentListResponse = serde_json::from_str(r#"{"shipments":[]}"#).unwrap();
        assert_eq!(page.has_next, None);
        assert_eq!(page.total_pages, None);

        let empty: ShipmentListResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.shipments.is_empty());
    }

    #[test]
    fn request_bodies_use_backend_field_names() {
        let body = serde_json::to_value(AssignShipmentRequest {
            company_id: "c1".into(),
            shipment_id: "s1".into(),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"companyId": "c1", "shipmentId": "s1"}));

        let body = serde_json::to_value(CreateTruckRequest {
            driver_name: "Ravi".into(),
            mobile_number: "9876543210".into(),
            truck_number: "MH12AB1234".into(),
            created_by: "u1".into(),
            shipment_id: "s1".into(),
        })
        .unwrap();
        assert_eq!(body["shipmentId"], "s1");
        assert_eq!(body["created_by"], "u1");
    }

    #[test]
    fn truck_types_decode_bare_or_wrapped() {
        let bare: TruckTypesResponse =
            serde_json::from_str(r#"[{"_id":"t1","name":"Medium"}]"#).unwrap();
        let types = bare.into_types();
        assert_eq!((types[0].id.as_str(), types[0].name.as_str()), ("t1", "Medium"));

        let wrapped: TruckTypesResponse =
            serde_json::from_str(r#"{"truckTypes":[{"_id":"t3","name":"Trailer"}]}"#).unwrap();
        assert_eq!(wrapped.into_types()[0].name, "Trailer");
    }

    #[test]
    fn shipment_number_accepts_both_spellings() {
        let snake: ShipmentNumberResponse =
            serde_json::from_str(r#"{"shipment_number":"SHP-7"}"#).unwrap();
        let camel: ShipmentNumberResponse =
            serde_json::from_str(r#"{"shipmentNumber":"SHP-7"}"#).unwrap();
        assert_eq!(snake, camel);
    }

    #[test]
    fn unreserved_number_is_left_out_of_create_body() {
        let mut request = CreateShipmentRequest {
            shipment_number: None,
            truck_type: "Small".into(),
            destination_city: "Chicago".into(),
            shipment_status: "Planned".into(),
            created_by: "u1".into(),
        };
        assert!(serde_json::to_value(&request).unwrap().get("shipment_number").is_none());
        request.shipment_number = Some("SHP-7".into());
        assert_eq!(serde_json::to_value(&request).unwrap()["shipment_number"], "SHP-7");
    }

    #[test]
    fn gate_status_toggles() {
        let start = GateStatus::from_status(&ShipmentStatus::new("Gate-In"));
        assert_eq!(start, GateStatus::GateIn);
        assert_eq!(start.toggled(), GateStatus::GateOut);
        assert_eq!(start.toggled().toggled().label(), "Gate In");
    }
}
