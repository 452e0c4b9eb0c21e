use crate::models::session::Role;

/// Every screen the app can show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    // Logistics
    ShipmentList,
    CreateShipment,
    AssignShipmentList,
    AssignTransport { shipment_id: String },
    // Munshi
    MunshiShipments,
    AssignTruck { shipment_id: String },
    // Security
    SecurityShipments,
}

impl Route {
    pub fn home_for(role: Role) -> Route {
        match role {
            Role::LogisticPerson => Route::ShipmentList,
            Role::SecurityGuard => Route::SecurityShipments,
            Role::Munshi => Route::MunshiShipments,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Login => "/login".to_string(),
            Route::ShipmentList => "/shipment/viewShipment".to_string(),
            Route::CreateShipment => "/shipment/createShipment".to_string(),
            Route::AssignShipmentList => "/shipment/assignShipment".to_string(),
            Route::AssignTransport { shipment_id } => {
                format!("/shipment/createAssignShipment/{}", shipment_id)
            }
            Route::MunshiShipments => "/munshi/viewShipment".to_string(),
            Route::AssignTruck { shipment_id } => format!("/munshi/assignTruck/{}", shipment_id),
            Route::SecurityShipments => "/security/viewSecurityShipment".to_string(),
        }
    }

    /// Inverse of `path`; unknown paths yield `None`
    pub fn from_path(path: &str) -> Option<Route> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let route = match segments.as_slice() {
            ["login"] => Route::Login,
            ["shipment", "viewShipment"] => Route::ShipmentList,
            ["shipment", "createShipment"] => Route::CreateShipment,
            ["shipment", "assignShipment"] => Route::AssignShipmentList,
            ["shipment", "createAssignShipment", id] => Route::AssignTransport {
                shipment_id: id.to_string(),
            },
            ["munshi", "viewShipment"] => Route::MunshiShipments,
            ["munshi", "assignTruck", id] => Route::AssignTruck {
                shipment_id: id.to_string(),
            },
            ["security", "viewSecurityShipment"] => Route::SecurityShipments,
            _ => return None,
        };
        Some(route)
    }

    /// Route named by a location hash (`#/munshi/viewShipment`). Unknown or
    /// empty hashes fall back to Login; the guard then picks the real screen.
    pub fn from_hash(hash: &str) -> Route {
        Route::from_path(hash.trim_start_matches('#')).unwrap_or(Route::Login)
    }

    pub fn is_protected(&self) -> bool {
        !matches!(self, Route::Login)
    }

    /// Whether `role` may open this route. Public routes allow everyone.
    pub fn allows(&self, role: Role) -> bool {
        match self {
            Route::Login => true,
            Route::ShipmentList
            | Route::CreateShipment
            | Route::AssignShipmentList
            | Route::AssignTransport { .. } => role == Role::LogisticPerson,
            Route::MunshiShipments | Route::AssignTruck { .. } => role == Role::Munshi,
            Route::SecurityShipments => role == Role::SecurityGuard,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Login => "Login",
            Route::ShipmentList | Route::MunshiShipments | Route::SecurityShipments => "Shipments",
            Route::CreateShipment => "Create Shipment",
            Route::AssignShipmentList | Route::AssignTransport { .. } => "Assign Shipment",
            Route::AssignTruck { .. } => "Assign Truck",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip() {
        let routes = [
            Route::Login,
            Route::ShipmentList,
            Route::CreateShipment,
            Route::AssignShipmentList,
            Route::AssignTransport { shipment_id: "s1".into() },
            Route::MunshiShipments,
            Route::AssignTruck { shipment_id: "s2".into() },
            Route::SecurityShipments,
        ];
        for route in routes {
            assert_eq!(Route::from_path(&route.path()), Some(route));
        }
        assert_eq!(Route::from_path("/nowhere"), None);
    }

    #[test]
    fn location_hash_maps_to_route() {
        assert_eq!(
            Route::from_hash("#/munshi/assignTruck/s9"),
            Route::AssignTruck { shipment_id: "s9".into() }
        );
        assert_eq!(Route::from_hash("#/security/viewSecurityShipment"), Route::SecurityShipments);
        assert_eq!(Route::from_hash(""), Route::Login);
        assert_eq!(Route::from_hash("#/shipment/typo"), Route::Login);
    }

    #[test]
    fn home_routes_match_roles() {
        assert_eq!(Route::home_for(Role::SecurityGuard).path(), "/security/viewSecurityShipment");
        assert_eq!(Route::home_for(Role::Munshi).path(), "/munshi/viewShipment");
        assert_eq!(Route::home_for(Role::LogisticPerson).path(), "/shipment/viewShipment");
        for role in Role::ALL {
            assert!(Route::home_for(role).allows(role));
        }
    }

    #[test]
    fn roles_are_confined_to_their_screens() {
        assert!(!Route::CreateShipment.allows(Role::Munshi));
        assert!(!Route::AssignTruck { shipment_id: "s".into() }.allows(Role::LogisticPerson));
        assert!(Route::Login.allows(Role::SecurityGuard));
        assert!(!Route::Login.is_protected());
    }
}
