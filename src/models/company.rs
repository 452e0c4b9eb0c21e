use serde::{Deserialize, Serialize};

/// Transport company a shipment can be assigned to
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Company {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "company_name", default)]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct CompaniesResponse {
    #[serde(rename = "CompanyListing", default)]
    pub companies: Vec<Company>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_company_listing() {
        let json = r#"{"CompanyListing":[{"_id":"c1","company_name":"Blue Dart"},{"_id":"c2"}]}"#;
        let response: CompaniesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.companies.len(), 2);
        assert_eq!(response.companies[0].name, "Blue Dart");
        assert_eq!(response.companies[1].name, "");
    }
}
