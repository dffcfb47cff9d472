//! Customer entity as served by the goahead REST API.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CustomerStatus {
    Active,
    Inactive,
}

impl CustomerStatus {
    pub fn code(&self) -> &'static str {
        match self {
            CustomerStatus::Active => "ACTIVE",
            CustomerStatus::Inactive => "INACTIVE",
        }
    }

    pub fn display_label(&self) -> &'static str {
        match self {
            CustomerStatus::Active => "Active",
            CustomerStatus::Inactive => "Inactive",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CustomerType {
    Customer,
    Company,
}

impl CustomerType {
    pub fn code(&self) -> &'static str {
        match self {
            CustomerType::Customer => "CUSTOMER",
            CustomerType::Company => "COMPANY",
        }
    }

    pub fn display_label(&self) -> &'static str {
        match self {
            CustomerType::Customer => "Individual",
            CustomerType::Company => "Company",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub nip: String,
    #[serde(default)]
    pub regon: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub mail: String,
    pub customer_type: CustomerType,
    pub customer_status: CustomerStatus,
    #[serde(default)]
    pub other_info: String,
    /// Present only when the fetch asked for addresses.
    #[serde(default)]
    pub address: Option<Address>,
}

impl Customer {
    /// Display name in the "first name, surname" form the views use.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: i64,
    pub city: String,
    pub street: String,
    pub zip: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_codes_round_trip() {
        let json = serde_json::to_string(&CustomerType::Company).unwrap();
        assert_eq!(json, "\"COMPANY\"");
        let back: CustomerStatus = serde_json::from_str("\"INACTIVE\"").unwrap();
        assert_eq!(back, CustomerStatus::Inactive);
    }

    #[test]
    fn display_name_joins_first_and_surname() {
        let customer = Customer {
            id: 1,
            name: "Kowalski".to_string(),
            first_name: "Jan".to_string(),
            nip: String::new(),
            regon: String::new(),
            phone: String::new(),
            mail: String::new(),
            customer_type: CustomerType::Customer,
            customer_status: CustomerStatus::Active,
            other_info: String::new(),
            address: None,
        };
        assert_eq!(customer.display_name(), "Jan Kowalski");
    }
}
