//! Time-off listing models
//!
//! Only the fields the tool reads are modelled; Personio sends many more
//! and serde ignores them.

use serde::Deserialize;

use crate::client::pagination::PageMetadata;

/// One page of `GET /v1/company/time-offs`
#[derive(Debug, Clone, Deserialize)]
pub struct TimeOffPage {
    #[serde(default)]
    pub success: bool,

    #[serde(default)]
    pub metadata: PageMetadata,

    #[serde(default)]
    pub data: Vec<AbsenceRecord>,
}

/// A single time-off period
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AbsenceRecord {
    #[serde(default)]
    pub attributes: AbsenceAttributes,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AbsenceAttributes {
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub start_date: Option<String>,

    #[serde(default)]
    pub end_date: Option<String>,

    #[serde(default)]
    pub employee: Employee,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Employee {
    #[serde(default)]
    pub attributes: EmployeeAttributes,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeAttributes {
    #[serde(default)]
    pub first_name: Attribute,

    #[serde(default)]
    pub last_name: Attribute,
}

/// Personio wraps every employee field as `{label, value, type, universal_id}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Attribute {
    #[serde(default)]
    pub value: Option<String>,
}

impl AbsenceRecord {
    /// First and last name joined by a single space
    pub fn employee_name(&self) -> String {
        let employee = &self.attributes.employee.attributes;
        format!(
            "{} {}",
            employee.first_name.value.as_deref().unwrap_or_default(),
            employee.last_name.value.as_deref().unwrap_or_default()
        )
    }
}
