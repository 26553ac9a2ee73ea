use std::fmt::Display;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::TypeConstraintError;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Company {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub location: String,
    /// Label from the company-size taxonomy, e.g. "11-50".
    pub size: String,
    pub status: CompanyStatus,
    pub website: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewCompany {
    pub name: String,
    pub description: String,
    pub location: String,
    pub size: String,
    pub status: CompanyStatus,
    pub website: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateCompany {
    pub name: String,
    pub description: String,
    pub location: String,
    pub size: String,
    pub status: CompanyStatus,
    pub website: Option<String>,
}

/// Moderation state of a company profile. Only `Active` companies appear on
/// the public catalogue.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CompanyStatus {
    Pending,
    Active,
    Archived,
}

impl CompanyStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            CompanyStatus::Pending => "pending",
            CompanyStatus::Active => "active",
            CompanyStatus::Archived => "archived",
        }
    }

    pub const ALL: [CompanyStatus; 3] = [
        CompanyStatus::Pending,
        CompanyStatus::Active,
        CompanyStatus::Archived,
    ];
}

impl Display for CompanyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for CompanyStatus {
    type Error = TypeConstraintError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "pending" => Ok(CompanyStatus::Pending),
            "active" => Ok(CompanyStatus::Active),
            "archived" => Ok(CompanyStatus::Archived),
            other => Err(TypeConstraintError::InvalidValue(other.to_string())),
        }
    }
}
