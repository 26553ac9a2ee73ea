use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::domain::types::TypeConstraintError;

/// A single admin-managed vocabulary entry (skill, level, position, category,
/// salary range or company size).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaxonomyEntry {
    pub id: i32,
    pub name: String,
}

/// A salary bracket; its label is what jobs reference and filters match.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SalaryRange {
    pub id: i32,
    pub label: String,
    pub min_amount: i32,
    pub max_amount: i32,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewSalaryRange {
    pub label: String,
    pub min_amount: i32,
    pub max_amount: i32,
}

/// The vocabularies the admin taxonomy screen manages.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TaxonomyKind {
    Skills,
    Levels,
    Positions,
    Categories,
    Salaries,
    CompanySizes,
}

impl TaxonomyKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            TaxonomyKind::Skills => "skills",
            TaxonomyKind::Levels => "levels",
            TaxonomyKind::Positions => "positions",
            TaxonomyKind::Categories => "categories",
            TaxonomyKind::Salaries => "salaries",
            TaxonomyKind::CompanySizes => "company-sizes",
        }
    }

    pub const ALL: [TaxonomyKind; 6] = [
        TaxonomyKind::Skills,
        TaxonomyKind::Levels,
        TaxonomyKind::Positions,
        TaxonomyKind::Categories,
        TaxonomyKind::Salaries,
        TaxonomyKind::CompanySizes,
    ];
}

impl Display for TaxonomyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for TaxonomyKind {
    type Error = TypeConstraintError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "skills" => Ok(TaxonomyKind::Skills),
            "levels" => Ok(TaxonomyKind::Levels),
            "positions" => Ok(TaxonomyKind::Positions),
            "categories" => Ok(TaxonomyKind::Categories),
            "salaries" => Ok(TaxonomyKind::Salaries),
            "company-sizes" => Ok(TaxonomyKind::CompanySizes),
            other => Err(TypeConstraintError::InvalidValue(other.to_string())),
        }
    }
}
