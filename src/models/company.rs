use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::company::{
    Company as DomainCompany, CompanyStatus, NewCompany as DomainNewCompany,
    UpdateCompany as DomainUpdateCompany,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::companies)]
/// Diesel model for [`crate::domain::company::Company`].
pub struct Company {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub location: String,
    pub size: String,
    pub status: String,
    pub website: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::companies)]
/// Insertable form of [`Company`].
pub struct NewCompany<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub location: &'a str,
    pub size: &'a str,
    pub status: &'a str,
    pub website: Option<&'a str>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::companies)]
/// Data used when updating a [`Company`] record.
pub struct UpdateCompany<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub location: &'a str,
    pub size: &'a str,
    pub status: &'a str,
    pub website: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Queryable, Insertable)]
#[diesel(table_name = crate::schema::company_members)]
pub struct CompanyMember {
    pub user_id: i32,
    pub company_id: i32,
}

impl From<Company> for DomainCompany {
    fn from(company: Company) -> Self {
        Self {
            id: company.id,
            name: company.name,
            description: company.description,
            location: company.location,
            size: company.size,
            status: CompanyStatus::try_from(company.status.as_str())
                .unwrap_or(CompanyStatus::Pending),
            website: company.website,
            created_at: company.created_at,
            updated_at: company.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewCompany> for NewCompany<'a> {
    fn from(company: &'a DomainNewCompany) -> Self {
        Self {
            name: &company.name,
            description: &company.description,
            location: &company.location,
            size: &company.size,
            status: company.status.as_str(),
            website: company.website.as_deref(),
        }
    }
}

impl<'a> From<&'a DomainUpdateCompany> for UpdateCompany<'a> {
    fn from(company: &'a DomainUpdateCompany) -> Self {
        Self {
            name: &company.name,
            description: &company.description,
            location: &company.location,
            size: &company.size,
            status: company.status.as_str(),
            website: company.website.as_deref(),
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }
}
