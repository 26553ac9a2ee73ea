use serde::Deserialize;
use validator::Validate;

use crate::domain::company::{CompanyStatus, NewCompany, UpdateCompany};
use crate::domain::types::{CompanyName, TypeConstraintError};

#[derive(Deserialize, Validate)]
/// Form data for adding a company profile.
pub struct AddCompanyForm {
    #[validate(length(min = 1))]
    pub name: String,
    pub description: String,
    #[validate(length(min = 1))]
    pub location: String,
    pub size: String,
    pub status: String,
    #[validate(url)]
    pub website: Option<String>,
}

impl AddCompanyForm {
    pub fn to_new_company(&self) -> Result<NewCompany, TypeConstraintError> {
        Ok(NewCompany {
            name: CompanyName::new(self.name.trim())?.into_inner(),
            description: self.description.trim().to_string(),
            location: self.location.trim().to_string(),
            size: self.size.clone(),
            status: CompanyStatus::try_from(self.status.as_str())?,
            website: self
                .website
                .as_deref()
                .map(str::trim)
                .filter(|w| !w.is_empty())
                .map(str::to_string),
        })
    }
}

#[derive(Deserialize, Validate)]
/// Form data for updating an existing company profile.
pub struct UpdateCompanyForm {
    #[validate(length(min = 1))]
    pub name: String,
    pub description: String,
    #[validate(length(min = 1))]
    pub location: String,
    pub size: String,
    pub status: String,
    #[validate(url)]
    pub website: Option<String>,
}

impl UpdateCompanyForm {
    pub fn to_update_company(&self) -> Result<UpdateCompany, TypeConstraintError> {
        Ok(UpdateCompany {
            name: CompanyName::new(self.name.trim())?.into_inner(),
            description: self.description.trim().to_string(),
            location: self.location.trim().to_string(),
            size: self.size.clone(),
            status: CompanyStatus::try_from(self.status.as_str())?,
            website: self
                .website
                .as_deref()
                .map(str::trim)
                .filter(|w| !w.is_empty())
                .map(str::to_string),
        })
    }
}

#[derive(Deserialize, Validate)]
/// Form data for granting a recruiter access to a company.
pub struct AddMemberForm {
    #[validate(email)]
    pub email: String,
}
