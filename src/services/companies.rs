use validator::Validate;

use crate::domain::company::CompanyStatus;
use crate::domain::job::JobStatus;
use crate::domain::taxonomy::TaxonomyKind;
use crate::dto::companies::{CompaniesPageData, CompanyPageData};
use crate::dto::filters::SectionDef;
use crate::forms::companies::{AddCompanyForm, AddMemberForm, UpdateCompanyForm};
use crate::listing::{FilterSet, ListQuery};
use crate::models::auth::AuthenticatedUser;
use crate::pagination::DEFAULT_ITEMS_PER_PAGE;
use crate::repository::{
    CompanyListQuery, CompanyReader, CompanyWriter, JobListQuery, JobReader, TaxonomyReader,
    UserReader,
};
use crate::routes::check_role;
use crate::services::{ServiceError, ServiceResult, filters, paginate};
use crate::ADMIN_ROLE;

/// Filter keys recognized by the company list views.
pub const COMPANY_FILTER_KEYS: &[&str] = &["companyName", "location", "companySize", "status"];

pub(crate) fn to_list_query(filters: &FilterSet) -> CompanyListQuery {
    let mut query = CompanyListQuery::new();
    if let Some(name) = filters.get("companyName") {
        query = query.name(name);
    }
    if let Some(location) = filters.get("location") {
        query = query.location(location);
    }
    if let Some(size) = filters.get("companySize") {
        query = query.size(size);
    }
    if let Some(status) = filters
        .get("status")
        .and_then(|s| CompanyStatus::try_from(s).ok())
    {
        query = query.status(status);
    }
    query
}

fn catalogue_sections() -> Vec<SectionDef> {
    vec![SectionDef::taxonomy(
        "companySize",
        "Company size",
        TaxonomyKind::CompanySizes,
    )]
}

/// Loads the public company catalogue: active profiles only.
pub fn load_company_catalogue<R>(repo: &R, query: &ListQuery) -> ServiceResult<CompaniesPageData>
where
    R: CompanyReader + TaxonomyReader + ?Sized,
{
    let list_query = to_list_query(query.filters())
        .status(CompanyStatus::Active)
        .paginate(query.page(), DEFAULT_ITEMS_PER_PAGE);
    let (total, companies) = repo.list_companies(list_query)?;
    let sections = filters::build_sections(repo, catalogue_sections(), query)?;

    Ok(CompaniesPageData {
        companies: paginate(companies, total, query.page()),
        sections,
        filter_query: query.filters().to_query_string(),
    })
}

/// Loads the company detail page with the company's open postings.
pub fn load_company_detail<R>(repo: &R, company_id: i32) -> ServiceResult<CompanyPageData>
where
    R: CompanyReader + JobReader + ?Sized,
{
    let company = repo
        .get_company_by_id(company_id)?
        .ok_or(ServiceError::NotFound)?;
    if company.status != CompanyStatus::Active {
        return Err(ServiceError::NotFound);
    }

    let (_, jobs) = repo.list_jobs(
        JobListQuery::new()
            .company(company.id)
            .status(JobStatus::Open),
    )?;

    Ok(CompanyPageData { company, jobs })
}

/// Loads the admin company list, every status included.
pub fn load_admin_companies<R>(
    repo: &R,
    user: &AuthenticatedUser,
    query: &ListQuery,
) -> ServiceResult<CompaniesPageData>
where
    R: CompanyReader + TaxonomyReader + ?Sized,
{
    if !check_role(ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let list_query =
        to_list_query(query.filters()).paginate(query.page(), DEFAULT_ITEMS_PER_PAGE);
    let (total, companies) = repo.list_companies(list_query)?;

    let mut defs = catalogue_sections();
    defs.push(SectionDef::computed(
        "status",
        "Status",
        CompanyStatus::ALL
            .iter()
            .map(|s| (s.as_str().to_string(), s.as_str().to_string()))
            .collect(),
    ));
    let sections = filters::build_sections(repo, defs, query)?;

    Ok(CompaniesPageData {
        companies: paginate(companies, total, query.page()),
        sections,
        filter_query: query.filters().to_query_string(),
    })
}

/// Validates the add-company form and persists the profile.
pub fn add_company<R>(repo: &R, user: &AuthenticatedUser, form: AddCompanyForm) -> ServiceResult<()>
where
    R: CompanyWriter + ?Sized,
{
    if !check_role(ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }
    if let Err(err) = form.validate() {
        log::error!("Failed to validate company form: {err}");
        return Err(ServiceError::Form("Please fill in all required fields.".to_string()));
    }

    let new_company = form.to_new_company()?;
    repo.create_company(&new_company)?;
    Ok(())
}

pub fn update_company<R>(
    repo: &R,
    user: &AuthenticatedUser,
    company_id: i32,
    form: UpdateCompanyForm,
) -> ServiceResult<()>
where
    R: CompanyWriter + ?Sized,
{
    if !check_role(ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }
    if let Err(err) = form.validate() {
        log::error!("Failed to validate company form: {err}");
        return Err(ServiceError::Form("Please fill in all required fields.".to_string()));
    }

    let updates = form.to_update_company()?;
    repo.update_company(company_id, &updates)?;
    Ok(())
}

pub fn delete_company<R>(repo: &R, user: &AuthenticatedUser, company_id: i32) -> ServiceResult<()>
where
    R: CompanyWriter + ?Sized,
{
    if !check_role(ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }
    repo.delete_company(company_id)?;
    Ok(())
}

/// Grants the user with the given email recruiter access to a company.
pub fn add_company_member<R>(
    repo: &R,
    user: &AuthenticatedUser,
    company_id: i32,
    form: AddMemberForm,
) -> ServiceResult<()>
where
    R: CompanyWriter + UserReader + ?Sized,
{
    if !check_role(ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }
    if let Err(err) = form.validate() {
        log::error!("Failed to validate member form: {err}");
        return Err(ServiceError::Form("A valid email address is required.".to_string()));
    }

    let member = repo
        .get_user_by_email(form.email.trim())?
        .ok_or_else(|| ServiceError::Form("No user with that email address.".to_string()))?;
    repo.add_member(company_id, member.id)?;
    Ok(())
}

pub fn remove_company_member<R>(
    repo: &R,
    user: &AuthenticatedUser,
    company_id: i32,
    member_id: i32,
) -> ServiceResult<()>
where
    R: CompanyWriter + ?Sized,
{
    if !check_role(ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }
    repo.remove_member(company_id, member_id)?;
    Ok(())
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::repository::mock::MockRepository;

    fn admin() -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "1".to_string(),
            email: "admin@example.com".to_string(),
            name: "Admin".to_string(),
            roles: vec!["admin".to_string()],
            companies: vec![],
            exp: 0,
        }
    }

    #[test]
    fn catalogue_forces_active_status() {
        let mut repo = MockRepository::new();
        repo.expect_list_companies()
            .withf(|query| query.status == Some(CompanyStatus::Active))
            .returning(|_| Ok((0, vec![])));
        repo.expect_list_taxonomy().returning(|_| Ok(vec![]));

        // A crafted URL asking for archived profiles still gets active ones.
        let query = ListQuery::parse("status=archived", COMPANY_FILTER_KEYS);
        load_company_catalogue(&repo, &query).unwrap();
    }

    #[test]
    fn admin_list_requires_admin() {
        let repo = MockRepository::new();
        let mut user = admin();
        user.roles = vec!["recruiter".to_string()];

        let result = load_admin_companies(&repo, &user, &ListQuery::new());
        assert!(matches!(result, Err(ServiceError::Unauthorized)));
    }

    #[test]
    fn membership_needs_an_existing_user() {
        let mut repo = MockRepository::new();
        repo.expect_get_user_by_email().returning(|_| Ok(None));

        let form = AddMemberForm {
            email: "ghost@example.com".to_string(),
        };
        let result = add_company_member(&repo, &admin(), 1, form);
        assert!(matches!(result, Err(ServiceError::Form(_))));
    }
}
