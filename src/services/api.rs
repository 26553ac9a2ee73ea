//! Listing services behind the JSON API. Every endpoint answers the
//! canonical [`crate::dto::api::ListResponse`] shape built from these
//! results.

use crate::domain::application::Application;
use crate::domain::company::{Company, CompanyStatus};
use crate::domain::job::{Job, JobStatus};
use crate::listing::{ListQuery, ListResult};
use crate::models::auth::AuthenticatedUser;
use crate::pagination::DEFAULT_ITEMS_PER_PAGE;
use crate::repository::{ApplicationReader, CompanyReader, JobReader};
use crate::routes::check_role;
use crate::services::{ServiceError, ServiceResult};
use crate::services::{candidates, companies, jobs};
use crate::{ADMIN_ROLE, RECRUITER_ROLE};

/// Open postings matching the query, one page at a time.
pub fn list_jobs<R>(repo: &R, query: &ListQuery) -> ServiceResult<ListResult<Job>>
where
    R: JobReader + ?Sized,
{
    let list_query = jobs::to_list_query(query.filters())
        .status(JobStatus::Open)
        .paginate(query.page(), DEFAULT_ITEMS_PER_PAGE);
    let (total, items) = repo.list_jobs(list_query)?;

    Ok(ListResult::from_total(items, total, DEFAULT_ITEMS_PER_PAGE))
}

/// Active company profiles matching the query.
pub fn list_companies<R>(repo: &R, query: &ListQuery) -> ServiceResult<ListResult<Company>>
where
    R: CompanyReader + ?Sized,
{
    let list_query = companies::to_list_query(query.filters())
        .status(CompanyStatus::Active)
        .paginate(query.page(), DEFAULT_ITEMS_PER_PAGE);
    let (total, items) = repo.list_companies(list_query)?;

    Ok(ListResult::from_total(items, total, DEFAULT_ITEMS_PER_PAGE))
}

/// Applications visible to the authenticated reviewer.
pub fn list_candidates<R>(
    repo: &R,
    user: &AuthenticatedUser,
    query: &ListQuery,
) -> ServiceResult<ListResult<Application>>
where
    R: ApplicationReader + ?Sized,
{
    if !check_role(RECRUITER_ROLE, &user.roles) && !check_role(ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let mut list_query = candidates::to_list_query(query.filters())
        .paginate(query.page(), DEFAULT_ITEMS_PER_PAGE);
    if !check_role(ADMIN_ROLE, &user.roles) {
        list_query = list_query.companies(user.companies.clone());
    }
    let (total, items) = repo.list_applications(list_query)?;

    Ok(ListResult::from_total(items, total, DEFAULT_ITEMS_PER_PAGE))
}
