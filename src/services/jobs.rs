use validator::Validate;

use crate::domain::job::{EMPLOYMENT_TYPES, Job, JobStatus};
use crate::domain::taxonomy::TaxonomyKind;
use crate::dto::filters::SectionDef;
use crate::dto::jobs::{JobPageData, JobsPageData};
use crate::forms::jobs::{AddJobForm, UpdateJobForm, UploadJobsForm};
use crate::listing::{FilterSet, ListQuery};
use crate::models::auth::AuthenticatedUser;
use crate::pagination::DEFAULT_ITEMS_PER_PAGE;
use crate::repository::{
    ApplicationReader, CompanyReader, JobListQuery, JobReader, JobWriter, TaxonomyReader,
};
use crate::routes::check_role;
use crate::services::{ServiceError, ServiceResult, filters, paginate};
use crate::{ADMIN_ROLE, RECRUITER_ROLE};

/// Filter keys recognized by the job list views.
pub const JOB_FILTER_KEYS: &[&str] = &[
    "jobTitle",
    "location",
    "employmentType",
    "categories",
    "levels",
    "salaries",
    "status",
];

/// Translates the URL filter state into a repository query.
///
/// An unparseable status value is treated as unset, matching how the filter
/// store handles unrecognized keys.
pub(crate) fn to_list_query(filters: &FilterSet) -> JobListQuery {
    let mut query = JobListQuery::new();
    if let Some(title) = filters.get("jobTitle") {
        query = query.title(title);
    }
    if let Some(location) = filters.get("location") {
        query = query.location(location);
    }
    if let Some(employment_type) = filters.get("employmentType") {
        query = query.employment_type(employment_type);
    }
    if let Some(category) = filters.get("categories") {
        query = query.category(category);
    }
    if let Some(level) = filters.get("levels") {
        query = query.level(level);
    }
    if let Some(salary) = filters.get("salaries") {
        query = query.salary(salary);
    }
    if let Some(status) = filters
        .get("status")
        .and_then(|s| JobStatus::try_from(s).ok())
    {
        query = query.status(status);
    }
    query
}

fn board_sections() -> Vec<SectionDef> {
    vec![
        SectionDef::fixed("employmentType", "Employment type", EMPLOYMENT_TYPES),
        SectionDef::taxonomy("categories", "Category", TaxonomyKind::Categories),
        SectionDef::taxonomy("levels", "Level", TaxonomyKind::Levels),
        SectionDef::taxonomy("salaries", "Salary", TaxonomyKind::Salaries),
    ]
}

fn status_values() -> Vec<(String, String)> {
    JobStatus::ALL
        .iter()
        .map(|s| (s.as_str().to_string(), s.as_str().to_string()))
        .collect()
}

/// Loads the public job board: open postings only, whatever the URL says.
pub fn load_job_board<R>(repo: &R, query: &ListQuery) -> ServiceResult<JobsPageData>
where
    R: JobReader + TaxonomyReader + ?Sized,
{
    let list_query = to_list_query(query.filters())
        .status(JobStatus::Open)
        .paginate(query.page(), DEFAULT_ITEMS_PER_PAGE);
    let (total, jobs) = repo.list_jobs(list_query)?;
    let sections = filters::build_sections(repo, board_sections(), query)?;

    Ok(JobsPageData {
        jobs: paginate(jobs, total, query.page()),
        sections,
        filter_query: query.filters().to_query_string(),
    })
}

/// Loads the recruiter dashboard job list, scoped to the user's companies
/// unless they are an admin.
pub fn load_dashboard_jobs<R>(
    repo: &R,
    user: &AuthenticatedUser,
    query: &ListQuery,
) -> ServiceResult<JobsPageData>
where
    R: JobReader + TaxonomyReader + ?Sized,
{
    if !check_role(RECRUITER_ROLE, &user.roles) && !check_role(ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let mut list_query =
        to_list_query(query.filters()).paginate(query.page(), DEFAULT_ITEMS_PER_PAGE);
    if !check_role(ADMIN_ROLE, &user.roles) {
        list_query = list_query.companies(user.companies.clone());
    }
    let (total, jobs) = repo.list_jobs(list_query)?;

    let mut defs = board_sections();
    defs.push(SectionDef::computed("status", "Status", status_values()));
    let sections = filters::build_sections(repo, defs, query)?;

    Ok(JobsPageData {
        jobs: paginate(jobs, total, query.page()),
        sections,
        filter_query: query.filters().to_query_string(),
    })
}

/// Loads the job detail page. Non-open postings are visible only to admins
/// and the owning company's recruiters.
pub fn load_job_detail<R>(
    repo: &R,
    user: Option<&AuthenticatedUser>,
    job_id: i32,
) -> ServiceResult<JobPageData>
where
    R: JobReader + CompanyReader + ApplicationReader + ?Sized,
{
    let job = repo.get_job_by_id(job_id)?.ok_or(ServiceError::NotFound)?;
    if job.status != JobStatus::Open && !can_manage(user, job.company_id) {
        return Err(ServiceError::NotFound);
    }

    let company = repo
        .get_company_by_id(job.company_id)?
        .ok_or(ServiceError::NotFound)?;

    let already_applied = match user.and_then(AuthenticatedUser::user_id) {
        Some(user_id) => repo.application_exists(job.id, user_id)?,
        None => false,
    };

    Ok(JobPageData {
        job,
        company,
        already_applied,
    })
}

fn can_manage(user: Option<&AuthenticatedUser>, company_id: i32) -> bool {
    match user {
        Some(user) => {
            check_role(ADMIN_ROLE, &user.roles)
                || (check_role(RECRUITER_ROLE, &user.roles) && user.member_of(company_id))
        }
        None => false,
    }
}

/// Looks the job up and verifies the user may manage it.
fn ensure_job_access<R>(repo: &R, user: &AuthenticatedUser, job_id: i32) -> ServiceResult<Job>
where
    R: JobReader + ?Sized,
{
    let job = repo.get_job_by_id(job_id)?.ok_or(ServiceError::NotFound)?;
    if !can_manage(Some(user), job.company_id) {
        return Err(ServiceError::Unauthorized);
    }
    Ok(job)
}

/// Validates the add-job form and persists the posting.
pub fn add_job<R>(repo: &R, user: &AuthenticatedUser, form: AddJobForm) -> ServiceResult<()>
where
    R: JobWriter + ?Sized,
{
    if !can_manage(Some(user), form.company_id) {
        return Err(ServiceError::Unauthorized);
    }
    if let Err(err) = form.validate() {
        log::error!("Failed to validate job form: {err}");
        return Err(ServiceError::Form("Please fill in all required fields.".to_string()));
    }

    let new_job = form.to_new_job()?;
    repo.create_jobs(&[new_job])?;
    Ok(())
}

/// Parses the uploaded CSV and creates postings in bulk for one company.
pub fn upload_jobs<R>(
    repo: &R,
    user: &AuthenticatedUser,
    company_id: i32,
    form: &mut UploadJobsForm,
) -> ServiceResult<usize>
where
    R: JobWriter + ?Sized,
{
    if !can_manage(Some(user), company_id) {
        return Err(ServiceError::Unauthorized);
    }

    let jobs = form.parse(company_id).map_err(|err| {
        log::error!("Failed to parse jobs CSV: {err}");
        ServiceError::Form("The CSV file could not be parsed.".to_string())
    })?;
    if jobs.is_empty() {
        return Err(ServiceError::Form("The CSV file contains no jobs.".to_string()));
    }

    Ok(repo.create_jobs(&jobs)?)
}

/// Validates the update form and saves the posting.
pub fn update_job<R>(
    repo: &R,
    user: &AuthenticatedUser,
    job_id: i32,
    form: UpdateJobForm,
) -> ServiceResult<()>
where
    R: JobReader + JobWriter + ?Sized,
{
    ensure_job_access(repo, user, job_id)?;
    if let Err(err) = form.validate() {
        log::error!("Failed to validate job form: {err}");
        return Err(ServiceError::Form("Please fill in all required fields.".to_string()));
    }

    let updates = form.to_update_job()?;
    repo.update_job(job_id, &updates)?;
    Ok(())
}

pub fn delete_job<R>(repo: &R, user: &AuthenticatedUser, job_id: i32) -> ServiceResult<()>
where
    R: JobReader + JobWriter + ?Sized,
{
    ensure_job_access(repo, user, job_id)?;
    repo.delete_job(job_id)?;
    Ok(())
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::repository::mock::MockRepository;

    fn user_with(roles: &[&str], companies: Vec<i32>) -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "7".to_string(),
            email: "recruiter@example.com".to_string(),
            name: "Recruiter".to_string(),
            roles: roles.iter().map(|r| r.to_string()).collect(),
            companies,
            exp: 0,
        }
    }

    #[test]
    fn dashboard_requires_a_role() {
        let repo = MockRepository::new();
        let user = user_with(&[], vec![]);

        let result = load_dashboard_jobs(&repo, &user, &ListQuery::new());
        assert!(matches!(result, Err(ServiceError::Unauthorized)));
    }

    #[test]
    fn recruiter_list_is_scoped_to_their_companies() {
        let mut repo = MockRepository::new();
        repo.expect_list_jobs()
            .withf(|query| query.company_ids.as_deref() == Some([3, 9].as_slice()))
            .returning(|_| Ok((0, vec![])));
        repo.expect_list_taxonomy().returning(|_| Ok(vec![]));

        let user = user_with(&["recruiter"], vec![3, 9]);
        let data = load_dashboard_jobs(&repo, &user, &ListQuery::new()).unwrap();
        assert!(data.jobs.items.is_empty());
    }

    #[test]
    fn filter_state_translates_to_repository_query() {
        let query = ListQuery::parse(
            "jobTitle=rust&employmentType=full-time&levels=Senior&status=open&page=2",
            JOB_FILTER_KEYS,
        );
        let list_query = to_list_query(query.filters());

        assert_eq!(list_query.title.as_deref(), Some("rust"));
        assert_eq!(list_query.employment_type.as_deref(), Some("full-time"));
        assert_eq!(list_query.level.as_deref(), Some("Senior"));
        assert_eq!(list_query.status, Some(JobStatus::Open));
        assert_eq!(list_query.category, None);
    }

    #[test]
    fn unknown_status_filter_is_ignored() {
        let mut filters = FilterSet::new();
        filters.set("status", "bogus");
        assert_eq!(to_list_query(&filters).status, None);
    }

    #[test]
    fn delete_denied_for_foreign_company() {
        let mut repo = MockRepository::new();
        repo.expect_get_job_by_id().returning(|id| {
            Ok(Some(Job {
                id,
                company_id: 42,
                title: "Engineer".to_string(),
                description: String::new(),
                location: "Remote".to_string(),
                employment_type: "full-time".to_string(),
                category: String::new(),
                level: String::new(),
                salary: String::new(),
                status: JobStatus::Open,
                created_at: chrono::NaiveDateTime::default(),
                updated_at: chrono::NaiveDateTime::default(),
            }))
        });

        let user = user_with(&["recruiter"], vec![3]);
        let result = delete_job(&repo, &user, 1);
        assert!(matches!(result, Err(ServiceError::Unauthorized)));
    }
}
