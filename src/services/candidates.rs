use validator::Validate;

use crate::domain::application::ApplicationStatus;
use crate::domain::job::JobStatus;
use crate::dto::candidates::CandidatesPageData;
use crate::dto::filters::SectionDef;
use crate::forms::candidates::{ApplyForm, SetStatusForm};
use crate::listing::{FilterSet, ListQuery};
use crate::models::auth::AuthenticatedUser;
use crate::pagination::DEFAULT_ITEMS_PER_PAGE;
use crate::repository::{
    ApplicationListQuery, ApplicationReader, ApplicationWriter, JobListQuery, JobReader,
    TaxonomyReader,
};
use crate::routes::check_role;
use crate::services::{ServiceError, ServiceResult, filters, paginate};
use crate::{ADMIN_ROLE, RECRUITER_ROLE};

/// Filter keys recognized by the candidate list.
pub const CANDIDATE_FILTER_KEYS: &[&str] = &["search", "jobId", "status"];

pub(crate) fn to_list_query(filters: &FilterSet) -> ApplicationListQuery {
    let mut query = ApplicationListQuery::new();
    if let Some(search) = filters.get("search") {
        query = query.search(search);
    }
    if let Some(job_id) = filters.get("jobId").and_then(|id| id.parse::<i32>().ok()) {
        query = query.job(job_id);
    }
    if let Some(status) = filters
        .get("status")
        .and_then(|s| ApplicationStatus::try_from(s).ok())
    {
        query = query.status(status);
    }
    query
}

/// Loads the recruiter candidate list, scoped to the recruiter's companies
/// unless the user is an admin.
pub fn load_candidates<R>(
    repo: &R,
    user: &AuthenticatedUser,
    query: &ListQuery,
) -> ServiceResult<CandidatesPageData>
where
    R: ApplicationReader + JobReader + TaxonomyReader + ?Sized,
{
    if !check_role(RECRUITER_ROLE, &user.roles) && !check_role(ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }
    let scope = if check_role(ADMIN_ROLE, &user.roles) {
        None
    } else {
        Some(user.companies.clone())
    };

    let mut list_query =
        to_list_query(query.filters()).paginate(query.page(), DEFAULT_ITEMS_PER_PAGE);
    if let Some(company_ids) = &scope {
        list_query = list_query.companies(company_ids.clone());
    }
    let (total, applications) = repo.list_applications(list_query)?;

    // The job filter offers the postings the user can actually review.
    let mut jobs_query = JobListQuery::new();
    if let Some(company_ids) = scope {
        jobs_query = jobs_query.companies(company_ids);
    }
    let (_, jobs) = repo.list_jobs(jobs_query)?;
    let job_options = jobs
        .into_iter()
        .map(|job| (job.id.to_string(), job.title))
        .collect();

    let defs = vec![
        SectionDef::computed("jobId", "Job", job_options),
        SectionDef::computed(
            "status",
            "Status",
            ApplicationStatus::ALL
                .iter()
                .map(|s| (s.as_str().to_string(), s.as_str().to_string()))
                .collect(),
        ),
    ];
    let sections = filters::build_sections(repo, defs, query)?;

    Ok(CandidatesPageData {
        applications: paginate(applications, total, query.page()),
        sections,
        filter_query: query.filters().to_query_string(),
    })
}

/// Records a signed-in candidate's application to an open posting.
pub fn apply_to_job<R>(
    repo: &R,
    user: &AuthenticatedUser,
    job_id: i32,
    form: ApplyForm,
) -> ServiceResult<()>
where
    R: JobReader + ApplicationReader + ApplicationWriter + ?Sized,
{
    let user_id = user
        .user_id()
        .ok_or_else(|| ServiceError::Internal("malformed subject claim".to_string()))?;

    let job = repo.get_job_by_id(job_id)?.ok_or(ServiceError::NotFound)?;
    if job.status != JobStatus::Open {
        return Err(ServiceError::Form(
            "This job is no longer accepting applications.".to_string(),
        ));
    }
    if repo.application_exists(job.id, user_id)? {
        return Err(ServiceError::Form(
            "You have already applied to this job.".to_string(),
        ));
    }
    if let Err(err) = form.validate() {
        log::error!("Failed to validate application form: {err}");
        return Err(ServiceError::Form(
            "Please fill in your name and a valid email address.".to_string(),
        ));
    }

    let application = form.to_new_application(job.id, user_id)?;
    repo.create_application(&application)?;
    Ok(())
}

/// Moves an application through the review pipeline, checking the user may
/// review the posting it belongs to.
pub fn set_application_status<R>(
    repo: &R,
    user: &AuthenticatedUser,
    application_id: i32,
    form: SetStatusForm,
) -> ServiceResult<()>
where
    R: ApplicationReader + ApplicationWriter + JobReader + ?Sized,
{
    let status = ApplicationStatus::try_from(form.status.as_str())
        .map_err(|_| ServiceError::Form("Unknown application status.".to_string()))?;

    let application = repo
        .get_application_by_id(application_id)?
        .ok_or(ServiceError::NotFound)?;
    let job = repo
        .get_job_by_id(application.job_id)?
        .ok_or(ServiceError::NotFound)?;

    let allowed = check_role(ADMIN_ROLE, &user.roles)
        || (check_role(RECRUITER_ROLE, &user.roles) && user.member_of(job.company_id));
    if !allowed {
        return Err(ServiceError::Unauthorized);
    }

    repo.update_application_status(application.id, status)?;
    Ok(())
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::domain::job::Job;
    use crate::repository::mock::MockRepository;

    fn candidate() -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "5".to_string(),
            email: "jane@example.com".to_string(),
            name: "Jane".to_string(),
            roles: vec![],
            companies: vec![],
            exp: 0,
        }
    }

    fn open_job(id: i32) -> Job {
        Job {
            id,
            company_id: 1,
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
        }
    }

    fn apply_form() -> ApplyForm {
        ApplyForm {
            full_name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: None,
            resume_url: None,
            cover_letter: None,
        }
    }

    #[test]
    fn duplicate_application_is_rejected() {
        let mut repo = MockRepository::new();
        repo.expect_get_job_by_id().returning(|id| Ok(Some(open_job(id))));
        repo.expect_application_exists().returning(|_, _| Ok(true));

        let result = apply_to_job(&repo, &candidate(), 1, apply_form());
        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn closed_job_rejects_applications() {
        let mut repo = MockRepository::new();
        repo.expect_get_job_by_id().returning(|id| {
            let mut job = open_job(id);
            job.status = JobStatus::Closed;
            Ok(Some(job))
        });

        let result = apply_to_job(&repo, &candidate(), 1, apply_form());
        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn job_filter_parses_numeric_id_only() {
        let mut filters = FilterSet::new();
        filters.set("jobId", "17");
        assert_eq!(to_list_query(&filters).job_id, Some(17));

        filters.set("jobId", "seventeen");
        assert_eq!(to_list_query(&filters).job_id, None);
    }

    #[test]
    fn status_change_checks_company_membership() {
        let mut repo = MockRepository::new();
        repo.expect_get_application_by_id().returning(|id| {
            Ok(Some(crate::domain::application::Application {
                id,
                public_id: crate::domain::types::PublicId::new(),
                job_id: 1,
                user_id: 5,
                full_name: "Jane Doe".to_string(),
                email: "jane@example.com".to_string(),
                phone: None,
                resume_url: None,
                cover_letter: None,
                status: ApplicationStatus::Submitted,
                created_at: chrono::NaiveDateTime::default(),
            }))
        });
        repo.expect_get_job_by_id().returning(|id| Ok(Some(open_job(id))));

        let mut reviewer = candidate();
        reviewer.roles = vec!["recruiter".to_string()];
        reviewer.companies = vec![99]; // not company 1

        let form = SetStatusForm {
            status: "reviewed".to_string(),
        };
        let result = set_application_status(&repo, &reviewer, 10, form);
        assert!(matches!(result, Err(ServiceError::Unauthorized)));
    }
}
