//! Persistence traits and list-query builders.
//!
//! Services depend on the reader/writer traits only; [`DieselRepository`] is
//! the production implementation and a mockall mock (behind the `test-mocks`
//! feature) stands in for unit tests.

use crate::db::{DbConnection, DbPool};
use crate::domain::application::{Application, ApplicationStatus, NewApplication};
use crate::domain::company::{Company, NewCompany, UpdateCompany};
use crate::domain::job::{Job, JobStatus, NewJob, UpdateJob};
use crate::domain::taxonomy::{NewSalaryRange, SalaryRange, TaxonomyEntry, TaxonomyKind};
use crate::domain::user::{NewUser, User, UserRole};
use crate::repository::errors::RepositoryResult;

pub mod application;
pub mod company;
pub mod errors;
pub mod job;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod taxonomy;
pub mod user;

/// Shared page slice carried by every list query.
#[derive(Debug, Clone)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

/// Filters accepted by the job listing; one optional field per recognized
/// filter key of the job list views.
#[derive(Debug, Clone, Default)]
pub struct JobListQuery {
    pub title: Option<String>,
    pub location: Option<String>,
    pub employment_type: Option<String>,
    pub category: Option<String>,
    pub level: Option<String>,
    pub salary: Option<String>,
    pub status: Option<JobStatus>,
    pub company_id: Option<i32>,
    /// Restricts to the given companies' postings; recruiter scoping.
    pub company_ids: Option<Vec<i32>>,
    pub pagination: Option<Pagination>,
}

impl JobListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn employment_type(mut self, employment_type: impl Into<String>) -> Self {
        self.employment_type = Some(employment_type.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.level = Some(level.into());
        self
    }

    pub fn salary(mut self, salary: impl Into<String>) -> Self {
        self.salary = Some(salary.into());
        self
    }

    pub fn status(mut self, status: JobStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn company(mut self, company_id: i32) -> Self {
        self.company_id = Some(company_id);
        self
    }

    pub fn companies(mut self, company_ids: Vec<i32>) -> Self {
        self.company_ids = Some(company_ids);
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

/// Filters accepted by the company listing.
#[derive(Debug, Clone, Default)]
pub struct CompanyListQuery {
    pub name: Option<String>,
    pub location: Option<String>,
    pub size: Option<String>,
    pub status: Option<crate::domain::company::CompanyStatus>,
    pub pagination: Option<Pagination>,
}

impl CompanyListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn status(mut self, status: crate::domain::company::CompanyStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

/// Filters accepted by the candidate (application) listing.
#[derive(Debug, Clone, Default)]
pub struct ApplicationListQuery {
    /// Matches the applicant's name or email.
    pub search: Option<String>,
    pub job_id: Option<i32>,
    /// Restricts to applications for the given companies' jobs; recruiter
    /// scoping.
    pub company_ids: Option<Vec<i32>>,
    pub status: Option<ApplicationStatus>,
    pub pagination: Option<Pagination>,
}

impl ApplicationListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn job(mut self, job_id: i32) -> Self {
        self.job_id = Some(job_id);
        self
    }

    pub fn companies(mut self, company_ids: Vec<i32>) -> Self {
        self.company_ids = Some(company_ids);
        self
    }

    pub fn status(mut self, status: ApplicationStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

/// Filters accepted by the admin user listing.
#[derive(Debug, Clone, Default)]
pub struct UserListQuery {
    /// Matches name or email.
    pub search: Option<String>,
    pub role: Option<UserRole>,
    pub pagination: Option<Pagination>,
}

impl UserListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn role(mut self, role: UserRole) -> Self {
        self.role = Some(role);
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

pub trait JobReader {
    fn get_job_by_id(&self, job_id: i32) -> RepositoryResult<Option<Job>>;
    /// Returns the total matching count alongside the requested page.
    fn list_jobs(&self, query: JobListQuery) -> RepositoryResult<(usize, Vec<Job>)>;
}

pub trait JobWriter {
    fn create_jobs(&self, new_jobs: &[NewJob]) -> RepositoryResult<usize>;
    fn update_job(&self, job_id: i32, updates: &UpdateJob) -> RepositoryResult<Job>;
    fn delete_job(&self, job_id: i32) -> RepositoryResult<()>;
}

pub trait CompanyReader {
    fn get_company_by_id(&self, company_id: i32) -> RepositoryResult<Option<Company>>;
    fn list_companies(&self, query: CompanyListQuery) -> RepositoryResult<(usize, Vec<Company>)>;
    /// Companies the given user manages.
    fn list_memberships(&self, user_id: i32) -> RepositoryResult<Vec<i32>>;
}

pub trait CompanyWriter {
    fn create_company(&self, new_company: &NewCompany) -> RepositoryResult<Company>;
    fn update_company(&self, company_id: i32, updates: &UpdateCompany)
    -> RepositoryResult<Company>;
    fn delete_company(&self, company_id: i32) -> RepositoryResult<()>;
    fn add_member(&self, company_id: i32, user_id: i32) -> RepositoryResult<()>;
    fn remove_member(&self, company_id: i32, user_id: i32) -> RepositoryResult<()>;
}

pub trait ApplicationReader {
    fn get_application_by_id(&self, application_id: i32) -> RepositoryResult<Option<Application>>;
    fn list_applications(
        &self,
        query: ApplicationListQuery,
    ) -> RepositoryResult<(usize, Vec<Application>)>;
    /// Whether the user already applied to the job.
    fn application_exists(&self, job_id: i32, user_id: i32) -> RepositoryResult<bool>;
}

pub trait ApplicationWriter {
    fn create_application(&self, application: &NewApplication) -> RepositoryResult<Application>;
    fn update_application_status(
        &self,
        application_id: i32,
        status: ApplicationStatus,
    ) -> RepositoryResult<Application>;
}

pub trait UserReader {
    fn get_user_by_id(&self, user_id: i32) -> RepositoryResult<Option<User>>;
    fn get_user_by_email(&self, email: &str) -> RepositoryResult<Option<User>>;
    fn list_users(&self, query: UserListQuery) -> RepositoryResult<(usize, Vec<User>)>;
}

pub trait UserWriter {
    fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
    fn set_user_role(&self, user_id: i32, role: UserRole) -> RepositoryResult<User>;
    fn delete_user(&self, user_id: i32) -> RepositoryResult<()>;
}

pub trait TaxonomyReader {
    fn list_taxonomy(&self, kind: TaxonomyKind) -> RepositoryResult<Vec<TaxonomyEntry>>;
    fn list_salary_ranges(&self) -> RepositoryResult<Vec<SalaryRange>>;
}

pub trait TaxonomyWriter {
    fn create_taxonomy_entry(
        &self,
        kind: TaxonomyKind,
        name: &str,
    ) -> RepositoryResult<TaxonomyEntry>;
    fn create_salary_range(&self, range: &NewSalaryRange) -> RepositoryResult<SalaryRange>;
    fn delete_taxonomy_entry(&self, kind: TaxonomyKind, entry_id: i32) -> RepositoryResult<()>;
}

/// Diesel-backed implementation of every repository trait.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub(crate) fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}
