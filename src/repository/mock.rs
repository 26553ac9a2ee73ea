//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::application::{Application, ApplicationStatus, NewApplication};
use crate::domain::company::{Company, NewCompany, UpdateCompany};
use crate::domain::job::{Job, NewJob, UpdateJob};
use crate::domain::taxonomy::{NewSalaryRange, SalaryRange, TaxonomyEntry, TaxonomyKind};
use crate::domain::user::{NewUser, User, UserRole};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    ApplicationListQuery, ApplicationReader, ApplicationWriter, CompanyListQuery, CompanyReader,
    CompanyWriter, JobListQuery, JobReader, JobWriter, TaxonomyReader, TaxonomyWriter,
    UserListQuery, UserReader, UserWriter,
};

mock! {
    pub Repository {}

    impl JobReader for Repository {
        fn get_job_by_id(&self, job_id: i32) -> RepositoryResult<Option<Job>>;
        fn list_jobs(&self, query: JobListQuery) -> RepositoryResult<(usize, Vec<Job>)>;
    }

    impl JobWriter for Repository {
        fn create_jobs(&self, new_jobs: &[NewJob]) -> RepositoryResult<usize>;
        fn update_job(&self, job_id: i32, updates: &UpdateJob) -> RepositoryResult<Job>;
        fn delete_job(&self, job_id: i32) -> RepositoryResult<()>;
    }

    impl CompanyReader for Repository {
        fn get_company_by_id(&self, company_id: i32) -> RepositoryResult<Option<Company>>;
        fn list_companies(
            &self,
            query: CompanyListQuery,
        ) -> RepositoryResult<(usize, Vec<Company>)>;
        fn list_memberships(&self, user_id: i32) -> RepositoryResult<Vec<i32>>;
    }

    impl CompanyWriter for Repository {
        fn create_company(&self, new_company: &NewCompany) -> RepositoryResult<Company>;
        fn update_company(
            &self,
            company_id: i32,
            updates: &UpdateCompany,
        ) -> RepositoryResult<Company>;
        fn delete_company(&self, company_id: i32) -> RepositoryResult<()>;
        fn add_member(&self, company_id: i32, user_id: i32) -> RepositoryResult<()>;
        fn remove_member(&self, company_id: i32, user_id: i32) -> RepositoryResult<()>;
    }

    impl ApplicationReader for Repository {
        fn get_application_by_id(
            &self,
            application_id: i32,
        ) -> RepositoryResult<Option<Application>>;
        fn list_applications(
            &self,
            query: ApplicationListQuery,
        ) -> RepositoryResult<(usize, Vec<Application>)>;
        fn application_exists(&self, job_id: i32, user_id: i32) -> RepositoryResult<bool>;
    }

    impl ApplicationWriter for Repository {
        fn create_application(
            &self,
            application: &NewApplication,
        ) -> RepositoryResult<Application>;
        fn update_application_status(
            &self,
            application_id: i32,
            status: ApplicationStatus,
        ) -> RepositoryResult<Application>;
    }

    impl UserReader for Repository {
        fn get_user_by_id(&self, user_id: i32) -> RepositoryResult<Option<User>>;
        fn get_user_by_email(&self, email: &str) -> RepositoryResult<Option<User>>;
        fn list_users(&self, query: UserListQuery) -> RepositoryResult<(usize, Vec<User>)>;
    }

    impl UserWriter for Repository {
        fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
        fn set_user_role(&self, user_id: i32, role: UserRole) -> RepositoryResult<User>;
        fn delete_user(&self, user_id: i32) -> RepositoryResult<()>;
    }

    impl TaxonomyReader for Repository {
        fn list_taxonomy(&self, kind: TaxonomyKind) -> RepositoryResult<Vec<TaxonomyEntry>>;
        fn list_salary_ranges(&self) -> RepositoryResult<Vec<SalaryRange>>;
    }

    impl TaxonomyWriter for Repository {
        fn create_taxonomy_entry(
            &self,
            kind: TaxonomyKind,
            name: &str,
        ) -> RepositoryResult<TaxonomyEntry>;
        fn create_salary_range(&self, range: &NewSalaryRange) -> RepositoryResult<SalaryRange>;
        fn delete_taxonomy_entry(
            &self,
            kind: TaxonomyKind,
            entry_id: i32,
        ) -> RepositoryResult<()>;
    }
}
