use jobdesk::domain::application::{ApplicationStatus, NewApplication};
use jobdesk::domain::company::{CompanyStatus, NewCompany, UpdateCompany};
use jobdesk::domain::job::{JobStatus, NewJob, UpdateJob};
use jobdesk::domain::taxonomy::{NewSalaryRange, TaxonomyKind};
use jobdesk::domain::types::PublicId;
use jobdesk::domain::user::{NewUser, UserRole};
use jobdesk::repository::errors::RepositoryError;
use jobdesk::repository::{
    ApplicationListQuery, ApplicationReader, ApplicationWriter, CompanyListQuery, CompanyReader,
    CompanyWriter, DieselRepository, JobListQuery, JobReader, JobWriter, TaxonomyReader,
    TaxonomyWriter, UserListQuery, UserReader, UserWriter,
};

mod common;

fn new_company(name: &str) -> NewCompany {
    NewCompany {
        name: name.into(),
        description: "A company".into(),
        location: "Berlin".into(),
        size: "11-50".into(),
        status: CompanyStatus::Active,
        website: None,
    }
}

fn new_job(company_id: i32, title: &str, status: JobStatus) -> NewJob {
    NewJob {
        company_id,
        title: title.into(),
        description: "<p>Work</p>".into(),
        location: "Remote".into(),
        employment_type: "full-time".into(),
        category: "Engineering".into(),
        level: "Senior".into(),
        salary: "60k-80k".into(),
        status,
    }
}

fn new_user(email: &str, role: UserRole) -> NewUser {
    NewUser {
        email: email.into(),
        name: "Someone".into(),
        role,
    }
}

#[test]
fn test_job_repository_crud() {
    let test_db = common::TestDb::new("test_job_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    let acme = repo.create_company(&new_company("Acme")).unwrap();
    let other = repo.create_company(&new_company("Globex")).unwrap();

    let created = repo
        .create_jobs(&[
            new_job(acme.id, "Rust Engineer", JobStatus::Open),
            new_job(acme.id, "Product Designer", JobStatus::Draft),
        ])
        .unwrap();
    assert_eq!(created, 2);

    let (total, jobs) = repo.list_jobs(JobListQuery::new()).unwrap();
    assert_eq!(total, 2);
    assert_eq!(jobs.len(), 2);

    let (title_total, title_items) = repo
        .list_jobs(JobListQuery::new().title("Rust"))
        .unwrap();
    assert_eq!(title_total, 1);
    assert_eq!(title_items[0].title, "Rust Engineer");

    let (open_total, _) = repo
        .list_jobs(JobListQuery::new().status(JobStatus::Open))
        .unwrap();
    assert_eq!(open_total, 1);

    let (scoped_total, _) = repo
        .list_jobs(JobListQuery::new().companies(vec![other.id]))
        .unwrap();
    assert_eq!(scoped_total, 0);

    let job_id = title_items[0].id;
    let updates = UpdateJob {
        title: "Senior Rust Engineer".into(),
        description: "<p>Work</p>".into(),
        location: "Remote".into(),
        employment_type: "full-time".into(),
        category: "Engineering".into(),
        level: "Senior".into(),
        salary: "60k-80k".into(),
        status: JobStatus::Closed,
    };
    let updated = repo.update_job(job_id, &updates).unwrap();
    assert_eq!(updated.title, "Senior Rust Engineer");
    assert_eq!(updated.status, JobStatus::Closed);

    repo.delete_job(job_id).unwrap();
    assert!(repo.get_job_by_id(job_id).unwrap().is_none());
    assert!(matches!(
        repo.delete_job(job_id),
        Err(RepositoryError::NotFound)
    ));
}

#[test]
fn test_job_list_pagination() {
    let test_db = common::TestDb::new("test_job_list_pagination.db");
    let repo = DieselRepository::new(test_db.pool());

    let company = repo.create_company(&new_company("Acme")).unwrap();
    let jobs: Vec<NewJob> = (0..25)
        .map(|i| new_job(company.id, &format!("Job {i}"), JobStatus::Open))
        .collect();
    repo.create_jobs(&jobs).unwrap();

    let (total, page) = repo
        .list_jobs(JobListQuery::new().paginate(2, 10))
        .unwrap();
    assert_eq!(total, 25);
    assert_eq!(page.len(), 10);

    let (_, last_page) = repo
        .list_jobs(JobListQuery::new().paginate(3, 10))
        .unwrap();
    assert_eq!(last_page.len(), 5);

    let (_, past_the_end) = repo
        .list_jobs(JobListQuery::new().paginate(4, 10))
        .unwrap();
    assert!(past_the_end.is_empty());
}

#[test]
fn test_company_repository_crud_and_members() {
    let test_db = common::TestDb::new("test_company_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    let acme = repo.create_company(&new_company("Acme")).unwrap();
    repo.create_company(&new_company("Globex")).unwrap();

    let (total, _) = repo.list_companies(CompanyListQuery::new()).unwrap();
    assert_eq!(total, 2);

    let (named_total, named) = repo
        .list_companies(CompanyListQuery::new().name("Acm"))
        .unwrap();
    assert_eq!(named_total, 1);
    assert_eq!(named[0].name, "Acme");

    let updates = UpdateCompany {
        name: "Acme".into(),
        description: "A company".into(),
        location: "Berlin".into(),
        size: "11-50".into(),
        status: CompanyStatus::Archived,
        website: Some("https://acme.example.com".into()),
    };
    let updated = repo.update_company(acme.id, &updates).unwrap();
    assert_eq!(updated.status, CompanyStatus::Archived);
    assert_eq!(updated.website.as_deref(), Some("https://acme.example.com"));

    let (active_total, _) = repo
        .list_companies(CompanyListQuery::new().status(CompanyStatus::Active))
        .unwrap();
    assert_eq!(active_total, 1);

    let recruiter = repo
        .create_user(&new_user("r@example.com", UserRole::Recruiter))
        .unwrap();
    repo.add_member(acme.id, recruiter.id).unwrap();
    // Re-adding is a no-op, not an error.
    repo.add_member(acme.id, recruiter.id).unwrap();
    assert_eq!(repo.list_memberships(recruiter.id).unwrap(), vec![acme.id]);

    repo.remove_member(acme.id, recruiter.id).unwrap();
    assert!(repo.list_memberships(recruiter.id).unwrap().is_empty());

    repo.delete_company(acme.id).unwrap();
    assert!(repo.get_company_by_id(acme.id).unwrap().is_none());
    assert!(matches!(
        repo.delete_company(acme.id),
        Err(RepositoryError::NotFound)
    ));
}

#[test]
fn test_application_repository_crud() {
    let test_db = common::TestDb::new("test_application_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    let acme = repo.create_company(&new_company("Acme")).unwrap();
    let globex = repo.create_company(&new_company("Globex")).unwrap();
    repo.create_jobs(&[new_job(acme.id, "Rust Engineer", JobStatus::Open)])
        .unwrap();
    let job = repo.list_jobs(JobListQuery::new()).unwrap().1.remove(0);

    let alice = repo
        .create_user(&new_user("alice@example.com", UserRole::Candidate))
        .unwrap();

    let application = repo
        .create_application(&NewApplication {
            public_id: PublicId::new(),
            job_id: job.id,
            user_id: alice.id,
            full_name: "Alice Cooper".into(),
            email: "alice@example.com".into(),
            phone: Some("+491701234567".into()),
            resume_url: None,
            cover_letter: Some("Hello".into()),
        })
        .unwrap();
    assert_eq!(application.status, ApplicationStatus::Submitted);

    assert!(repo.application_exists(job.id, alice.id).unwrap());
    assert!(!repo.application_exists(job.id, alice.id + 1).unwrap());

    let (search_total, search_items) = repo
        .list_applications(ApplicationListQuery::new().search("alice"))
        .unwrap();
    assert_eq!(search_total, 1);
    assert_eq!(search_items[0].full_name, "Alice Cooper");

    let (scoped_total, _) = repo
        .list_applications(ApplicationListQuery::new().companies(vec![globex.id]))
        .unwrap();
    assert_eq!(scoped_total, 0);

    let reviewed = repo
        .update_application_status(application.id, ApplicationStatus::Reviewed)
        .unwrap();
    assert_eq!(reviewed.status, ApplicationStatus::Reviewed);

    let (reviewed_total, _) = repo
        .list_applications(ApplicationListQuery::new().status(ApplicationStatus::Reviewed))
        .unwrap();
    assert_eq!(reviewed_total, 1);

    // One application per job and user.
    assert!(
        repo.create_application(&NewApplication {
            public_id: PublicId::new(),
            job_id: job.id,
            user_id: alice.id,
            full_name: "Alice Cooper".into(),
            email: "alice@example.com".into(),
            phone: None,
            resume_url: None,
            cover_letter: None,
        })
        .is_err()
    );
}

#[test]
fn test_user_repository_crud() {
    let test_db = common::TestDb::new("test_user_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    let alice = repo
        .create_user(&new_user("alice@example.com", UserRole::Candidate))
        .unwrap();
    repo.create_user(&new_user("bob@example.com", UserRole::Recruiter))
        .unwrap();

    let by_email = repo.get_user_by_email("alice@example.com").unwrap();
    assert_eq!(by_email.map(|u| u.id), Some(alice.id));

    let (recruiter_total, recruiters) = repo
        .list_users(UserListQuery::new().role(UserRole::Recruiter))
        .unwrap();
    assert_eq!(recruiter_total, 1);
    assert_eq!(recruiters[0].email, "bob@example.com");

    let (search_total, _) = repo
        .list_users(UserListQuery::new().search("alice"))
        .unwrap();
    assert_eq!(search_total, 1);

    let promoted = repo.set_user_role(alice.id, UserRole::Admin).unwrap();
    assert_eq!(promoted.role, UserRole::Admin);

    repo.delete_user(alice.id).unwrap();
    assert!(repo.get_user_by_id(alice.id).unwrap().is_none());
    assert!(matches!(
        repo.delete_user(alice.id),
        Err(RepositoryError::NotFound)
    ));
}

#[test]
fn test_taxonomy_repository_crud() {
    let test_db = common::TestDb::new("test_taxonomy_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    repo.create_taxonomy_entry(TaxonomyKind::Skills, "Rust")
        .unwrap();
    repo.create_taxonomy_entry(TaxonomyKind::Skills, "Diesel")
        .unwrap();

    let skills = repo.list_taxonomy(TaxonomyKind::Skills).unwrap();
    let names: Vec<&str> = skills.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Diesel", "Rust"]);

    repo.create_salary_range(&NewSalaryRange {
        label: "80k-100k".into(),
        min_amount: 80_000,
        max_amount: 100_000,
    })
    .unwrap();
    repo.create_salary_range(&NewSalaryRange {
        label: "40k-60k".into(),
        min_amount: 40_000,
        max_amount: 60_000,
    })
    .unwrap();

    let ranges = repo.list_salary_ranges().unwrap();
    assert_eq!(ranges[0].label, "40k-60k");

    // Salary brackets carry amounts and cannot be created as plain entries.
    assert!(matches!(
        repo.create_taxonomy_entry(TaxonomyKind::Salaries, "90k"),
        Err(RepositoryError::ValidationError(_))
    ));

    let salaries = repo.list_taxonomy(TaxonomyKind::Salaries).unwrap();
    assert_eq!(salaries.len(), 2);
    assert_eq!(salaries[0].name, "40k-60k");

    let entry_id = skills[0].id;
    repo.delete_taxonomy_entry(TaxonomyKind::Skills, entry_id)
        .unwrap();
    assert_eq!(repo.list_taxonomy(TaxonomyKind::Skills).unwrap().len(), 1);
    assert!(matches!(
        repo.delete_taxonomy_entry(TaxonomyKind::Skills, entry_id),
        Err(RepositoryError::NotFound)
    ));
}
