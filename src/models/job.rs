use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::job::{
    Job as DomainJob, JobStatus, NewJob as DomainNewJob, UpdateJob as DomainUpdateJob,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::jobs)]
/// Diesel model for [`crate::domain::job::Job`].
pub struct Job {
    pub id: i32,
    pub company_id: i32,
    pub title: String,
    pub description: String,
    pub location: String,
    pub employment_type: String,
    pub category: String,
    pub level: String,
    pub salary: String,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::jobs)]
/// Insertable form of [`Job`].
pub struct NewJob<'a> {
    pub company_id: i32,
    pub title: &'a str,
    pub description: &'a str,
    pub location: &'a str,
    pub employment_type: &'a str,
    pub category: &'a str,
    pub level: &'a str,
    pub salary: &'a str,
    pub status: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::jobs)]
/// Data used when updating a [`Job`] record.
pub struct UpdateJob<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub location: &'a str,
    pub employment_type: &'a str,
    pub category: &'a str,
    pub level: &'a str,
    pub salary: &'a str,
    pub status: &'a str,
    pub updated_at: NaiveDateTime,
}

impl From<Job> for DomainJob {
    fn from(job: Job) -> Self {
        Self {
            id: job.id,
            company_id: job.company_id,
            title: job.title,
            description: job.description,
            location: job.location,
            employment_type: job.employment_type,
            category: job.category,
            level: job.level,
            salary: job.salary,
            // Rows written before a vocabulary change stay hidden.
            status: JobStatus::try_from(job.status.as_str()).unwrap_or(JobStatus::Draft),
            created_at: job.created_at,
            updated_at: job.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewJob> for NewJob<'a> {
    fn from(job: &'a DomainNewJob) -> Self {
        Self {
            company_id: job.company_id,
            title: &job.title,
            description: &job.description,
            location: &job.location,
            employment_type: &job.employment_type,
            category: &job.category,
            level: &job.level,
            salary: &job.salary,
            status: job.status.as_str(),
        }
    }
}

impl<'a> From<&'a DomainUpdateJob> for UpdateJob<'a> {
    fn from(job: &'a DomainUpdateJob) -> Self {
        Self {
            title: &job.title,
            description: &job.description,
            location: &job.location,
            employment_type: &job.employment_type,
            category: &job.category,
            level: &job.level,
            salary: &job.salary,
            status: job.status.as_str(),
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn job_into_domain_parses_status() {
        let now = Utc::now().naive_utc();
        let db_job = Job {
            id: 1,
            company_id: 2,
            title: "Backend Engineer".into(),
            description: "<p>Rust</p>".into(),
            location: "Hanoi".into(),
            employment_type: "full-time".into(),
            category: "Engineering".into(),
            level: "Senior".into(),
            salary: "$2000-$3000".into(),
            status: "open".into(),
            created_at: now,
            updated_at: now,
        };
        let domain: DomainJob = db_job.into();
        assert_eq!(domain.status, JobStatus::Open);
        assert_eq!(domain.title, "Backend Engineer");
    }

    #[test]
    fn unknown_status_degrades_to_draft() {
        let now = Utc::now().naive_utc();
        let db_job = Job {
            id: 1,
            company_id: 2,
            title: "t".into(),
            description: "d".into(),
            location: "l".into(),
            employment_type: "full-time".into(),
            category: "c".into(),
            level: "lv".into(),
            salary: "s".into(),
            status: "bogus".into(),
            created_at: now,
            updated_at: now,
        };
        let domain: DomainJob = db_job.into();
        assert_eq!(domain.status, JobStatus::Draft);
    }
}
