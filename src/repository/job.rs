use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::domain::job::{Job, NewJob, UpdateJob};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, JobListQuery, JobReader, JobWriter};

/// Applies every set filter of the query to a boxed select on `jobs`.
fn filtered(query: &JobListQuery) -> crate::schema::jobs::BoxedQuery<'static, Sqlite> {
    use crate::schema::jobs;

    let mut q = jobs::table.into_boxed();
    if let Some(title) = &query.title {
        q = q.filter(jobs::title.like(format!("%{title}%")));
    }
    if let Some(location) = &query.location {
        q = q.filter(jobs::location.like(format!("%{location}%")));
    }
    if let Some(employment_type) = &query.employment_type {
        q = q.filter(jobs::employment_type.eq(employment_type.clone()));
    }
    if let Some(category) = &query.category {
        q = q.filter(jobs::category.eq(category.clone()));
    }
    if let Some(level) = &query.level {
        q = q.filter(jobs::level.eq(level.clone()));
    }
    if let Some(salary) = &query.salary {
        q = q.filter(jobs::salary.eq(salary.clone()));
    }
    if let Some(status) = query.status {
        q = q.filter(jobs::status.eq(status.as_str()));
    }
    if let Some(company_id) = query.company_id {
        q = q.filter(jobs::company_id.eq(company_id));
    }
    if let Some(company_ids) = &query.company_ids {
        q = q.filter(jobs::company_id.eq_any(company_ids.clone()));
    }
    q
}

impl JobReader for DieselRepository {
    fn get_job_by_id(&self, job_id: i32) -> RepositoryResult<Option<Job>> {
        use crate::models::job::Job as DbJob;
        use crate::schema::jobs;

        let mut conn = self.conn()?;
        let job = jobs::table
            .find(job_id)
            .first::<DbJob>(&mut conn)
            .optional()?;

        Ok(job.map(Into::into))
    }

    fn list_jobs(&self, query: JobListQuery) -> RepositoryResult<(usize, Vec<Job>)> {
        use crate::models::job::Job as DbJob;
        use crate::schema::jobs;

        let mut conn = self.conn()?;

        let total: i64 = filtered(&query).count().get_result(&mut conn)?;

        let mut items = filtered(&query).order(jobs::created_at.desc());
        if let Some(pagination) = &query.pagination {
            let page = pagination.page.max(1) as i64;
            let per_page = pagination.per_page as i64;
            items = items.limit(per_page).offset((page - 1) * per_page);
        }

        let jobs = items
            .load::<DbJob>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok((total as usize, jobs))
    }
}

impl JobWriter for DieselRepository {
    fn create_jobs(&self, new_jobs: &[NewJob]) -> RepositoryResult<usize> {
        use crate::models::job::NewJob as DbNewJob;
        use crate::schema::jobs;

        let mut conn = self.conn()?;
        let insertables: Vec<DbNewJob> = new_jobs.iter().map(Into::into).collect();
        let affected = diesel::insert_into(jobs::table)
            .values(&insertables)
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn update_job(&self, job_id: i32, updates: &UpdateJob) -> RepositoryResult<Job> {
        use crate::models::job::{Job as DbJob, UpdateJob as DbUpdateJob};
        use crate::schema::jobs;

        let mut conn = self.conn()?;
        let changes: DbUpdateJob = updates.into();
        let job = diesel::update(jobs::table.find(job_id))
            .set(&changes)
            .get_result::<DbJob>(&mut conn)?;

        Ok(job.into())
    }

    fn delete_job(&self, job_id: i32) -> RepositoryResult<()> {
        use crate::schema::jobs;

        let mut conn = self.conn()?;
        let affected = diesel::delete(jobs::table.find(job_id)).execute(&mut conn)?;
        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
