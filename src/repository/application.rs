use diesel::prelude::*;

use crate::domain::application::{Application, ApplicationStatus, NewApplication};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    ApplicationListQuery, ApplicationReader, ApplicationWriter, DieselRepository,
};

/// Builds the filtered select over `applications` joined to `jobs`.
///
/// The join is unconditional so recruiter company scoping can filter on
/// `jobs.company_id`; every application references a job.
macro_rules! filtered {
    ($query:expr) => {{
        use crate::schema::{applications, jobs};

        let mut q = applications::table
            .inner_join(jobs::table)
            .select(applications::all_columns)
            .into_boxed();
        if let Some(search) = &$query.search {
            let pattern = format!("%{search}%");
            q = q.filter(
                applications::full_name
                    .like(pattern.clone())
                    .or(applications::email.like(pattern)),
            );
        }
        if let Some(job_id) = $query.job_id {
            q = q.filter(applications::job_id.eq(job_id));
        }
        if let Some(company_ids) = &$query.company_ids {
            q = q.filter(jobs::company_id.eq_any(company_ids.clone()));
        }
        if let Some(status) = $query.status {
            q = q.filter(applications::status.eq(status.as_str()));
        }
        q
    }};
}

impl ApplicationReader for DieselRepository {
    fn get_application_by_id(&self, application_id: i32) -> RepositoryResult<Option<Application>> {
        use crate::models::application::Application as DbApplication;
        use crate::schema::applications;

        let mut conn = self.conn()?;
        let application = applications::table
            .find(application_id)
            .first::<DbApplication>(&mut conn)
            .optional()?;

        Ok(application.map(Into::into))
    }

    fn list_applications(
        &self,
        query: ApplicationListQuery,
    ) -> RepositoryResult<(usize, Vec<Application>)> {
        use crate::models::application::Application as DbApplication;
        use crate::schema::applications;

        let mut conn = self.conn()?;

        let total: i64 = filtered!(&query)
            .count()
            .get_result(&mut conn)?;

        let mut items = filtered!(&query).order(applications::created_at.desc());
        if let Some(pagination) = &query.pagination {
            let page = pagination.page.max(1) as i64;
            let per_page = pagination.per_page as i64;
            items = items.limit(per_page).offset((page - 1) * per_page);
        }

        let applications = items
            .load::<DbApplication>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok((total as usize, applications))
    }

    fn application_exists(&self, job_id: i32, user_id: i32) -> RepositoryResult<bool> {
        use crate::schema::applications;

        let mut conn = self.conn()?;
        let count: i64 = applications::table
            .filter(applications::job_id.eq(job_id))
            .filter(applications::user_id.eq(user_id))
            .count()
            .get_result(&mut conn)?;

        Ok(count > 0)
    }
}

impl ApplicationWriter for DieselRepository {
    fn create_application(&self, application: &NewApplication) -> RepositoryResult<Application> {
        use crate::models::application::{
            Application as DbApplication, NewApplication as DbNewApplication,
        };
        use crate::schema::applications;

        let mut conn = self.conn()?;
        let insertable: DbNewApplication = application.into();
        let created = diesel::insert_into(applications::table)
            .values(&insertable)
            .get_result::<DbApplication>(&mut conn)?;

        Ok(created.into())
    }

    fn update_application_status(
        &self,
        application_id: i32,
        status: ApplicationStatus,
    ) -> RepositoryResult<Application> {
        use crate::models::application::Application as DbApplication;
        use crate::schema::applications;

        let mut conn = self.conn()?;
        let application = diesel::update(applications::table.find(application_id))
            .set(applications::status.eq(status.as_str()))
            .get_result::<DbApplication>(&mut conn)?;

        Ok(application.into())
    }
}
