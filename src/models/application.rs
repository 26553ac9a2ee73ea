use std::str::FromStr;

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::application::{
    Application as DomainApplication, ApplicationStatus, NewApplication as DomainNewApplication,
};
use crate::domain::types::PublicId;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::applications)]
/// Diesel model for [`crate::domain::application::Application`].
pub struct Application {
    pub id: i32,
    pub public_id: String,
    pub job_id: i32,
    pub user_id: i32,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub resume_url: Option<String>,
    pub cover_letter: Option<String>,
    pub status: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::applications)]
/// Insertable form of [`Application`].
pub struct NewApplication<'a> {
    pub public_id: String,
    pub job_id: i32,
    pub user_id: i32,
    pub full_name: &'a str,
    pub email: &'a str,
    pub phone: Option<&'a str>,
    pub resume_url: Option<&'a str>,
    pub cover_letter: Option<&'a str>,
    pub status: &'a str,
}

impl From<Application> for DomainApplication {
    fn from(application: Application) -> Self {
        Self {
            id: application.id,
            public_id: PublicId::from_str(&application.public_id).unwrap_or_default(),
            job_id: application.job_id,
            user_id: application.user_id,
            full_name: application.full_name,
            email: application.email,
            phone: application.phone,
            resume_url: application.resume_url,
            cover_letter: application.cover_letter,
            status: ApplicationStatus::try_from(application.status.as_str())
                .unwrap_or(ApplicationStatus::Submitted),
            created_at: application.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewApplication> for NewApplication<'a> {
    fn from(application: &'a DomainNewApplication) -> Self {
        Self {
            public_id: application.public_id.to_string(),
            job_id: application.job_id,
            user_id: application.user_id,
            full_name: &application.full_name,
            email: &application.email,
            phone: application.phone.as_deref(),
            resume_url: application.resume_url.as_deref(),
            cover_letter: application.cover_letter.as_deref(),
            status: ApplicationStatus::Submitted.as_str(),
        }
    }
}
