use actix_multipart::form::{MultipartForm, tempfile::TempFile};
use serde::Deserialize;
use validator::Validate;

use crate::domain::job::{EMPLOYMENT_TYPES, JobStatus, NewJob, UpdateJob};
use crate::domain::types::{JobDescription, JobTitle, TypeConstraintError};

fn employment_type(value: &str) -> Result<String, TypeConstraintError> {
    if EMPLOYMENT_TYPES.contains(&value) {
        Ok(value.to_string())
    } else {
        Err(TypeConstraintError::InvalidValue(value.to_string()))
    }
}

#[derive(Deserialize, Validate)]
/// Form data for adding a job posting.
pub struct AddJobForm {
    pub company_id: i32,
    #[validate(length(min = 1))]
    pub title: String,
    /// Rich-text HTML produced by the external editor; sanitized on convert.
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(length(min = 1))]
    pub location: String,
    pub employment_type: String,
    pub category: String,
    pub level: String,
    pub salary: String,
    pub status: String,
}

impl AddJobForm {
    pub fn to_new_job(&self) -> Result<NewJob, TypeConstraintError> {
        Ok(NewJob {
            company_id: self.company_id,
            title: JobTitle::new(self.title.trim())?.into_inner(),
            description: JobDescription::new(self.description.as_str())?.into_inner(),
            location: self.location.trim().to_string(),
            employment_type: employment_type(&self.employment_type)?,
            category: self.category.clone(),
            level: self.level.clone(),
            salary: self.salary.clone(),
            status: JobStatus::try_from(self.status.as_str())?,
        })
    }
}

#[derive(Deserialize, Validate)]
/// Form data for updating an existing job posting.
pub struct UpdateJobForm {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(length(min = 1))]
    pub location: String,
    pub employment_type: String,
    pub category: String,
    pub level: String,
    pub salary: String,
    pub status: String,
}

impl UpdateJobForm {
    pub fn to_update_job(&self) -> Result<UpdateJob, TypeConstraintError> {
        Ok(UpdateJob {
            title: JobTitle::new(self.title.trim())?.into_inner(),
            description: JobDescription::new(self.description.as_str())?.into_inner(),
            location: self.location.trim().to_string(),
            employment_type: employment_type(&self.employment_type)?,
            category: self.category.clone(),
            level: self.level.clone(),
            salary: self.salary.clone(),
            status: JobStatus::try_from(self.status.as_str())?,
        })
    }
}

/// One row of the bulk-upload CSV. `status` defaults to `draft` so imported
/// postings never go live unreviewed.
#[derive(Deserialize)]
struct JobCsvRecord {
    title: String,
    description: String,
    location: String,
    employment_type: String,
    category: String,
    level: String,
    salary: String,
    #[serde(default)]
    status: Option<String>,
}

#[derive(MultipartForm)]
pub struct UploadJobsForm {
    #[multipart(limit = "10MB")]
    pub csv: TempFile,
}

impl UploadJobsForm {
    /// Parses the uploaded CSV into job payloads for the given company.
    pub fn parse(&mut self, company_id: i32) -> Result<Vec<NewJob>, Box<dyn std::error::Error>> {
        let mut reader = csv::Reader::from_reader(self.csv.file.as_file());
        let mut jobs = Vec::new();

        for result in reader.deserialize() {
            let record: JobCsvRecord = result?;
            let status = match record.status.as_deref() {
                Some(value) if !value.is_empty() => JobStatus::try_from(value)?,
                _ => JobStatus::Draft,
            };
            jobs.push(NewJob {
                company_id,
                title: JobTitle::new(record.title.trim())?.into_inner(),
                description: JobDescription::new(record.description.as_str())?.into_inner(),
                location: record.location.trim().to_string(),
                employment_type: employment_type(&record.employment_type)?,
                category: record.category,
                level: record.level,
                salary: record.salary,
                status,
            });
        }

        Ok(jobs)
    }
}
