use serde::Deserialize;
use validator::Validate;

use crate::domain::application::NewApplication;
use crate::domain::types::{
    EmailAddress, NonEmptyString, PhoneNumber, PublicId, ResumeUrl, TypeConstraintError,
};

#[derive(Deserialize, Validate)]
/// Form data for applying to a job posting.
pub struct ApplyForm {
    #[validate(length(min = 1))]
    pub full_name: String,
    #[validate(email)]
    pub email: String,
    pub phone: Option<String>,
    #[validate(url)]
    pub resume_url: Option<String>,
    pub cover_letter: Option<String>,
}

impl ApplyForm {
    /// Converts the form into an application payload, normalizing the phone
    /// to E.164 and validating the resume link.
    pub fn to_new_application(
        &self,
        job_id: i32,
        user_id: i32,
    ) -> Result<NewApplication, TypeConstraintError> {
        let phone = self
            .phone
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(|p| PhoneNumber::new(p).map(PhoneNumber::into_inner))
            .transpose()?;
        let resume_url = self
            .resume_url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .map(|u| ResumeUrl::new(u).map(ResumeUrl::into_inner))
            .transpose()?;
        let cover_letter = self
            .cover_letter
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string);

        Ok(NewApplication {
            public_id: PublicId::new(),
            job_id,
            user_id,
            full_name: NonEmptyString::new(self.full_name.trim())?.into_inner(),
            email: EmailAddress::new(self.email.trim())?.into_inner(),
            phone,
            resume_url,
            cover_letter,
        })
    }
}

#[derive(Deserialize)]
/// Form data for moving an application through the review pipeline.
pub struct SetStatusForm {
    pub status: String,
}
