use crate::domain::company::Company;
use crate::domain::job::Job;
use crate::dto::filters::FilterSection;
use crate::pagination::Paginated;

/// Data required to render a job list page (public board or dashboard).
pub struct JobsPageData {
    pub jobs: Paginated<Job>,
    pub sections: Vec<FilterSection>,
    /// Serialized filter state without the page, for pagination links.
    pub filter_query: String,
}

/// Data required to render the job detail page.
pub struct JobPageData {
    pub job: Job,
    pub company: Company,
    /// Whether the signed-in candidate already applied.
    pub already_applied: bool,
}
