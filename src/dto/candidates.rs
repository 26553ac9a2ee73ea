use crate::domain::application::Application;
use crate::dto::filters::FilterSection;
use crate::pagination::Paginated;

/// Data required to render the recruiter candidate list.
pub struct CandidatesPageData {
    pub applications: Paginated<Application>,
    pub sections: Vec<FilterSection>,
    pub filter_query: String,
}
