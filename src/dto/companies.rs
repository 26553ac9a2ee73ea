use crate::domain::company::Company;
use crate::domain::job::Job;
use crate::dto::filters::FilterSection;
use crate::pagination::Paginated;

/// Data required to render a company list page (public or admin).
pub struct CompaniesPageData {
    pub companies: Paginated<Company>,
    pub sections: Vec<FilterSection>,
    pub filter_query: String,
}

/// Data required to render the company detail page.
pub struct CompanyPageData {
    pub company: Company,
    /// The company's open postings.
    pub jobs: Vec<Job>,
}
