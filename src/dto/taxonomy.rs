use crate::domain::taxonomy::{SalaryRange, TaxonomyEntry, TaxonomyKind};

/// One vocabulary block on the admin taxonomy page.
pub struct TaxonomySection {
    pub kind: TaxonomyKind,
    pub entries: Vec<TaxonomyEntry>,
}

/// Data required to render the admin taxonomy page.
pub struct TaxonomyPageData {
    pub sections: Vec<TaxonomySection>,
    pub salary_ranges: Vec<SalaryRange>,
}
