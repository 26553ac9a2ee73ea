//! Resolves declared filter sections against the taxonomy tables and the
//! current query.

use crate::dto::filters::{FilterOption, FilterSection, OptionsSource, SectionDef};
use crate::listing::ListQuery;
use crate::repository::TaxonomyReader;
use crate::services::ServiceResult;

/// Builds the renderable sections for one list page.
///
/// Every option link carries the query with that choice toggled, so the
/// template renders plain anchors and selection state stays in the URL.
pub fn build_sections<R>(
    repo: &R,
    defs: Vec<SectionDef>,
    query: &ListQuery,
) -> ServiceResult<Vec<FilterSection>>
where
    R: TaxonomyReader + ?Sized,
{
    let mut sections = Vec::with_capacity(defs.len());
    for def in defs {
        let pairs = match def.source {
            OptionsSource::Static(pairs) => pairs,
            OptionsSource::Dynamic(kind) => repo
                .list_taxonomy(kind)?
                .into_iter()
                .map(|entry| (entry.name.clone(), entry.name))
                .collect(),
        };

        let options = pairs
            .into_iter()
            .map(|(value, label)| {
                let selected = query.filters().get(def.key) == Some(value.as_str());
                let mut toggled = query.clone();
                toggled.set_filter(def.key, value.clone());
                FilterOption {
                    value,
                    label,
                    selected,
                    href: format!("?{}", toggled.to_query_string()),
                }
            })
            .collect();

        sections.push(FilterSection {
            key: def.key.to_string(),
            label: def.label.to_string(),
            options,
        });
    }
    Ok(sections)
}
