//! Data-driven filter panels shared by every list page.
//!
//! A page declares its sections as [`SectionDef`]s; the section builder in
//! `services::filters` resolves them against the taxonomy tables and the
//! current query into renderable [`FilterSection`]s. One Tera include renders
//! them all.

use serde::Serialize;

use crate::domain::taxonomy::TaxonomyKind;

/// Where a filter section's choices come from.
#[derive(Debug, Clone)]
pub enum OptionsSource {
    /// A fixed or precomputed `(value, label)` list.
    Static(Vec<(String, String)>),
    /// An admin-managed vocabulary looked up at render time.
    Dynamic(TaxonomyKind),
}

/// Declaration of one filter section on a list page.
#[derive(Debug, Clone)]
pub struct SectionDef {
    pub key: &'static str,
    pub label: &'static str,
    pub source: OptionsSource,
}

impl SectionDef {
    pub fn fixed(key: &'static str, label: &'static str, values: &[&str]) -> Self {
        Self {
            key,
            label,
            source: OptionsSource::Static(
                values
                    .iter()
                    .map(|v| (v.to_string(), v.to_string()))
                    .collect(),
            ),
        }
    }

    pub fn computed(key: &'static str, label: &'static str, pairs: Vec<(String, String)>) -> Self {
        Self {
            key,
            label,
            source: OptionsSource::Static(pairs),
        }
    }

    pub fn taxonomy(key: &'static str, label: &'static str, kind: TaxonomyKind) -> Self {
        Self {
            key,
            label,
            source: OptionsSource::Dynamic(kind),
        }
    }
}

/// One choice inside a rendered filter section.
#[derive(Debug, Clone, Serialize)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
    /// Query string of the view with this choice toggled.
    pub href: String,
}

/// A rendered filter section, ready for the shared include.
#[derive(Debug, Clone, Serialize)]
pub struct FilterSection {
    pub key: String,
    pub label: String,
    pub options: Vec<FilterOption>,
}
