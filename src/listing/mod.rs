//! Shared machinery behind every filterable, paginated list view.
//!
//! Each list page (job search, company search, candidate list, admin tables)
//! keeps its state in a [`ListQuery`]: the active filter values plus the
//! current page. The query string of the page URL is the only serialized form
//! of that state, so any view is bookmarkable and reproducible from the
//! address bar alone.

use std::collections::BTreeMap;

use serde::Serialize;

pub mod debounce;
pub mod fetch;

/// Query-string key carrying the page number.
pub const PAGE_KEY: &str = "page";

/// Active filter values for one list view.
///
/// A key is either present with a non-empty value or absent entirely; there is
/// no "set to empty" state. This keeps the serialized query string free of
/// `key=` noise and makes removal observable in the URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterSet {
    values: BTreeMap<String, String>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored value for `key`, if the filter is set.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Stores `value` under `key`.
    ///
    /// Setting the value that is already stored unsets the key instead: the
    /// UI renders every choice as a link carrying `set(key, choice)`, so
    /// clicking the active choice again deselects it. Empty values unset the
    /// key as well.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if value.is_empty() || self.values.get(&key) == Some(&value) {
            self.values.remove(&key);
        } else {
            self.values.insert(key, value);
        }
    }

    /// Applies a batch of key/value pairs as one atomic update.
    ///
    /// Unlike [`FilterSet::set`] this never toggles: the batch states the
    /// desired end value per key, with empty meaning unset.
    pub fn set_many<K, V>(&mut self, entries: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in entries {
            let key = key.into();
            let value = value.into();
            if value.is_empty() {
                self.values.remove(&key);
            } else {
                self.values.insert(key, value);
            }
        }
    }

    /// Unsets a single key, leaving the rest untouched.
    pub fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }

    /// Unsets every key.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Iterates over the set keys and their values in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Parses the set filters out of a raw query string.
    ///
    /// Only keys listed in `recognized` are kept; anything else in the query
    /// string, including a stray `page`, is ignored here. Empty values count
    /// as unset. Malformed input yields an empty set rather than an error —
    /// a garbled URL degrades to the unfiltered view.
    pub fn parse(query: &str, recognized: &[&str]) -> Self {
        let pairs: Vec<(String, String)> = serde_html_form::from_str(query).unwrap_or_default();
        let mut filters = Self::new();
        for (key, value) in pairs {
            if recognized.contains(&key.as_str()) && !value.is_empty() {
                filters.values.insert(key, value);
            }
        }
        filters
    }

    /// Serializes the set filters as percent-encoded `key=value` pairs.
    ///
    /// Unset keys are absent from the output, so round-tripping through
    /// [`FilterSet::parse`] reproduces the same set.
    pub fn to_query_string(&self) -> String {
        serde_html_form::to_string(self.values.iter().collect::<Vec<_>>()).unwrap_or_default()
    }
}

/// Filter state plus the 1-based page cursor for one list view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    filters: FilterSet,
    page: usize,
}

impl ListQuery {
    pub fn new() -> Self {
        Self {
            filters: FilterSet::new(),
            page: 1,
        }
    }

    /// Reconstructs the query from a URL query string.
    ///
    /// Recognized filter keys seed the filter set; a numeric `page` parameter
    /// seeds the cursor, anything else (missing, zero, garbage) means page 1.
    pub fn parse(query: &str, recognized: &[&str]) -> Self {
        let filters = FilterSet::parse(query, recognized);
        let pairs: Vec<(String, String)> = serde_html_form::from_str(query).unwrap_or_default();
        let page = pairs
            .iter()
            .find(|(key, _)| key == PAGE_KEY)
            .and_then(|(_, value)| value.parse::<usize>().ok())
            .filter(|page| *page >= 1)
            .unwrap_or(1);
        Self { filters, page }
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Moves the cursor without touching the filters.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Sets one filter with toggle semantics and resets the cursor.
    ///
    /// Any filter change invalidates the old page's relevance, so the cursor
    /// always returns to 1.
    pub fn set_filter(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.filters.set(key, value);
        self.page = 1;
    }

    /// Applies a batch of filter values atomically with a single page reset.
    pub fn set_filters<K, V>(&mut self, entries: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.filters.set_many(entries);
        self.page = 1;
    }

    /// Unsets a single filter and resets the cursor.
    pub fn remove_filter(&mut self, key: &str) {
        self.filters.remove(key);
        self.page = 1;
    }

    /// Unsets every filter and resets the cursor.
    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.page = 1;
    }

    /// Serializes filters plus `page` into a query string.
    ///
    /// The page is always present so the string is a complete serialization
    /// of the view state.
    pub fn to_query_string(&self) -> String {
        let mut pairs: Vec<(&str, String)> = self
            .filters
            .iter()
            .map(|(k, v)| (k, v.to_string()))
            .collect();
        pairs.push((PAGE_KEY, self.page.to_string()));
        serde_html_form::to_string(&pairs).unwrap_or_default()
    }

    /// The query string this view would have on a given page, filters intact.
    ///
    /// Used by pagination links, which move the cursor without a page reset.
    pub fn query_string_for_page(&self, page: usize) -> String {
        let mut other = self.clone();
        other.set_page(page);
        other.to_query_string()
    }
}

impl From<FilterSet> for ListQuery {
    fn from(filters: FilterSet) -> Self {
        Self { filters, page: 1 }
    }
}

/// One page of results as returned by a listing backend.
///
/// Replaced wholesale on every successful fetch; there are no append/merge
/// semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListResult<T> {
    pub items: Vec<T>,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> ListResult<T> {
    pub fn new(items: Vec<T>, total_items: usize, total_pages: usize) -> Self {
        Self {
            items,
            total_items,
            total_pages,
        }
    }

    /// The zero-item result rendered as the "no results" state.
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_items: 0,
            total_pages: 0,
        }
    }

    /// Builds a result from a repository-style `(total, items)` pair.
    pub fn from_total(items: Vec<T>, total: usize, per_page: usize) -> Self {
        let total_pages = if per_page == 0 {
            0
        } else {
            total.div_ceil(per_page)
        };
        Self {
            items,
            total_items: total,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEYS: &[&str] = &["jobTitle", "location", "employmentType"];

    #[test]
    fn set_then_set_same_value_unsets() {
        let mut filters = FilterSet::new();
        filters.set("companySize", "5");
        assert_eq!(filters.get("companySize"), Some("5"));
        filters.set("companySize", "5");
        assert_eq!(filters.get("companySize"), None);
    }

    #[test]
    fn empty_value_unsets() {
        let mut filters = FilterSet::new();
        filters.set("location", "Hanoi");
        filters.set("location", "");
        assert!(filters.is_empty());
    }

    #[test]
    fn unrecognized_keys_are_ignored_on_parse() {
        let filters = FilterSet::parse("jobTitle=rust&evil=1&page=3", KEYS);
        assert_eq!(filters.len(), 1);
        assert_eq!(filters.get("jobTitle"), Some("rust"));
    }

    #[test]
    fn serialized_form_omits_unset_keys() {
        let mut filters = FilterSet::new();
        filters.set("jobTitle", "engineer");
        filters.set("location", "Hanoi");
        filters.remove("location");
        let qs = filters.to_query_string();
        assert_eq!(qs, "jobTitle=engineer");
        assert!(!qs.contains("location"));
    }

    #[test]
    fn query_round_trips_with_page() {
        let mut query = ListQuery::new();
        query.set_filters([("jobTitle", "engineer"), ("location", "Hanoi")]);
        query.set_page(2);

        let qs = query.to_query_string();
        let reparsed = ListQuery::parse(&qs, KEYS);

        assert_eq!(reparsed, query);
        assert_eq!(reparsed.page(), 2);
    }

    #[test]
    fn filter_change_resets_page() {
        let mut query = ListQuery::parse("jobTitle=rust&page=3", KEYS);
        assert_eq!(query.page(), 3);
        query.set_filter("location", "Hanoi");
        assert_eq!(query.page(), 1);

        query.set_page(4);
        query.remove_filter("location");
        assert_eq!(query.page(), 1);
    }

    #[test]
    fn invalid_page_defaults_to_one() {
        assert_eq!(ListQuery::parse("page=0", KEYS).page(), 1);
        assert_eq!(ListQuery::parse("page=abc", KEYS).page(), 1);
        assert_eq!(ListQuery::parse("", KEYS).page(), 1);
    }

    #[test]
    fn values_are_percent_encoded() {
        let mut query = ListQuery::new();
        query.set_filter("jobTitle", "backend engineer");
        let qs = query.to_query_string();
        assert_eq!(qs, "jobTitle=backend+engineer&page=1");
        assert_eq!(
            ListQuery::parse(&qs, KEYS).filters().get("jobTitle"),
            Some("backend engineer")
        );
    }

    #[test]
    fn from_total_computes_page_count() {
        let result = ListResult::from_total(vec![1, 2, 3], 41, 20);
        assert_eq!(result.total_items, 41);
        assert_eq!(result.total_pages, 3);
        assert_eq!(ListResult::<i32>::from_total(vec![], 0, 20).total_pages, 0);
    }
}
