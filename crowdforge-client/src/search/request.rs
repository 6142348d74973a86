//! Search request composition and serialization

use super::filter::{FilterBuilder, FilterTerms};
use super::range::{RangeBuilder, RangeTerms};
use super::sort::{SortBuilder, SortTerms};

/// An immutable filter+range+sort+limit specification for a list endpoint.
///
/// Built once through [`SearchRequest::builder`], consumed per call by the
/// resource clients.
#[derive(Debug, Clone, Default)]
pub struct SearchRequest {
    pub(crate) filter: FilterTerms,
    pub(crate) range: RangeTerms,
    pub(crate) sort: SortTerms,
    pub(crate) limit: Option<u32>,
}

impl SearchRequest {
    pub fn builder() -> SearchRequestBuilder {
        SearchRequestBuilder::default()
    }

    /// The flat query-parameter map: filter terms, then range terms, then
    /// `sort` and `limit`. Null-valued entries are omitted entirely.
    ///
    /// Filter and range keys never collide by construction; within the map
    /// only the field order inside the `sort` value is contractually
    /// significant.
    pub fn query_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        self.filter.append_to(&mut params);
        self.range.append_to(&mut params);
        if let Some(sort) = self.sort.to_param() {
            params.push(("sort".to_string(), sort));
        }
        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        params
    }
}

/// Top-level fluent builder; the `filter()`/`range()`/`sort()` sub-builders
/// return here through their `and()` methods.
#[derive(Debug, Default)]
pub struct SearchRequestBuilder {
    pub(crate) filter: FilterTerms,
    pub(crate) range: RangeTerms,
    pub(crate) sort: SortTerms,
    pub(crate) limit: Option<u32>,
}

impl SearchRequestBuilder {
    /// Enter the equality-filter sub-builder.
    pub fn filter(self) -> FilterBuilder {
        FilterBuilder { parent: self }
    }

    /// Enter the range-comparison sub-builder.
    pub fn range(self) -> RangeBuilder {
        RangeBuilder { parent: self }
    }

    /// Enter the sort-order sub-builder.
    pub fn sort(self) -> SortBuilder {
        SortBuilder { parent: self }
    }

    /// Cap the number of returned items.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Freeze the accumulated groups into an immutable request.
    pub fn done(self) -> SearchRequest {
        SearchRequest {
            filter: self.filter,
            range: self.range,
            sort: self.sort,
            limit: self.limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::param::{ParamValue, RawParam};
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_empty_request_has_no_params() {
        assert!(SearchRequest::default().query_params().is_empty());
        assert!(SearchRequest::builder().done().query_params().is_empty());
    }

    #[test]
    fn test_unset_limit_key_is_absent() {
        let request = SearchRequest::builder()
            .filter()
            .by(RawParam("status"), "OPEN")
            .and()
            .done();
        let params = request.query_params();
        assert!(params.iter().all(|(key, _)| key != "limit"));
    }

    #[test]
    fn test_groups_merge_in_order() {
        let date = Utc.with_ymd_and_hms(2023, 6, 1, 12, 0, 0).unwrap();
        let request = SearchRequest::builder()
            .filter()
            .by(RawParam("status"), "OPEN")
            .and()
            .range()
            .by(RawParam("created"), date)
            .gte()
            .and()
            .sort()
            .by_desc(RawParam("created"))
            .by(RawParam("id"))
            .and()
            .limit(50)
            .done();

        assert_eq!(
            request.query_params(),
            vec![
                ("status".to_string(), "OPEN".to_string()),
                ("created_gte".to_string(), "2023-06-01T12:00:00.000".to_string()),
                ("sort".to_string(), "-created,id".to_string()),
                ("limit".to_string(), "50".to_string()),
            ]
        );
    }

    #[test]
    fn test_null_filter_values_dropped_from_output() {
        let request = SearchRequest::builder()
            .filter()
            .by(RawParam("status"), ParamValue::Null)
            .by(RawParam("owner"), Some("me"))
            .by(RawParam("hidden"), None::<bool>)
            .and()
            .done();

        assert_eq!(
            request.query_params(),
            vec![("owner".to_string(), "me".to_string())]
        );
    }

    #[test]
    fn test_request_is_reusable_after_done() {
        let request = SearchRequest::builder().limit(10).done();
        let first = request.query_params();
        let second = request.query_params();
        assert_eq!(first, second);
    }
}
