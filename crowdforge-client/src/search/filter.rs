//! Equality/inclusion filter terms

use super::param::{ParamValue, SearchParam};
use super::request::SearchRequestBuilder;

/// Accumulated filter terms. Insertion-ordered; one entry per field, last
/// write wins.
#[derive(Debug, Clone, Default)]
pub(crate) struct FilterTerms {
    terms: Vec<(&'static str, ParamValue)>,
}

impl FilterTerms {
    pub(crate) fn insert(&mut self, name: &'static str, value: ParamValue) {
        if let Some(slot) = self.terms.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value;
        } else {
            self.terms.push((name, value));
        }
    }

    pub(crate) fn append_to(&self, out: &mut Vec<(String, String)>) {
        for (name, value) in &self.terms {
            if let Some(wire) = value.to_wire() {
                out.push(((*name).to_string(), wire));
            }
        }
    }
}

/// Fluent filter sub-builder; [`and`](FilterBuilder::and) returns to the
/// request builder.
#[derive(Debug)]
pub struct FilterBuilder {
    pub(crate) parent: SearchRequestBuilder,
}

impl FilterBuilder {
    /// Add an equality filter for `param`. A second call for the same field
    /// overwrites the first.
    pub fn by(mut self, param: impl SearchParam, value: impl Into<ParamValue>) -> Self {
        self.parent.filter.insert(param.wire_name(), value.into());
        self
    }

    /// Return to the request builder.
    pub fn and(self) -> SearchRequestBuilder {
        self.parent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::param::RawParam;

    #[test]
    fn test_last_write_wins_per_field() {
        let mut terms = FilterTerms::default();
        terms.insert("status", ParamValue::from("OPEN"));
        terms.insert("owner", ParamValue::from("me"));
        terms.insert("status", ParamValue::from("CLOSED"));

        let mut out = Vec::new();
        terms.append_to(&mut out);
        assert_eq!(
            out,
            vec![
                ("status".to_string(), "CLOSED".to_string()),
                ("owner".to_string(), "me".to_string()),
            ]
        );
    }

    #[test]
    fn test_null_values_are_dropped() {
        let mut terms = FilterTerms::default();
        terms.insert("status", ParamValue::Null);
        terms.insert("owner", ParamValue::from("me"));

        let mut out = Vec::new();
        terms.append_to(&mut out);
        assert_eq!(out, vec![("owner".to_string(), "me".to_string())]);
    }

    #[test]
    fn test_fluent_chain_returns_parent() {
        let request = SearchRequestBuilder::default()
            .filter()
            .by(RawParam("status"), "OPEN")
            .and()
            .done();
        assert_eq!(
            request.query_params(),
            vec![("status".to_string(), "OPEN".to_string())]
        );
    }
}
