//! Range comparison terms

use super::param::{ParamValue, SearchParam};
use super::request::SearchRequestBuilder;

/// Comparison operator; becomes the suffix of the wire key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeOperator {
    Gt,
    Gte,
    Lt,
    Lte,
}

impl RangeOperator {
    pub fn suffix(self) -> &'static str {
        match self {
            RangeOperator::Gt => "gt",
            RangeOperator::Gte => "gte",
            RangeOperator::Lt => "lt",
            RangeOperator::Lte => "lte",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RangeTerm {
    pub(crate) field: &'static str,
    pub(crate) op: RangeOperator,
    pub(crate) value: ParamValue,
}

/// Committed range terms, deduplicated on the full (field, operator, value)
/// triple.
#[derive(Debug, Clone, Default)]
pub(crate) struct RangeTerms {
    terms: Vec<RangeTerm>,
}

impl RangeTerms {
    pub(crate) fn insert(&mut self, term: RangeTerm) {
        if !self.terms.contains(&term) {
            self.terms.push(term);
        }
    }

    pub(crate) fn append_to(&self, out: &mut Vec<(String, String)>) {
        for term in &self.terms {
            if let Some(wire) = term.value.to_wire() {
                out.push((format!("{}_{}", term.field, term.op.suffix()), wire));
            }
        }
    }
}

/// Fluent range sub-builder; [`and`](RangeBuilder::and) returns to the
/// request builder.
#[derive(Debug)]
pub struct RangeBuilder {
    pub(crate) parent: SearchRequestBuilder,
}

impl RangeBuilder {
    /// Start a range term for `param`; pick the comparison with one of the
    /// terminal methods on the returned builder.
    pub fn by(self, param: impl SearchParam, value: impl Into<ParamValue>) -> RangeTermBuilder {
        RangeTermBuilder {
            owner: self,
            field: param.wire_name(),
            value: value.into(),
        }
    }

    /// Return to the request builder.
    pub fn and(self) -> SearchRequestBuilder {
        self.parent
    }
}

/// A pending range term holding field and value until an operator terminal
/// method commits it.
#[derive(Debug)]
pub struct RangeTermBuilder {
    owner: RangeBuilder,
    field: &'static str,
    value: ParamValue,
}

impl RangeTermBuilder {
    pub fn gt(self) -> RangeBuilder {
        self.commit(RangeOperator::Gt)
    }

    pub fn gte(self) -> RangeBuilder {
        self.commit(RangeOperator::Gte)
    }

    pub fn lt(self) -> RangeBuilder {
        self.commit(RangeOperator::Lt)
    }

    pub fn lte(self) -> RangeBuilder {
        self.commit(RangeOperator::Lte)
    }

    /// Commit with an explicit operator; the terminal methods are sugar over
    /// this.
    pub fn compared(self, op: RangeOperator) -> RangeBuilder {
        self.commit(op)
    }

    fn commit(self, op: RangeOperator) -> RangeBuilder {
        let mut owner = self.owner;
        owner.parent.range.insert(RangeTerm {
            field: self.field,
            op,
            value: self.value,
        });
        owner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::param::RawParam;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_range_key_composition() {
        let date = Utc.with_ymd_and_hms(2023, 4, 5, 0, 0, 0).unwrap();
        let request = SearchRequestBuilder::default()
            .range()
            .by(RawParam("created"), date)
            .gte()
            .and()
            .done();

        assert_eq!(
            request.query_params(),
            vec![("created_gte".to_string(), "2023-04-05T00:00:00.000".to_string())]
        );
    }

    #[test]
    fn test_two_operators_on_same_field_are_independent() {
        let from = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        let to = Utc.with_ymd_and_hms(2023, 12, 31, 0, 0, 0).unwrap();
        let request = SearchRequestBuilder::default()
            .range()
            .by(RawParam("created"), from)
            .gte()
            .by(RawParam("created"), to)
            .lte()
            .and()
            .done();

        let params = request.query_params();
        assert_eq!(params.len(), 2);
        assert_eq!(params[0].0, "created_gte");
        assert_eq!(params[1].0, "created_lte");
    }

    #[test]
    fn test_identical_triples_deduplicate() {
        let request = SearchRequestBuilder::default()
            .range()
            .by(RawParam("overlap"), 3i64)
            .gt()
            .by(RawParam("overlap"), 3i64)
            .gt()
            .and()
            .done();

        assert_eq!(
            request.query_params(),
            vec![("overlap_gt".to_string(), "3".to_string())]
        );
    }

    #[test]
    fn test_explicit_operator_matches_sugar() {
        let sugared = SearchRequestBuilder::default()
            .range()
            .by(RawParam("id"), "abc")
            .lt()
            .and()
            .done();
        let explicit = SearchRequestBuilder::default()
            .range()
            .by(RawParam("id"), "abc")
            .compared(RangeOperator::Lt)
            .and()
            .done();
        assert_eq!(sugared.query_params(), explicit.query_params());
    }
}
