//! Sort order terms

use super::param::SearchParam;
use super::request::SearchRequestBuilder;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Insertion-ordered sort fields. Field order is significant on the wire:
/// earlier fields break ties for later ones.
#[derive(Debug, Clone, Default)]
pub(crate) struct SortTerms {
    terms: Vec<(&'static str, SortDirection)>,
}

impl SortTerms {
    pub(crate) fn push(&mut self, name: &'static str, direction: SortDirection) {
        if let Some(slot) = self.terms.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = direction;
        } else {
            self.terms.push((name, direction));
        }
    }

    /// Comma-joined field list, descending fields prefixed with `-`. `None`
    /// when no sort was requested (the key is omitted, not sent empty).
    pub(crate) fn to_param(&self) -> Option<String> {
        if self.terms.is_empty() {
            return None;
        }
        let joined = self
            .terms
            .iter()
            .map(|(name, direction)| match direction {
                SortDirection::Ascending => (*name).to_string(),
                SortDirection::Descending => format!("-{name}"),
            })
            .collect::<Vec<_>>()
            .join(",");
        Some(joined)
    }
}

/// Fluent sort sub-builder; [`and`](SortBuilder::and) returns to the request
/// builder.
#[derive(Debug)]
pub struct SortBuilder {
    pub(crate) parent: SearchRequestBuilder,
}

impl SortBuilder {
    /// Sort ascending by `param`.
    pub fn by(self, param: impl SearchParam) -> Self {
        self.by_direction(param, SortDirection::Ascending)
    }

    /// Sort descending by `param`.
    pub fn by_desc(self, param: impl SearchParam) -> Self {
        self.by_direction(param, SortDirection::Descending)
    }

    pub fn by_direction(mut self, param: impl SearchParam, direction: SortDirection) -> Self {
        self.parent.sort.push(param.wire_name(), direction);
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

    #[test]
    fn test_descending_then_ascending_serialization() {
        let mut terms = SortTerms::default();
        terms.push("created", SortDirection::Descending);
        terms.push("id", SortDirection::Ascending);
        assert_eq!(terms.to_param().unwrap(), "-created,id");
    }

    #[test]
    fn test_empty_sort_is_absent() {
        assert_eq!(SortTerms::default().to_param(), None);
    }

    #[test]
    fn test_repeated_field_keeps_position_updates_direction() {
        let mut terms = SortTerms::default();
        terms.push("created", SortDirection::Ascending);
        terms.push("id", SortDirection::Ascending);
        terms.push("created", SortDirection::Descending);
        assert_eq!(terms.to_param().unwrap(), "-created,id");
    }
}
