//! Search-request query builder
//!
//! Three independent parameter groups (equality filters, range comparisons,
//! sort order) accumulate behind one fluent builder and merge into a single
//! flat query-parameter map at serialization time.

pub mod filter;
pub mod param;
pub mod range;
pub mod request;
pub mod sort;

pub use filter::FilterBuilder;
pub use param::{DATE_FORMAT, ParamValue, RawParam, SearchParam};
pub use range::{RangeBuilder, RangeOperator, RangeTermBuilder};
pub use request::{SearchRequest, SearchRequestBuilder};
pub use sort::{SortBuilder, SortDirection};
