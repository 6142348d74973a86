//! Client library for the Crowdforge crowdsourcing platform HTTP API.
//!
//! Provides typed request/response models, open-ended enums that tolerate
//! server-added values, a filter/range/sort search builder, and a
//! long-running-operation abstraction with polling waits.
//!
//! # Quick start
//!
//! ```no_run
//! use crowdforge_client::models::PoolField;
//! use crowdforge_client::{ClientConfig, CrowdforgeClient, SearchRequest};
//!
//! # async fn example() -> crowdforge_client::Result<()> {
//! let client = CrowdforgeClient::new(ClientConfig::new("api-token"))?;
//!
//! // Search open pools, newest first.
//! let request = SearchRequest::builder()
//!     .filter().by(PoolField::Status, "OPEN").and()
//!     .sort().by_desc(PoolField::Created).by(PoolField::Id).and()
//!     .limit(20)
//!     .done();
//! let page = client.pools().find(&request).await?;
//! println!("{} pools", page.items.len());
//!
//! // Fire a long-running action and wait for it.
//! let operation = client.pools().close_async("pool-id").await?;
//! operation.wait_and_get_successful().await?;
//! # Ok(())
//! # }
//! ```
//!
//! Single-resource GETs return `Ok(None)` for a missing id; deletes and
//! patches on a missing id fail with [`Error::NotFound`]. 502/503 responses
//! surface as [`Error::ServiceUnavailable`] so callers can layer their own
//! retry policy; the client itself never retries.

pub mod client;
pub mod config;
pub mod error;
pub mod flex;
pub mod models;
pub mod operations;
pub mod search;

pub use client::{
    AssignmentsClient, BatchCreateResult, CrowdforgeClient, ModificationResult, OperationsClient,
    PoolsClient, ProjectsClient, SearchResult, SkillsClient, TasksClient,
};
pub use config::ClientConfig;
pub use error::{Error, FieldError, Result};
pub use flex::FlexValue;
pub use operations::{
    Operation, OperationPoller, OperationStatus, OperationType, PSEUDO_ID, WaitOptions,
};
pub use search::{
    ParamValue, RangeOperator, RawParam, SearchParam, SearchRequest, SortDirection,
};
