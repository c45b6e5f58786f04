//! # Deployment Query System
//!
//! Criteria-style querying over deployed form definition bundles, modeled
//! after ActiveRecord-flavored query builders: chain filters and ordering
//! on [`FormDeploymentQuery`], then finish with `list`, `list_page`,
//! `single_result` or `count` against any [`DeploymentQueryExecutor`].
//!
//! The module splits along the query lifecycle:
//! - [`predicate`] - committed filter conditions and their operators
//! - [`ordering`] - committed sort directives
//! - [`builder`] - the fluent accumulation state machine
//! - [`executor`] - the criteria snapshot handed to storage engines

pub mod builder;
pub mod executor;
pub mod ordering;
pub mod predicate;

pub use builder::FormDeploymentQuery;
pub use executor::{DeploymentCriteria, DeploymentQueryExecutor, Page};
pub use ordering::{OrderField, OrderSpec, SortDirection};
pub use predicate::{FilterOperator, Predicate, PredicateField};
