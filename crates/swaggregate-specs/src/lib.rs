#![warn(missing_docs)]

//! Swaggregate Specification Aggregation
//!
//! Adds `#include:` directive support to swagger spec files: a root document
//! names further documents in comment lines, and the aggregator recursively
//! loads each one and merges its recognized top-level attributes into a
//! single namespace, in file order, with later documents overriding or
//! extending earlier ones.
//!
//! ```yaml
//! ---
//! #include: other_package/swagger.yaml
//! swagger: '2.0'
//! ```

pub mod aggregator;
pub mod error;
pub mod includes;
pub mod models;

pub use aggregator::SpecAggregator;
pub use error::SpecError;
pub use includes::IncludeScanner;
pub use models::SpecNamespace;
