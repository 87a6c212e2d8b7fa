//! Core types shared across scandiff facilities
//!
//! - **Correlation**: `RequestId` tagging one comparison run in logs and errors
//! - **Schema constants**: canonical structured-logging field keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::RequestId;
