//! Supported message types
//!
//! Each module declares the schema versions of one family, its
//! version-agnostic model and one path map per version era.

pub mod account_reporting_request;
pub mod endpoint_details_report;
pub mod return_request;

pub use account_reporting_request::{AccountReportingRequest, Camt060Version};
pub use endpoint_details_report::{Camt052Version, EndpointDetailsReport};
pub use return_request::{Camt056Version, ReturnRequest};
