//! Data models module
//!
//! Defines the status record written to the log, and how it is pulled
//! out of a `getstatus` response.

pub mod status;

pub use status::StatusRecord;
