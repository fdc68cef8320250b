//! HTTP boundary to the captioning service.

pub mod client;
pub mod protocol;

pub use client::ServiceClient;
pub use protocol::{FontEntry, FontsResponse, HostInfo, StatusResponse, StyleParams, SubmitResponse};
