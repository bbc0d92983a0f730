//! Integration tests: real HTTP against a mock server, and scripted
//! multi-call flows against an in-memory transport.

pub mod mock_server;
pub mod scripted;

pub mod async_jobs;
pub mod dispatch;
pub mod pagination;
