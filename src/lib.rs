//! # team-api-client
//!
//! Typed async client for a JSON-over-HTTPS team administration API:
//! groups, members, devices, linked apps, property templates and usage reports.
//!
//! ## Overview
//!
//! Every operation is a [`route::Route`] descriptor dispatched through one
//! generic function, [`TeamClient::call`]. The dispatcher encodes the
//! argument, posts it, and interprets the status code with a fixed contract:
//!
//! - `200`: the route's result type.
//! - `409`: the route's own error union, wrapped in [`ApiError`].
//! - `400`: the raw body as text, never parsed.
//! - anything else: the generic error envelope, as [`StatusError`].
//!
//! Two sub-protocols compose further round trips on top of single calls:
//! [`async_job`] for launch-and-poll operations and [`pagination`] for
//! cursor-based listings.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use team_api_client::team::members::MembersListArg;
//! use team_api_client::TeamClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TeamClient::builder().access_token("token").build()?;
//!
//!     let members = client.team().members_list_all(&MembersListArg::default()).await?;
//!     for m in members {
//!         println!("{} <{}>", m.profile.name.display_name, m.profile.email);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | The route dispatcher and its builder |
//! | [`route`] | Typed route descriptors |
//! | [`codec`] | JSON envelope encode/decode |
//! | [`status`] | HTTP status classification |
//! | [`error`] | Crate errors and the per-call error taxonomy |
//! | [`async_job`] | Launch results, poll results, job tracking |
//! | [`pagination`] | Cursors, list pages, list/continue driver |
//! | [`transport`] | Transport boundary and the reqwest implementation |
//! | [`config`] | Host, credential and connection settings |
//! | [`team`] | Routes and records of the `team` namespace |

pub mod async_job;
pub mod client;
pub mod codec;
pub mod config;
pub mod pagination;
pub mod route;
pub mod status;
pub mod team;
pub mod transport;

pub use async_job::{AsyncJob, JobError, JobState, LaunchResult, PollPolicy, PollResult};
pub use client::{CallResult, TeamClient, TeamClientBuilder};
pub use config::ClientConfig;
pub use pagination::{Cursor, ListPage, Pager};
pub use route::{Route, RouteInfo};
pub use status::StatusClass;
pub use team::TeamApi;
pub use transport::{HttpTransport, Transport, TransportError};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{ApiError, CallError, Error, ErrorContext, NoRouteError, ProtocolError, StatusError};
