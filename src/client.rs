//! Route dispatcher.
//!
//! [`TeamClient`] is the one generic entry point every route goes through;
//! [`TeamClientBuilder`] assembles it from a [`crate::config::ClientConfig`]
//! and an optional custom [`crate::transport::Transport`].

pub mod builder;
pub mod core;

pub use builder::TeamClientBuilder;
pub use core::{CallResult, TeamClient};
