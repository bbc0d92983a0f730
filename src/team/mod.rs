//! The `team` namespace: organization administration.
//!
//! Every route is a constant in [`routes`] and a thin async method on
//! [`TeamApi`]. The methods add nothing to the dispatch; they only pin the
//! argument, result and error types of each route.
//!
//! | Family | Routes |
//! |--------|--------|
//! | groups | create, delete, get_info, list, members add/list/remove, update, job status |
//! | members | add, get_info, list, recover, remove, suspend, unsuspend, profile, permissions |
//! | devices | member/team session listings, revocation |
//! | linked_apps | member/team app listings, revocation |
//! | properties | template add/get/list/update |
//! | reports | activity, devices, membership, storage |

pub mod common;
pub mod devices;
pub mod groups;
pub mod info;
pub mod linked_apps;
pub mod members;
pub mod properties;
pub mod reports;
pub mod routes;

pub use common::*;
pub use groups::{GroupMembersChangeResult, GroupsJob};
pub use info::TeamGetInfoResult;
pub use members::{MembersAddJob, MembersRemoveJob};

use crate::client::TeamClient;

/// Namespace segment of every route URL in this module.
pub const NAMESPACE: &str = "team";

/// Typed view of a [`TeamClient`] restricted to the `team` namespace.
#[derive(Debug, Clone, Copy)]
pub struct TeamApi<'c> {
    client: &'c TeamClient,
}

impl<'c> TeamApi<'c> {
    pub fn new(client: &'c TeamClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &'c TeamClient {
        self.client
    }
}
