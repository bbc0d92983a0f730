//! Daily usage reports. Every series holds one entry per day, `None` where
//! the server has no data.

use super::routes;
use super::TeamApi;
use crate::client::CallResult;
use serde::{Deserialize, Serialize};

/// Inclusive start, exclusive end, both `%Y-%m-%dT%H:%M:%SZ` timestamps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum DateRangeError {
    Other,
}

pub type DailySeries = Vec<Option<u64>>;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GetActivityReport {
    pub start_date: String,
    pub adds: DailySeries,
    pub edits: DailySeries,
    pub deletes: DailySeries,
    pub active_users_28_day: DailySeries,
    pub active_users_7_day: DailySeries,
    pub active_users_1_day: DailySeries,
    pub active_shared_folders_28_day: DailySeries,
    pub shared_links_created: DailySeries,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DevicesActive {
    pub windows: DailySeries,
    pub macos: DailySeries,
    pub linux: DailySeries,
    pub ios: DailySeries,
    pub android: DailySeries,
    pub other: DailySeries,
    pub total: DailySeries,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GetDevicesReport {
    pub start_date: String,
    pub active_1_day: DevicesActive,
    pub active_7_day: DevicesActive,
    pub active_28_day: DevicesActive,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GetMembershipReport {
    pub start_date: String,
    pub team_size: DailySeries,
    pub pending_invites: DailySeries,
    pub members_joined: DailySeries,
    pub suspended_members: DailySeries,
    pub licenses: DailySeries,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StorageBucket {
    pub bucket: String,
    pub users: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GetStorageReport {
    pub start_date: String,
    pub total_usage: DailySeries,
    pub shared_usage: DailySeries,
    pub unshared_usage: DailySeries,
    pub shared_folders: DailySeries,
    /// Per day, how many members fall into each storage bucket.
    pub member_storage_map: Vec<Vec<StorageBucket>>,
}

impl<'c> TeamApi<'c> {
    pub async fn reports_get_activity(&self, arg: &DateRange) -> CallResult<GetActivityReport, DateRangeError> {
        self.client.call(&routes::REPORTS_GET_ACTIVITY, arg).await
    }

    pub async fn reports_get_devices(&self, arg: &DateRange) -> CallResult<GetDevicesReport, DateRangeError> {
        self.client.call(&routes::REPORTS_GET_DEVICES, arg).await
    }

    pub async fn reports_get_membership(&self, arg: &DateRange) -> CallResult<GetMembershipReport, DateRangeError> {
        self.client.call(&routes::REPORTS_GET_MEMBERSHIP, arg).await
    }

    pub async fn reports_get_storage(&self, arg: &DateRange) -> CallResult<GetStorageReport, DateRangeError> {
        self.client.call(&routes::REPORTS_GET_STORAGE, arg).await
    }
}
