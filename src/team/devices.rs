//! Device sessions: listing per member or team-wide, and revocation.

use super::routes;
use super::TeamApi;
use crate::client::CallResult;
use crate::pagination::{self, ContinueArg, Cursor, ListPage, PageError, Paginated};
use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// Fields every session kind shares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceSession {
    pub session_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveWebSession {
    #[serde(flatten)]
    pub session: DeviceSession,
    pub user_agent: String,
    pub os: String,
    pub browser: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum DesktopPlatform {
    Windows,
    Mac,
    Linux,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopClientSession {
    #[serde(flatten)]
    pub session: DeviceSession,
    pub host_name: String,
    pub client_type: DesktopPlatform,
    pub client_version: String,
    pub platform: String,
    pub is_delete_on_unlink_supported: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum MobileClientPlatform {
    Iphone,
    Ipad,
    Android,
    WindowsPhone,
    Blackberry,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MobileClientSession {
    #[serde(flatten)]
    pub session: DeviceSession,
    pub device_name: String,
    pub client_type: MobileClientPlatform,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_carrier: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListMemberDevicesArg {
    pub team_member_id: String,
    #[serde(default = "default_true")]
    pub include_web_sessions: bool,
    #[serde(default = "default_true")]
    pub include_desktop_clients: bool,
    #[serde(default = "default_true")]
    pub include_mobile_clients: bool,
}

impl ListMemberDevicesArg {
    pub fn new(team_member_id: impl Into<String>) -> Self {
        Self {
            team_member_id: team_member_id.into(),
            include_web_sessions: true,
            include_desktop_clients: true,
            include_mobile_clients: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ListMemberDevicesResult {
    #[serde(default)]
    pub active_web_sessions: Option<Vec<ActiveWebSession>>,
    #[serde(default)]
    pub desktop_client_sessions: Option<Vec<DesktopClientSession>>,
    #[serde(default)]
    pub mobile_client_sessions: Option<Vec<MobileClientSession>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum ListMemberDevicesError {
    MemberNotFound,
    Other,
}

/// Argument of the team-wide device listings.
///
/// These routes page by sending the previous cursor back through the same
/// route instead of a separate continue route. A continuation built with
/// [`ContinueArg::continue_from`] keeps the session filters of the first call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListDevicesArg {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<Cursor>,
    #[serde(default = "default_true")]
    pub include_web_sessions: bool,
    #[serde(default = "default_true")]
    pub include_desktop_clients: bool,
    #[serde(default = "default_true")]
    pub include_mobile_clients: bool,
}

pub type ListMembersDevicesArg = ListDevicesArg;
pub type ListTeamDevicesArg = ListDevicesArg;

impl Default for ListDevicesArg {
    fn default() -> Self {
        Self {
            cursor: None,
            include_web_sessions: true,
            include_desktop_clients: true,
            include_mobile_clients: true,
        }
    }
}

impl ContinueArg for ListDevicesArg {
    fn from_cursor(cursor: Cursor) -> Self {
        Self {
            cursor: Some(cursor),
            ..Self::default()
        }
    }

    fn continue_from(&self, cursor: Cursor) -> Self {
        Self {
            cursor: Some(cursor),
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MemberDevices {
    pub team_member_id: String,
    #[serde(default)]
    pub web_sessions: Option<Vec<ActiveWebSession>>,
    #[serde(default)]
    pub desktop_clients: Option<Vec<DesktopClientSession>>,
    #[serde(default)]
    pub mobile_clients: Option<Vec<MobileClientSession>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListMembersDevicesResult {
    pub devices: Vec<MemberDevices>,
    pub has_more: bool,
    #[serde(default)]
    pub cursor: Option<Cursor>,
}

impl Paginated for ListMembersDevicesResult {
    type Item = MemberDevices;

    fn into_page(self) -> ListPage<MemberDevices> {
        ListPage {
            items: self.devices,
            cursor: self.cursor,
            has_more: self.has_more,
        }
    }
}

/// `devices/list_team_devices` answers with the same page shape.
pub type ListTeamDevicesResult = ListMembersDevicesResult;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum ListMembersDevicesError {
    /// The cursor expired; restart the listing without one.
    Reset,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum ListTeamDevicesError {
    Reset,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum RevokeDeviceSessionArg {
    WebSession {
        session_id: String,
        team_member_id: String,
    },
    DesktopClient {
        session_id: String,
        team_member_id: String,
        #[serde(default)]
        delete_on_unlink: bool,
    },
    MobileClient {
        session_id: String,
        team_member_id: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum RevokeDeviceSessionError {
    DeviceSessionNotFound,
    MemberNotFound,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevokeDeviceSessionBatchArg {
    pub revoke_devices: Vec<RevokeDeviceSessionArg>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RevokeDeviceSessionStatus {
    pub success: bool,
    #[serde(default)]
    pub error_type: Option<RevokeDeviceSessionError>,
}

/// One status per requested revocation, in request order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RevokeDeviceSessionBatchResult {
    pub revoke_devices_status: Vec<RevokeDeviceSessionStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum RevokeDeviceSessionBatchError {
    Other,
}

impl<'c> TeamApi<'c> {
    pub async fn devices_list_member_devices(
        &self,
        arg: &ListMemberDevicesArg,
    ) -> CallResult<ListMemberDevicesResult, ListMemberDevicesError> {
        self.client.call(&routes::DEVICES_LIST_MEMBER_DEVICES, arg).await
    }

    pub async fn devices_list_members_devices(
        &self,
        arg: &ListMembersDevicesArg,
    ) -> CallResult<ListMembersDevicesResult, ListMembersDevicesError> {
        self.client.call(&routes::DEVICES_LIST_MEMBERS_DEVICES, arg).await
    }

    pub async fn devices_list_team_devices(
        &self,
        arg: &ListTeamDevicesArg,
    ) -> CallResult<ListTeamDevicesResult, ListTeamDevicesError> {
        self.client.call(&routes::DEVICES_LIST_TEAM_DEVICES, arg).await
    }

    pub async fn devices_revoke_device_session(
        &self,
        arg: &RevokeDeviceSessionArg,
    ) -> CallResult<(), RevokeDeviceSessionError> {
        self.client.call(&routes::DEVICES_REVOKE_DEVICE_SESSION, arg).await
    }

    pub async fn devices_revoke_device_session_batch(
        &self,
        arg: &RevokeDeviceSessionBatchArg,
    ) -> CallResult<RevokeDeviceSessionBatchResult, RevokeDeviceSessionBatchError> {
        self.client.call(&routes::DEVICES_REVOKE_DEVICE_SESSION_BATCH, arg).await
    }

    /// Sessions of every member, sending each returned cursor back to the same route.
    pub async fn devices_list_members_devices_all(
        &self,
        arg: &ListMembersDevicesArg,
    ) -> Result<Vec<MemberDevices>, PageError<ListMembersDevicesError, ListMembersDevicesError>> {
        pagination::collect_same_route(self.client, &routes::DEVICES_LIST_MEMBERS_DEVICES, arg).await
    }
}
