//! Third-party apps linked to member accounts.

use super::routes;
use super::TeamApi;
use crate::client::CallResult;
use crate::pagination::{self, ContinueArg, Cursor, ListPage, PageError, Paginated};
use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiApp {
    pub app_id: String,
    pub app_name: String,
    pub is_app_folder: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListMemberAppsArg {
    pub team_member_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListMemberAppsResult {
    pub linked_api_apps: Vec<ApiApp>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum ListMemberAppsError {
    MemberNotFound,
    Other,
}

/// Argument of the team-wide app listings, which page through the same route.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListAppsArg {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<Cursor>,
}

pub type ListMembersAppsArg = ListAppsArg;
pub type ListTeamAppsArg = ListAppsArg;

impl ContinueArg for ListAppsArg {
    fn from_cursor(cursor: Cursor) -> Self {
        Self {
            cursor: Some(cursor),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MemberLinkedApps {
    pub team_member_id: String,
    pub linked_api_apps: Vec<ApiApp>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListAppsResult {
    pub apps: Vec<MemberLinkedApps>,
    pub has_more: bool,
    #[serde(default)]
    pub cursor: Option<Cursor>,
}

pub type ListMembersAppsResult = ListAppsResult;
pub type ListTeamAppsResult = ListAppsResult;

impl Paginated for ListAppsResult {
    type Item = MemberLinkedApps;

    fn into_page(self) -> ListPage<MemberLinkedApps> {
        ListPage {
            items: self.apps,
            cursor: self.cursor,
            has_more: self.has_more,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum ListMembersAppsError {
    Reset,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum ListTeamAppsError {
    Reset,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevokeLinkedApiAppArg {
    pub app_id: String,
    pub team_member_id: String,
    /// Leave the app's folder in the member's account.
    #[serde(default = "default_true")]
    pub keep_app_folder: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum RevokeLinkedAppError {
    AppNotFound,
    MemberNotFound,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevokeLinkedApiAppBatchArg {
    pub revoke_linked_app: Vec<RevokeLinkedApiAppArg>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RevokeLinkedAppStatus {
    pub success: bool,
    #[serde(default)]
    pub error_type: Option<RevokeLinkedAppError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RevokeLinkedAppBatchResult {
    pub revoke_linked_app_status: Vec<RevokeLinkedAppStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum RevokeLinkedAppBatchError {
    Other,
}

impl<'c> TeamApi<'c> {
    pub async fn linked_apps_list_member_linked_apps(
        &self,
        arg: &ListMemberAppsArg,
    ) -> CallResult<ListMemberAppsResult, ListMemberAppsError> {
        self.client.call(&routes::LINKED_APPS_LIST_MEMBER_LINKED_APPS, arg).await
    }

    pub async fn linked_apps_list_members_linked_apps(
        &self,
        arg: &ListMembersAppsArg,
    ) -> CallResult<ListMembersAppsResult, ListMembersAppsError> {
        self.client.call(&routes::LINKED_APPS_LIST_MEMBERS_LINKED_APPS, arg).await
    }

    pub async fn linked_apps_list_team_linked_apps(
        &self,
        arg: &ListTeamAppsArg,
    ) -> CallResult<ListTeamAppsResult, ListTeamAppsError> {
        self.client.call(&routes::LINKED_APPS_LIST_TEAM_LINKED_APPS, arg).await
    }

    pub async fn linked_apps_revoke_linked_app(
        &self,
        arg: &RevokeLinkedApiAppArg,
    ) -> CallResult<(), RevokeLinkedAppError> {
        self.client.call(&routes::LINKED_APPS_REVOKE_LINKED_APP, arg).await
    }

    pub async fn linked_apps_revoke_linked_app_batch(
        &self,
        arg: &RevokeLinkedApiAppBatchArg,
    ) -> CallResult<RevokeLinkedAppBatchResult, RevokeLinkedAppBatchError> {
        self.client.call(&routes::LINKED_APPS_REVOKE_LINKED_APP_BATCH, arg).await
    }

    /// Linked apps of every member, sending each returned cursor back to the same route.
    pub async fn linked_apps_list_members_linked_apps_all(
        &self,
        arg: &ListMembersAppsArg,
    ) -> Result<Vec<MemberLinkedApps>, PageError<ListMembersAppsError, ListMembersAppsError>> {
        pagination::collect_same_route(self.client, &routes::LINKED_APPS_LIST_MEMBERS_LINKED_APPS, arg).await
    }
}
