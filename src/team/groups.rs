//! Group management, including the `alpha/groups/*` preview routes.

use super::common::{
    GroupAccessType, GroupManagementType, GroupSelector, GroupSummary, GroupsSelector,
    MemberProfile, UserSelectorArg,
};
use super::routes;
use super::TeamApi;
use crate::async_job::{AsyncJob, LaunchEmptyResult, NoFailure, PollArg, PollEmptyResult};
use crate::client::CallResult;
use crate::error::NoRouteError;
use crate::pagination::{self, Cursor, CursorArg, ListPage, PageError, Paginated};
use serde::{Deserialize, Serialize};

/// Tracker for jobs polled through `groups/job_status/get`.
pub type GroupsJob<'c> = AsyncJob<'c, (), NoFailure, GroupsPollError>;

/// Default page size of the group listings.
pub const DEFAULT_LIST_LIMIT: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupCreateArg {
    pub group_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_external_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_management_type: Option<GroupManagementType>,
}

impl GroupCreateArg {
    pub fn new(group_name: impl Into<String>) -> Self {
        Self {
            group_name: group_name.into(),
            group_external_id: None,
            group_management_type: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMemberInfo {
    pub profile: MemberProfile,
    pub access_type: GroupAccessType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupFullInfo {
    pub group_name: String,
    pub group_id: String,
    pub group_management_type: GroupManagementType,
    /// Milliseconds since the epoch.
    pub created: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_external_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<GroupMemberInfo>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum GroupCreateError {
    GroupNameAlreadyUsed,
    GroupNameInvalid,
    ExternalIdAlreadyInUse,
    SystemManagedGroupDisallowed,
    Other,
}

/// One entry of `groups/get_info`, in request order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum GroupsGetInfoItem {
    IdNotFound { id_not_found: String },
    GroupInfo(GroupFullInfo),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum GroupsGetInfoError {
    GroupNotOnTeam,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupsListArg {
    pub limit: u32,
}

impl Default for GroupsListArg {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIST_LIMIT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GroupsListResult {
    pub groups: Vec<GroupSummary>,
    pub cursor: Cursor,
    pub has_more: bool,
}

impl Paginated for GroupsListResult {
    type Item = GroupSummary;

    fn into_page(self) -> ListPage<GroupSummary> {
        ListPage {
            items: self.groups,
            cursor: Some(self.cursor),
            has_more: self.has_more,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum GroupsListContinueError {
    InvalidCursor,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupUpdateArgs {
    pub group: GroupSelector,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_group_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_group_external_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_group_management_type: Option<GroupManagementType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum GroupUpdateError {
    GroupNotFound,
    Other,
    SystemManagedGroupDisallowed,
    GroupNameAlreadyUsed,
    GroupNameInvalid,
    ExternalIdAlreadyInUse,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum GroupDeleteError {
    GroupNotFound,
    Other,
    SystemManagedGroupDisallowed,
    GroupAlreadyDeleted,
}

/// `409` error of `groups/job_status/get`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum GroupsPollError {
    InvalidAsyncJobId,
    InternalError,
    Other,
    /// The caller may not access this job's group.
    AccessDenied,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberAccess {
    pub user: UserSelectorArg,
    pub access_type: GroupAccessType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMembersAddArg {
    pub group: GroupSelector,
    pub members: Vec<MemberAccess>,
    pub return_members: bool,
}

/// Result of a membership change.
///
/// The group info is immediate; the change itself finishes under `async_job_id`,
/// polled through `groups/job_status/get`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GroupMembersChangeResult {
    pub group_info: GroupFullInfo,
    pub async_job_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum GroupMembersAddError {
    GroupNotFound,
    Other,
    SystemManagedGroupDisallowed,
    DuplicateUser,
    GroupNotInTeam,
    MembersNotInTeam { members_not_in_team: Vec<String> },
    UsersNotFound { users_not_found: Vec<String> },
    UserMustBeActiveToBeOwner,
    UserCannotBeManagerOfCompanyManagedGroup {
        user_cannot_be_manager_of_company_managed_group: Vec<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupsMembersListArg {
    pub group: GroupSelector,
    pub limit: u32,
}

impl GroupsMembersListArg {
    pub fn new(group: GroupSelector) -> Self {
        Self {
            group,
            limit: DEFAULT_LIST_LIMIT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GroupsMembersListResult {
    pub members: Vec<GroupMemberInfo>,
    pub cursor: Cursor,
    pub has_more: bool,
}

impl Paginated for GroupsMembersListResult {
    type Item = GroupMemberInfo;

    fn into_page(self) -> ListPage<GroupMemberInfo> {
        ListPage {
            items: self.members,
            cursor: Some(self.cursor),
            has_more: self.has_more,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum GroupSelectorError {
    GroupNotFound,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum GroupsMembersListContinueError {
    InvalidCursor,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMembersRemoveArg {
    pub group: GroupSelector,
    pub users: Vec<UserSelectorArg>,
    pub return_members: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum GroupMembersRemoveError {
    GroupNotFound,
    Other,
    SystemManagedGroupDisallowed,
    MemberNotInGroup,
    GroupNotInTeam,
    MembersNotInTeam { members_not_in_team: Vec<String> },
    UsersNotFound { users_not_found: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMembersSetAccessTypeArg {
    pub group: GroupSelector,
    pub user: UserSelectorArg,
    pub access_type: GroupAccessType,
    pub return_members: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum GroupMemberSetAccessTypeError {
    GroupNotFound,
    Other,
    SystemManagedGroupDisallowed,
    MemberNotInGroup,
    UserCannotBeManagerOfCompanyManagedGroup,
}

impl<'c> TeamApi<'c> {
    pub async fn alpha_groups_create(&self, arg: &GroupCreateArg) -> CallResult<GroupFullInfo, GroupCreateError> {
        self.client.call(&routes::ALPHA_GROUPS_CREATE, arg).await
    }

    pub async fn alpha_groups_get_info(
        &self,
        arg: &GroupsSelector,
    ) -> CallResult<Vec<GroupsGetInfoItem>, GroupsGetInfoError> {
        self.client.call(&routes::ALPHA_GROUPS_GET_INFO, arg).await
    }

    pub async fn alpha_groups_list(&self, arg: &GroupsListArg) -> CallResult<GroupsListResult, NoRouteError> {
        self.client.call(&routes::ALPHA_GROUPS_LIST, arg).await
    }

    pub async fn alpha_groups_list_continue(
        &self,
        arg: &CursorArg,
    ) -> CallResult<GroupsListResult, GroupsListContinueError> {
        self.client.call(&routes::ALPHA_GROUPS_LIST_CONTINUE, arg).await
    }

    pub async fn alpha_groups_update(&self, arg: &GroupUpdateArgs) -> CallResult<GroupFullInfo, GroupUpdateError> {
        self.client.call(&routes::ALPHA_GROUPS_UPDATE, arg).await
    }

    pub async fn groups_create(&self, arg: &GroupCreateArg) -> CallResult<GroupFullInfo, GroupCreateError> {
        self.client.call(&routes::GROUPS_CREATE, arg).await
    }

    /// Deleting a group may finish asynchronously; see [`TeamApi::groups_delete_job`].
    pub async fn groups_delete(&self, arg: &GroupSelector) -> CallResult<LaunchEmptyResult, GroupDeleteError> {
        self.client.call(&routes::GROUPS_DELETE, arg).await
    }

    pub async fn groups_get_info(
        &self,
        arg: &GroupsSelector,
    ) -> CallResult<Vec<GroupsGetInfoItem>, GroupsGetInfoError> {
        self.client.call(&routes::GROUPS_GET_INFO, arg).await
    }

    pub async fn groups_job_status_get(
        &self,
        arg: &PollArg,
    ) -> CallResult<PollEmptyResult, GroupsPollError> {
        self.client.call(&routes::GROUPS_JOB_STATUS_GET, arg).await
    }

    pub async fn groups_list(&self, arg: &GroupsListArg) -> CallResult<GroupsListResult, NoRouteError> {
        self.client.call(&routes::GROUPS_LIST, arg).await
    }

    pub async fn groups_list_continue(
        &self,
        arg: &CursorArg,
    ) -> CallResult<GroupsListResult, GroupsListContinueError> {
        self.client.call(&routes::GROUPS_LIST_CONTINUE, arg).await
    }

    pub async fn groups_members_add(
        &self,
        arg: &GroupMembersAddArg,
    ) -> CallResult<GroupMembersChangeResult, GroupMembersAddError> {
        self.client.call(&routes::GROUPS_MEMBERS_ADD, arg).await
    }

    pub async fn groups_members_list(
        &self,
        arg: &GroupsMembersListArg,
    ) -> CallResult<GroupsMembersListResult, GroupSelectorError> {
        self.client.call(&routes::GROUPS_MEMBERS_LIST, arg).await
    }

    pub async fn groups_members_list_continue(
        &self,
        arg: &CursorArg,
    ) -> CallResult<GroupsMembersListResult, GroupsMembersListContinueError> {
        self.client.call(&routes::GROUPS_MEMBERS_LIST_CONTINUE, arg).await
    }

    pub async fn groups_members_remove(
        &self,
        arg: &GroupMembersRemoveArg,
    ) -> CallResult<GroupMembersChangeResult, GroupMembersRemoveError> {
        self.client.call(&routes::GROUPS_MEMBERS_REMOVE, arg).await
    }

    pub async fn groups_members_set_access_type(
        &self,
        arg: &GroupMembersSetAccessTypeArg,
    ) -> CallResult<Vec<GroupsGetInfoItem>, GroupMemberSetAccessTypeError> {
        self.client.call(&routes::GROUPS_MEMBERS_SET_ACCESS_TYPE, arg).await
    }

    pub async fn groups_update(&self, arg: &GroupUpdateArgs) -> CallResult<GroupFullInfo, GroupUpdateError> {
        self.client.call(&routes::GROUPS_UPDATE, arg).await
    }

    /// Delete a group and track the deletion through `groups/job_status/get`.
    pub async fn groups_delete_job(&self, arg: &GroupSelector) -> CallResult<GroupsJob<'c>, GroupDeleteError> {
        let launch = self.groups_delete(arg).await?;
        Ok(AsyncJob::from_launch(self.client, routes::GROUPS_JOB_STATUS_GET, launch))
    }

    /// Track the async part of a membership change.
    pub fn groups_change_job(&self, change: &GroupMembersChangeResult) -> GroupsJob<'c> {
        AsyncJob::resume(self.client, routes::GROUPS_JOB_STATUS_GET, change.async_job_id.as_str())
    }

    /// Every group on the team, following continuation cursors.
    pub async fn groups_list_all(
        &self,
        arg: &GroupsListArg,
    ) -> Result<Vec<GroupSummary>, PageError<NoRouteError, GroupsListContinueError>> {
        pagination::collect_all(self.client, &routes::GROUPS_LIST, arg, routes::GROUPS_LIST_CONTINUE).await
    }

    /// Every member of one group, following continuation cursors.
    pub async fn groups_members_list_all(
        &self,
        arg: &GroupsMembersListArg,
    ) -> Result<Vec<GroupMemberInfo>, PageError<GroupSelectorError, GroupsMembersListContinueError>> {
        pagination::collect_all(
            self.client,
            &routes::GROUPS_MEMBERS_LIST,
            arg,
            routes::GROUPS_MEMBERS_LIST_CONTINUE,
        )
        .await
    }
}
